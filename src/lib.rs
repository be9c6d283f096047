//! Typed data-access core for a fitness tracker.
//!
//! Every entity (users, workouts, exercises, progress entries, goals) gets a
//! thin stateless service that composes a filtered request against a hosted
//! data-and-storage backend and returns plain rows. There is no cache, no
//! retry layer, and no shared mutable state: each operation is one
//! request/response round trip.
//!
//! ```no_run
//! use fittrack_data::config::BackendConfig;
//! use fittrack_data::services::WorkoutService;
//!
//! # async fn run(user_id: uuid::Uuid) -> fittrack_data::Result<()> {
//! let client = BackendConfig::from_env()?.connect()?;
//! let workouts = WorkoutService::new(client);
//! let recent = workouts.get_workouts(user_id).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use client::SupabaseClient;
pub use config::BackendConfig;
pub use error::{Error, Result};
