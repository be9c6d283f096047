// Entity query modules

pub mod exercise_service;
pub mod goal_service;
pub mod photo_storage_service;
pub mod progress_service;
pub mod user_service;
pub mod workout_service;

pub use exercise_service::{ExerciseFilter, ExerciseService};
pub use goal_service::GoalService;
pub use photo_storage_service::{PhotoAngle, PhotoStorageService};
pub use progress_service::ProgressService;
pub use user_service::UserService;
pub use workout_service::WorkoutService;
