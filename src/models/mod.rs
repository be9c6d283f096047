// Entity rows and their insert/update payload shapes

pub mod exercise;
pub mod goal;
pub mod progress;
pub mod user;
pub mod workout;
pub mod workout_exercise;

pub use exercise::*;
pub use goal::*;
pub use progress::*;
pub use user::*;
pub use workout::*;
pub use workout_exercise::*;
