use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    Normal,
    Warmup,
    Dropset,
    Failure,
}

/// One performed or planned set within a workout-exercise entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub set_number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Seconds, for time-based sets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Reps in reserve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rir: Option<i32>,
    pub set_type: SetType,
    pub completed: bool,
    /// Seconds of rest after the set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<i32>,
}

/// Links an exercise into a workout at an ordered position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub sets: Vec<WorkoutSet>,
    pub order: i32,
    pub is_superset: bool,
    pub superset_group_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutExercise {
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub sets: Vec<WorkoutSet>,
    pub order: i32,
    pub is_superset: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superset_group_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorkoutExercise {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<Vec<WorkoutSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superset_group_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
