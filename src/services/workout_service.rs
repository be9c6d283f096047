use chrono::NaiveDate;
use uuid::Uuid;

use crate::client::{Order, Query, SupabaseClient};
use crate::error::Result;
use crate::models::{
    CreateWorkout, CreateWorkoutExercise, UpdateWorkout, UpdateWorkoutExercise, Workout,
    WorkoutExercise, WorkoutStatus, WorkoutWithExercises,
};

const WORKOUTS: &str = "workouts";
const WORKOUT_EXERCISES: &str = "workout_exercises";

#[derive(Clone)]
pub struct WorkoutService {
    client: SupabaseClient,
}

impl WorkoutService {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// All of a user's workouts, newest first.
    pub async fn get_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>> {
        self.client
            .select(
                WORKOUTS,
                Query::new()
                    .eq("user_id", user_id)
                    .order("date", Order::Descending),
            )
            .await
    }

    /// Workouts dated within `[start_date, end_date]`, newest first.
    pub async fn get_workouts_by_date_range(
        &self,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Workout>> {
        self.client
            .select(
                WORKOUTS,
                Query::new()
                    .eq("user_id", user_id)
                    .gte("date", start_date)
                    .lte("date", end_date)
                    .order("date", Order::Descending),
            )
            .await
    }

    pub async fn get_workouts_by_status(
        &self,
        user_id: Uuid,
        status: WorkoutStatus,
    ) -> Result<Vec<Workout>> {
        self.client
            .select(
                WORKOUTS,
                Query::new()
                    .eq("user_id", user_id)
                    .eq("status", status.as_str())
                    .order("date", Order::Descending),
            )
            .await
    }

    /// A workout together with its exercise entries in position order.
    pub async fn get_workout_by_id(&self, workout_id: Uuid) -> Result<WorkoutWithExercises> {
        let workout: Workout = self
            .client
            .select_one(WORKOUTS, Query::new().eq("id", workout_id))
            .await?;

        let exercises = self
            .client
            .select(
                WORKOUT_EXERCISES,
                Query::new()
                    .eq("workout_id", workout_id)
                    .order("order", Order::Ascending),
            )
            .await?;

        Ok(WorkoutWithExercises { workout, exercises })
    }

    pub async fn create_workout(&self, workout: CreateWorkout) -> Result<Workout> {
        self.client.insert(WORKOUTS, &workout).await
    }

    pub async fn update_workout(
        &self,
        workout_id: Uuid,
        updates: UpdateWorkout,
    ) -> Result<Workout> {
        self.client
            .update(WORKOUTS, Query::new().eq("id", workout_id), &updates)
            .await
    }

    pub async fn update_workout_status(
        &self,
        workout_id: Uuid,
        status: WorkoutStatus,
    ) -> Result<Workout> {
        let updates = UpdateWorkout {
            status: Some(status),
            ..UpdateWorkout::default()
        };
        self.update_workout(workout_id, updates).await
    }

    /// Remove a workout and its exercise entries.
    ///
    /// The entries are deleted first; the workout row is only touched once
    /// that step has succeeded. A failure on the first call aborts the whole
    /// operation and surfaces that error, leaving the workout row in place.
    pub async fn delete_workout(&self, workout_id: Uuid) -> Result<()> {
        self.client
            .delete(
                WORKOUT_EXERCISES,
                Query::new().eq("workout_id", workout_id),
            )
            .await?;

        self.client
            .delete(WORKOUTS, Query::new().eq("id", workout_id))
            .await
    }

    pub async fn add_exercise_to_workout(
        &self,
        entry: CreateWorkoutExercise,
    ) -> Result<WorkoutExercise> {
        self.client.insert(WORKOUT_EXERCISES, &entry).await
    }

    /// Patch one exercise entry, scoped by both the workout and the entry id.
    pub async fn update_workout_exercise(
        &self,
        workout_id: Uuid,
        entry_id: Uuid,
        updates: UpdateWorkoutExercise,
    ) -> Result<WorkoutExercise> {
        self.client
            .update(
                WORKOUT_EXERCISES,
                Query::new().eq("workout_id", workout_id).eq("id", entry_id),
                &updates,
            )
            .await
    }

    pub async fn remove_exercise_from_workout(
        &self,
        workout_id: Uuid,
        entry_id: Uuid,
    ) -> Result<()> {
        self.client
            .delete(
                WORKOUT_EXERCISES,
                Query::new().eq("workout_id", workout_id).eq("id", entry_id),
            )
            .await
    }
}
