use uuid::Uuid;

use crate::client::{Order, Query, SupabaseClient};
use crate::error::Result;
use crate::models::{
    CreateExercise, DifficultyLevel, Exercise, ExerciseCategory, UpdateExercise,
};

const TABLE: &str = "exercises";

/// Optional narrowing for exercise lists and searches. Each supplied field
/// becomes one equality filter on the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseFilter {
    pub category: Option<ExerciseCategory>,
    pub user_id: Option<Uuid>,
    pub is_system: Option<bool>,
}

impl ExerciseFilter {
    fn apply(&self, mut query: Query) -> Query {
        if let Some(category) = self.category {
            query = query.eq("category", category.as_str());
        }
        if let Some(user_id) = self.user_id {
            query = query.eq("user_id", user_id);
        }
        if let Some(is_system) = self.is_system {
            query = query.eq("is_system", is_system);
        }
        query
    }
}

#[derive(Clone)]
pub struct ExerciseService {
    client: SupabaseClient,
}

impl ExerciseService {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// Exercises matching the filter, name ascending. An empty filter lists
    /// everything visible, system exercises included.
    pub async fn get_exercises(&self, filter: ExerciseFilter) -> Result<Vec<Exercise>> {
        self.client
            .select(
                TABLE,
                filter.apply(Query::new()).order("name", Order::Ascending),
            )
            .await
    }

    pub async fn get_exercise_by_id(&self, exercise_id: Uuid) -> Result<Exercise> {
        self.client
            .select_one(TABLE, Query::new().eq("id", exercise_id))
            .await
    }

    pub async fn create_exercise(&self, exercise: CreateExercise) -> Result<Exercise> {
        self.client.insert(TABLE, &exercise).await
    }

    pub async fn update_exercise(
        &self,
        exercise_id: Uuid,
        updates: UpdateExercise,
    ) -> Result<Exercise> {
        self.client
            .update(TABLE, Query::new().eq("id", exercise_id), &updates)
            .await
    }

    pub async fn delete_exercise(&self, exercise_id: Uuid) -> Result<()> {
        self.client
            .delete(TABLE, Query::new().eq("id", exercise_id))
            .await
    }

    /// Case-insensitive substring search on the exercise name, narrowed by
    /// the same filters as [`ExerciseService::get_exercises`].
    pub async fn search_exercises(
        &self,
        search_term: &str,
        filter: ExerciseFilter,
    ) -> Result<Vec<Exercise>> {
        self.client
            .select(
                TABLE,
                filter
                    .apply(Query::new().ilike("name", search_term))
                    .order("name", Order::Ascending),
            )
            .await
    }

    /// Exercises whose muscle-group set contains `muscle_group`.
    pub async fn get_exercises_by_muscle_group(
        &self,
        muscle_group: &str,
    ) -> Result<Vec<Exercise>> {
        self.client
            .select(
                TABLE,
                Query::new()
                    .contains("muscle_groups", muscle_group)
                    .order("name", Order::Ascending),
            )
            .await
    }

    pub async fn get_exercises_by_difficulty(
        &self,
        difficulty_level: DifficultyLevel,
    ) -> Result<Vec<Exercise>> {
        self.client
            .select(
                TABLE,
                Query::new()
                    .eq("difficulty_level", difficulty_level.as_str())
                    .order("name", Order::Ascending),
            )
            .await
    }
}
