use chrono::Utc;
use uuid::Uuid;

use crate::client::{Order, Query, SupabaseClient};
use crate::error::Result;
use crate::models::{CreateGoal, Goal, GoalStatus, MetricType, UpdateGoal};

const TABLE: &str = "goals";

#[derive(Clone)]
pub struct GoalService {
    client: SupabaseClient,
}

impl GoalService {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// All of a user's goals, nearest target date first.
    pub async fn get_goals(&self, user_id: Uuid) -> Result<Vec<Goal>> {
        self.client
            .select(
                TABLE,
                Query::new()
                    .eq("user_id", user_id)
                    .order("target_date", Order::Ascending),
            )
            .await
    }

    pub async fn get_goal_by_id(&self, goal_id: Uuid) -> Result<Goal> {
        self.client
            .select_one(TABLE, Query::new().eq("id", goal_id))
            .await
    }

    pub async fn create_goal(&self, goal: CreateGoal) -> Result<Goal> {
        self.client.insert(TABLE, &goal).await
    }

    pub async fn update_goal(&self, goal_id: Uuid, updates: UpdateGoal) -> Result<Goal> {
        self.client
            .update(TABLE, Query::new().eq("id", goal_id), &updates)
            .await
    }

    pub async fn delete_goal(&self, goal_id: Uuid) -> Result<()> {
        self.client
            .delete(TABLE, Query::new().eq("id", goal_id))
            .await
    }

    pub async fn get_active_goals(&self, user_id: Uuid) -> Result<Vec<Goal>> {
        self.client
            .select(
                TABLE,
                Query::new()
                    .eq("user_id", user_id)
                    .eq("status", GoalStatus::InProgress.as_str())
                    .order("target_date", Order::Ascending),
            )
            .await
    }

    pub async fn get_completed_goals(&self, user_id: Uuid) -> Result<Vec<Goal>> {
        self.client
            .select(
                TABLE,
                Query::new()
                    .eq("user_id", user_id)
                    .eq("status", GoalStatus::Completed.as_str())
                    .order("target_date", Order::Descending),
            )
            .await
    }

    /// Goals still in progress whose target date has already passed.
    pub async fn get_overdue_goals(&self, user_id: Uuid) -> Result<Vec<Goal>> {
        let today = Utc::now().date_naive();

        self.client
            .select(
                TABLE,
                Query::new()
                    .eq("user_id", user_id)
                    .eq("status", GoalStatus::InProgress.as_str())
                    .lt("target_date", today)
                    .order("target_date", Order::Ascending),
            )
            .await
    }

    pub async fn get_goals_by_metric_type(
        &self,
        user_id: Uuid,
        metric_type: MetricType,
    ) -> Result<Vec<Goal>> {
        self.client
            .select(
                TABLE,
                Query::new()
                    .eq("user_id", user_id)
                    .eq("metric_type", metric_type.as_str())
                    .order("target_date", Order::Ascending),
            )
            .await
    }

    /// Move a goal to a new status, optionally recording the value it
    /// reached, in a single patch.
    pub async fn update_goal_status(
        &self,
        goal_id: Uuid,
        status: GoalStatus,
        current_value: Option<f64>,
    ) -> Result<Goal> {
        let updates = UpdateGoal {
            status: Some(status),
            current_value,
            ..UpdateGoal::default()
        };
        self.update_goal(goal_id, updates).await
    }
}
