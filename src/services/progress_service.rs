use chrono::NaiveDate;
use uuid::Uuid;

use crate::client::{Order, Query, SupabaseClient};
use crate::error::Result;
use crate::models::{CreateProgress, Progress, UpdateProgress};

const TABLE: &str = "progress";

#[derive(Clone)]
pub struct ProgressService {
    client: SupabaseClient,
}

impl ProgressService {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// All progress entries for a user, newest first.
    pub async fn get_progress(&self, user_id: Uuid) -> Result<Vec<Progress>> {
        self.client
            .select(
                TABLE,
                Query::new()
                    .eq("user_id", user_id)
                    .order("date", Order::Descending),
            )
            .await
    }

    /// Entries dated within `[start_date, end_date]`, newest first.
    pub async fn get_progress_by_date_range(
        &self,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Progress>> {
        self.client
            .select(
                TABLE,
                Query::new()
                    .eq("user_id", user_id)
                    .gte("date", start_date)
                    .lte("date", end_date)
                    .order("date", Order::Descending),
            )
            .await
    }

    pub async fn get_progress_by_id(&self, progress_id: Uuid) -> Result<Progress> {
        self.client
            .select_one(TABLE, Query::new().eq("id", progress_id))
            .await
    }

    /// The most recent entry, or `None` for a user with no entries yet.
    /// Having nothing recorded is not an error here.
    pub async fn get_latest_progress(&self, user_id: Uuid) -> Result<Option<Progress>> {
        self.client
            .select_maybe_one(
                TABLE,
                Query::new()
                    .eq("user_id", user_id)
                    .order("date", Order::Descending)
                    .limit(1),
            )
            .await
    }

    pub async fn create_progress(&self, progress: CreateProgress) -> Result<Progress> {
        self.client.insert(TABLE, &progress).await
    }

    pub async fn update_progress(
        &self,
        progress_id: Uuid,
        updates: UpdateProgress,
    ) -> Result<Progress> {
        self.client
            .update(TABLE, Query::new().eq("id", progress_id), &updates)
            .await
    }

    pub async fn delete_progress(&self, progress_id: Uuid) -> Result<()> {
        self.client
            .delete(TABLE, Query::new().eq("id", progress_id))
            .await
    }
}
