use uuid::Uuid;

use crate::client::{Query, SupabaseClient};
use crate::error::Result;
use crate::models::{CreateUser, Preferences, UpdateUser, User};

const TABLE: &str = "users";

#[derive(Clone)]
pub struct UserService {
    client: SupabaseClient,
}

impl UserService {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// Fetch a user's account row. The row must exist.
    pub async fn get_user(&self, user_id: Uuid) -> Result<User> {
        self.client
            .select_one(TABLE, Query::new().eq("id", user_id))
            .await
    }

    pub async fn create_user(&self, user: CreateUser) -> Result<User> {
        self.client.insert(TABLE, &user).await
    }

    pub async fn update_user(&self, user_id: Uuid, updates: UpdateUser) -> Result<User> {
        self.client
            .update(TABLE, Query::new().eq("id", user_id), &updates)
            .await
    }

    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        preferences: Preferences,
    ) -> Result<User> {
        let updates = UpdateUser {
            preferences: Some(preferences),
            ..UpdateUser::default()
        };
        self.update_user(user_id, updates).await
    }

    pub async fn delete_user(&self, user_id: Uuid) -> Result<()> {
        self.client
            .delete(TABLE, Query::new().eq("id", user_id))
            .await
    }
}
