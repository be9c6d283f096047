//! Object-storage operations on the same backend endpoint.

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use super::SupabaseClient;
use crate::error::Result;

impl SupabaseClient {
    /// Upload an object into `bucket` under `key`.
    pub async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<()> {
        let response = self
            .request(Method::POST, &self.object_url(bucket, key))
            .header(CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Remove an object from `bucket`.
    pub async fn remove_object(&self, bucket: &str, key: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &self.object_url(bucket, key))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// The publicly resolvable download URL for an object.
    pub fn public_object_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url(),
            bucket,
            key
        )
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url(), bucket, key)
    }
}
