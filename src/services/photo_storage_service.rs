use bytes::Bytes;
use chrono::Utc;
use mime::Mime;
use tracing::info;
use uuid::Uuid;

use crate::client::SupabaseClient;
use crate::error::{Error, Result};

const BUCKET: &str = "progress-photos";

/// Path marker separating the backend's public-URL prefix from the storage
/// key of an object in the progress-photo bucket.
const PUBLIC_MARKER: &str = "/object/public/progress-photos/";

/// Which side of the body a progress photo shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoAngle {
    Front,
    Back,
    Side,
}

impl PhotoAngle {
    pub fn as_str(self) -> &'static str {
        match self {
            PhotoAngle::Front => "front",
            PhotoAngle::Back => "back",
            PhotoAngle::Side => "side",
        }
    }
}

/// Service for managing progress photos in the backend's object storage
#[derive(Clone)]
pub struct PhotoStorageService {
    client: SupabaseClient,
}

impl PhotoStorageService {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    /// Upload a progress photo and return its public URL.
    ///
    /// The storage key is namespaced by user and upload time so repeated
    /// uploads never collide. Only `image/*` payloads are accepted.
    pub async fn upload_photo(
        &self,
        user_id: Uuid,
        data: Bytes,
        content_type: &str,
        angle: PhotoAngle,
    ) -> Result<String> {
        let mime = parse_image_type(content_type)?;
        let key = generate_storage_key(user_id, &mime, angle);

        info!(
            bucket = BUCKET,
            key = %key,
            size = data.len(),
            "uploading progress photo"
        );

        self.client
            .upload_object(BUCKET, &key, data, content_type)
            .await?;

        Ok(self.client.public_object_url(BUCKET, &key))
    }

    /// Delete a previously uploaded photo, addressed by its public URL.
    ///
    /// A URL that does not resolve to a key in the progress-photo bucket is
    /// rejected as invalid input rather than ignored.
    pub async fn delete_photo(&self, photo_url: &str) -> Result<()> {
        let key = storage_key_from_url(photo_url)?;

        info!(bucket = BUCKET, key = %key, "deleting progress photo");

        self.client.remove_object(BUCKET, key).await
    }
}

fn parse_image_type(content_type: &str) -> Result<Mime> {
    let mime: Mime = content_type
        .parse()
        .map_err(|_| Error::invalid_input(format!("unrecognized content type: {content_type}")))?;

    if mime.type_() != mime::IMAGE {
        return Err(Error::invalid_input(format!(
            "progress photos must be images, got {content_type}"
        )));
    }

    Ok(mime)
}

fn generate_storage_key(user_id: Uuid, mime: &Mime, angle: PhotoAngle) -> String {
    let extension = extension_for(mime);
    format!(
        "{}/{}_{}.{}",
        user_id,
        Utc::now().timestamp_millis(),
        angle.as_str(),
        extension
    )
}

fn extension_for(mime: &Mime) -> &'static str {
    match mime.subtype().as_str() {
        "jpeg" => "jpg",
        "png" => "png",
        "webp" => "webp",
        "heic" => "heic",
        _ => "jpg",
    }
}

fn storage_key_from_url(photo_url: &str) -> Result<&str> {
    photo_url
        .split_once(PUBLIC_MARKER)
        .map(|(_, key)| key)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| Error::invalid_input(format!("not a progress photo URL: {photo_url}")))
}
