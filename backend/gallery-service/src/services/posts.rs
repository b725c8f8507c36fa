/// Post service - the ingestion pipeline for new gallery posts
use std::sync::Arc;

use uuid::Uuid;

use crate::data_url::{self, DecodedImage};
use crate::db::GalleryStore;
use crate::error::Result;
use crate::models::{NewPost, Post};
use crate::services::ObjectStorage;

pub struct PostService {
    store: Arc<dyn GalleryStore>,
    storage: Arc<dyn ObjectStorage>,
}

impl PostService {
    pub fn new(store: Arc<dyn GalleryStore>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { store, storage }
    }

    /// Create a post from an inline image payload.
    ///
    /// The pipeline is strictly sequential: decode the data URL, await the
    /// upload, then persist. The row is only written after the upload has
    /// confirmed a URL, so a failed upload leaves no partial post behind.
    pub async fn create_post(&self, name: &str, prompt: &str, photo: &str) -> Result<Post> {
        let image = data_url::parse(photo)?;

        let key = format!("posts/{}.{}", Uuid::new_v4(), image.extension());
        let DecodedImage { mime_type, bytes } = image;
        let photo_url = self.storage.upload(&key, bytes, &mime_type).await?;

        let post = self
            .store
            .insert_post(NewPost {
                name: name.to_string(),
                prompt: prompt.to_string(),
                photo: photo_url,
            })
            .await?;

        tracing::info!(post_id = %post.id, key = %key, "Post created");

        Ok(post)
    }
}
