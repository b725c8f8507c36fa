/// Persistence layer for gallery-service
use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewPost, Post};

pub mod post_repo;
pub mod schema;

pub use post_repo::PgGalleryStore;
pub use schema::ensure_posts_table;

/// The gallery's document store
///
/// Posts are append-only: create and list are the only operations.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    /// Append one immutable post
    async fn insert_post(&self, new_post: NewPost) -> Result<Post>;

    /// All persisted posts in insertion order
    async fn list_posts(&self) -> Result<Vec<Post>>;
}
