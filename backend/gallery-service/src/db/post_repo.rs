use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::GalleryStore;
use crate::error::Result;
use crate::models::{NewPost, Post};

/// PostgreSQL-backed gallery store
pub struct PgGalleryStore {
    pool: PgPool,
}

impl PgGalleryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GalleryStore for PgGalleryStore {
    async fn insert_post(&self, new_post: NewPost) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (name, prompt, photo)
            VALUES ($1, $2, $3)
            RETURNING id, name, prompt, photo, created_at
            "#,
        )
        .bind(&new_post.name)
        .bind(&new_post.prompt)
        .bind(&new_post.photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, name, prompt, photo, created_at
            FROM posts
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
