//! Shared fixtures for gallery-service integration tests
#![allow(dead_code)]

use actix_web::{test, web, App};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use gallery_service::db::GalleryStore;
use gallery_service::error::{AppError, Result};
use gallery_service::handlers;
use gallery_service::models::{NewPost, Post};
use gallery_service::services::ObjectStorage;

/// In-memory gallery store, append-only like the real one
#[derive(Default)]
pub struct MemoryGalleryStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryGalleryStore {
    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl GalleryStore for MemoryGalleryStore {
    async fn insert_post(&self, new_post: NewPost) -> Result<Post> {
        let post = Post {
            id: Uuid::new_v4(),
            name: new_post.name,
            prompt: new_post.prompt,
            photo: new_post.photo,
            created_at: Utc::now(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts())
    }
}

/// A recorded call to `ObjectStorage::upload`
#[derive(Debug, Clone)]
pub struct UploadRecord {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Object storage that records uploads and returns a fixed hosted URL
pub struct RecordingStorage {
    pub url: String,
    uploads: Mutex<Vec<UploadRecord>>,
}

impl RecordingStorage {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn uploads(&self) -> Vec<UploadRecord> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn upload(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> std::result::Result<String, AppError> {
        self.uploads.lock().unwrap().push(UploadRecord {
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        Ok(self.url.clone())
    }
}

/// Object storage whose uploads always fail
pub struct FailingStorage {
    pub message: String,
}

#[async_trait]
impl ObjectStorage for FailingStorage {
    async fn upload(
        &self,
        _key: &str,
        _body: Vec<u8>,
        _content_type: &str,
    ) -> std::result::Result<String, AppError> {
        Err(AppError::UploadError(self.message.clone()))
    }
}

/// Build the post routes over the given collaborators
pub async fn setup_post_app(
    store: Arc<dyn GalleryStore>,
    storage: Arc<dyn ObjectStorage>,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(store))
            .app_data(web::Data::new(storage))
            .service(
                web::scope("/api/v1")
                    .route("/post", web::post().to(handlers::create_post))
                    .route("/post", web::get().to(handlers::list_posts)),
            ),
    )
    .await
}
