/// Post handlers - HTTP endpoints for the shared gallery
use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::db::GalleryStore;
use crate::error::{AppError, Result};
use crate::models::{CreatePostRequest, DataResponse};
use crate::services::{ObjectStorage, PostService};

/// Create a new gallery post from an inline image payload
pub async fn create_post(
    store: web::Data<Arc<dyn GalleryStore>>,
    storage: web::Data<Arc<dyn ObjectStorage>>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let name = req.name.as_deref().unwrap_or("").trim();
    let prompt = req.prompt.as_deref().unwrap_or("").trim();
    let photo = req.photo.as_deref().unwrap_or("").trim();

    if name.is_empty() || prompt.is_empty() || photo.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let service = PostService::new(store.get_ref().clone(), storage.get_ref().clone());
    let post = service.create_post(name, prompt, photo).await?;

    Ok(HttpResponse::Created().json(DataResponse::new(post)))
}

/// List all gallery posts
///
/// An empty gallery is a 404 rather than an empty success list; clients
/// special-case that response.
pub async fn list_posts(store: web::Data<Arc<dyn GalleryStore>>) -> Result<HttpResponse> {
    let posts = store.list_posts().await?;

    if posts.is_empty() {
        return Err(AppError::NotFound("No posts found".to_string()));
    }

    Ok(HttpResponse::Ok().json(DataResponse::new(posts)))
}
