/// Data models for gallery-service
///
/// This module defines structures for:
/// - Post: a published (name, prompt, hosted image URL) tuple
/// - Request DTOs for the generation and ingestion endpoints
/// - The response envelopes used by the JSON endpoints
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gallery post database entity
///
/// Immutable after creation; `photo` holds the hosted URL returned by
/// object storage, never the raw image bytes.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub name: String,
    pub prompt: String,
    pub photo: String,
    pub created_at: DateTime<Utc>,
}

/// Fields of a post before it has been persisted
#[derive(Debug, Clone)]
pub struct NewPost {
    pub name: String,
    pub prompt: String,
    pub photo: String,
}

/// Request body for the generation endpoint
///
/// `prompt` is optional so a missing field reaches the handler and gets
/// the contract's validation message instead of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: Option<String>,
}

/// Request body for the ingestion endpoint; `photo` is a data-URL string
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub name: Option<String>,
    pub prompt: Option<String>,
    pub photo: Option<String>,
}

/// Success envelope: `{ "success": true, "data": … }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope: `{ "success": false, "message": … }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}
