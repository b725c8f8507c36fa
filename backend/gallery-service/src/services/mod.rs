/// Business logic layer for gallery-service
///
/// This module provides high-level operations:
/// - Post service: the decode → upload → persist ingestion pipeline
/// - Storage: the object-storage seam and its S3 implementation
pub mod posts;
pub mod storage;

// Re-export commonly used services
pub use posts::PostService;
pub use storage::{ObjectStorage, S3Storage};
