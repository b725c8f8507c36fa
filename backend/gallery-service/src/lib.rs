//! Gallery Service
//!
//! Community image-sharing API: a prompt-to-image generation gateway,
//! post ingestion, and the shared gallery store.

pub mod config;
pub mod data_url;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod services;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
