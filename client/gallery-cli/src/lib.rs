//! Gallery CLI
//!
//! Terminal client for the community gallery: generate an image for a
//! prompt, preview it locally, then share it with the community.

pub mod flow;
pub mod prompts;

pub use flow::{Post, PostComposer};
