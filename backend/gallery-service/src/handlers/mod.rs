/// HTTP handlers for gallery-service
pub mod generate;
pub mod posts;

pub use generate::generate_image;
pub use posts::{create_post, list_posts};
