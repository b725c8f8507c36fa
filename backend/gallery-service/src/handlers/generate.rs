/// Generation handler - HTTP endpoint for the image generation gateway
///
/// Errors on this route are plain text; success is the raw image body.
use actix_web::{web, HttpResponse};

use crate::models::GenerateImageRequest;
use crate::providers::StableDiffusionClient;

/// Generate an image from a prompt
pub async fn generate_image(
    provider: web::Data<StableDiffusionClient>,
    req: web::Json<GenerateImageRequest>,
) -> HttpResponse {
    let prompt = req.prompt.as_deref().unwrap_or("").trim();
    if prompt.is_empty() {
        return HttpResponse::BadRequest()
            .content_type("text/plain")
            .body("Valid prompt is required");
    }

    match provider.generate(prompt).await {
        Ok(bytes) => HttpResponse::Ok().content_type("image/png").body(bytes),
        Err(err) => {
            tracing::error!(error = %err, "Image generation failed");
            HttpResponse::InternalServerError()
                .content_type("text/plain")
                .body(err.to_string())
        }
    }
}
