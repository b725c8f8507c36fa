/// Gallery Service - HTTP Server
///
/// Serves the image generation gateway and the community gallery API.
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use gallery_service::db::{self, GalleryStore, PgGalleryStore};
use gallery_service::handlers;
use gallery_service::providers::StableDiffusionClient;
use gallery_service::services::{ObjectStorage, S3Storage};
use gallery_service::Config;
use sqlx::postgres::PgPoolOptions;
use std::io;
use std::sync::Arc;

/// Inline data-URL payloads for 1024x1024 images overflow the default
/// JSON body limit.
const JSON_PAYLOAD_LIMIT: usize = 50 * 1024 * 1024;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");

    let bind_address = format!("{}:{}", config.app.host, config.app.port);

    // Initialize database connection pool
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    db::ensure_posts_table(&db_pool)
        .await
        .expect("Failed to ensure posts table");

    if config.inference.api_key.is_none() {
        tracing::warn!("HF_API_KEY not set; the inference provider will reject generation requests");
    }

    let provider = web::Data::new(StableDiffusionClient::new(&config.inference));

    let storage: Arc<dyn ObjectStorage> = Arc::new(
        S3Storage::new(config.s3.clone())
            .await
            .expect("Failed to initialize object storage"),
    );
    let store: Arc<dyn GalleryStore> = Arc::new(PgGalleryStore::new(db_pool));

    tracing::info!(%bind_address, env = %config.app.env, "Gallery service starting");

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::JsonConfig::default().limit(JSON_PAYLOAD_LIMIT))
            .app_data(provider.clone())
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(storage.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .route(
                "/api/v1/health",
                web::get()
                    .to(|| async { HttpResponse::Ok().json(serde_json::json!({"status": "ok"})) }),
            )
            .service(
                web::scope("/api/v1")
                    .route("/dalle", web::post().to(handlers::generate_image))
                    .route("/post", web::post().to(handlers::create_post))
                    .route("/post", web::get().to(handlers::list_posts)),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
