/// Configuration management for gallery-service
///
/// Loads configuration from environment variables with sensible defaults.
/// Provider credentials are handed to the storage and inference components
/// at construction; nothing reads the environment after startup.
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub s3: S3Config,
    pub inference: InferenceConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub env: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub endpoint: Option<String>,
    /// Base URL for the publicly resolvable object URLs (e.g. a CDN
    /// domain). Falls back to the virtual-hosted S3 form when unset.
    pub public_base_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct InferenceConfig {
    pub api_key: Option<String>,
    /// Override for the inference endpoint; defaults to the hosted
    /// Stable Diffusion model when unset.
    pub endpoint: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            app: AppConfig {
                host: std::env::var("GALLERY_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("GALLERY_SERVICE_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string()),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/gallery".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            },
            s3: S3Config {
                bucket: std::env::var("S3_BUCKET").unwrap_or_else(|_| "gallery-uploads".to_string()),
                region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
                secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
                endpoint: std::env::var("S3_ENDPOINT").ok(),
                public_base_url: std::env::var("S3_PUBLIC_BASE_URL").ok(),
            },
            inference: InferenceConfig {
                api_key: std::env::var("HF_API_KEY").ok(),
                endpoint: std::env::var("INFERENCE_ENDPOINT").ok(),
            },
        })
    }
}

impl S3Config {
    /// Publicly resolvable URL for a stored object
    pub fn public_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s3_config(public_base_url: Option<&str>) -> S3Config {
        S3Config {
            bucket: "gallery-uploads".to_string(),
            region: "us-east-1".to_string(),
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
            public_base_url: public_base_url.map(str::to_string),
        }
    }

    #[test]
    fn test_public_url_defaults_to_virtual_hosted_form() {
        let config = s3_config(None);
        assert_eq!(
            config.public_url("posts/abc.png"),
            "https://gallery-uploads.s3.us-east-1.amazonaws.com/posts/abc.png"
        );
    }

    #[test]
    fn test_public_url_uses_cdn_base_and_strips_trailing_slash() {
        let config = s3_config(Some("https://cdn.example.com/"));
        assert_eq!(
            config.public_url("posts/abc.png"),
            "https://cdn.example.com/posts/abc.png"
        );
    }
}
