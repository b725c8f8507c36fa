//! Hugging Face inference API integration for text-to-image generation
use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::InferenceConfig;

const INFERENCE_API_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-3.5-large";

const IMAGE_WIDTH: u32 = 1024;
const IMAGE_HEIGHT: u32 = 1024;
const GUIDANCE_SCALE: f32 = 8.5;

/// Text-to-image inference client
pub struct StableDiffusionClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

// ============================================
// Request types
// ============================================

#[derive(Debug, Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    width: u32,
    height: u32,
    guidance_scale: f32,
}

impl StableDiffusionClient {
    /// Create a new inference client from configuration
    pub fn new(config: &InferenceConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: config.api_key.clone().unwrap_or_default(),
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| INFERENCE_API_URL.to_string()),
        }
    }

    /// Generate an image for a prompt
    ///
    /// Issues one request with the fixed generation parameters and returns
    /// the provider's raw image bytes. Upstream failures carry the status
    /// and response body; there is no retry and no fallback provider.
    pub async fn generate(&self, prompt: &str) -> Result<Bytes> {
        info!(prompt = %prompt, "Requesting image generation");

        let request = GenerationRequest {
            inputs: prompt.to_string(),
            parameters: GenerationParameters {
                width: IMAGE_WIDTH,
                height: IMAGE_HEIGHT,
                guidance_scale: GUIDANCE_SCALE,
            },
        };

        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call inference API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Inference API request failed");
            anyhow::bail!("Inference API error ({}): {}", status, error_text);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read inference API response body")?;

        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            bytes = bytes.len(),
            "Inference API response received"
        );

        Ok(bytes)
    }

    /// Check if an API key is configured
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> InferenceConfig {
        InferenceConfig {
            api_key: api_key.map(str::to_string),
            endpoint: None,
        }
    }

    #[test]
    fn test_client_not_configured() {
        let client = StableDiffusionClient::new(&config(None));
        assert!(!client.is_configured());
    }

    #[test]
    fn test_client_configured() {
        let client = StableDiffusionClient::new(&config(Some("test-api-key")));
        assert!(client.is_configured());
    }

    #[test]
    fn test_request_body_carries_fixed_parameters() {
        let request = GenerationRequest {
            inputs: "a red cube".to_string(),
            parameters: GenerationParameters {
                width: IMAGE_WIDTH,
                height: IMAGE_HEIGHT,
                guidance_scale: GUIDANCE_SCALE,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["inputs"], "a red cube");
        assert_eq!(value["parameters"]["width"], 1024);
        assert_eq!(value["parameters"]["height"], 1024);
        assert_eq!(value["parameters"]["guidance_scale"], 8.5);
    }
}
