//! Create-post composition flow
//!
//! State machine behind the CLI: a form (name, prompt, photo) plus two
//! advisory busy flags. `generate_image` fills the photo slot with a local
//! file; `share` re-encodes that file as a data URL and publishes it.
//! The flags are advisory in-flight indicators, not locks.
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A published gallery post as the API returns it
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub name: String,
    pub prompt: String,
    pub photo: String,
}

#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub name: String,
    pub prompt: String,
    /// Local file holding the last generated image, if any
    pub photo: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePostRequest<'a> {
    name: &'a str,
    prompt: &'a str,
    photo: String,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct PostComposer {
    client: Client,
    api_base: String,
    out_dir: PathBuf,
    pub form: PostForm,
    generating_img: bool,
    loading: bool,
}

impl PostComposer {
    pub fn new(api_base: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: api_base.into(),
            out_dir: out_dir.into(),
            form: PostForm::default(),
            generating_img: false,
            loading: false,
        }
    }

    /// True while a generation request is in flight
    pub fn generating(&self) -> bool {
        self.generating_img
    }

    /// True while a share request is in flight
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Request generation for the current prompt and stash the bytes in a
    /// local file. On failure the photo slot is left unchanged.
    pub async fn generate_image(&mut self) -> Result<PathBuf> {
        if self.form.prompt.trim().is_empty() {
            anyhow::bail!("Please enter a prompt.");
        }

        self.generating_img = true;
        let result = self.request_generation().await;
        self.generating_img = false;

        let bytes = result?;
        let path = self.out_dir.join("generated.png");
        std::fs::write(&path, &bytes).context("Failed to write generated image")?;
        info!(path = %path.display(), bytes = bytes.len(), "Image generated");

        self.form.photo = Some(path.clone());
        Ok(path)
    }

    async fn request_generation(&self) -> Result<Vec<u8>> {
        let url = format!("{}/api/v1/dalle", self.api_base);
        debug!(%url, "Requesting image generation");

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                prompt: self.form.prompt.trim(),
            })
            .send()
            .await
            .context("Failed to reach the gallery service")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Failed to generate image: {} {}", status.as_u16(), body);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read generated image")?;
        Ok(bytes.to_vec())
    }

    /// Publish the current form to the community gallery.
    ///
    /// The photo file is read back and re-encoded as a data URL for
    /// transport inside the JSON body.
    pub async fn share(&mut self) -> Result<()> {
        if self.form.prompt.trim().is_empty() || self.form.photo.is_none() {
            anyhow::bail!("Please provide a valid prompt and image.");
        }

        self.loading = true;
        let result = self.submit().await;
        self.loading = false;
        result
    }

    async fn submit(&self) -> Result<()> {
        let photo_path = self.form.photo.as_ref().unwrap();
        let bytes = std::fs::read(photo_path).context("Failed to read generated image")?;
        let photo = format!("data:image/png;base64,{}", STANDARD.encode(&bytes));

        let url = format!("{}/api/v1/post", self.api_base);
        debug!(%url, "Sharing post");

        let response = self
            .client
            .post(&url)
            .json(&CreatePostRequest {
                name: &self.form.name,
                prompt: self.form.prompt.trim(),
                photo,
            })
            .send()
            .await
            .context("Failed to reach the gallery service")?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            anyhow::bail!("Failed to create post: {}", message);
        }

        info!("Post shared with the community");
        Ok(())
    }

    /// Fetch the community gallery.
    ///
    /// The API reports an empty gallery as 404 "No posts found"; that is
    /// a valid steady state for the caller, so it comes back as an empty
    /// list here.
    pub async fn fetch_gallery(&self) -> Result<Vec<Post>> {
        let url = format!("{}/api/v1/post", self.api_base);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the gallery service")?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Failed to fetch posts: {}", status.as_u16());
        }

        let listed = response
            .json::<ListResponse>()
            .await
            .context("Failed to parse gallery response")?;
        Ok(listed.data)
    }
}
