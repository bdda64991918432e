//! OpenAI image-generation client (Images API).
//!
//! Requests exactly one square image per prompt; the orchestrator maps any
//! failure here to the placeholder URL, so errors from this client never
//! reach the HTTP caller.

use super::provider::ImageGenProvider;
use crate::config::GenerationConfig;
use crate::error::OrchestrateError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request-scoped client for the Image Service.
pub struct OpenAiImageGen {
    api_key: String,
    model: String,
    size: String,
    quality: String,
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAiImageGen {
    /// Create a client bound to one caller's API key.
    pub fn new(api_key: &str, config: &GenerationConfig, timeout_ms: u64) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: config.model.clone(),
            size: config.size.clone(),
            quality: config.quality.clone(),
            endpoint: config.endpoint.clone(),
            timeout: Duration::from_millis(timeout_ms),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    size: String,
    quality: String,
    n: u32,
}

#[derive(Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

#[async_trait]
impl ImageGenProvider for OpenAiImageGen {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String, OrchestrateError> {
        let body = ImageRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            size: self.size.clone(),
            quality: self.quality.clone(),
            n: 1,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| OrchestrateError::Generation {
                message: format!("image request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(OrchestrateError::Generation {
                message: format!("image HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let image_resp: ImageResponse =
            resp.json().await.map_err(|e| OrchestrateError::Generation {
                message: format!("failed to parse image response: {e}"),
                status_code: None,
            })?;

        image_resp
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or_else(|| OrchestrateError::Generation {
                message: "image call returned no URL".to_string(),
                status_code: None,
            })
    }
}
