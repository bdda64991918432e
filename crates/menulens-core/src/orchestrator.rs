//! The menu request-orchestration flow.
//!
//! One `MenuOrchestrator` lives for exactly one request: validate the
//! upload, ask the Extraction Service for the dish listing, parse it,
//! fan out photo generation for the first few dishes concurrently, and
//! reassemble in extraction order. A failed generation call never fails
//! the request — that dish gets the placeholder URL.

use crate::config::Config;
use crate::error::{OrchestrateError, OrchestrateResult};
use crate::extract::parse_dish_list;
use crate::providers::{
    food_photo_prompt, ImageGenProvider, ImageInput, OpenAiImageGen, OpenAiVision, VisionProvider,
    VisionRequest,
};
use crate::types::{EnrichedDish, ExtractedDish, MenuRequest, MenuResponse};
use std::sync::Arc;
use std::time::Duration;

/// Settings the orchestrator needs from the loaded configuration.
#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: u64,
    /// Response-token budget for the extraction call
    pub extraction_max_tokens: u32,
    /// Per-dish generation timeout
    pub generation_timeout_ms: u64,
    /// Maximum dishes enriched per request
    pub fan_out_cap: usize,
    /// Image URL substituted when generation fails for a dish
    pub placeholder_url: String,
}

impl From<&Config> for OrchestratorOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_upload_bytes: config.limits.max_upload_bytes(),
            extraction_max_tokens: config.extraction.max_tokens,
            generation_timeout_ms: config.limits.generation_timeout_ms,
            fan_out_cap: config.generation.fan_out_cap,
            placeholder_url: config.generation.placeholder_url.clone(),
        }
    }
}

/// Request-scoped orchestrator over the two provider clients.
pub struct MenuOrchestrator {
    vision: Arc<dyn VisionProvider>,
    images: Arc<dyn ImageGenProvider>,
    options: OrchestratorOptions,
}

impl MenuOrchestrator {
    /// Create an orchestrator from explicit providers (used by tests).
    pub fn new(
        vision: Arc<dyn VisionProvider>,
        images: Arc<dyn ImageGenProvider>,
        options: OrchestratorOptions,
    ) -> Self {
        Self {
            vision,
            images,
            options,
        }
    }

    /// Create an orchestrator for one request, binding fresh OpenAI clients
    /// to the caller's API key.
    ///
    /// Clients are request-scoped so one caller's credential never leaks
    /// into another request's call context.
    pub fn for_request(config: &Config, api_key: &str) -> Self {
        let vision = OpenAiVision::new(
            api_key,
            &config.extraction,
            config.limits.extraction_timeout_ms,
        );
        let images = OpenAiImageGen::new(
            api_key,
            &config.generation,
            config.limits.generation_timeout_ms,
        );
        Self::new(Arc::new(vision), Arc::new(images), config.into())
    }

    /// Process one menu upload end to end.
    ///
    /// Returns `min(extracted, fan_out_cap)` enriched dishes in extraction
    /// order. Extraction failures abort the request; generation failures
    /// degrade per dish to the placeholder URL.
    pub async fn process_menu(&self, request: MenuRequest) -> OrchestrateResult<MenuResponse> {
        self.validate(&request)?;

        tracing::info!(
            bytes = request.image_bytes.len(),
            mime = %request.mime_type,
            "Processing menu image"
        );

        let dishes = self.extract_dishes(&request).await?;
        tracing::info!("Extracted {} menu items", dishes.len());

        let menu_items = self.enrich_dishes(dishes).await;

        tracing::info!("Successfully processed menu");
        Ok(MenuResponse { menu_items })
    }

    /// Check request preconditions before any outbound call is made.
    fn validate(&self, request: &MenuRequest) -> OrchestrateResult<()> {
        if request.image_bytes.is_empty() {
            return Err(OrchestrateError::Validation {
                message: "No image file provided".to_string(),
            });
        }
        if request.image_bytes.len() as u64 > self.options.max_upload_bytes {
            return Err(OrchestrateError::Validation {
                message: format!(
                    "Image exceeds the {} byte upload limit",
                    self.options.max_upload_bytes
                ),
            });
        }
        if !request.mime_type.starts_with("image/") {
            return Err(OrchestrateError::Validation {
                message: format!("Unsupported upload type: {}", request.mime_type),
            });
        }
        if request.api_key.is_empty() {
            return Err(OrchestrateError::Validation {
                message: "OpenAI API key is required".to_string(),
            });
        }
        Ok(())
    }

    /// Step A: one vision call, then coerce its reply into a dish list.
    async fn extract_dishes(&self, request: &MenuRequest) -> OrchestrateResult<Vec<ExtractedDish>> {
        let image = ImageInput::from_upload(&request.image_bytes, &request.mime_type);
        let vision_request =
            VisionRequest::extract_dishes(image, self.options.extraction_max_tokens);

        let reply = self.vision.extract(&vision_request).await?;
        tracing::debug!(
            provider = self.vision.name(),
            model = %reply.model,
            latency_ms = reply.latency_ms,
            tokens = ?reply.tokens_used,
            "Extraction call completed"
        );

        parse_dish_list(&reply.text)
    }

    /// Step B: bounded concurrent fan-out with per-dish placeholder fallback.
    ///
    /// One task per retained dish; handles are awaited in spawn order so
    /// output position matches extraction position no matter which call
    /// finishes first.
    async fn enrich_dishes(&self, dishes: Vec<ExtractedDish>) -> Vec<EnrichedDish> {
        let retained: Vec<ExtractedDish> =
            dishes.into_iter().take(self.options.fan_out_cap).collect();

        let mut handles = Vec::with_capacity(retained.len());
        for dish in &retained {
            let provider = self.images.clone();
            let prompt = food_photo_prompt(dish);
            let name = dish.name.clone();
            let timeout_ms = self.options.generation_timeout_ms;
            let placeholder = self.options.placeholder_url.clone();

            handles.push(tokio::spawn(async move {
                tracing::debug!("Generating image for: {name}");
                let timeout = Duration::from_millis(timeout_ms);
                match tokio::time::timeout(timeout, provider.generate(&prompt)).await {
                    Ok(Ok(url)) => url,
                    Ok(Err(e)) => {
                        tracing::warn!("Image generation failed for {name}: {e}");
                        placeholder
                    }
                    Err(_) => {
                        tracing::warn!("Image generation timed out for {name} after {timeout_ms}ms");
                        placeholder
                    }
                }
            }));
        }

        let mut enriched = Vec::with_capacity(retained.len());
        for (dish, handle) in retained.into_iter().zip(handles) {
            let image_url = match handle.await {
                Ok(url) => url,
                Err(e) => {
                    tracing::error!("Image generation task panicked: {e}");
                    self.options.placeholder_url.clone()
                }
            };
            enriched.push(EnrichedDish {
                name: dish.name,
                description: dish.description,
                image_url,
            });
        }

        enriched
    }
}
