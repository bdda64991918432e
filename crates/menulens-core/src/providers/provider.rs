//! Provider traits and request/response types.
//!
//! Defines the interfaces the orchestrator calls for dish extraction and
//! photo generation, plus the fixed prompts both requests carry. Clients
//! are constructed per request from the caller's credential — never shared
//! across requests.

use crate::error::OrchestrateError;
use crate::types::ExtractedDish;
use async_trait::async_trait;
use base64::Engine;

/// Base64-encoded image ready to send to a vision API.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    /// Create an `ImageInput` from raw upload bytes and their reported
    /// MIME type.
    pub fn from_upload(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: mime_type.to_string(),
        }
    }

    /// Return a data URL suitable for OpenAI-style APIs.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// A request to extract the dish listing from a menu photo.
#[derive(Debug, Clone)]
pub struct VisionRequest {
    /// The menu photo to analyze
    pub image: ImageInput,
    /// Text instruction for the model
    pub prompt: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl VisionRequest {
    /// Build the dish-extraction request for a menu image.
    ///
    /// The instruction asks for a bare JSON array of `{name, description}`
    /// objects and tells the model to invent an appealing description when
    /// the menu doesn't print one.
    pub fn extract_dishes(image: ImageInput, max_tokens: u32) -> Self {
        let prompt = "Analyze this menu image and extract all the dish names. \
             Return a JSON array of objects with the following structure:\n\
             [\n  {\n    \"name\": \"dish name\",\n    \"description\": \
             \"brief description if available, otherwise create an appealing description\"\n  }\n]\n\n\
             Only return the JSON array, no other text."
            .to_string();

        Self {
            image,
            prompt,
            max_tokens,
        }
    }
}

/// The response from a vision extraction call.
#[derive(Debug, Clone)]
pub struct VisionReply {
    /// Generated text, expected to contain a JSON dish array
    pub text: String,
    /// Model identifier that produced it
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Build the photo-generation prompt for one extracted dish.
pub fn food_photo_prompt(dish: &ExtractedDish) -> String {
    format!(
        "A professional, mouth-watering food photography of {}. {}. \
         The dish should be beautifully plated on a clean white plate, \
         with perfect lighting, restaurant-quality presentation, \
         high resolution, appetizing, and visually stunning.",
        dish.name, dish.description
    )
}

/// Trait for the Extraction Service (vision-capable chat completion).
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the orchestrator holds `Arc<dyn VisionProvider>` for mock injection).
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Provider name for logging (e.g., "openai").
    fn name(&self) -> &str;

    /// Run one extraction call against the provider.
    async fn extract(&self, request: &VisionRequest) -> Result<VisionReply, OrchestrateError>;
}

/// Trait for the Image Service (text-to-image generation).
///
/// Returns the hosted URL of exactly one generated image.
#[async_trait]
pub trait ImageGenProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Generate one image for the prompt and return its URL.
    async fn generate(&self, prompt: &str) -> Result<String, OrchestrateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_input_data_url() {
        let input = ImageInput::from_upload(&[1, 2, 3], "image/jpeg");
        let url = input.data_url();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_image_input_preserves_mime_type() {
        let input = ImageInput::from_upload(&[0x89, 0x50, 0x4E, 0x47], "image/png");
        assert_eq!(input.media_type, "image/png");
        assert!(!input.data.is_empty());
    }

    #[test]
    fn test_extract_dishes_prompt() {
        let image = ImageInput::from_upload(&[1, 2, 3], "image/jpeg");
        let request = VisionRequest::extract_dishes(image, 1000);
        assert!(request.prompt.contains("JSON array"));
        assert!(request.prompt.contains("Only return the JSON array"));
        assert_eq!(request.max_tokens, 1000);
    }

    #[test]
    fn test_food_photo_prompt_interpolates_dish() {
        let dish = ExtractedDish {
            name: "Margherita Pizza".to_string(),
            description: "Tomato, mozzarella, basil".to_string(),
        };
        let prompt = food_photo_prompt(&dish);
        assert!(prompt.contains("Margherita Pizza"));
        assert!(prompt.contains("Tomato, mozzarella, basil"));
        assert!(prompt.contains("food photography"));
    }
}
