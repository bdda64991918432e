//! Core data types for the Menulens request-orchestration flow.
//!
//! Everything here is request-scoped: a `MenuRequest` comes in, an ordered
//! `MenuResponse` goes out, and nothing is persisted in between.

use serde::{Deserialize, Serialize};

/// One incoming menu-processing request.
///
/// Holds the uploaded image and the caller's provider credential. The
/// credential is read-only and request-scoped; it must never be logged,
/// cached, or persisted (the type deliberately does not derive `Debug`).
#[derive(Clone)]
pub struct MenuRequest {
    /// Raw uploaded image bytes
    pub image_bytes: Vec<u8>,

    /// MIME type reported by the upload (e.g. "image/jpeg")
    pub mime_type: String,

    /// The caller's provider API key
    pub api_key: String,
}

/// A dish as extracted from the vision model's reply.
///
/// Order within a menu is the order the model returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDish {
    /// Dish name as printed on the menu
    pub name: String,

    /// Menu description, or one the model invented when the menu had none.
    /// Defaults to empty when the model omits the field entirely.
    #[serde(default)]
    pub description: String,
}

/// An extracted dish enriched with a generated photo URL.
///
/// `image_url` is always non-empty: either a provider-hosted URL or the
/// configured placeholder sentinel when generation failed for this dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedDish {
    pub name: String,

    pub description: String,

    pub image_url: String,
}

/// The ordered response for one processed menu.
///
/// Item order matches extraction order; length is capped at the configured
/// fan-out limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub menu_items: Vec<EnrichedDish>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_dish_description_defaults_to_empty() {
        let dish: ExtractedDish = serde_json::from_str(r#"{"name": "Pho"}"#).unwrap();
        assert_eq!(dish.name, "Pho");
        assert_eq!(dish.description, "");
    }

    #[test]
    fn test_enriched_dish_serializes_camel_case() {
        let dish = EnrichedDish {
            name: "Pho".to_string(),
            description: "Beef noodle soup".to_string(),
            image_url: "https://example.com/pho.png".to_string(),
        };
        let json = serde_json::to_value(&dish).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/pho.png");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_menu_response_wire_shape() {
        let response = MenuResponse {
            menu_items: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["menuItems"].as_array().unwrap().is_empty());
    }
}
