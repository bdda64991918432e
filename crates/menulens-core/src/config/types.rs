//! Sub-configuration structs with defaults matching the deployed service.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Listen port (the `PORT` env var and `--port` flag override this)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

/// Resource limits to protect against problematic inputs and hung providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum upload size in mebibytes
    pub max_upload_mb: u64,

    /// Vision-call timeout in milliseconds
    pub extraction_timeout_ms: u64,

    /// Per-image generation-call timeout in milliseconds
    pub generation_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_mb: 10,
            extraction_timeout_ms: 60_000,
            generation_timeout_ms: 60_000,
        }
    }
}

impl LimitsConfig {
    /// Maximum upload size in bytes.
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb * 1024 * 1024
    }
}

/// Extraction Service settings (vision-capable chat completions).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Chat-completions endpoint
    pub endpoint: String,

    /// Vision-capable model identifier
    pub model: String,

    /// Response-length budget for the dish listing
    pub max_tokens: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 1000,
        }
    }
}

/// Image Service settings (text-to-image generation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Image-generation endpoint
    pub endpoint: String,

    /// Image model identifier
    pub model: String,

    /// Requested resolution (square)
    pub size: String,

    /// Quality tier
    pub quality: String,

    /// Maximum dishes enriched with generated photos per request;
    /// dishes beyond the cap are silently dropped
    pub fan_out_cap: usize,

    /// Fallback image URL substituted when generation fails for a dish
    pub placeholder_url: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/images/generations".to_string(),
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            fan_out_cap: 6,
            placeholder_url: "https://via.placeholder.com/300x200?text=Image+Not+Available"
                .to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("trace", "debug", "info", "warn", "error")
    pub level: String,

    /// Log format ("pretty" or "json")
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
