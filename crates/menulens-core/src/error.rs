//! Error types for the Menulens orchestration service.
//!
//! Errors are organized by stage: configuration problems, then the
//! request-orchestration stages (validation, extraction, parsing,
//! generation). Generation errors never surface to callers — the
//! orchestrator degrades them to a placeholder image per dish.

use thiserror::Error;

/// Top-level error type for Menulens operations.
#[derive(Error, Debug)]
pub enum MenulensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Request orchestration errors
    #[error("Orchestration error: {0}")]
    Orchestrate(#[from] OrchestrateError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Request orchestration errors, organized by stage.
#[derive(Error, Debug)]
pub enum OrchestrateError {
    /// Request fields are missing or malformed; detected before any
    /// outbound call is made
    #[error("Invalid request: {message}")]
    Validation { message: String },

    /// The vision call itself failed (network, HTTP error status,
    /// empty completion)
    #[error("Extraction service error: {message}")]
    ExtractionService {
        message: String,
        status_code: Option<u16>,
    },

    /// The vision call succeeded but its reply could not be coerced
    /// into a dish list
    #[error("Failed to parse menu items: {message}")]
    ExtractionParse { message: String },

    /// One image-generation call failed; callers never see this —
    /// the orchestrator substitutes the placeholder URL
    #[error("Image generation error: {message}")]
    Generation {
        message: String,
        status_code: Option<u16>,
    },
}

/// Convenience type alias for Menulens results.
pub type Result<T> = std::result::Result<T, MenulensError>;

/// Convenience type alias for orchestration-stage results.
pub type OrchestrateResult<T> = std::result::Result<T, OrchestrateError>;
