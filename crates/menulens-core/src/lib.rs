//! Menulens Core - menu-photo orchestration library.
//!
//! Menulens takes a photograph of a restaurant menu, asks a vision model
//! for the dish listing, then synthesizes an appetizing photo for each dish
//! with a text-to-image model, tolerating per-dish failures.
//!
//! # Architecture
//!
//! The library is a thin, stateless orchestration layer over two remote
//! services:
//!
//! ```text
//! Upload → Validate → Extraction Service → Parse reply → Image Service ×N → Response
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use menulens_core::{Config, MenuOrchestrator, MenuRequest};
//!
//! #[tokio::main]
//! async fn main() -> menulens_core::Result<()> {
//!     let config = Config::load()?;
//!     let orchestrator = MenuOrchestrator::for_request(&config, "sk-...");
//!
//!     let response = orchestrator
//!         .process_menu(MenuRequest {
//!             image_bytes: std::fs::read("./menu.jpg")?,
//!             mime_type: "image/jpeg".into(),
//!             api_key: "sk-...".into(),
//!         })
//!         .await?;
//!     println!("Dishes: {}", response.menu_items.len());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod extract;
pub mod orchestrator;
pub mod providers;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, MenulensError, OrchestrateError, OrchestrateResult, Result};
pub use orchestrator::{MenuOrchestrator, OrchestratorOptions};
pub use types::{EnrichedDish, ExtractedDish, MenuRequest, MenuResponse};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
