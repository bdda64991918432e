//! External AI provider integration.
//!
//! Provides trait abstractions over the two remote collaborators — the
//! Extraction Service (vision chat completion) and the Image Service
//! (text-to-image) — plus their OpenAI-backed clients. Clients are built
//! per request from the caller's credential.

pub(crate) mod images;
pub(crate) mod provider;
pub(crate) mod vision;

pub use images::OpenAiImageGen;
pub use provider::{
    food_photo_prompt, ImageGenProvider, ImageInput, VisionProvider, VisionReply, VisionRequest,
};
pub use vision::OpenAiVision;
