//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod history;
pub mod sermon;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use history::HistoryItem;
pub use sermon::{
    AssembledPrompt, Audience, GenerationRequest, GenerationResult, PromptOptions, SermonForm,
    SermonStructure, Topic,
};
