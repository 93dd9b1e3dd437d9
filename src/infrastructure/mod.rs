//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Mistral API, the filesystem,
//! and the system clipboard.

pub mod clipboard;
pub mod config;
pub mod generation;
pub mod history;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use generation::MistralGenerator;
pub use history::JsonHistoryStore;
