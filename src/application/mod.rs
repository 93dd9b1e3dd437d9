//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod copy;
pub mod generate;
pub mod ports;

// Re-export use cases
pub use copy::CopyOutlineUseCase;
pub use generate::{GenerateSermonUseCase, GENERIC_FAILURE_MESSAGE};
