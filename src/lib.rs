//! SermonGen - sermon outline generator CLI
//!
//! This crate assembles a structured Indonesian-language prompt from a
//! sermon request (topic, Bible verse, rhetorical structure, audience and
//! optional sections) and sends it to a Mistral chat-completion model.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Request validation, template catalog, prompt assembly, history items, errors
//! - **Application**: The generate and copy use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Mistral client, TOML config, JSON history, clipboard)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
