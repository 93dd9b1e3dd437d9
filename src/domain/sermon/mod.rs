//! Sermon domain module

mod audience;
mod form;
mod placeholder;
mod prompt;
mod request;
mod result;
mod structure;
mod templates;

pub use audience::{Audience, ALL_AUDIENCES};
pub use form::SermonForm;
pub use placeholder::{
    has_unresolved, Placeholder, PlaceholderContext, ALL_PLACEHOLDERS, BIBLE_VERSE_FALLBACK,
};
pub use prompt::AssembledPrompt;
pub use request::{GenerationRequest, PromptOptions, Topic, TOPIC_MAX_CHARS, TOPIC_MIN_CHARS};
pub use result::{GenerationResult, GENERIC_FAILURE_MESSAGE};
pub use structure::{SermonStructure, ALL_STRUCTURES};
pub use templates::{PromptSection, ALL_SECTIONS};
