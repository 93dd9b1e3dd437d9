//! Text generation adapters

mod mistral;

pub use mistral::MistralGenerator;
