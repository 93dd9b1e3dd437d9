//! Generate sermon use case

use tracing::{debug, error, info};

use crate::domain::sermon::{AssembledPrompt, GenerationRequest, GenerationResult};

use super::ports::Generator;

pub use crate::domain::sermon::GENERIC_FAILURE_MESSAGE;

/// Builds the prompt for a validated request, calls the generator once and
/// turns every outcome into a [`GenerationResult`].
pub struct GenerateSermonUseCase<G>
where
    G: Generator,
{
    generator: G,
}

impl<G> GenerateSermonUseCase<G>
where
    G: Generator,
{
    /// Create a new use case instance
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Build the prompt that `execute` would send, without sending it
    pub fn preview(&self, request: &GenerationRequest) -> AssembledPrompt {
        AssembledPrompt::build(request)
    }

    /// Execute the generation workflow. Never fails: errors become data.
    pub async fn execute(&self, request: &GenerationRequest) -> GenerationResult {
        let prompt = AssembledPrompt::build(request);
        debug!(
            topic = %request.topic(),
            structure = %request.structure(),
            audience = %request.audience(),
            sections = prompt.sections().len(),
            prompt_chars = prompt.content().chars().count(),
            "prompt assembled"
        );

        match self.generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(content_chars = text.chars().count(), "sermon generated");
                GenerationResult::success(text)
            }
            Ok(_) => {
                error!("generator returned empty text");
                GenerationResult::failure(GENERIC_FAILURE_MESSAGE)
            }
            Err(e) => {
                error!(error = %e, "sermon generation failed");
                GenerationResult::failure(GENERIC_FAILURE_MESSAGE)
            }
        }
    }
}
