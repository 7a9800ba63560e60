//! Recommendation Client — the seam between the pipeline and the generation service.
//!
//! `AppState` carries an `Arc<dyn RecommendationGenerator>`; `LlmClient` is the production
//! backend, tests substitute a scripted generator.

use async_trait::async_trait;

use crate::llm_client::prompts::PLAIN_TEXT_ONLY_SYSTEM;
use crate::llm_client::{GenerationConfig, LlmClient, LlmError};
use crate::recommendation::prompts::RecommendationPrompt;

#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    /// Sends the prompt upstream and returns the raw, untrusted response text.
    async fn generate(&self, prompt: &RecommendationPrompt) -> Result<String, LlmError>;
}

#[async_trait]
impl RecommendationGenerator for LlmClient {
    async fn generate(&self, prompt: &RecommendationPrompt) -> Result<String, LlmError> {
        self.generate_text(
            prompt.as_str(),
            PLAIN_TEXT_ONLY_SYSTEM,
            GenerationConfig::default(),
        )
        .await
    }
}
