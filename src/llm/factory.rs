use std::sync::Arc;
use tracing::info;
use anyhow::Result;

use super::interface::SqlGenerator;
use super::openai_llm::OpenAiLlm;
use crate::config::LlmConfig;

/// Factory for creating SQL generator instances
pub struct LlmFactory;

impl LlmFactory {
    /// Create a generator for the configured provider name.
    pub fn create(config: &LlmConfig) -> Result<Arc<dyn SqlGenerator>> {
        info!("Initializing LLM provider: {}", config.provider);

        match config.provider.as_str() {
            "openai_llm" | "openai_compatible_llm" => Ok(Arc::new(OpenAiLlm::new(config)?)),
            other => Err(anyhow::anyhow!("Unsupported LLM provider: {}", other)),
        }
    }
}
