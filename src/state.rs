use std::sync::Arc;

use crate::config::Config;
use crate::llm::{LlmFactory, SqlGenerator};

/// Shared application state. Read-only after startup; requests hold no
/// mutable state of their own.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sql_generator: Arc<dyn SqlGenerator>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let sql_generator = LlmFactory::create(&config.llm_config)?;
        Ok(Self {
            config,
            sql_generator,
        })
    }
}
