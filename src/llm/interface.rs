use async_trait::async_trait;

use crate::error::TranslationError;

/// Interface for a SQL-generating language model.
/// Each call is a single stateless request/response exchange; no
/// conversation state is kept between calls.
#[async_trait]
pub trait SqlGenerator: Send + Sync {
    /// Translate a natural-language question into a SQL string.
    /// Returns the provider's generated text verbatim.
    async fn generate_sql(
        &self,
        question: &str,
        table_schema: Option<&str>,
    ) -> Result<String, TranslationError>;
}
