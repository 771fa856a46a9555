use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::interface::SqlGenerator;
use crate::config::LlmConfig;
use crate::error::TranslationError;
use crate::prompt;

const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI-compatible chat-completions client.
/// The API key is resolved from the environment on every call so a missing
/// credential fails before any socket is opened.
pub struct OpenAiLlm {
    client: Client,
    model: String,
    base_url: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

impl OpenAiLlm {
    pub fn new(config: &LlmConfig) -> anyhow::Result<Self> {
        info!(
            "Initialized OpenAiLlm: model={}, base_url={}",
            config.model, config.base_url
        );
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            temperature: config.temperature,
        })
    }

    fn api_key() -> Result<String, TranslationError> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                TranslationError::Configuration(format!("{} is not set", API_KEY_ENV))
            })
    }
}

#[async_trait]
impl SqlGenerator for OpenAiLlm {
    async fn generate_sql(
        &self,
        question: &str,
        table_schema: Option<&str>,
    ) -> Result<String, TranslationError> {
        let api_key = Self::api_key()?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: prompt::BASE_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt::build_user_prompt(question, table_schema),
                },
            ],
            temperature: self.temperature,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationError::Provider(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Provider(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            TranslationError::Provider(format!("malformed provider response: {}", e))
        })?;

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            TranslationError::Provider("provider response contained no choices".to_string())
        })?;

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests in this module mutate OPENAI_API_KEY; serialize them so they
    // cannot observe each other's environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn test_llm(base_url: &str) -> OpenAiLlm {
        let config = LlmConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..LlmConfig::default()
        };
        OpenAiLlm::new(&config).unwrap()
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_call() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(API_KEY_ENV);

        // An unresolvable base_url proves no request is attempted: the call
        // must fail with Configuration, not Provider.
        let llm = test_llm("http://askadb.invalid/v1");
        let err = llm.generate_sql("list all users", None).await.unwrap_err();
        assert!(matches!(err, TranslationError::Configuration(_)));
    }

    #[tokio::test]
    async fn empty_api_key_is_treated_as_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(API_KEY_ENV, "");

        let llm = test_llm("http://askadb.invalid/v1");
        let err = llm.generate_sql("list all users", None).await.unwrap_err();
        std::env::remove_var(API_KEY_ENV);
        assert!(matches!(err, TranslationError::Configuration(_)));
    }

    #[tokio::test]
    async fn unreachable_provider_fails_with_provider_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(API_KEY_ENV, "test-key");

        // Nothing listens on port 1; the connection is refused immediately.
        let llm = test_llm("http://127.0.0.1:1/v1");
        let err = llm.generate_sql("list all users", None).await.unwrap_err();
        std::env::remove_var(API_KEY_ENV);
        assert!(matches!(err, TranslationError::Provider(_)));
    }
}
