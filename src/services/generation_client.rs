use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoff;
use secrecy::ExposeSecret;

use crate::{
    config::GenerationConfig,
    errors::{AppError, AppResult},
};

/// Boundary to the external text generation model.
///
/// Implementations make exactly one outbound call per invocation. Retrying is
/// left to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Generation client for any OpenAI-compatible chat completions endpoint.
pub struct OpenAiGenerationClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiGenerationClient {
    pub fn new(config: &GenerationConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.api_base.as_str())
            .with_api_key(config.api_key.expose_secret());

        // The default backoff retries 5xx and 429 answers for up to 15 minutes.
        let single_attempt = ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        Self {
            client: Client::with_config(openai_config).with_backoff(single_attempt),
            model: config.model.clone(),
            timeout: config.timeout,
        }
    }

    #[cfg(test)]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerationClient for OpenAiGenerationClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| AppError::GenerationFailed(format!("invalid prompt message: {}", e)))?;
        let messages: Vec<ChatCompletionRequestMessage> = vec![user_message.into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .build()
            .map_err(|e| AppError::GenerationFailed(format!("invalid completion request: {}", e)))?;

        log::info!(
            "Requesting completion from model '{}' (prompt length {})",
            self.model,
            prompt.len()
        );

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| {
                log::error!(
                    "Model '{}' did not respond within {:?}",
                    self.model,
                    self.timeout
                );
                AppError::GenerationFailed(format!("no response within {:?}", self.timeout))
            })?
            .map_err(|e| {
                log::error!("Completion request to model '{}' failed: {}", self.model, e);
                AppError::GenerationFailed(e.to_string())
            })?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            log::error!("Model '{}' returned empty output", self.model);
            return Err(AppError::GenerationFailed(
                "model returned empty output".to_string(),
            ));
        }

        log::info!("Received completion of length {}", text.len());
        Ok(text)
    }
}
