//! Completion bridge: turns a query and optional prior exchange into a reply.

use std::sync::Arc;

use crate::config::AiConfig;
use crate::domain::conversation::{build_prompt, compress_context, ContextMessage};
use crate::ports::{CompletionError, CompletionProvider, CompletionRequest, FinishReason};

/// Prefix of every reply produced from a failed completion call.
pub const ERROR_REPLY_PREFIX: &str = "Error generating response:";

/// Fixed generation parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 512,
            temperature: 0.5,
        }
    }
}

impl From<&AiConfig> for GenerationSettings {
    fn from(config: &AiConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// User-visible text for a failed completion.
pub fn error_reply(error: &CompletionError) -> String {
    format!("{} {}", ERROR_REPLY_PREFIX, error)
}

/// Builds prompts and calls the completion provider.
#[derive(Clone)]
pub struct CompletionBridge {
    provider: Arc<dyn CompletionProvider>,
    settings: GenerationSettings,
}

impl CompletionBridge {
    pub fn new(provider: Arc<dyn CompletionProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// Generates a reply, reporting failures as typed errors.
    ///
    /// The context is compressed before use, so any history shape is
    /// accepted. Failures are logged here.
    pub async fn try_generate(
        &self,
        query: &str,
        context: Option<&[ContextMessage]>,
    ) -> Result<String, CompletionError> {
        let compressed = context.map(compress_context).unwrap_or_default();
        let prompt = build_prompt(query, &compressed);

        let info = self.provider.provider_info();
        tracing::debug!(
            provider = %info.name,
            model = %info.model,
            prompt_len = prompt.len(),
            "requesting completion"
        );

        let request = CompletionRequest::new(prompt, self.settings.max_tokens, self.settings.temperature);

        match self.provider.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    model = %response.model,
                    finish_reason = ?response.finish_reason,
                    prompt_tokens = response.usage.as_ref().map(|u| u.prompt_tokens),
                    completion_tokens = response.usage.as_ref().map(|u| u.completion_tokens),
                    total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
                    "completion received"
                );
                if response.finish_reason == FinishReason::Length {
                    tracing::warn!(max_tokens = self.settings.max_tokens, "completion truncated");
                }
                Ok(response.text.trim().to_string())
            }
            Err(err) => {
                tracing::error!(error = %err, "Error generating response");
                Err(err)
            }
        }
    }

    /// Generates a reply; a failure becomes the reply text instead of an error.
    pub async fn generate_response(&self, query: &str, context: Option<&[ContextMessage]>) -> String {
        match self.try_generate(query, context).await {
            Ok(reply) => reply,
            Err(err) => error_reply(&err),
        }
    }
}
