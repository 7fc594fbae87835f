//! Response generation: runs a composed instruction and returns trimmed text.

use std::sync::Arc;

use linkwise_core::provider::{Provider, ProviderRequest};
use linkwise_core::GenerationError;
use tracing::{debug, warn};

pub struct ResponseGenerator {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl ResponseGenerator {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Issue `instruction` and return the trimmed answer.
    ///
    /// A blank answer is an error, never an empty success.
    pub async fn generate(&self, instruction: &str) -> Result<String, GenerationError> {
        let mut request =
            ProviderRequest::new(&self.model, instruction).with_temperature(self.temperature);
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        debug!(
            provider = %self.provider.name(),
            model = %self.model,
            prompt_chars = instruction.len(),
            "Generating response"
        );

        let response = self.provider.complete(request).await.inspect_err(|e| {
            warn!(error = %e, "Generation call failed");
        })?;

        let text = response.text.trim();
        if text.is_empty() {
            warn!("Model returned a blank answer");
            return Err(GenerationError::EmptyResponse);
        }

        if let Some(usage) = &response.usage {
            debug!(total_tokens = usage.total_tokens, "Generation complete");
        }
        Ok(text.to_string())
    }
}
