//! Provider router: selects the completion service based on config.
//!
//! Every registered provider is wrapped in a [`RetryingProvider`] built from
//! the `[resilience]` section, so callers never see an unbounded call.

use std::collections::HashMap;
use std::sync::Arc;

use linkwise_config::AppConfig;
use linkwise_core::error::ProviderError;
use linkwise_core::provider::Provider;

use crate::gemini::GeminiProvider;
use crate::openai_compat::OpenAiCompatProvider;
use crate::retry::{RetryPolicy, RetryingProvider};

/// Routes requests to the correct provider.
pub struct ProviderRouter {
    providers: HashMap<String, Arc<dyn Provider>>,
    default_provider: String,
}

impl ProviderRouter {
    /// Create a new router with a default provider.
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a provider.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get the default provider.
    pub fn default(&self) -> Option<Arc<dyn Provider>> {
        self.providers.get(&self.default_provider).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }
}

/// Build providers from configuration.
///
/// Fails with [`ProviderError::NotConfigured`] when a provider is neither
/// Gemini nor a well-known OpenAI-compatible endpoint and has no `api_url`.
pub fn build_from_config(config: &AppConfig) -> Result<ProviderRouter, ProviderError> {
    let mut router = ProviderRouter::new(&config.default_provider);
    let policy = RetryPolicy::from_config(&config.resilience);

    for (name, provider_config) in &config.providers {
        let api_key = provider_config
            .api_key
            .clone()
            .or_else(|| config.api_key.clone())
            .unwrap_or_default();
        let provider = build_provider(name, provider_config.api_url.as_deref(), &api_key)?;
        router.register(
            name.clone(),
            Arc::new(RetryingProvider::new(provider, policy.clone())),
        );
    }

    // Ensure the default provider exists (even if not explicitly configured)
    if !router.contains(&config.default_provider) {
        let api_key = config.api_key.clone().unwrap_or_default();
        let provider = build_provider(&config.default_provider, None, &api_key)?;
        router.register(
            config.default_provider.clone(),
            Arc::new(RetryingProvider::new(provider, policy)),
        );
    }

    Ok(router)
}

fn build_provider(
    name: &str,
    api_url: Option<&str>,
    api_key: &str,
) -> Result<Arc<dyn Provider>, ProviderError> {
    if name == "gemini" {
        let provider = GeminiProvider::new(api_key);
        return Ok(match api_url {
            Some(url) => Arc::new(provider.with_base_url(url)),
            None => Arc::new(provider),
        });
    }

    let base_url = api_url.or_else(|| default_base_url(name)).ok_or_else(|| {
        ProviderError::NotConfigured(format!(
            "unknown provider '{name}': set providers.{name}.api_url"
        ))
    })?;
    Ok(Arc::new(OpenAiCompatProvider::new(name, base_url, api_key)))
}

/// Default base URL for well-known OpenAI-compatible providers.
fn default_base_url(provider_name: &str) -> Option<&'static str> {
    match provider_name {
        "openrouter" => Some("https://openrouter.ai/api/v1"),
        "openai" => Some("https://api.openai.com/v1"),
        "ollama" => Some("http://localhost:11434/v1"),
        "deepseek" => Some("https://api.deepseek.com/v1"),
        "groq" => Some("https://api.groq.com/openai/v1"),
        "together" => Some("https://api.together.xyz/v1"),
        "vllm" => Some("http://localhost:8000/v1"),
        _ => None,
    }
}
