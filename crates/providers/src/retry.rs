//! Bounded retries with per-attempt timeouts.
//!
//! Every external call goes through [`RetryingProvider`]: each attempt is
//! cancelled after `timeout`, transient failures are retried with exponential
//! backoff, and terminal failures (bad credentials, unknown model, malformed
//! output) are returned immediately.

use async_trait::async_trait;
use linkwise_core::error::ProviderError;
use linkwise_core::provider::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry and timeout parameters.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry; doubles each time
    pub base_delay: Duration,
    /// Ceiling for the exponential delay
    pub max_delay: Duration,
    /// Bound on each individual attempt
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            timeout: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &linkwise_config::ResilienceConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay: config.base_delay(),
            max_delay: config.max_delay(),
            timeout: config.request_timeout(),
        }
    }

    /// Delay before retry number `retry` (0-based): `min(max, base * 2^retry)`.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry.min(31)).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// Backoff for `error`, never shorter than a provider-requested wait.
    fn delay_for(&self, retry: u32, error: &ProviderError) -> Duration {
        let backoff = self.backoff(retry);
        match error {
            ProviderError::RateLimited { retry_after_secs } => {
                backoff.max(Duration::from_secs(*retry_after_secs))
            }
            _ => backoff,
        }
    }
}

/// A provider that bounds and retries calls to an inner provider.
pub struct RetryingProvider {
    inner: Arc<dyn Provider>,
    policy: RetryPolicy,
}

impl RetryingProvider {
    pub fn new(inner: Arc<dyn Provider>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl Provider for RetryingProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let attempts = self.policy.max_retries + 1;
        let mut retry = 0;

        loop {
            let attempt = retry + 1;
            debug!(provider = %self.inner.name(), attempt, total = attempts, "Calling provider");

            let error = match tokio::time::timeout(
                self.policy.timeout,
                self.inner.complete(request.clone()),
            )
            .await
            {
                Ok(Ok(response)) => return Ok(response),
                Ok(Err(e)) => e,
                Err(_) => ProviderError::Timeout(format!(
                    "Provider '{}' timed out after {}s",
                    self.inner.name(),
                    self.policy.timeout.as_secs()
                )),
            };

            if !error.is_retryable() || retry >= self.policy.max_retries {
                warn!(
                    provider = %self.inner.name(),
                    attempt,
                    error = %error,
                    "Provider call failed, giving up"
                );
                return Err(error);
            }

            let delay = self.policy.delay_for(retry, &error);
            warn!(
                provider = %self.inner.name(),
                attempt,
                error = %error,
                delay_ms = delay.as_millis() as u64,
                "Provider call failed, retrying"
            );
            tokio::time::sleep(delay).await;
            retry += 1;
        }
    }
}
