//! Error types for the linkwise domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each stage of the pipeline has its own error enum; classification has
//! none because it always degrades to [`crate::Intent::General`].

use thiserror::Error;

/// Failures reported by the completion service.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider returned an empty or malformed response: {0}")]
    EmptyResponse(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl ProviderError {
    /// Whether a later attempt of the same request may succeed.
    ///
    /// Rate limits, timeouts, transport failures and 5xx responses are
    /// transient. Credentials, unknown models and malformed payloads are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Timeout(_) | Self::Network(_) => true,
            Self::ApiError { status_code, .. } => *status_code >= 500,
            Self::AuthenticationFailed(_)
            | Self::ModelNotFound(_)
            | Self::EmptyResponse(_)
            | Self::NotConfigured(_) => false,
        }
    }
}

/// The profile source could not produce raw profile data.
#[derive(Debug, Clone, Error)]
pub enum ScrapeError {
    #[error("No profile available at {0}")]
    NotFound(String),

    #[error("Profile source unavailable: {0}")]
    Unavailable(String),
}

/// Structured profile context could not be derived.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Extraction call failed: {0}")]
    Provider(#[from] ProviderError),

    /// The model output was not a structured record at all.
    #[error("Could not parse profile context: {0}")]
    Parse(String),

    /// The record parsed but a field violates the schema.
    #[error("Invalid profile context field `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl ExtractionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// A composed instruction could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("Unrecognized experience tier: {0:?} (expected junior, mid-level or senior)")]
    UnrecognizedTier(String),
}

/// No answer was produced for the turn.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Generation call failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Model returned an empty answer")]
    EmptyResponse,
}

/// A profile (re-)analysis attempt failed. The session keeps its previous state.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_correctly() {
        let err = ProviderError::ApiError {
            status_code: 429,
            message: "Too many requests".into(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("Too many requests"));
    }

    #[test]
    fn retryable_classification() {
        assert!(ProviderError::RateLimited { retry_after_secs: 1 }.is_retryable());
        assert!(ProviderError::Timeout("slow".into()).is_retryable());
        assert!(ProviderError::Network("reset".into()).is_retryable());
        assert!(
            ProviderError::ApiError {
                status_code: 503,
                message: "unavailable".into()
            }
            .is_retryable()
        );

        assert!(
            !ProviderError::ApiError {
                status_code: 400,
                message: "bad request".into()
            }
            .is_retryable()
        );
        assert!(!ProviderError::AuthenticationFailed("bad key".into()).is_retryable());
        assert!(!ProviderError::EmptyResponse("no text".into()).is_retryable());
    }

    #[test]
    fn validation_error_names_field() {
        let err = ExtractionError::invalid("profile_completeness", "must be within 0..=100");
        let text = err.to_string();
        assert!(text.contains("profile_completeness"));
        assert!(text.contains("0..=100"));
    }

    #[test]
    fn unrecognized_tier_mentions_label() {
        let err = ComposeError::UnrecognizedTier("executive".into());
        assert!(err.to_string().contains("executive"));
    }
}
