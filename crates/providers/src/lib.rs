//! Completion service implementations for linkwise.
//!
//! All providers implement the `linkwise_core::Provider` trait.
//! The router selects the correct provider based on configuration and wraps
//! it in a [`RetryingProvider`] so every external call is time-bounded.

pub mod gemini;
pub mod openai_compat;
pub mod retry;
pub mod router;

pub use gemini::GeminiProvider;
pub use openai_compat::OpenAiCompatProvider;
pub use retry::{RetryPolicy, RetryingProvider};
pub use router::ProviderRouter;
