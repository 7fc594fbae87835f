//! # linkwise Core
//!
//! Domain types, traits, and error definitions for the linkwise profile
//! assistant. This crate does no I/O: it defines the model every other crate
//! works against.
//!
//! ## Layout
//!
//! - [`profile`]: the validated `ProfileContext` and its strict decoder
//! - [`message`]: chat messages and the append-only conversation history
//! - [`intent`]: the closed set of query intents
//! - [`session`]: per-conversation state owned by the session layer
//! - [`provider`]: the completion service abstraction
//! - [`scraper`]: the profile source abstraction

pub mod error;
pub mod intent;
pub mod message;
pub mod profile;
pub mod provider;
pub mod scraper;
pub mod session;

// Re-export key types at crate root for ergonomics
pub use error::{
    AnalysisError, ComposeError, ExtractionError, GenerationError, ProviderError, ScrapeError,
};
pub use intent::Intent;
pub use message::{ChatMessage, ConversationHistory, Role};
pub use profile::{ExperienceLevel, Industry, ProfileContext};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use scraper::ProfileScraper;
pub use session::{parse_job_titles, ProfileData, SessionId, SessionState};
