//! The query-routing and prompt-composition pipeline.
//!
//! Each user turn follows a **classify → compose → generate** cycle:
//!
//! 1. **Check** that the session has an analyzed profile
//! 2. **Classify** the query into an [`linkwise_core::Intent`] (never fails)
//! 3. **Compose** the instruction from memory, profile and intent template
//! 4. **Generate** the answer through the configured provider
//! 5. **Record** the exchange in the session history on success
//!
//! Profile analysis is a separate flow: fetch, extract, validate, replace.

pub mod classifier;
pub mod composer;
pub mod extractor;
pub mod generator;
pub mod memory_window;
pub mod orchestrator;
pub mod quick_actions;

#[cfg(test)]
mod test_helpers;

pub use classifier::IntentClassifier;
pub use composer::{compose, industry_guidance, ComposeInput, Template};
pub use extractor::ContextExtractor;
pub use generator::ResponseGenerator;
pub use memory_window::MemoryWindow;
pub use orchestrator::{Orchestrator, TurnOutcome, TurnStage, PROFILE_REQUIRED_MESSAGE};
pub use quick_actions::QuickAction;
