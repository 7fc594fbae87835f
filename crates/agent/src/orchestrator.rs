//! Per-turn orchestration: classify, compose, generate, record.
//!
//! The orchestrator holds no conversation state. Callers own a
//! [`SessionState`] and lend it mutably for each call, so a session can only
//! ever have one turn in flight.

use std::sync::Arc;

use linkwise_config::AppConfig;
use linkwise_core::provider::Provider;
use linkwise_core::{
    AnalysisError, GenerationError, Intent, ProfileContext, ProfileScraper, ScrapeError,
    SessionState,
};
use tracing::{debug, info, warn};

use crate::classifier::IntentClassifier;
use crate::composer::{compose, ComposeInput, Template};
use crate::extractor::ContextExtractor;
use crate::generator::ResponseGenerator;
use crate::memory_window::MemoryWindow;

/// Returned instead of an answer while no profile has been analyzed.
pub const PROFILE_REQUIRED_MESSAGE: &str =
    "Please provide a LinkedIn URL first to analyze your profile.";

/// Where a turn is. Used for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStage {
    AwaitingContext,
    Classifying,
    Composing,
    Generating,
    Done,
    Failed,
}

impl TurnStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingContext => "awaiting_context",
            Self::Classifying => "classifying",
            Self::Composing => "composing",
            Self::Generating => "generating",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TurnStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of a turn that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The model answered; the exchange was appended to history.
    Answered { intent: Intent, text: String },
    /// No profile yet. Nothing was called and history is untouched.
    NeedsProfile(&'static str),
}

impl TurnOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Answered { text, .. } => text,
            Self::NeedsProfile(message) => message,
        }
    }
}

/// Ties extraction, classification, composition and generation together.
pub struct Orchestrator {
    extractor: ContextExtractor,
    classifier: IntentClassifier,
    generator: ResponseGenerator,
    memory: MemoryWindow,
}

impl Orchestrator {
    /// All three model calls share one provider and one model identifier.
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            extractor: ContextExtractor::new(provider.clone(), model.clone()),
            classifier: IntentClassifier::new(provider.clone(), model.clone()),
            generator: ResponseGenerator::new(provider, model),
            memory: MemoryWindow::default(),
        }
    }

    /// Build from configuration: model, generation temperature and cap, memory window.
    pub fn from_config(provider: Arc<dyn Provider>, config: &AppConfig) -> Self {
        Self::new(provider, config.default_model.clone())
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens)
            .with_memory_window(config.conversation.memory_window)
    }

    pub fn with_memory_window(mut self, size: usize) -> Self {
        self.memory = MemoryWindow::new(size);
        self
    }

    /// Sampling temperature for answers. Extraction and classification stay at 0.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.generator = self.generator.with_temperature(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.generator = self.generator.with_max_tokens(max_tokens);
        self
    }

    /// Fetch and analyze a profile, replacing the session's profile on success.
    ///
    /// On failure the session keeps whatever profile it had before.
    pub async fn analyze_profile(
        &self,
        session: &mut SessionState,
        scraper: &dyn ProfileScraper,
        url: &str,
        job_titles: Vec<String>,
    ) -> Result<ProfileContext, AnalysisError> {
        info!(session = %session.id, url, "Analyzing profile");

        let data = scraper.fetch(url).await.inspect_err(|e| {
            warn!(session = %session.id, error = %e, "No profile available");
        })?;
        if data.is_empty() {
            warn!(session = %session.id, url, "Profile source returned no data");
            return Err(ScrapeError::NotFound(url.to_string()).into());
        }

        let context = self.extractor.extract(&data).await?;

        session.set_profile(data, context.clone());
        session.set_job_titles(job_titles);
        info!(
            session = %session.id,
            experience_level = %context.experience_level(),
            industry = %context.industry(),
            "Profile analyzed"
        );
        Ok(context)
    }

    /// Answer one user query.
    ///
    /// History gains the user message and the answer only when generation
    /// succeeds. A failed generation leaves it unchanged.
    pub async fn handle_turn(
        &self,
        session: &mut SessionState,
        query: &str,
    ) -> Result<TurnOutcome, GenerationError> {
        let (Some(data), Some(context)) = (session.profile_data(), session.profile_context())
        else {
            info!(session = %session.id, stage = %TurnStage::AwaitingContext, "No profile analyzed yet");
            return Ok(TurnOutcome::NeedsProfile(PROFILE_REQUIRED_MESSAGE));
        };

        debug!(session = %session.id, stage = %TurnStage::Classifying, "Classifying query");
        let intent = self.classifier.classify(query).await;

        debug!(session = %session.id, stage = %TurnStage::Composing, intent = %intent, "Composing instruction");
        let memory = self.memory.render(session.history());
        let template = Template::for_context(intent, context.experience_level());
        let instruction = compose(
            template,
            &ComposeInput {
                query,
                profile_data: data,
                context,
                job_titles: session.job_titles(),
                memory: &memory,
            },
        );

        debug!(
            session = %session.id,
            stage = %TurnStage::Generating,
            template = %template,
            memory_chars = memory.len(),
            "Generating answer"
        );
        let answer = match self.generator.generate(&instruction).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(session = %session.id, stage = %TurnStage::Failed, error = %e, "Turn produced no answer");
                return Err(e);
            }
        };

        session.record_exchange(query, answer.clone());
        info!(
            session = %session.id,
            stage = %TurnStage::Done,
            intent = %intent,
            history_len = session.history().len(),
            "Turn complete"
        );
        Ok(TurnOutcome::Answered {
            intent,
            text: answer,
        })
    }
}
