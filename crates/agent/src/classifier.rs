//! Intent classification.
//!
//! `classify` is total: any provider failure or unrecognized answer degrades
//! to [`Intent::General`] so the turn always has a template to run.

use std::sync::Arc;

use linkwise_core::provider::{Provider, ProviderRequest};
use linkwise_core::Intent;
use tracing::{debug, warn};

/// Maps a free-text query to one of the fixed intents.
pub struct IntentClassifier {
    provider: Arc<dyn Provider>,
    model: String,
}

impl IntentClassifier {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub async fn classify(&self, query: &str) -> Intent {
        let request = ProviderRequest::new(&self.model, build_classification_prompt(query))
            .with_temperature(0.0);

        match self.provider.complete(request).await {
            Ok(response) => match parse_label(&response.text) {
                Some(intent) => {
                    debug!(intent = %intent, "Classified query");
                    intent
                }
                None => {
                    warn!(
                        answer = %response.text.trim(),
                        "Unrecognized intent label, falling back to general"
                    );
                    Intent::General
                }
            },
            Err(e) => {
                warn!(error = %e, "Intent classification failed, falling back to general");
                Intent::General
            }
        }
    }
}

/// The classification instruction listing every category with its definition.
pub fn build_classification_prompt(query: &str) -> String {
    let mut prompt = String::from("Classify this query into one category:\n");
    for (i, intent) in Intent::ALL.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. \"{}\" - {}\n",
            i + 1,
            intent.as_str(),
            intent.definition()
        ));
    }
    prompt.push_str(&format!("\nQuery: \"{query}\"\n\n"));
    prompt.push_str("Respond with only the category name.\n");
    prompt
}

/// Normalize a model answer and match it against the category tokens.
///
/// Tolerates surrounding whitespace, quotes, backticks, a trailing period and
/// any case. Only the first non-empty line is considered.
pub fn parse_label(answer: &str) -> Option<Intent> {
    let line = answer.lines().map(str::trim).find(|l| !l.is_empty())?;
    let token = line
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '`' | '.') || c.is_whitespace())
        .to_lowercase();
    Intent::parse(&token)
}
