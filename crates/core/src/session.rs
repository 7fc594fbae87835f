//! Per-conversation state owned by the session layer.
//!
//! There is no process-wide session: callers create a [`SessionState`] and
//! pass it by `&mut` into every orchestrator call. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::{ChatMessage, ConversationHistory};
use crate::profile::ProfileContext;

/// Unique identifier for a session, used to correlate log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw profile data exactly as the profile source produced it.
///
/// Opaque to the pipeline: it is embedded verbatim into instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData(String);

impl ProfileData {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<serde_json::Value> for ProfileData {
    fn from(value: serde_json::Value) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ProfileData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// State of one active conversation.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub id: SessionId,
    profile: Option<AnalyzedProfile>,
    job_titles: Vec<String>,
    history: ConversationHistory,
}

/// Profile data and the context derived from it always travel together.
#[derive(Debug, Clone)]
struct AnalyzedProfile {
    data: ProfileData,
    context: ProfileContext,
}

impl SessionState {
    /// A fresh session: no profile, no titles, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the analyzed profile. Earlier analyses are discarded.
    pub fn set_profile(&mut self, data: ProfileData, context: ProfileContext) {
        self.profile = Some(AnalyzedProfile { data, context });
    }

    pub fn profile_data(&self) -> Option<&ProfileData> {
        self.profile.as_ref().map(|p| &p.data)
    }

    pub fn profile_context(&self) -> Option<&ProfileContext> {
        self.profile.as_ref().map(|p| &p.context)
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    pub fn set_job_titles(&mut self, titles: Vec<String>) {
        self.job_titles = titles;
    }

    pub fn job_titles(&self) -> &[String] {
        &self.job_titles
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Record a completed exchange: the user message, then the answer.
    pub fn record_exchange(&mut self, query: impl Into<String>, answer: impl Into<String>) {
        self.history.push(ChatMessage::user(query));
        self.history.push(ChatMessage::assistant(answer));
    }

    /// Reset the conversation. Profile and job titles are kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Split free text into job titles: one per line, trimmed, blanks dropped.
pub fn parse_job_titles(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
