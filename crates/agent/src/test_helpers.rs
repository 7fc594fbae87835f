//! Shared test helpers for pipeline tests.

use linkwise_core::error::ProviderError;
use linkwise_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use linkwise_core::{ExperienceLevel, Industry, ProfileContext};
use std::sync::Mutex;

/// A mock provider that replays scripted results in order and records
/// every request it receives.
///
/// Panics if more calls are made than results provided.
pub struct ScriptedProvider {
    results: Mutex<Vec<Result<String, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new(results: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every call answers with the given texts, in order.
    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut requests = self.requests.lock().unwrap();
        let mut results = self.results.lock().unwrap();

        if results.is_empty() {
            panic!(
                "ScriptedProvider: no more results (call #{})",
                requests.len() + 1
            );
        }

        requests.push(request);
        results.remove(0).map(|text| ProviderResponse {
            text,
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            model: "mock-model".into(),
        })
    }
}

/// A valid junior Tech context with 40% completeness.
pub fn junior_tech_context() -> ProfileContext {
    ProfileContext::new(
        ExperienceLevel::Junior,
        Industry::Tech,
        "early career",
        "internship",
        1.5,
        "Software Engineering Intern",
        40,
    )
    .unwrap()
}

/// The JSON record a model would return for [`junior_tech_context`].
pub const JUNIOR_TECH_JSON: &str = r#"{
    "experience_level": "junior",
    "industry": "Tech",
    "career_stage": "early career",
    "recent_career_type": "internship",
    "total_work_experience": 1.5,
    "role_type": "Software Engineering Intern",
    "profile_completeness": 40
}"#;
