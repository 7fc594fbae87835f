//! Structured context extraction.
//!
//! One model call turns raw profile data into a [`ProfileContext`]. The
//! answer is decoded strictly: a partially valid record is an error, and
//! missing fields are never filled in.

use std::sync::Arc;

use linkwise_core::{ExperienceLevel, ExtractionError, Industry, ProfileContext, ProfileData};
use linkwise_core::provider::{Provider, ProviderRequest};
use tracing::{debug, info, warn};

/// Derives a validated [`ProfileContext`] from raw profile data.
pub struct ContextExtractor {
    provider: Arc<dyn Provider>,
    model: String,
}

impl ContextExtractor {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub async fn extract(&self, data: &ProfileData) -> Result<ProfileContext, ExtractionError> {
        if data.is_empty() {
            return Err(ExtractionError::Parse("profile data is empty".into()));
        }

        let request = ProviderRequest::new(&self.model, build_extraction_prompt(data))
            .with_temperature(0.0);

        debug!(provider = %self.provider.name(), model = %self.model, "Requesting profile context");

        let response = self.provider.complete(request).await.inspect_err(|e| {
            warn!(error = %e, "Profile context call failed");
        })?;

        match ProfileContext::from_json_str(strip_code_fence(&response.text)) {
            Ok(context) => {
                info!(
                    experience_level = %context.experience_level(),
                    industry = %context.industry(),
                    completeness = context.profile_completeness(),
                    "Profile context extracted"
                );
                Ok(context)
            }
            Err(e) => {
                warn!(error = %e, "Rejected profile context");
                Err(e)
            }
        }
    }
}

/// The instruction asking the model for a bare JSON record.
pub fn build_extraction_prompt(data: &ProfileData) -> String {
    let levels: Vec<&str> = ExperienceLevel::ALL.iter().map(|l| l.as_str()).collect();
    let industries: Vec<&str> = Industry::ALL.iter().map(|i| i.as_str()).collect();

    format!(
        r#"Analyze this LinkedIn profile and return only JSON, with no commentary:
{data}

JSON format:
{{
    "experience_level": "{levels}",
    "industry": "{industries}" based on their complete profile,
    "career_stage": "early career/mid-career/late career/Director",
    "recent_career_type": "full-time/part-time/internship/freelance/Founder/leadership/consulting/entrepreneurial",
    "total_work_experience": work experience in years as a float,
    "role_type": "current role title",
    "profile_completeness": percentage completeness as an integer from 0 to 100
}}
"#,
        levels = levels.join("/"),
        industries = industries.join("/"),
    )
}

/// Drop a surrounding markdown code fence (with optional info string).
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.trim_end();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
