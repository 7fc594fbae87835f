//! The closed set of query intents.

use serde::{Deserialize, Serialize};

/// The classified purpose of a user query.
///
/// `General` is the fallback for anything the classifier cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ContentRewrite,
    ProfileAnalysis,
    JobFitAnalysis,
    CareerCounseling,
    General,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Self::ContentRewrite,
        Self::ProfileAnalysis,
        Self::JobFitAnalysis,
        Self::CareerCounseling,
        Self::General,
    ];

    /// The token the classifier is asked to answer with.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ContentRewrite => "content_rewrite",
            Self::ProfileAnalysis => "profile_analysis",
            Self::JobFitAnalysis => "job_fit_analysis",
            Self::CareerCounseling => "career_counseling",
            Self::General => "general",
        }
    }

    /// Natural-language definition shown to the classifier.
    pub fn definition(self) -> &'static str {
        match self {
            Self::ContentRewrite => {
                "optimize/rewrite LinkedIn sections/generate content/change content etc."
            }
            Self::ProfileAnalysis => {
                "analyze profile gaps/evaluation/tell me about my profile/how is my profile etc."
            }
            Self::JobFitAnalysis => {
                "analyze job role fit/what are my chances for this job/how do I fit for this role etc."
            }
            Self::CareerCounseling => {
                "career advice/skill gaps/how to advance my career/help in career progression etc."
            }
            Self::General => "other questions if not fitting into above categories.",
        }
    }

    /// Case-insensitive match against the category tokens.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Intent::parse("Content_Rewrite"), Some(Intent::ContentRewrite));
        assert_eq!(Intent::parse("  general \n"), Some(Intent::General));
        assert_eq!(Intent::parse("rewrite"), None);
    }

    #[test]
    fn every_intent_roundtrips_through_its_token() {
        for intent in Intent::ALL {
            assert_eq!(Intent::parse(intent.as_str()), Some(intent));
        }
    }

    #[test]
    fn serde_uses_tokens() {
        let json = serde_json::to_string(&Intent::JobFitAnalysis).unwrap();
        assert_eq!(json, "\"job_fit_analysis\"");
    }
}
