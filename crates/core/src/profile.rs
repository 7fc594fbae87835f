//! The structured profile context and its strict decoder.
//!
//! A [`ProfileContext`] is either fully valid or does not exist. Its fields
//! are private and the only constructors ([`ProfileContext::new`],
//! [`ProfileContext::from_json_str`], [`ProfileContext::from_value`]) run the
//! full field-level validation. Missing fields are never guessed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ExtractionError;

/// Seniority of the profile owner. Drives tone and depth of composed instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "junior")]
    Junior,
    #[serde(rename = "mid-level")]
    MidLevel,
    #[serde(rename = "senior")]
    Senior,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [Self::Junior, Self::MidLevel, Self::Senior];

    /// Canonical label, as requested from the model.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::MidLevel => "mid-level",
            Self::Senior => "senior",
        }
    }

    /// Case-insensitive match against the canonical labels.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of industries a profile is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "Tech")]
    Tech,
    #[serde(rename = "Financial Services")]
    FinancialServices,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Marketing and Advertising")]
    MarketingAndAdvertising,
    #[serde(rename = "Construction")]
    Construction,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Retail")]
    Retail,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Self::Tech,
        Self::FinancialServices,
        Self::Healthcare,
        Self::MarketingAndAdvertising,
        Self::Construction,
        Self::Education,
        Self::Retail,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tech => "Tech",
            Self::FinancialServices => "Financial Services",
            Self::Healthcare => "Healthcare",
            Self::MarketingAndAdvertising => "Marketing and Advertising",
            Self::Construction => "Construction",
            Self::Education => "Education",
            Self::Retail => "Retail",
        }
    }

    /// Case-insensitive match against the canonical labels.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|industry| industry.as_str().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated summary of a profile, derived once per analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileContext {
    experience_level: ExperienceLevel,
    industry: Industry,
    career_stage: String,
    recent_career_type: String,
    total_work_experience: f64,
    role_type: String,
    profile_completeness: u8,
}

impl ProfileContext {
    /// Build a context from already-typed tier and industry, validating the rest.
    pub fn new(
        experience_level: ExperienceLevel,
        industry: Industry,
        career_stage: impl Into<String>,
        recent_career_type: impl Into<String>,
        total_work_experience: f64,
        role_type: impl Into<String>,
        profile_completeness: u8,
    ) -> Result<Self, ExtractionError> {
        Ok(Self {
            experience_level,
            industry,
            career_stage: non_empty_label("career_stage", career_stage.into())?,
            recent_career_type: non_empty_label("recent_career_type", recent_career_type.into())?,
            total_work_experience: validate_years(total_work_experience)?,
            role_type: non_empty_label("role_type", role_type.into())?,
            profile_completeness: validate_completeness(i64::from(profile_completeness))?,
        })
    }

    /// Decode a JSON document. Anything that is not a JSON object is a parse error.
    pub fn from_json_str(text: &str) -> Result<Self, ExtractionError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ExtractionError::Parse(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Decode an already-parsed JSON value. Unknown keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ExtractionError> {
        if !value.is_object() {
            return Err(ExtractionError::Parse(format!(
                "expected a JSON object, found {}",
                json_kind(value)
            )));
        }
        let raw = RawProfile::deserialize(value).map_err(|e| ExtractionError::Parse(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    pub fn industry(&self) -> Industry {
        self.industry
    }

    pub fn career_stage(&self) -> &str {
        &self.career_stage
    }

    pub fn recent_career_type(&self) -> &str {
        &self.recent_career_type
    }

    /// Years of work experience, always `>= 0`.
    pub fn total_work_experience(&self) -> f64 {
        self.total_work_experience
    }

    pub fn role_type(&self) -> &str {
        &self.role_type
    }

    /// Percentage in `0..=100`.
    pub fn profile_completeness(&self) -> u8 {
        self.profile_completeness
    }

    /// Label/value pairs for the profile summary panel.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Experience Level", title_case(self.experience_level.as_str())),
            ("Industry", self.industry.to_string()),
            ("Career Stage", title_case(&self.career_stage)),
            ("Work Experience", format!("{} years", self.total_work_experience)),
            ("Current Role", self.role_type.clone()),
            ("Profile Completeness", format!("{}%", self.profile_completeness)),
        ]
    }
}

/// The record as the model returned it, before any field is trusted.
#[derive(Debug, Deserialize)]
struct RawProfile {
    experience_level: Option<RawValue>,
    industry: Option<RawValue>,
    career_stage: Option<RawValue>,
    recent_career_type: Option<RawValue>,
    total_work_experience: Option<RawValue>,
    role_type: Option<RawValue>,
    profile_completeness: Option<RawValue>,
}

/// A single field. Numbers may arrive as JSON numbers or numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

impl TryFrom<RawProfile> for ProfileContext {
    type Error = ExtractionError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        let level_label = required(raw.experience_level, "experience_level")?.text("experience_level")?;
        let experience_level = ExperienceLevel::parse(&level_label).ok_or_else(|| {
            ExtractionError::invalid(
                "experience_level",
                format!("{level_label:?} is not one of junior, mid-level, senior"),
            )
        })?;

        let industry_label = required(raw.industry, "industry")?.text("industry")?;
        let industry = Industry::parse(&industry_label).ok_or_else(|| {
            ExtractionError::invalid(
                "industry",
                format!("{industry_label:?} is not a supported industry"),
            )
        })?;

        Ok(Self {
            experience_level,
            industry,
            career_stage: non_empty_label(
                "career_stage",
                required(raw.career_stage, "career_stage")?.text("career_stage")?,
            )?,
            recent_career_type: non_empty_label(
                "recent_career_type",
                required(raw.recent_career_type, "recent_career_type")?.text("recent_career_type")?,
            )?,
            total_work_experience: validate_years(
                required(raw.total_work_experience, "total_work_experience")?
                    .float("total_work_experience")?,
            )?,
            role_type: non_empty_label(
                "role_type",
                required(raw.role_type, "role_type")?.text("role_type")?,
            )?,
            profile_completeness: validate_completeness(
                required(raw.profile_completeness, "profile_completeness")?
                    .integer("profile_completeness")?,
            )?,
        })
    }
}

/// Absent and `null` fields are both missing.
fn required(value: Option<RawValue>, name: &'static str) -> Result<RawValue, ExtractionError> {
    value.ok_or_else(|| ExtractionError::invalid(name, "missing"))
}

impl RawValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::Text(_) => "a string",
            Self::Other(value) => json_kind(value),
        }
    }

    fn text(self, name: &'static str) -> Result<String, ExtractionError> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(ExtractionError::invalid(
                name,
                format!("expected a string, found {}", other.kind()),
            )),
        }
    }

    fn float(self, name: &'static str) -> Result<f64, ExtractionError> {
        match self {
            Self::Number(n) => n
                .as_f64()
                .ok_or_else(|| ExtractionError::invalid(name, "number out of range")),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| ExtractionError::invalid(name, format!("{s:?} is not a number"))),
            other => Err(ExtractionError::invalid(
                name,
                format!("expected a number, found {}", other.kind()),
            )),
        }
    }

    /// Integral floats such as `40.0` are accepted; `40.5` is not.
    fn integer(self, name: &'static str) -> Result<i64, ExtractionError> {
        let not_integer =
            |shown: String| ExtractionError::invalid(name, format!("{shown} is not an integer"));
        match self {
            Self::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Ok(i),
                (None, Some(f)) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    Ok(f as i64)
                }
                _ => Err(not_integer(n.to_string())),
            },
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| not_integer(format!("{s:?}"))),
            other => Err(ExtractionError::invalid(
                name,
                format!("expected an integer, found {}", other.kind()),
            )),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn non_empty_label(name: &'static str, value: String) -> Result<String, ExtractionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::invalid(name, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_years(years: f64) -> Result<f64, ExtractionError> {
    if !years.is_finite() || years < 0.0 {
        return Err(ExtractionError::invalid(
            "total_work_experience",
            format!("{years} is not a non-negative number of years"),
        ));
    }
    Ok(years)
}

fn validate_completeness(value: i64) -> Result<u8, ExtractionError> {
    match u8::try_from(value) {
        Ok(pct) if pct <= 100 => Ok(pct),
        _ => Err(ExtractionError::invalid(
            "profile_completeness",
            format!("{value} is outside 0..=100"),
        )),
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
