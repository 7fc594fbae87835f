//! Prompt composition: one pure template per (intent, experience tier).
//!
//! Every template renders the same sections in the same order:
//!
//! 1. conversation memory block (may be empty)
//! 2. persona and tone directive
//! 3. the user query, verbatim
//! 4. target roles (job fit and career counseling only)
//! 5. raw profile data and every structured context field
//! 6. industry guidance
//! 7. numbered task instructions
//! 8. output format directive
//!
//! # Determinism
//!
//! Composition reads only its inputs. Identical inputs always produce
//! byte-identical instructions.

mod career_counseling;
mod content_rewrite;
mod general;
pub mod industry;
mod job_fit;
mod profile_analysis;

use linkwise_core::{ComposeError, ExperienceLevel, Intent, ProfileContext, ProfileData};

pub use industry::{industry_guidance, DEFAULT_GUIDANCE};

/// A concrete template. Tiered intents carry the tier they render for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    ContentRewrite(ExperienceLevel),
    ProfileAnalysis(ExperienceLevel),
    JobFit,
    CareerCounseling,
    General,
}

impl Template {
    /// Select the template for a classified intent and a validated tier.
    pub fn for_context(intent: Intent, level: ExperienceLevel) -> Self {
        match intent {
            Intent::ContentRewrite => Self::ContentRewrite(level),
            Intent::ProfileAnalysis => Self::ProfileAnalysis(level),
            Intent::JobFitAnalysis => Self::JobFit,
            Intent::CareerCounseling => Self::CareerCounseling,
            Intent::General => Self::General,
        }
    }

    /// Select a template from a free-form tier label.
    ///
    /// The label only matters for tiered intents, where anything other than
    /// junior, mid-level or senior is rejected.
    pub fn resolve(intent: Intent, tier: &str) -> Result<Self, ComposeError> {
        let level = || {
            ExperienceLevel::parse(tier)
                .ok_or_else(|| ComposeError::UnrecognizedTier(tier.to_string()))
        };
        Ok(match intent {
            Intent::ContentRewrite => Self::ContentRewrite(level()?),
            Intent::ProfileAnalysis => Self::ProfileAnalysis(level()?),
            Intent::JobFitAnalysis => Self::JobFit,
            Intent::CareerCounseling => Self::CareerCounseling,
            Intent::General => Self::General,
        })
    }

    pub fn intent(self) -> Intent {
        match self {
            Self::ContentRewrite(_) => Intent::ContentRewrite,
            Self::ProfileAnalysis(_) => Intent::ProfileAnalysis,
            Self::JobFit => Intent::JobFitAnalysis,
            Self::CareerCounseling => Intent::CareerCounseling,
            Self::General => Intent::General,
        }
    }

    /// The tier baked into the template, if it is tiered.
    pub fn tier(self) -> Option<ExperienceLevel> {
        match self {
            Self::ContentRewrite(level) | Self::ProfileAnalysis(level) => Some(level),
            Self::JobFit | Self::CareerCounseling | Self::General => None,
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tier() {
            Some(level) => write!(f, "{}/{}", self.intent(), level),
            None => write!(f, "{}", self.intent()),
        }
    }
}

/// Everything a template reads.
#[derive(Debug, Clone, Copy)]
pub struct ComposeInput<'a> {
    /// The user query, embedded verbatim
    pub query: &'a str,
    pub profile_data: &'a ProfileData,
    pub context: &'a ProfileContext,
    /// Target job titles, possibly empty
    pub job_titles: &'a [String],
    /// Rendered memory block, empty before the first full exchange
    pub memory: &'a str,
}

/// Build the instruction for `template`.
pub fn compose(template: Template, input: &ComposeInput<'_>) -> String {
    let tone_level = template
        .tier()
        .unwrap_or_else(|| input.context.experience_level());

    let parts = match template {
        Template::ContentRewrite(level) => content_rewrite::parts(level, input.context),
        Template::ProfileAnalysis(level) => profile_analysis::parts(level, input.context),
        Template::JobFit => job_fit::parts(input.context),
        Template::CareerCounseling => career_counseling::parts(input.context),
        Template::General => general::parts(),
    };

    render(parts, tone_level, input)
}

/// Tone directive for a tier.
fn tone(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Junior => {
            "Be encouraging and give friendly, simple guidance suited to a junior professional."
        }
        ExperienceLevel::MidLevel => {
            "Give professional, technical guidance suited to a mid-level professional."
        }
        ExperienceLevel::Senior => {
            "Give sophisticated, strategic guidance suited to a senior professional."
        }
    }
}

/// How a template treats the caller's target job titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetRoles {
    /// Not rendered at all.
    Omitted,
    /// Rendered when present.
    Listed,
    /// Always rendered; with no titles the model infers the role from the query.
    Required,
}

/// One numbered instruction, optionally with bullet points.
struct Task {
    title: String,
    points: Vec<String>,
}

impl Task {
    fn line(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: Vec::new(),
        }
    }

    fn section<I, S>(title: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            points: points.into_iter().map(Into::into).collect(),
        }
    }
}

/// The template-specific pieces of an instruction.
struct Parts {
    persona: &'static str,
    target_roles: TargetRoles,
    tasks_intro: String,
    tasks: Vec<Task>,
    format: &'static str,
}

fn render(parts: Parts, tone_level: ExperienceLevel, input: &ComposeInput<'_>) -> String {
    let ctx = input.context;
    let mut out = String::with_capacity(
        input.memory.len() + input.profile_data.as_str().len() + input.query.len() + 2048,
    );

    out.push_str(input.memory);
    out.push_str(&format!("{} {}\n\n", parts.persona, tone(tone_level)));
    out.push_str(&format!("USER QUERY: {}\n\n", input.query));

    match (parts.target_roles, input.job_titles.is_empty()) {
        (TargetRoles::Omitted, _) | (TargetRoles::Listed, true) => {}
        (TargetRoles::Listed, false) | (TargetRoles::Required, false) => {
            out.push_str(&format!("TARGET ROLES: {}\n\n", input.job_titles.join(", ")));
        }
        (TargetRoles::Required, true) => {
            out.push_str(
                "TARGET ROLES: none provided. Infer the target job role from the user query.\n\n",
            );
        }
    }

    out.push_str(&format!("PROFILE DATA:\n{}\n\n", input.profile_data));

    out.push_str("CONTEXT:\n");
    out.push_str(&format!("- Experience Level: {}\n", ctx.experience_level()));
    out.push_str(&format!("- Industry: {}\n", ctx.industry()));
    out.push_str(&format!("- Career Stage: {}\n", ctx.career_stage()));
    out.push_str(&format!("- Recent Career Type: {}\n", ctx.recent_career_type()));
    out.push_str(&format!(
        "- Total Work Experience: {} years\n",
        ctx.total_work_experience()
    ));
    out.push_str(&format!("- Current Role: {}\n", ctx.role_type()));
    out.push_str(&format!(
        "- Profile Completeness: {}%\n\n",
        ctx.profile_completeness()
    ));

    out.push_str(&format!(
        "Industry Context: {}\n\n",
        industry_guidance(ctx.industry().as_str())
    ));

    out.push_str(&parts.tasks_intro);
    out.push_str("\n\n");
    for (i, task) in parts.tasks.iter().enumerate() {
        if task.points.is_empty() {
            out.push_str(&format!("{}. {}\n", i + 1, task.title));
        } else {
            out.push_str(&format!("{}. **{}**:\n", i + 1, task.title));
            for point in &task.points {
                out.push_str(&format!("   - {point}\n"));
            }
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(parts.format);
    out.push('\n');
    out
}
