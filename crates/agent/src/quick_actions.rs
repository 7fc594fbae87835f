//! Canned queries offered next to the free-text prompt.

/// A one-click query. Runs through the normal turn pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    AnalyzeProfile,
    ImproveAbout,
    ImproveHeadline,
    OptimizeSkills,
    JobFit,
    SkillGap,
}

impl QuickAction {
    pub const ALL: [QuickAction; 6] = [
        Self::AnalyzeProfile,
        Self::ImproveAbout,
        Self::ImproveHeadline,
        Self::OptimizeSkills,
        Self::JobFit,
        Self::SkillGap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AnalyzeProfile => "Analyze Profile",
            Self::ImproveAbout => "Improve About Section",
            Self::ImproveHeadline => "Improve Headline",
            Self::OptimizeSkills => "Optimize Skills",
            Self::JobFit => "Job Fit Analysis",
            Self::SkillGap => "Skill Gap Analysis",
        }
    }

    /// The query submitted for this action. Job fit targets the first title.
    pub fn query(self, job_titles: &[String]) -> String {
        match self {
            Self::AnalyzeProfile => {
                "Analyze my LinkedIn profile and identify key gaps and improvement areas".into()
            }
            Self::ImproveAbout => "Rewrite and optimize my About section".into(),
            Self::ImproveHeadline => "Rewrite and optimize my LinkedIn headline".into(),
            Self::OptimizeSkills => "Optimize my skills section for better visibility".into(),
            Self::JobFit => match job_titles.first() {
                Some(title) => format!("Analyze my fit for {title} role"),
                None => "Analyze my profile for job opportunities".into(),
            },
            Self::SkillGap => "What skills do I need to develop for career advancement?".into(),
        }
    }

    /// 1-based lookup, as numbered in menus.
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl std::fmt::Display for QuickAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
