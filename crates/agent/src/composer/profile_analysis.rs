//! Profile gap analysis with a five-part checklist per tier.

use linkwise_core::{ExperienceLevel, ProfileContext};

use super::{Parts, TargetRoles, Task};

pub(super) fn parts(level: ExperienceLevel, ctx: &ProfileContext) -> Parts {
    let completeness = format!("Current completeness score: {}%", ctx.profile_completeness());
    let industry = ctx.industry();

    let (tasks, format) = match level {
        ExperienceLevel::Junior => (
            vec![
                Task::section(
                    "Profile Foundation Assessment",
                    [
                        "About Section: Is it clear, enthusiastic, and shows potential?".to_string(),
                        "Experience Section: Are internships, projects, and part-time work well-described?".into(),
                        "Skills Section: Balance of technical and soft skills for entry-level roles".into(),
                        "Education Section: Academic projects, coursework, and achievements".into(),
                        "Certifications: Entry-level certifications and online courses".into(),
                    ],
                ),
                Task::section(
                    "Entry-Level Optimization",
                    [
                        "Highlighting transferable skills from education and internships".to_string(),
                        "Showcasing personal projects and volunteer work".into(),
                        "Demonstrating eagerness to learn and grow".into(),
                        format!("Missing foundational skills for {industry}"),
                    ],
                ),
                Task::section(
                    "Profile Building Strategy",
                    [
                        completeness,
                        "Quick wins to improve profile visibility".into(),
                        "Essential sections to complete first".into(),
                        "How to make the most of limited experience".into(),
                    ],
                ),
                Task::section(
                    "Junior-Level Best Practices",
                    [
                        "How to stand out as a new graduate or junior professional",
                        "Keywords that recruiters look for in junior candidates",
                        "Building credibility with limited experience",
                        "Networking strategies for career starters",
                    ],
                ),
                Task::section(
                    "Growth-Focused Action Plan",
                    [
                        "Immediate steps to strengthen the profile",
                        "Skills to develop and showcase",
                        "How to gain relevant experience",
                        "Building a professional network",
                    ],
                ),
            ],
            "Use simple language, give step-by-step guidance, and build confidence. Format the response in markdown with clear sections.",
        ),
        ExperienceLevel::MidLevel => (
            vec![
                Task::section(
                    "Professional Growth Assessment",
                    [
                        "About Section: Does it reflect career progression and future aspirations?",
                        "Experience Section: Are achievements quantified and impact clearly shown?",
                        "Skills Section: Advanced technical skills and emerging leadership abilities",
                        "Education Section: Continued learning and professional development",
                        "Certifications: Industry-relevant and advanced certifications",
                    ],
                ),
                Task::section(
                    "Career Advancement Optimization",
                    [
                        "Demonstrating progression from junior to mid-level responsibilities",
                        "Leadership experience and team collaboration",
                        "Strategic thinking and problem-solving capabilities",
                        "Industry expertise and specialized knowledge gaps",
                    ],
                ),
                Task::section(
                    "Competitive Positioning",
                    [
                        completeness,
                        "How to stand out among other mid-level professionals".into(),
                        "Thought leadership opportunities".into(),
                        format!("Building authority in {industry}"),
                    ],
                ),
                Task::section(
                    "Mid-Level Professional Standards",
                    [
                        format!(
                            "Industry benchmarks for {} years of experience",
                            ctx.total_work_experience()
                        ),
                        "Advanced keywords and technical terminology".into(),
                        "Networking for career advancement".into(),
                        "Building a professional brand".into(),
                    ],
                ),
                Task::section(
                    "Strategic Career Development",
                    [
                        "Preparing for senior-level transitions",
                        "Skill gaps for the next career level",
                        "Leadership development opportunities",
                        "Industry trend alignment",
                    ],
                ),
            ],
            "Use professional language, focus on strategic career moves, and adapt the sections to the user query. Format the response in markdown with clear sections.",
        ),
        ExperienceLevel::Senior => (
            vec![
                Task::section(
                    "Executive Presence Assessment",
                    [
                        "About Section: Does it convey thought leadership and strategic vision?",
                        "Experience Section: Are major achievements and business impact highlighted?",
                        "Skills Section: Leadership competencies and industry expertise",
                        "Education Section: Executive education and board positions",
                        "Certifications: Executive-level credentials and thought leadership",
                    ],
                ),
                Task::section(
                    "Leadership and Impact Optimization",
                    [
                        "Demonstrating organizational influence and strategic decision-making",
                        "Mentorship and team development capabilities",
                        "Industry contributions and innovation leadership",
                        "Business transformation and growth initiatives",
                    ],
                ),
                Task::section(
                    "Executive-Level Positioning",
                    [
                        completeness,
                        "Thought leadership and industry recognition".into(),
                        "Speaking engagements and publications".into(),
                        "Board positions and advisory roles".into(),
                    ],
                ),
                Task::section(
                    "Senior Professional Standards",
                    [
                        "C-suite and executive-level expectations",
                        "Industry thought leadership opportunities",
                        "Strategic networking and relationship building",
                        "Personal brand as an industry expert",
                    ],
                ),
                Task::section(
                    "Legacy and Succession Planning",
                    [
                        "Knowledge transfer and mentorship opportunities",
                        "Industry contributions and lasting impact",
                        "Succession planning and talent development",
                        "Future-proofing career trajectory",
                    ],
                ),
            ],
            "Use sophisticated language, focus on strategic leadership and industry influence, and choose sections to fit the user query. Format the response in markdown with clear sections.",
        ),
    };

    Parts {
        persona: "You are a LinkedIn profile analysis expert.",
        target_roles: TargetRoles::Omitted,
        tasks_intro: format!("As a {level} professional, focus your analysis on:"),
        tasks,
        format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkwise_core::Industry;

    fn context(level: ExperienceLevel) -> ProfileContext {
        ProfileContext::new(level, Industry::Construction, "mid-career", "full-time", 9.0, "Site Manager", 70)
            .unwrap()
    }

    #[test]
    fn every_tier_has_five_sections() {
        for level in ExperienceLevel::ALL {
            let parts = parts(level, &context(level));
            assert_eq!(parts.tasks.len(), 5, "{level}");
            assert!(parts.tasks.iter().all(|t| !t.points.is_empty()));
        }
    }

    #[test]
    fn checklists_differ_by_tier() {
        let junior = parts(ExperienceLevel::Junior, &context(ExperienceLevel::Junior));
        let senior = parts(ExperienceLevel::Senior, &context(ExperienceLevel::Senior));
        assert_eq!(junior.tasks[0].title, "Profile Foundation Assessment");
        assert_eq!(senior.tasks[0].title, "Executive Presence Assessment");
        assert!(junior.tasks_intro.contains("junior professional"));
    }

    #[test]
    fn context_values_are_interpolated() {
        let mid = parts(ExperienceLevel::MidLevel, &context(ExperienceLevel::MidLevel));
        let points: Vec<&String> = mid.tasks.iter().flat_map(|t| &t.points).collect();
        assert!(points.iter().any(|p| p.as_str() == "Current completeness score: 70%"));
        assert!(points.iter().any(|p| p.as_str() == "Building authority in Construction"));
        assert!(points.iter().any(|p| p.contains("9 years of experience")));
    }
}
