//! Skill gap planning and career development.

use linkwise_core::ProfileContext;

use super::{Parts, TargetRoles, Task};

pub(super) fn parts(ctx: &ProfileContext) -> Parts {
    let industry = ctx.industry();

    Parts {
        persona: "You are a career counseling expert specializing in skill gap analysis and career development. Be short and concise.",
        target_roles: TargetRoles::Listed,
        tasks_intro: "Provide career counseling and skill gap analysis using the structure below, adapted to what the user asked:"
            .to_string(),
        tasks: vec![
            Task::section(
                "Current Skills Assessment",
                [
                    "Technical skills inventory",
                    "Soft skills evaluation",
                    "Industry-specific competencies",
                    "Leadership and management capabilities",
                    "Certification and qualification status",
                ],
            ),
            Task::section(
                "Career Path Analysis",
                [
                    "Potential career trajectories based on the current profile".to_string(),
                    format!("Natural progression opportunities in {industry}"),
                    "Lateral movement possibilities".into(),
                    "Industry transition opportunities".into(),
                ],
            ),
            Task::section(
                "Target Role Requirements",
                [
                    "Skills needed for the desired career progression".to_string(),
                    "Industry standards for next-level positions".into(),
                    format!("Emerging skills in {industry}"),
                    "Future-proof skills for career longevity".into(),
                ],
            ),
            Task::section(
                "Skill Gap Identification",
                [
                    "Critical missing skills for career advancement",
                    "Nice-to-have skills for competitive advantage",
                    "Outdated skills that need updating",
                    "Soft skills development needs",
                ],
            ),
            Task::section(
                "Learning and Development Plan",
                [
                    "Priority skills to develop first",
                    "Recommended learning resources (courses, certifications, books)",
                    "Timeline for skill development",
                    "Budget considerations for training",
                ],
            ),
            Task::section(
                "Career Development Strategy",
                [
                    "Short-term goals (3-6 months)",
                    "Medium-term objectives (6-18 months)",
                    "Long-term career vision (2-5 years)",
                    "Networking and mentorship recommendations",
                ],
            ),
            Task::section(
                "Action Plan",
                [
                    "Immediate steps to take",
                    "Milestone tracking suggestions",
                    "Progress measurement methods",
                    "Regular review and adjustment schedule",
                ],
            ),
        ],
        format: "Format the response in markdown with clear sections, timelines, and specific resource recommendations.",
    }
}
