//! Job fit scoring against the caller's target roles.

use linkwise_core::ProfileContext;

use super::{Parts, TargetRoles, Task};

pub(super) fn parts(ctx: &ProfileContext) -> Parts {
    let industry = ctx.industry();

    Parts {
        persona: "You are a job fit analysis expert. Analyze how well the LinkedIn profile matches the target job role. Be short and concise.",
        target_roles: TargetRoles::Required,
        tasks_intro: "Provide a job fit analysis. Choose the answer structure to fit the user query:"
            .to_string(),
        tasks: vec![
            Task::section(
                "Match Score Analysis",
                [
                    "**Overall match score (0-100%)** in large text",
                    "Skills match score",
                    "Experience match score",
                    "Education/certification match score",
                    "Industry experience match score",
                ],
            ),
            Task::section(
                "Job Role Understanding",
                [
                    "Extract the target job role from the user query when no target role is given".to_string(),
                    format!("Create a standard job description for this role in the {industry} industry"),
                    "List key requirements, skills, and qualifications typically needed".into(),
                ],
            ),
            Task::section(
                "Strengths Alignment",
                [
                    "Profile elements that strongly match the job requirements",
                    "Relevant experience and achievements",
                    "Transferable skills that add value",
                ],
            ),
            Task::section(
                "Gap Analysis",
                [
                    "Missing skills or qualifications",
                    "Experience gaps",
                    "Certification or education requirements not met",
                    "Industry-specific knowledge gaps",
                ],
            ),
            Task::section(
                "Improvement Recommendations",
                [
                    "Immediate actions to improve the match score",
                    "Skills to develop or highlight",
                    "Experience to emphasize or reframe",
                    "Keywords to add for ATS optimization",
                    "Sections to update or strengthen",
                ],
            ),
            Task::section(
                "Application Strategy",
                [
                    "How to position the profile for this role",
                    "Cover letter key points",
                    "Interview preparation focus areas",
                    "Network targeting suggestions",
                ],
            ),
        ],
        format: "Format the response in markdown with clear sections, match scores, and actionable recommendations.",
    }
}
