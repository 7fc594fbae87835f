//! Rewriting or generating a profile section.

use linkwise_core::{ExperienceLevel, ProfileContext};

use super::{Parts, TargetRoles, Task};

pub(super) fn parts(level: ExperienceLevel, ctx: &ProfileContext) -> Parts {
    let anchor = Task::line(format!(
        "Rewrite and optimize the requested section for {} years of experience, most recently working as {} ({}).",
        ctx.total_work_experience(),
        ctx.role_type(),
        ctx.recent_career_type(),
    ));
    let examples = Task::line(
        "Include the options or examples in markdown that is easy to copy and paste.",
    );
    let completeness = Task::line(format!(
        "Suggest how to improve profile completeness from {}%.",
        ctx.profile_completeness()
    ));

    let tasks = match level {
        ExperienceLevel::Junior => vec![
            anchor,
            Task::line("Simplify technical language."),
            Task::line("Include step-by-step guidance if needed."),
            Task::line("Optimize the requested section to increase hiring chances."),
            examples,
            completeness,
            Task::line(
                "Check the number of connections in the profile data; if it is low, suggest ways to grow the network.",
            ),
            Task::line("Avoid leadership advice."),
        ],
        ExperienceLevel::MidLevel => vec![
            anchor,
            Task::line("Use technical language."),
            Task::line("Include growth and leadership qualities."),
            Task::line(
                "Optimize the requested section to increase future hiring chances and expand its reach.",
            ),
            examples,
            completeness,
        ],
        ExperienceLevel::Senior => vec![
            anchor,
            Task::line("Use technical language."),
            Task::line("Include leadership and growth strategies if needed."),
            Task::line("Optimize the requested section to increase its reach and audience."),
            examples,
            completeness,
        ],
    };

    Parts {
        persona: "You are a LinkedIn guru. Be concise.",
        target_roles: TargetRoles::Omitted,
        tasks_intro: format!(
            "Optimize or generate the content asked for in the user query so it matches {} experience in the {} industry.",
            level,
            ctx.industry()
        ),
        tasks,
        format: "Format the response in markdown with clear sections, ready to paste into the profile.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkwise_core::Industry;

    fn context() -> ProfileContext {
        ProfileContext::new(
            ExperienceLevel::Junior,
            Industry::Education,
            "early career",
            "part-time",
            2.0,
            "Teaching Assistant",
            55,
        )
        .unwrap()
    }

    #[test]
    fn junior_rules_keep_it_simple() {
        let parts = parts(ExperienceLevel::Junior, &context());
        let titles: Vec<_> = parts.tasks.iter().map(|t| t.title.as_str()).collect();
        assert!(titles.contains(&"Simplify technical language."));
        assert!(titles.contains(&"Avoid leadership advice."));
        assert!(titles.iter().any(|t| t.contains("number of connections")));
    }

    #[test]
    fn senior_rules_target_reach() {
        let parts = parts(ExperienceLevel::Senior, &context());
        let titles: Vec<_> = parts.tasks.iter().map(|t| t.title.as_str()).collect();
        assert!(titles.iter().any(|t| t.contains("reach and audience")));
        assert!(!titles.contains(&"Avoid leadership advice."));
    }

    #[test]
    fn anchor_uses_context_fields() {
        let parts = parts(ExperienceLevel::MidLevel, &context());
        assert!(parts.tasks[0].title.contains("2 years"));
        assert!(parts.tasks[0].title.contains("Teaching Assistant (part-time)"));
        assert!(parts.tasks_intro.contains("mid-level experience in the Education industry"));
    }
}
