//! Fallback for queries that fit no specialized intent.

use super::{Parts, TargetRoles, Task};

pub(super) fn parts() -> Parts {
    Parts {
        persona: "You are a LinkedIn expert.",
        target_roles: TargetRoles::Omitted,
        tasks_intro: "Only solve the user query, in a short and concise manner:".to_string(),
        tasks: vec![
            Task::line("Answer the query directly, clarifying it first if it is ambiguous."),
            Task::line(
                "Offer brief, helpful insights such as profile enhancement or job fit analysis for this profile.",
            ),
            Task::line("Encourage the user to ask more questions."),
        ],
        format: "Format the response as short markdown sections.",
    }
}
