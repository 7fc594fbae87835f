//! `linkwise prompt`: render a composed instruction without calling the model.
//!
//! Renders a first-turn instruction, so the memory block is always empty.

use std::path::PathBuf;

use linkwise_agent::{compose, ComposeInput, Template};
use linkwise_core::{parse_job_titles, Intent, ProfileContext, ProfileData};

pub struct PromptArgs {
    pub profile_context: String,
    pub profile: Option<PathBuf>,
    pub intent: String,
    pub tier: Option<String>,
    pub job_titles: Vec<String>,
    pub query: String,
}

pub fn run(args: PromptArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render(&args)?);
    Ok(())
}

fn render(args: &PromptArgs) -> Result<String, Box<dyn std::error::Error>> {
    let context = ProfileContext::from_json_str(&args.profile_context)?;
    let intent = Intent::parse(&args.intent).ok_or_else(|| {
        let known: Vec<&str> = Intent::ALL.iter().map(|i| i.as_str()).collect();
        format!("Unknown intent {:?}; expected one of {}", args.intent, known.join(", "))
    })?;

    let template = match &args.tier {
        Some(tier) => Template::resolve(intent, tier)?,
        None => Template::for_context(intent, context.experience_level()),
    };

    let profile_data = match &args.profile {
        Some(path) => ProfileData::new(std::fs::read_to_string(path)?),
        None => ProfileData::new(""),
    };
    let job_titles = parse_job_titles(&args.job_titles.join("\n"));

    Ok(compose(
        template,
        &ComposeInput {
            query: &args.query,
            profile_data: &profile_data,
            context: &context,
            job_titles: &job_titles,
            memory: "",
        },
    ))
}
