//! `linkwise analyze`: extract and print the structured profile context.

use std::path::PathBuf;

use linkwise_core::SessionState;

use super::{analyze_file, build_orchestrator, print_summary};

pub async fn run(profile: PathBuf, job_titles: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (_config, orchestrator) = build_orchestrator()?;
    let mut session = SessionState::new();

    let context = analyze_file(&orchestrator, &mut session, &profile, &job_titles).await?;
    print_summary(&context, session.job_titles());

    println!("{}", serde_json::to_string_pretty(&context)?);
    Ok(())
}
