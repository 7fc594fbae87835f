pub mod analyze;
pub mod chat;
pub mod init;
pub mod prompt;

use std::path::Path;

use linkwise_agent::Orchestrator;
use linkwise_config::AppConfig;
use linkwise_core::{parse_job_titles, ProfileContext, SessionState};

use crate::scraper::FileProfileScraper;

/// Load config and build an orchestrator over the default provider.
pub(crate) fn build_orchestrator() -> Result<(AppConfig, Orchestrator), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Check for API key early, local endpoints excepted
    if !config.has_api_key() && config.default_provider != "ollama" {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    GOOGLE_API_KEY=...     (Gemini, default provider)");
        eprintln!("    OPENAI_API_KEY=...     (OpenAI-compatible providers)");
        eprintln!("    LINKWISE_API_KEY=...   (overrides the config file)");
        eprintln!();
        eprintln!("  Or add it to your config file, top-level or under [providers.<name>]:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let router = linkwise_providers::router::build_from_config(&config)?;
    let provider = router.default().ok_or("No default provider configured")?;
    let orchestrator = Orchestrator::from_config(provider, &config);
    Ok((config, orchestrator))
}

/// Run profile analysis from a local file into `session`.
pub(crate) async fn analyze_file(
    orchestrator: &Orchestrator,
    session: &mut SessionState,
    profile: &Path,
    job_titles: &[String],
) -> Result<ProfileContext, Box<dyn std::error::Error>> {
    let titles = parse_job_titles(&job_titles.join("\n"));
    let url = profile.to_string_lossy();

    eprint!("  Analyzing profile...");
    let result = orchestrator
        .analyze_profile(session, &FileProfileScraper, &url, titles)
        .await;
    eprint!("\r                      \r");

    result.map_err(|e| format!("Profile analysis failed: {e}").into())
}

pub(crate) fn print_summary(context: &ProfileContext, job_titles: &[String]) {
    println!();
    println!("  Profile Summary");
    println!("  ───────────────");
    for (label, value) in context.summary_lines() {
        println!("  {label:<22} {value}");
    }
    if !job_titles.is_empty() {
        println!("  {:<22} {}", "Target Roles", job_titles.join(", "));
    }
    println!();
}
