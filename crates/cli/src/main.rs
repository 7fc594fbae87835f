//! linkwise CLI: the main entry point.
//!
//! Commands:
//! - `init`     Write a starter config
//! - `analyze`  Extract and print the structured context of a profile
//! - `chat`     Ask about a profile, once or interactively
//! - `prompt`   Render a composed instruction without calling the model

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod scraper;

#[derive(Parser)]
#[command(
    name = "linkwise",
    about = "linkwise: profile analysis, rewriting and career guidance from your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config to ~/.linkwise/config.toml
    Init,

    /// Analyze a profile and print its structured context
    Analyze {
        /// Profile file (JSON or text) exported from the profile source
        #[arg(short, long)]
        profile: PathBuf,

        /// Target job title; repeat for several
        #[arg(short, long = "job-title")]
        job_title: Vec<String>,
    },

    /// Chat about a profile
    Chat {
        /// Profile file (JSON or text) exported from the profile source
        #[arg(short, long)]
        profile: PathBuf,

        /// Target job title; repeat for several
        #[arg(short, long = "job-title")]
        job_title: Vec<String>,

        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Render the instruction a query would produce, without calling the model
    Prompt {
        /// Structured profile context as a JSON object
        #[arg(long)]
        profile_context: String,

        /// Raw profile file to embed
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Intent token (content_rewrite, profile_analysis, job_fit_analysis,
        /// career_counseling, general)
        #[arg(short, long)]
        intent: String,

        /// Override the experience tier used to pick the template
        #[arg(short, long)]
        tier: Option<String>,

        /// Target job title; repeat for several
        #[arg(short, long = "job-title")]
        job_title: Vec<String>,

        /// The user query
        #[arg(short, long)]
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Commands::Init => commands::init::run()?,
        Commands::Analyze { profile, job_title } => {
            commands::analyze::run(profile, job_title).await?
        }
        Commands::Chat {
            profile,
            job_title,
            message,
        } => commands::chat::run(profile, job_title, message).await?,
        Commands::Prompt {
            profile_context,
            profile,
            intent,
            tier,
            job_title,
            query,
        } => commands::prompt::run(commands::prompt::PromptArgs {
            profile_context,
            profile,
            intent,
            tier,
            job_titles: job_title,
            query,
        })?,
    }

    Ok(())
}
