//! `linkwise chat`: single-message or interactive chat about a profile.

use std::io::Write;
use std::path::PathBuf;

use linkwise_agent::{Orchestrator, QuickAction, TurnOutcome};
use linkwise_core::SessionState;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{analyze_file, build_orchestrator, print_summary};

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Exit,
    Clear,
    Help,
    Quick(Option<QuickAction>),
    Query(String),
    Empty,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line {
        "" => Input::Empty,
        "/exit" | "/quit" | "exit" => Input::Exit,
        "/clear" => Input::Clear,
        "/help" => Input::Help,
        _ => match line.split_once(char::is_whitespace) {
            Some(("/quick", rest)) => {
                Input::Quick(rest.trim().parse().ok().and_then(QuickAction::from_number))
            }
            None if line == "/quick" => Input::Quick(None),
            _ => Input::Query(line.to_string()),
        },
    }
}

fn print_quick_actions() {
    println!("  Quick actions (/quick <n>):");
    for (i, action) in QuickAction::ALL.iter().enumerate() {
        println!("    {}. {action}", i + 1);
    }
    println!();
}

async fn answer(
    orchestrator: &Orchestrator,
    session: &mut SessionState,
    query: &str,
) {
    eprint!("  ...");
    let result = orchestrator.handle_turn(session, query).await;
    eprint!("\r     \r");

    match result {
        Ok(TurnOutcome::Answered { text, .. }) => {
            println!();
            for line in text.lines() {
                println!("  Assistant > {line}");
            }
            println!();
        }
        Ok(TurnOutcome::NeedsProfile(message)) => {
            println!("  {message}");
            println!();
        }
        Err(e) => {
            eprintln!("  [Error] No answer produced: {e}. Please try again.");
            println!();
        }
    }
}

pub async fn run(
    profile: PathBuf,
    job_titles: Vec<String>,
    message: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, orchestrator) = build_orchestrator()?;
    let mut session = SessionState::new();

    let context = analyze_file(&orchestrator, &mut session, &profile, &job_titles).await?;

    if let Some(msg) = message {
        // Single message mode
        let outcome = orchestrator.handle_turn(&mut session, &msg).await?;
        println!("{}", outcome.text());
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  linkwise: interactive mode");
    println!("  Provider:  {}", config.default_provider);
    println!("  Model:     {}", config.default_model);
    print_summary(&context, session.job_titles());
    print_quick_actions();
    println!("  Type your question and press Enter.");
    println!("  /clear resets the conversation, /help lists quick actions, /exit quits.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("  You > ");
    std::io::stdout().flush()?;

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Exit => break,
            Input::Empty => {}
            Input::Help => print_quick_actions(),
            Input::Clear => {
                session.clear_history();
                println!("  Conversation cleared.");
                println!();
            }
            Input::Quick(None) => {
                eprintln!("  Unknown quick action.");
                print_quick_actions();
            }
            Input::Quick(Some(action)) => {
                let query = action.query(session.job_titles());
                println!("  You > {query}");
                answer(&orchestrator, &mut session, &query).await;
            }
            Input::Query(query) => answer(&orchestrator, &mut session, &query).await,
        }

        print!("  You > ");
        std::io::stdout().flush()?;
    }

    println!();
    println!("  Goodbye!");
    println!();
    Ok(())
}
