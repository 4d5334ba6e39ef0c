//! # Convmatch Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the convmatch CLI, a thin
//! front end over the matching library. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Check a reply to "What's your name?" (task 1, goal 1)
//! convmatch match --task 1 --goal 1 "My name's Tim."
//!
//! # List registered tasks and goals
//! convmatch goals
//!
//! # Show how a line is tokenized and tagged, with debug logging
//! convmatch -vv annotate "I am happy, thank you"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Handlers for `match`, `goals` and `annotate`.

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "convmatch",
    about = "Match replies to chatbot prompts and extract names, states and places",
    long_about = "Checks one line of user text against the response patterns expected after a known\n\
                  bot prompt, and extracts the slot the prompt asked for.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the project `.convmatch.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Match a reply against a task goal
    #[command(alias = "m")]
    Match(commands::match_reply::MatchArgs),
    /// List registered tasks and goals
    #[command(alias = "g")]
    Goals(commands::goals::GoalsArgs),
    /// Show tokens and tags for a line of text
    #[command(alias = "a")]
    Annotate(commands::annotate::AnnotateArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Match(args) => commands::match_reply::handle_match(args, config_path),
        Commands::Goals(args) => commands::goals::handle_goals(args),
        Commands::Annotate(args) => commands::annotate::handle_annotate(args, config_path),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn convmatch_cmd() -> Command {
        Command::cargo_bin("convmatch").expect("Failed to find convmatch binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        convmatch_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        convmatch_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
