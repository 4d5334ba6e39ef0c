//! # Convmatch Match Command
//!
//! File: cli/src/commands/match_reply.rs
//!
//! ## Overview
//!
//! Implements `convmatch match`: annotates one line of text, dispatches it to
//! the matcher registered for `--task`/`--goal`, and prints the outcome.
//!
//! ## Examples
//!
//! ```bash
//! $ convmatch match --task 1 --goal 1 "My name's Tim."
//! matched: true
//! extracted: Tim
//!
//! $ convmatch match --task 1 --goal 3 "I am banana, thank you."
//! matched: false
//! extracted: -
//!
//! $ convmatch match --task 2 --goal 1 "Hi"
//! Error: Unknown task id: 2. Valid options: [1]
//! ```
//!
use anyhow::Context;
use clap::Parser;
use convmatch::annotate::Annotator;
use convmatch::core::config;
use convmatch::core::error::Result;
use convmatch::MatchResult;
use tracing::info;

/// Arguments for `convmatch match`.
#[derive(Parser, Debug)]
pub struct MatchArgs {
    /// Task id (see `convmatch goals`)
    #[arg(short, long)]
    pub task: u32,
    /// Goal id within the task
    #[arg(short, long)]
    pub goal: u32,
    /// The user's reply, as a single argument
    pub text: String,
}

/// Handles `convmatch match`.
pub fn handle_match(args: MatchArgs, config_path: Option<&str>) -> Result<()> {
    let cfg = config::load_config(config_path).context("Failed to load convmatch configuration")?;
    let dispatcher = cfg.dispatcher();

    // Resolve before annotating so a bad key fails without touching the text.
    let goal = dispatcher.resolve(args.task, args.goal)?;
    info!(
        "Task {} goal {}: BOT \"{}\" / USR \"{}\"",
        args.task,
        args.goal,
        goal.prompt(),
        args.text
    );

    let document = cfg.annotator().annotate(&args.text)?;
    let result = dispatcher.resolve_and_match(args.task, args.goal, &document)?;
    print!("{}", render_result(&result));
    Ok(())
}

/// Formats a result as `matched:` and `extracted:` lines.
fn render_result(result: &MatchResult<'_>) -> String {
    format!(
        "matched: {}\nextracted: {}\n",
        result.matched(),
        result.extracted().unwrap_or("-")
    )
}
