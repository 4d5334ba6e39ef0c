//! # Convmatch Goals Command
//!
//! File: cli/src/commands/goals.rs
//!
//! ## Overview
//!
//! Implements `convmatch goals`, which lists the registered tasks and, for each
//! task, its goals with the bot prompt they answer and the slot they extract.
//!
//! ## Examples
//!
//! ```
//! Task 1: introductions
//!
//! Goal | Name             | Slot  | Bot prompt
//! -----+------------------+-------+--------------------------------
//! 1    | name             | name  | What's your name?
//! 2    | nice-to-meet-you | -     | Nice to meet you.
//! 3    | how-are-you      | state | How are you today?
//! 4    | where-from       | place | Where are you from?
//!
//! Found 4 goal(s) in 1 task(s).
//! ```
//!
use clap::Parser;
use convmatch::core::error::{ConvmatchError, Result};
use convmatch::matching::{Task, TaskId, TaskRegistry};
use convmatch::KeyKind;
use std::fmt::Write;
use tracing::info;

/// Arguments for `convmatch goals`.
#[derive(Parser, Debug)]
pub struct GoalsArgs {
    /// Only list the goals of this task
    #[arg(short, long)]
    pub task: Option<u32>,
}

/// Handles `convmatch goals`. The registry is fixed at build time, so no
/// configuration is loaded.
pub fn handle_goals(args: GoalsArgs) -> Result<()> {
    info!("Handling goals command...");
    let registry = TaskRegistry::standard();
    let tasks = select_tasks(&registry, args.task)?;
    print!("{}", render_goal_table(&tasks));
    Ok(())
}

fn select_tasks(
    registry: &TaskRegistry,
    filter: Option<TaskId>,
) -> std::result::Result<Vec<(TaskId, &Task)>, ConvmatchError> {
    match filter {
        None => Ok(registry.tasks().collect()),
        Some(id) => registry
            .task(id)
            .map(|task| vec![(id, task)])
            .ok_or_else(|| ConvmatchError::InvalidKey {
                kind: KeyKind::Task,
                key: id,
                valid_options: registry.task_ids(),
            }),
    }
}

fn render_goal_table(tasks: &[(TaskId, &Task)]) -> String {
    let mut out = String::new();
    let mut goal_count = 0usize;

    for (task_id, task) in tasks {
        let name_width = task
            .goals()
            .map(|(_, goal)| goal.name().len())
            .max()
            .unwrap_or(4)
            .clamp(4, 30);

        let _ = writeln!(out, "Task {}: {}\n", task_id, task.name());
        let _ = writeln!(
            out,
            "Goal | {:<width$} | Slot  | Bot prompt",
            "Name",
            width = name_width
        );
        let _ = writeln!(out, "-----+-{:-<width$}-+-------+-{:-<30}", "", "", width = name_width);
        for (goal_id, goal) in task.goals() {
            let _ = writeln!(
                out,
                "{:<4} | {:<width$} | {:<5} | {}",
                goal_id,
                goal.name(),
                goal.slot().unwrap_or("-"),
                goal.prompt(),
                width = name_width
            );
            goal_count += 1;
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Found {} goal(s) in {} task(s).", goal_count, tasks.len());
    out
}
