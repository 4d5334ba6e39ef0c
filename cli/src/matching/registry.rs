//! # Convmatch Task Registry
//!
//! File: cli/src/matching/registry.rs
//!
//! ## Overview
//!
//! A two-level, read-only lookup: task id → goal id → goal matcher. The
//! registry is assembled once through `RegistryBuilder` and never changes
//! afterwards, so it can be shared between threads without locking.
//!
//! Adding a task or goal means registering it in `TaskRegistry::standard`
//! (or in a custom builder); nothing can be added or removed at runtime.
//!
use super::result::MatchResult;
use super::{introductions, MatchContext};
use crate::annotate::AnnotatedDocument;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

pub type TaskId = u32;
pub type GoalId = u32;

/// Signature shared by every goal matcher.
pub type GoalFn = for<'a> fn(&'a AnnotatedDocument, &MatchContext) -> MatchResult<'a>;

/// One expected user-response pattern, bound to its matcher.
#[derive(Clone, Copy)]
pub struct Goal {
    name: &'static str,
    prompt: &'static str,
    slot: Option<&'static str>,
    matcher: GoalFn,
}

impl Goal {
    /// `slot` names the information the matcher extracts, or `None` when the
    /// goal only checks the shape of the reply.
    pub const fn new(
        name: &'static str,
        prompt: &'static str,
        slot: Option<&'static str>,
        matcher: GoalFn,
    ) -> Self {
        Self {
            name,
            prompt,
            slot,
            matcher,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The bot line this goal answers.
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn slot(&self) -> Option<&'static str> {
        self.slot
    }

    /// Runs the matcher.
    pub fn run<'a>(&self, input: &'a AnnotatedDocument, ctx: &MatchContext) -> MatchResult<'a> {
        (self.matcher)(input, ctx)
    }
}

impl fmt::Debug for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Goal")
            .field("name", &self.name)
            .field("prompt", &self.prompt)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

/// A named conversational context grouping related goals.
#[derive(Debug, Clone)]
pub struct Task {
    name: &'static str,
    goals: BTreeMap<GoalId, Goal>,
}

impl Task {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.get(&id)
    }

    /// Registered goal ids, ascending.
    pub fn goal_ids(&self) -> Vec<GoalId> {
        self.goals.keys().copied().collect()
    }

    pub fn goals(&self) -> impl Iterator<Item = (GoalId, &Goal)> {
        self.goals.iter().map(|(id, goal)| (*id, goal))
    }
}

/// Immutable task → goal → matcher mapping.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    tasks: BTreeMap<TaskId, Task>,
}

impl TaskRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The registry of all tasks shipped with convmatch.
    pub fn standard() -> Self {
        Self::builder()
            .task(1, introductions::TASK_NAME, introductions::goals())
            .build()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Registered task ids, ascending.
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.keys().copied().collect()
    }

    pub fn tasks(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.tasks.iter().map(|(id, task)| (*id, task))
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Assembles a `TaskRegistry`. Consumed by `build`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tasks: BTreeMap<TaskId, Task>,
}

impl RegistryBuilder {
    /// Registers `goals` under task `id`. Goals are merged into an existing
    /// task with the same id; a goal id registered twice keeps the later goal.
    pub fn task<I>(mut self, id: TaskId, name: &'static str, goals: I) -> Self
    where
        I: IntoIterator<Item = (GoalId, Goal)>,
    {
        let task = self.tasks.entry(id).or_insert_with(|| Task {
            name,
            goals: BTreeMap::new(),
        });
        for (goal_id, goal) in goals {
            if let Some(previous) = task.goals.insert(goal_id, goal) {
                warn!(
                    "Goal {} of task {} registered twice; '{}' replaces '{}'",
                    goal_id,
                    id,
                    goal.name(),
                    previous.name()
                );
            }
        }
        self
    }

    pub fn build(self) -> TaskRegistry {
        TaskRegistry { tasks: self.tasks }
    }
}
