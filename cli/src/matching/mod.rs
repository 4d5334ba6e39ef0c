//! # Convmatch Matching Core
//!
//! File: cli/src/matching/mod.rs
//!
//! ## Overview
//!
//! This module is the pattern-matching and slot-extraction engine. Given an
//! annotated user reply and the (task, goal) it answers, it decides whether the
//! reply has one of the expected shapes and extracts the slot (name, state,
//! place) when the goal defines one.
//!
//! ## Architecture
//!
//! - `pattern`: shared regex fragments and the ordered, last-success pattern list
//! - `result`: `MatchResult`, the value every goal matcher returns
//! - `registry`: the immutable task → goal → matcher lookup
//! - `introductions`: the goal matchers of task 1
//! - `Dispatcher` (this file): the entry point, a two-level lookup plus delegation
//!
//! Data flows one way: raw text → `Annotator` → `AnnotatedDocument` →
//! `Dispatcher::resolve_and_match` → goal matcher → `MatchResult`.
//!
//! ## Examples
//!
//! ```rust
//! use convmatch::annotate::{Annotator, LexiconAnnotator};
//! use convmatch::matching::Dispatcher;
//!
//! let dispatcher = Dispatcher::default();
//! let doc = LexiconAnnotator::new().annotate("My name's Tim.")?;
//! let result = dispatcher.resolve_and_match(1, 1, &doc)?;
//! assert!(result.matched());
//! assert_eq!(result.extracted(), Some("Tim"));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
pub mod introductions;
pub mod pattern;
pub mod registry;
pub mod result;

use crate::annotate::{AdjectiveTags, AnnotatedDocument};
use crate::core::config::MatchingConfig;
use crate::core::error::{ConvmatchError, KeyKind};
use tracing::debug;

pub use registry::{Goal, GoalId, Task, TaskId, TaskRegistry};
pub use result::MatchResult;

/// Default upper bound on the length of a state slot, in characters.
pub const DEFAULT_MAX_STATE_LEN: usize = 15;

/// Settings every goal matcher can read. Fixed for the lifetime of a `Dispatcher`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchContext {
    /// Tags accepted as adjectives when validating a state slot.
    pub adjective_tags: AdjectiveTags,
    /// Longest accepted state slot, in characters.
    pub max_state_len: usize,
}

impl MatchContext {
    pub fn from_config(config: &MatchingConfig) -> Self {
        Self {
            adjective_tags: AdjectiveTags::new(config.adjective_tags.iter().cloned()),
            max_state_len: config.max_state_len,
        }
    }
}

impl Default for MatchContext {
    fn default() -> Self {
        Self {
            adjective_tags: AdjectiveTags::default(),
            max_state_len: DEFAULT_MAX_STATE_LEN,
        }
    }
}

/// Resolves a (task, goal) pair to its matcher and runs it.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: TaskRegistry,
    context: MatchContext,
}

impl Dispatcher {
    pub fn new(registry: TaskRegistry, context: MatchContext) -> Self {
        Self { registry, context }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn context(&self) -> &MatchContext {
        &self.context
    }

    /// Looks up the goal registered for `(task_id, goal_id)`.
    ///
    /// ## Errors
    ///
    /// `ConvmatchError::InvalidKey` when the task id is unknown (valid options:
    /// all task ids) or the goal id is unknown for that task (valid options:
    /// that task's goal ids).
    pub fn resolve(&self, task_id: TaskId, goal_id: GoalId) -> Result<&Goal, ConvmatchError> {
        let task = self
            .registry
            .task(task_id)
            .ok_or_else(|| ConvmatchError::InvalidKey {
                kind: KeyKind::Task,
                key: task_id,
                valid_options: self.registry.task_ids(),
            })?;
        task.goal(goal_id).ok_or_else(|| ConvmatchError::InvalidKey {
            kind: KeyKind::Goal { task: task_id },
            key: goal_id,
            valid_options: task.goal_ids(),
        })
    }

    /// Resolves the goal and returns its matcher's result unchanged.
    pub fn resolve_and_match<'a>(
        &self,
        task_id: TaskId,
        goal_id: GoalId,
        input: &'a AnnotatedDocument,
    ) -> Result<MatchResult<'a>, ConvmatchError> {
        let goal = self.resolve(task_id, goal_id)?;
        let result = goal.run(input, &self.context);
        debug!(
            "Task {} goal {} ({}) on {:?}: {}",
            task_id,
            goal_id,
            goal.name(),
            input.text(),
            result
        );
        Ok(result)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(TaskRegistry::standard(), MatchContext::default())
    }
}
