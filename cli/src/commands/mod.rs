//! # Convmatch Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the convmatch CLI. Each
//! command defines its own Clap arguments struct and a handler that loads the
//! configuration, calls into the library and prints the outcome.
//!
//! ## Commands
//!
//! - `match_reply`: `convmatch match`, run one goal matcher on one line
//! - `goals`: `convmatch goals`, list the task registry
//! - `annotate`: `convmatch annotate`, show the annotator's tokens and tags
//!

/// Handler and arguments for `convmatch match`.
pub mod match_reply;
/// Handler and arguments for `convmatch goals`.
pub mod goals;
/// Handler and arguments for `convmatch annotate`.
pub mod annotate;
