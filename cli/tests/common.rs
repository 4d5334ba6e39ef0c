//! # Convmatch CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file in
//! that directory (other than this module) is compiled as a separate test
//! crate.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use convmatch::annotate::{AnnotatedDocument, Annotator, LexiconAnnotator};
use std::fs;
use tempfile::TempDir;

/// # Get Convmatch Command (`convmatch_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `convmatch` binary.
///
/// ## Panics
/// Panics if the `convmatch` binary cannot be found via `Command::cargo_bin`.
pub fn convmatch_cmd() -> Command {
    Command::cargo_bin("convmatch").expect("Failed to find convmatch binary for testing")
}

/// # Isolated Working Directory (`isolated_dir`)
///
/// A temporary directory containing an empty `.git` directory, so the project
/// config search started from it never reaches a `.convmatch.toml` outside.
pub fn isolated_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// Annotates `text` with the bundled lexicon annotator.
pub fn annotate(text: &str) -> AnnotatedDocument {
    LexiconAnnotator::new()
        .annotate(text)
        .expect("Lexicon annotation never fails on plain text")
}
