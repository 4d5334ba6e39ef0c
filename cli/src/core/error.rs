//! # Convmatch Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy shared by every layer of convmatch.
//! Matching never mutates shared state, so every error here is terminal for
//! the current request and nothing needs to be rolled back.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ConvmatchError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for application-level code
//!
//! The error types cover:
//! - Invalid input (a token sequence that is not a valid annotated document)
//! - Invalid keys (unregistered task or goal ids, with the valid alternatives)
//! - Configuration errors
//!
//! The matching core returns `std::result::Result<_, ConvmatchError>` directly
//! so callers can match on the variant; config loading and CLI handlers use the
//! `anyhow`-based alias and attach context.
//!
//! ## Examples
//!
//! ```rust
//! use convmatch::{ConvmatchError, KeyKind};
//!
//! let err = ConvmatchError::InvalidKey {
//!     kind: KeyKind::Task,
//!     key: 7,
//!     valid_options: vec![1],
//! };
//! assert_eq!(err.to_string(), "Unknown task id: 7. Valid options: [1]");
//! ```
//!
use std::fmt;
use thiserror::Error;

/// Which level of the two-level registry lookup a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A task id.
    Task,
    /// A goal id within the given task.
    Goal { task: u32 },
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Task => write!(f, "task id"),
            KeyKind::Goal { task } => write!(f, "goal id for task {}", task),
        }
    }
}

/// Custom error type for convmatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvmatchError {
    /// A value presented as an annotated document does not satisfy that contract.
    #[error("Invalid input: expected {expected}, found {found}")]
    InvalidInput {
        found: String,
        expected: &'static str,
    },

    /// A task or goal id is not registered.
    #[error("Unknown {kind}: {key}. Valid options: {valid_options:?}")]
    InvalidKey {
        kind: KeyKind,
        key: u32,
        valid_options: Vec<u32>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConvmatchError {
    pub(crate) fn invalid_document(found: impl Into<String>) -> Self {
        ConvmatchError::InvalidInput {
            found: found.into(),
            expected: "AnnotatedDocument",
        }
    }
}

/// Type alias for Result using anyhow::Error for application-level code.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
