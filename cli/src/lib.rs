//! # Convmatch Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Rule-based classifier for a single line of user text written in reply to a
//! known bot prompt. It decides whether the reply has one of the shapes
//! expected for that prompt and, when it does, extracts the slot the prompt
//! asked for (a name, an emotional state, a place).
//!
//! ## Architecture
//!
//! - `annotate`: annotated documents and the annotation provider contract,
//!   with a bundled lexicon-based provider
//! - `matching`: the pattern-matching engine (goal matchers, task registry,
//!   dispatcher, match results)
//! - `core`: configuration and the error taxonomy
//!
//! The only entry point callers need is
//! [`Dispatcher::resolve_and_match`](matching::Dispatcher::resolve_and_match).
//!
pub mod annotate;
pub mod core;
pub mod matching;

pub use annotate::{AdjectiveTags, AnnotatedDocument, Annotator, LexiconAnnotator, Token};
pub use crate::core::error::{ConvmatchError, KeyKind};
pub use matching::{Dispatcher, MatchContext, MatchResult, TaskRegistry};
