//! # Convmatch Match Result
//!
//! File: cli/src/matching/result.rs
//!
//! ## Overview
//!
//! The value every goal matcher returns. It borrows the document it was
//! produced from, and the extracted slot is a slice of that document's text,
//! so an extracted value is always a verbatim substring of the input.
//!
//! Results are only built inside the crate, by goal matchers:
//! - `hit`: matched, with the validated slot text
//! - `hit_without_slot`: matched, for goals that define no slot
//! - `miss`: not matched; never carries a slot
//!
use crate::annotate::AnnotatedDocument;
use std::fmt;

/// Outcome of running one goal matcher on one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'doc> {
    input: &'doc AnnotatedDocument,
    matched: bool,
    extracted: Option<&'doc str>,
}

impl<'doc> MatchResult<'doc> {
    pub(crate) fn hit(input: &'doc AnnotatedDocument, slot: &'doc str) -> Self {
        Self {
            input,
            matched: true,
            extracted: Some(slot),
        }
    }

    pub(crate) fn hit_without_slot(input: &'doc AnnotatedDocument) -> Self {
        Self {
            input,
            matched: true,
            extracted: None,
        }
    }

    pub(crate) fn miss(input: &'doc AnnotatedDocument) -> Self {
        Self {
            input,
            matched: false,
            extracted: None,
        }
    }

    /// The document this result was computed from.
    pub fn input(&self) -> &'doc AnnotatedDocument {
        self.input
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    /// The validated slot text, when the goal defines a slot and the input matched.
    pub fn extracted(&self) -> Option<&'doc str> {
        self.extracted
    }
}

impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.matched, self.extracted) {
            (true, Some(slot)) => write!(f, "match ({})", slot),
            (true, None) => write!(f, "match"),
            (false, _) => write!(f, "no match"),
        }
    }
}
