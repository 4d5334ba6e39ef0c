//! # Convmatch Annotation Layer
//!
//! File: cli/src/annotate/mod.rs
//!
//! ## Overview
//!
//! This module defines the annotated document the matchers consume, and the
//! contract for the component that produces it:
//! - `Token`: surface string, grammatical tag and byte span into the text
//! - `AnnotatedDocument`: the original text plus its ordered tokens
//! - `Annotator`: anything that can turn raw text into an `AnnotatedDocument`
//! - `AdjectiveTags`: the tag labels that count as adjectives for slot validation
//!
//! ## Architecture
//!
//! An `AnnotatedDocument` can only be built through `AnnotatedDocument::new`,
//! which checks the token sequence against the text. Once a value of this type
//! exists it is known to be well formed, so matchers never re-check their input.
//!
//! The document keeps an index from byte span to token. Slot validation asks
//! "which token covers exactly this span?" instead of searching for a token
//! with the same surface string, which would be ambiguous when a word occurs
//! twice in one line.
//!
//! `LexiconAnnotator` (in `lexicon`) is the bundled rule-based provider used by
//! the CLI and the tests. Any other tagger can be plugged in by implementing
//! `Annotator`.
//!
//! ## Examples
//!
//! ```rust
//! use convmatch::annotate::{AnnotatedDocument, Token};
//!
//! let doc = AnnotatedDocument::new(
//!     "I am happy",
//!     vec![
//!         Token::new("I", "PRP", 0..1),
//!         Token::new("am", "VBP", 2..4),
//!         Token::new("happy", "JJ", 5..10),
//!     ],
//! )?;
//! assert_eq!(doc.tag_at(5..10), Some("JJ"));
//! # Ok::<(), convmatch::ConvmatchError>(())
//! ```
//!
pub mod lexicon;

use crate::core::error::ConvmatchError;
use std::collections::{BTreeSet, HashMap};
use std::ops::Range;

pub use lexicon::LexiconAnnotator;

/// A single annotated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    tag: String,
    span: Range<usize>,
}

impl Token {
    /// Creates a token. `span` is a byte range into the document text.
    pub fn new(text: impl Into<String>, tag: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            span,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Text plus the token/tag sequence derived from it. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedDocument {
    text: String,
    tokens: Vec<Token>,
    by_span: HashMap<(usize, usize), usize>,
}

impl AnnotatedDocument {
    /// Builds a document, validating the token sequence against `text`.
    ///
    /// ## Errors
    ///
    /// Returns `ConvmatchError::InvalidInput` when a token has an empty surface
    /// or tag, when its span is out of bounds or not on a char boundary, when
    /// its surface differs from the text under its span, or when spans overlap
    /// or are out of order.
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Result<Self, ConvmatchError> {
        let text = text.into();
        let mut by_span = HashMap::with_capacity(tokens.len());
        let mut previous_end = 0usize;

        for (index, token) in tokens.iter().enumerate() {
            let Range { start, end } = token.span;
            if token.text.is_empty() || token.tag.trim().is_empty() {
                return Err(ConvmatchError::invalid_document(format!(
                    "token #{} with empty surface or tag",
                    index
                )));
            }
            if start >= end || end > text.len() {
                return Err(ConvmatchError::invalid_document(format!(
                    "token '{}' at {}..{} outside text of length {}",
                    token.text,
                    start,
                    end,
                    text.len()
                )));
            }
            if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
                return Err(ConvmatchError::invalid_document(format!(
                    "token '{}' at {}..{} splits a character",
                    token.text, start, end
                )));
            }
            if text[start..end] != token.text {
                return Err(ConvmatchError::invalid_document(format!(
                    "token '{}' does not match text '{}' at {}..{}",
                    token.text,
                    &text[start..end],
                    start,
                    end
                )));
            }
            if start < previous_end {
                return Err(ConvmatchError::invalid_document(format!(
                    "token '{}' at {}..{} overlaps or precedes the previous token",
                    token.text, start, end
                )));
            }
            previous_end = end;
            by_span.insert((start, end), index);
        }

        Ok(Self {
            text,
            tokens,
            by_span,
        })
    }

    /// The full original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token whose span is exactly `span`, if any.
    pub fn token_at(&self, span: Range<usize>) -> Option<&Token> {
        self.by_span
            .get(&(span.start, span.end))
            .map(|&index| &self.tokens[index])
    }

    /// Tag of the token covering exactly `span`.
    pub fn tag_at(&self, span: Range<usize>) -> Option<&str> {
        self.token_at(span).map(Token::tag)
    }
}

/// The Annotation Provider contract: raw text in, annotated document out.
pub trait Annotator {
    fn annotate(&self, text: &str) -> anyhow::Result<AnnotatedDocument>;
}

/// Tag labels treated as adjectives when validating a state slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjectiveTags(BTreeSet<String>);

impl AdjectiveTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AdjectiveTags {
    /// Penn Treebank adjective tags plus the universal `ADJ` label.
    fn default() -> Self {
        Self::new(["JJ", "JJR", "JJS", "ADJ"])
    }
}
