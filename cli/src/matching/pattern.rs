//! # Convmatch Response Patterns
//!
//! File: cli/src/matching/pattern.rs
//!
//! ## Overview
//!
//! Shared regex fragments and the ordered pattern list used by goal matchers.
//!
//! ## Last-success policy
//!
//! A `PatternList` holds alternatives in a fixed order, usually from the most
//! specific frame ("My name's X") down to the loosest ("X"). `last_match`
//! evaluates **every** alternative and keeps the last one that succeeded. It
//! does not stop at the first success: a later, looser alternative that also
//! matches replaces the slot captured by an earlier one.
//!
//! Every pattern is anchored at both ends and applied to the line with
//! surrounding whitespace trimmed. Spans returned are byte offsets into the
//! original, untrimmed text.
//!
use regex::Regex;
use std::ops::Range;
use tracing::trace;

/// A capitalized first word, optionally followed by one capitalized second word.
pub const NAME: &str = r"[A-Z][a-z]*(?:\s[A-Z][a-z]*)?";

/// Optional sentence-final punctuation accepted after a slot.
pub const TRAILING_PUNCT: &str = r"[.!]?";

/// Builds `^<frame>(?P<slot><slot>)<trailing punctuation>$`.
///
/// `frame` is inserted verbatim, so it must already be a valid regex.
pub fn framed(frame: &str, slot: &str) -> String {
    format!("^{}(?P<slot>{}){}$", frame, slot, TRAILING_PUNCT)
}

/// The winning alternative of a `PatternList` search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternHit {
    /// Position of the winning pattern in the list.
    pub index: usize,
    /// Byte span of the `slot` group in the original text, if the pattern has one
    /// and it participated in the match.
    pub slot: Option<Range<usize>>,
}

/// An ordered list of anchored alternatives evaluated with the last-success policy.
#[derive(Debug, Clone)]
pub struct PatternList {
    patterns: Vec<Regex>,
}

impl PatternList {
    /// Compiles the alternatives in the given order.
    pub fn new<S: AsRef<str>>(sources: &[S]) -> Result<Self, regex::Error> {
        let patterns = sources
            .iter()
            .map(|source| Regex::new(source.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Tries every alternative on the trimmed `text` and returns the last success.
    pub fn last_match(&self, text: &str) -> Option<PatternHit> {
        let line = text.trim();
        let offset = text.len() - text.trim_start().len();

        let mut winner = None;
        for (index, pattern) in self.patterns.iter().enumerate() {
            if let Some(caps) = pattern.captures(line) {
                let slot = caps
                    .name("slot")
                    .map(|m| (m.start() + offset)..(m.end() + offset));
                trace!("Pattern #{} matched {:?} (slot {:?})", index, line, slot);
                winner = Some(PatternHit { index, slot });
            }
        }
        winner
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_fragment_shape() {
        let re = Regex::new(&framed("", NAME)).unwrap();
        assert!(re.is_match("Tim"));
        assert!(re.is_match("Tim Niven"));
        assert!(re.is_match("Tim Niven."));
        assert!(!re.is_match("TimNiven"));
        assert!(!re.is_match("Tim  Niven"));
        assert!(!re.is_match("tim"));
        assert!(!re.is_match("Tim Niven Jr"));
    }

    #[test]
    fn test_last_success_wins() {
        // Both alternatives match; the second, looser one must win.
        let list = PatternList::new(&[framed("Hello ", "[A-Z][a-z]*"), framed("", "Hello [A-Z][a-z]*")]).unwrap();
        let hit = list.last_match("Hello Tim").unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.slot, Some(0..9));
    }

    #[test]
    fn test_earlier_success_kept_when_later_fails() {
        let list = PatternList::new(&[framed("Hello ", "[A-Z][a-z]*"), framed("", "[0-9]+")]).unwrap();
        let hit = list.last_match("Hello Tim").unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.slot, Some(6..9));
    }

    #[test]
    fn test_no_success() {
        let list = PatternList::new(&[framed("", NAME)]).unwrap();
        assert_eq!(list.last_match("what is your name?"), None);
    }

    #[test]
    fn test_spans_are_relative_to_untrimmed_text() {
        let list = PatternList::new(&[framed("", NAME)]).unwrap();
        let text = "   Tim.  ";
        let hit = list.last_match(text).unwrap();
        let span = hit.slot.unwrap();
        assert_eq!(&text[span], "Tim");
    }

    #[test]
    fn test_anchoring_rejects_substring_matches() {
        let list = PatternList::new(&[framed("I am ", NAME)]).unwrap();
        assert!(list.last_match("Well, I am Tim").is_none());
        assert!(list.last_match("I am Tim, hi").is_none());
    }

    #[test]
    fn test_pattern_without_slot_group() {
        let list = PatternList::new(&[r"^Hi$"]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.last_match("Hi"), Some(PatternHit { index: 0, slot: None }));
    }
}
