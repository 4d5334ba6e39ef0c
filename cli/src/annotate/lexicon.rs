//! # Convmatch Lexicon Annotator
//!
//! File: cli/src/annotate/lexicon.rs
//!
//! ## Overview
//!
//! A small rule-based `Annotator`: splits a line into word, clitic, number and
//! punctuation tokens, then tags each token from a lowercase lexicon with a
//! handful of shape-based fallbacks. Tags follow the Penn Treebank labels
//! (`JJ`, `NN`, `NNP`, `PRP`, `VBP`, ...).
//!
//! It is not a statistical tagger. It covers the vocabulary the task matchers
//! care about, and the lexicon can be extended or overridden from the
//! `[lexicon]` section of the configuration.
//!
//! ## Tokenization
//!
//! - Runs of ASCII letters form words
//! - English clitics are split off the preceding word: `name's` → `name` `'s`,
//!   `I'm` → `I` `'m`, `don't` → `do` `n't`
//! - Digit runs (with inner `.`/`,`) form numbers
//! - Every other non-space character is its own token
//!
//! ## Tagging
//!
//! 1. Lexicon lookup on the lowercased surface
//! 2. Punctuation gets its class tag (`,` `.` `:` or `SYM`)
//! 3. Numbers get `CD`
//! 4. Capitalized unknown words get `NNP`
//! 5. Anything else gets `NN`
//!
use super::{AnnotatedDocument, Annotator, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::trace;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]+|'[A-Za-z]+|[0-9]+(?:[.,][0-9]+)*|\S").expect("token pattern is valid")
});

/// Built-in core lexicon: lowercase surface → tag.
const CORE_LEXICON: &[(&str, &str)] = &[
    // Pronouns and determiners
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    // Verbs and clitics
    ("am", "VBP"),
    ("are", "VBP"),
    ("is", "VBZ"),
    ("was", "VBD"),
    ("be", "VB"),
    ("do", "VBP"),
    ("come", "VBP"),
    ("meet", "VB"),
    ("live", "VBP"),
    ("thank", "VBP"),
    ("feel", "VBP"),
    ("'m", "VBP"),
    ("'re", "VBP"),
    ("'ve", "VBP"),
    ("'s", "VBZ"),
    ("'ll", "MD"),
    ("'d", "MD"),
    ("n't", "RB"),
    // Prepositions, conjunctions, adverbs, wh-words, interjections
    ("from", "IN"),
    ("in", "IN"),
    ("of", "IN"),
    ("at", "IN"),
    ("to", "TO"),
    ("and", "CC"),
    ("but", "CC"),
    ("too", "RB"),
    ("very", "RB"),
    ("really", "RB"),
    ("not", "RB"),
    ("so", "RB"),
    ("today", "NN"),
    ("what", "WP"),
    ("who", "WP"),
    ("where", "WRB"),
    ("how", "WRB"),
    ("yes", "UH"),
    ("no", "UH"),
    ("hi", "UH"),
    ("hello", "UH"),
    // Nouns
    ("name", "NN"),
    ("day", "NN"),
    ("banana", "NN"),
    ("apple", "NN"),
    ("thanks", "NNS"),
    // Adjectives describing a state
    ("happy", "JJ"),
    ("sad", "JJ"),
    ("fine", "JJ"),
    ("good", "JJ"),
    ("great", "JJ"),
    ("well", "JJ"),
    ("ok", "JJ"),
    ("okay", "JJ"),
    ("alright", "JJ"),
    ("nice", "JJ"),
    ("glad", "JJ"),
    ("tired", "JJ"),
    ("sleepy", "JJ"),
    ("bored", "JJ"),
    ("busy", "JJ"),
    ("excited", "JJ"),
    ("angry", "JJ"),
    ("nervous", "JJ"),
    ("hungry", "JJ"),
    ("sick", "JJ"),
    ("ill", "JJ"),
    ("bad", "JJ"),
    ("terrible", "JJ"),
    ("awful", "JJ"),
    ("awesome", "JJ"),
    ("wonderful", "JJ"),
    ("lonely", "JJ"),
    ("calm", "JJ"),
    ("cold", "JJ"),
    ("hot", "JJ"),
    ("better", "JJR"),
    ("worse", "JJR"),
    ("best", "JJS"),
    ("worst", "JJS"),
];

/// Rule-based annotator backed by a lowercase word → tag lexicon.
#[derive(Debug, Clone)]
pub struct LexiconAnnotator {
    lexicon: HashMap<String, String>,
}

impl LexiconAnnotator {
    /// Creates an annotator with the built-in core lexicon.
    pub fn new() -> Self {
        let lexicon = CORE_LEXICON
            .iter()
            .map(|(word, tag)| (word.to_string(), tag.to_string()))
            .collect();
        Self { lexicon }
    }

    /// Adds entries to the lexicon, replacing built-in tags for the same word.
    /// Words are matched case-insensitively.
    pub fn with_entries<I, W, T>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: AsRef<str>,
        T: Into<String>,
    {
        for (word, tag) in entries {
            self.lexicon.insert(word.as_ref().to_lowercase(), tag.into());
        }
        self
    }

    fn tag_for(&self, surface: &str) -> String {
        if let Some(tag) = self.lexicon.get(&surface.to_lowercase()) {
            return tag.clone();
        }
        let first = surface.chars().next().unwrap_or(' ');
        let tag = match first {
            ',' => ",",
            '.' | '!' | '?' => ".",
            ':' | ';' | '-' => ":",
            c if c.is_ascii_digit() => "CD",
            c if c.is_ascii_uppercase() => "NNP",
            c if c.is_ascii_alphabetic() || (c == '\'' && surface.len() > 1) => "NN",
            _ => "SYM",
        };
        tag.to_string()
    }

    /// Splits `text` into `(start, end)` byte spans.
    fn split(text: &str) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        for m in TOKEN_RE.find_iter(text) {
            let (start, end) = (m.start(), m.end());
            // "don" + "'t" -> "do" + "n't"
            if m.as_str().eq_ignore_ascii_case("'t") {
                if let Some(&(prev_start, prev_end)) = spans.last() {
                    let prev = &text[prev_start..prev_end];
                    if prev_end == start && prev.len() > 1 && prev.ends_with(['n', 'N']) {
                        let split_at = prev_end - 1;
                        if let Some(last) = spans.last_mut() {
                            last.1 = split_at;
                        }
                        spans.push((split_at, end));
                        continue;
                    }
                }
            }
            spans.push((start, end));
        }
        spans
    }
}

impl Default for LexiconAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> anyhow::Result<AnnotatedDocument> {
        let tokens: Vec<Token> = Self::split(text)
            .into_iter()
            .map(|(start, end)| {
                let surface = &text[start..end];
                Token::new(surface, self.tag_for(surface), start..end)
            })
            .collect();
        trace!("Annotated {:?} into {} token(s)", text, tokens.len());
        Ok(AnnotatedDocument::new(text, tokens)?)
    }
}
