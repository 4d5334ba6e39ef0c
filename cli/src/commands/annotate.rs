//! # Convmatch Annotate Command
//!
//! File: cli/src/commands/annotate.rs
//!
//! ## Overview
//!
//! Implements `convmatch annotate`, which prints the tokens and tags the
//! configured annotator produces for a line of text. Useful for seeing why a
//! state reply was rejected (wrong tag, or the state is not a single token).
//!
//! ## Examples
//!
//! ```
//! $ convmatch annotate "I am happy, thank you"
//! Span   | Token | Tag
//! -------+-------+-----
//! 0..1   | I     | PRP
//! 2..4   | am    | VBP
//! 5..10  | happy | JJ *
//! ...
//! ```
//!
//! Tags in the configured Adjective Tag Set are marked with `*`.
//!
use anyhow::Context;
use clap::Parser;
use convmatch::annotate::{AdjectiveTags, AnnotatedDocument, Annotator};
use convmatch::core::config;
use convmatch::core::error::Result;
use std::fmt::Write;

/// Arguments for `convmatch annotate`.
#[derive(Parser, Debug)]
pub struct AnnotateArgs {
    /// The text to annotate, as a single argument
    pub text: String,
}

/// Handles `convmatch annotate`.
pub fn handle_annotate(args: AnnotateArgs, config_path: Option<&str>) -> Result<()> {
    let cfg = config::load_config(config_path).context("Failed to load convmatch configuration")?;
    let document = cfg.annotator().annotate(&args.text)?;
    let adjectives = AdjectiveTags::new(cfg.matching.adjective_tags.iter().cloned());
    print!("{}", render_tokens(&document, &adjectives));
    Ok(())
}

fn render_tokens(document: &AnnotatedDocument, adjectives: &AdjectiveTags) -> String {
    let mut out = String::new();
    if document.tokens().is_empty() {
        out.push_str("No tokens.\n");
        return out;
    }

    let token_width = document
        .tokens()
        .iter()
        .map(|t| t.text().len())
        .max()
        .unwrap_or(5)
        .max(5);

    let _ = writeln!(out, "Span   | {:<width$} | Tag", "Token", width = token_width);
    let _ = writeln!(out, "-------+-{:-<width$}-+-----", "", width = token_width);
    for token in document.tokens() {
        let span = token.span();
        let marker = if adjectives.contains(token.tag()) { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:<6} | {:<width$} | {}{}",
            format!("{}..{}", span.start, span.end),
            token.text(),
            token.tag(),
            marker,
            width = token_width
        );
    }
    out
}
