//! # Introductions Task
//!
//! File: cli/src/matching/introductions.rs
//!
//! ## Overview
//!
//! Goal matchers for the "introductions" task, the opening exchange of a
//! conversation. Each goal pairs one bot prompt with the replies a learner is
//! expected to give:
//!
//! | goal | bot prompt           | slot  |
//! |------|----------------------|-------|
//! | 1    | What's your name?    | name  |
//! | 2    | Nice to meet you.    | none  |
//! | 3    | How are you today?   | state |
//! | 4    | Where are you from?  | place |
//!
//! Name and place alternatives are listed from the most specific frame to the
//! bare slot and evaluated with the last-success policy of `PatternList`.
//! Matching is case-sensitive: a lowercase name or place does not match.
//!
use super::pattern::{framed, PatternHit, PatternList, NAME};
use super::registry::{Goal, GoalId};
use super::result::MatchResult;
use super::MatchContext;
use crate::annotate::AnnotatedDocument;
use once_cell::sync::Lazy;
use std::ops::Range;
use tracing::debug;

pub const TASK_NAME: &str = "introductions";

static NAME_PATTERNS: Lazy<PatternList> = Lazy::new(|| {
    PatternList::new(&[
        framed("My name's ", NAME),
        framed("My name is ", NAME),
        framed("It's ", NAME),
        framed("It is ", NAME),
        framed("I'm ", NAME),
        framed("I am ", NAME),
        framed("", NAME),
    ])
    .expect("name patterns are valid")
});

static NICE_TO_MEET_YOU_PATTERNS: Lazy<PatternList> = Lazy::new(|| {
    PatternList::new(&[r"^Nice to meet you, too\.?$"]).expect("greeting pattern is valid")
});

static STATE_PATTERNS: Lazy<PatternList> = Lazy::new(|| {
    PatternList::new(&[
        r"^(?:(?:I am|I'm) )?(?P<slot>[^,]*?)(?:, (?:thank you|thanks))?[.!]?$",
    ])
    .expect("state pattern is valid")
});

// "From " comes after the bare slot, which also accepts "From Spain" as a
// two-word place; the later hit wins.
static PLACE_PATTERNS: Lazy<PatternList> = Lazy::new(|| {
    PatternList::new(&[
        framed("I am from ", NAME),
        framed("I'm from ", NAME),
        framed("I come from ", NAME),
        framed("I live in ", NAME),
        framed("", NAME),
        framed("From ", NAME),
    ])
    .expect("place patterns are valid")
});

/// The goals of this task, keyed by goal id.
pub fn goals() -> Vec<(GoalId, Goal)> {
    vec![
        (1, Goal::new("name", "What's your name?", Some("name"), match_name)),
        (
            2,
            Goal::new("nice-to-meet-you", "Nice to meet you.", None, match_nice_to_meet_you),
        ),
        (3, Goal::new("how-are-you", "How are you today?", Some("state"), match_how_are_you)),
        (4, Goal::new("where-from", "Where are you from?", Some("place"), match_where_from)),
    ]
}

/// BOT: What's your name?
///
/// USR: `My name's X`, `My name is X`, `It's X`, `It is X`, `I'm X`, `I am X`
/// or just `X`, optionally followed by `.` or `!`. Extracts the name.
pub fn match_name<'a>(input: &'a AnnotatedDocument, _ctx: &MatchContext) -> MatchResult<'a> {
    slot_result(input, NAME_PATTERNS.last_match(input.text()))
}

/// BOT: Nice to meet you.
///
/// USR: `Nice to meet you, too` with an optional full stop. No slot.
pub fn match_nice_to_meet_you<'a>(
    input: &'a AnnotatedDocument,
    _ctx: &MatchContext,
) -> MatchResult<'a> {
    match NICE_TO_MEET_YOU_PATTERNS.last_match(input.text()) {
        Some(_) => MatchResult::hit_without_slot(input),
        None => MatchResult::miss(input),
    }
}

/// BOT: How are you today?
///
/// USR: an optional `I am `/`I'm `, a state, an optional `, thank you` or
/// `, thanks`, and optional `.`/`!`.
///
/// The state must be exactly one token of the document, tagged with one of the
/// configured adjective tags, and no longer than `max_state_len` characters.
/// "I am banana, thank you." fits the frame but fails validation.
pub fn match_how_are_you<'a>(input: &'a AnnotatedDocument, ctx: &MatchContext) -> MatchResult<'a> {
    let span = match STATE_PATTERNS.last_match(input.text()) {
        Some(PatternHit {
            slot: Some(span), ..
        }) => span,
        _ => return MatchResult::miss(input),
    };
    if is_valid_state(input, span.clone(), ctx) {
        MatchResult::hit(input, &input.text()[span])
    } else {
        MatchResult::miss(input)
    }
}

/// BOT: Where are you from?
///
/// USR: `I am from X`, `I'm from X`, `I come from X`, `I live in X`,
/// `From X` or just `X`, optionally followed by `.` or `!`. Extracts the place.
pub fn match_where_from<'a>(input: &'a AnnotatedDocument, _ctx: &MatchContext) -> MatchResult<'a> {
    slot_result(input, PLACE_PATTERNS.last_match(input.text()))
}

fn slot_result(input: &AnnotatedDocument, hit: Option<PatternHit>) -> MatchResult<'_> {
    match hit {
        Some(PatternHit {
            slot: Some(span), ..
        }) => MatchResult::hit(input, &input.text()[span]),
        _ => MatchResult::miss(input),
    }
}

fn is_valid_state(input: &AnnotatedDocument, span: Range<usize>, ctx: &MatchContext) -> bool {
    let candidate = &input.text()[span.clone()];
    if candidate.is_empty() {
        debug!("Rejecting empty state candidate");
        return false;
    }
    if candidate.chars().count() > ctx.max_state_len {
        debug!(
            "Rejecting state candidate {:?}: longer than {} characters",
            candidate, ctx.max_state_len
        );
        return false;
    }
    match input.tag_at(span) {
        Some(tag) if ctx.adjective_tags.contains(tag) => true,
        Some(tag) => {
            debug!("Rejecting state candidate {:?}: tag {} is not an adjective", candidate, tag);
            false
        }
        None => {
            debug!("Rejecting state candidate {:?}: not a single token", candidate);
            false
        }
    }
}
