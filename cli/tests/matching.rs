//! # Convmatch Matching Integration Tests
//!
//! File: cli/tests/matching.rs
//!
//! ## Overview
//!
//! Exercises the public library API end to end: raw text through the bundled
//! annotator, then `Dispatcher::resolve_and_match` on the standard registry.
//!

mod common;
use common::annotate;
use convmatch::{
    AnnotatedDocument, ConvmatchError, Dispatcher, KeyKind, MatchContext, TaskRegistry, Token,
};

fn check(task: u32, goal: u32, text: &str) -> (bool, Option<String>) {
    let dispatcher = Dispatcher::default();
    let doc = annotate(text);
    let result = dispatcher
        .resolve_and_match(task, goal, &doc)
        .expect("registered pair must resolve");
    (result.matched(), result.extracted().map(str::to_string))
}

fn hit(slot: &str) -> (bool, Option<String>) {
    (true, Some(slot.to_string()))
}

const MISS: (bool, Option<String>) = (false, None);

#[test]
fn test_name_goal() {
    assert_eq!(check(1, 1, "My name's Tim."), hit("Tim"));
    assert_eq!(check(1, 1, "It is Frank"), hit("Frank"));
    assert_eq!(check(1, 1, "My name is tim."), MISS);
    assert_eq!(check(1, 1, "What is your name?"), MISS);
}

#[test]
fn test_fixed_phrase_goal() {
    assert_eq!(check(1, 2, "Nice to meet you, too"), (true, None));
    assert_eq!(check(1, 2, "Nice to meet you, too."), (true, None));
    assert_eq!(check(1, 2, "Nice to meet you too"), MISS);
}

#[test]
fn test_state_goal() {
    assert_eq!(check(1, 3, "I am happy, thank you"), hit("happy"));
    assert_eq!(check(1, 3, "I am banana, thank you."), MISS);
    assert_eq!(check(1, 3, "I am fine thank you."), MISS);
}

#[test]
fn test_place_goal() {
    assert_eq!(check(1, 4, "I am from New Zealand"), hit("New Zealand"));
    assert_eq!(check(1, 4, "I am from taiwan"), MISS);
}

#[test]
fn test_every_registered_pair_resolves() {
    let dispatcher = Dispatcher::default();
    let doc = annotate("Hello there");
    for (task_id, task) in dispatcher.registry().tasks() {
        for goal_id in task.goal_ids() {
            assert!(
                dispatcher.resolve_and_match(task_id, goal_id, &doc).is_ok(),
                "task {} goal {} should resolve",
                task_id,
                goal_id
            );
        }
    }
}

#[test]
fn test_unknown_task_reports_registered_tasks() {
    let dispatcher = Dispatcher::default();
    let doc = annotate("Tim");
    match dispatcher.resolve_and_match(42, 1, &doc) {
        Err(ConvmatchError::InvalidKey {
            kind,
            key,
            valid_options,
        }) => {
            assert_eq!(kind, KeyKind::Task);
            assert_eq!(key, 42);
            assert_eq!(valid_options, dispatcher.registry().task_ids());
        }
        other => panic!("expected InvalidKey, got {:?}", other),
    }
}

#[test]
fn test_custom_document_from_external_tagger() {
    // A provider with a different tag vocabulary plugs in through the tag set.
    let text = "I am cheerful";
    let doc = AnnotatedDocument::new(
        text,
        vec![
            Token::new("I", "PRON", 0..1),
            Token::new("am", "AUX", 2..4),
            Token::new("cheerful", "ADJ", 5..13),
        ],
    )
    .unwrap();
    let dispatcher = Dispatcher::new(TaskRegistry::standard(), MatchContext::default());
    let result = dispatcher.resolve_and_match(1, 3, &doc).unwrap();
    assert_eq!(result.extracted(), Some("cheerful"));
}

#[test]
fn test_malformed_document_is_invalid_input() {
    let err = AnnotatedDocument::new("Tim", vec![Token::new("Tom", "NNP", 0..3)]).unwrap_err();
    assert!(matches!(
        err,
        ConvmatchError::InvalidInput {
            expected: "AnnotatedDocument",
            ..
        }
    ));
}

#[test]
fn test_dispatcher_is_shareable_across_threads() {
    let dispatcher = std::sync::Arc::new(Dispatcher::default());
    let handles: Vec<_> = ["Tim", "Frank", "Ann"]
        .into_iter()
        .map(|name| {
            let dispatcher = dispatcher.clone();
            std::thread::spawn(move || {
                let doc = annotate(&format!("My name is {}.", name));
                let result = dispatcher.resolve_and_match(1, 1, &doc).unwrap();
                result.extracted().map(str::to_string)
            })
        })
        .collect();
    let names: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        names,
        vec![Some("Tim".into()), Some("Frank".into()), Some("Ann".into())]
    );
}
