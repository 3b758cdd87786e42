//! Dispatch over open domains: numbers, strings and dynamically typed values.

use lazy_static::lazy_static;
use matcha::{
    Dispatch, MatchError, ValueMatcher, hooks::Logged, keyed::KeyedMatcher, testing::Spy,
};
use std::thread;

mod common;
use common::{Argument, match_argument, match_number, match_yes_no};

// ============================================================================
// Numbers
// ============================================================================

/// The same classification written as a plain `match` with a default arm.
fn spell_with_match(n: i64) -> String {
    match n {
        1 => "one".to_string(),
        2 => "two".to_string(),
        3 => "three".to_string(),
        other => other.to_string(),
    }
}

#[test]
fn test_matcher_agrees_with_plain_match() {
    let spell = match_number(
        || "one".to_string(),
        || "two".to_string(),
        || "three".to_string(),
        |n| n.to_string(),
    );

    for n in -2..=6 {
        assert_eq!(spell.dispatch(n), spell_with_match(n));
    }
}

#[test]
fn test_number_other_receives_value() {
    let (one, two, three) = (Spy::<()>::new(), Spy::<()>::new(), Spy::<()>::new());
    let other = Spy::<i64>::new();
    let matcher = match_number(one.thunk(), two.thunk(), three.thunk(), other.handler());

    matcher.dispatch(0);
    assert!(other.was_called_with(&0));

    matcher.dispatch(4);
    assert!(other.was_called_with(&4));

    assert_eq!(other.calls(), vec![0, 4]);
    assert!(!one.was_called());
    assert!(!two.was_called());
    assert!(!three.was_called());
}

#[test]
fn test_exactly_one_handler_fires_once() {
    let (one, two, three) = (Spy::<()>::new(), Spy::<()>::new(), Spy::<()>::new());
    let other = Spy::<i64>::new();
    let matcher = match_number(one.thunk(), two.thunk(), three.thunk(), other.handler());

    matcher.dispatch(2);

    assert_eq!(two.count(), 1);
    assert_eq!(one.count() + three.count() + other.count(), 0);
}

lazy_static! {
    static ref IS_LARGER_THAN_THREE: ValueMatcher<i64, bool> =
        match_number(|| false, || false, || false, |n| n > 3);
}

#[test]
fn test_result_type_chosen_by_caller() {
    assert!(!IS_LARGER_THAN_THREE.dispatch(0));
    assert!(!IS_LARGER_THAN_THREE.dispatch(1));
    assert!(IS_LARGER_THAN_THREE.dispatch(4));
}

#[test]
fn test_dispatch_is_deterministic() {
    let matcher = match_number(|| 1, || 2, || 3, |n| n * 10);

    let first: Vec<i64> = (0..8).map(|n| matcher.dispatch(n)).collect();
    let second: Vec<i64> = (0..8).map(|n| matcher.dispatch(n)).collect();

    assert_eq!(first, second);
    assert_eq!(first, vec![0, 1, 2, 3, 40, 50, 60, 70]);
}

#[test]
fn test_concurrent_dispatch() {
    let other = Spy::<i64, bool>::returning(true);
    let matcher = match_number(|| false, || false, || false, other.handler());

    thread::scope(|scope| {
        for n in 4..12 {
            let matcher = &matcher;
            scope.spawn(move || assert!(matcher.dispatch(n)));
        }
    });

    assert_eq!(other.count(), 8);
    for n in 4..12 {
        assert!(other.was_called_with(&n));
    }
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_yes_no_strings() {
    let (yes, no) = (Spy::<()>::new(), Spy::<()>::new());
    let other = Spy::<String>::new();
    let matcher = match_yes_no(yes.thunk(), no.thunk(), other.handler());

    matcher.dispatch("Yes".to_string());
    assert_eq!(yes.count(), 1);

    matcher.dispatch("No".to_string());
    assert_eq!(no.count(), 1);

    matcher.dispatch("🤖".to_string());
    assert_eq!(other.calls(), vec!["🤖".to_string()]);
    assert_eq!(yes.count() + no.count(), 2);
}

#[test]
fn test_yes_no_is_case_sensitive() {
    let matcher = match_yes_no(|| 1, || 0, |_| -1);

    assert_eq!(matcher.dispatch("yes".to_string()), -1);
    assert_eq!(matcher.dispatch(String::new()), -1);
}

#[test]
fn test_keyed_yes_no() {
    let other = Spy::<&str, i32>::returning(-1);
    let matcher = KeyedMatcher::builder()
        .named("matchYesNoString")
        .arm("Yes", || 1)
        .and_then(|b| b.arm("No", || 0))
        .unwrap()
        .otherwise(other.handler());

    assert_eq!(matcher.dispatch("Yes"), 1);
    assert_eq!(matcher.dispatch("No"), 0);
    assert_eq!(matcher.dispatch("🤖"), -1);
    assert!(other.was_called_with(&"🤖"));
}

#[test]
fn test_keyed_duplicate_rejected() {
    let result = KeyedMatcher::<&str, i32>::builder()
        .arm("Yes", || 1)
        .and_then(|b| b.arm("Yes", || 2));

    assert!(matches!(result, Err(MatchError::DuplicateKey(ref key)) if key == "\"Yes\""));
}

// ============================================================================
// Dynamically typed values
// ============================================================================

fn describe(argument: Argument) -> Result<String, MatchError> {
    match_argument(
        |s| format!("string {s:?}"),
        |b| format!("boolean {b}"),
        |n| format!("number {n}"),
    )
    .dispatch(argument)
}

#[test]
fn test_argument_kinds() {
    assert_eq!(describe(&"Hello World.").unwrap(), "string \"Hello World.\"");
    assert_eq!(describe(&true).unwrap(), "boolean true");
    assert_eq!(describe(&42.0_f64).unwrap(), "number 42");
}

#[test]
fn test_argument_only_matching_handler_fires() {
    let (string, boolean) = (Spy::<&'static str>::new(), Spy::<bool>::new());
    let number = Spy::<f64>::new();
    let matcher = match_argument(string.handler(), boolean.handler(), number.handler());

    let argument: Argument = &true;
    matcher.dispatch(argument).unwrap();

    assert!(boolean.was_called_with(&true));
    assert!(!string.was_called());
    assert!(!number.was_called());
}

#[test]
fn test_unmatched_argument_fails() {
    let err = describe(&()).unwrap_err();

    assert!(matches!(
        err,
        MatchError::UnmatchedValue { ref matcher, ref observed }
            if matcher == "matchArgument" && observed == "undefined"
    ));
    assert_eq!(err.to_string(), "matchArgument: could not match type undefined");
    assert!(!err.is_construction_error());
}

#[test]
fn test_unmatched_argument_runs_no_handler() {
    let string = Spy::<&'static str>::new();
    let boolean = Spy::<bool>::new();
    let number = Spy::<f64>::new();
    let matcher = match_argument(string.handler(), boolean.handler(), number.handler());

    let argument: Argument = &'x';
    assert!(matcher.dispatch(argument).is_err());
    assert_eq!(string.count() + boolean.count() + number.count(), 0);
}

// ============================================================================
// Wrappers
// ============================================================================

#[test]
fn test_logged_matcher_is_transparent() {
    let other = Spy::<i64>::new();
    let matcher = Logged::named(
        "matchNumber",
        match_number(|| (), || (), || (), other.handler()),
    );

    matcher.dispatch(9);
    assert_eq!(other.calls(), vec![9]);
}
