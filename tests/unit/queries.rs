//! State queries: `is_ok`, `is_err` and their predicate forms.

use super::common::{make_failure, make_success, CallCount};
use bivium::{Failure, Outcome, Success};

#[test]
fn is_ok_tracks_the_variant() {
    assert!(make_success(-3).is_ok());
    assert!(!make_failure("some failure message").is_ok());
}

#[test]
fn is_err_is_always_the_complement() {
    for outcome in [make_success(1), make_failure("x")] {
        assert_ne!(outcome.is_ok(), outcome.is_err());
    }
}

#[test]
fn is_ok_and_applies_the_predicate_to_the_payload() {
    assert!(make_success(2).is_ok_and(|v| v > 1));
    assert!(!make_success(0).is_ok_and(|v| v > 1));
}

#[test]
fn is_ok_and_is_false_on_failure_without_running() {
    let count = CallCount::new();
    let held = make_failure("hey").is_ok_and(|_| {
        count.bump();
        true
    });
    assert!(!held);
    assert_eq!(count.calls(), 0);
}

#[test]
fn is_err_and_applies_the_predicate_to_the_error() {
    assert!(make_failure("deep").is_err_and(|e| e.len() > 3));
    assert!(!make_failure("ok").is_err_and(|e| e.len() > 3));
}

#[test]
fn is_err_and_is_false_on_success_without_running() {
    let count = CallCount::new();
    let held = make_success(3).is_err_and(|_| {
        count.bump();
        true
    });
    assert!(!held);
    assert_eq!(count.calls(), 0);
}

#[test]
fn queries_do_not_touch_the_payload() {
    // No Debug, no PartialEq, no Clone: still queryable.
    struct Opaque;

    let up: Outcome<Opaque, Opaque> = Success(Opaque);
    assert!(up.is_ok());

    let down: Outcome<Opaque, Opaque> = Failure(Opaque);
    assert!(down.is_err());
}
