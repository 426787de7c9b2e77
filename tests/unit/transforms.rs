//! Payload transforms: `map`, `map_err`, the defaulted forms, inspection.

use std::cell::{Cell, RefCell};

use super::common::{
    assert_failure, assert_success, double, make_failure, make_success, CallCount,
};
use bivium::{Failure, Success};

#[test]
fn map_transforms_success_only() {
    assert_success(make_success(21).map(double), 42);
    assert_failure(make_failure("stuck").map(double), "stuck");
}

#[test]
fn map_can_change_the_payload_type() {
    let texty = make_success(5).map(|v| format!("got {}", v));
    assert_eq!(texty, Success("got 5".to_string()));
}

#[test]
fn map_does_not_run_on_failure() {
    let count = CallCount::new();
    let _ = make_failure("stuck").map(|v| {
        count.bump();
        v
    });
    assert_eq!(count.calls(), 0);
}

#[test]
#[should_panic(expected = "the transform gave out")]
fn a_panic_inside_a_transform_is_not_caught() {
    // Caller panics cross the library frame unchanged; nothing here
    // converts them into a failure variant.
    let _ = make_success(1).map(|_| -> i32 { panic!("the transform gave out") });
}

#[test]
fn map_err_transforms_failure_only() {
    let relabeled = make_failure("io").map_err(|e| format!("outer: {}", e));
    assert_eq!(relabeled, Failure("outer: io".to_string()));

    let untouched = make_success(2).map_err(|e| format!("outer: {}", e));
    assert_eq!(untouched, Success(2));
}

#[test]
fn map_err_does_not_run_on_success() {
    let count = CallCount::new();
    let _ = make_success(1).map_err(|e| {
        count.bump();
        e
    });
    assert_eq!(count.calls(), 0);
}

// ============================================================================
// DEFAULTED TRANSFORMS
// ============================================================================

#[test]
fn map_or_transforms_the_payload_on_success() {
    assert_eq!(make_success(3).map_or(|x| x + 1, 5), Success(4));
}

#[test]
fn map_or_transforms_the_default_on_failure() {
    // The default is a replacement input, not a replacement output.
    assert_eq!(make_failure("boom").map_or(|x| x + 1, 5), Success(6));
}

#[test]
fn map_or_never_returns_a_failure() {
    for outcome in [make_success(1), make_failure("down")] {
        assert!(outcome.map_or(double, 50).is_ok());
    }
}

#[test]
fn map_or_else_runs_the_supplier_only_on_failure() {
    let count = CallCount::new();

    let hit = make_success(3).map_or_else(|x| x * 10, || {
        count.bump();
        7
    });
    assert_eq!(hit, Success(30));
    assert_eq!(count.calls(), 0);

    let miss = make_failure("boom").map_or_else(|x| x * 10, || {
        count.bump();
        7
    });
    assert_eq!(miss, Success(70));
    assert_eq!(count.calls(), 1);
}

// ============================================================================
// INSPECTION
// ============================================================================

#[test]
fn inspect_observes_without_changing() {
    let log = RefCell::new(Vec::new());
    let out = make_success(4)
        .inspect(|v| log.borrow_mut().push(*v))
        .map(double)
        .inspect(|v| log.borrow_mut().push(*v));
    assert_success(out, 8);
    assert_eq!(*log.borrow(), vec![4, 8]);
}

#[test]
fn inspect_err_sees_the_failure_payload() {
    let seen = Cell::new("");
    let out = make_failure("worn cable").inspect_err(|e| seen.set(*e));
    assert_failure(out, "worn cable");
    assert_eq!(seen.get(), "worn cable");
}

#[test]
fn inspection_skips_the_absent_side() {
    let count = CallCount::new();
    let left = make_failure("quiet").inspect(|_| count.bump());
    let right = make_success(1).inspect_err(|_| count.bump());
    assert_failure(left, "quiet");
    assert_success(right, 1);
    assert_eq!(count.calls(), 0);
}

#[test]
#[should_panic(expected = "the action gave out")]
fn a_panic_inside_inspect_propagates_to_the_caller() {
    let _ = make_success(4).inspect(|_| panic!("the action gave out"));
}

#[test]
#[should_panic(expected = "the action gave out")]
fn a_panic_inside_inspect_err_propagates_to_the_caller() {
    let _ = make_failure("down").inspect_err(|_| panic!("the action gave out"));
}
