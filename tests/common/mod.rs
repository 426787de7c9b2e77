//! Shared test utilities and fixtures.

#![allow(dead_code)]

use bivium::{Failure, Outcome, Success};

// Re-export canonical test utilities from bivium::testing
pub use bivium::testing::{make_failure, make_success, CallCount};

// ============================================================================
// FIXTURE BUILDERS
// ============================================================================

/// Double a payload; the canonical success-side transform.
pub fn double(n: i32) -> i32 {
    n * 2
}

/// Gate builder: payloads above `threshold` pass, the rest fail.
pub fn gate_over(threshold: i32) -> impl Fn(i32) -> Outcome<i32, &'static str> {
    move |n| {
        if n > threshold {
            Success(n)
        } else {
            Failure("below gate")
        }
    }
}

/// Success fixture with a boxed payload, for address-identity tests.
pub fn make_boxed(value: u8) -> Outcome<Box<u8>, &'static str> {
    Success(Box::new(value))
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Assert the outcome is a success holding exactly `expected`.
pub fn assert_success(outcome: Outcome<i32, &'static str>, expected: i32) {
    assert!(
        outcome.is_ok(),
        "INVARIANT VIOLATED: expected success, got {:?}",
        outcome
    );
    assert_eq!(outcome.unwrap(), expected);
}

/// Assert the outcome is a failure holding exactly `expected`.
pub fn assert_failure(outcome: Outcome<i32, &'static str>, expected: &'static str) {
    assert!(
        outcome.is_err(),
        "INVARIANT VIOLATED: expected failure, got {:?}",
        outcome
    );
    assert_eq!(outcome.unwrap_err(), expected);
}
