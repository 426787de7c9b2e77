//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::Cell;

use crate::outcome::{Failure, Outcome, Success};

/// Create the canonical success fixture: `i32` payload, `&'static str` error.
///
/// This is the concrete shape used across all tests.
pub fn make_success(value: i32) -> Outcome<i32, &'static str> {
    Success(value)
}

/// Create the canonical failure fixture.
pub fn make_failure(error: &'static str) -> Outcome<i32, &'static str> {
    Failure(error)
}

/// Invocation counter for pinning down which callbacks ran.
///
/// Interior mutability keeps a counting closure `Fn`, so it can be handed to
/// any combinator without borrow gymnastics. Short-circuit tests assert a
/// count of zero on the branch that must not execute.
pub struct CallCount {
    calls: Cell<u32>,
}

impl CallCount {
    pub const fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    /// Record one invocation.
    pub fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    /// Number of invocations recorded so far.
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl Default for CallCount {
    fn default() -> Self {
        Self::new()
    }
}
