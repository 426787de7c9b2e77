// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary combinator chains.
//!
//! The fuzzer invents a starting container and a script of combinator calls,
//! then replays the script while checking every documented law at every step.
//! If any sequence of calls can smuggle a container into a bad state, this is
//! where it surfaces.

#![no_main]

use arbitrary::Arbitrary;
use bivium::contracts::check_well_formed_eq;
use bivium::{Failure, Outcome, Success};
use libfuzzer_sys::fuzz_target;
use std::cell::Cell;

/// One step of a combinator chain.
#[derive(Arbitrary, Debug)]
enum Step {
    Map { add: i32 },
    MapErr,
    MapOr { default: i32, add: i32 },
    MapOrElse { fallback: i32, add: i32 },
    AndThenGate { threshold: i32 },
    OrElseRecover { value: i32 },
    Inspect,
    And { next_ok: bool, payload: i32 },
    Or { next_ok: bool, payload: i32 },
}

/// A fuzzer-invented starting point plus a script to replay.
#[derive(Arbitrary, Debug)]
struct Plan {
    start_ok: bool,
    seed: i32,
    error: String,
    steps: Vec<Step>,
}

fuzz_target!(|plan: Plan| {
    let mut oc: Outcome<i32, String> = if plan.start_ok {
        Success(plan.seed)
    } else {
        Failure(plan.error.clone())
    };

    for step in plan.steps.iter().take(64) {
        // INVARIANT 1: every intermediate container is law-abiding
        check_well_formed_eq(&oc);

        let before = oc.clone();
        oc = match *step {
            Step::Map { add } => {
                let out = before.clone().map(|v| v.wrapping_add(add));
                // INVARIANT 2: map forwards a failure bit for bit
                if before.is_err() {
                    assert_eq!(out, before, "map disturbed a failure payload");
                }
                out
            }
            Step::MapErr => {
                let out = before.clone().map_err(|e| format!("{}+", e));
                if before.is_ok() {
                    assert_eq!(out, before, "map_err disturbed a success payload");
                }
                out
            }
            Step::MapOr { default, add } => {
                let out = before.clone().map_or(|v| v.wrapping_add(add), default);
                // INVARIANT 3: the defaulted transforms cannot fail
                assert!(out.is_ok(), "map_or produced a failure");
                if before.is_err() {
                    assert_eq!(
                        out,
                        Success(default.wrapping_add(add)),
                        "map_or skipped the transform on the default"
                    );
                }
                out
            }
            Step::MapOrElse { fallback, add } => {
                let out = before
                    .clone()
                    .map_or_else(|v| v.wrapping_add(add), move || fallback);
                assert!(out.is_ok(), "map_or_else produced a failure");
                if before.is_err() {
                    assert_eq!(out, Success(fallback.wrapping_add(add)));
                }
                out
            }
            Step::AndThenGate { threshold } => {
                let out = before.clone().and_then(|v| {
                    if v > threshold {
                        Success(v)
                    } else {
                        Failure("gated".to_string())
                    }
                });
                // INVARIANT 4: a failure short-circuits the bind
                if before.is_err() {
                    assert_eq!(out, before, "and_then ran through a failure");
                }
                out
            }
            Step::OrElseRecover { value } => {
                let out = before.clone().or_else(|_| Success(value));
                if before.is_ok() {
                    assert_eq!(out, before, "or_else ran through a success");
                } else {
                    assert_eq!(out, Success(value));
                }
                out
            }
            Step::Inspect => {
                // INVARIANT 5: inspection fires on exactly the present side
                let saw_value = Cell::new(false);
                let saw_error = Cell::new(false);
                let out = before
                    .clone()
                    .inspect(|_| saw_value.set(true))
                    .inspect_err(|_| saw_error.set(true));
                assert_eq!(saw_value.get(), before.is_ok());
                assert_eq!(saw_error.get(), before.is_err());
                assert_eq!(out, before, "inspection changed the container");
                out
            }
            Step::And { next_ok, payload } => {
                let next: Outcome<i32, String> = if next_ok {
                    Success(payload)
                } else {
                    Failure("late".to_string())
                };
                let out = before.clone().and(next.clone());
                if before.is_err() {
                    assert_eq!(out, before);
                } else {
                    assert_eq!(out, next);
                }
                out
            }
            Step::Or { next_ok, payload } => {
                let next: Outcome<i32, String> = if next_ok {
                    Success(payload)
                } else {
                    Failure("late".to_string())
                };
                let out = before.clone().or(next.clone());
                if before.is_ok() {
                    assert_eq!(out, before);
                } else {
                    assert_eq!(out, next);
                }
                out
            }
        };
    }

    check_well_formed_eq(&oc);

    // INVARIANT 6: extraction agrees with the final variant
    let fallback = plan.seed.wrapping_sub(1);
    let extracted = oc.clone().unwrap_or(fallback);
    match oc {
        Success(v) => assert_eq!(extracted, v),
        Failure(_) => assert_eq!(extracted, fallback),
    }
});
