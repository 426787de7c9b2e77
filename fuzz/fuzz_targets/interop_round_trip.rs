// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the `Result` interop boundary.
//!
//! Conversions in both directions must be lossless and variant-faithful for
//! any payload the fuzzer can dream up, including empty strings, extreme
//! integers and repeated detours.

#![no_main]

use bivium::contracts::check_well_formed_eq;
use bivium::{Failure, Outcome, Success};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (bool, i32, String)| {
    let (start_ok, value, error) = input;
    let oc: Outcome<i32, String> = if start_ok {
        Success(value)
    } else {
        Failure(error)
    };

    check_well_formed_eq(&oc);

    // INVARIANT 1: one detour is the identity
    let back = Outcome::from(Result::from(oc.clone()));
    assert_eq!(back, oc, "round trip lost or changed the payload");

    // INVARIANT 2: variants map to variants
    let as_result = Result::from(oc.clone());
    assert_eq!(as_result.is_ok(), oc.is_ok());

    // INVARIANT 3: payloads cross the boundary untouched
    match oc.clone() {
        Success(v) => assert_eq!(as_result, Ok(v)),
        Failure(e) => assert_eq!(as_result, Err(e)),
    }

    // INVARIANT 4: projections agree on both sides of the boundary
    let as_result = Result::from(oc.clone());
    assert_eq!(oc.clone().ok(), as_result.clone().ok());
    assert_eq!(oc.clone().err(), as_result.err());

    // INVARIANT 5: repeated detours stay put
    let mut walked = oc.clone();
    for _ in 0..4 {
        walked = Outcome::from(Result::from(walked));
    }
    assert_eq!(walked, oc);
});
