// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the bivium combinator laws.
//!
//! This standalone crate drives symbolic payloads through the real
//! `Outcome` combinators and proves the documented laws hold for every
//! input, not just the samples the property tests happen to draw.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Exclusivity**: every carrier is exactly one of success or failure
//! 2. **Pass-through**: transforms never touch the opposite side
//! 3. **Totality**: defaulted transforms always yield a success
//! 4. **Short-circuit**: binds never run on the wrong side
//! 5. **Round trip**: the std `Result` detour is the identity
//! 6. **Unwrap contract**: extraction panics exactly on the wrong variant

use bivium::{Failure, Outcome, Success};

/// Error tag produced by the overflow fixture below.
pub const OVERFLOW: u8 = 1;

// ============================================================================
// COMBINATOR FIXTURES
// ============================================================================

/// Double a value, failing on overflow. Used as a bind target so the
/// proofs exercise both resulting variants.
pub fn checked_double(value: i32) -> Outcome<i32, u8> {
    match value.checked_mul(2) {
        Some(doubled) => Success(doubled),
        None => Failure(OVERFLOW),
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Build a carrier whose variant and payload are both symbolic.
    fn any_outcome() -> Outcome<i32, u8> {
        if kani::any() {
            Success(kani::any())
        } else {
            Failure(kani::any())
        }
    }

    /// Verify every carrier is exactly one of success or failure, with
    /// the optional views agreeing with the flags.
    #[kani::proof]
    fn verify_variants_exclusive() {
        let outcome = any_outcome();

        kani::assert(
            outcome.is_ok() != outcome.is_err(),
            "Exactly one variant flag must hold",
        );
        kani::assert(
            outcome.is_ok() == outcome.ok().is_some(),
            "ok() must be occupied exactly on success",
        );
        kani::assert(
            outcome.is_err() == outcome.err().is_some(),
            "err() must be occupied exactly on failure",
        );
    }

    /// Verify map transforms the success payload and forwards failures
    /// untouched, with map_err mirroring it on the other side.
    #[kani::proof]
    fn verify_transforms_pass_through() {
        let outcome = any_outcome();
        let mapped = outcome.map(|v| v.wrapping_add(1));
        let err_mapped = outcome.map_err(|e| e.wrapping_mul(3));

        match outcome {
            Success(v) => {
                kani::assert(
                    mapped == Success(v.wrapping_add(1)),
                    "map must apply the transform on success",
                );
                kani::assert(
                    err_mapped == Success(v),
                    "map_err must forward a success untouched",
                );
            }
            Failure(e) => {
                kani::assert(
                    mapped == Failure(e),
                    "map must forward a failure untouched",
                );
                kani::assert(
                    err_mapped == Failure(e.wrapping_mul(3)),
                    "map_err must apply the transform on failure",
                );
            }
        }
    }

    /// Verify the defaulted transforms can never produce a failure, and
    /// that the default goes through the transform like a real payload.
    #[kani::proof]
    fn verify_defaulted_transforms_total() {
        let outcome = any_outcome();
        let default: i32 = kani::any();

        let eager = outcome.map_or(|v| v.wrapping_add(1), default);
        kani::assert(eager.is_ok(), "map_or must always yield a success");
        if outcome.is_err() {
            kani::assert(
                eager == Success(default.wrapping_add(1)),
                "map_or must transform the default on failure",
            );
        }

        let lazy = outcome.map_or_else(|v| v.wrapping_add(1), || default);
        kani::assert(lazy == eager, "map_or_else must agree with map_or");
    }

    /// Verify the wrong side never runs a bind.
    #[kani::proof]
    fn verify_binds_short_circuit() {
        let error: u8 = kani::any();
        let failed: Outcome<i32, u8> = Failure(error);

        let mut bound_ran = false;
        let bound = failed.and_then(|v| {
            bound_ran = true;
            checked_double(v)
        });
        kani::assert(!bound_ran, "and_then must not run on a failure");
        kani::assert(
            bound == Failure(error),
            "The original error must survive the bind",
        );

        let succeeded: Outcome<i32, u8> = Success(kani::any());
        let mut recovery_ran = false;
        let kept = succeeded.or_else(|_| {
            recovery_ran = true;
            Success(0)
        });
        kani::assert(!recovery_ran, "or_else must not run on a success");
        kani::assert(kept == succeeded, "A success must pass through or_else");
    }

    /// Verify the std `Result` detour is the identity in both directions.
    #[kani::proof]
    fn verify_round_trip_identity() {
        let outcome = any_outcome();
        let detoured = Outcome::from(Result::from(outcome));
        kani::assert(detoured == outcome, "Round trip must preserve the carrier");

        let result: Result<i32, u8> = if kani::any() {
            Ok(kani::any())
        } else {
            Err(kani::any())
        };
        let back = Result::from(Outcome::from(result));
        kani::assert(back == result, "Round trip must preserve the result");
    }

    /// Verify extraction agrees with the variant and never panics on the
    /// matching side.
    #[kani::proof]
    fn verify_extraction_agrees() {
        let value: i32 = kani::any();
        let succeeded: Outcome<i32, u8> = Success(value);
        kani::assert(succeeded.unwrap() == value, "unwrap must return the payload");
        kani::assert(
            succeeded.unwrap_or(kani::any()) == value,
            "unwrap_or must ignore the default on success",
        );

        let error: u8 = kani::any();
        let failed: Outcome<i32, u8> = Failure(error);
        let default: i32 = kani::any();
        kani::assert(
            failed.unwrap_or(default) == default,
            "unwrap_or must surface the default on failure",
        );
        kani::assert(
            failed.unwrap_err() == error,
            "unwrap_err must return the error",
        );
    }

    /// Verify unwrap aborts when pointed at the wrong variant.
    #[kani::proof]
    #[kani::should_panic]
    fn verify_unwrap_on_failure_panics() {
        let failed: Outcome<i32, u8> = Failure(kani::any());
        let _ = failed.unwrap();
    }
}
