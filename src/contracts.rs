// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts behind the laws the crate documents.
//!
//! This module provides debug-mode assertions that verify the algebraic
//! properties promised by [`crate::Outcome`]. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the **documented laws** exactly, one checker per law
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The container itself cannot reach a bad state (the enum representation
//! forbids it), so these checkers exist for the places where state *enters or
//! leaves* the container: projections, interop conversions, and payloads the
//! caller hands back in. The property tests, the fuzz targets and the proof
//! harnesses all route through them.
//!
//! # Law Correspondence
//!
//! | Contract function            | Law (see crate docs)      |
//! |------------------------------|---------------------------|
//! | `check_exclusive`            | Exclusivity               |
//! | `check_projection_agreement` | Projection agreement      |
//! | `check_self_containment`     | Identity containment      |
//! | `check_round_trip`           | Interop round trip        |
//!
//! # Usage
//!
//! ```ignore
//! use bivium::contracts::*;
//!
//! // In debug builds, this panics if a law is violated
//! check_well_formed(&outcome);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the representation carries no third state.
/// This is evaluated at compile time - if it fails, the crate won't build.
const _: () = {
    use std::mem::size_of;

    // INVARIANT: two_variant_layout
    // The container is laid out exactly like std's own two-variant type:
    // one discriminant, one live payload, no spare slot.
    assert!(size_of::<Outcome<u32, u32>>() == size_of::<Result<u32, u32>>());

    // INVARIANT: niche_packing
    // A reference payload leaves room for the failure discriminant in its
    // null niche; there is no flag byte that could drift out of sync.
    assert!(size_of::<Outcome<&u8, ()>>() == size_of::<&u8>());
};

use crate::outcome::{Failure, Outcome, Success};

// ============================================================================
// VARIANT CONTRACTS
// ============================================================================

/// Check that the two state queries partition every value.
///
/// `is_ok()` and `is_err()` must disagree: exactly one of them is `true` for
/// any container, with no payload inspected along the way.
///
/// # Panics (debug builds only)
/// Panics if `is_ok() == is_err()`.
#[inline]
pub fn check_exclusive<T, E>(outcome: &Outcome<T, E>) {
    debug_assert!(
        outcome.is_ok() != outcome.is_err(),
        "Contract violation: Exclusivity - is_ok() = {} and is_err() = {}",
        outcome.is_ok(),
        outcome.is_err()
    );
}

/// Check that the optional views agree with the state queries.
///
/// A success must project to `Some` on the `ok()` side and `None` on the
/// `err()` side; a failure the reverse. Checked through [`Outcome::as_ref`]
/// so the container survives the inspection.
///
/// # Panics (debug builds only)
/// Panics if either view disagrees with the variant.
#[inline]
pub fn check_projection_agreement<T, E>(outcome: &Outcome<T, E>) {
    debug_assert!(
        outcome.as_ref().ok().is_some() == outcome.is_ok(),
        "Contract violation: ProjectionAgreement - ok() present = {} vs is_ok() = {}",
        outcome.as_ref().ok().is_some(),
        outcome.is_ok()
    );

    debug_assert!(
        outcome.as_ref().err().is_some() == outcome.is_err(),
        "Contract violation: ProjectionAgreement - err() present = {} vs is_err() = {}",
        outcome.as_ref().err().is_some(),
        outcome.is_err()
    );
}

// ============================================================================
// CONTAINMENT CONTRACTS
// ============================================================================

/// Check that a payload borrowed from the container is contained by it.
///
/// [`Outcome::contains`] compares by address, so the reference produced by
/// [`Outcome::as_ref`] on the *same* container is the one reference that must
/// match, and a reference to the other side's payload must not.
///
/// # Panics (debug builds only)
/// Panics if the borrowed payload fails the identity check.
#[inline]
pub fn check_self_containment<T, E>(outcome: &Outcome<T, E>) {
    match outcome.as_ref() {
        Success(value) => {
            debug_assert!(
                outcome.contains(value),
                "Contract violation: IdentityContainment - \
                 success payload borrowed from this container not contained"
            );
            debug_assert!(
                !outcome.contains_err(value),
                "Contract violation: IdentityContainment - \
                 success payload matched on the failure side"
            );
        }
        Failure(error) => {
            debug_assert!(
                outcome.contains_err(error),
                "Contract violation: IdentityContainment - \
                 failure payload borrowed from this container not contained"
            );
            debug_assert!(
                !outcome.contains(error),
                "Contract violation: IdentityContainment - \
                 failure payload matched on the success side"
            );
        }
    }
}

// ============================================================================
// INTEROP CONTRACTS
// ============================================================================

/// Check that a detour through [`Result`] and back is the identity.
///
/// The only way this fires is a `PartialEq` implementation that is not
/// reflexive; the classic offender is a floating-point NaN payload.
///
/// # Panics (debug builds only)
/// Panics if the round-tripped container compares unequal to the original.
#[inline]
pub fn check_round_trip<T: PartialEq, E: PartialEq>(outcome: &Outcome<T, E>) {
    let view = outcome.as_ref();
    let back = Outcome::from(Result::from(outcome.as_ref()));
    debug_assert!(
        back == view,
        "Contract violation: RoundTrip - \
         payload did not survive the Result detour (non-reflexive PartialEq?)"
    );
}

// ============================================================================
// AGGREGATE CONTRACTS
// ============================================================================

/// Check every bound-free law at once.
///
/// Exclusivity, projection agreement and identity containment need nothing
/// from the payload types, so this is callable on any container.
#[inline]
pub fn check_well_formed<T, E>(outcome: &Outcome<T, E>) {
    check_exclusive(outcome);
    check_projection_agreement(outcome);
    check_self_containment(outcome);
}

/// Full contract check (adds the interop round trip).
///
/// Needs `PartialEq` payloads, which is why it is split out from
/// [`check_well_formed`].
#[inline]
pub fn check_well_formed_eq<T: PartialEq, E: PartialEq>(outcome: &Outcome<T, E>) {
    check_well_formed(outcome);
    check_round_trip(outcome);
}
