//! Address-identity containment: `contains` and `contains_err`.
//!
//! Containment is the one place this crate compares by address instead of by
//! `PartialEq`, so these tests are careful about which object lives where.

use super::common::{make_boxed, make_failure, make_success};
use bivium::{Failure, Outcome};

#[test]
fn contains_matches_the_held_payload() {
    let held = make_boxed(7);
    let inside = held.as_ref().unwrap();
    assert!(held.contains(inside));
}

#[test]
fn equal_payload_at_a_different_address_does_not_match() {
    let held = make_boxed(7);
    let twin = Box::new(7u8);

    // Same value by ==, different object by address.
    assert_eq!(held.as_ref().unwrap(), &twin);
    assert!(!held.contains(&twin));
}

#[test]
fn contains_err_matches_the_held_error() {
    let failed: Outcome<u8, Box<u8>> = Failure(Box::new(9));
    let inside = failed.as_ref().unwrap_err();
    assert!(failed.contains_err(inside));
    assert!(!failed.contains_err(&Box::new(9)));
}

#[test]
fn the_wrong_side_never_matches() {
    let failed = make_failure("empty");
    assert!(!failed.contains(&1));

    let err_ref = failed.as_ref().unwrap_err();
    assert!(failed.contains_err(err_ref));
    assert!(!failed.contains(err_ref));

    let held = make_success(3);
    let ok_ref = held.as_ref().unwrap();
    assert!(!held.contains_err(ok_ref));
}

#[test]
fn candidate_type_need_not_match_the_payload_type() {
    // Only the address is consulted, so any reference is a legal candidate.
    let held = make_success(3);
    assert!(!held.contains("elsewhere"));
    assert!(!held.contains_err(&[1u8, 2, 3]));
}

#[test]
fn identical_static_strs_in_two_containers_do_not_cross_match() {
    let one = make_failure("shared");
    let two = make_failure("shared");

    let one_ref = one.as_ref().unwrap_err();
    assert!(one.contains_err(one_ref));
    assert!(!two.contains_err(one_ref));
}

#[test]
fn reborrowing_matches_every_time() {
    let held = make_boxed(1);
    for _ in 0..3 {
        let again = held.as_ref().unwrap();
        assert!(held.contains(again));
    }
}
