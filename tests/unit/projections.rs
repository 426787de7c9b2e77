//! Optional views and the borrowing adapter: `ok`, `err`, `as_ref`.

use super::common::{make_failure, make_success};
use bivium::{Failure, Outcome, Success};

#[test]
fn ok_keeps_the_success_payload() {
    assert_eq!(make_success(2).ok(), Some(2));
    assert_eq!(make_failure("gone").ok(), None);
}

#[test]
fn err_keeps_the_failure_payload() {
    assert_eq!(make_failure("gone").err(), Some("gone"));
    assert_eq!(make_success(2).err(), None);
}

#[test]
fn views_discard_the_other_side_payload() {
    let lost: Outcome<i32, String> = Failure("detail".to_string());
    assert_eq!(lost.ok(), None);

    let kept: Outcome<String, i32> = Success("payload".to_string());
    assert_eq!(kept.err(), None);
}

#[test]
fn empty_success_payload_projects_to_some_none() {
    // "Succeeded with nothing inside" is still a success.
    let quiet: Outcome<Option<i32>, &str> = Success(None);
    assert_eq!(quiet.ok(), Some(None));

    let loud: Outcome<Option<i32>, &str> = Success(Some(3));
    assert_eq!(loud.ok(), Some(Some(3)));
}

#[test]
fn as_ref_borrows_without_consuming() {
    let owned: Outcome<String, u8> = Success("keep".to_string());
    assert_eq!(owned.as_ref().map(|s| s.len()), Success(4));
    assert_eq!(owned.as_ref().ok(), Some(&"keep".to_string()));

    // Still here after all that.
    assert!(owned.is_ok());
    assert_eq!(owned.unwrap(), "keep");
}

#[test]
fn as_ref_mirrors_the_variant() {
    let failed: Outcome<u8, String> = Failure("left".to_string());
    let view = failed.as_ref();
    assert!(view.is_err());
    assert_eq!(view.err(), Some(&"left".to_string()));
}
