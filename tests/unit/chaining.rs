//! Sequential composition: `and`, `and_then`, `or`, `or_else`.

use super::common::{
    assert_failure, assert_success, double, gate_over, make_failure, make_success, CallCount,
};
use bivium::{Failure, Outcome, Success};

#[test]
fn and_forwards_the_first_failure() {
    let early: Outcome<u32, &str> = Failure("early error");
    let late: Outcome<&str, &str> = Failure("late error");

    assert_eq!(Success::<u32, &str>(2).and(late), Failure("late error"));
    assert_eq!(early.and(Success::<&str, &str>("foo")), Failure("early error"));
    assert_eq!(
        Success::<u32, &str>(2).and(Success::<&str, &str>("foo")),
        Success("foo")
    );
}

#[test]
fn or_forwards_the_first_success() {
    assert_eq!(
        Success::<u32, &str>(2).or(Failure::<u32, i32>(-1)),
        Success(2)
    );
    assert_eq!(
        Failure::<u32, &str>("early").or(Success::<u32, i32>(5)),
        Success(5)
    );
    assert_eq!(
        Failure::<u32, &str>("early").or(Failure::<u32, i32>(-1)),
        Failure(-1)
    );
}

#[test]
fn and_then_chains_fallible_steps() {
    assert_success(make_success(10).map(double).and_then(gate_over(15)), 20);
    assert_failure(
        make_success(3).map(double).and_then(gate_over(15)),
        "below gate",
    );
}

#[test]
fn and_then_short_circuits_on_failure() {
    let count = CallCount::new();
    let out = make_failure("upstream").and_then(|v| {
        count.bump();
        make_success(v)
    });
    assert_failure(out, "upstream");
    assert_eq!(count.calls(), 0);
}

#[test]
fn or_else_recovers_with_the_error_in_hand() {
    let repaired = make_failure("four").or_else(|e| make_success(e.len() as i32));
    assert_success(repaired, 4);
}

#[test]
fn or_else_short_circuits_on_success() {
    let count = CallCount::new();
    let out = make_success(2).or_else(|_| {
        count.bump();
        make_failure("never")
    });
    assert_success(out, 2);
    assert_eq!(count.calls(), 0);
}

#[test]
fn chains_can_switch_payload_types() {
    let chained: Outcome<&str, &str> = make_success(2).and(Success("second"));
    assert_eq!(chained, Success("second"));

    let swapped: Outcome<i32, u8> = make_failure("x").or(Failure(7));
    assert_eq!(swapped, Failure(7));
}

#[test]
fn mixed_pipeline_reads_left_to_right() {
    let out = make_success(4)
        .map(double)
        .and_then(gate_over(5))
        .or_else(|_| make_success(0))
        .map(|v| v + 1);
    assert_success(out, 9);
}
