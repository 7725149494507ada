#![cfg(feature = "data")]
//! Integration tests for `Either`.

use adtkit::data::{Either, Maybe, Panic};
use rstest::rstest;
use std::cell::Cell;

fn parse_port(text: &str) -> Either<String, u16> {
    text.parse::<u16>()
        .map_err(|error| format!("{text}: {error}"))
        .into()
}

#[rstest]
fn right_flows_through_map_and_chain() {
    let port = parse_port("8080")
        .map(|port| port + 1)
        .chain(|port| {
            if port > 1024 {
                Either::right(port)
            } else {
                Either::left("privileged".to_string())
            }
        });
    assert_eq!(port, Either::right(8081));
}

#[rstest]
fn left_skips_map_and_chain() {
    let port = parse_port("http").map(|port| port + 1).chain(|port| Either::right(port * 2));
    assert!(port.is_left());
    assert_eq!(port.to_maybe(), Maybe::Nothing);
}

#[rstest]
fn left_never_calls_map_or_chain() {
    let calls = Cell::new(0);
    let failed = Either::<String, u16>::left("down".to_string())
        .map(|port| {
            calls.set(calls.get() + 1);
            port + 1
        })
        .chain(|port| {
            calls.set(calls.get() + 1);
            Either::right(port)
        });
    assert_eq!(failed, Either::left("down".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case("1", "ok 1")]
#[case("-1", "failed")]
fn fold_collapses_both_sides(#[case] input: &str, #[case] expected: &str) {
    let rendered = parse_port(input).fold(|_| "failed".to_string(), |port| format!("ok {port}"));
    assert_eq!(rendered, expected);
}

#[rstest]
fn attempt_wraps_json_parsing() {
    let parse = Either::attempt(|text: &str| serde_json::from_str::<serde_json::Value>(text));
    assert_eq!(parse("[1, 2]").to_maybe(), Maybe::just(serde_json::json!([1, 2])));
    let failed = parse("{");
    assert!(failed.is_left());
    assert!(failed.swap().fold(|_| false, |error| error.is_eof()));
}

#[rstest]
fn attempt_unwind_turns_panics_into_left() {
    let checked_divide = Either::attempt_unwind(|(numerator, divisor): (i32, i32)| {
        assert!(divisor != 0, "division by zero");
        numerator / divisor
    });
    assert_eq!(checked_divide((9, 3)), Either::right(3));
    assert_eq!(checked_divide((9, 0)), Either::left(Panic::new("division by zero")));
}

#[rstest]
fn ap_is_left_biased() {
    let function: Either<&str, fn(i32) -> i32> = Either::left("function");
    let value: Either<&str, i32> = Either::left("value");
    assert_eq!(function.ap(value), Either::left("function"));

    let negate: fn(i32) -> i32 = |n| -n;
    let negate: Either<&str, fn(i32) -> i32> = Either::right(negate);
    assert_eq!(negate.ap(Either::left("value")), Either::left("value"));
    assert_eq!(negate.ap(Either::right(4)), Either::right(-4));
}

#[rstest]
fn bimap_and_merge() {
    let left: Either<i32, String> = Either::left(3);
    let merged = left.bimap(|n| n.to_string(), |text| text.to_uppercase()).merge();
    assert_eq!(merged, "3");
}

#[rstest]
fn converts_to_and_from_std_result() {
    let either: Either<String, i32> = Ok(1).into();
    assert_eq!(either, Either::right(1));
    let back: Result<i32, String> = Either::<String, i32>::left("bad".to_string()).into();
    assert_eq!(back, Err("bad".to_string()));
}
