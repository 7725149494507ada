#![cfg(feature = "effect")]
//! Integration tests for `Writer`: computations that log as they go.

use adtkit::effect::Writer;
use rstest::rstest;

type Logged<A> = Writer<Vec<String>, A>;

fn note(message: String) -> Logged<()> {
    Writer::tell(vec![message])
}

fn factorial(n: u64) -> Logged<u64> {
    if n == 0 {
        note("factorial 0 = 1".to_string()).map(|()| 1)
    } else {
        factorial(n - 1).chain(move |previous| {
            let result = n * previous;
            note(format!("factorial {n} = {result}")).map(move |()| result)
        })
    }
}

#[rstest]
fn outputs_accumulate_in_execution_order() {
    let (result, log) = factorial(3).run();
    assert_eq!(result, 6);
    assert_eq!(
        log,
        vec![
            "factorial 0 = 1",
            "factorial 1 = 1",
            "factorial 2 = 2",
            "factorial 3 = 6",
        ]
    );
}

#[rstest]
fn map2_combines_outputs_left_then_right() {
    let left = Writer::new(2, "left;".to_string());
    let right = Writer::new(3, "right;".to_string());
    assert_eq!(left.map2(right, |a, b| a * b).run(), (6, "left;right;".to_string()));
}

#[rstest]
fn listen_and_censor() {
    let (value, log) = factorial(1)
        .listen()
        .censor(|lines| lines.into_iter().rev().collect())
        .run();
    assert_eq!(value.0, 1);
    assert_eq!(value.1, vec!["factorial 0 = 1", "factorial 1 = 1"]);
    assert_eq!(log, vec!["factorial 1 = 1", "factorial 0 = 1"]);
}

#[rstest]
fn unit_output_is_allowed() {
    let counted: Writer<(), usize> = Writer::of(1).chain(|n| Writer::of(n + 1));
    assert_eq!(counted.run(), (2, ()));
}
