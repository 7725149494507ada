#![cfg(feature = "data")]
//! Property-based tests for the Applicative and Monad laws.
//!
//! - **Left identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - **Applicative identity**: `pure(id).apply(v) == v`
//! - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`

use adtkit::data::{self, Either, Maybe, Validation};
use adtkit::typeclass::{Applicative, Monad, Semigroup};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::<String, i32>::left),
        any::<i32>().prop_map(Either::<String, i32>::right),
    ]
}

fn result_strategy() -> impl Strategy<Value = data::Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(data::Result::from)
}

fn validation_strategy() -> impl Strategy<Value = Validation<Vec<String>, i32>> {
    prop::result::maybe_ok(any::<i32>(), prop::collection::vec(any::<String>(), 1..4))
        .prop_map(Validation::from)
}

fn halve_maybe(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::just(n / 2) } else { Maybe::nothing() }
}

fn positive_maybe(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::just(n) } else { Maybe::nothing() }
}

fn halve_either(n: i32) -> Either<String, i32> {
    if n % 2 == 0 { Either::right(n / 2) } else { Either::left(format!("{n} is odd")) }
}

fn positive_either(n: i32) -> Either<String, i32> {
    if n > 0 { Either::right(n) } else { Either::left(format!("{n} is not positive")) }
}

fn halve_result(n: i32) -> data::Result<i32, String> {
    if n % 2 == 0 { data::Result::ok(n / 2) } else { data::Result::err(format!("{n} is odd")) }
}

fn positive_result(n: i32) -> data::Result<i32, String> {
    if n > 0 { data::Result::ok(n) } else { data::Result::err(format!("{n} is not positive")) }
}

fn halve_validation(n: i32) -> Validation<Vec<String>, i32> {
    if n % 2 == 0 {
        Validation::success(n / 2)
    } else {
        Validation::failure(vec![format!("{n} is odd")])
    }
}

fn positive_validation(n: i32) -> Validation<Vec<String>, i32> {
    if n > 0 {
        Validation::success(n)
    } else {
        Validation::failure(vec![format!("{n} is not positive")])
    }
}

// =============================================================================
// Maybe
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<i32>>::pure(value).flat_map(halve_maybe), halve_maybe(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in maybe_strategy()) {
        prop_assert_eq!(value.flat_map(Maybe::of), value);
    }

    #[test]
    fn prop_maybe_associativity(value in maybe_strategy()) {
        let left = value.flat_map(halve_maybe).flat_map(positive_maybe);
        let right = value.flat_map(|x| halve_maybe(x).flat_map(positive_maybe));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_applicative_identity(value in maybe_strategy()) {
        let identity: fn(i32) -> i32 = |x| x;
        prop_assert_eq!(Maybe::just(identity).apply(value), value);
    }

    #[test]
    fn prop_maybe_homomorphism(value in any::<i32>()) {
        let negate: fn(i32) -> i32 = i32::wrapping_neg;
        prop_assert_eq!(
            Maybe::just(negate).apply(Maybe::just(value)),
            Maybe::just(value.wrapping_neg())
        );
    }
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        let lifted: Either<String, i32> = Either::of(value);
        prop_assert_eq!(lifted.flat_map(halve_either), halve_either(value));
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Either::of), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = value.clone().flat_map(halve_either).flat_map(positive_either);
        let right = value.flat_map(|x| halve_either(x).flat_map(positive_either));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Result
// =============================================================================

proptest! {
    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        let lifted: data::Result<i32, String> = data::Result::of(value);
        prop_assert_eq!(lifted.flat_map(halve_result), halve_result(value));
    }

    #[test]
    fn prop_result_right_identity(value in result_strategy()) {
        prop_assert_eq!(value.clone().flat_map(data::Result::of), value);
    }

    #[test]
    fn prop_result_associativity(value in result_strategy()) {
        let left = value.clone().flat_map(halve_result).flat_map(positive_result);
        let right = value.flat_map(|x| halve_result(x).flat_map(positive_result));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Validation
// =============================================================================

proptest! {
    #[test]
    fn prop_validation_left_identity(value in any::<i32>()) {
        let lifted: Validation<Vec<String>, i32> = Validation::of(value);
        prop_assert_eq!(lifted.flat_map(halve_validation), halve_validation(value));
    }

    #[test]
    fn prop_validation_right_identity(value in validation_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Validation::of), value);
    }

    #[test]
    fn prop_validation_associativity(value in validation_strategy()) {
        let left = value.clone().flat_map(halve_validation).flat_map(positive_validation);
        let right = value.flat_map(|x| halve_validation(x).flat_map(positive_validation));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_validation_map2_accumulates_in_order(
        first in validation_strategy(),
        second in validation_strategy(),
    ) {
        let combined = first.clone().map2(second.clone(), i32::wrapping_add);
        let expected = match (first, second) {
            (Validation::Success { value: a }, Validation::Success { value: b }) => {
                Validation::success(a.wrapping_add(b))
            }
            (Validation::Failure { errors: a }, Validation::Failure { errors: b }) => {
                Validation::failure(a.combine(b))
            }
            (Validation::Failure { errors }, _) | (_, Validation::Failure { errors }) => {
                Validation::failure(errors)
            }
        };
        prop_assert_eq!(combined, expected);
    }
}
