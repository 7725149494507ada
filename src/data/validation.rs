//! Validation - success, or an accumulation of failures.
//!
//! `Validation<E, A>` is `Success { value: A }` or `Failure { errors: E }`.
//! Unlike [`Either`], combining two failures keeps both: `ap`, `concat` and
//! [`sequence`](Validation::sequence) join the errors with
//! [`Semigroup::combine`], in operand order.
//!
//! `chain` still short-circuits: the next step needs a value, and a `Failure`
//! has none.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::data::Validation;
//!
//! let first: Validation<Vec<&str>, ()> = Validation::failure(vec!["a"]);
//! let second: Validation<Vec<&str>, ()> = Validation::failure(vec!["b"]);
//! assert_eq!(first.clone().concat(second.clone()), Validation::failure(vec!["a", "b"]));
//! assert_ne!(second.concat(first), Validation::failure(vec!["a", "b"]));
//! ```

use super::either::Either;
use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

crate::union! {
    /// Either a validated value or the failures collected so far.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Validation<E, A> {
        /// The value passed.
        Success {
            /// The validated value.
            value: A
        },
        /// The value failed.
        Failure {
            /// Every failure collected.
            errors: E
        },
    }
}

impl<E, A> Validation<E, A> {
    /// Lifts a value into `Success`.
    #[inline]
    #[must_use]
    pub const fn of(value: A) -> Self {
        Self::Success { value }
    }

    /// Transforms a `Success` value. `Failure` is returned unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success { value } => Validation::Success {
                value: function(value),
            },
            Self::Failure { errors } => Validation::Failure { errors },
        }
    }

    /// Transforms the collected failures.
    #[inline]
    pub fn map_failure<M, F>(self, function: F) -> Validation<M, A>
    where
        F: FnOnce(E) -> M,
    {
        match self {
            Self::Success { value } => Validation::Success { value },
            Self::Failure { errors } => Validation::Failure {
                errors: function(errors),
            },
        }
    }

    /// Sequences a validation that depends on this one's value.
    ///
    /// A `Failure` short-circuits; its errors are not combined with anything.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Success { value } => function(value),
            Self::Failure { errors } => Validation::Failure { errors },
        }
    }

    /// Alias for [`chain`](Validation::chain).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        self.chain(function)
    }

    /// Returns the `Success` value, or `default` for `Failure`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        self.cata(|value| value, |_| default)
    }

    /// Converts into an [`Either`], failures on the left.
    #[inline]
    pub fn to_either(self) -> Either<E, A> {
        self.cata(Either::right, Either::left)
    }

    /// Converts into a `std::result::Result`.
    #[inline]
    pub fn to_result(self) -> Result<A, E> {
        self.cata(Ok, Err)
    }
}

impl<E: Semigroup, A> Validation<E, A> {
    /// Collects every validation into one, keeping all values in order when
    /// all pass and combining all failures in order otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Validation;
    ///
    /// let checks: Vec<Validation<Vec<String>, i32>> = vec![
    ///     Validation::success(1),
    ///     Validation::failure(vec!["two".to_string()]),
    ///     Validation::failure(vec!["three".to_string()]),
    /// ];
    /// assert_eq!(
    ///     Validation::sequence(checks),
    ///     Validation::failure(vec!["two".to_string(), "three".to_string()]),
    /// );
    /// ```
    pub fn sequence<I>(validations: I) -> Validation<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        validations.into_iter().fold(
            Validation::Success { value: Vec::new() },
            |collected, validation| match (collected, validation) {
                (Validation::Success { value: mut values }, Self::Success { value }) => {
                    values.push(value);
                    Validation::Success { value: values }
                }
                (Validation::Success { .. }, Self::Failure { errors })
                | (Validation::Failure { errors }, Self::Success { .. }) => {
                    Validation::Failure { errors }
                }
                (Validation::Failure { errors: first }, Self::Failure { errors: second }) => {
                    Validation::Failure {
                        errors: first.combine(second),
                    }
                }
            },
        )
    }
}

impl<E: Semigroup, A: Semigroup> Validation<E, A> {
    /// Combines two validations.
    ///
    /// Two failures combine their errors, `self`'s first. A failure on either
    /// side wins over a success. Two successes combine their values.
    #[inline]
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Self::Success { value: first }, Self::Success { value: second }) => Self::Success {
                value: first.combine(second),
            },
            (Self::Success { .. }, failure @ Self::Failure { .. })
            | (failure @ Self::Failure { .. }, Self::Success { .. }) => failure,
            (Self::Failure { errors: first }, Self::Failure { errors: second }) => {
                Self::Failure {
                    errors: first.combine(second),
                }
            }
        }
    }
}

impl<E, A: Monoid> Validation<E, A> {
    /// The identity for [`concat`](Validation::concat): `Success(A::empty())`.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::Success { value: A::empty() }
    }
}

impl<E: Semigroup, F> Validation<E, F> {
    /// Applies the held function to the value held by `value`.
    ///
    /// When both sides fail, the errors are combined, `self`'s first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Validation;
    ///
    /// let function: Validation<Vec<&str>, fn(i32) -> i32> = Validation::failure(vec!["f"]);
    /// let value: Validation<Vec<&str>, i32> = Validation::failure(vec!["x"]);
    /// assert_eq!(function.ap(value), Validation::failure(vec!["f", "x"]));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, value: Validation<E, A>) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Self::Success { value: function }, Validation::Success { value }) => {
                Validation::Success {
                    value: function(value),
                }
            }
            (Self::Success { .. }, Validation::Failure { errors })
            | (Self::Failure { errors }, Validation::Success { .. }) => {
                Validation::Failure { errors }
            }
            (Self::Failure { errors: first }, Validation::Failure { errors: second }) => {
                Validation::Failure {
                    errors: first.combine(second),
                }
            }
        }
    }
}

impl<E, A> From<Either<E, A>> for Validation<E, A> {
    fn from(either: Either<E, A>) -> Self {
        either.fold(Self::failure, Self::success)
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success { value },
            Err(errors) => Self::Failure { errors },
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E: Semigroup, A: Semigroup> Semigroup for Validation<E, A> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<E: Semigroup, A: Monoid> Monoid for Validation<E, A> {
    fn empty() -> Self {
        Self::Success { value: A::empty() }
    }
}

impl<E, A> TypeConstructor for Validation<E, A> {
    type Inner = A;
    type WithType<B> = Validation<E, B>;
}

impl<E, A> Functor for Validation<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<E: Semigroup, A> Applicative for Validation<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Success { value }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.map(|first| move |second| function(first, second))
            .ap(other)
    }

    #[inline]
    fn apply<B, Output>(self, other: Validation<E, B>) -> Validation<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<E: Semigroup, A> Monad for Validation<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        self.chain(function)
    }
}
