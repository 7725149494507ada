//! Either - a value that is one of two alternatives.
//!
//! `Either<L, R>` is `Left { value: L }` or `Right { value: R }`. By
//! convention `Left` holds a failure and `Right` a success: `map`, `chain` and
//! `ap` operate on `Right` and pass `Left` through untouched.
//!
//! # Failure precedence
//!
//! `ap` is left-biased. When both the function side and the value side are
//! `Left`, the function side's `Left` is returned.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::data::Either;
//!
//! fn parse(text: &str) -> Either<String, i32> {
//!     text.parse::<i32>().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! assert_eq!(parse("20").map(|n| n * 2), Either::right(40));
//! assert_eq!(parse("x").map(|n| n * 2), Either::left("not a number: x".to_string()));
//!
//! let rendered = parse("7").fold(|error| error, |n| format!("got {n}"));
//! assert_eq!(rendered, "got 7");
//! ```

use super::maybe::Maybe;
use super::panic::{Panic, catch_panic};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

crate::union! {
    /// A value that is either `Left(value)` or `Right(value)`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Either<L, R> {
        /// The left alternative, conventionally a failure.
        Left {
            /// The held value.
            value: L
        },
        /// The right alternative, conventionally a success.
        Right {
            /// The held value.
            value: R
        },
    }
}

impl<L, R> Either<L, R> {
    /// Lifts a value into `Right`.
    #[inline]
    #[must_use]
    pub const fn of(value: R) -> Self {
        Self::Right { value }
    }

    /// Transforms a `Right` value. `Left` is returned unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        match self {
            Self::Left { value } => Either::Left { value },
            Self::Right { value } => Either::Right {
                value: function(value),
            },
        }
    }

    /// Transforms a `Left` value. `Right` is returned unchanged.
    #[inline]
    pub fn map_left<B, F>(self, function: F) -> Either<B, R>
    where
        F: FnOnce(L) -> B,
    {
        match self {
            Self::Left { value } => Either::Left {
                value: function(value),
            },
            Self::Right { value } => Either::Right { value },
        }
    }

    /// Transforms whichever side is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Either;
    ///
    /// let left: Either<i32, i32> = Either::left(1);
    /// assert_eq!(left.bimap(|l| l * 10, |r| r + 1), Either::left(10));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left { value } => Either::Left {
                value: left_function(value),
            },
            Self::Right { value } => Either::Right {
                value: right_function(value),
            },
        }
    }

    /// Sequences a computation that may itself produce `Left`.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left { value } => Either::Left { value },
            Self::Right { value } => function(value),
        }
    }

    /// Alias for [`chain`](Either::chain).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }

    /// Collapses both sides into one value. Same as [`cata`](Either::cata).
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.cata(left_function, right_function)
    }

    /// Swaps the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.fold(Either::right, Either::left)
    }

    /// Returns the `Right` value, or `default` for `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        self.fold(|_| default, |value| value)
    }

    /// Recovers from `Left` with a computation that receives the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Either;
    ///
    /// let failed: Either<&str, usize> = Either::left("four");
    /// assert_eq!(failed.or_else(|text| Either::<(), usize>::right(text.len())), Either::right(4));
    /// ```
    #[inline]
    pub fn or_else<M, F>(self, function: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Either<M, R>,
    {
        match self {
            Self::Left { value } => function(value),
            Self::Right { value } => Either::Right { value },
        }
    }

    /// Keeps the `Right` value as `Just`; `Left` becomes `Nothing`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        self.fold(|_| Maybe::Nothing, Maybe::of)
    }

    /// Wraps a fallible function so that `Ok` becomes `Right` and `Err`
    /// becomes `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Either;
    ///
    /// let parse = Either::attempt(|text: &str| text.parse::<u8>());
    /// assert_eq!(parse("12"), Either::right(12));
    /// assert!(parse("300").is_left());
    /// ```
    pub fn attempt<A, F>(function: F) -> impl Fn(A) -> Self
    where
        F: Fn(A) -> Result<R, L>,
    {
        move |argument| Self::from(function(argument))
    }
}

impl<R> Either<Panic, R> {
    /// Wraps a function that may panic so that a panic becomes `Left(Panic)`.
    pub fn attempt_unwind<A, F>(function: F) -> impl Fn(A) -> Self
    where
        F: Fn(A) -> R,
    {
        move |argument| Self::from(catch_panic(|| function(argument)))
    }
}

impl<T> Either<T, T> {
    /// Returns the held value, whichever side it is on.
    #[inline]
    pub fn merge(self) -> T {
        self.fold(|value| value, |value| value)
    }
}

impl<L, F> Either<L, F> {
    /// Applies the held function to the value held by `value`.
    ///
    /// Left-biased: when both sides are `Left`, `self`'s `Left` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Either;
    ///
    /// let function: Either<&str, fn(i32) -> i32> = Either::left("no function");
    /// let value: Either<&str, i32> = Either::left("no value");
    /// assert_eq!(function.ap(value), Either::left("no function"));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, value: Either<L, A>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Self::Left { value }, _) | (Self::Right { .. }, Either::Left { value }) => {
                Either::Left { value }
            }
            (Self::Right { value: function }, Either::Right { value }) => Either::Right {
                value: function(value),
            },
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right { value },
            Err(value) => Self::Left { value },
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right { value }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Left { value }, _) | (Self::Right { .. }, Either::Left { value }) => {
                Either::Left { value }
            }
            (Self::Right { value: first }, Either::Right { value: second }) => Either::Right {
                value: function(first, second),
            },
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}
