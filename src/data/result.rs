//! Result - a computation that either succeeded or failed.
//!
//! `Result<T, E>` is `Ok { value: T }` or `Err { error: E }`. It mirrors
//! `std::result::Result` but is declared through [`union!`](crate::union), so
//! it carries `cata`, `Tag(...)` rendering and [`Tagged`](crate::adt::Tagged)
//! metadata like every other data type here.
//!
//! # Failure precedence
//!
//! `ap` is left-biased, the same as [`Either`]: when the function side and the
//! value side are both `Err`, the function side's error is returned.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::data::Result;
//!
//! let halved: Result<i32, String> = Result::ok(10).chain(|n| {
//!     if n % 2 == 0 { Result::ok(n / 2) } else { Result::err(format!("{n} is odd")) }
//! });
//! assert_eq!(halved, Result::ok(5));
//! assert_eq!(halved.to_string(), "Ok(5)");
//! ```

use std::result::Result as StdResult;

use super::either::Either;
use super::maybe::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

crate::union! {
    /// The outcome of a computation: `Ok(value)` or `Err(error)`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Result<T, E> {
        /// A successful outcome.
        Ok {
            /// The produced value.
            value: T
        },
        /// A failed outcome.
        Err {
            /// The failure.
            error: E
        },
    }
}

impl<T, E> Result<T, E> {
    /// Lifts a value into `Ok`.
    #[inline]
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self::Ok { value }
    }

    /// Transforms an `Ok` value. `Err` is returned unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Ok { value } => Result::Ok {
                value: function(value),
            },
            Self::Err { error } => Result::Err { error },
        }
    }

    /// Transforms an `Err` value. `Ok` is returned unchanged.
    #[inline]
    pub fn map_err<M, F>(self, function: F) -> Result<T, M>
    where
        F: FnOnce(E) -> M,
    {
        match self {
            Self::Ok { value } => Result::Ok { value },
            Self::Err { error } => Result::Err {
                error: function(error),
            },
        }
    }

    /// Sequences a computation that may itself fail.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        match self {
            Self::Ok { value } => function(value),
            Self::Err { error } => Result::Err { error },
        }
    }

    /// Alias for [`chain`](Result::chain).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.chain(function)
    }

    /// Recovers from `Err` with a computation that receives the error.
    #[inline]
    pub fn or_else<M, F>(self, function: F) -> Result<T, M>
    where
        F: FnOnce(E) -> Result<T, M>,
    {
        match self {
            Self::Ok { value } => Result::Ok { value },
            Self::Err { error } => function(error),
        }
    }

    /// Returns the `Ok` value, or `default` for `Err`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        self.cata(|value| value, |_| default)
    }

    /// Keeps the `Ok` value as `Just`; `Err` becomes `Nothing`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        self.cata(Maybe::of, |_| Maybe::Nothing)
    }

    /// Converts into an [`Either`], `Err` on the left.
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        self.cata(Either::right, Either::left)
    }

    /// Converts into a `std::result::Result`.
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        self.cata(Ok, Err)
    }

    /// Wraps a fallible function so that its `std` result becomes this type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Result;
    ///
    /// let parse = Result::attempt(|text: &str| text.parse::<i64>());
    /// assert_eq!(parse("-3"), Result::ok(-3));
    /// assert!(parse("three").is_err());
    /// ```
    pub fn attempt<A, F>(function: F) -> impl Fn(A) -> Self
    where
        F: Fn(A) -> StdResult<T, E>,
    {
        move |argument| Self::from(function(argument))
    }
}

impl<F, E> Result<F, E> {
    /// Applies the held function to the value held by `value`.
    ///
    /// Left-biased: when both sides are `Err`, `self`'s error wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Result;
    ///
    /// let function: Result<fn(i32) -> i32, &str> = Result::err("first");
    /// assert_eq!(function.ap(Result::<i32, &str>::err("second")), Result::err("first"));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, value: Result<A, E>) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Self::Ok { value: function }, Result::Ok { value }) => Result::Ok {
                value: function(value),
            },
            (Self::Err { error }, _) | (Self::Ok { .. }, Result::Err { error }) => {
                Result::Err { error }
            }
        }
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok { value },
            Err(error) => Self::Err { error },
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<T, E> From<Either<E, T>> for Result<T, E> {
    fn from(either: Either<E, T>) -> Self {
        either.fold(Self::err, Self::ok)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Result::Ok { value }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Ok { value: first }, Result::Ok { value: second }) => Result::Ok {
                value: function(first, second),
            },
            (Self::Err { error }, _) | (Self::Ok { .. }, Result::Err { error }) => {
                Result::Err { error }
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.chain(function)
    }
}
