//! RemoteData - the lifecycle of a value fetched from elsewhere.
//!
//! `RemoteData<E, A>` has four variants: `NotAsked`, `Loading`,
//! `Failure { error }` and `Success { value }`. Only `Success` holds a value,
//! so `map` and `chain` act on it alone.
//!
//! # Merging
//!
//! `concat` and `ap` resolve two states by priority
//! `NotAsked > Loading > Failure > Success`: the higher-priority state wins,
//! and on a tie the left operand wins. Two successes combine their values.
//!
//! ```rust
//! use adtkit::data::RemoteData;
//!
//! let user: RemoteData<&str, String> = RemoteData::success("ada".to_string());
//! let posts: RemoteData<&str, String> = RemoteData::loading();
//! assert_eq!(user.concat(posts), RemoteData::Loading);
//! ```

use super::maybe::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, Semigroup, TypeConstructor};

crate::union! {
    /// A remotely loaded value and the request state around it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum RemoteData<E, A> {
        /// No request has been made.
        NotAsked,
        /// A request is in flight.
        Loading,
        /// The request failed.
        Failure {
            /// Why it failed.
            error: E
        },
        /// The request succeeded.
        Success {
            /// The loaded value.
            value: A
        },
    }
}

impl<E, A> RemoteData<E, A> {
    /// Lifts a value into `Success`.
    #[inline]
    #[must_use]
    pub const fn of(value: A) -> Self {
        Self::Success { value }
    }

    /// Transforms a `Success` value. Every other state is returned unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.chain(|value| RemoteData::Success {
            value: function(value),
        })
    }

    /// Transforms a `Failure` error.
    #[inline]
    pub fn map_failure<M, F>(self, function: F) -> RemoteData<M, A>
    where
        F: FnOnce(E) -> M,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure { error } => RemoteData::Failure {
                error: function(error),
            },
            Self::Success { value } => RemoteData::Success { value },
        }
    }

    /// Sequences a request that depends on this one's value.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure { error } => RemoteData::Failure { error },
            Self::Success { value } => function(value),
        }
    }

    /// Alias for [`chain`](RemoteData::chain).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        self.chain(function)
    }

    /// Returns the `Success` value, or `default` for any other state.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        match self {
            Self::Success { value } => value,
            _ => default,
        }
    }

    /// Keeps the `Success` value as `Just`; every other state is `Nothing`.
    #[inline]
    pub fn to_maybe(self) -> Maybe<A> {
        match self {
            Self::Success { value } => Maybe::of(value),
            _ => Maybe::Nothing,
        }
    }

    /// Merges two states by priority, calling `on_success` only when both
    /// are `Success`.
    pub fn merge_with<B, C, F>(self, other: RemoteData<E, B>, on_success: F) -> RemoteData<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::NotAsked, _) | (_, RemoteData::NotAsked) => RemoteData::NotAsked,
            (Self::Loading, _) | (_, RemoteData::Loading) => RemoteData::Loading,
            (Self::Failure { error }, _) | (_, RemoteData::Failure { error }) => {
                RemoteData::Failure { error }
            }
            (Self::Success { value: first }, RemoteData::Success { value: second }) => {
                RemoteData::Success {
                    value: on_success(first, second),
                }
            }
        }
    }
}

impl<E, A: Semigroup> RemoteData<E, A> {
    /// Merges two states by priority; two successes combine their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::RemoteData;
    ///
    /// let first: RemoteData<&str, Vec<i32>> = RemoteData::failure("first");
    /// let second: RemoteData<&str, Vec<i32>> = RemoteData::failure("second");
    /// assert_eq!(first.concat(second), RemoteData::failure("first"));
    ///
    /// let both = RemoteData::<&str, _>::success(vec![1]).concat(RemoteData::success(vec![2]));
    /// assert_eq!(both, RemoteData::success(vec![1, 2]));
    /// ```
    #[inline]
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        self.merge_with(other, Semigroup::combine)
    }
}

impl<E, F> RemoteData<E, F> {
    /// Applies the held function to the value held by `value`.
    ///
    /// When either side is not `Success`, the states are resolved by priority.
    #[inline]
    pub fn ap<A, B>(self, value: RemoteData<E, A>) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.merge_with(value, |function, value| function(value))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<E, A: Semigroup> Semigroup for RemoteData<E, A> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<E, A> TypeConstructor for RemoteData<E, A> {
    type Inner = A;
    type WithType<B> = RemoteData<E, B>;
}

impl<E, A> Functor for RemoteData<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<E, A> Applicative for RemoteData<E, A> {
    #[inline]
    fn pure<B>(value: B) -> RemoteData<E, B> {
        RemoteData::Success { value }
    }

    #[inline]
    fn map2<B, C, F>(self, other: RemoteData<E, B>, function: F) -> RemoteData<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.merge_with(other, function)
    }

    #[inline]
    fn apply<B, Output>(self, other: RemoteData<E, B>) -> RemoteData<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<E, A> Monad for RemoteData<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> RemoteData<E, B>,
    {
        self.chain(function)
    }
}
