//! Maybe - an optional value.
//!
//! `Maybe<T>` is either `Just { value }` or the nullary `Nothing`. `Nothing`
//! swallows `map` and `chain`: the function is never called and `Nothing` is
//! returned as is. There is no `concat` for `Maybe`.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::data::Maybe;
//!
//! let found = Maybe::just(20).map(|n| n + 1).chain(|n| {
//!     if n > 0 { Maybe::just(n * 2) } else { Maybe::nothing() }
//! });
//! assert_eq!(found, Maybe::just(42));
//!
//! let missing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(missing.map(|n| n + 1), Maybe::Nothing);
//! assert_eq!(missing.get_or_else(0), 0);
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

crate::union! {
    /// An optional value: `Just(value)` or `Nothing`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Maybe<T> {
        /// A present value.
        Just {
            /// The held value.
            value: T
        },
        /// No value.
        Nothing,
    }
}

impl<T> Maybe<T> {
    /// Lifts a value into `Just`.
    #[inline]
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self::Just { value }
    }

    /// Transforms the held value. `Nothing` is returned unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just { value } => Maybe::Just {
                value: function(value),
            },
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Sequences a computation that may itself produce `Nothing`.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just { value } => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Alias for [`chain`](Maybe::chain).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.chain(function)
    }

    /// Returns the held value, or `default` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Maybe;
    ///
    /// assert_eq!(Maybe::just(1).get_or_else(0), 1);
    /// assert_eq!(Maybe::<i32>::nothing().get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        self.cata(|value| value, || default)
    }

    /// Returns `self` when it is `Just`, otherwise the result of `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just { .. } => self,
            Self::Nothing => alternative(),
        }
    }

    /// Keeps the held value only when `predicate` accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Maybe;
    ///
    /// assert_eq!(Maybe::just(4).filter(|n| n % 2 == 0), Maybe::just(4));
    /// assert_eq!(Maybe::just(3).filter(|n| n % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just { value } if predicate(&value) => Self::Just { value },
            _ => Self::Nothing,
        }
    }

    /// Borrows the held value.
    #[inline]
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just { value } => Maybe::Just { value },
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts an `Option`, mapping `None` to `Nothing`.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::of)
    }

    /// Converts into an `Option`.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        self.cata(Some, || None)
    }
}

impl<F> Maybe<F> {
    /// Applies the held function to the value held by `value`.
    ///
    /// If either side is `Nothing`, the result is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Maybe;
    ///
    /// let add_one = Maybe::just(|n: i32| n + 1);
    /// assert_eq!(add_one.ap(Maybe::just(1)), Maybe::just(2));
    /// assert_eq!(add_one.ap(Maybe::<i32>::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn ap<A, B>(self, value: Maybe<A>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Self::Just { value: function }, Maybe::Just { value }) => Maybe::Just {
                value: function(value),
            },
            _ => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.to_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::of(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Just { value: first }, Maybe::Just { value: second }) => Maybe::Just {
                value: function(first, second),
            },
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.chain(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adt::Tagged;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn just_and_nothing_render() {
        assert_eq!(Maybe::just(3).to_string(), "Just(3)");
        assert_eq!(Maybe::<i32>::Nothing.to_string(), "Nothing");
    }

    #[rstest]
    fn maybe_union_metadata() {
        assert_eq!(<Maybe<u8> as Tagged>::UNION, "Maybe");
        assert_eq!(Maybe::just(1).tag(), "Just");
        assert_eq!(Maybe::<u8>::Nothing.tag(), "Nothing");
    }

    #[rstest]
    fn nothing_never_invokes_chain_function() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::Nothing.chain(|n| {
            calls.set(calls.get() + 1);
            Maybe::just(n)
        });
        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Some(1), Maybe::just(1))]
    #[case(None, Maybe::Nothing)]
    fn option_conversion(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(Maybe::from(option), expected);
        let back: Option<i32> = expected.into();
        assert_eq!(back, option);
    }

    #[rstest]
    fn or_else_only_runs_for_nothing() {
        assert_eq!(Maybe::just(1).or_else(|| Maybe::just(2)), Maybe::just(1));
        assert_eq!(Maybe::Nothing.or_else(|| Maybe::just(2)), Maybe::just(2));
    }

    #[rstest]
    fn map2_requires_both_values() {
        assert_eq!(Maybe::just(1).map2(Maybe::just(2), |a, b| a + b), Maybe::just(3));
        assert_eq!(
            Maybe::just(1).map2(Maybe::<i32>::Nothing, |a, b| a + b),
            Maybe::Nothing
        );
    }

    #[rstest]
    fn default_is_nothing() {
        assert_eq!(Maybe::<String>::default(), Maybe::Nothing);
    }
}
