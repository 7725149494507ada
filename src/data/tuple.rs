//! Tuple - a tagged pair.

use crate::typeclass::{Functor, Monoid, Semigroup, TypeConstructor};

crate::tag! {
    /// A pair of values. `map` acts on the second component.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Tuple;
    ///
    /// let entry = Tuple::new("answer", 41).map(|n| n + 1);
    /// assert_eq!(*entry.second(), 42);
    /// assert_eq!(entry.to_string(), "Tuple(answer, 42)");
    /// assert_eq!(entry.swap().into_pair(), (42, "answer"));
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Tuple<A, B> {
        first: A,
        second: B,
    }
}

impl<A, B> Tuple<A, B> {
    /// Transforms the second component.
    #[inline]
    pub fn map<C, F>(self, function: F) -> Tuple<A, C>
    where
        F: FnOnce(B) -> C,
    {
        self.cata(|first, second| Tuple::new(first, function(second)))
    }

    /// Transforms the first component.
    #[inline]
    pub fn map_first<C, F>(self, function: F) -> Tuple<C, B>
    where
        F: FnOnce(A) -> C,
    {
        self.cata(|first, second| Tuple::new(function(first), second))
    }

    /// Transforms both components.
    #[inline]
    pub fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Tuple<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        self.cata(|first, second| Tuple::new(first_function(first), second_function(second)))
    }

    /// Exchanges the components.
    #[inline]
    pub fn swap(self) -> Tuple<B, A> {
        self.cata(|first, second| Tuple::new(second, first))
    }

    /// Unpacks into a plain pair.
    #[inline]
    pub fn into_pair(self) -> (A, B) {
        self.cata(|first, second| (first, second))
    }
}

impl<A: Monoid, B> Tuple<A, B> {
    /// Pairs `value` with an empty first component.
    #[inline]
    pub fn of(value: B) -> Self {
        Self::new(A::empty(), value)
    }
}

impl<A: Semigroup, B: Semigroup> Tuple<A, B> {
    /// Combines pointwise.
    #[inline]
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        let (other_first, other_second) = other.into_pair();
        self.cata(|first, second| {
            Self::new(first.combine(other_first), second.combine(other_second))
        })
    }
}

impl<A, B> From<Tuple<A, B>> for (A, B) {
    fn from(tuple: Tuple<A, B>) -> Self {
        tuple.into_pair()
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for Tuple<A, B> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<A: Monoid, B: Monoid> Monoid for Tuple<A, B> {
    fn empty() -> Self {
        Self::new(A::empty(), B::empty())
    }
}

impl<A, B> TypeConstructor for Tuple<A, B> {
    type Inner = B;
    type WithType<C> = Tuple<A, C>;
}

impl<A, B> Functor for Tuple<A, B> {
    #[inline]
    fn fmap<C, F>(self, function: F) -> Tuple<A, C>
    where
        F: FnOnce(B) -> C,
    {
        self.map(function)
    }
}
