//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A [`Semigroup`] with an identity element.
///
/// # Examples
///
/// ```rust
/// use adtkit::typeclass::{Monoid, Semigroup};
///
/// assert_eq!(String::empty().combine(String::from("a")), "a");
/// assert_eq!(Vec::<i32>::combine_all(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for [`combine`](Semigroup::combine).
    fn empty() -> Self;

    /// Folds an iterator with `combine`, starting from [`empty`](Monoid::empty).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_is_left_and_right_identity() {
        let value = String::from("value");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        assert_eq!(Vec::<u8>::combine_all(Vec::new()), Vec::<u8>::new());
    }
}
