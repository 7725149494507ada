//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::typeclass::Semigroup;
//!
//! assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

/// A type class for types with an associative binary operation.
///
/// `combine` keeps operand order: `a.combine(b)` puts `a`'s contribution
/// first. `Validation` relies on this to report failures in the order they
/// were produced.
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces an iterator with [`combine`](Semigroup::combine).
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
    }

    #[rstest]
    fn vec_combine_keeps_operand_order() {
        assert_eq!(vec!["a"].combine(vec!["b"]), vec!["a", "b"]);
        assert_eq!(vec!["b"].combine(vec!["a"]), vec!["b", "a"]);
    }

    #[rstest]
    fn pair_combines_pointwise() {
        let left = (String::from("x"), vec![1]);
        let right = (String::from("y"), vec![2]);
        assert_eq!(left.combine(right), (String::from("xy"), vec![1, 2]));
    }

    #[rstest]
    fn vec_combine_is_associative() {
        let a = vec![1];
        let b = vec![2];
        let c = vec![3];
        assert_eq!(
            a.clone().combine(b.clone()).combine(c.clone()),
            a.combine(b.combine(c))
        );
    }
}
