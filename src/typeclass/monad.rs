//! Monad type class - sequencing computations that may short-circuit.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::applicative::Applicative;

/// A type class for sequencing computations where each step may depend on
/// the previous result.
///
/// # Examples
///
/// ```rust
/// use adtkit::data::Maybe;
/// use adtkit::typeclass::Monad;
///
/// fn half(value: i32) -> Maybe<i32> {
///     if value % 2 == 0 { Maybe::just(value / 2) } else { Maybe::nothing() }
/// }
///
/// assert_eq!(Maybe::just(8).flat_map(half).flat_map(half), Maybe::just(2));
/// assert_eq!(Maybe::just(6).flat_map(half).flat_map(half), Maybe::nothing());
/// ```
pub trait Monad: Applicative {
    /// Applies `function` to the success value; the function returns a new
    /// instance, which is returned without rewrapping.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the success value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
