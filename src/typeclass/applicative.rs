//! Applicative type class - combining independent computations.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! How failures combine when both operands fail is type specific: `Either`
//! and `Result` keep the left failure, `Validation` accumulates both.

use super::functor::Functor;

/// A type class for lifting values and combining independent computations.
///
/// # Examples
///
/// ```rust
/// use adtkit::data::Maybe;
/// use adtkit::typeclass::Applicative;
///
/// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(lifted, Maybe::just(42));
///
/// let sum = Maybe::just(1).map2(Maybe::just(2), |a, b| a + b);
/// assert_eq!(sum, Maybe::just(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts a plain value into the success variant.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values with a binary function when both succeed.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs two values when both succeed.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the held function to the value held by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Maybe;
    /// use adtkit::typeclass::Applicative;
    ///
    /// let increment: Maybe<fn(i32) -> i32> = Maybe::just(|x| x + 1);
    /// assert_eq!(increment.apply(Maybe::just(5)), Maybe::just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}
