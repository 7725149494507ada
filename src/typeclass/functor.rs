//! Functor type class - mapping over the success value of a container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::data::Maybe;
//! use adtkit::typeclass::Functor;
//!
//! let length = Maybe::just("four").fmap(str::len);
//! assert_eq!(length, Maybe::just(4));
//!
//! let nothing: Maybe<&str> = Maybe::Nothing;
//! assert_eq!(nothing.fmap(str::len), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;

/// A type class for types whose success value can be transformed while the
/// surrounding shape (the variant) is preserved.
///
/// Failure and empty variants are returned unchanged and the function is
/// never called for them.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the success value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the success value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::Either;
    /// use adtkit::typeclass::Functor;
    ///
    /// let right: Either<String, i32> = Either::right(1);
    /// assert_eq!(right.replace("done"), Either::right("done"));
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the success value, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
