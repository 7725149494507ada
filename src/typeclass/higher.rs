//! Higher-kinded type emulation through generic associated types.
//!
//! Rust has no native higher-kinded types, so a trait cannot abstract over
//! `Maybe<_>` directly. [`TypeConstructor`] records, for a concrete type such
//! as `Maybe<i32>`, the type it is applied to (`Inner`) and how to re-apply it
//! to another type (`WithType<B>`). The [`Functor`](super::Functor) family is
//! built on top of it.

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Examples
///
/// ```rust
/// use adtkit::data::Maybe;
/// use adtkit::typeclass::TypeConstructor;
///
/// fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
/// assert_inner::<Maybe<i32>>();
///
/// type Renamed = <Maybe<i32> as TypeConstructor>::WithType<String>;
/// let renamed: Renamed = Maybe::just("text".to_string());
/// assert!(renamed.is_just());
/// ```
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
