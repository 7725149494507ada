//! Type class traits for the shared monad contract.
//!
//! - [`Functor`]: `fmap` over the success value
//! - [`Applicative`]: `pure`, `map2`, `apply`
//! - [`Monad`]: `flat_map` / `and_then`
//! - [`Semigroup`]: associative `combine` (the `concat` of this library)
//! - [`Monoid`]: `Semigroup` with `empty`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not support higher-kinded types, so [`TypeConstructor`] uses
//! generic associated types to describe "the same container holding a
//! different type".
//!
//! Every data type in [`data`](crate::data) also carries inherent `of`, `map`,
//! `chain`, `and_then` and `ap` methods with the same meaning; the traits let
//! generic code abstract over them.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::data::{Either, Maybe};
//! use adtkit::typeclass::Functor;
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|value| value * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::just(4)), Maybe::just(8));
//! assert_eq!(double_all(Either::<String, i32>::right(4)), Either::right(8));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
