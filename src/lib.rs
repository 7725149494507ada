//! # adtkit
//!
//! Tagged unions with exhaustive catamorphisms, and the functional data types
//! built on them.
//!
//! ## Overview
//!
//! - **ADT engine**: [`tag!`] and [`union!`] declare tagged products and sums
//!   with constructors, predicates, `cata` and a `Tag(field, ...)` rendering
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//! - **Data Types**: Maybe, Either, Result, Validation, RemoteData, Tuple
//! - **Effects**: Reader, Writer, IO, and the deferred callback-style Task
//! - **Checks**: contracts over JSON values that accumulate every failure
//! - **Function Composition**: compose!, pipe!, curry2!, curry3!
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `compose`: Function composition utilities
//! - `data`: Maybe, Either, Result, Validation, RemoteData, Tuple
//! - `effect`: Reader, Writer, IO, Task
//! - `async`: `Task::into_future`
//! - `check`: JSON contracts
//! - `serde`: Serialize/Deserialize for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use adtkit::prelude::*;
//!
//! fn parse_port(text: &str) -> Maybe<u16> {
//!     text.parse::<u16>().ok().into()
//! }
//!
//! let port = Maybe::just("8080")
//!     .chain(parse_port)
//!     .map(|port| port + 1);
//! assert_eq!(port, Maybe::just(8081));
//! assert_eq!(port.to_string(), "Just(8081)");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// `Result` is left out so that glob-importing the prelude does not shadow
/// `std::result::Result`; import it as `adtkit::data::Result`.
///
/// # Usage
///
/// ```rust
/// use adtkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adt::Tagged;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "data")]
    pub use crate::data::{Either, Maybe, Panic, RemoteData, Tuple, Validation};

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "check")]
    pub use crate::check::{CheckError, Contract};
}

pub mod adt;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "check")]
pub mod check;

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
