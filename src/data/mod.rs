//! Data types built on the ADT engine.
//!
//! Every type here is declared with [`union!`](crate::union) or
//! [`tag!`](crate::tag), so each one renders as `Tag(field, ...)`, exposes
//! `cata` and implements [`Tagged`](crate::adt::Tagged).
//!
//! | Type | Variants | Failure handling |
//! |---|---|---|
//! | [`Maybe`] | `Just`, `Nothing` | `Nothing` swallows everything |
//! | [`Either`] | `Left`, `Right` | first `Left` wins |
//! | [`Result`] | `Ok`, `Err` | first `Err` wins |
//! | [`Validation`] | `Success`, `Failure` | failures accumulate |
//! | [`RemoteData`] | `NotAsked`, `Loading`, `Failure`, `Success` | merged by priority |
//! | [`Tuple`] | one product | none |

mod either;
mod maybe;
mod panic;
mod remote_data;
mod result;
mod tuple;
mod validation;

pub use either::Either;
pub use maybe::Maybe;
pub use panic::Panic;
pub(crate) use panic::catch_panic;
pub use remote_data::RemoteData;
pub use result::Result;
pub use tuple::Tuple;
pub use validation::Validation;
