//! The ADT engine: tagged products and tagged unions.
//!
//! Every data type in this crate is declared through one of two macros:
//!
//! - [`tag!`](crate::tag): a tagged product type (a struct whose fields are
//!   assigned positionally and never reassigned)
//! - [`union!`](crate::union): a tagged sum type (an enum whose variants are
//!   nullary or carry named fields)
//!
//! Both generate constructors, an exhaustive `cata` (catamorphism), a
//! `Tag(field, ...)` rendering and an implementation of [`Tagged`].
//!
//! # Case dispatch
//!
//! `cata` takes one handler per variant, positionally. The compiler checks
//! that every variant is handled, so a missing case can never reach run time:
//!
//! ```rust
//! use adtkit::data::Maybe;
//!
//! let greeting = Maybe::just("world").cata(
//!     |name| format!("hello, {name}"),
//!     || "nobody here".to_string(),
//! );
//! assert_eq!(greeting, "hello, world");
//! ```
//!
//! ```compile_fail
//! use adtkit::data::Maybe;
//!
//! // The `Nothing` handler is missing.
//! let greeting = Maybe::just("world").cata(|name| format!("hello, {name}"));
//! ```

mod tag_macro;
mod tagged;
mod union_macro;

pub use tagged::{Tagged, write_tagged};

pub use crate::tag;
pub use crate::union;
