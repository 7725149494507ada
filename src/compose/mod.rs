//! Function composition helpers.
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application, `pipe!(x, f, g) == g(f(x))`
//! - [`curry2!`] and [`curry3!`]: curried forms of two- and three-argument functions
//! - [`identity`], [`constant`] and [`flip`]
//!
//! Currying is fixed-arity: pick the macro matching the function's arity and
//! the compiler checks the rest.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::{compose, curry2, pipe};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//! fn double(value: i32) -> i32 { value * 2 }
//!
//! let add_five = curry2!(add)(5);
//! assert_eq!(compose!(double, &add_five)(1), 12);
//! assert_eq!(pipe!(1, &add_five, double), 12);
//! ```

mod combinators;
mod compose_macro;
mod curry_macro;
mod pipe_macro;

pub use combinators::{constant, flip, identity};

pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::pipe;
