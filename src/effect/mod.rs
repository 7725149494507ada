//! Effects: computations that are described first and run later.
//!
//! - [`Reader`]: a computation that reads from an environment
//! - [`Writer`]: a value paired with accumulated output
//! - [`IO`]: a deferred side effect, run at most once
//! - [`Task`]: a deferred, callback-driven computation that may fail, with
//!   [`Task::parallel`] for fan-out
//!
//! All four expose the same `of` / `map` / `chain` / `and_then` / `ap`
//! surface as the [`data`](crate::data) types. They keep these as inherent
//! methods because their wrapped closures need `'static` (and, for `Task`,
//! `Send + Sync`) bounds that the [`typeclass`](crate::typeclass) traits do
//! not carry.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::effect::{IO, Reader};
//!
//! let greeting: Reader<String, String> = Reader::asks(|name: String| format!("hello, {name}"));
//! let io = IO::of("world".to_string()).map(move |name| greeting.run(name));
//! assert_eq!(io.run(), "hello, world");
//! ```

mod io;
mod reader;
mod task;
mod writer;

pub use io::IO;
pub use reader::Reader;
pub use task::{Continuation, Task};
pub use writer::Writer;
