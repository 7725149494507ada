//! IO - a deferred side effect.
//!
//! An `IO<A>` describes a computation that may perform side effects. Nothing
//! happens until [`run`](IO::run) is called, so building and composing IO
//! values stays pure.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let executed = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&executed);
//!
//! let io = IO::new(move || {
//!     flag.set(true);
//!     10
//! })
//! .map(|n| n * 2)
//! .chain(|n| IO::of(n + 1));
//!
//! assert!(!executed.get());
//! assert_eq!(io.run(), 21);
//! assert!(executed.get());
//! ```

use crate::data::{Either, Panic, catch_panic};

/// A side effect producing an `A`, run at most once.
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> IO<A> {
    /// Wraps `action` without running it.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// An effect that does nothing and returns `value`.
    pub fn of(value: A) -> Self {
        Self::new(move || value)
    }

    /// Performs the effect.
    pub fn run(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result once the effect has run.
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()))
    }

    /// Runs this effect, then the one `function` builds from its result.
    pub fn chain<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        IO::new(move || function(self.run()).run())
    }

    /// Alias for [`chain`](IO::chain).
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.chain(function)
    }

    /// Runs both effects in order and combines their results.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.chain(move |first| other.map(move |second| function(first, second)))
    }

    /// Runs this effect for a function, then `other` for its argument.
    pub fn ap<B, Output>(self, other: IO<B>) -> IO<Output>
    where
        A: FnOnce(B) -> Output,
        B: 'static,
        Output: 'static,
    {
        self.map2(other, |function, value| function(value))
    }

    /// An effect that turns a panic during `run` into `Left(Panic)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::data::{Either, Panic};
    /// use adtkit::effect::IO;
    ///
    /// let failing = IO::new(|| -> i32 { panic!("disk on fire") });
    /// assert_eq!(failing.attempt().run(), Either::left(Panic::new("disk on fire")));
    /// assert_eq!(IO::of(1).attempt().run(), Either::<Panic, i32>::right(1));
    /// ```
    pub fn attempt(self) -> IO<Either<Panic, A>> {
        IO::new(move || catch_panic(move || self.run()).into())
    }
}

impl<A> std::fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "IO")
    }
}
