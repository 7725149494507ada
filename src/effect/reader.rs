//! Reader - a computation that reads from an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment through every step without passing it by hand, which
//! makes it a small dependency-injection tool.
//!
//! Reader keeps its combinators as inherent methods rather than implementing
//! the [`typeclass`](crate::typeclass) traits: the wrapped `Rc<dyn Fn>` needs
//! `'static` bounds that those traits do not carry.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! fn address() -> Reader<Config, String> {
//!     Reader::asks(|config: Config| config.host)
//!         .map2(Reader::asks(|config: Config| config.port), |host, port| {
//!             format!("{host}:{port}")
//!         })
//! }
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address().run(config), "localhost:8080");
//! ```

use std::rc::Rc;

/// A computation that, given an environment `R`, produces an `A`.
///
/// Cloning is cheap: clones share the wrapped function.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`. A reader can be run any
    /// number of times.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A reader that ignores the environment and returns `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::effect::Reader;
    ///
    /// let reader: Reader<i32, &str> = Reader::of("constant");
    /// assert_eq!(reader.run(0), "constant");
    /// assert_eq!(reader.run(100), "constant");
    /// ```
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the result.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function((original_function)(environment)))
    }

    /// Runs the reader produced from this one's result against the same
    /// environment.
    pub fn chain<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let value = (original_function)(environment.clone());
            function(value).run(environment)
        })
    }

    /// Alias for [`chain`](Reader::chain).
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.chain(function)
    }

    /// Runs both readers against the same environment and combines the results.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Reader::new(move |environment: R| {
            let first = (self_function)(environment.clone());
            let second = (other_function)(environment);
            function(first, second)
        })
    }

    /// Applies the function this reader produces to the value `other`
    /// produces.
    #[must_use]
    pub fn ap<B, Output>(self, other: Reader<R, B>) -> Reader<R, Output>
    where
        A: Fn(B) -> Output,
        B: 'static,
        Output: 'static,
        R: Clone,
    {
        self.map2(other, |function, value| function(value))
    }

    /// A reader that projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` against an environment modified by `modifier`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::effect::Reader;
    ///
    /// let doubled: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    /// let shifted = Reader::local(|environment| environment + 10, doubled);
    /// assert_eq!(shifted.run(5), 30);
    /// ```
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| (computation_function)(modifier(environment)))
    }
}

impl<Env> Reader<Env, Env>
where
    Env: Clone + 'static,
{
    /// A reader that returns the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> std::fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Reader")
    }
}
