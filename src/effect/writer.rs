//! Writer - a value paired with accumulated output.
//!
//! A `Writer<W, A>` holds a result `A` and an output `W`. Sequencing two
//! writers combines their outputs with
//! [`Semigroup::combine`](crate::typeclass::Semigroup::combine), first then
//! second, so `W` is usually a log such as `Vec<String>`.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::effect::Writer;
//!
//! fn log(message: &str) -> Writer<Vec<String>, ()> {
//!     Writer::tell(vec![message.to_string()])
//! }
//!
//! let computation = log("step 1")
//!     .chain(|()| log("step 2"))
//!     .chain(|()| Writer::of(42));
//!
//! let (result, logs) = computation.run();
//! assert_eq!(result, 42);
//! assert_eq!(logs, vec!["step 1", "step 2"]);
//! ```

use crate::typeclass::Monoid;

crate::tag! {
    /// A result together with the output produced while computing it.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Writer<W, A> {
        value: A,
        output: W,
    }
}

impl<W: Monoid, A> Writer<W, A> {
    /// A writer with `value` and empty output.
    pub fn of(value: A) -> Self {
        Self::new(value, W::empty())
    }

    /// Transforms the result, keeping the output.
    pub fn map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        self.cata(|value, output| Writer::new(function(value), output))
    }

    /// Feeds the result to `function` and appends its output to this one's.
    pub fn chain<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.cata(|value, output| {
            function(value).cata(|next_value, next_output| {
                Writer::new(next_value, output.combine(next_output))
            })
        })
    }

    /// Alias for [`chain`](Writer::chain).
    pub fn and_then<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.chain(function)
    }

    /// Combines two writers' results with `function` and their outputs in order.
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.chain(|first| other.map(|second| function(first, second)))
    }

    /// Applies the held function to `other`'s result.
    pub fn ap<B, Output>(self, other: Writer<W, B>) -> Writer<W, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }

    /// Exposes the output alongside the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::effect::Writer;
    ///
    /// let listened = Writer::new(1, "a".to_string()).listen();
    /// assert_eq!(listened.run(), ((1, "a".to_string()), "a".to_string()));
    /// ```
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        self.cata(|value, output| Writer::new((value, output.clone()), output))
    }

    /// Rewrites the output with `modifier`.
    #[must_use]
    pub fn censor<F>(self, modifier: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        self.cata(|value, output| Self::new(value, modifier(output)))
    }

    /// Unpacks into `(result, output)`.
    pub fn run(self) -> (A, W) {
        self.cata(|value, output| (value, output))
    }
}

impl<W: Monoid> Writer<W, ()> {
    /// A writer that only produces `output`.
    pub fn tell(output: W) -> Self {
        Self::new((), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Logged<A> = Writer<Vec<String>, A>;

    fn entry(text: &str) -> Vec<String> {
        vec![text.to_string()]
    }

    #[rstest]
    fn of_has_empty_output() {
        let (value, output) = Logged::of(42).run();
        assert_eq!(value, 42);
        assert!(output.is_empty());
    }

    #[rstest]
    fn chain_appends_outputs_in_order() {
        let chained = Logged::new(10, entry("first"))
            .chain(|value| Writer::new(value * 2, entry("second")));
        assert_eq!(chained.run(), (20, vec!["first".to_string(), "second".to_string()]));
    }

    #[rstest]
    fn map_keeps_output() {
        let mapped = Logged::new(21, entry("log")).map(|value| value * 2);
        assert_eq!(mapped, Writer::new(42, entry("log")));
    }

    #[rstest]
    fn ap_combines_outputs() {
        let increment: fn(i32) -> i32 = |n| n + 1;
        let function: Logged<fn(i32) -> i32> = Writer::new(increment, entry("function"));
        let applied = function.ap(Writer::new(1, entry("value")));
        assert_eq!(applied.run(), (2, vec!["function".to_string(), "value".to_string()]));
    }

    #[rstest]
    fn censor_rewrites_output() {
        let censored = Logged::new(42, entry("hello"))
            .censor(|output| output.into_iter().map(|line| line.to_uppercase()).collect());
        assert_eq!(censored.run(), (42, entry("HELLO")));
    }

    #[rstest]
    fn writer_renders_fields() {
        assert_eq!(Writer::new(1, "log".to_string()).to_string(), "Writer(1, log)");
    }
}
