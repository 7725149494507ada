//! The `pipe!` macro.

/// Threads a value through functions left to right:
/// `pipe!(x, f, g) == g(f(x))`.
///
/// Each function is called once, so `FnOnce` closures are accepted.
/// `pipe!(x, f, g)` equals `compose!(g, f)(x)`.
///
/// # Examples
///
/// ```rust
/// use adtkit::data::Maybe;
/// use adtkit::pipe;
///
/// let parsed = pipe!("42", str::parse::<i32>, Result::ok, Maybe::from_option);
/// assert_eq!(parsed, Maybe::just(42));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $function:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($function($value) $(, $rest)*)
    };
}
