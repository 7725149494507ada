//! The `compose!` macro.

/// Composes functions right to left: `compose!(f, g, h)(x) == f(g(h(x)))`.
///
/// A single argument is returned as is. The result is a `move` closure, so
/// it is `Fn` when every composed function is.
///
/// # Examples
///
/// ```rust
/// use adtkit::compose;
///
/// fn length(text: String) -> usize { text.len() }
/// fn render(value: i32) -> String { value.to_string() }
///
/// let digits = compose!(length, render);
/// assert_eq!(digits(12345), 5);
/// assert_eq!(compose!(|n: usize| n * 2, length, render)(-7), 4);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}
