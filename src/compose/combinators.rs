//! Small combinators for building functions out of functions.

/// Returns its argument unchanged.
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its argument and yields `value`.
///
/// # Examples
///
/// ```rust
/// use adtkit::compose::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Returns `function` with its two arguments swapped.
///
/// # Examples
///
/// ```rust
/// use adtkit::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
