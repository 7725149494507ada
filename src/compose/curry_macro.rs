//! The `curry2!` and `curry3!` macros.
//!
//! The wrapped function is shared through an `Rc`, and each supplied
//! argument is cloned on every further call, so a partially applied function
//! can be called any number of times.

/// Curries a two-argument function: `curry2!(f)(a)(b) == f(a, b)`.
///
/// # Examples
///
/// ```rust
/// use adtkit::curry2;
///
/// let greet = curry2!(|greeting: &str, name: String| format!("{greeting}, {name}"));
/// let hello = greet("hello");
/// assert_eq!(hello("ada".to_string()), "hello, ada");
/// assert_eq!(hello("alan".to_string()), "hello, alan");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Curries a three-argument function: `curry3!(f)(a)(b)(c) == f(a, b, c)`.
///
/// # Examples
///
/// ```rust
/// use adtkit::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 { value.max(low).min(high) }
///
/// let percent = curry3!(clamp)(0)(100);
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn join(separator: &str, left: String, right: String) -> String {
        format!("{left}{separator}{right}")
    }

    #[rstest]
    fn curry2_matches_direct_call() {
        let subtract = curry2!(|a: i32, b: i32| a - b);
        assert_eq!(subtract(10)(3), 7);
    }

    #[rstest]
    fn curry3_partial_application_is_reusable() {
        let joined = curry3!(join)("-")("a".to_string());
        assert_eq!(joined("b".to_string()), "a-b");
        assert_eq!(joined("c".to_string()), "a-c");
    }
}
