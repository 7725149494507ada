//! The error value produced when a wrapped function panics.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A panic caught at an `attempt_unwind` / `IO::attempt` boundary.
///
/// This is the one place where the library absorbs an unwinding failure and
/// turns it into data.
///
/// # Examples
///
/// ```rust
/// use adtkit::data::{Either, Panic};
///
/// let divide = Either::attempt_unwind(|divisor: i32| 10 / divisor);
/// assert_eq!(divide(2), Either::right(5));
/// assert!(divide(0).is_left());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("panicked: {message}")]
pub struct Panic {
    message: String,
}

impl Panic {
    /// Creates a `Panic` carrying `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self { message }
    }
}

/// Runs `action`, converting a panic into a [`Panic`] value.
pub(crate) fn catch_panic<A, F>(action: F) -> Result<A, Panic>
where
    F: FnOnce() -> A,
{
    catch_unwind(AssertUnwindSafe(action)).map_err(|payload| {
        let panic = Panic::from_payload(&*payload);
        tracing::debug!(message = panic.message(), "caught panic");
        panic
    })
}
