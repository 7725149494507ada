//! Contracts: reusable checks over JSON values.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::error::CheckError;
use crate::data::Validation;

/// The outcome of a check: the checked value, or every failure found in it.
pub type Checked = Validation<Vec<CheckError>, Value>;

type CheckFunction = dyn Fn(&Value, &str) -> Checked;

/// A check over a [`serde_json::Value`].
///
/// Contracts compose: [`array_of`](super::array_of), [`shape_of`](super::shape_of)
/// and friends build bigger contracts out of smaller ones. Cloning a contract
/// is cheap.
///
/// # Examples
///
/// ```rust
/// use adtkit::check::{self, CheckError};
/// use serde_json::json;
///
/// let point = check::tuple_of(vec![check::number(), check::number()]);
/// assert!(point.check(&json!([1, 2])).is_success());
/// assert_eq!(
///     point.check(&json!([1, 2, 3])).to_result(),
///     Err(vec![CheckError::LengthMismatch { path: "$".to_string(), expected: 2, found: 3 }]),
/// );
/// ```
#[derive(Clone)]
pub struct Contract {
    name: Rc<str>,
    check_function: Rc<CheckFunction>,
}

impl Contract {
    /// Creates a contract from a function of the value and its path.
    ///
    /// The function returns `Success` with the value it was given, or
    /// `Failure` with every problem it found.
    pub fn new<F>(name: impl Into<Rc<str>>, check_function: F) -> Self
    where
        F: Fn(&Value, &str) -> Checked + 'static,
    {
        Self {
            name: name.into(),
            check_function: Rc::new(check_function),
        }
    }

    /// A short description, such as `array_of(number)`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks `value`, reporting paths relative to the root `$`.
    #[must_use]
    pub fn check(&self, value: &Value) -> Checked {
        let checked = self.check_at(value, "$");
        if let Validation::Failure { errors } = &checked {
            tracing::debug!(contract = %self.name, failures = errors.len(), "contract check failed");
        }
        checked
    }

    /// Checks `value` as if it sat at `path`.
    #[must_use]
    pub fn check_at(&self, value: &Value, path: &str) -> Checked {
        (self.check_function)(value, path)
    }
}

impl fmt::Debug for Contract {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Contract").field(&self.name).finish()
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

/// The JSON type name of `value`.
pub(super) const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(super) fn type_mismatch(value: &Value, path: &str, expected: &'static str) -> Checked {
    Validation::failure(vec![CheckError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: kind_of(value),
    }])
}

pub(super) fn element_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

pub(super) fn field_path(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}
