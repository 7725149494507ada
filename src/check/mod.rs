//! Contracts over JSON values that collect every failure.
//!
//! A [`Contract`] checks a [`serde_json::Value`] and returns a
//! [`Validation`]: `Success` with the value, or `Failure` with a
//! [`CheckError`] for each problem. Failures from sibling fields and elements
//! are accumulated, never short-circuited.
//!
//! Shapes and tuples are exact: [`shape_of`] rejects missing and undeclared
//! keys alike, and [`tuple_of`] rejects arrays of any other length.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::check::{self, CheckError};
//! use serde_json::json;
//!
//! let user = check::shape_of([
//!     ("id", check::number()),
//!     ("name", check::string()),
//!     ("tags", check::array_of(check::string())),
//! ]);
//!
//! assert!(user.check(&json!({"id": 1, "name": "ada", "tags": ["admin"]})).is_success());
//!
//! let errors = user
//!     .check(&json!({"id": "1", "tags": ["admin", 7], "role": "x"}))
//!     .to_result()
//!     .unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![
//!         CheckError::TypeMismatch { path: "$.id".to_string(), expected: "number", found: "string" },
//!         CheckError::MissingKey { path: "$".to_string(), key: "name".to_string() },
//!         CheckError::TypeMismatch { path: "$.tags[1]".to_string(), expected: "string", found: "number" },
//!         CheckError::UnexpectedKey { path: "$".to_string(), key: "role".to_string() },
//!     ],
//! );
//! ```

mod contract;
mod error;

pub use contract::{Checked, Contract};
pub use error::CheckError;

use contract::{element_path, field_path, type_mismatch};
use serde_json::Value;

use crate::data::Validation;

fn primitive(name: &'static str, accepts: fn(&Value) -> bool) -> Contract {
    Contract::new(name, move |value, path| {
        if accepts(value) {
            Validation::success(value.clone())
        } else {
            type_mismatch(value, path, name)
        }
    })
}

/// Accepts every value.
#[must_use]
pub fn any() -> Contract {
    Contract::new("any", |value, _| Validation::success(value.clone()))
}

/// Accepts `null`.
#[must_use]
pub fn null() -> Contract {
    primitive("null", Value::is_null)
}

/// Accepts `true` and `false`.
#[must_use]
pub fn boolean() -> Contract {
    primitive("boolean", Value::is_boolean)
}

/// Accepts any number.
#[must_use]
pub fn number() -> Contract {
    primitive("number", Value::is_number)
}

/// Accepts any string.
#[must_use]
pub fn string() -> Contract {
    primitive("string", Value::is_string)
}

/// Accepts any array, whatever its elements.
#[must_use]
pub fn array() -> Contract {
    primitive("array", Value::is_array)
}

/// Accepts any object, whatever its keys.
#[must_use]
pub fn object() -> Contract {
    primitive("object", Value::is_object)
}

/// Accepts `null` or whatever `contract` accepts.
#[must_use]
pub fn nullable(contract: Contract) -> Contract {
    Contract::new(format!("nullable({contract})"), move |value, path| {
        if value.is_null() {
            Validation::success(Value::Null)
        } else {
            contract.check_at(value, path)
        }
    })
}

/// Accepts an array whose every element satisfies `contract`.
///
/// Failures from all elements are reported, in index order.
#[must_use]
pub fn array_of(contract: Contract) -> Contract {
    Contract::new(format!("array_of({contract})"), move |value, path| {
        let Value::Array(elements) = value else {
            return type_mismatch(value, path, "array");
        };
        let checked = elements
            .iter()
            .enumerate()
            .map(|(index, element)| contract.check_at(element, &element_path(path, index)));
        Validation::sequence(checked).map(Value::Array)
    })
}

/// Accepts an array with exactly one element per contract, each satisfying
/// the contract at its position.
#[must_use]
pub fn tuple_of(contracts: Vec<Contract>) -> Contract {
    let name = format!("tuple_of({})", join_names(&contracts));
    Contract::new(name, move |value, path| {
        let Value::Array(elements) = value else {
            return type_mismatch(value, path, "array");
        };
        if elements.len() != contracts.len() {
            return Validation::failure(vec![CheckError::LengthMismatch {
                path: path.to_string(),
                expected: contracts.len(),
                found: elements.len(),
            }]);
        }
        let checked = contracts
            .iter()
            .zip(elements)
            .enumerate()
            .map(|(index, (contract, element))| {
                contract.check_at(element, &element_path(path, index))
            });
        Validation::sequence(checked).map(Value::Array)
    })
}

/// Accepts an object with exactly the given keys, each satisfying its
/// contract.
///
/// Failures are reported in declaration order, followed by one
/// [`CheckError::UnexpectedKey`] per undeclared key.
#[must_use]
pub fn shape_of<I, K>(fields: I) -> Contract
where
    I: IntoIterator<Item = (K, Contract)>,
    K: Into<String>,
{
    let fields: Vec<(String, Contract)> = fields
        .into_iter()
        .map(|(key, contract)| (key.into(), contract))
        .collect();
    let name = format!(
        "shape_of({})",
        fields
            .iter()
            .map(|(key, contract)| format!("{key}: {contract}"))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Contract::new(name, move |value, path| {
        let Value::Object(entries) = value else {
            return type_mismatch(value, path, "object");
        };
        let declared = fields.iter().map(|(key, contract)| match entries.get(key) {
            Some(field) => contract.check_at(field, &field_path(path, key)),
            None => Validation::failure(vec![CheckError::MissingKey {
                path: path.to_string(),
                key: key.clone(),
            }]),
        });
        let undeclared = entries
            .keys()
            .filter(|key| !fields.iter().any(|(name, _)| name == *key))
            .map(|key| {
                Validation::failure(vec![CheckError::UnexpectedKey {
                    path: path.to_string(),
                    key: key.clone(),
                }])
            });
        Validation::sequence(declared.chain(undeclared)).map(|_| value.clone())
    })
}

/// Accepts whatever the first matching alternative accepts.
#[must_use]
pub fn one_of(contracts: Vec<Contract>) -> Contract {
    let name = format!("one_of({})", join_names(&contracts));
    Contract::new(name, move |value, path| {
        contracts
            .iter()
            .map(|contract| contract.check_at(value, path))
            .find(Validation::is_success)
            .unwrap_or_else(|| {
                Validation::failure(vec![CheckError::NoAlternative {
                    path: path.to_string(),
                    alternatives: contracts.len(),
                }])
            })
    })
}

fn join_names(contracts: &[Contract]) -> String {
    contracts
        .iter()
        .map(Contract::name)
        .collect::<Vec<_>>()
        .join(", ")
}
