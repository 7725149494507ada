//! Failures reported by contracts.

/// Why a value failed a [`Contract`](super::Contract).
///
/// Every variant carries the JSON path of the offending value, such as
/// `$.user.id` or `$.tags[2]`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// The value has the wrong JSON type.
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Where the value sits.
        path: String,
        /// The JSON type the contract wants.
        expected: &'static str,
        /// The JSON type that was found.
        found: &'static str,
    },
    /// A key required by a shape is absent.
    #[error("{path}: missing key `{key}`")]
    MissingKey {
        /// The object's path.
        path: String,
        /// The absent key.
        key: String,
    },
    /// An object carries a key its shape does not declare.
    #[error("{path}: unexpected key `{key}`")]
    UnexpectedKey {
        /// The object's path.
        path: String,
        /// The undeclared key.
        key: String,
    },
    /// A tuple has the wrong number of elements.
    #[error("{path}: expected {expected} elements, found {found}")]
    LengthMismatch {
        /// The array's path.
        path: String,
        /// The number of element contracts.
        expected: usize,
        /// The number of elements found.
        found: usize,
    },
    /// None of the alternatives of `one_of` accepted the value.
    #[error("{path}: none of {alternatives} alternatives matched")]
    NoAlternative {
        /// Where the value sits.
        path: String,
        /// How many alternatives were tried.
        alternatives: usize,
    },
}

impl CheckError {
    /// The path of the value this failure is about.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::MissingKey { path, .. }
            | Self::UnexpectedKey { path, .. }
            | Self::LengthMismatch { path, .. }
            | Self::NoAlternative { path, .. } => path,
        }
    }
}
