use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a document was rejected. Exactly one is reported per run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum InvalidReason {
    /// Not parseable as JSON, or parsed to `null`.
    #[error("Syntax error in JSON.")]
    #[serde(rename = "invalid-parse")]
    Parse,
    /// A field is present with the wrong JSON type.
    #[error("Property \"{field}\" is expected to be of type \"{expected}\".")]
    #[serde(rename = "invalid-type")]
    Type {
        /// Dotted field path.
        field: String,
        /// Expected type, possibly a union such as `string|object`.
        expected: String,
    },
    /// An object holds a key outside its permitted set.
    #[error("Unexpected property \"{field}\".")]
    #[serde(rename = "invalid-unknown")]
    Unknown {
        /// Offending key.
        field: String,
    },
    /// A required field is absent.
    #[error("Required property \"{field}\" not found.")]
    #[serde(rename = "invalid-missing")]
    Missing {
        /// Dotted field path.
        field: String,
        /// Expected type of the missing field.
        expected: String,
    },
}

impl InvalidReason {
    pub(crate) fn wrong_type(field: impl Into<String>, expected: &str) -> Self {
        InvalidReason::Type {
            field: field.into(),
            expected: expected.to_string(),
        }
    }

    pub(crate) fn unknown(field: impl Into<String>) -> Self {
        InvalidReason::Unknown {
            field: field.into(),
        }
    }

    pub(crate) fn missing(field: impl Into<String>, expected: &str) -> Self {
        InvalidReason::Missing {
            field: field.into(),
            expected: expected.to_string(),
        }
    }

    /// Stable message key, e.g. `templatedata-invalid-type`.
    pub fn key(&self) -> &'static str {
        match self {
            InvalidReason::Parse => "templatedata-invalid-parse",
            InvalidReason::Type { .. } => "templatedata-invalid-type",
            InvalidReason::Unknown { .. } => "templatedata-invalid-unknown",
            InvalidReason::Missing { .. } => "templatedata-invalid-missing",
        }
    }

    /// Field path the failure refers to.
    pub fn field(&self) -> Option<&str> {
        match self {
            InvalidReason::Parse => None,
            InvalidReason::Type { field, .. }
            | InvalidReason::Unknown { field }
            | InvalidReason::Missing { field, .. } => Some(field),
        }
    }

    /// Expected JSON type, where the reason carries one.
    pub fn expected(&self) -> Option<&str> {
        match self {
            InvalidReason::Type { expected, .. } | InvalidReason::Missing { expected, .. } => {
                Some(expected)
            }
            InvalidReason::Parse | InvalidReason::Unknown { .. } => None,
        }
    }
}

/// Result of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum ValidationOutcome {
    /// The document is canonical.
    Valid,
    /// The document was rejected.
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    /// True for [`ValidationOutcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Rejection reason, if any.
    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }

    /// Converts into a `Result` for `?`-style callers.
    pub fn into_result(self) -> Result<(), InvalidReason> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(reason) => Err(reason),
        }
    }
}
