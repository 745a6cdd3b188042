use templatedata_canonical::{InvalidReason, ValidationError};
use thiserror::Error;

/// CLI error types.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A language flag is not a valid code.
    #[error("invalid language code: {0}")]
    Language(#[from] ValidationError),
    /// The document was rejected.
    #[error("{0}")]
    Invalid(#[from] InvalidReason),
    /// Output could not be serialized.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
