//! Subcommand implementations.

pub mod project;
pub mod table;
pub mod validate;

use crate::error::CliError;
use std::io::{self, Read};
use templatedata_canonical::{CanonicalDocument, LanguageCode, Normalizer, ValidationOutcome};

/// Reads raw document bytes from a file, or stdin when no path is given.
///
/// Encoding is left to the normalizer so bad bytes surface as `invalid-parse`.
pub fn read_input(input: Option<String>) -> Result<Vec<u8>, CliError> {
    let content = match input {
        Some(path) => {
            tracing::debug!(%path, "reading templatedata");
            std::fs::read(&path).map_err(|source| CliError::Read { path, source })?
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    tracing::debug!(bytes = content.len(), "read templatedata input");
    Ok(content)
}

/// Reads and normalizes the input, failing on an invalid document.
pub fn load_valid(
    input: Option<String>,
    content_lang: &LanguageCode,
) -> Result<CanonicalDocument, CliError> {
    let content = read_input(input)?;
    let (doc, outcome) = Normalizer::new(content_lang.clone()).normalize_slice(&content);
    match outcome {
        ValidationOutcome::Valid => Ok(doc),
        ValidationOutcome::Invalid(reason) => Err(reason.into()),
    }
}

/// Viewing language: explicit flag, else the content language.
pub fn view_lang(
    lang: Option<String>,
    content_lang: &LanguageCode,
) -> Result<LanguageCode, CliError> {
    match lang {
        Some(code) => Ok(LanguageCode::parse(code)?),
        None => Ok(content_lang.clone()),
    }
}
