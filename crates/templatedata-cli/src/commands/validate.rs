//! Validate command implementation.

use crate::commands::read_input;
use crate::error::CliError;
use crate::output::format_json;
use serde_json::json;
use templatedata_canonical::{LanguageCode, Normalizer};

pub fn run(
    input: Option<String>,
    content_lang: &str,
    json_output: bool,
    qualified_unknown: bool,
) -> Result<(), CliError> {
    let content_lang = LanguageCode::parse(content_lang)?;
    let content = read_input(input)?;

    let normalizer = Normalizer::new(content_lang).with_qualified_unknown_keys(qualified_unknown);
    let (doc, outcome) = normalizer.normalize_slice(&content);

    if json_output {
        let report = json!({
            "outcome": outcome,
            "message": outcome.reason().map(|r| r.to_string()),
            "key": outcome.reason().map(|r| r.key()),
            "document": doc,
        });
        println!("{}", format_json(&report)?);
        return outcome.into_result().map_err(CliError::from);
    }

    outcome.into_result()?;
    println!("{}", doc.to_json());
    Ok(())
}
