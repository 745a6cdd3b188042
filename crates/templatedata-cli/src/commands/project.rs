//! Project command implementation.

use crate::commands::{load_valid, view_lang};
use crate::error::CliError;
use crate::output::format_json;
use templatedata_canonical::{project_for_language, LanguageCode};

pub fn run(
    input: Option<String>,
    content_lang: &str,
    lang: Option<String>,
    numbered: bool,
) -> Result<(), CliError> {
    let content_lang = LanguageCode::parse(content_lang)?;
    let lang = view_lang(lang, &content_lang)?;
    let doc = load_valid(input, &content_lang)?;

    let plain = project_for_language(&doc, &lang);
    let rendered = if numbered {
        format_json(&plain.numbered())?
    } else {
        format_json(&plain)?
    };
    println!("{}", rendered);
    Ok(())
}
