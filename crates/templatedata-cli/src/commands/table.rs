//! Table command implementation.

use crate::commands::{load_valid, view_lang};
use crate::error::CliError;
use crate::output::{format_table_row, print_table_header};
use templatedata_canonical::{project_for_language, LanguageCode};

pub fn run(
    input: Option<String>,
    content_lang: &str,
    lang: Option<String>,
) -> Result<(), CliError> {
    let content_lang = LanguageCode::parse(content_lang)?;
    let lang = view_lang(lang, &content_lang)?;
    let doc = load_valid(input, &content_lang)?;

    let plain = project_for_language(&doc, &lang);
    if let Some(description) = &plain.description {
        println!("{}", description);
        println!();
    }
    print_table_header();
    for row in plain.rows() {
        println!("{}", format_table_row(&row));
    }
    Ok(())
}
