//! Output formatting utilities.

use serde::Serialize;
use templatedata_canonical::ParamRow;

const NAME_WIDTH: usize = 20;
const DESCRIPTION_WIDTH: usize = 40;
const DEFAULT_WIDTH: usize = 20;

/// Formats any serializable value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Formats a parameter as a table row.
pub fn format_table_row(row: &ParamRow) -> String {
    format!(
        "{:<name$} {:<desc$} {:<default$} {}",
        truncate(&row.name, NAME_WIDTH),
        truncate(&row.description, DESCRIPTION_WIDTH),
        truncate(&row.default, DEFAULT_WIDTH),
        row.status,
        name = NAME_WIDTH,
        desc = DESCRIPTION_WIDTH,
        default = DEFAULT_WIDTH,
    )
}

/// Prints table header.
pub fn print_table_header() {
    println!(
        "{:<name$} {:<desc$} {:<default$} {}",
        "NAME",
        "DESCRIPTION",
        "DEFAULT",
        "STATUS",
        name = NAME_WIDTH,
        desc = DESCRIPTION_WIDTH,
        default = DEFAULT_WIDTH,
    );
    println!("{}", "-".repeat(NAME_WIDTH + DESCRIPTION_WIDTH + DEFAULT_WIDTH + 12));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
