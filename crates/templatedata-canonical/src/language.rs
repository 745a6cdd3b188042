use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const LANGUAGE_CODE_PATTERN: &str = r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$";

fn language_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LANGUAGE_CODE_PATTERN).expect("invalid regex"))
}

/// Wiki language code such as `en`, `zh-hans` or `be-tarask`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parses a validated language code (pattern: `[a-z][a-z0-9]*(-[a-z0-9]+)*`).
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !language_code_regex().is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "LanguageCode",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Borrows the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LanguageCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LanguageCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_wiki_codes() {
        for code in ["en", "de", "zh-hans", "be-tarask", "simple", "sr-el"] {
            assert!(LanguageCode::parse(code).is_ok(), "{code}");
        }
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        for code in ["", "EN", "en_GB", "-en", "en-", "1en"] {
            let err = LanguageCode::parse(code).unwrap_err();
            assert_eq!(
                err,
                ValidationError::PatternMismatch {
                    field: "LanguageCode",
                    value: code.to_string(),
                }
            );
        }
    }
}
