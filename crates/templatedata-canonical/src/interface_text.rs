use crate::language::LanguageCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Language-keyed text bundle used for every user-facing string in a document.
///
/// Keys are language codes and values are expected to be strings, but an
/// object supplied by the author is kept exactly as written (order included);
/// only [`InterfaceText::get`] interprets the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceText(Map<String, Value>);

impl InterfaceText {
    /// Text with no translations at all.
    pub fn empty() -> Self {
        Self(Map::new())
    }

    /// Wraps a plain string under a single language.
    pub fn from_plain(lang: &LanguageCode, text: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(lang.as_str().to_string(), Value::String(text.into()));
        Self(map)
    }

    /// Adopts an already keyed object verbatim.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Text for `lang`, if present and a string.
    pub fn get(&self, lang: &LanguageCode) -> Option<&str> {
        self.0.get(lang.as_str()).and_then(Value::as_str)
    }

    /// Language keys in document order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of language entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no language entry exists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
