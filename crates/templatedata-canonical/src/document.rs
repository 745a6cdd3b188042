use crate::interface_text::InterfaceText;
use crate::param::ParamSpec;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// Canonical JSON of [`CanonicalDocument::empty`].
pub const EMPTY_DOCUMENT_JSON: &str = r#"{"description":{},"params":{}}"#;

/// Parameters keyed by name, in the order the author wrote them.
///
/// Order drives both the rendered table and the derived `paramOrder`, so this
/// is a sequence rather than a hash map. Names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamSpec)>,
}

impl Params {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from entries whose names are already known to be unique.
    pub(crate) fn from_unique(entries: Vec<(String, ParamSpec)>) -> Self {
        Self { entries }
    }

    /// Appends a parameter, or replaces the spec in place if the name exists.
    pub fn insert(&mut self, name: impl Into<String>, spec: ParamSpec) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = spec,
            None => self.entries.push((name, spec)),
        }
    }

    /// Looks up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, spec)| spec)
    }

    /// Iterates `(name, spec)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Parameter names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no parameter is documented.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, spec) in &self.entries {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

/// Fully normalized TemplateData document.
///
/// Only the normalizer builds non-empty instances; after a failed run callers
/// get [`CanonicalDocument::empty`] instead of a partial result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalDocument {
    /// Template description per language.
    pub description: InterfaceText,
    /// Documented parameters.
    pub params: Params,
}

impl CanonicalDocument {
    /// Document with no description and no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Canonical JSON text for storage. Keys keep document order.
    pub fn to_json(&self) -> String {
        // Only strings, booleans and already-parsed JSON values are serialized.
        serde_json::to_string(self).unwrap_or_else(|_| EMPTY_DOCUMENT_JSON.to_string())
    }

    /// Canonical form as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| json!({"description": {}, "params": {}}))
    }
}
