//! Per-language flattened views of a canonical document.
//!
//! These are what the render layer and the scripting binding consume: every
//! [`InterfaceText`](crate::InterfaceText) is resolved to a single optional
//! string for one language. No fallback chain is consulted.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::document::CanonicalDocument;
use crate::language::LanguageCode;
use crate::param::{Deprecation, ParamSpec, ParamStatus};

/// Table placeholder for a parameter without a description.
pub const NO_DESCRIPTION: &str = "no description";
/// Table placeholder for a parameter without a default.
pub const NO_DEFAULT: &str = "empty";

/// A parameter with its description resolved for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlainParam {
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Description in the requested language; `None` when untranslated.
    pub description: Option<String>,
    /// Deprecation state.
    pub deprecated: Deprecation,
    /// Alternative names.
    pub aliases: Vec<Value>,
    /// Cloned parameters.
    pub clones: Vec<Value>,
    /// Default value.
    pub default: String,
}

impl PlainParam {
    fn project(spec: &ParamSpec, lang: &LanguageCode) -> Self {
        Self {
            required: spec.required,
            description: spec.description.get(lang).map(str::to_string),
            deprecated: spec.deprecated.clone(),
            aliases: spec.aliases.clone(),
            clones: spec.clones.clone(),
            default: spec.default.clone(),
        }
    }

    /// Table status.
    pub fn status(&self) -> ParamStatus {
        ParamStatus::of(&self.deprecated, self.required)
    }
}

fn ordered_map<S: Serializer>(
    entries: &[(String, PlainParam)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, param) in entries {
        map.serialize_entry(name, param)?;
    }
    map.end()
}

/// Document flattened for one language, with a derived parameter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlainDocument {
    /// Template description in the requested language.
    pub description: Option<String>,
    /// Parameters in document order.
    #[serde(serialize_with = "ordered_map")]
    pub params: Vec<(String, PlainParam)>,
    /// Parameter names in document order (0-based when indexed).
    #[serde(rename = "paramOrder")]
    pub param_order: Vec<String>,
}

/// [`PlainDocument`] with `paramOrder` keyed from 1, for 1-indexed consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberedDocument {
    /// Template description in the requested language.
    pub description: Option<String>,
    /// Parameters in document order.
    #[serde(serialize_with = "ordered_map")]
    pub params: Vec<(String, PlainParam)>,
    /// Ordinal (starting at 1) to parameter name.
    #[serde(rename = "paramOrder")]
    pub param_order: BTreeMap<usize, String>,
}

/// One row of the human-readable parameter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamRow {
    /// Parameter name.
    pub name: String,
    /// Description, or [`NO_DESCRIPTION`].
    pub description: String,
    /// Default, or [`NO_DEFAULT`].
    pub default: String,
    /// Status column.
    pub status: ParamStatus,
    /// Description cell shows a placeholder that should be styled as empty.
    /// Deprecated parameters are never flagged.
    pub description_missing: bool,
    /// Default cell shows a placeholder.
    pub default_missing: bool,
}

/// Flattens `doc` for `lang`.
pub fn project_for_language(doc: &CanonicalDocument, lang: &LanguageCode) -> PlainDocument {
    let params: Vec<(String, PlainParam)> = doc
        .params
        .iter()
        .map(|(name, spec)| (name.to_string(), PlainParam::project(spec, lang)))
        .collect();
    let param_order = doc.params.names().map(str::to_string).collect();

    PlainDocument {
        description: doc.description.get(lang).map(str::to_string),
        params,
        param_order,
    }
}

impl PlainDocument {
    /// Looks up a projected parameter by name.
    pub fn param(&self, name: &str) -> Option<&PlainParam> {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, param)| param)
    }

    /// Re-keys `paramOrder` from 1.
    pub fn numbered(self) -> NumberedDocument {
        let param_order = self
            .param_order
            .into_iter()
            .enumerate()
            .map(|(idx, name)| (idx + 1, name))
            .collect();
        NumberedDocument {
            description: self.description,
            params: self.params,
            param_order,
        }
    }

    /// Rows for the parameter table, in document order.
    pub fn rows(&self) -> Vec<ParamRow> {
        self.params
            .iter()
            .map(|(name, param)| {
                let status = param.status();
                ParamRow {
                    name: name.clone(),
                    description: param
                        .description
                        .clone()
                        .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                    default: if param.default.is_empty() {
                        NO_DEFAULT.to_string()
                    } else {
                        param.default.clone()
                    },
                    status,
                    description_missing: param.description.is_none()
                        && !param.deprecated.is_deprecated(),
                    default_missing: param.default.is_empty(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use serde_json::json;

    fn doc(raw: Value) -> CanonicalDocument {
        let (doc, outcome) = normalize(&raw, &LanguageCode::new("en"));
        assert!(outcome.is_valid(), "{outcome:?}");
        doc
    }

    #[test]
    fn missing_translation_is_null_not_error() {
        let doc = doc(json!({
            "description": {"de": "Eine Box"},
            "params": {"title": {"description": "Heading"}}
        }));
        let plain = project_for_language(&doc, &LanguageCode::new("fr"));
        assert_eq!(plain.description, None);
        assert_eq!(plain.param("title").unwrap().description, None);

        let value = serde_json::to_value(&plain).unwrap();
        assert_eq!(value["description"], Value::Null);
        assert_eq!(value["params"]["title"]["description"], Value::Null);
    }

    #[test]
    fn numbered_order_starts_at_one() {
        let doc = doc(json!({"params": {"b": {}, "a": {}, "c": {}}}));
        let numbered = project_for_language(&doc, &LanguageCode::new("en")).numbered();
        assert_eq!(
            serde_json::to_value(&numbered.param_order).unwrap(),
            json!({"1": "b", "2": "a", "3": "c"})
        );
    }

    #[test]
    fn rows_use_placeholders_and_status() {
        let doc = doc(json!({"params": {
            "old": {"deprecated": "Use new", "required": true},
            "new": {"required": true, "default": "x", "description": "The value"},
            "misc": {}
        }}));
        let rows = project_for_language(&doc, &LanguageCode::new("en")).rows();

        assert_eq!(rows[0].name, "old");
        assert_eq!(rows[0].status, ParamStatus::Deprecated);
        assert_eq!(rows[0].description, NO_DESCRIPTION);
        assert!(!rows[0].description_missing);

        assert_eq!(rows[1].status, ParamStatus::Required);
        assert_eq!(rows[1].description, "The value");
        assert_eq!(rows[1].default, "x");
        assert!(!rows[1].default_missing);

        assert_eq!(rows[2].status, ParamStatus::Optional);
        assert_eq!(rows[2].default, NO_DEFAULT);
        assert!(rows[2].description_missing);
        assert!(rows[2].default_missing);
    }
}
