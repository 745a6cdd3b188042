use serde_json::{Map, Value};
use std::fmt;

use crate::document::{CanonicalDocument, Params};
use crate::interface_text::InterfaceText;
use crate::language::LanguageCode;
use crate::outcome::{InvalidReason, ValidationOutcome};
use crate::param::{Deprecation, ParamSpec};

/// Keys permitted at the top level of a document.
pub const DOCUMENT_KEYS: &[&str] = &["params", "description"];

/// Keys permitted inside a parameter object.
pub const PARAM_KEYS: &[&str] = &[
    "required",
    "description",
    "deprecated",
    "aliases",
    "clones",
    "default",
];

/// Helper for building dotted field paths in error reports.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// A key counts as present only when it maps to a non-null value.
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn first_unknown<'a>(map: &'a Map<String, Value>, allowed: &[&str]) -> Option<&'a str> {
    map.keys()
        .map(String::as_str)
        .find(|key| !allowed.contains(key))
}

/// Validates raw TemplateData and fills in every default.
///
/// Checks run in a fixed order and stop at the first violation, so the
/// reported reason is deterministic for a given input.
#[derive(Debug, Clone)]
pub struct Normalizer {
    fallback: LanguageCode,
    qualify_unknown_keys: bool,
}

impl Normalizer {
    /// Creates a normalizer that tags bare strings with `fallback`.
    pub fn new(fallback: LanguageCode) -> Self {
        Self {
            fallback,
            qualify_unknown_keys: false,
        }
    }

    /// Report unknown keys inside a parameter as `params.<name>.<key>`
    /// instead of the bare key.
    pub fn with_qualified_unknown_keys(mut self, qualify: bool) -> Self {
        self.qualify_unknown_keys = qualify;
        self
    }

    /// Language used for bare strings.
    pub fn fallback(&self) -> &LanguageCode {
        &self.fallback
    }

    /// Normalizes JSON text. Malformed JSON is reported as `invalid-parse`.
    pub fn normalize_str(&self, text: &str) -> (CanonicalDocument, ValidationOutcome) {
        self.normalize_slice(text.as_bytes())
    }

    /// Normalizes raw bytes. Invalid UTF-8 and malformed JSON are both
    /// reported as `invalid-parse`.
    pub fn normalize_slice(&self, bytes: &[u8]) -> (CanonicalDocument, ValidationOutcome) {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(raw) => self.normalize(&raw),
            Err(err) => {
                tracing::debug!(error = %err, "templatedata is not valid JSON");
                self.reject(InvalidReason::Parse)
            }
        }
    }

    /// Normalizes an already parsed value.
    ///
    /// On failure the returned document is always [`CanonicalDocument::empty`].
    #[tracing::instrument(level = "debug", skip(self, raw), fields(lang = %self.fallback))]
    pub fn normalize(&self, raw: &Value) -> (CanonicalDocument, ValidationOutcome) {
        match self.document(raw) {
            Ok(doc) => (doc, ValidationOutcome::Valid),
            Err(reason) => self.reject(reason),
        }
    }

    fn reject(&self, reason: InvalidReason) -> (CanonicalDocument, ValidationOutcome) {
        tracing::debug!(
            key = reason.key(),
            field = reason.field().unwrap_or_default(),
            "templatedata rejected"
        );
        (CanonicalDocument::empty(), ValidationOutcome::Invalid(reason))
    }

    fn document(&self, raw: &Value) -> Result<CanonicalDocument, InvalidReason> {
        let root = match raw {
            Value::Null => return Err(InvalidReason::Parse),
            Value::Object(map) => map,
            _ => return Err(InvalidReason::wrong_type("templatedata", "object")),
        };

        if let Some(key) = first_unknown(root, DOCUMENT_KEYS) {
            return Err(InvalidReason::unknown(key));
        }

        let params = match present(root, "params") {
            None => return Err(InvalidReason::missing("params", "object")),
            Some(Value::Object(params)) => params,
            Some(_) => return Err(InvalidReason::wrong_type("params", "object")),
        };

        let description = self.interface_text(
            present(root, "description"),
            &Path::root().push_field("description"),
        )?;

        let base = Path::root().push_field("params");
        let mut entries = Vec::with_capacity(params.len());
        for (name, value) in params {
            let spec = self.param(&base.push_field(name), value)?;
            entries.push((name.clone(), spec));
        }

        Ok(CanonicalDocument {
            description,
            params: Params::from_unique(entries),
        })
    }

    fn param(&self, path: &Path, value: &Value) -> Result<ParamSpec, InvalidReason> {
        let Value::Object(obj) = value else {
            return Err(InvalidReason::wrong_type(path.to_string(), "object"));
        };

        if let Some(key) = first_unknown(obj, PARAM_KEYS) {
            let field = if self.qualify_unknown_keys {
                path.push_field(key).to_string()
            } else {
                key.to_string()
            };
            return Err(InvalidReason::unknown(field));
        }

        let required = match present(obj, "required") {
            None => false,
            Some(Value::Bool(required)) => *required,
            Some(_) => {
                return Err(InvalidReason::wrong_type(
                    path.push_field("required").to_string(),
                    "boolean",
                ))
            }
        };

        let description =
            self.interface_text(present(obj, "description"), &path.push_field("description"))?;

        // `true` is rejected: a deprecation is only ever expressed as a note.
        let deprecated = match present(obj, "deprecated") {
            None | Some(Value::Bool(false)) => Deprecation::NotDeprecated,
            Some(Value::String(note)) => Deprecation::from_note(note.as_str()),
            Some(_) => {
                return Err(InvalidReason::wrong_type(
                    path.push_field("deprecated").to_string(),
                    "boolean|string",
                ))
            }
        };

        let aliases = list(obj, "aliases", path)?;
        let clones = list(obj, "clones", path)?;

        let default = match present(obj, "default") {
            None => String::new(),
            Some(Value::String(default)) => default.clone(),
            Some(_) => {
                return Err(InvalidReason::wrong_type(
                    path.push_field("default").to_string(),
                    "string",
                ))
            }
        };

        Ok(ParamSpec {
            required,
            description,
            deprecated,
            aliases,
            clones,
            default,
        })
    }

    fn interface_text(
        &self,
        value: Option<&Value>,
        path: &Path,
    ) -> Result<InterfaceText, InvalidReason> {
        match value {
            None => Ok(InterfaceText::empty()),
            Some(Value::String(text)) => {
                Ok(InterfaceText::from_plain(&self.fallback, text.as_str()))
            }
            Some(Value::Object(map)) => Ok(InterfaceText::from_map(map.clone())),
            Some(_) => Err(InvalidReason::wrong_type(path.to_string(), "string|object")),
        }
    }
}

/// Element types are deliberately left unchecked.
fn list(obj: &Map<String, Value>, key: &str, path: &Path) -> Result<Vec<Value>, InvalidReason> {
    match present(obj, key) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(_) => Err(InvalidReason::wrong_type(
            path.push_field(key).to_string(),
            "array",
        )),
    }
}

/// Normalizes a parsed value with default settings.
pub fn normalize(raw: &Value, fallback: &LanguageCode) -> (CanonicalDocument, ValidationOutcome) {
    Normalizer::new(fallback.clone()).normalize(raw)
}

/// Parses and normalizes JSON text with default settings.
pub fn normalize_json(
    text: &str,
    fallback: &LanguageCode,
) -> (CanonicalDocument, ValidationOutcome) {
    Normalizer::new(fallback.clone()).normalize_str(text)
}

/// Parses and normalizes raw bytes with default settings.
pub fn normalize_bytes(
    bytes: &[u8],
    fallback: &LanguageCode,
) -> (CanonicalDocument, ValidationOutcome) {
    Normalizer::new(fallback.clone()).normalize_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn en() -> LanguageCode {
        LanguageCode::new("en")
    }

    fn reason_of(raw: Value) -> InvalidReason {
        let (doc, outcome) = normalize(&raw, &en());
        assert_eq!(doc, CanonicalDocument::empty());
        outcome.reason().cloned().expect("expected rejection")
    }

    #[test]
    fn null_is_a_parse_failure() {
        assert_eq!(reason_of(Value::Null), InvalidReason::Parse);
    }

    #[test]
    fn malformed_text_is_a_parse_failure() {
        for text in ["", "{", "{'params': {}}", "null"] {
            let (doc, outcome) = normalize_json(text, &en());
            assert_eq!(doc, CanonicalDocument::empty());
            assert_eq!(outcome, ValidationOutcome::Invalid(InvalidReason::Parse), "{text:?}");
        }
    }

    #[test]
    fn invalid_utf8_is_a_parse_failure() {
        let bytes = b"{\"params\": {\"a\": {\"default\": \"\xff\"}}}";
        let (doc, outcome) = normalize_bytes(bytes, &en());
        assert_eq!(doc, CanonicalDocument::empty());
        assert_eq!(outcome, ValidationOutcome::Invalid(InvalidReason::Parse));

        let (_, outcome) = normalize_bytes(br#"{"params": {"a": {"default": "x"}}}"#, &en());
        assert!(outcome.is_valid());
    }

    #[test]
    fn non_object_root_is_rejected() {
        for raw in [json!([]), json!(1), json!("x"), json!(true)] {
            assert_eq!(
                reason_of(raw),
                InvalidReason::wrong_type("templatedata", "object")
            );
        }
    }

    #[test]
    fn unknown_key_reported_before_missing_params() {
        assert_eq!(
            reason_of(json!({"bogus": 1})),
            InvalidReason::unknown("bogus")
        );
    }

    #[test]
    fn null_params_counts_as_missing() {
        assert_eq!(
            reason_of(json!({"params": null})),
            InvalidReason::missing("params", "object")
        );
    }

    #[test]
    fn params_must_be_an_object() {
        assert_eq!(
            reason_of(json!({"params": []})),
            InvalidReason::wrong_type("params", "object")
        );
    }

    #[test]
    fn description_type_checked_before_params_entries() {
        assert_eq!(
            reason_of(json!({"params": {"a": 5}, "description": 3})),
            InvalidReason::wrong_type("description", "string|object")
        );
    }

    #[test]
    fn param_field_order_decides_reported_error() {
        let raw = json!({"params": {"p": {"default": 1, "required": "yes", "aliases": {}}}});
        assert_eq!(
            reason_of(raw),
            InvalidReason::wrong_type("params.p.required", "boolean")
        );
    }

    #[test]
    fn first_bad_param_wins() {
        let raw = json!({"params": {"ok": {}, "bad": [], "worse": 1}});
        assert_eq!(
            reason_of(raw),
            InvalidReason::wrong_type("params.bad", "object")
        );
    }

    #[test]
    fn nested_unknown_key_is_unqualified_by_default() {
        let raw = json!({"params": {"p": {"type": "string"}}});
        assert_eq!(reason_of(raw.clone()), InvalidReason::unknown("type"));

        let (_, outcome) = Normalizer::new(en())
            .with_qualified_unknown_keys(true)
            .normalize(&raw);
        assert_eq!(
            outcome,
            ValidationOutcome::Invalid(InvalidReason::unknown("params.p.type"))
        );
    }

    #[test]
    fn deprecated_true_is_rejected() {
        assert_eq!(
            reason_of(json!({"params": {"p": {"deprecated": true}}})),
            InvalidReason::wrong_type("params.p.deprecated", "boolean|string")
        );
    }

    #[test]
    fn list_fields_must_be_arrays() {
        assert_eq!(
            reason_of(json!({"params": {"p": {"aliases": "q"}}})),
            InvalidReason::wrong_type("params.p.aliases", "array")
        );
        assert_eq!(
            reason_of(json!({"params": {"p": {"clones": {"0": "q"}}}})),
            InvalidReason::wrong_type("params.p.clones", "array")
        );
    }

    #[test]
    fn null_fields_take_defaults() {
        let raw = json!({
            "params": {"p": {"required": null, "default": null, "deprecated": null}},
            "description": null
        });
        let (doc, outcome) = normalize(&raw, &en());
        assert!(outcome.is_valid());
        assert!(doc.description.is_empty());
        assert_eq!(doc.params.get("p"), Some(&ParamSpec::default()));
    }

    #[test]
    fn list_elements_are_not_checked() {
        let raw = json!({"params": {"p": {"aliases": ["q", 2, null], "clones": [{}]}}});
        let (doc, outcome) = normalize(&raw, &en());
        assert!(outcome.is_valid());
        let spec = doc.params.get("p").unwrap();
        assert_eq!(spec.aliases, vec![json!("q"), json!(2), Value::Null]);
        assert_eq!(spec.clones, vec![json!({})]);
    }

    #[test]
    fn empty_deprecation_note_is_not_deprecated() {
        let (doc, _) = normalize(&json!({"params": {"p": {"deprecated": ""}}}), &en());
        assert_eq!(doc.params.get("p").unwrap().deprecated, Deprecation::NotDeprecated);
    }
}
