use crate::interface_text::InterfaceText;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Deprecation state of a parameter.
///
/// On the wire this is either `false` or a note string; `true` is never valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Deprecation {
    /// Parameter is in normal use.
    #[default]
    NotDeprecated,
    /// Parameter is deprecated, with a note for editors.
    Deprecated(String),
}

impl Deprecation {
    /// Builds from a note; an empty note means not deprecated.
    pub fn from_note(note: impl Into<String>) -> Self {
        let note = note.into();
        if note.is_empty() {
            Deprecation::NotDeprecated
        } else {
            Deprecation::Deprecated(note)
        }
    }

    /// True for [`Deprecation::Deprecated`].
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Deprecation::Deprecated(_))
    }

    /// The deprecation note, if any.
    pub fn note(&self) -> Option<&str> {
        match self {
            Deprecation::NotDeprecated => None,
            Deprecation::Deprecated(note) => Some(note),
        }
    }
}

impl Serialize for Deprecation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Deprecation::NotDeprecated => serializer.serialize_bool(false),
            Deprecation::Deprecated(note) => serializer.serialize_str(note),
        }
    }
}

impl<'de> Deserialize<'de> for Deprecation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(false) => Ok(Deprecation::NotDeprecated),
            Value::String(note) => Ok(Deprecation::from_note(note)),
            other => Err(serde::de::Error::custom(format!(
                "expected false or a string, found {other}"
            ))),
        }
    }
}

/// Status column of the parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamStatus {
    /// Deprecated wins over everything else.
    Deprecated,
    /// Must be supplied by the caller.
    Required,
    /// May be omitted.
    Optional,
}

impl ParamStatus {
    /// Status for a parameter; deprecation takes precedence over required-ness.
    pub fn of(deprecated: &Deprecation, required: bool) -> Self {
        if deprecated.is_deprecated() {
            ParamStatus::Deprecated
        } else if required {
            ParamStatus::Required
        } else {
            ParamStatus::Optional
        }
    }
}

impl fmt::Display for ParamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamStatus::Deprecated => "deprecated",
            ParamStatus::Required => "required",
            ParamStatus::Optional => "optional",
        })
    }
}

/// One documented template parameter, fully defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Description per language.
    pub description: InterfaceText,
    /// Deprecation state.
    pub deprecated: Deprecation,
    /// Alternative names. Elements are kept as authored.
    pub aliases: Vec<Value>,
    /// Parameters whose values this one copies. Elements are kept as authored.
    pub clones: Vec<Value>,
    /// Default value shown to editors.
    pub default: String,
}

impl ParamSpec {
    /// Table status.
    pub fn status(&self) -> ParamStatus {
        ParamStatus::of(&self.deprecated, self.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deprecation_wire_shape() {
        assert_eq!(serde_json::to_value(Deprecation::NotDeprecated).unwrap(), json!(false));
        assert_eq!(
            serde_json::to_value(Deprecation::from_note("Use |title= instead")).unwrap(),
            json!("Use |title= instead")
        );
        assert!(serde_json::from_value::<Deprecation>(json!(true)).is_err());
        assert_eq!(
            serde_json::from_value::<Deprecation>(json!("")).unwrap(),
            Deprecation::NotDeprecated
        );
    }

    #[test]
    fn status_prefers_deprecated_over_required() {
        let mut spec = ParamSpec {
            required: true,
            ..ParamSpec::default()
        };
        assert_eq!(spec.status(), ParamStatus::Required);
        spec.deprecated = Deprecation::from_note("gone");
        assert_eq!(spec.status(), ParamStatus::Deprecated);
        assert_eq!(ParamSpec::default().status(), ParamStatus::Optional);
    }
}
