use crate::blob::TemplateDataBlob;
use crate::language::LanguageCode;
use crate::projection::{project_for_language, NumberedDocument};

/// What a template script receives from a lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptResult {
    /// Projected document with 1-based `paramOrder`.
    Loaded(NumberedDocument),
    /// Human-readable reason the lookup produced nothing.
    Failed(String),
}

impl ScriptResult {
    /// `(data, message)` pair; exactly one side is set.
    pub fn into_pair(self) -> (Option<NumberedDocument>, Option<String>) {
        match self {
            ScriptResult::Loaded(doc) => (Some(doc), None),
            ScriptResult::Failed(message) => (None, Some(message)),
        }
    }
}

/// Loads stored template data of `page` for a script.
///
/// `lang` defaults to `content_lang`. Missing or invalid data is reported as
/// a message, never as a fault.
pub fn load_for_script(
    stored: Option<&str>,
    page: &str,
    content_lang: &LanguageCode,
    lang: Option<&LanguageCode>,
) -> ScriptResult {
    let Some(text) = stored else {
        return ScriptResult::Failed(format!("Page \"{page}\" has no template data."));
    };

    let blob = TemplateDataBlob::from_database(text, content_lang);
    if let Some(reason) = blob.outcome().reason() {
        return ScriptResult::Failed(format!(
            "Page \"{page}\" contains invalid template data: {reason}"
        ));
    }

    let lang = lang.unwrap_or(content_lang);
    ScriptResult::Loaded(project_for_language(blob.document(), lang).numbered())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_is_a_message() {
        let (doc, message) =
            load_for_script(None, "Template:Box", &LanguageCode::new("en"), None).into_pair();
        assert!(doc.is_none());
        assert_eq!(
            message.as_deref(),
            Some("Page \"Template:Box\" has no template data.")
        );
    }

    #[test]
    fn invalid_data_carries_reason() {
        let result = load_for_script(
            Some("[1, 2]"),
            "Template:Box",
            &LanguageCode::new("en"),
            None,
        );
        assert_eq!(
            result,
            ScriptResult::Failed(
                "Page \"Template:Box\" contains invalid template data: \
                 Property \"templatedata\" is expected to be of type \"object\"."
                    .to_string()
            )
        );
    }

    #[test]
    fn explicit_language_overrides_content_language() {
        let stored = r#"{"description": {"en": "Box", "de": "Kasten"}, "params": {"x": {}}}"#;
        let ScriptResult::Loaded(doc) = load_for_script(
            Some(stored),
            "Template:Box",
            &LanguageCode::new("en"),
            Some(&LanguageCode::new("de")),
        ) else {
            panic!("expected data");
        };
        assert_eq!(doc.description.as_deref(), Some("Kasten"));
        assert_eq!(doc.param_order.get(&1).map(String::as_str), Some("x"));
    }
}
