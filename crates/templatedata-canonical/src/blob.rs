use thiserror::Error;

use crate::document::CanonicalDocument;
use crate::language::LanguageCode;
use crate::normalizer::Normalizer;
use crate::outcome::{InvalidReason, ValidationOutcome};

/// A save was blocked because the submitted template data is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct SaveRejected {
    /// Why the content was rejected.
    pub reason: InvalidReason,
}

/// Template data as submitted on a page, together with its validation result.
///
/// The raw bytes are kept verbatim, even when they are not UTF-8; the
/// canonical form is only offered for storage when the outcome is valid.
#[derive(Debug, Clone)]
pub struct TemplateDataBlob {
    raw: Vec<u8>,
    document: CanonicalDocument,
    outcome: ValidationOutcome,
}

impl TemplateDataBlob {
    /// Parses and normalizes freshly submitted content.
    pub fn from_json(content: impl Into<Vec<u8>>, fallback: &LanguageCode) -> Self {
        let raw = content.into();
        let (document, outcome) = Normalizer::new(fallback.clone()).normalize_slice(&raw);
        Self {
            raw,
            document,
            outcome,
        }
    }

    /// Re-reads a stored page property.
    ///
    /// Stored values were valid when written, so a failure here is logged.
    pub fn from_database(content: impl Into<Vec<u8>>, fallback: &LanguageCode) -> Self {
        let blob = Self::from_json(content, fallback);
        if let Some(reason) = blob.outcome.reason() {
            tracing::warn!(key = reason.key(), %reason, "stored templatedata no longer validates");
        }
        blob
    }

    /// Content exactly as submitted.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Normalized document; empty when invalid.
    pub fn document(&self) -> &CanonicalDocument {
        &self.document
    }

    /// Validation result.
    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    /// Canonical JSON to persist, or `None` if the document must not be stored.
    pub fn canonical_json(&self) -> Option<String> {
        self.outcome.is_valid().then(|| self.document.to_json())
    }

    /// Splits into document and outcome.
    pub fn into_parts(self) -> (CanonicalDocument, ValidationOutcome) {
        (self.document, self.outcome)
    }
}

/// Runs validation ahead of a page save.
pub fn gate_save(
    content: impl AsRef<[u8]>,
    fallback: &LanguageCode,
) -> Result<CanonicalDocument, SaveRejected> {
    let (document, outcome) = Normalizer::new(fallback.clone()).normalize_slice(content.as_ref());
    outcome
        .into_result()
        .map(|()| document)
        .map_err(|reason| SaveRejected { reason })
}
