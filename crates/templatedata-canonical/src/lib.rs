//! Validation and normalization of TemplateData documents.
//!
//! A TemplateData document is the JSON blob authors place inside a
//! `<templatedata>` tag to describe a template's parameters. The
//! [`Normalizer`] turns an arbitrary, untrusted JSON value into either a fully
//! defaulted [`CanonicalDocument`] or a single structured [`InvalidReason`].
//! It is pure: no I/O, no shared state, no process-wide language setting.
//!
//! Everything downstream (storage, table rendering, script lookups) consumes
//! the canonical document or its per-language [`projection`].
//!
#![deny(missing_docs)]

/// Stored form and edit-time gate.
pub mod blob;
/// Canonical document and ordered parameter collection.
pub mod document;
/// Language-keyed text bundles.
pub mod interface_text;
/// Language code newtype.
pub mod language;
/// The validation and normalization engine.
pub mod normalizer;
/// Validation outcomes and rejection reasons.
pub mod outcome;
/// Parameter specification types.
pub mod param;
/// Per-language flattened views.
pub mod projection;
/// Lookups on behalf of template scripts.
pub mod script;
/// Validation helpers used by primitive types.
pub mod validation;

pub use blob::{gate_save, SaveRejected, TemplateDataBlob};
pub use document::{CanonicalDocument, Params, EMPTY_DOCUMENT_JSON};
pub use interface_text::InterfaceText;
pub use language::LanguageCode;
pub use normalizer::{normalize, normalize_bytes, normalize_json, Normalizer};
pub use outcome::{InvalidReason, ValidationOutcome};
pub use param::{Deprecation, ParamSpec, ParamStatus};
pub use projection::{
    project_for_language, NumberedDocument, ParamRow, PlainDocument, PlainParam,
};
pub use script::{load_for_script, ScriptResult};
pub use validation::ValidationError;
