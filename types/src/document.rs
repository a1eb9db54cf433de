//! Fetched document contract and shape validation.
//!
//! A document is parsed in two passes: first as untyped JSON so the
//! required top-level fields can be checked by name, then into the typed
//! struct. Either pass failing rejects the whole document.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// A read-only JSON document served as a static file.
pub trait Document: DeserializeOwned + Send + 'static {
    /// Resource path relative to the content root.
    const RESOURCE_PATH: &'static str;
    /// Top-level fields that must be present and non-null.
    const REQUIRED_FIELDS: &'static [&'static str];
    /// Short human label used in logs.
    const LABEL: &'static str;
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("document root is not a JSON object")]
    NotAnObject,
    #[error("document is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Parse and validate a document body.
///
/// Never returns a partially populated document: a body that fails any
/// check is rejected as a whole.
pub fn parse_document<D: Document>(bytes: &[u8]) -> Result<D, DocumentError> {
    let value: Value = serde_json::from_slice(bytes)?;

    let Value::Object(fields) = &value else {
        return Err(DocumentError::NotAnObject);
    };

    if let Some(missing) = D::REQUIRED_FIELDS
        .iter()
        .find(|name| fields.get(**name).is_none_or(Value::is_null))
    {
        return Err(DocumentError::MissingField(*missing));
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::{DocumentError, parse_document};
    use crate::{HeresiesChecklist, VerseCheatsheet};

    #[test]
    fn faith_example_parses() {
        let body = br#"{ "categories": [{ "name": "Faith", "verses": [{ "reference": "Heb 11:1", "text": "Now faith is the substance of things to be hoped for" }] }] }"#;
        let doc: VerseCheatsheet = parse_document(body).unwrap();
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.categories[0].name, "Faith");
        assert_eq!(doc.categories[0].verses[0].reference, "Heb 11:1");
    }

    #[test]
    fn missing_categories_is_rejected() {
        let err = parse_document::<VerseCheatsheet>(br#"{ "sections": [] }"#).unwrap_err();
        assert!(matches!(err, DocumentError::MissingField("categories")));
    }

    #[test]
    fn null_required_field_is_rejected() {
        let err = parse_document::<VerseCheatsheet>(br#"{ "categories": null }"#).unwrap_err();
        assert!(matches!(err, DocumentError::MissingField("categories")));
    }

    #[test]
    fn heresies_requires_both_fields() {
        let err = parse_document::<HeresiesChecklist>(br#"{ "heresies": [] }"#).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::MissingField("catholic_teachings_about_jesus")
        ));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = parse_document::<VerseCheatsheet>(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, DocumentError::NotAnObject));
    }

    #[test]
    fn syntax_error_is_malformed() {
        let err = parse_document::<VerseCheatsheet>(b"{ \"categories\": [").unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));
    }

    #[test]
    fn verse_without_text_rejects_whole_document() {
        let body = br#"{ "categories": [
            { "name": "Good", "verses": [{ "reference": "Jn 1:1", "text": "In the beginning" }] },
            { "name": "Bad", "verses": [{ "reference": "Jn 1:2" }] }
        ] }"#;
        let err = parse_document::<VerseCheatsheet>(body).unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));
    }
}
