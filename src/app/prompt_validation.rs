//! Field-level validation status for prompt documents.
//!
//! Rendering code calls [`validation_status`] once per displayed field to
//! pick the status badge: was the value filled by a system default, is a
//! required field missing, is an optional field merely empty, or did the
//! upstream data set it explicitly. All functions here are total; malformed
//! document shapes degrade to "empty"/"missing" rather than failing, because
//! generated documents cannot be trusted to match the schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Badge-level status of a single field.
///
/// `Warning` is a document-level category: free-text messages attached to
/// the whole prompt are passed through under it. The per-field classifier
/// never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Default,
    Missing,
    Empty,
    Set,
    Warning,
}

/// A field-level validation failure, reported with the dot-notation path of
/// the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field_path: String,
    pub message: String,
}

/// Shallow emptiness test.
///
/// Null, the empty string, the empty list, and the empty mapping are empty.
/// Every other scalar is not, `0` and `false` included. The test is one
/// level deep: a list of empty elements is not itself empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Whether a field's value originated from a system default.
///
/// True iff the path exactly matches a defaults-applied entry, or descends
/// from one (the entry plus `"."` is a prefix of the path). Matching is
/// case-sensitive with no array-index normalization: a default recorded at
/// `subjects[0].description` says nothing about `subjects[1].description`.
/// When several entries cover the same path any match suffices; there is no
/// most-specific-entry precedence.
pub fn has_default_applied(field_path: &str, defaults_applied: &[String]) -> bool {
    defaults_applied
        .iter()
        .any(|entry| field_path == entry || field_path.starts_with(&format!("{}.", entry)))
}

/// Classify one field. First match wins:
///
/// 1. Covered by the defaults-applied list -> [`ValidationStatus::Default`]
/// 2. Empty and required -> [`ValidationStatus::Missing`]
/// 3. Empty and optional -> [`ValidationStatus::Empty`]
/// 4. Otherwise -> [`ValidationStatus::Set`]
///
/// An absent field (`None`) classifies exactly like an explicit null.
pub fn validation_status(
    value: Option<&Value>,
    defaults_applied: &[String],
    field_path: &str,
    required: bool,
) -> ValidationStatus {
    if has_default_applied(field_path, defaults_applied) {
        return ValidationStatus::Default;
    }
    if value.map_or(true, is_empty) {
        if required {
            ValidationStatus::Missing
        } else {
            ValidationStatus::Empty
        }
    } else {
        ValidationStatus::Set
    }
}

/// Required fields of the universal prompt schema: each section paired with
/// the member that must be non-empty inside it.
const REQUIRED_FIELDS: &[(&str, &str)] = &[("subject", "description"), ("environment", "location")];

/// Check a raw document against the schema's required fields.
///
/// Returns one [`FieldError`] per violation, empty when the document is
/// valid. Never panics on any input shape; a section of the wrong type is
/// reported at the section path.
pub fn validate_required(document: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (section, member) in REQUIRED_FIELDS {
        let section_value = document.as_object().and_then(|map| map.get(*section));
        match section_value {
            Some(Value::Object(section_map)) => {
                let member_value = section_map.get(*member);
                if member_value.map_or(true, is_empty) {
                    errors.push(FieldError {
                        field_path: format!("{}.{}", section, member),
                        message: "Field is required but missing".to_string(),
                    });
                }
            }
            Some(value) if !is_empty(value) => {
                errors.push(FieldError {
                    field_path: (*section).to_string(),
                    message: "Invalid value".to_string(),
                });
            }
            _ => {
                errors.push(FieldError {
                    field_path: (*section).to_string(),
                    message: "Field is required but missing".to_string(),
                });
            }
        }
    }

    errors
}
