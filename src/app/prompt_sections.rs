//! Projection of a prompt document into semantic display sections.
//!
//! The UI renders a prompt as four fixed groups: the subject list, the
//! environment, the style, and the technical parameters. This module is a
//! pure reshape of the top level of a document into that grouping; it does
//! not validate, default, or recurse, and it borrows the nested values
//! rather than copying them.

use serde_json::Value;

/// Fixed-shape view of a prompt document for display.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSections<'a> {
    /// Ordered subject list. A document with a singular `subject` field is
    /// presented as a one-element list.
    pub subjects: Vec<&'a Value>,
    pub environment: Option<&'a Value>,
    pub style: Option<&'a Value>,
    pub technical: Option<&'a Value>,
}

/// Group the top level of a document into display sections.
///
/// Historical documents carry a singular `subject`; current ones carry a
/// `subjects` list. Both shapes are accepted: the list wins when it is
/// actually a list, otherwise a non-null `subject` is wrapped. Explicit
/// nulls count as absent. Recomputing on an unmodified document yields a
/// structurally equal view.
pub fn group_sections(document: &Value) -> PromptSections<'_> {
    let top_level = |key: &str| {
        document
            .as_object()
            .and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    };

    let subjects = match top_level("subjects") {
        Some(Value::Array(items)) => items.iter().collect(),
        _ => match top_level("subject") {
            Some(subject) => vec![subject],
            None => Vec::new(),
        },
    };

    PromptSections {
        subjects,
        environment: top_level("environment"),
        style: top_level("style"),
        technical: top_level("technical"),
    }
}
