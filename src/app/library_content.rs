//! Library item content handling.
//!
//! Library items store reusable prompt fragments (styles, environments) as
//! JSON documents that users edit by hand. Hand-edited JSON routinely
//! arrives with typographic quotation marks pasted from word processors and
//! the occasional `=` where a `:` belongs, so the parser normalizes those
//! before rejecting anything. A syntactically invalid document blocks the
//! commit in the editing form; the annotation engine is never invoked on
//! invalid documents.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

lazy_static::lazy_static! {
    /// Typographic double quote variants normalized to `"`.
    static ref DOUBLE_QUOTES: regex::Regex =
        regex::Regex::new("[\u{201C}\u{201D}\u{00AB}\u{00BB}\u{201E}\u{201F}\u{275D}\u{275E}\u{301D}\u{301E}\u{FF02}]")
            .expect("double quote pattern is valid");

    /// Typographic single quote variants normalized to `'`.
    static ref SINGLE_QUOTES: regex::Regex =
        regex::Regex::new("[\u{2018}\u{2019}\u{201A}\u{201B}\u{275B}\u{275C}\u{2E02}\u{2E03}\u{2E04}\u{2E05}\u{2E09}\u{2E0A}\u{2E0C}\u{2E0D}\u{2E1C}\u{2E1D}\u{2E20}\u{2E21}]")
            .expect("single quote pattern is valid");

    /// `"key" = "value"` rewritten to `"key": "value"`.
    static ref QUOTED_EQUALS: regex::Regex =
        regex::Regex::new(r#"("[^"]*")\s*=\s*("[^"]*")"#)
            .expect("quoted equals pattern is valid");
}

/// The library sections a tag suggestion source can be keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    Styles,
    Environments,
}

impl LibraryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryKind::Styles => "styles",
            LibraryKind::Environments => "environments",
        }
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replace typographic quotation marks with their ASCII forms, then rewrite
/// `=` between quoted strings into `:` (e.g. `{"foo"="bar"}` becomes
/// `{"foo":"bar"}`).
pub fn normalize_quotes(raw: &str) -> String {
    let normalized = DOUBLE_QUOTES.replace_all(raw, "\"");
    let normalized = SINGLE_QUOTES.replace_all(&normalized, "'");
    QUOTED_EQUALS
        .replace_all(&normalized, "${1}:${2}")
        .into_owned()
}

/// Parse user-edited library content, tolerating typographic quotes.
pub fn parse_content(raw: &str) -> Result<Value> {
    serde_json::from_str(&normalize_quotes(raw.trim()))
        .context("library item content is not valid JSON")
}

/// Well-formedness check backing the content editor's commit gate.
pub fn is_valid_json(raw: &str) -> bool {
    parse_content(raw).is_ok()
}
