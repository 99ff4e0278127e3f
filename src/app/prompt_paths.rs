//! Field path addressing over untyped prompt documents.
//!
//! A field path addresses one node in a document tree: mapping keys are
//! joined with `.` and list elements are addressed with a bracketed index
//! immediately after their parent segment, for example
//! `subjects[1].attributes[0]`. The same notation is used by the upstream
//! producer when it reports which paths were filled by system defaults, so
//! the conventions here and in [`crate::app::prompt_validation`] must stay
//! in sync.
//!
//! Keys are spliced into the path verbatim, so a mapping key that itself
//! contains `.` or `[` produces the same path string as the nested shape it
//! mimics: `{"a.b": 1}` and `{"a": {"b": 1}}` both enumerate `a.b`, and
//! resolution reads the nested interpretation. Prompt documents use fixed
//! schema keys that never contain these characters, so the ambiguity is a
//! known limit rather than a supported case.

use serde_json::Value;
use std::collections::BTreeSet;

/// One parsed step of a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Key(String),
    Index(usize),
}

/// Enumerate every addressable field path in a document.
///
/// Every node reached through a non-empty path registers its path, container
/// nodes and explicit nulls included; the root itself contributes no path.
/// Path strings are distinct for distinct locations as long as no mapping
/// key contains `.` or `[` (see the module docs).
pub fn enumerate_paths(document: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect_paths(document, "", &mut paths);
    paths
}

fn collect_paths(node: &Value, prefix: &str, paths: &mut BTreeSet<String>) {
    if !prefix.is_empty() {
        paths.insert(prefix.to_string());
    }

    match node {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_paths(item, &format!("{}[{}]", prefix, index), paths);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let child_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_paths(child, &child_prefix, paths);
            }
        }
        // Scalars and nulls register only their own path.
        _ => {}
    }
}

/// Walk a field path back down a document.
///
/// Returns the node the path addresses, or `None` if the path is malformed
/// or does not exist in this document. Paths produced by [`enumerate_paths`]
/// always resolve against the document that produced them.
pub fn resolve_path<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in parse_segments(path)? {
        match segment {
            PathSegment::Key(key) => current = current.as_object()?.get(&key)?,
            PathSegment::Index(index) => current = current.as_array()?.get(index)?,
        }
    }
    Some(current)
}

fn parse_segments(path: &str) -> Option<Vec<PathSegment>> {
    let mut segments = Vec::new();
    let mut rest = path;

    while !rest.is_empty() {
        if let Some(inner) = rest.strip_prefix('[') {
            let close = inner.find(']')?;
            let index = inner[..close].parse::<usize>().ok()?;
            segments.push(PathSegment::Index(index));
            rest = &inner[close + 1..];
        } else {
            let end = rest
                .find(|c| c == '.' || c == '[')
                .unwrap_or(rest.len());
            if end == 0 {
                return None;
            }
            segments.push(PathSegment::Key(rest[..end].to_string()));
            rest = &rest[end..];
        }

        // A dot separates the next key segment; it must not be trailing and
        // must not be followed by another separator.
        if let Some(after_dot) = rest.strip_prefix('.') {
            if after_dot.is_empty() || after_dot.starts_with('.') || after_dot.starts_with('[') {
                return None;
            }
            rest = after_dot;
        }
    }

    Some(segments)
}
