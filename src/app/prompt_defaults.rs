//! System defaulting for prompt documents.
//!
//! Optional sections of the universal prompt schema are filled with
//! documented system defaults before a prompt is handed to an adapter.
//! Every filled path is recorded so the UI can badge those fields as
//! default-provenance (see [`crate::app::prompt_validation`]). When a whole
//! section is absent, the section path itself is recorded ahead of its
//! member paths.

use serde_json::{json, Map, Value};

/// Fill system defaults into a raw prompt document.
///
/// Returns the updated document together with the list of field paths that
/// were defaulted, in application order. The input is never mutated.
/// Non-object documents are returned unchanged with an empty path list.
pub fn apply_defaults(document: &Value) -> (Value, Vec<String>) {
    let mut updated = document.clone();
    let mut applied = Vec::new();

    if let Some(map) = updated.as_object_mut() {
        fill_sections(map, &mut applied);
    }

    if !applied.is_empty() {
        log_debug!("Applied {} prompt defaults: {:?}", applied.len(), applied);
    }

    (updated, applied)
}

fn fill_sections(map: &mut Map<String, Value>, applied: &mut Vec<String>) {
    if map.get("style").map_or(true, Value::is_null) {
        map.insert(
            "style".to_string(),
            json!({
                "lighting": "soft daylight",
                "camera": "35mm lens",
                "film_stock": null,
                "aesthetics": null
            }),
        );
        applied.push("style".to_string());
        applied.push("style.lighting".to_string());
        applied.push("style.camera".to_string());
    } else if let Some(style) = map.get_mut("style").and_then(Value::as_object_mut) {
        fill_member(style, "style", "lighting", json!("soft daylight"), applied);
        fill_member(style, "style", "camera", json!("35mm lens"), applied);
    }

    if map.get("technical").map_or(true, Value::is_null) {
        map.insert(
            "technical".to_string(),
            json!({
                "aspect_ratio": "16:9",
                "seed": null,
                "cfg_scale": 7.0
            }),
        );
        applied.push("technical".to_string());
        applied.push("technical.aspect_ratio".to_string());
        applied.push("technical.cfg_scale".to_string());
    } else if let Some(technical) = map.get_mut("technical").and_then(Value::as_object_mut) {
        fill_member(technical, "technical", "aspect_ratio", json!("16:9"), applied);
        fill_member(technical, "technical", "cfg_scale", json!(7.0), applied);
    }

    if let Some(environment) = map.get_mut("environment").and_then(Value::as_object_mut) {
        fill_member(
            environment,
            "environment",
            "atmosphere",
            json!("natural ambient lighting"),
            applied,
        );
        fill_member(
            environment,
            "environment",
            "weather",
            json!("clear conditions"),
            applied,
        );
    }

    if let Some(subject) = map.get_mut("subject").and_then(Value::as_object_mut) {
        fill_member(subject, "subject", "attributes", json!([]), applied);
    }
}

/// Insert a default for one member if it is absent or null.
fn fill_member(
    section: &mut Map<String, Value>,
    section_path: &str,
    member: &str,
    default: Value,
    applied: &mut Vec<String>,
) {
    if section.get(member).map_or(true, Value::is_null) {
        section.insert(member.to_string(), default);
        applied.push(format!("{}.{}", section_path, member));
    }
}
