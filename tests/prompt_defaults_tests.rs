//! System defaulting tests.
//!
//! Covers the defaulting producer: which paths get filled, the order they
//! are reported in, and the integration with provenance classification.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use promptdash::app::prompt_defaults::apply_defaults;
    use promptdash::app::prompt_validation::{validation_status, ValidationStatus};
    use serde_json::json;

    #[test]
    fn fills_absent_sections_wholesale() {
        let (updated, applied) = apply_defaults(&json!({
            "subject": { "description": "violinist on a rooftop" },
            "environment": { "location": "Prague at dusk" }
        }));

        assert_eq!(
            applied,
            vec![
                "style",
                "style.lighting",
                "style.camera",
                "technical",
                "technical.aspect_ratio",
                "technical.cfg_scale",
                "environment.atmosphere",
                "environment.weather",
                "subject.attributes",
            ]
        );

        assert_eq!(updated["style"]["lighting"], json!("soft daylight"));
        assert_eq!(updated["style"]["camera"], json!("35mm lens"));
        assert_eq!(updated["style"]["film_stock"], json!(null));
        assert_eq!(updated["technical"]["aspect_ratio"], json!("16:9"));
        assert_eq!(updated["technical"]["cfg_scale"], json!(7.0));
        assert_eq!(updated["technical"]["seed"], json!(null));
        assert_eq!(
            updated["environment"]["atmosphere"],
            json!("natural ambient lighting")
        );
        assert_eq!(updated["environment"]["weather"], json!("clear conditions"));
        assert_eq!(updated["subject"]["attributes"], json!([]));
    }

    #[test]
    fn fills_only_missing_members_of_present_sections() {
        let (updated, applied) = apply_defaults(&json!({
            "style": { "lighting": "rim lighting from behind" },
            "technical": { "aspect_ratio": "4:5", "cfg_scale": null }
        }));

        assert_eq!(applied, vec!["style.camera", "technical.cfg_scale"]);
        assert_eq!(updated["style"]["lighting"], json!("rim lighting from behind"));
        assert_eq!(updated["style"]["camera"], json!("35mm lens"));
        assert_eq!(updated["technical"]["aspect_ratio"], json!("4:5"));
        assert_eq!(updated["technical"]["cfg_scale"], json!(7.0));
    }

    #[test]
    fn null_sections_count_as_absent() {
        let (updated, applied) = apply_defaults(&json!({ "style": null, "technical": null }));
        assert!(applied.contains(&"style".to_string()));
        assert!(applied.contains(&"technical".to_string()));
        assert!(updated["style"].is_object());
        assert!(updated["technical"].is_object());
    }

    #[test]
    fn environment_and_subject_are_not_synthesized() {
        // Defaulting fills members of present sections only; it never
        // invents the required sections themselves.
        let (updated, applied) = apply_defaults(&json!({}));
        assert!(updated.get("environment").is_none());
        assert!(updated.get("subject").is_none());
        assert!(!applied.iter().any(|p| p.starts_with("environment")));
        assert!(!applied.iter().any(|p| p.starts_with("subject")));
    }

    #[test]
    fn input_document_is_untouched() {
        let original = json!({ "style": { "lighting": null } });
        let before = original.clone();
        let _ = apply_defaults(&original);
        assert_eq!(original, before);
    }

    #[test]
    fn non_object_documents_pass_through() {
        let (updated, applied) = apply_defaults(&json!("free text"));
        assert_eq!(updated, json!("free text"));
        assert!(applied.is_empty());

        let (updated, applied) = apply_defaults(&json!(null));
        assert_eq!(updated, json!(null));
        assert!(applied.is_empty());
    }

    #[test]
    fn defaulted_fields_classify_as_default_provenance() {
        let (updated, applied) = apply_defaults(&json!({
            "subject": { "description": "violinist on a rooftop" },
            "environment": { "location": "Prague at dusk" }
        }));

        // Wholesale section default covers members not named individually.
        assert_eq!(
            validation_status(
                updated.pointer("/style/film_stock"),
                &applied,
                "style.film_stock",
                false
            ),
            ValidationStatus::Default
        );
        assert_eq!(
            validation_status(
                updated.pointer("/environment/weather"),
                &applied,
                "environment.weather",
                false
            ),
            ValidationStatus::Default
        );
        // Upstream-supplied fields stay explicit.
        assert_eq!(
            validation_status(
                updated.pointer("/environment/location"),
                &applied,
                "environment.location",
                true
            ),
            ValidationStatus::Set
        );
    }
}
