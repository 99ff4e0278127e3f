//! Typed prompt schema tests.
//!
//! Covers serde round-trips of the universal prompt schema, optional-field
//! skipping on the wire, and the producer response envelope.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use promptdash::app::base_prompt::{
        BasePrompt, Environment, GeneratedPrompt, Style, Subject, TechSpecs,
    };
    use serde_json::json;

    fn minimal_prompt() -> BasePrompt {
        BasePrompt {
            subject: Subject {
                description: "lighthouse keeper, 60s, weathered hands".to_string(),
                attributes: None,
            },
            environment: Environment {
                location: "rocky Breton coastline".to_string(),
                atmosphere: None,
                weather: None,
            },
            style: None,
            technical: None,
        }
    }

    #[test]
    fn optional_fields_are_skipped_on_the_wire() {
        let value = minimal_prompt().to_value().unwrap();
        assert_eq!(
            value,
            json!({
                "subject": { "description": "lighthouse keeper, 60s, weathered hands" },
                "environment": { "location": "rocky Breton coastline" }
            })
        );
    }

    #[test]
    fn full_prompt_round_trips() {
        let prompt = BasePrompt {
            style: Some(Style {
                lighting: Some("golden hour sun".to_string()),
                camera: Some("35mm lens".to_string()),
                film_stock: None,
                aesthetics: Some(vec!["muted palette".to_string()]),
            }),
            technical: Some(TechSpecs {
                aspect_ratio: Some("16:9".to_string()),
                seed: Some(42),
                cfg_scale: Some(7.0),
                resolution: Some(json!({ "width": 1024, "height": 1536 })),
                ..Default::default()
            }),
            ..minimal_prompt()
        };

        let value = prompt.to_value().unwrap();
        let back = BasePrompt::from_value(&value).unwrap();
        assert_eq!(back, prompt);
    }

    #[test]
    fn resolution_accepts_string_or_object() {
        let with_string = json!({
            "subject": { "description": "x" },
            "environment": { "location": "y" },
            "technical": { "resolution": "1024x1536" }
        });
        let with_object = json!({
            "subject": { "description": "x" },
            "environment": { "location": "y" },
            "technical": { "resolution": { "width": 1024, "height": 1536 } }
        });
        assert!(BasePrompt::from_value(&with_string).is_ok());
        assert!(BasePrompt::from_value(&with_object).is_ok());
    }

    #[test]
    fn schema_violations_fail_typed_parsing() {
        // The untyped engine tolerates this shape; the typed parser does not.
        let missing_environment = json!({ "subject": { "description": "x" } });
        assert!(BasePrompt::from_value(&missing_environment).is_err());
    }

    #[test]
    fn envelope_carries_defaults_and_warnings_through() {
        let body = r#"{
            "base_prompt": {
                "subject": { "description": "x" },
                "environment": { "location": "y" },
                "style": { "lighting": "soft daylight" }
            },
            "defaults_applied": ["style", "style.lighting"],
            "warnings": ["prompt below recommended word count"]
        }"#;

        let generated = GeneratedPrompt::from_json(body).unwrap();
        assert_eq!(
            generated.defaults_applied,
            vec!["style".to_string(), "style.lighting".to_string()]
        );
        assert_eq!(
            generated.warnings,
            vec!["prompt below recommended word count".to_string()]
        );
        assert_eq!(
            generated.base_prompt["style"]["lighting"],
            json!("soft daylight")
        );
    }

    #[test]
    fn envelope_defaults_to_empty_lists() {
        let generated =
            GeneratedPrompt::from_json(r#"{ "base_prompt": { "anything": true } }"#).unwrap();
        assert!(generated.defaults_applied.is_empty());
        assert!(generated.warnings.is_empty());
    }
}
