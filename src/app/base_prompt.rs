//! Universal prompt schema types.
//!
//! The upstream text-analysis service turns a free-text scene description
//! into a model-agnostic "base prompt": a nested document describing the
//! subject, environment, style, and technical parameters of an image. This
//! module provides the typed representation of that schema along with the
//! response envelope the producer delivers it in.
//!
//! Most of the core deliberately works on the untyped [`serde_json::Value`]
//! form instead, because generated documents routinely carry extra or
//! missing fields and the annotation engine must tolerate any shape. The
//! typed structs are for code that builds or edits prompts deliberately.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The core subject of a prompt.
///
/// The description is the anchor of the whole prompt and should carry a
/// specific identity, for example "Valentina Ruiz, 22, Colombian-Lebanese
/// student from Medellín". Attributes add optional detail such as clothing
/// or facial structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
}

/// Where the scene takes place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Location or setting with a geographic anchor.
    pub location: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub atmosphere: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
}

/// Visual treatment of the scene. Every field is optional; absent fields
/// are filled by [`crate::app::prompt_defaults::apply_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_stock: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aesthetics: Option<Vec<String>>,
}

/// Generation parameters passed through to the image model.
///
/// `resolution` stays untyped because producers emit either a string like
/// `"1024x1536"` or a `{width, height}` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cfg_scale: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampler: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
}

/// Universal, model-agnostic prompt schema.
///
/// Adapters translate this schema into each image model's target format.
/// `subject` and `environment` are required; `style` and `technical` are
/// optional and subject to system defaulting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasePrompt {
    pub subject: Subject,
    pub environment: Environment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<TechSpecs>,
}

impl BasePrompt {
    /// Parse a typed prompt from an untyped document.
    pub fn from_value(value: &Value) -> Result<Self> {
        let prompt = serde_json::from_value(value.clone())?;
        Ok(prompt)
    }

    /// Convert the typed prompt into the untyped document form the
    /// annotation engine consumes.
    pub fn to_value(&self) -> Result<Value> {
        let value = serde_json::to_value(self)?;
        Ok(value)
    }
}

/// Response envelope delivered by the upstream prompt producer.
///
/// `defaults_applied` lists every field path whose subtree was populated by
/// a system default instead of upstream data. `warnings` are free-text,
/// document-level messages; they are passed through to the UI unchanged and
/// never influence per-field classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub base_prompt: Value,

    #[serde(default)]
    pub defaults_applied: Vec<String>,

    #[serde(default)]
    pub warnings: Vec<String>,
}

impl GeneratedPrompt {
    /// Parse a producer response body.
    pub fn from_json(json_content: &str) -> Result<Self> {
        let generated = serde_json::from_str(json_content)?;
        Ok(generated)
    }
}
