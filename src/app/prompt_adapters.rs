//! Model adapters: universal base prompt to model-specific payloads.
//!
//! Each supported image model consumes a different request shape, so the
//! structured prompt is flattened into the flat text that model expects and
//! the technical settings are passed through. Only payload assembly lives
//! here; sending the request is the host application's concern.
//!
//! The descriptive fields always flatten in the same order (subject,
//! attributes, environment, then style); the adapters differ in the part
//! separator and the envelope around the joined text.

use anyhow::{bail, Result};
use serde_json::{json, Value};

use crate::app::base_prompt::BasePrompt;

/// Image models with a request adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterModel {
    Flux,
    BananaPro,
}

impl AdapterModel {
    /// Resolve a model name, tolerating the aliases users type.
    pub fn from_name(model: &str) -> Result<Self> {
        match model.trim().to_lowercase().as_str() {
            "flux" => Ok(AdapterModel::Flux),
            "banana" | "banana-pro" | "nano banana" | "nano-banana" => Ok(AdapterModel::BananaPro),
            _ => bail!("Unknown model: {}", model),
        }
    }

    /// The wire name stamped into every payload.
    pub fn model_name(&self) -> &'static str {
        match self {
            AdapterModel::Flux => "flux",
            AdapterModel::BananaPro => "banana-pro",
        }
    }

    /// Translate a prompt into this model's request payload.
    pub fn adapt(&self, prompt: &BasePrompt) -> Value {
        log_trace!("Adapting prompt for model '{}'", self.model_name());
        match self {
            AdapterModel::Flux => adapt_flux(prompt),
            AdapterModel::BananaPro => adapt_banana(prompt),
        }
    }
}

/// Flatten the descriptive fields into one ordered part list, dropping
/// empty strings.
fn prompt_parts(prompt: &BasePrompt) -> Vec<String> {
    let mut parts = vec![prompt.subject.description.clone()];
    if let Some(attributes) = &prompt.subject.attributes {
        parts.extend(attributes.iter().cloned());
    }

    parts.push(prompt.environment.location.clone());
    if let Some(atmosphere) = &prompt.environment.atmosphere {
        parts.push(atmosphere.clone());
    }
    if let Some(weather) = &prompt.environment.weather {
        parts.push(weather.clone());
    }

    if let Some(style) = &prompt.style {
        for field in [&style.lighting, &style.camera, &style.film_stock] {
            if let Some(text) = field {
                parts.push(text.clone());
            }
        }
        if let Some(aesthetics) = &style.aesthetics {
            parts.extend(aesthetics.iter().cloned());
        }
    }

    parts.retain(|part| !part.is_empty());
    parts
}

/// Flux takes one comma-joined prompt string plus a settings block. Absent
/// technical fields pass through as explicit nulls.
fn adapt_flux(prompt: &BasePrompt) -> Value {
    let technical = prompt.technical.as_ref();
    json!({
        "model": "flux",
        "prompt": prompt_parts(prompt).join(", "),
        "settings": {
            "aspect_ratio": technical.and_then(|t| t.aspect_ratio.clone()),
            "seed": technical.and_then(|t| t.seed),
            "cfg_scale": technical.and_then(|t| t.cfg_scale),
        },
    })
}

/// Banana Pro takes a chat-shaped body with the sentence-joined prompt as
/// a single user part.
fn adapt_banana(prompt: &BasePrompt) -> Value {
    json!({
        "model": "banana-pro",
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt_parts(prompt).join(". ") }],
            }
        ],
    })
}
