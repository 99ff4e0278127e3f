//! Promptdash - Prompt Document Provenance and Tag Editing Core
//!
//! Promptdash is the reusable core behind a prompt-building UI: it annotates
//! AI-generated prompt documents with field-level provenance and validation
//! status, regroups them into semantic display sections, and drives the
//! tag-editing widget used on library items.
//!
//! # Core Features
//!
//! - **Path Addressing**: Enumerate every addressable field path in an
//!   arbitrary JSON prompt document
//! - **Provenance Tracking**: Decide whether a field's value was supplied
//!   upstream or filled in by a system default
//! - **Validation Status**: Classify every field as default-filled, missing,
//!   empty-but-optional, or explicitly set
//! - **Section Grouping**: Project a document into the fixed subjects /
//!   environment / style / technical display sections
//! - **Tag Autocomplete**: A deterministic state machine for the multi-value
//!   tag input, including suggestion filtering and normalization
//! - **Model Adapters**: Map the universal prompt schema into each image
//!   model's request payload format
//!
//! # Architecture Overview
//!
//! The crate is a pure library with no UI, network, or persistence layer.
//! Those concerns belong to the host application; everything here is a
//! synchronous function or an explicit state transition so it can be unit
//! tested without a UI runtime.
//!
//! - **Document Model** ([`app::base_prompt`]): Type-safe representation of
//!   the universal prompt schema plus the untyped [`serde_json::Value`] view
//!   most of the core operates on
//! - **Field Engine** ([`app::prompt_paths`], [`app::prompt_validation`],
//!   [`app::prompt_defaults`]): Path enumeration, emptiness, provenance, and
//!   status classification
//! - **Display Projection** ([`app::prompt_sections`]): Borrowing reshape of
//!   a document into display sections
//! - **Model Adapters** ([`app::prompt_adapters`]): Per-model request payload
//!   assembly from the typed schema
//! - **Tag Input** ([`app::tag_input`]): Event-driven autocomplete engine
//! - **Library Content** ([`app::library_content`]): Lenient JSON parsing for
//!   user-edited library item content

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
