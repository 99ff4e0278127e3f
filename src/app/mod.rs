//! Core modules for Promptdash.
//!
//! This module contains the business logic for prompt document annotation
//! and the tag-editing state machine. Nothing here performs I/O; documents
//! and suggestion lists arrive fully formed from the host application.
//!
//! # Module Organization
//!
//! ## Document Engine
//! - [`base_prompt`] - Typed universal prompt schema and producer envelope
//! - [`prompt_paths`] - Field path enumeration and resolution
//! - [`prompt_validation`] - Emptiness, provenance, and status classification
//! - [`prompt_defaults`] - System defaulting with applied-path reporting
//! - [`prompt_sections`] - Projection into semantic display sections
//! - [`prompt_adapters`] - Model-specific request payload assembly
//!
//! ## Library Editing
//! - [`tag_input`] - Tag autocomplete input state machine
//! - [`library_content`] - Lenient JSON parsing for library item content
//!
//! # Architecture
//!
//! The document engine layers bottom-up: [`prompt_paths`] defines the path
//! notation, [`prompt_validation`] combines paths with the defaults-applied
//! list produced by [`prompt_defaults`] (or by the upstream service), and
//! [`prompt_sections`] reshapes the finished document for display, and
//! [`prompt_adapters`] turns the typed schema into generation request
//! payloads. The tag input is independent of all of them.

pub mod base_prompt;
pub mod library_content;
pub mod prompt_adapters;
pub mod prompt_defaults;
pub mod prompt_paths;
pub mod prompt_sections;
pub mod prompt_validation;
pub mod tag_input;

pub use base_prompt::{BasePrompt, GeneratedPrompt};
pub use prompt_adapters::AdapterModel;
pub use prompt_sections::PromptSections;
pub use prompt_validation::ValidationStatus;
pub use tag_input::TagInput;
