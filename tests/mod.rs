//! Test suite for Promptdash.
//!
//! The suite is organized by core component so failures localize quickly:
//!
//! # Test Organization
//!
//! ## Document Engine Tests
//! **Purpose**: Validate path addressing, classification, and defaulting
//! **Coverage**: Core business logic without any UI dependencies
//!
//! - `prompt_paths_tests` - Path enumeration and round-trip resolution
//! - `prompt_validation_tests` - Emptiness, provenance, status classification
//! - `prompt_defaults_tests` - System defaulting and applied-path reporting
//! - `prompt_sections_tests` - Display section projection
//!
//! ## Schema Tests
//! **Purpose**: Validate the typed prompt model and producer envelope
//!
//! - `base_prompt_tests` - Serde round-trips and envelope pass-through
//!
//! ## Library Editing Tests
//! **Purpose**: Validate the tag input state machine and content parsing
//!
//! - `tag_input_tests` - Filtering, commit paths, batch entry, invariants
//! - `library_content_tests` - Lenient JSON parsing and section kinds
