//! Harmonica tab converter WASM API
//!
//! This module provides the JavaScript-facing API. It includes shared
//! utilities for serialization, validation, and error handling, and the API
//! functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `convert`: Tab conversion and display-time notation switching
//! - `layout`: Navigator layouts, note finder and note options

pub mod helpers;
pub mod convert;
pub mod layout;

pub use convert::{convert_diatonic_to_tremolo, convert_tremolo_to_diatonic, tab_for_display, conversion_diagnostics};
pub use layout::{get_harmonica_layout, find_tab_from_note, generate_note_options};
