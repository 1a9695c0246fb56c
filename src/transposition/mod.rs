//! Key-dependent hole layouts
//!
//! The navigator layout is stored for key C and transposed on request.

pub mod navigator;

pub use navigator::{find_tab_for_note, navigator_layout, note_options, NAVIGATOR_C};
