//! Harmonica Tab Converter WASM Module
//!
//! Converts harmonica tabs between 10-hole diatonic notation and 24-hole
//! tremolo notation, keeping the pitch of every note. The core is plain
//! Rust and usable natively; the `api` module exposes it to JavaScript.

pub mod models;
pub mod layouts;
pub mod parse;
pub mod diagnostics;
pub mod converters;
pub mod transposition;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use layouts::{HarmonicaLayout, HolePosition, DIATONIC_C, TREMOLO_C};
pub use converters::tab::{
    convert_diatonic_to_tremolo, convert_tremolo_to_diatonic, tab_for_display, ConversionResult,
    DisplayTab,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            wasm_warn!("logger already initialized: {}", e);
        }
    }

    log::info!("Harmonica tab converter WASM module initialized");
}
