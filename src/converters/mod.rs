//! Format converters
//!
//! This module contains converters between harmonica tab notations.

pub mod tab;

// Re-export for convenience
pub use tab::{
    convert_diatonic_to_tremolo,
    convert_tremolo_to_diatonic,
    convert_with_diagnostics,
    tab_for_display,
    ConversionDirection,
    ConversionReport,
    ConversionResult,
    DisplayTab,
};
