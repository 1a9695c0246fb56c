//! Diatonic <-> tremolo tab converter
//!
//! Translates harmonica tabs between the 10-hole diatonic notation (signed
//! hole numbers, "+4 -5") and the 24-hole tremolo notation (bare hole
//! numbers, "9 12"), keeping the sounding pitch of every note.
//!
//! # Overview
//!
//! 1. **Tokenize**: split the text into lines and whitespace-separated tokens
//! 2. **Parse**: keep the tokens that match the source grammar
//! 3. **Convert**: look each entry up on the source layout and search the
//!    target layout for the same pitch
//! 4. **Assemble**: rebuild the text line by line
//!
//! Conversion is best-effort. Tokens whose hole does not exist are errors
//! and are dropped; tokens whose pitch is missing on the target instrument
//! are warnings and stay in place as `[token]`. Only an input with no valid
//! notation at all produces an empty result.
//!
//! # Basic Usage
//!
//! ```
//! use harp_tab_wasm::converters::tab::convert_diatonic_to_tremolo;
//!
//! let result = convert_diatonic_to_tremolo("+4 -5 +6 -6 +7");
//! assert!(result.success);
//! assert_eq!(result.converted_tab, "9 12 13 14 15");
//! ```

pub mod assembler;
pub mod converter;
pub mod errors;
pub mod types;

pub use converter::EntryOutcome;
pub use errors::{ConversionError, ConversionWarning};
pub use types::{ConversionDirection, ConversionReport, ConversionResult, DisplayTab};

use crate::layouts::{DIATONIC_C, TREMOLO_C};
use crate::models::HarmonicaType;
use crate::parse::{diatonic_entries, tokenize, tremolo_entries};

/// Convert a diatonic tab to tremolo notation
pub fn convert_diatonic_to_tremolo(tab: &str) -> ConversionResult {
    convert_with_diagnostics(tab, ConversionDirection::DiatonicToTremolo).into()
}

/// Convert a tremolo tab to diatonic notation
pub fn convert_tremolo_to_diatonic(tab: &str) -> ConversionResult {
    convert_with_diagnostics(tab, ConversionDirection::TremoloToDiatonic).into()
}

/// Convert a tab, keeping the position of every error and warning
pub fn convert_with_diagnostics(tab: &str, direction: ConversionDirection) -> ConversionReport {
    use converter::{
        assemble, convert_diatonic_entry, convert_tremolo_entry, render_diatonic, render_tremolo,
    };

    let lines = tokenize(tab);

    let report = match direction {
        ConversionDirection::DiatonicToTremolo => {
            let entries = diatonic_entries(&lines);
            log::debug!("diatonic -> tremolo: {} entries on {} lines", entries.len(), lines.len());
            if entries.is_empty() {
                return ConversionReport::failed(ConversionError::NoValidNotation(direction.source()));
            }
            assemble(
                &lines,
                &entries,
                |entry| convert_diatonic_entry(entry, &DIATONIC_C, &TREMOLO_C),
                render_tremolo,
            )
        }
        ConversionDirection::TremoloToDiatonic => {
            let entries = tremolo_entries(&lines);
            log::debug!("tremolo -> diatonic: {} entries on {} lines", entries.len(), lines.len());
            if entries.is_empty() {
                return ConversionReport::failed(ConversionError::NoValidNotation(direction.source()));
            }
            assemble(
                &lines,
                &entries,
                |entry| convert_tremolo_entry(entry, &TREMOLO_C, &DIATONIC_C),
                render_diatonic,
            )
        }
    };

    if !report.diagnostics.is_empty() {
        log::debug!("  {} diagnostics raised", report.diagnostics.marks.len());
    }

    report
}

/// Prepare a stored tab for viewing as `target`
///
/// When the tab is already in the target notation it is returned untouched.
/// Otherwise it is converted; if conversion yields no text at all, the
/// original tab is shown and `used_fallback` is set.
pub fn tab_for_display(tab: &str, source: HarmonicaType, target: HarmonicaType) -> DisplayTab {
    let Some(direction) = ConversionDirection::between(source, target) else {
        return DisplayTab {
            hole_history: tab.to_string(),
            errors: Vec::new(),
            warnings: Vec::new(),
            is_converted: false,
            used_fallback: false,
        };
    };

    let result = ConversionResult::from(convert_with_diagnostics(tab, direction));
    let used_fallback = result.converted_tab.is_empty();

    DisplayTab {
        hole_history: if used_fallback {
            tab.to_string()
        } else {
            result.converted_tab
        },
        errors: result.errors,
        warnings: result.warnings,
        is_converted: true,
        used_fallback,
    }
}
