//! Tab conversion API
//!
//! JavaScript-facing wrappers around `converters::tab`. Results cross the
//! boundary as plain objects with camelCase fields.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{parse_arg, serialize};
use crate::converters::tab as converter;
use crate::converters::tab::{ConversionDirection, ConversionResult};
use crate::models::HarmonicaType;
use crate::{wasm_info, wasm_log, wasm_warn};

fn log_result(name: &str, result: &ConversionResult) {
    wasm_log!(
        "{}: {} errors, {} warnings",
        name,
        result.errors.len(),
        result.warnings.len()
    );
    if !result.success {
        wasm_warn!("{} failed: {}", name, result.errors.join("; "));
    }
}

/// Convert a diatonic tab to tremolo notation
///
/// Returns `{ success, convertedTab, errors, warnings }`.
#[wasm_bindgen(js_name = convertDiatonicToTremolo)]
pub fn convert_diatonic_to_tremolo(tab: &str) -> Result<JsValue, JsValue> {
    let result = converter::convert_diatonic_to_tremolo(tab);
    log_result("convertDiatonicToTremolo", &result);
    serialize(&result, "Failed to serialize conversion result")
}

/// Convert a tremolo tab to diatonic notation
///
/// Returns `{ success, convertedTab, errors, warnings }`.
#[wasm_bindgen(js_name = convertTremoloToDiatonic)]
pub fn convert_tremolo_to_diatonic(tab: &str) -> Result<JsValue, JsValue> {
    let result = converter::convert_tremolo_to_diatonic(tab);
    log_result("convertTremoloToDiatonic", &result);
    serialize(&result, "Failed to serialize conversion result")
}

/// Prepare a stored tab for display in another notation
///
/// # Parameters
/// * `tab` - Stored tab text
/// * `source_type` - "diatonic" or "tremolo", the notation the tab is stored in
/// * `target_type` - "diatonic" or "tremolo", the notation to show
///
/// Returns `{ holeHistory, errors, warnings, isConverted, usedFallback }`.
#[wasm_bindgen(js_name = tabForDisplay)]
pub fn tab_for_display(tab: &str, source_type: &str, target_type: &str) -> Result<JsValue, JsValue> {
    let source: HarmonicaType = parse_arg(source_type)?;
    let target: HarmonicaType = parse_arg(target_type)?;

    let display = converter::tab_for_display(tab, source, target);
    if display.used_fallback {
        wasm_warn!("tabForDisplay: {} -> {} produced nothing, showing original", source, target);
    }
    serialize(&display, "Failed to serialize display tab")
}

/// Positioned errors and warnings for converting `tab` out of `source_type`
///
/// Returns `{ convertedTab, diagnostics: { marks: [...] } }`.
#[wasm_bindgen(js_name = conversionDiagnostics)]
pub fn conversion_diagnostics(tab: &str, source_type: &str) -> Result<JsValue, JsValue> {
    let source: HarmonicaType = parse_arg(source_type)?;
    let direction = ConversionDirection::between(source, source.opposite())
        .ok_or_else(|| JsValue::from_str("Source and target notation are the same"))?;

    let report = converter::convert_with_diagnostics(tab, direction);
    wasm_info!(
        "conversionDiagnostics: {} marks for {:?}",
        report.diagnostics.marks.len(),
        direction
    );
    serialize(&report, "Failed to serialize conversion report")
}
