//! Types for tab conversion results

use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticMark, DiagnosticSeverity, Diagnostics};
use crate::models::HarmonicaType;

use super::errors::ConversionError;

/// Which way a tab is being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConversionDirection {
    DiatonicToTremolo,
    TremoloToDiatonic,
}

impl ConversionDirection {
    /// Direction from `source` to `target`; `None` when they are the same
    pub fn between(source: HarmonicaType, target: HarmonicaType) -> Option<Self> {
        match (source, target) {
            (HarmonicaType::Diatonic, HarmonicaType::Tremolo) => Some(ConversionDirection::DiatonicToTremolo),
            (HarmonicaType::Tremolo, HarmonicaType::Diatonic) => Some(ConversionDirection::TremoloToDiatonic),
            _ => None,
        }
    }

    pub fn source(&self) -> HarmonicaType {
        match self {
            ConversionDirection::DiatonicToTremolo => HarmonicaType::Diatonic,
            ConversionDirection::TremoloToDiatonic => HarmonicaType::Tremolo,
        }
    }

    pub fn target(&self) -> HarmonicaType {
        self.source().opposite()
    }
}

/// Converted text plus every positioned issue found on the way
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub converted_tab: String,
    pub diagnostics: Diagnostics,
}

impl ConversionReport {
    /// Report for an input with nothing to convert
    pub fn failed(error: ConversionError) -> Self {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add(
            DiagnosticMark::new(0, 0, DiagnosticSeverity::Error, error.kind(), error.to_string())
                .with_len(0),
        );
        Self {
            converted_tab: String::new(),
            diagnostics,
        }
    }

    pub fn success(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

/// Outcome of converting a tab, as handed to the UI
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// True iff `errors` is empty; warnings never affect it
    pub success: bool,
    /// Empty when the input held no valid notation
    pub converted_tab: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<ConversionReport> for ConversionResult {
    fn from(report: ConversionReport) -> Self {
        let errors = report.diagnostics.messages(DiagnosticSeverity::Error);
        let warnings = report.diagnostics.messages(DiagnosticSeverity::Warning);
        Self {
            success: errors.is_empty(),
            converted_tab: report.converted_tab,
            errors,
            warnings,
        }
    }
}

/// A stored tab prepared for viewing in a (possibly different) notation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTab {
    /// Text to show: the converted tab, or the original when nothing converted
    pub hole_history: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// A conversion was attempted
    pub is_converted: bool,
    /// Conversion produced no text, so the original is shown instead
    pub used_fallback: bool,
}
