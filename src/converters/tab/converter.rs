//! Entry-by-entry tab conversion
//!
//! Each parsed entry is looked up on the source layout, and its pitch is
//! searched for on the target layout. An entry then either converts, is
//! dropped with an error (its hole does not exist on the source), or is
//! kept as a `[token]` placeholder with a warning (its pitch does not exist
//! on the target).

use crate::diagnostics::{DiagnosticMark, DiagnosticSeverity, Diagnostics};
use crate::layouts::{DiatonicLayout, HarmonicaLayout, HolePosition, TremoloLayout};
use crate::models::HarmonicaType;
use crate::parse::{DiatonicEntry, SourceLine, TabEntry, TremoloEntry};

use super::assembler::LineAssembler;
use super::errors::{ConversionError, ConversionWarning};
use super::types::ConversionReport;

/// What happened to a single entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Equivalent position on the target layout
    Converted(HolePosition),
    /// Valid on the source, no matching pitch on the target
    Unavailable(ConversionWarning),
    /// Hole does not exist on the source layout
    Invalid(ConversionError),
}

/// Convert one diatonic entry to a tremolo position with the same pitch and action
pub fn convert_diatonic_entry(
    entry: &DiatonicEntry,
    source: &DiatonicLayout,
    target: &impl HarmonicaLayout,
) -> EntryOutcome {
    let Some(pitch) = source.lookup_pitch(entry.hole, entry.action) else {
        return EntryOutcome::Invalid(ConversionError::InvalidHole {
            layout: HarmonicaType::Diatonic,
            hole: entry.hole_digits().to_string(),
        });
    };

    match target.find_hole_for_pitch(pitch, Some(entry.action)) {
        Some(position) => EntryOutcome::Converted(position),
        None => EntryOutcome::Unavailable(ConversionWarning::UnavailableOnTremolo {
            pitch,
            action: entry.action,
            token: entry.token.text.clone(),
        }),
    }
}

/// Convert one tremolo entry to a diatonic position with the same pitch
///
/// The diatonic action is whichever one sounds the pitch; the tremolo
/// hole's own action is not carried over.
pub fn convert_tremolo_entry(
    entry: &TremoloEntry,
    source: &TremoloLayout,
    target: &impl HarmonicaLayout,
) -> EntryOutcome {
    let Some(hole) = source.hole(entry.hole) else {
        return EntryOutcome::Invalid(ConversionError::InvalidHole {
            layout: HarmonicaType::Tremolo,
            hole: entry.hole.to_string(),
        });
    };

    match target.find_hole_for_pitch(hole.note, None) {
        Some(position) => EntryOutcome::Converted(position),
        None => EntryOutcome::Unavailable(ConversionWarning::UnavailableOnDiatonic {
            pitch: hole.note,
            token: entry.token.text.clone(),
        }),
    }
}

/// Run `convert` over every entry in order and rebuild the output text
///
/// `render` turns a converted position into its target-notation token.
pub fn assemble<E, C, R>(lines: &[SourceLine], entries: &[E], mut convert: C, render: R) -> ConversionReport
where
    E: TabEntry,
    C: FnMut(&E) -> EntryOutcome,
    R: Fn(&HolePosition) -> String,
{
    let mut output = LineAssembler::new(lines);
    let mut diagnostics = Diagnostics::new();

    for entry in entries {
        let token = entry.token();

        match convert(entry) {
            EntryOutcome::Converted(position) => {
                log::trace!("  {} -> {}", token.text, position);
                output.emit(token.line, render(&position));
            }
            EntryOutcome::Unavailable(warning) => {
                log::trace!("  {} unavailable: {}", token.text, warning);
                diagnostics.add(DiagnosticMark::at_token(
                    token,
                    DiagnosticSeverity::Warning,
                    warning.kind(),
                    warning.to_string(),
                ));
                output.emit(token.line, placeholder(&token.text));
            }
            EntryOutcome::Invalid(error) => {
                log::trace!("  {} dropped: {}", token.text, error);
                diagnostics.add(DiagnosticMark::at_token(
                    token,
                    DiagnosticSeverity::Error,
                    error.kind(),
                    error.to_string(),
                ));
            }
        }
    }

    ConversionReport {
        converted_tab: output.finish(),
        diagnostics,
    }
}

/// Marker left in the output where a token could not be converted
pub fn placeholder(raw_token: &str) -> String {
    format!("[{}]", raw_token)
}

/// Tremolo output is bare hole numbers
pub fn render_tremolo(position: &HolePosition) -> String {
    position.tremolo_token()
}

/// Diatonic output is signed hole numbers
pub fn render_diatonic(position: &HolePosition) -> String {
    position.diatonic_token()
}
