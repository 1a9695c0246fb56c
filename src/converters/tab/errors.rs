//! Error and warning types for tab conversion
//!
//! Neither type is ever returned as `Err` from a conversion. Both are
//! accumulated per entry, and their `Display` output is the exact message a
//! caller shows to the user.

use thiserror::Error;

use crate::models::{HarmonicaType, HoleAction, Pitch};

/// Hard conversion errors; any of these makes the conversion unsuccessful
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The input contained no token matching the source grammar
    #[error("No valid {0} notation found")]
    NoValidNotation(HarmonicaType),

    /// A token parsed, but its hole does not exist on the source layout
    ///
    /// `hole` is the number as written, so it may exceed any integer type.
    #[error("Invalid {layout} hole: {hole}")]
    InvalidHole { layout: HarmonicaType, hole: String },
}

impl ConversionError {
    /// Diagnostic kind identifier
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::NoValidNotation(_) => "no_valid_notation",
            ConversionError::InvalidHole { .. } => "invalid_hole",
        }
    }
}

/// Soft conversion issues: the token is valid but has no equivalent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionWarning {
    #[error("Note {pitch} ({action}) from {token} not available on tremolo harmonica")]
    UnavailableOnTremolo {
        pitch: Pitch,
        action: HoleAction,
        token: String,
    },

    #[error("Note {pitch} from tremolo hole {token} not available on diatonic harmonica")]
    UnavailableOnDiatonic { pitch: Pitch, token: String },
}

impl ConversionWarning {
    /// Diagnostic kind identifier
    pub fn kind(&self) -> &'static str {
        "pitch_unavailable"
    }
}
