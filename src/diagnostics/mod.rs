//! Diagnostics for tab conversion
//!
//! Every error and warning raised while converting a tab is recorded as a
//! positioned mark, so a UI can highlight the exact token that could not be
//! converted. The flat `errors`/`warnings` string lists of a conversion
//! result are derived from these marks.

use serde::{Deserialize, Serialize};

use crate::parse::Token;

/// Severity level for diagnostic marks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A diagnostic mark highlighting an issue at a specific location
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMark {
    /// Line index in the source tab
    pub line: usize,
    /// Column (in characters) within the line
    pub col: usize,
    /// Length of the highlight in characters (0 for whole-input issues)
    pub len: usize,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "invalid_hole", "pitch_unavailable")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a new diagnostic mark
    pub fn new(
        line: usize,
        col: usize,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            col,
            len: 1,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Mark covering a whole token
    pub fn at_token(
        token: &Token,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(token.line, token.column, severity, kind, message).with_len(token.length)
    }

    /// Create with custom length (for range highlights)
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }
}

/// Collection of diagnostic marks for one conversion
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// All diagnostic marks, in the order they were raised
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Add a mark
    pub fn add(&mut self, mark: DiagnosticMark) {
        self.marks.push(mark);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Messages of every mark with the given severity, in order
    pub fn messages(&self, severity: DiagnosticSeverity) -> Vec<String> {
        self.marks
            .iter()
            .filter(|m| m.severity == severity)
            .map(|m| m.message.clone())
            .collect()
    }
}
