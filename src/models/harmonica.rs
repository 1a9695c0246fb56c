//! Harmonica vocabulary shared by layouts, parser and converter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a hole is played: blow = exhale, draw = inhale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoleAction {
    Blow,
    Draw,
}

impl HoleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HoleAction::Blow => "blow",
            HoleAction::Draw => "draw",
        }
    }

    /// Sign used in diatonic tab notation ("+4" blow, "-4" draw)
    pub fn sign(&self) -> char {
        match self {
            HoleAction::Blow => '+',
            HoleAction::Draw => '-',
        }
    }

    /// Action for an optional diatonic sign; an unsigned token is a blow
    pub fn from_sign(sign: Option<char>) -> Option<HoleAction> {
        match sign {
            None | Some('+') => Some(HoleAction::Blow),
            Some('-') => Some(HoleAction::Draw),
            _ => None,
        }
    }
}

impl fmt::Display for HoleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two instrument notations a tab can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonicaType {
    /// 10 holes, blow and draw on every hole
    Diatonic,
    /// 24 holes, one fixed action per hole
    Tremolo,
}

impl HarmonicaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonicaType::Diatonic => "diatonic",
            HarmonicaType::Tremolo => "tremolo",
        }
    }

    /// The other notation
    pub fn opposite(&self) -> HarmonicaType {
        match self {
            HarmonicaType::Diatonic => HarmonicaType::Tremolo,
            HarmonicaType::Tremolo => HarmonicaType::Diatonic,
        }
    }
}

impl fmt::Display for HarmonicaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid harmonica type: '{0}'. Expected one of: diatonic, tremolo")]
pub struct InvalidHarmonicaType(pub String);

impl FromStr for HarmonicaType {
    type Err = InvalidHarmonicaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive parsing
        match s.trim().to_lowercase().as_str() {
            "diatonic" => Ok(HarmonicaType::Diatonic),
            "tremolo" => Ok(HarmonicaType::Tremolo),
            _ => Err(InvalidHarmonicaType(s.to_string())),
        }
    }
}
