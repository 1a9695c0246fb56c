//! Keys a harmonica can be pitched in
//!
//! Represents the 12 keys harmonicas are commonly sold in, listed from the
//! lowest (G) upward. Flat-named keys keep their flat names even though the
//! pitches they produce are spelled with sharps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::pitch::NoteName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonicaKey {
    G,
    Ab,
    A,
    Bb,
    B,
    C,
    Db,
    D,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
}

impl HarmonicaKey {
    pub const ALL: [HarmonicaKey; 12] = [
        HarmonicaKey::G,
        HarmonicaKey::Ab,
        HarmonicaKey::A,
        HarmonicaKey::Bb,
        HarmonicaKey::B,
        HarmonicaKey::C,
        HarmonicaKey::Db,
        HarmonicaKey::D,
        HarmonicaKey::Eb,
        HarmonicaKey::E,
        HarmonicaKey::F,
        HarmonicaKey::Fs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonicaKey::G => "G",
            HarmonicaKey::Ab => "Ab",
            HarmonicaKey::A => "A",
            HarmonicaKey::Bb => "Bb",
            HarmonicaKey::B => "B",
            HarmonicaKey::C => "C",
            HarmonicaKey::Db => "Db",
            HarmonicaKey::D => "D",
            HarmonicaKey::Eb => "Eb",
            HarmonicaKey::E => "E",
            HarmonicaKey::F => "F",
            HarmonicaKey::Fs => "F#",
        }
    }

    /// Chromatic note the key is named after
    pub fn note_name(&self) -> NoteName {
        match self {
            HarmonicaKey::G => NoteName::G,
            HarmonicaKey::Ab => NoteName::Gs,
            HarmonicaKey::A => NoteName::A,
            HarmonicaKey::Bb => NoteName::As,
            HarmonicaKey::B => NoteName::B,
            HarmonicaKey::C => NoteName::C,
            HarmonicaKey::Db => NoteName::Cs,
            HarmonicaKey::D => NoteName::D,
            HarmonicaKey::Eb => NoteName::Ds,
            HarmonicaKey::E => NoteName::E,
            HarmonicaKey::F => NoteName::F,
            HarmonicaKey::Fs => NoteName::Fs,
        }
    }

    /// Semitones above C within the same octave (0 for C, 7 for G)
    pub fn semitones_from_c(&self) -> i32 {
        self.note_name().index() as i32 - NoteName::C.index() as i32
    }
}

impl fmt::Display for HarmonicaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid harmonica key: '{0}'. Expected one of: G, Ab, A, Bb, B, C, Db, D, Eb, E, F, F#")]
pub struct InvalidHarmonicaKey(pub String);

impl FromStr for HarmonicaKey {
    type Err = InvalidHarmonicaKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HarmonicaKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidHarmonicaKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("C".parse::<HarmonicaKey>().unwrap(), HarmonicaKey::C);
        assert_eq!("F#".parse::<HarmonicaKey>().unwrap(), HarmonicaKey::Fs);
        assert_eq!("bb".parse::<HarmonicaKey>().unwrap(), HarmonicaKey::Bb);
        assert!("C#".parse::<HarmonicaKey>().is_err());
        assert!("".parse::<HarmonicaKey>().is_err());
    }

    #[test]
    fn test_semitones_from_c() {
        assert_eq!(HarmonicaKey::C.semitones_from_c(), 0);
        assert_eq!(HarmonicaKey::D.semitones_from_c(), 2);
        assert_eq!(HarmonicaKey::G.semitones_from_c(), 7);
        assert_eq!(HarmonicaKey::Fs.semitones_from_c(), 6);
        assert_eq!(HarmonicaKey::Bb.semitones_from_c(), 10);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&HarmonicaKey::Fs).unwrap();
        assert_eq!(json, "\"F#\"");

        let parsed: HarmonicaKey = serde_json::from_str("\"Eb\"").unwrap();
        assert_eq!(parsed, HarmonicaKey::Eb);
    }
}
