//! Sounding pitches as they appear in the harmonica tables
//!
//! A pitch is a chromatic note name plus an octave number ("C4", "F#5").
//! Names are always spelled with sharps; flat spellings are accepted when
//! parsing and normalized to their sharp equivalent.
//!
//! Two pitches are equal only when both name and octave match. "C4" and
//! "C5" are different pitches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The twelve chromatic note names, sharp-spelled, in ascending order from C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteName {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl NoteName {
    /// All names in chromatic order
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::Cs,
        NoteName::D,
        NoteName::Ds,
        NoteName::E,
        NoteName::F,
        NoteName::Fs,
        NoteName::G,
        NoteName::Gs,
        NoteName::A,
        NoteName::As,
        NoteName::B,
    ];

    /// Semitone offset above C (0-11)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Note name for a semitone offset, wrapping modulo 12
    pub fn from_index(index: i32) -> NoteName {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::B => "B",
        }
    }

    /// Parse a note name in either sharp or flat spelling
    ///
    /// Examples:
    ///   "C#" → Cs
    ///   "Db" → Cs
    ///   "Bb" → As
    pub fn from_name(s: &str) -> Option<NoteName> {
        match s {
            "C" => Some(NoteName::C),
            "C#" | "Db" => Some(NoteName::Cs),
            "D" => Some(NoteName::D),
            "D#" | "Eb" => Some(NoteName::Ds),
            "E" => Some(NoteName::E),
            "F" => Some(NoteName::F),
            "F#" | "Gb" => Some(NoteName::Fs),
            "G" => Some(NoteName::G),
            "G#" | "Ab" => Some(NoteName::Gs),
            "A" => Some(NoteName::A),
            "A#" | "Bb" => Some(NoteName::As),
            "B" => Some(NoteName::B),
            _ => None,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note name in a specific octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    octave: i8,
    name: NoteName,
}

impl Pitch {
    pub const fn new(name: NoteName, octave: i8) -> Self {
        Self { octave, name }
    }

    pub fn name(&self) -> NoteName {
        self.name
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// Shift by a number of semitones, carrying into the octave
    ///
    /// The result is always sharp-spelled: C4 + 1 → C#4, B4 + 1 → C5.
    /// The octave saturates at the ends of the `i8` range.
    pub fn transpose(&self, semitones: i32) -> Pitch {
        let shifted = (self.name.index() as i32).saturating_add(semitones);
        let octave = (self.octave as i32).saturating_add(shifted.div_euclid(12));
        Pitch {
            name: NoteName::from_index(shifted),
            octave: octave.clamp(i8::MIN as i32, i8::MAX as i32) as i8,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid pitch: '{0}'. Expected a note name followed by an octave, e.g. C4 or F#5")]
pub struct InvalidPitch(pub String);

impl FromStr for Pitch {
    type Err = InvalidPitch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits_at = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| InvalidPitch(s.to_string()))?;
        let (name, octave) = s.split_at(digits_at);

        let name = NoteName::from_name(name).ok_or_else(|| InvalidPitch(s.to_string()))?;
        let octave = octave.parse::<i8>().map_err(|_| InvalidPitch(s.to_string()))?;

        Ok(Pitch::new(name, octave))
    }
}

impl TryFrom<String> for Pitch {
    type Error = InvalidPitch;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}
