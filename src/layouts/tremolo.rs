//! Single-action layouts
//!
//! Each hole sounds exactly one pitch with exactly one action. The 24-hole
//! tremolo table is the converter's target/source; the same shape also backs
//! the keyed navigator layouts built in `transposition`.

use serde::Serialize;
use std::borrow::Cow;

use crate::layouts::{HarmonicaLayout, HolePosition};
use crate::models::{HoleAction, NoteName, Pitch};

/// The one pitch and action of a single-action hole
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TremoloHole {
    pub action: HoleAction,
    pub note: Pitch,
}

impl TremoloHole {
    pub const fn new(action: HoleAction, note: Pitch) -> Self {
        Self { action, note }
    }

    const fn blow(name: NoteName, octave: i8) -> Self {
        Self::new(HoleAction::Blow, Pitch::new(name, octave))
    }

    const fn draw(name: NoteName, octave: i8) -> Self {
        Self::new(HoleAction::Draw, Pitch::new(name, octave))
    }
}

use NoteName::*;

/// Key-of-C 24-hole tremolo, holes 1-24 (odd holes blow, even holes draw)
const TREMOLO_C_HOLES: [TremoloHole; 24] = [
    TremoloHole::blow(G, 3),
    TremoloHole::draw(D, 4),
    TremoloHole::blow(C, 4),
    TremoloHole::draw(F, 4),
    TremoloHole::blow(E, 4),
    TremoloHole::draw(A, 4),
    TremoloHole::blow(G, 4),
    TremoloHole::draw(B, 4),
    TremoloHole::blow(C, 5),
    TremoloHole::draw(D, 5),
    TremoloHole::blow(E, 5),
    TremoloHole::draw(F, 5),
    TremoloHole::blow(G, 5),
    TremoloHole::draw(A, 5),
    TremoloHole::blow(C, 6),
    TremoloHole::draw(B, 5),
    TremoloHole::blow(E, 6),
    TremoloHole::draw(D, 6),
    TremoloHole::blow(G, 6),
    TremoloHole::draw(F, 6),
    TremoloHole::blow(C, 7),
    TremoloHole::draw(A, 6),
    TremoloHole::blow(E, 7),
    TremoloHole::draw(B, 6),
];

/// Single-action layout, either a static table or a derived (transposed) one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TremoloLayout {
    holes: Cow<'static, [TremoloHole]>,
}

/// The key-of-C tremolo harmonica used by the converter
pub const TREMOLO_C: TremoloLayout = TremoloLayout {
    holes: Cow::Borrowed(&TREMOLO_C_HOLES),
};

impl TremoloLayout {
    pub const fn from_static(holes: &'static [TremoloHole]) -> Self {
        Self { holes: Cow::Borrowed(holes) }
    }

    pub fn from_holes(holes: Vec<TremoloHole>) -> Self {
        Self { holes: Cow::Owned(holes) }
    }

    pub fn hole(&self, hole: u32) -> Option<&TremoloHole> {
        let index = (hole as usize).checked_sub(1)?;
        self.holes.get(index)
    }

    /// Holes paired with their 1-based numbers
    pub fn holes(&self) -> impl Iterator<Item = (u32, &TremoloHole)> + '_ {
        self.holes.iter().enumerate().map(|(i, hole)| (i as u32 + 1, hole))
    }

    /// Copy of this layout with every pitch shifted by `semitones`
    pub fn transposed(&self, semitones: i32) -> TremoloLayout {
        if semitones == 0 {
            return self.clone();
        }
        TremoloLayout::from_holes(
            self.holes
                .iter()
                .map(|hole| TremoloHole::new(hole.action, hole.note.transpose(semitones)))
                .collect(),
        )
    }
}

impl HarmonicaLayout for TremoloLayout {
    fn hole_count(&self) -> u32 {
        self.holes.len() as u32
    }

    fn lookup_pitch(&self, hole: u32, action: HoleAction) -> Option<Pitch> {
        self.hole(hole)
            .filter(|h| h.action == action)
            .map(|h| h.note)
    }

    fn find_hole_for_pitch(&self, pitch: Pitch, required_action: Option<HoleAction>) -> Option<HolePosition> {
        self.holes()
            .find(|(_, hole)| {
                hole.note == pitch && required_action.map_or(true, |action| hole.action == action)
            })
            .map(|(number, hole)| HolePosition::new(number, hole.action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(s: &str) -> Pitch {
        s.parse().unwrap()
    }

    #[test]
    fn test_table_alternates_blow_and_draw() {
        assert_eq!(TREMOLO_C.hole_count(), 24);
        for (number, hole) in TREMOLO_C.holes() {
            let expected = if number % 2 == 1 { HoleAction::Blow } else { HoleAction::Draw };
            assert_eq!(hole.action, expected, "hole {}", number);
        }
    }

    #[test]
    fn test_lookup_requires_fixed_action() {
        assert_eq!(TREMOLO_C.lookup_pitch(7, HoleAction::Blow), Some(pitch("G4")));
        assert_eq!(TREMOLO_C.lookup_pitch(7, HoleAction::Draw), None);
        assert_eq!(TREMOLO_C.lookup_pitch(8, HoleAction::Draw), Some(pitch("B4")));
        assert_eq!(TREMOLO_C.lookup_pitch(25, HoleAction::Blow), None);
        assert_eq!(TREMOLO_C.lookup_pitch(0, HoleAction::Blow), None);
    }

    #[test]
    fn test_find_with_required_action() {
        assert_eq!(
            TREMOLO_C.find_hole_for_pitch(pitch("C5"), Some(HoleAction::Blow)),
            Some(HolePosition::new(9, HoleAction::Blow))
        );
        assert_eq!(
            TREMOLO_C.find_hole_for_pitch(pitch("F5"), Some(HoleAction::Draw)),
            Some(HolePosition::new(12, HoleAction::Draw))
        );
        // G4 only exists as a blow on the tremolo
        assert_eq!(TREMOLO_C.find_hole_for_pitch(pitch("G4"), Some(HoleAction::Draw)), None);
    }

    #[test]
    fn test_find_any_action() {
        assert_eq!(
            TREMOLO_C.find_hole_for_pitch(pitch("G4"), None),
            Some(HolePosition::new(7, HoleAction::Blow))
        );
        assert_eq!(TREMOLO_C.find_hole_for_pitch(pitch("C#4"), None), None);
    }

    #[test]
    fn test_transposed_keeps_actions() {
        let up = TREMOLO_C.transposed(2);
        assert_eq!(up.hole_count(), 24);
        assert_eq!(up.hole(1), Some(&TremoloHole::new(HoleAction::Blow, pitch("A3"))));
        assert_eq!(up.hole(24), Some(&TremoloHole::new(HoleAction::Draw, pitch("C#7"))));
        assert_eq!(TREMOLO_C.transposed(0), TREMOLO_C);
    }
}
