//! 10-hole diatonic layout (Richter tuning, key of C)
//!
//! Every hole carries two reeds: one sounds on blow, the other on draw.

use serde::Serialize;

use crate::layouts::{HarmonicaLayout, HolePosition};
use crate::models::{HoleAction, NoteName, Pitch};

/// Blow and draw pitches of one diatonic hole
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiatonicHole {
    pub blow: Pitch,
    pub draw: Pitch,
}

impl DiatonicHole {
    const fn new(blow: Pitch, draw: Pitch) -> Self {
        Self { blow, draw }
    }

    pub fn pitch(&self, action: HoleAction) -> Pitch {
        match action {
            HoleAction::Blow => self.blow,
            HoleAction::Draw => self.draw,
        }
    }
}

const fn p(name: NoteName, octave: i8) -> Pitch {
    Pitch::new(name, octave)
}

use NoteName::*;

/// Key-of-C diatonic, holes 1-10
const DIATONIC_C_HOLES: [DiatonicHole; 10] = [
    DiatonicHole::new(p(C, 4), p(D, 4)),
    DiatonicHole::new(p(E, 4), p(G, 4)),
    DiatonicHole::new(p(G, 4), p(B, 4)),
    DiatonicHole::new(p(C, 5), p(D, 5)),
    DiatonicHole::new(p(E, 5), p(F, 5)),
    DiatonicHole::new(p(G, 5), p(A, 5)),
    DiatonicHole::new(p(C, 6), p(B, 5)),
    DiatonicHole::new(p(E, 6), p(D, 6)),
    DiatonicHole::new(p(G, 6), p(F, 6)),
    DiatonicHole::new(p(C, 7), p(A, 6)),
];

/// Diatonic layout backed by a static table
#[derive(Clone, Copy, Debug)]
pub struct DiatonicLayout {
    holes: &'static [DiatonicHole],
}

/// The key-of-C diatonic harmonica used by the converter
pub const DIATONIC_C: DiatonicLayout = DiatonicLayout { holes: &DIATONIC_C_HOLES };

impl DiatonicLayout {
    pub fn hole(&self, hole: u32) -> Option<&DiatonicHole> {
        let index = (hole as usize).checked_sub(1)?;
        self.holes.get(index)
    }

    /// Holes paired with their 1-based numbers
    pub fn holes(&self) -> impl Iterator<Item = (u32, &DiatonicHole)> + '_ {
        self.holes.iter().enumerate().map(|(i, hole)| (i as u32 + 1, hole))
    }

    fn scan(&self, pitch: Pitch, action: HoleAction) -> Option<HolePosition> {
        self.holes()
            .find(|(_, hole)| hole.pitch(action) == pitch)
            .map(|(number, _)| HolePosition::new(number, action))
    }
}

impl HarmonicaLayout for DiatonicLayout {
    fn hole_count(&self) -> u32 {
        self.holes.len() as u32
    }

    fn lookup_pitch(&self, hole: u32, action: HoleAction) -> Option<Pitch> {
        self.hole(hole).map(|h| h.pitch(action))
    }

    fn find_hole_for_pitch(&self, pitch: Pitch, required_action: Option<HoleAction>) -> Option<HolePosition> {
        match required_action {
            Some(action) => self.scan(pitch, action),
            // Blow row first, then draw row. G4 sits on both +3 and -2; the
            // blow reading is the one a tremolo blow hole round-trips to.
            None => self
                .scan(pitch, HoleAction::Blow)
                .or_else(|| self.scan(pitch, HoleAction::Draw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(s: &str) -> Pitch {
        s.parse().unwrap()
    }

    #[test]
    fn test_lookup_by_action() {
        assert_eq!(DIATONIC_C.lookup_pitch(1, HoleAction::Blow), Some(pitch("C4")));
        assert_eq!(DIATONIC_C.lookup_pitch(1, HoleAction::Draw), Some(pitch("D4")));
        assert_eq!(DIATONIC_C.lookup_pitch(4, HoleAction::Blow), Some(pitch("C5")));
        assert_eq!(DIATONIC_C.lookup_pitch(7, HoleAction::Draw), Some(pitch("B5")));
        assert_eq!(DIATONIC_C.lookup_pitch(10, HoleAction::Draw), Some(pitch("A6")));
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert_eq!(DIATONIC_C.lookup_pitch(0, HoleAction::Blow), None);
        assert_eq!(DIATONIC_C.lookup_pitch(11, HoleAction::Draw), None);
        assert_eq!(DIATONIC_C.lookup_pitch(99, HoleAction::Blow), None);
    }

    #[test]
    fn test_blow_and_draw_differ_on_every_hole() {
        for (number, hole) in DIATONIC_C.holes() {
            assert_ne!(hole.blow, hole.draw, "hole {} repeats its pitch", number);
        }
        assert_eq!(DIATONIC_C.hole_count(), 10);
    }

    #[test]
    fn test_find_with_required_action() {
        assert_eq!(
            DIATONIC_C.find_hole_for_pitch(pitch("G4"), Some(HoleAction::Draw)),
            Some(HolePosition::new(2, HoleAction::Draw))
        );
        assert_eq!(
            DIATONIC_C.find_hole_for_pitch(pitch("G4"), Some(HoleAction::Blow)),
            Some(HolePosition::new(3, HoleAction::Blow))
        );
        assert_eq!(DIATONIC_C.find_hole_for_pitch(pitch("C4"), Some(HoleAction::Draw)), None);
    }

    #[test]
    fn test_find_any_action_reports_the_action() {
        assert_eq!(
            DIATONIC_C.find_hole_for_pitch(pitch("B4"), None),
            Some(HolePosition::new(3, HoleAction::Draw))
        );
        assert_eq!(
            DIATONIC_C.find_hole_for_pitch(pitch("C6"), None),
            Some(HolePosition::new(7, HoleAction::Blow))
        );
        // Shared pitch: blow row wins
        assert_eq!(
            DIATONIC_C.find_hole_for_pitch(pitch("G4"), None),
            Some(HolePosition::new(3, HoleAction::Blow))
        );
    }

    #[test]
    fn test_find_missing_pitch() {
        // Richter tuning has no F4 or A4
        assert_eq!(DIATONIC_C.find_hole_for_pitch(pitch("F4"), None), None);
        assert_eq!(DIATONIC_C.find_hole_for_pitch(pitch("A4"), None), None);
        assert_eq!(DIATONIC_C.find_hole_for_pitch(pitch("C#5"), None), None);
    }
}
