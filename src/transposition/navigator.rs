//! Keyed navigator layout
//!
//! The hole navigator and note finder work on a 21-hole, one-action-per-hole
//! layout rather than on the converter tables. The key-of-C table below is
//! the base; every other key shifts all pitches up by the key's distance
//! from C.
//!
//! Example (key of G, +7 semitones):
//!   hole 1  blow C4 → G4
//!   hole 21 blow B6 → F#7

use crate::layouts::{HarmonicaLayout, HolePosition, TremoloHole, TremoloLayout};
use crate::models::{HarmonicaKey, HoleAction, NoteName, Pitch};

use NoteName::*;

const fn blow(name: NoteName, octave: i8) -> TremoloHole {
    TremoloHole::new(HoleAction::Blow, Pitch::new(name, octave))
}

const fn draw(name: NoteName, octave: i8) -> TremoloHole {
    TremoloHole::new(HoleAction::Draw, Pitch::new(name, octave))
}

const NAVIGATOR_C_HOLES: [TremoloHole; 21] = [
    blow(C, 4),
    draw(D, 4),
    blow(E, 4),
    draw(F, 4),
    blow(G, 4),
    draw(A, 4),
    blow(B, 4),
    draw(C, 5),
    blow(D, 5),
    draw(E, 5),
    blow(F, 5),
    draw(G, 5),
    blow(A, 5),
    draw(B, 5),
    blow(C, 6),
    draw(D, 6),
    blow(E, 6),
    draw(F, 6),
    blow(G, 6),
    draw(A, 6),
    blow(B, 6),
];

/// Key-of-C navigator layout
pub const NAVIGATOR_C: TremoloLayout = TremoloLayout::from_static(&NAVIGATOR_C_HOLES);

/// Lowest and highest octave offered by `note_options`
const NOTE_OPTION_OCTAVES: std::ops::RangeInclusive<i8> = 3..=7;

/// Navigator layout for a harmonica in `key`
pub fn navigator_layout(key: HarmonicaKey) -> TremoloLayout {
    if key == HarmonicaKey::C {
        return NAVIGATOR_C;
    }
    log::debug!("transposing navigator layout to {} ({:+} semitones)", key, key.semitones_from_c());
    NAVIGATOR_C.transposed(key.semitones_from_c())
}

/// First hole (lowest number) that sounds `pitch`, with its action
pub fn find_tab_for_note(layout: &TremoloLayout, pitch: Pitch) -> Option<HolePosition> {
    layout.find_hole_for_pitch(pitch, None)
}

/// Every chromatic pitch from C3 to B7, in ascending order
pub fn note_options() -> Vec<Pitch> {
    NOTE_OPTION_OCTAVES
        .flat_map(|octave| NoteName::ALL.iter().map(move |&name| Pitch::new(name, octave)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pitch(s: &str) -> Pitch {
        s.parse().unwrap()
    }

    #[test]
    fn test_key_of_c_is_base_table() {
        let layout = navigator_layout(HarmonicaKey::C);
        assert_eq!(layout, NAVIGATOR_C);
        assert_eq!(layout.hole_count(), 21);
        assert_eq!(layout.hole(1), Some(&TremoloHole::new(HoleAction::Blow, pitch("C4"))));
        assert_eq!(layout.hole(21), Some(&TremoloHole::new(HoleAction::Blow, pitch("B6"))));
    }

    #[test]
    fn test_key_of_g_transposes_up_a_fifth() {
        let layout = navigator_layout(HarmonicaKey::G);
        assert_eq!(layout.hole(1).map(|h| h.note), Some(pitch("G4")));
        assert_eq!(layout.hole(2).map(|h| h.note), Some(pitch("A4")));
        assert_eq!(layout.hole(21).map(|h| h.note), Some(pitch("F#7")));
        assert_eq!(layout.hole(2).map(|h| h.action), Some(HoleAction::Draw));
    }

    #[test]
    fn test_flat_keys_spell_with_sharps() {
        let layout = navigator_layout(HarmonicaKey::Bb);
        assert_eq!(layout.hole(1).map(|h| h.note), Some(pitch("A#4")));
    }

    #[test]
    fn test_find_tab_for_note() {
        let layout = navigator_layout(HarmonicaKey::C);
        assert_eq!(
            find_tab_for_note(&layout, pitch("C5")),
            Some(HolePosition::new(8, HoleAction::Draw))
        );
        assert_eq!(
            find_tab_for_note(&layout, pitch("G4")),
            Some(HolePosition::new(5, HoleAction::Blow))
        );
        assert_eq!(find_tab_for_note(&layout, pitch("C#4")), None);
    }

    #[test]
    fn test_note_options_range() {
        let options = note_options();
        assert_eq!(options.len(), 60);
        assert_eq!(options.first(), Some(&pitch("C3")));
        assert_eq!(options.last(), Some(&pitch("B7")));
        assert!(options.windows(2).all(|w| w[0] < w[1]));
    }
}
