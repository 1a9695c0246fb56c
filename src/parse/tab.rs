//! Tab grammars
//!
//! Diatonic tokens are an optional sign followed by digits ("+4", "-10",
//! "3"); a missing sign means blow. Tremolo tokens are bare integers in the
//! range of the 24-hole instrument. Tokens that do not fit the grammar are
//! skipped without comment: they produce no entry, no error and no output.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::HoleAction;
use crate::parse::tokens::{tokenize, SourceLine, Token};

static DIATONIC_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)([0-9]+)$").expect("diatonic token pattern is valid")
});

static TREMOLO_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+$").expect("tremolo token pattern is valid")
});

/// Highest hole number accepted by the tremolo grammar
pub const TREMOLO_MAX_HOLE: u32 = 24;

/// A recognized diatonic token
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DiatonicEntry {
    /// Not range-checked; the converter validates it against the layout
    pub hole: u32,
    pub action: HoleAction,
    pub token: Token,
}

impl DiatonicEntry {
    /// The hole number as written, without sign or leading zeros
    ///
    /// Unlike `hole`, this is exact for digit runs that overflow a `u32`.
    pub fn hole_digits(&self) -> &str {
        let digits = self.token.text.trim_start_matches(|c: char| c == '+' || c == '-');
        match digits.trim_start_matches('0') {
            "" => &digits[digits.len().saturating_sub(1)..],
            trimmed => trimmed,
        }
    }
}

/// A recognized tremolo token; the action is implied by the layout
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TremoloEntry {
    pub hole: u32,
    pub token: Token,
}

/// Common view of a parsed entry, whichever grammar produced it
pub trait TabEntry {
    fn hole(&self) -> u32;
    fn token(&self) -> &Token;
}

impl TabEntry for DiatonicEntry {
    fn hole(&self) -> u32 {
        self.hole
    }

    fn token(&self) -> &Token {
        &self.token
    }
}

impl TabEntry for TremoloEntry {
    fn hole(&self) -> u32 {
        self.hole
    }

    fn token(&self) -> &Token {
        &self.token
    }
}

/// Parse one diatonic token into (hole, action)
///
/// Digit runs too long for a `u32` saturate to `u32::MAX`, which no layout
/// has, so they still reach the converter as invalid holes.
pub fn parse_diatonic_token(text: &str) -> Option<(u32, HoleAction)> {
    let caps = DIATONIC_TOKEN.captures(text)?;
    let sign = caps.get(1).and_then(|m| m.as_str().chars().next());
    let hole = caps.get(2)?.as_str().parse::<u32>().unwrap_or(u32::MAX);
    Some((hole, HoleAction::from_sign(sign)?))
}

/// Parse one tremolo token into a hole number in 1..=24
pub fn parse_tremolo_token(text: &str) -> Option<u32> {
    if !TREMOLO_TOKEN.is_match(text) {
        return None;
    }
    text.parse::<u32>()
        .ok()
        .filter(|hole| (1..=TREMOLO_MAX_HOLE).contains(hole))
}

/// Diatonic entries from already tokenized lines, top-to-bottom, left-to-right
pub fn diatonic_entries(lines: &[SourceLine]) -> Vec<DiatonicEntry> {
    lines
        .iter()
        .flat_map(|line| line.tokens.iter())
        .filter_map(|token| {
            parse_diatonic_token(&token.text).map(|(hole, action)| DiatonicEntry {
                hole,
                action,
                token: token.clone(),
            })
        })
        .collect()
}

/// Tremolo entries from already tokenized lines, top-to-bottom, left-to-right
pub fn tremolo_entries(lines: &[SourceLine]) -> Vec<TremoloEntry> {
    lines
        .iter()
        .flat_map(|line| line.tokens.iter())
        .filter_map(|token| {
            parse_tremolo_token(&token.text).map(|hole| TremoloEntry {
                hole,
                token: token.clone(),
            })
        })
        .collect()
}

pub fn parse_diatonic_tab(text: &str) -> Vec<DiatonicEntry> {
    diatonic_entries(&tokenize(text))
}

pub fn parse_tremolo_tab(text: &str) -> Vec<TremoloEntry> {
    tremolo_entries(&tokenize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diatonic_token_grammar() {
        assert_eq!(parse_diatonic_token("+4"), Some((4, HoleAction::Blow)));
        assert_eq!(parse_diatonic_token("-10"), Some((10, HoleAction::Draw)));
        assert_eq!(parse_diatonic_token("3"), Some((3, HoleAction::Blow)));
        assert_eq!(parse_diatonic_token("+04"), Some((4, HoleAction::Blow)));

        assert_eq!(parse_diatonic_token("+"), None);
        assert_eq!(parse_diatonic_token("+-4"), None);
        assert_eq!(parse_diatonic_token("4b"), None);
        assert_eq!(parse_diatonic_token("[+4]"), None);
        assert_eq!(parse_diatonic_token("abc"), None);
        assert_eq!(parse_diatonic_token(""), None);
    }

    #[test]
    fn test_diatonic_has_no_upper_bound() {
        assert_eq!(parse_diatonic_token("+99"), Some((99, HoleAction::Blow)));
        assert_eq!(parse_diatonic_token("-0"), Some((0, HoleAction::Draw)));
        assert_eq!(
            parse_diatonic_token("99999999999999999999"),
            Some((u32::MAX, HoleAction::Blow))
        );
    }

    #[test]
    fn test_hole_digits_keep_oversized_numbers() {
        let entries = parse_diatonic_tab("+04 -0 +99999999999999999999 007");
        let digits: Vec<_> = entries.iter().map(|e| e.hole_digits()).collect();
        assert_eq!(digits, vec!["4", "0", "99999999999999999999", "7"]);
    }

    #[test]
    fn test_tremolo_token_grammar() {
        assert_eq!(parse_tremolo_token("1"), Some(1));
        assert_eq!(parse_tremolo_token("24"), Some(24));
        assert_eq!(parse_tremolo_token("0"), None);
        assert_eq!(parse_tremolo_token("25"), None);
        assert_eq!(parse_tremolo_token("+4"), None);
        assert_eq!(parse_tremolo_token("-4"), None);
        assert_eq!(parse_tremolo_token("4a"), None);
        assert_eq!(parse_tremolo_token("[4]"), None);
    }

    #[test]
    fn test_parse_diatonic_tab_skips_unknown_tokens() {
        let entries = parse_diatonic_tab("+4 x -5\nhello +6");
        let holes: Vec<_> = entries.iter().map(|e| (e.hole, e.action)).collect();
        assert_eq!(
            holes,
            vec![(4, HoleAction::Blow), (5, HoleAction::Draw), (6, HoleAction::Blow)]
        );
        assert_eq!(entries[2].token.line, 1);
        assert_eq!(entries[2].token.text, "+6");
    }

    #[test]
    fn test_parse_tremolo_tab_skips_out_of_range() {
        let entries = parse_tremolo_tab("9 30 11\n0 x 24");
        let holes: Vec<_> = entries.iter().map(|e| e.hole).collect();
        assert_eq!(holes, vec![9, 11, 24]);
    }

    #[test]
    fn test_blank_input_has_no_entries() {
        assert!(parse_diatonic_tab("").is_empty());
        assert!(parse_diatonic_tab("   \n\t").is_empty());
        assert!(parse_tremolo_tab("").is_empty());
    }
}
