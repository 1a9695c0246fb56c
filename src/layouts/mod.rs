//! Harmonica layouts
//!
//! This module contains the fixed pitch tables for the instruments the
//! converter understands, and the lookups the converter runs against them.
//! Every table is a compiled-in constant; nothing here is ever mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{HoleAction, Pitch};

pub mod diatonic;
pub mod tremolo;

pub use diatonic::*;
pub use tremolo::*;

/// A playable position: hole number plus the action that sounds it
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HolePosition {
    pub hole: u32,
    pub action: HoleAction,
}

impl HolePosition {
    pub fn new(hole: u32, action: HoleAction) -> Self {
        Self { hole, action }
    }

    /// Signed diatonic token, e.g. "+4" or "-3"
    pub fn diatonic_token(&self) -> String {
        format!("{}{}", self.action.sign(), self.hole)
    }

    /// Bare tremolo token, e.g. "9"
    pub fn tremolo_token(&self) -> String {
        self.hole.to_string()
    }
}

impl fmt::Display for HolePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hole, self.action)
    }
}

/// Pitch queries shared by every layout
///
/// Holes are numbered from 1 and scanned in ascending order, so the first
/// hole that matches a query always wins.
pub trait HarmonicaLayout {
    /// Number of holes; valid holes are `1..=hole_count()`
    fn hole_count(&self) -> u32;

    /// Pitch sounded by `hole` played with `action`
    ///
    /// # Returns
    /// * `Some(pitch)` - The hole exists and supports the action
    /// * `None` - The hole is out of range, or it cannot be played that way
    fn lookup_pitch(&self, hole: u32, action: HoleAction) -> Option<Pitch>;

    /// First hole producing `pitch`
    ///
    /// With `required_action` set, only positions played with that action
    /// match. Without it, any action matches and the one that produced the
    /// pitch is reported.
    fn find_hole_for_pitch(&self, pitch: Pitch, required_action: Option<HoleAction>) -> Option<HolePosition>;

    fn contains_hole(&self, hole: u32) -> bool {
        (1..=self.hole_count()).contains(&hole)
    }
}
