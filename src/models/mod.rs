//! Models module for the harmonica tab converter
//!
//! This module contains the value types shared by the layouts, the tab
//! parser and the converter.

pub mod harmonica;
pub mod key;
pub mod pitch;

// Re-export commonly used types
pub use harmonica::{HarmonicaType, HoleAction, InvalidHarmonicaType};
pub use pitch::{InvalidPitch, NoteName, Pitch};
pub use key::{HarmonicaKey, InvalidHarmonicaKey};
