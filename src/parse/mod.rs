//! Parsing module for the harmonica tab converter
//!
//! This module contains the tokenizer and the two tab grammars that turn
//! raw notation text into line-attributed entries.

pub mod tokens;
pub mod tab;

// Re-export commonly used types
pub use tokens::*;
pub use tab::*;
