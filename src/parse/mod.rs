//! Parsing module for the narrated story
//!
//! This module splits the story text into the phonetic-ish chunks
//! that get highlighted during playback.

pub mod tokens;

// Re-export commonly used types
pub use tokens::*;
