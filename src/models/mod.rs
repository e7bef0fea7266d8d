//! Models module for the narrated story
//!
//! This module contains the timeline built from the story tokens and the
//! playback-side state owned by the synchronizer.

pub mod timeline;
pub mod state;

// Re-export commonly used types
pub use timeline::*;
pub use state::*;
