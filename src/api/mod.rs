//! Story Sync WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: serialization helpers with logged errors
//! - `dom`: browser implementations of the synchronizer's transport and layout seams
//! - `player`: `NarrationPlayer`, which mounts the page and drives playback from a timer
//! - `timeline`: stateless exports for tokenizing and building timelines from JS

pub mod helpers;
pub mod dom;
pub mod player;
pub mod timeline;

pub use player::NarrationPlayer;
pub use timeline::{build_timeline, tokenize_story};
