//! HTML Layout
//!
//! This module generates the page markup: the audio control, the marker,
//! one span per timeline entry and the illustration. JavaScript never builds
//! this markup itself; the player injects it into the mount root.

pub mod page;

pub use page::{
    escape_html, marker_style, render_page_html, render_story_spans, AUDIO_ID, MARKER_ID,
    TEXT_ID,
};
