//! Stateless timeline exports
//!
//! Let JavaScript inspect how a story is chunked and timed without mounting
//! a player.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, serialize};
use crate::config::TimingConfig;
use crate::models::Timeline;
use crate::parse::tokenize;

/// Split a story into its tokens
#[wasm_bindgen(js_name = tokenizeStory)]
pub fn tokenize_story(story: &str) -> js_sys::Array {
    let array = js_sys::Array::new();
    for token in tokenize(story) {
        array.push(&JsValue::from_str(token.as_str()));
    }
    array
}

/// Build the timeline of a story.
///
/// `timing` may be omitted or partial; missing fields use the defaults.
/// Returns an array of `{ from, to, id, text }`.
#[wasm_bindgen(js_name = buildTimeline)]
pub fn build_timeline(story: &str, timing: JsValue) -> Result<JsValue, JsValue> {
    let timing: TimingConfig = deserialize_or_default(timing, "Failed to deserialize timing")?;
    timing.validate()?;

    let timeline = Timeline::from_story(story, &timing);
    serialize(&timeline.entries(), "Failed to serialize timeline")
}
