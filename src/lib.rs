//! Story Sync WASM Module
//!
//! Plays a narrated story and moves a marker under the syllable-like chunk
//! being read. The story is split into tokens, each token gets a fixed time
//! window, and a polling clock started by the audio control picks the token
//! to highlight.

pub mod api;
pub mod config;
pub mod error;
pub mod html_layout;
pub mod models;
pub mod parse;
pub mod playback;

// Re-export commonly used types
pub use api::NarrationPlayer;
pub use config::{PlayerConfig, TimingConfig};
pub use error::PlayerError;
pub use models::*;
pub use parse::{tokenize, Token};
pub use playback::{Synchronizer, TickOutcome};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("Logger was already initialized");
        }
    }

    log::info!("Story sync WASM module initialized");
}
