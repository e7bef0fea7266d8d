//! Player configuration
//!
//! Everything is compiled in; JS may override any subset of fields by
//! passing a plain object to `NarrationPlayer::mountWithConfig`.

use serde::{Deserialize, Serialize};

use crate::error::PlayerError;

/// Story narrated by the default audio track
pub const DEFAULT_STORY: &str =
    "There once was a big dragon. This dragon liked ice-cream. It was very yummy.";

pub const DEFAULT_AUDIO_SRC: &str = "/dragon2.m4a";
pub const DEFAULT_IMAGE_SRC: &str = "dragon.jpg";
pub const DEFAULT_IMAGE_ALT: &str = "dragon";

/// Polling interval of the playback clock, in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;
/// Spacing between the starts of consecutive windows, in milliseconds
pub const DEFAULT_OFFSET_MS: u64 = 500;
/// Width of each token's window, in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 500;

/// Timing constants for the timeline and the polling clock
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TimingConfig {
    pub tick_ms: u64,
    pub offset_ms: u64,
    pub duration_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            offset_ms: DEFAULT_OFFSET_MS,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl TimingConfig {
    /// Reject values that would make windows empty or stall the clock.
    ///
    /// A zero offset is allowed: every window then starts at zero and the
    /// first entry always wins the lookup.
    pub fn validate(&self) -> Result<(), PlayerError> {
        if self.tick_ms == 0 {
            return Err(PlayerError::InvalidConfig("tickMs must be positive".into()));
        }
        self.tick_timeout()?;
        if self.duration_ms == 0 {
            return Err(PlayerError::InvalidConfig("durationMs must be positive".into()));
        }
        Ok(())
    }

    /// Tick interval as the `i32` timeout `setInterval` takes
    pub fn tick_timeout(&self) -> Result<i32, PlayerError> {
        i32::try_from(self.tick_ms).map_err(|_| {
            PlayerError::InvalidConfig(format!("tickMs {} exceeds the timer range", self.tick_ms))
        })
    }
}

/// Page content and timing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    pub story: String,
    pub audio_src: String,
    pub image_src: String,
    pub image_alt: String,
    pub timing: TimingConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            story: DEFAULT_STORY.to_string(),
            audio_src: DEFAULT_AUDIO_SRC.to_string(),
            image_src: DEFAULT_IMAGE_SRC.to_string(),
            image_alt: DEFAULT_IMAGE_ALT.to_string(),
            timing: TimingConfig::default(),
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), PlayerError> {
        self.timing.validate()
    }
}
