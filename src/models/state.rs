//! Playback-side state
//!
//! Positions are in CSS pixels relative to the marker's offset parent.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncState {
    /// No polling timer
    #[default]
    Idle,
    /// Polling timer active
    Running,
}

/// Elapsed playback time as counted by the polling clock
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Milliseconds since the last start
    pub current_time: u64,
    pub state: SyncState,
}

impl PlaybackState {
    pub fn is_running(&self) -> bool {
        self.state == SyncState::Running
    }
}

/// Where the marker is drawn
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct MarkerPosition {
    pub top: f64,
    pub left: f64,
}

/// Rendered box of a token span
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl ElementGeometry {
    pub fn marker_position(&self) -> MarkerPosition {
        MarkerPosition {
            top: self.top,
            left: self.left,
        }
    }
}
