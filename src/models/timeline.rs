//! Timeline of story tokens
//!
//! Each token gets a fixed window `[offset * index, offset * index + duration]`
//! in milliseconds. The timeline is built once and then only read.

use serde::{Deserialize, Serialize};

use crate::config::TimingConfig;
use crate::parse::{tokenize, Token};

/// DOM id of the span rendering the entry at `index`
pub fn entry_id(index: usize) -> String {
    format!("s{}", index)
}

/// One token with its time window
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Window start (ms, inclusive)
    pub from: u64,
    /// Window end (ms, inclusive)
    pub to: u64,
    pub id: String,
    pub text: String,
}

impl TimelineEntry {
    /// Both ends are inclusive, so edge-adjacent windows share their boundary instant
    pub fn contains(&self, time: u64) -> bool {
        self.from <= time && time <= self.to
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn build(tokens: &[Token], timing: &TimingConfig) -> Self {
        let entries = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                let from = timing.offset_ms.saturating_mul(index as u64);
                TimelineEntry {
                    from,
                    to: from.saturating_add(timing.duration_ms),
                    id: entry_id(index),
                    text: token.text.clone(),
                }
            })
            .collect();

        Self { entries }
    }

    pub fn from_story(story: &str, timing: &TimingConfig) -> Self {
        Self::build(&tokenize(story), timing)
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    /// End of the last window, or `None` for an empty timeline
    pub fn end(&self) -> Option<u64> {
        self.entries.last().map(|entry| entry.to)
    }

    /// First entry whose window contains `time`.
    ///
    /// On a shared boundary the earlier entry wins.
    pub fn entry_at(&self, time: u64) -> Option<(usize, &TimelineEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.contains(time))
    }
}
