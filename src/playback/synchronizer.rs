//! Marker synchronizer
//!
//! Keeps its own polled clock instead of reading the audio position: on
//! `start` the clock and the transport are rewound to zero, and every tick
//! advances the clock by the tick interval. After each clock change the
//! active timeline entry is looked up and, if it is highlightable and
//! visibly rendered, its position becomes the new marker position.
//! Every lookup miss leaves the marker where it was.

use crate::models::{
    ElementGeometry, MarkerPosition, PlaybackState, SyncState, Timeline, TimelineEntry,
};

/// Audio transport the synchronizer rewinds on start
pub trait Transport {
    /// Seek the media back to the beginning
    fn rewind(&mut self);
}

/// Geometry lookup of rendered elements by id
pub trait LayoutQuery {
    fn geometry(&self, id: &str) -> Option<ElementGeometry>;
}

/// Result of a tick, telling the timer driver whether to keep polling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running
    Continue,
    /// The clock passed the end of the timeline and the synchronizer stopped
    Stopped,
    /// The tick arrived while idle and was dropped
    Ignored,
}

/// Whitespace and punctuation tokens are never highlighted
pub fn is_highlightable(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

pub struct Synchronizer {
    timeline: Timeline,
    tick_ms: u64,
    playback: PlaybackState,
    active: Option<usize>,
    marker: MarkerPosition,
}

impl Synchronizer {
    pub fn new(timeline: Timeline, tick_ms: u64) -> Self {
        Self {
            timeline,
            tick_ms,
            playback: PlaybackState::default(),
            active: None,
            marker: MarkerPosition::default(),
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_running(&self) -> bool {
        self.playback.is_running()
    }

    pub fn current_time(&self) -> u64 {
        self.playback.current_time
    }

    pub fn marker(&self) -> MarkerPosition {
        self.marker
    }

    /// Entry matched by the last clock change, highlightable or not
    pub fn active_entry(&self) -> Option<&TimelineEntry> {
        self.active.and_then(|index| self.timeline.get(index))
    }

    /// Reset the clock, rewind the transport and enter `Running`.
    ///
    /// Restarting while already running resets the clock as well.
    pub fn start<T, L>(&mut self, transport: &mut T, layout: &L) -> Option<MarkerPosition>
    where
        T: Transport + ?Sized,
        L: LayoutQuery + ?Sized,
    {
        self.playback.current_time = 0;
        transport.rewind();
        self.playback.state = SyncState::Running;
        log::info!("Playback started ({} entries)", self.timeline.len());

        self.on_time_changed(layout)
    }

    /// Enter `Idle`. Returns whether the synchronizer was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.playback.state = SyncState::Idle;
        if was_running {
            log::info!("Playback stopped at {} ms", self.playback.current_time);
        }
        was_running
    }

    /// Advance the clock by one tick.
    ///
    /// Past the end of the timeline the synchronizer stops itself before the
    /// highlight is recomputed, and reports [`TickOutcome::Stopped`] so the
    /// driver cancels its timer.
    pub fn tick<L>(&mut self, layout: &L) -> TickOutcome
    where
        L: LayoutQuery + ?Sized,
    {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }

        self.playback.current_time = self.playback.current_time.saturating_add(self.tick_ms);

        let past_end = self
            .timeline
            .end()
            .map_or(true, |end| self.playback.current_time > end);

        let outcome = if past_end {
            self.playback.state = SyncState::Idle;
            log::info!(
                "Reached end of timeline at {} ms, stopping",
                self.playback.current_time
            );
            TickOutcome::Stopped
        } else {
            TickOutcome::Continue
        };

        self.on_time_changed(layout);
        outcome
    }

    /// Recompute the active entry and publish a new marker position if possible
    fn on_time_changed<L>(&mut self, layout: &L) -> Option<MarkerPosition>
    where
        L: LayoutQuery + ?Sized,
    {
        let time = self.playback.current_time;

        let Some((index, entry)) = self.timeline.entry_at(time) else {
            self.active = None;
            log::trace!("No entry at {} ms", time);
            return None;
        };

        if self.active != Some(index) {
            log::debug!("Active entry {} {:?} at {} ms", entry.id, entry.text, time);
        }
        self.active = Some(index);

        if !is_highlightable(&entry.text) {
            log::trace!("Skipping non-alphabetic entry {}", entry.id);
            return None;
        }

        let Some(geometry) = layout.geometry(&entry.id) else {
            log::trace!("Element #{} not rendered", entry.id);
            return None;
        };

        if geometry.width < 1.0 {
            log::trace!("Element #{} has degenerate width {}", entry.id, geometry.width);
            return None;
        }

        let position = geometry.marker_position();
        self.marker = position;
        log::debug!("Marker moved to ({}, {})", position.top, position.left);
        Some(position)
    }
}
