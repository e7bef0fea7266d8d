//! Playback synchronization
//!
//! The synchronizer is host-agnostic: the browser binding in `api` supplies
//! the transport, the layout queries and the repeating timer.

pub mod synchronizer;

pub use synchronizer::{is_highlightable, LayoutQuery, Synchronizer, TickOutcome, Transport};
