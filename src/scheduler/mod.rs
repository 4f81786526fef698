//! Lineup construction: shuffle, packing, window clipping.
//!
//! # Pipeline
//!
//! catalog → seeded shuffle → sequential packing → (optional) week-window
//! clip. Each stage is pure and independently testable; the clip is a view
//! policy layered on top of the packed timeline, never part of it.

mod packing;
mod shuffle;
mod window;

pub use packing::{pack_events, LineupBuilder};
pub use shuffle::shuffle_catalog;
pub use window::clip_to_week;
