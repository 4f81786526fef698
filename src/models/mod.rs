//! Broadcast lineup domain models.
//!
//! Provides the core data types: the catalog input record, the scheduled
//! event with day-indexed grid coordinates, and the lineup solution
//! container. All models are owned, immutable-after-build, and serde-round-trippable.
//!
//! # Time Model
//!
//! Grid coordinates are (day index, hour, minute). The linear timeline
//! coordinate `day_index * 1440 + hour * 60 + minute` orders events
//! unambiguously; day index 0 is the first day of the displayed week.

mod catalog;
mod event;
mod lineup;

pub use catalog::CatalogItem;
pub use event::{ScheduledEvent, MINUTES_PER_DAY};
pub use lineup::Lineup;
