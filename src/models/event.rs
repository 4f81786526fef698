//! Scheduled event model.
//!
//! An event is one catalog item placed on the weekly grid: start and end
//! expressed as (day index, hour, minute) triples. An event whose runtime
//! crosses midnight keeps differing start/end day indices — it is a single
//! event, never split, so consumers don't double-count its duration.
//!
//! # Invariants
//!
//! - `start_hour`/`end_hour` in 0..24, `start_minute`/`end_minute` in 0..60.
//! - `start_day_index <= end_day_index`.
//! - End is at or after start on the linear timeline; equal only for
//!   zero-duration items.

use serde::{Deserialize, Serialize};

/// Minutes in one grid day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A catalog item placed on the weekly grid.
///
/// Day indices are signed: window clipping re-expresses them relative to
/// the displayed week, which can shift the start of a retained
/// cross-midnight event below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Item title.
    pub title: String,
    /// Group title (e.g. series name), if any.
    pub group_title: Option<String>,
    /// Day the event starts on (0 = first day of the displayed week).
    pub start_day_index: i32,
    /// Start hour (0-23).
    pub start_hour: u32,
    /// Start minute (0-59).
    pub start_minute: u32,
    /// Day the event ends on.
    pub end_day_index: i32,
    /// End hour (0-23).
    pub end_hour: u32,
    /// End minute (0-59).
    pub end_minute: u32,
}

impl ScheduledEvent {
    /// Display title: `"{group}: {title}"` when the item belongs to a
    /// group, otherwise just the title.
    pub fn composed_title(&self) -> String {
        match &self.group_title {
            Some(group) => format!("{group}: {title}", title = self.title),
            None => self.title.clone(),
        }
    }

    /// Start coordinate on the linear minute timeline.
    #[inline]
    pub fn start_linear_minutes(&self) -> i64 {
        self.start_day_index as i64 * MINUTES_PER_DAY
            + self.start_hour as i64 * 60
            + self.start_minute as i64
    }

    /// End coordinate on the linear minute timeline.
    #[inline]
    pub fn end_linear_minutes(&self) -> i64 {
        self.end_day_index as i64 * MINUTES_PER_DAY
            + self.end_hour as i64 * 60
            + self.end_minute as i64
    }

    /// Scheduled duration in whole minutes (end - start).
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end_linear_minutes() - self.start_linear_minutes()
    }

    /// Whether the event's play-through crosses midnight.
    ///
    /// Renderers are expected to draw such an event as two visual segments.
    #[inline]
    pub fn crosses_midnight(&self) -> bool {
        self.start_day_index != self.end_day_index
    }
}
