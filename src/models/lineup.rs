//! Lineup (solution) model.
//!
//! A lineup is the complete weekly timetable: scheduled events in packing
//! order, gapless and non-overlapping. It is rebuilt from scratch whenever
//! the catalog changes or a new week begins; no event is individually
//! created, mutated, or deleted.

use serde::{Deserialize, Serialize};

use super::ScheduledEvent;

/// A complete weekly lineup.
///
/// Events are in packing order: each event's end coordinate equals the
/// next event's start coordinate on the linear timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    /// Scheduled events in packing order.
    pub events: Vec<ScheduledEvent>,
}

impl Lineup {
    /// Creates a lineup from events in packing order.
    pub fn new(events: Vec<ScheduledEvent>) -> Self {
        Self { events }
    }

    /// Whether the lineup has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Total scheduled runtime: end of the last event on the linear
    /// timeline, in minutes. Zero for an empty lineup.
    pub fn total_runtime_minutes(&self) -> i64 {
        self.events
            .iter()
            .map(|e| e.end_linear_minutes())
            .max()
            .unwrap_or(0)
    }

    /// Events visible on a given grid day.
    ///
    /// An event appears on a day if it starts or ends there; a
    /// cross-midnight event therefore shows up on both of its days.
    pub fn events_for_day(&self, day_index: i32) -> Vec<&ScheduledEvent> {
        self.events
            .iter()
            .filter(|e| e.start_day_index == day_index || e.end_day_index == day_index)
            .collect()
    }

    /// Finds what is playing at the given wall-clock time.
    ///
    /// The query time is assumed to fall within day index 0 of the
    /// displayed week; only events starting on day 0 are considered.
    /// Returns the first event (in packing order) whose span contains the
    /// time under this precedence:
    ///
    /// 1. Start hour equals the query hour: matches if the start minute is
    ///    at or before the query minute and the event doesn't end earlier
    ///    within that same hour.
    /// 2. End hour equals the query hour: matches if the end minute is at
    ///    or after the query minute.
    /// 3. End hour is strictly after the query hour: matches.
    ///
    /// Returns `None` if nothing matches.
    pub fn now_playing(&self, hour: u32, minute: u32) -> Option<&ScheduledEvent> {
        self.events.iter().find(|e| {
            if e.start_day_index != 0 {
                return false;
            }
            if e.start_hour == hour {
                return e.start_minute <= minute && (e.end_hour != hour || e.end_minute >= minute);
            }
            if e.end_hour == hour {
                return e.end_minute >= minute;
            }
            e.end_hour > hour
        })
    }
}
