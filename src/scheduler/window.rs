//! Week-window clipping.
//!
//! The packer rolls forward from day 0 without bound; a display showing
//! "this week" wants day indices relative to the start of the visible
//! window instead. This stage re-expresses each event's day indices by
//! subtracting an offset and drops events that fall entirely outside the
//! 7-day window.
//!
//! Strictly a post-processing view policy: it never runs inside the packer,
//! so the unclipped lineup stays independently testable.

use log::trace;

use crate::models::ScheduledEvent;
use crate::week::DAYS_PER_WEEK;

/// Clips events to a 7-day window starting `offset_days` into the packed
/// timeline.
///
/// Each event's day indices are shifted by `-offset_days`; an event is
/// retained iff its shifted start **or** shifted end lands in `0..7`.
/// A retained cross-midnight event may keep a start day of `-1` (it began
/// before the window) or an end day of `7` (it runs past it); renderers
/// simply draw the in-window segment.
pub fn clip_to_week(events: &[ScheduledEvent], offset_days: i32) -> Vec<ScheduledEvent> {
    let visible = 0..DAYS_PER_WEEK as i32;

    let clipped: Vec<ScheduledEvent> = events
        .iter()
        .filter_map(|event| {
            let start = event.start_day_index - offset_days;
            let end = event.end_day_index - offset_days;
            if !visible.contains(&start) && !visible.contains(&end) {
                return None;
            }
            let mut shifted = event.clone();
            shifted.start_day_index = start;
            shifted.end_day_index = end;
            Some(shifted)
        })
        .collect();

    trace!(
        "window clip: offset {} days, {} of {} events retained",
        offset_days,
        clipped.len(),
        events.len()
    );
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, start_day: i32, end_day: i32) -> ScheduledEvent {
        ScheduledEvent {
            title: title.into(),
            group_title: None,
            start_day_index: start_day,
            start_hour: 12,
            start_minute: 0,
            end_day_index: end_day,
            end_hour: 14,
            end_minute: 0,
        }
    }

    #[test]
    fn test_zero_offset_keeps_first_week() {
        let events = vec![event("in", 0, 0), event("edge", 6, 6), event("out", 7, 7)];
        let clipped = clip_to_week(&events, 0);
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped[0].title, "in");
        assert_eq!(clipped[1].title, "edge");
    }

    #[test]
    fn test_offset_shifts_day_indices() {
        let events = vec![event("a", 3, 3), event("b", 9, 9)];
        let clipped = clip_to_week(&events, 3);
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped[0].start_day_index, 0);
        assert_eq!(clipped[1].start_day_index, 6);
    }

    #[test]
    fn test_drops_events_before_window() {
        let events = vec![event("past", 2, 2), event("current", 3, 3)];
        let clipped = clip_to_week(&events, 3);
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0].title, "current");
    }

    #[test]
    fn test_cross_midnight_into_window_retained() {
        // Starts the day before the window but ends inside it
        let events = vec![event("spanner", 2, 3)];
        let clipped = clip_to_week(&events, 3);
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0].start_day_index, -1);
        assert_eq!(clipped[0].end_day_index, 0);
    }

    #[test]
    fn test_cross_midnight_out_of_window_retained() {
        // Starts on the window's last day, ends past it
        let events = vec![event("tail", 9, 10)];
        let clipped = clip_to_week(&events, 3);
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0].start_day_index, 6);
        assert_eq!(clipped[0].end_day_index, 7);
    }

    #[test]
    fn test_entirely_outside_dropped() {
        let events = vec![event("before", 0, 1), event("after", 10, 11)];
        assert!(clip_to_week(&events, 3).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(clip_to_week(&[], 5).is_empty());
    }
}
