//! Sequential packing with day rollover.
//!
//! # Algorithm
//!
//! 1. Validate catalog durations (negative / non-finite are rejected).
//! 2. Shuffle the catalog with the week seed.
//! 3. Walk a (day, hour, minute) cursor from day 0 / 00:00, laying items
//!    end-to-end: each item's whole-minute runtime is added to the cursor,
//!    minutes ≥ 60 carry into hours, hours ≥ 24 carry into the day index.
//!
//! The emitted timeline is gapless and non-overlapping: every event's end
//! coordinate equals the next event's start coordinate. An item that plays
//! through midnight stays one event with differing start/end day indices.
//!
//! # Complexity
//! O(n) over the catalog, after an O(n) shuffle.

use chrono::NaiveDate;
use log::debug;

use crate::models::{CatalogItem, Lineup, ScheduledEvent};
use crate::scheduler::{clip_to_week, shuffle_catalog};
use crate::validation::{validate_catalog, InvalidDurationError};
use crate::week::{week_seed, weekday_offset};

/// Weekly lineup builder.
///
/// A build is a pure function of (catalog, seed): validate, shuffle, pack.
/// Each call returns a fresh immutable [`Lineup`]; callers own any caching.
///
/// # Example
///
/// ```
/// use tv_lineup::models::CatalogItem;
/// use tv_lineup::scheduler::LineupBuilder;
///
/// let catalog = vec![
///     CatalogItem::new("Mystery Train", 6360.0),
///     CatalogItem::new("Lover's Rock", 4140.0).with_group("Small Axe"),
/// ];
///
/// let lineup = LineupBuilder::new().build(&catalog, 20230618).unwrap();
/// assert_eq!(lineup.event_count(), 2);
/// // Packing is gapless from day 0 / 00:00
/// assert_eq!(lineup.events[0].start_linear_minutes(), 0);
/// assert_eq!(lineup.total_runtime_minutes(), 106 + 69);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineupBuilder {
    week_window: bool,
}

impl LineupBuilder {
    /// Creates a builder that produces unclipped lineups.
    pub fn new() -> Self {
        Self { week_window: false }
    }

    /// Enables week-window clipping for date-driven builds.
    ///
    /// When enabled, [`build_for_date`](Self::build_for_date) re-expresses
    /// day indices relative to the build date's week position and drops
    /// events entirely outside the 7-day window. Seed-only
    /// [`build`](Self::build) calls have no date to anchor the window and
    /// always return the full forward-rolling lineup.
    pub fn with_week_window(mut self) -> Self {
        self.week_window = true;
        self
    }

    /// Builds the lineup for a seed.
    ///
    /// Validates the catalog, shuffles it with the seed, and packs the
    /// result. An empty catalog yields an empty lineup.
    ///
    /// # Errors
    /// Returns every catalog item with a negative or non-finite duration.
    pub fn build(
        &self,
        catalog: &[CatalogItem],
        seed: u64,
    ) -> Result<Lineup, Vec<InvalidDurationError>> {
        validate_catalog(catalog)?;
        debug!("building lineup: {} items, seed {seed}", catalog.len());

        let shuffled = shuffle_catalog(catalog, seed);
        let events = pack_events(&shuffled);
        let lineup = Lineup::new(events);

        debug!(
            "lineup built: {} events, {} minutes total",
            lineup.event_count(),
            lineup.total_runtime_minutes()
        );
        Ok(lineup)
    }

    /// Builds the lineup for the week containing `today`.
    ///
    /// Resolves the seed from the week's Sunday; with
    /// [`with_week_window`](Self::with_week_window), also clips to the
    /// 7-day window offset by `today`'s position in its week.
    pub fn build_for_date(
        &self,
        catalog: &[CatalogItem],
        today: NaiveDate,
    ) -> Result<Lineup, Vec<InvalidDurationError>> {
        let lineup = self.build(catalog, week_seed(today))?;
        if self.week_window {
            let offset = weekday_offset(today) as i32;
            return Ok(Lineup::new(clip_to_week(&lineup.events, offset)));
        }
        Ok(lineup)
    }
}

/// Packs items back-to-back from day 0 / 00:00, in the order given.
///
/// Runtimes are truncated to whole minutes before placement. Zero-duration
/// items emit an event with equal start and end coordinates and do not
/// advance the cursor.
pub fn pack_events(items: &[CatalogItem]) -> Vec<ScheduledEvent> {
    let mut events = Vec::with_capacity(items.len());
    let mut day: i32 = 0;
    let mut hour: u32 = 0;
    let mut minute: u32 = 0;

    for item in items {
        let start_day = day;
        let start_hour = hour;
        let start_minute = minute;

        let total_minutes = minute as u64 + item.duration_minutes();
        let total_hours = hour as u64 + total_minutes / 60;
        let end_minute = (total_minutes % 60) as u32;
        let end_hour = (total_hours % 24) as u32;
        day += (total_hours / 24) as i32;

        events.push(ScheduledEvent {
            title: item.title.clone(),
            group_title: item.group_title.clone(),
            start_day_index: start_day,
            start_hour,
            start_minute,
            end_day_index: day,
            end_hour,
            end_minute,
        });

        hour = end_hour;
        minute = end_minute;
    }

    events
}
