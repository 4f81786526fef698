//! Deterministic weekly broadcast lineup builder.
//!
//! Turns a flat catalog of media items (duration plus optional series
//! grouping) into a gapless weekly timetable: a week-anchored seed shuffles
//! the catalog, then items are packed back-to-back from day 0 / 00:00 with
//! day/hour/minute coordinates that survive midnight rollover. The result
//! renders as a 7-day × 24-hour grid with a "now playing" lookup.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CatalogItem`, `ScheduledEvent`, `Lineup`
//! - **`week`**: Week seed resolver — most recent Sunday, `YYYYMMDD` seed
//! - **`scheduler`**: Deterministic shuffle, sequential packing, window clipping
//! - **`validation`**: Catalog input checks (negative / non-finite durations)
//!
//! # Determinism
//!
//! Everyone building the lineup in the same Sunday–Saturday week gets the
//! same ordering: the seed is the week's Sunday encoded as `YYYYMMDD`, and
//! the shuffle is a seeded Fisher–Yates. A build is a pure function of
//! (catalog, seed) — no caching, no incremental mutation, no I/O. Catalog
//! provenance (a media library database, a file, a fixture) is the
//! caller's concern.

pub mod models;
pub mod scheduler;
pub mod validation;
pub mod week;
