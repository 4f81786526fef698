//! Catalog input validation.
//!
//! Checks every catalog item's duration before scheduling. Negative or
//! non-finite durations are caller contract violations: the minute/hour/day
//! carry arithmetic has no defined behavior for negative minute deltas, so
//! the build rejects them up front instead of emitting a corrupted timeline.
//!
//! All offending items are collected and reported together, not just the
//! first one found.

use thiserror::Error;

use crate::models::CatalogItem;

/// Validation result.
pub type ValidationResult = Result<(), Vec<InvalidDurationError>>;

/// A catalog item whose duration cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("catalog item {index} ('{title}') has {kind} duration {duration_secs}")]
pub struct InvalidDurationError {
    /// Position of the item in the supplied catalog.
    pub index: usize,
    /// Item title, for diagnostics.
    pub title: String,
    /// The offending duration value (seconds).
    pub duration_secs: f64,
    /// Why the duration is invalid.
    pub kind: InvalidDurationKind,
}

/// Categories of invalid durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDurationKind {
    /// Duration is below zero.
    Negative,
    /// Duration is NaN or infinite.
    NonFinite,
}

impl std::fmt::Display for InvalidDurationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative => write!(f, "negative"),
            Self::NonFinite => write!(f, "non-finite"),
        }
    }
}

/// Validates catalog durations.
///
/// Checks every item for:
/// 1. Non-finite duration (NaN, ±infinity)
/// 2. Negative duration
///
/// Zero-duration items are valid; they occupy no grid time.
///
/// # Returns
/// `Ok(())` if all items are schedulable, `Err(errors)` listing every
/// offending item. An empty catalog is valid.
pub fn validate_catalog(catalog: &[CatalogItem]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, item) in catalog.iter().enumerate() {
        let kind = if !item.duration_secs.is_finite() {
            Some(InvalidDurationKind::NonFinite)
        } else if item.duration_secs < 0.0 {
            Some(InvalidDurationKind::Negative)
        } else {
            None
        };

        if let Some(kind) = kind {
            errors.push(InvalidDurationError {
                index,
                title: item.title.clone(),
                duration_secs: item.duration_secs,
                kind,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
