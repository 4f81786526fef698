//! Catalog item (input) model.
//!
//! A catalog item is one playable unit of media supplied by an external
//! catalog source: a title, a runtime in seconds, and an optional group
//! title (e.g. the series an episode belongs to). The core places no
//! constraint on where the catalog comes from.

use serde::{Deserialize, Serialize};

/// A playable media item from the external catalog.
///
/// Immutable input to the lineup builder; the catalog is supplied wholesale
/// on every build. Durations are in seconds and must be non-negative and
/// finite — see [`crate::validation::validate_catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Item title.
    pub title: String,
    /// Runtime in seconds. Fractional seconds are allowed but discarded
    /// when the item is laid onto the minute grid.
    pub duration_secs: f64,
    /// Group title (e.g. series name). `None` for standalone items.
    pub group_title: Option<String>,
}

impl CatalogItem {
    /// Creates a new catalog item.
    pub fn new(title: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            title: title.into(),
            duration_secs,
            group_title: None,
        }
    }

    /// Sets the group title.
    pub fn with_group(mut self, group_title: impl Into<String>) -> Self {
        self.group_title = Some(group_title.into());
        self
    }

    /// Runtime in whole minutes.
    ///
    /// Truncating division: fractional seconds and any remainder under a
    /// full minute are discarded, never rounded up.
    #[inline]
    pub fn duration_minutes(&self) -> u64 {
        (self.duration_secs / 60.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_item_builder() {
        let item = CatalogItem::new("Mystery Train", 6360.0).with_group("Criterion");
        assert_eq!(item.title, "Mystery Train");
        assert_eq!(item.duration_secs, 6360.0);
        assert_eq!(item.group_title.as_deref(), Some("Criterion"));

        let bare = CatalogItem::new("Pin", 6180.0);
        assert!(bare.group_title.is_none());
    }

    #[test]
    fn test_duration_minutes_truncates() {
        assert_eq!(CatalogItem::new("a", 3600.0).duration_minutes(), 60);
        assert_eq!(CatalogItem::new("b", 3659.0).duration_minutes(), 60); // 59s dropped
        assert_eq!(CatalogItem::new("c", 3659.9).duration_minutes(), 60); // fractional dropped
        assert_eq!(CatalogItem::new("d", 59.0).duration_minutes(), 0);
        assert_eq!(CatalogItem::new("e", 0.0).duration_minutes(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let item = CatalogItem::new("Burning", 8880.0).with_group("Lee Chang-dong");
        let json = serde_json::to_string(&item).unwrap();
        let back: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
