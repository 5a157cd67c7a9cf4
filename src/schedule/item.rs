//! Schedule data model for rundown
//!
//! This module contains the schedule item type emitted by the importer and
//! consumed by the viewer, plus the ordered schedule collection.

use crate::error::{Error, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One named entry of a rundown with a planned duration
///
/// Items keep their broadcast order; the position in the schedule is the
/// playback order. The name may contain embedded separators when the source
/// spreadsheet merged several columns into the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// Display label of the item
    pub name: String,
    /// Planned duration as a clock string ("M:SS")
    pub length: String,
}

impl ScheduleItem {
    /// Creates a new schedule item
    pub fn new(name: impl Into<String>, length: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: length.into(),
        }
    }
}

/// An ordered broadcast schedule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Items in broadcast order
    items: Vec<ScheduleItem>,
}

impl Schedule {
    /// Creates a schedule from a list of items, keeping their order
    pub fn from_items(items: Vec<ScheduleItem>) -> Self {
        Self { items }
    }

    /// Loads a schedule from a JSON document
    ///
    /// The document must hold an array of `{ name, length }` objects; both
    /// historical field orders are accepted.
    ///
    /// # Arguments
    /// * `path` - Path of the JSON schedule document
    ///
    /// # Returns
    /// Returns the schedule, or an error if the file is unreadable or the
    /// JSON is malformed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| Error::ScheduleReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let items: Vec<ScheduleItem> =
            serde_json::from_str(&content).map_err(|e| Error::ScheduleJsonError {
                path: path.display().to_string(),
                source: e,
            })?;

        info!("Loaded {} schedule items from {}", items.len(), path.display());
        Ok(Self { items })
    }

    /// Adds an item to the end of the schedule
    pub fn add_item(&mut self, item: ScheduleItem) {
        self.items.push(item);
    }

    /// Gets the items in broadcast order
    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    /// Gets the item at the given index
    pub fn get(&self, index: usize) -> Option<&ScheduleItem> {
        self.items.get(index)
    }

    /// Returns the number of items in the schedule
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the schedule is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_accessors() {
        let mut schedule = Schedule::default();
        assert!(schedule.is_empty());

        schedule.add_item(ScheduleItem::new("Opening", "1:30"));
        schedule.add_item(ScheduleItem::new("News", "4:00"));

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.get(0).unwrap().name, "Opening");
        assert_eq!(schedule.items()[1].length, "4:00");
        assert!(schedule.get(2).is_none());
    }

    #[test]
    fn test_schedule_item_deserializes_both_field_orders() {
        let name_first: ScheduleItem =
            serde_json::from_str(r#"{"name":"Opening","length":"1:30"}"#).unwrap();
        let length_first: ScheduleItem =
            serde_json::from_str(r#"{"length":"1:30","name":"Opening"}"#).unwrap();
        assert_eq!(name_first, length_first);
        assert_eq!(name_first, ScheduleItem::new("Opening", "1:30"));
    }

    #[test]
    fn test_schedule_item_preserves_embedded_separators() {
        let item: ScheduleItem =
            serde_json::from_str(r#"{"name":"News, Weather","length":"2:00"}"#).unwrap();
        assert_eq!(item.name, "News, Weather");
    }
}
