// Schedule item module
// Field-work item (inspection) as delivered by the case-management backend

mod wire;

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::utils::date::parse_timestamp;

use self::wire::{WireId, WireInspection};

/// Label shown when the backend gives an item no title.
pub const DEFAULT_ITEM_TITLE: &str = "Inspection";

/// Opaque item identifier. Numeric ids from the backend are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<WireId> for ItemId {
    fn from(value: WireId) -> Self {
        Self(value.into_string())
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Opaque address identifier used only for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct AddressId(String);

impl AddressId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<WireId> for AddressId {
    fn from(value: WireId) -> Self {
        Self(value.into_string())
    }
}

impl From<AddressId> for String {
    fn from(value: AddressId) -> Self {
        value.0
    }
}

/// A unit of field work that may or may not have a date and time yet.
///
/// The stored timestamp is kept as received; [`ScheduleItem::scheduled_at`]
/// parses it on demand and treats anything unparseable as unscheduled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireInspection")]
pub struct ScheduleItem {
    pub id: ItemId,
    pub title: Option<String>,
    pub scheduled_raw: Option<String>,
    pub status: Option<String>,
    pub address_label: Option<String>,
    pub address_id: Option<AddressId>,
    pub inspector_name: Option<String>,
}

impl ScheduleItem {
    /// Create an unscheduled item with just an id.
    ///
    /// # Examples
    /// ```
    /// use ons_week_schedule::models::schedule_item::ScheduleItem;
    ///
    /// let item = ScheduleItem::new(42);
    /// assert_eq!(item.display_title(), "Inspection");
    /// assert!(item.scheduled_at().is_none());
    /// ```
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            scheduled_raw: None,
            status: None,
            address_label: None,
            address_id: None,
            inspector_name: None,
        }
    }

    /// Create a builder for constructing items with optional fields
    pub fn builder(id: impl Into<ItemId>) -> ScheduleItemBuilder {
        ScheduleItemBuilder::new(id)
    }

    pub fn display_title(&self) -> &str {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_ITEM_TITLE,
        }
    }

    /// Parsed local schedule time, or `None` when absent or malformed.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        let raw = self.scheduled_raw.as_deref()?;
        let parsed = parse_timestamp(raw);
        if parsed.is_none() {
            log::debug!(
                "Item {} has unparseable scheduled time {:?}; treating as unscheduled",
                self.id,
                raw
            );
        }
        parsed
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled_at().is_some()
    }

    /// Time of day of the current schedule, used to prefill a reschedule.
    pub fn existing_time(&self) -> Option<NaiveTime> {
        self.scheduled_at().map(|ts| ts.time())
    }
}

/// Builder for creating items with optional fields
pub struct ScheduleItemBuilder {
    item: ScheduleItem,
}

impl ScheduleItemBuilder {
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            item: ScheduleItem::new(id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.item.title = Some(title.into());
        self
    }

    /// Set the raw scheduled timestamp, exactly as the backend would send it
    pub fn scheduled(mut self, raw: impl Into<String>) -> Self {
        self.item.scheduled_raw = Some(raw.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.item.status = Some(status.into());
        self
    }

    pub fn address(mut self, label: impl Into<String>, id: Option<AddressId>) -> Self {
        self.item.address_label = Some(label.into());
        self.item.address_id = id;
        self
    }

    pub fn inspector(mut self, name: impl Into<String>) -> Self {
        self.item.inspector_name = Some(name.into());
        self
    }

    pub fn build(self) -> ScheduleItem {
        self.item
    }
}
