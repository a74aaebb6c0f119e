//! Projection of the item snapshot onto the visible work week.
//!
//! Every input item lands in exactly one place: the unscheduled tray, one
//! day bucket of the window, or the outside-window list.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::models::schedule_item::{AddressId, ItemId, ScheduleItem};
use crate::services::due_status::{DueStatus, DueStatusProvider};
use crate::utils::date::{date_key, is_date_only, start_of_day, time_label, WeekWindow};

/// Card label for items scheduled by date without a time of day.
pub const ALL_DAY_LABEL: &str = "All day";

/// A scheduled item placed in one of the visible day columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEvent {
    pub item_id: ItemId,
    pub title: String,
    pub scheduled_at: NaiveDateTime,
    pub date_key: String,
    pub time_label: String,
    pub status: Option<String>,
    pub address_label: Option<String>,
    pub address_id: Option<AddressId>,
    pub inspector_name: Option<String>,
    pub due_status: Option<DueStatus>,
}

impl ScheduleEvent {
    fn from_item(
        item: &ScheduleItem,
        scheduled_at: NaiveDateTime,
        due_status: &dyn DueStatusProvider,
    ) -> Self {
        let all_day = item.scheduled_raw.as_deref().is_some_and(is_date_only);
        let time_label = if all_day {
            ALL_DAY_LABEL.to_string()
        } else {
            time_label(scheduled_at)
        };

        Self {
            item_id: item.id.clone(),
            title: item.display_title().to_string(),
            scheduled_at,
            date_key: date_key(&start_of_day(scheduled_at)),
            time_label,
            status: item.status.clone(),
            address_label: item.address_label.clone(),
            address_id: item.address_id.clone(),
            inspector_name: item.inspector_name.clone(),
            due_status: due_status.describe(scheduled_at),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekProjection {
    /// Items without a usable schedule, in input order
    pub unscheduled: Vec<ScheduleItem>,
    /// Visible events keyed by `YYYY-MM-DD`, each list ascending by time
    pub events_by_day: BTreeMap<String, Vec<ScheduleEvent>>,
    /// Scheduled items that fall outside the visible window
    pub outside_window: Vec<ItemId>,
}

impl WeekProjection {
    pub fn events_for(&self, day_key: &str) -> &[ScheduleEvent] {
        self.events_by_day
            .get(day_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn scheduled_count(&self) -> usize {
        self.events_by_day.values().map(Vec::len).sum()
    }

    /// True when nothing in the window needs attention and the tray is empty.
    pub fn is_empty_week(&self) -> bool {
        self.scheduled_count() == 0 && self.unscheduled.is_empty()
    }
}

/// Partition `items` for `window`.
pub fn project(
    items: &[ScheduleItem],
    window: &WeekWindow,
    due_status: &dyn DueStatusProvider,
) -> WeekProjection {
    let mut projection = WeekProjection::default();

    for item in items {
        match item.scheduled_at() {
            None => projection.unscheduled.push(item.clone()),
            Some(scheduled_at) if window.contains(scheduled_at) => {
                let event = ScheduleEvent::from_item(item, scheduled_at, due_status);
                projection
                    .events_by_day
                    .entry(event.date_key.clone())
                    .or_default()
                    .push(event);
            }
            Some(_) => projection.outside_window.push(item.id.clone()),
        }
    }

    for events in projection.events_by_day.values_mut() {
        events.sort_by_key(|event| event.scheduled_at);
    }

    projection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::due_status::NoDueStatus;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn window() -> WeekWindow {
        WeekWindow::from_anchor(
            NaiveDate::from_ymd_opt(2024, 6, 3)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    fn scheduled(id: i64, raw: &str) -> ScheduleItem {
        ScheduleItem::builder(id).scheduled(raw).build()
    }

    #[test]
    fn test_event_grouped_with_time_label() {
        let items = vec![scheduled(1, "2024-06-05T14:30")];

        let projection = project(&items, &window(), &NoDueStatus);

        let events = projection.events_for("2024-06-05");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time_label, "2:30 PM");
        assert_eq!(events[0].title, "Inspection");
    }

    #[test]
    fn test_day_bucket_sorted_by_time() {
        let items = vec![
            scheduled(1, "2024-06-04T15:00"),
            scheduled(2, "2024-06-04T08:15"),
            scheduled(3, "2024-06-04T11:00"),
        ];

        let projection = project(&items, &window(), &NoDueStatus);

        let ids: Vec<&str> = projection
            .events_for("2024-06-04")
            .iter()
            .map(|event| event.item_id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_unscheduled_keeps_input_order_and_absorbs_malformed() {
        let items = vec![
            ScheduleItem::new(9),
            scheduled(4, "garbage"),
            ScheduleItem::new(2),
        ];

        let projection = project(&items, &window(), &NoDueStatus);

        let ids: Vec<&str> = projection
            .unscheduled
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["9", "4", "2"]);
        assert_eq!(projection.scheduled_count(), 0);
    }

    #[test]
    fn test_outside_window_excluded_from_days() {
        let items = vec![
            scheduled(1, "2024-06-08T10:00"),
            scheduled(2, "2024-05-31T10:00"),
            scheduled(3, "2024-06-07T23:59"),
        ];

        let projection = project(&items, &window(), &NoDueStatus);

        assert_eq!(
            projection.outside_window,
            vec![ItemId::from(1), ItemId::from(2)]
        );
        assert_eq!(projection.events_for("2024-06-07").len(), 1);
        assert!(projection.events_for("2024-06-08").is_empty());
    }

    #[test]
    fn test_bare_date_is_all_day() {
        let items = vec![scheduled(1, "2024-06-06")];

        let projection = project(&items, &window(), &NoDueStatus);

        assert_eq!(projection.events_for("2024-06-06")[0].time_label, ALL_DAY_LABEL);
    }

    #[test]
    fn test_empty_week() {
        let projection = project(&[scheduled(1, "2024-07-01T09:00")], &window(), &NoDueStatus);
        assert!(projection.is_empty_week());
        assert_eq!(projection.outside_window.len(), 1);
    }
}
