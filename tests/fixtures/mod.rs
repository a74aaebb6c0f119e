// Test fixtures - reusable test data
// Shared dates and inspection lists for the integration suites

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use ons_week_schedule::models::schedule_item::ScheduleItem;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday Jun 3, 2024 at midnight, the anchor used throughout
    pub fn week_anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Wednesday Jun 5, 2024 at 10:15, a "now" inside the anchor week
    pub fn midweek_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 5)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap()
    }

    /// Friday of the anchor week
    pub fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 7).unwrap()
    }

    /// Monday Dec 30, 2024, a week straddling New Year
    pub fn new_year_anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 30)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }
}

/// Sample inspections for testing
pub mod items {
    use super::*;
    use ons_week_schedule::models::schedule_item::AddressId;

    /// Unscheduled routine inspection, id 42
    pub fn unscheduled_42() -> ScheduleItem {
        ScheduleItem::builder(42)
            .title("Routine")
            .address("12 Main St", Some(AddressId::new("9")))
            .build()
    }

    /// Scheduled Wednesday afternoon, id 7
    pub fn wednesday_afternoon_7() -> ScheduleItem {
        ScheduleItem::builder(7)
            .title("Complaint")
            .scheduled("2024-06-05T14:30")
            .status("Pending")
            .build()
    }

    /// Scheduled Monday morning, id 8
    pub fn monday_morning_8() -> ScheduleItem {
        ScheduleItem::builder(8)
            .title("Follow-up")
            .scheduled("2024-06-03T08:00:00")
            .build()
    }

    /// Scheduled the following week, id 9
    pub fn next_week_9() -> ScheduleItem {
        ScheduleItem::builder(9).scheduled("2024-06-11T09:00").build()
    }

    /// Carries a timestamp nobody can parse, id 10
    pub fn malformed_10() -> ScheduleItem {
        ScheduleItem::builder(10).scheduled("next tuesday").build()
    }

    pub fn week_items() -> Vec<ScheduleItem> {
        vec![
            unscheduled_42(),
            wednesday_afternoon_7(),
            monday_morning_8(),
            next_week_9(),
            malformed_10(),
        ]
    }

    /// Backend-shaped JSON for the same inspections
    pub fn week_items_json() -> &'static str {
        r#"[
            {"id": 42, "source": "Routine", "scheduled_datetime": null,
             "address": {"id": 9, "combadd": "12 Main St"}},
            {"id": 7, "source": "Complaint", "scheduled_datetime": "2024-06-05T14:30",
             "status": "Pending", "inspector": {"name": "R. Diaz"}},
            {"id": "8", "source": "Follow-up", "scheduled_datetime": "2024-06-03 08:00:00"},
            {"id": 9, "scheduled_datetime": "2024-06-11T09:00"},
            {"id": 10, "scheduled_datetime": "next tuesday"}
        ]"#
    }
}
