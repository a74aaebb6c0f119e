// Week window and projector properties with random inputs

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use ons_week_schedule::models::schedule_item::ScheduleItem;
use ons_week_schedule::services::due_status::NoDueStatus;
use ons_week_schedule::services::navigation::shift_week;
use ons_week_schedule::services::projector::project;
use ons_week_schedule::utils::date::{date_key, start_of_week, WeekWindow, WORK_WEEK_LEN};
use proptest::prelude::*;

fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..3650, 0i64..86_400).prop_map(|(days, seconds)| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::days(days)
            + Duration::seconds(seconds)
    })
}

/// Raw `scheduled_datetime` values: absent, blank, garbage or a real
/// timestamp within a few weeks of the anchor.
fn raw_schedule() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("not a date".to_string())),
        (-21i64..28, 0u32..24, 0u32..60).prop_map(|(offset, hour, minute)| {
            let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap() + Duration::days(offset);
            Some(format!("{}T{:02}:{:02}", date_key(&day), hour, minute))
        }),
    ]
}

proptest! {
    /// Property: the week always starts on a Monday at midnight, no later
    /// than the input and less than a week before it
    #[test]
    fn prop_start_of_week_is_monday_before_input(ts in timestamp()) {
        let start = start_of_week(ts);
        prop_assert_eq!(start.weekday(), Weekday::Mon);
        prop_assert_eq!(start.time(), chrono::NaiveTime::MIN);
        prop_assert!(start <= ts);
        prop_assert!(ts - start < Duration::days(7));
    }

    /// Property: normalising twice changes nothing
    #[test]
    fn prop_start_of_week_is_idempotent(ts in timestamp()) {
        let once = start_of_week(ts);
        prop_assert_eq!(start_of_week(once), once);
    }

    /// Property: five consecutive days with unique keys
    #[test]
    fn prop_window_has_five_consecutive_days(ts in timestamp()) {
        let window = WeekWindow::from_anchor(ts);
        let days = window.days();
        prop_assert_eq!(days.len(), WORK_WEEK_LEN);

        let keys: HashSet<&str> = days.iter().map(|day| day.date_key.as_str()).collect();
        prop_assert_eq!(keys.len(), WORK_WEEK_LEN);

        for (i, day) in days.iter().enumerate() {
            prop_assert_eq!(day.date, window.anchor().date() + Duration::days(i as i64));
        }
        prop_assert_eq!(days[4].date.weekday(), Weekday::Fri);
    }

    /// Property: shifting forward then back returns to the same anchor
    #[test]
    fn prop_shift_week_round_trips(ts in timestamp(), delta in -60i64..60) {
        let anchor = start_of_week(ts);
        prop_assert_eq!(shift_week(shift_week(anchor, delta), -delta), anchor);
        prop_assert_eq!(shift_week(anchor, delta).weekday(), Weekday::Mon);
    }

    /// Property: any delta, however large, yields an anchor without panicking
    #[test]
    fn prop_shift_week_is_total(ts in timestamp(), delta in any::<i64>()) {
        let anchor = start_of_week(ts);
        let shifted = shift_week(anchor, delta);
        if shifted != NaiveDateTime::MIN && shifted != NaiveDateTime::MAX {
            prop_assert_eq!(shifted.weekday(), Weekday::Mon);
            prop_assert_eq!(shifted.date() - anchor.date(), Duration::days(delta * 7));
        }
    }

    /// Property: every item lands in exactly one partition
    #[test]
    fn prop_projection_partitions_items(raws in prop::collection::vec(raw_schedule(), 0..40)) {
        let items: Vec<ScheduleItem> = raws
            .into_iter()
            .enumerate()
            .map(|(i, raw)| {
                let builder = ScheduleItem::builder(i as i64);
                match raw {
                    Some(raw) => builder.scheduled(raw).build(),
                    None => builder.build(),
                }
            })
            .collect();
        let window = WeekWindow::from_anchor(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        );

        let projection = project(&items, &window, &NoDueStatus);

        let mut seen: Vec<String> = projection
            .unscheduled
            .iter()
            .map(|item| item.id.to_string())
            .chain(projection.events_by_day.values().flatten().map(|event| event.item_id.to_string()))
            .chain(projection.outside_window.iter().map(|id| id.to_string()))
            .collect();
        seen.sort();
        let mut expected: Vec<String> = items.iter().map(|item| item.id.to_string()).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);

        for (key, events) in &projection.events_by_day {
            prop_assert!(window.day_by_key(key).is_some());
            prop_assert!(events.windows(2).all(|pair| pair[0].scheduled_at <= pair[1].scheduled_at));
        }
    }
}
