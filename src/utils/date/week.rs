//! The Monday..Friday window shown on the schedule board.

use chrono::{NaiveDate, NaiveDateTime};

use super::{add_days, date_key, format_week_label, short_date_label, start_of_week};

/// Number of columns on the board.
pub const WORK_WEEK_LEN: usize = 5;

const WEEKDAY_LABELS: [&str; WORK_WEEK_LEN] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// One day column of the visible week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// Stable `YYYY-MM-DD` key used for grouping and drop targets
    pub date_key: String,
    pub weekday_label: &'static str,
    pub date_label: String,
}

/// Visible work week, always rebuilt from its anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    anchor: NaiveDateTime,
    days: Vec<WeekDay>,
}

impl WeekWindow {
    /// Builds the window for the week starting at `anchor`.
    ///
    /// The anchor is normalized to its Monday, so a non-Monday value still
    /// yields a Monday-aligned window.
    pub fn from_anchor(anchor: NaiveDateTime) -> Self {
        let anchor = start_of_week(anchor);
        let days = WEEKDAY_LABELS
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let date = add_days(anchor, index as i64).date();
                WeekDay {
                    date,
                    date_key: date_key(&date),
                    weekday_label: *label,
                    date_label: short_date_label(date),
                }
            })
            .collect();

        Self { anchor, days }
    }

    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    pub fn days(&self) -> &[WeekDay] {
        &self.days
    }

    /// Exclusive end of the window: midnight after Friday.
    pub fn end_exclusive(&self) -> NaiveDateTime {
        add_days(self.anchor, WORK_WEEK_LEN as i64)
    }

    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        ts >= self.anchor && ts < self.end_exclusive()
    }

    pub fn day_by_key(&self, key: &str) -> Option<&WeekDay> {
        self.days.iter().find(|day| day.date_key == key)
    }

    pub fn label(&self) -> String {
        format_week_label(self.anchor)
    }
}
