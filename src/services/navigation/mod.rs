//! Week navigation for the schedule board.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::utils::date::{add_days, start_of_week, Clock, WeekWindow};

/// Anchor `delta_weeks` whole weeks away from `anchor`. Deltas past the
/// calendar's range clamp to its first or last representable instant.
pub fn shift_week(anchor: NaiveDateTime, delta_weeks: i64) -> NaiveDateTime {
    let days = delta_weeks
        .checked_mul(7)
        .unwrap_or(if delta_weeks < 0 { i64::MIN } else { i64::MAX });
    add_days(anchor, days)
}

/// Holds the Monday anchor of the visible week. The window itself is always
/// rebuilt from the anchor, so nothing else needs caching.
pub struct WeekNavigator {
    anchor: NaiveDateTime,
    clock: Arc<dyn Clock>,
}

impl WeekNavigator {
    /// Starts on the week containing the clock's "now".
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let anchor = start_of_week(clock.now());
        Self { anchor, clock }
    }

    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    pub fn window(&self) -> WeekWindow {
        WeekWindow::from_anchor(self.anchor)
    }

    pub fn label(&self) -> String {
        self.window().label()
    }

    pub fn shift_week(&mut self, delta_weeks: i64) -> NaiveDateTime {
        self.anchor = shift_week(self.anchor, delta_weeks);
        log::debug!("Week anchor moved to {}", self.anchor.date());
        self.anchor
    }

    pub fn previous_week(&mut self) -> NaiveDateTime {
        self.shift_week(-1)
    }

    pub fn next_week(&mut self) -> NaiveDateTime {
        self.shift_week(1)
    }

    pub fn reset_to_current_week(&mut self) -> NaiveDateTime {
        self.anchor = start_of_week(self.clock.now());
        self.anchor
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Days strictly before today get a "Past" marker.
    pub fn is_past(&self, day: NaiveDate) -> bool {
        day < self.today()
    }

    pub fn contains_today(&self) -> bool {
        self.window().contains(self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::FixedClock;

    fn june(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn navigator_on(now: NaiveDateTime) -> WeekNavigator {
        WeekNavigator::new(Arc::new(FixedClock(now)))
    }

    #[test]
    fn test_starts_on_current_monday() {
        let navigator = navigator_on(june(5) + chrono::Duration::hours(10));
        assert_eq!(navigator.anchor(), june(3));
        assert!(navigator.contains_today());
    }

    #[test]
    fn test_shift_both_directions() {
        let mut navigator = navigator_on(june(3));
        assert_eq!(navigator.previous_week(), NaiveDate::from_ymd_opt(2024, 5, 27).unwrap().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(navigator.shift_week(2), june(10));
        assert!(!navigator.contains_today());
    }

    #[test]
    fn test_reset_returns_to_clock_week() {
        let mut navigator = navigator_on(june(6));
        navigator.shift_week(5);

        assert_eq!(navigator.reset_to_current_week(), june(3));
    }

    #[test]
    fn test_is_past() {
        let navigator = navigator_on(june(5) + chrono::Duration::hours(9));
        assert!(navigator.is_past(june(4).date()));
        assert!(!navigator.is_past(june(5).date()));
        assert!(!navigator.is_past(june(7).date()));
    }

    #[test]
    fn test_free_shift_week() {
        assert_eq!(shift_week(june(3), 1), june(10));
        assert_eq!(shift_week(june(3), 0), june(3));
    }

    #[test]
    fn test_shift_week_huge_delta_clamps() {
        assert_eq!(shift_week(june(3), 20_000_000), NaiveDateTime::MAX);
        assert_eq!(shift_week(june(3), i64::MAX), NaiveDateTime::MAX);
        assert_eq!(shift_week(june(3), i64::MIN), NaiveDateTime::MIN);

        let mut navigator = navigator_on(june(3));
        assert_eq!(navigator.shift_week(-20_000_000), NaiveDateTime::MIN);
        assert_eq!(navigator.reset_to_current_week(), june(3));
    }
}
