//! Due-status decoration for scheduled items.
//!
//! The board only passes timestamps through; how urgency is described is
//! up to a [`DueStatusProvider`]. [`RelativeDueStatus`] is the stock
//! provider that compares against a [`Clock`].

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::utils::date::Clock;

/// Visual tone of a due label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueTone {
    Overdue,
    Today,
    Soon,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueStatus {
    pub label: String,
    pub tone: DueTone,
}

impl DueStatus {
    pub fn new(label: impl Into<String>, tone: DueTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

pub trait DueStatusProvider: Send + Sync {
    fn describe(&self, scheduled_at: NaiveDateTime) -> Option<DueStatus>;
}

/// Provider that never decorates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDueStatus;

impl DueStatusProvider for NoDueStatus {
    fn describe(&self, _scheduled_at: NaiveDateTime) -> Option<DueStatus> {
        None
    }
}

/// Labels relative to today's date on the given clock.
pub struct RelativeDueStatus {
    clock: Arc<dyn Clock>,
}

impl RelativeDueStatus {
    /// Days ahead that still count as "soon".
    const SOON_WINDOW_DAYS: i64 = 7;

    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl DueStatusProvider for RelativeDueStatus {
    fn describe(&self, scheduled_at: NaiveDateTime) -> Option<DueStatus> {
        let days_until = (scheduled_at.date() - self.clock.today()).num_days();

        let status = match days_until {
            d if d < 0 => DueStatus::new("Past due", DueTone::Overdue),
            0 => DueStatus::new("Today", DueTone::Today),
            1 => DueStatus::new("Tomorrow", DueTone::Soon),
            d if d <= Self::SOON_WINDOW_DAYS => {
                DueStatus::new(format!("Due in {} days", d), DueTone::Soon)
            }
            _ => DueStatus::new("Scheduled", DueTone::Upcoming),
        };

        Some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::FixedClock;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn june(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn provider() -> RelativeDueStatus {
        RelativeDueStatus::new(Arc::new(FixedClock(june(5, 12))))
    }

    #[test_case(june(4, 16), "Past due", DueTone::Overdue ; "yesterday")]
    #[test_case(june(5, 8), "Today", DueTone::Today ; "earlier today is still today")]
    #[test_case(june(6, 9), "Tomorrow", DueTone::Soon ; "tomorrow")]
    #[test_case(june(10, 9), "Due in 5 days", DueTone::Soon ; "within a week")]
    #[test_case(june(20, 9), "Scheduled", DueTone::Upcoming ; "far future")]
    fn test_relative_labels(at: NaiveDateTime, label: &str, tone: DueTone) {
        assert_eq!(provider().describe(at), Some(DueStatus::new(label, tone)));
    }

    #[test]
    fn test_no_due_status() {
        assert_eq!(NoDueStatus.describe(june(5, 9)), None);
    }
}
