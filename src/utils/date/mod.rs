// Date utility functions
// Local wall-clock arithmetic for the Monday..Friday scheduling window

mod clock;
mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use week::{WeekDay, WeekWindow, WORK_WEEK_LEN};

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Naive formats accepted for stored schedule timestamps, tried in order.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Truncates the time of day to local midnight.
pub fn start_of_day(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_time(NaiveTime::MIN)
}

/// Returns local midnight of the Monday at or before `ts`.
///
/// The weekday index counts from Sunday = 0, so the offset back to Monday is
/// `(index + 6) % 7`. A Sunday input therefore walks back six days.
pub fn start_of_week(ts: NaiveDateTime) -> NaiveDateTime {
    let day = start_of_day(ts);
    let weekday_index = day.weekday().num_days_from_sunday() as i64;
    let offset = (weekday_index + 6) % 7;
    day.checked_sub_signed(Duration::days(offset)).unwrap_or(day)
}

/// Moves `ts` by whole days, saturating at the ends of the representable
/// range instead of overflowing.
pub fn add_days(ts: NaiveDateTime, days: i64) -> NaiveDateTime {
    match Duration::try_days(days).and_then(|delta| ts.checked_add_signed(delta)) {
        Some(moved) => moved,
        None => {
            log::warn!("Moving {} by {} days is out of range, clamping", ts, days);
            if days < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            }
        }
    }
}

/// Zero-padded `YYYY-MM-DD` grouping key. Never locale dependent.
pub fn date_key<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Short display label such as `Jun 3`.
pub fn short_date_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Human label for the visible Monday..Friday span.
///
/// `Jun 3 – Jun 7, 2024`, or `Dec 30 – Jan 3, 2024 / 2025` when the week
/// straddles New Year.
pub fn format_week_label(anchor: NaiveDateTime) -> String {
    let start = anchor.date();
    let end = add_days(anchor, WORK_WEEK_LEN as i64 - 1).date();
    let year_label = if start.year() == end.year() {
        start.year().to_string()
    } else {
        format!("{} / {}", start.year(), end.year())
    };
    format!(
        "{} – {}, {}",
        short_date_label(start),
        short_date_label(end),
        year_label
    )
}

/// 12-hour clock label used on event cards, e.g. `2:30 PM`.
pub fn time_label(ts: NaiveDateTime) -> String {
    ts.format("%-I:%M %p").to_string()
}

/// Value for a time-of-day input, e.g. `14:30`.
pub fn time_input_value(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parses a stored schedule timestamp into local wall-clock time.
///
/// Offset-carrying RFC 3339 values are converted to the local zone; naive
/// values are taken as already local. A bare date means local midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// True for a bare `YYYY-MM-DD` value with no time of day.
pub fn is_date_only(raw: &str) -> bool {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").is_ok()
}

/// Parses `hh:mm` (or `hh:mm:ss`) as entered in the time prompt.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Local `YYYY-MM-DDThh:mm` value sent to the scheduling endpoint.
pub fn composite_timestamp(day: NaiveDate, time: NaiveTime) -> String {
    format!("{}T{}", date_key(&day), time_input_value(time))
}
