// Display labels used on the board header and event cards

use chrono::{NaiveDate, NaiveDateTime};
use ons_week_schedule::utils::date::{
    composite_timestamp, format_week_label, parse_time_of_day, parse_timestamp, time_label,
};
use test_case::test_case;

use crate::fixtures::dates;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn test_week_label_same_year() {
    assert_eq!(format_week_label(dates::week_anchor()), "Jun 3 – Jun 7, 2024");
}

#[test]
fn test_week_label_across_new_year() {
    assert_eq!(
        format_week_label(dates::new_year_anchor()),
        "Dec 30 – Jan 3, 2024 / 2025"
    );
}

#[test_case(at(2024, 6, 5, 14, 30), "2:30 PM" ; "afternoon")]
#[test_case(at(2024, 6, 5, 0, 5), "12:05 AM" ; "just after midnight")]
#[test_case(at(2024, 6, 5, 12, 0), "12:00 PM" ; "noon")]
#[test_case(at(2024, 6, 5, 9, 0), "9:00 AM" ; "morning")]
fn test_time_label(ts: NaiveDateTime, expected: &str) {
    assert_eq!(time_label(ts), expected);
}

#[test_case("2024-06-05T14:30", Some(at(2024, 6, 5, 14, 30)) ; "minutes")]
#[test_case("2024-06-05T14:30:00.000", Some(at(2024, 6, 5, 14, 30)) ; "fractional seconds")]
#[test_case("2024-06-05 14:30:00", Some(at(2024, 6, 5, 14, 30)) ; "space separator")]
#[test_case("2024-06-05", Some(at(2024, 6, 5, 0, 0)) ; "bare date")]
#[test_case("  ", None ; "blank")]
#[test_case("06/05/2024", None ; "locale format")]
fn test_parse_timestamp(raw: &str, expected: Option<NaiveDateTime>) {
    assert_eq!(parse_timestamp(raw), expected);
}

#[test_case("13:00", "2024-06-07T13:00" ; "plain")]
#[test_case("07:05:30", "2024-06-07T07:05" ; "seconds dropped")]
fn test_composite_timestamp(time: &str, expected: &str) {
    let time = parse_time_of_day(time).unwrap();
    assert_eq!(composite_timestamp(dates::friday(), time), expected);
}
