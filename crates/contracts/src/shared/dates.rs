//! Calendar-date helpers.
//!
//! All dates are local calendar dates (`NaiveDate`); nothing here goes through
//! a UTC conversion, so an ISO string never shifts by a day.

use chrono::{Datelike, Duration, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTH_ABBRS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse `YYYY-MM-DD` into a calendar date. Anything else yields `None`.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Full month name for a 1-based month ("June"). Out-of-range months yield "".
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Three-letter month abbreviation for a 1-based month ("Jun").
pub fn month_abbr(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_ABBRS.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// "June 2026"
pub fn format_month_title(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Monday that starts the week of `date`. Sunday counts as day 7 of the
/// previous week, so it maps back six days.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Short label for a date range:
/// - `"Jun 22"` without an end date
/// - `"Jun 22–26"` inside one month
/// - `"Jun 29 – Jul 3"` across months
///
/// An unparseable start is returned unchanged; an unparseable end is ignored.
pub fn format_week_range(start_iso: &str, end_iso: Option<&str>) -> String {
    let Some(start) = parse_iso_date(start_iso) else {
        return start_iso.to_string();
    };
    match end_iso.and_then(parse_iso_date) {
        None => format!("{} {}", month_abbr(start.month()), start.day()),
        Some(end) if end.month() == start.month() && end.year() == start.year() => format!(
            "{} {}–{}",
            month_abbr(start.month()),
            start.day(),
            end.day()
        ),
        Some(end) => format!(
            "{} {} – {} {}",
            month_abbr(start.month()),
            start.day(),
            month_abbr(end.month()),
            end.day()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_iso_date_has_no_day_shift() {
        assert_eq!(parse_iso_date("2026-06-01"), Some(d(2026, 6, 1)));
        assert_eq!(parse_iso_date(" 2026-12-31 "), Some(d(2026, 12, 31)));
        assert_eq!(parse_iso_date("6/1/2026"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_monday_of_week() {
        // 2026-06-22 is a Monday
        assert_eq!(monday_of_week(d(2026, 6, 22)), d(2026, 6, 22));
        assert_eq!(monday_of_week(d(2026, 6, 26)), d(2026, 6, 22));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(monday_of_week(d(2026, 6, 28)), d(2026, 6, 22));
        // across a month boundary
        assert_eq!(monday_of_week(d(2026, 7, 1)), d(2026, 6, 29));
    }

    #[test]
    fn test_format_week_range() {
        assert_eq!(format_week_range("2026-06-22", None), "Jun 22");
        assert_eq!(format_week_range("2026-06-22", Some("2026-06-26")), "Jun 22–26");
        assert_eq!(
            format_week_range("2026-06-29", Some("2026-07-03")),
            "Jun 29 – Jul 3"
        );
        assert_eq!(format_week_range("2026-06-22", Some("soon")), "Jun 22");
        assert_eq!(format_week_range("TBD", None), "TBD");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 12), 31);
        assert_eq!(days_in_month(2026, 13), 0);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(6), "June");
        assert_eq!(month_abbr(12), "Dec");
        assert_eq!(month_name(0), "");
        assert_eq!(format_month_title(2026, 7), "July 2026");
    }
}
