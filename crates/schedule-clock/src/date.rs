//! Schedule date parsing and day arithmetic.
//!
//! The schedule page writes its week-start date as free text ("29th March
//! 2021"). [`parse_schedule_date`] normalizes that into a [`NaiveDate`];
//! [`shift_days`] then anchors each weekday column by offsetting the week
//! start. The `YYYY-MM-DD` interchange format used between modules is
//! produced and consumed by [`format_rfc_date`] and [`parse_rfc_date`].

use chrono::{Duration, NaiveDate};

use crate::error::{Result, ScheduleError};

/// English month names, abbreviated to the three letters the matcher keys on.
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a schedule date string like `"29th March 2021"`.
///
/// The text must split on whitespace into exactly three tokens: a day with
/// an optional ordinal suffix (`29th`, `1st`), a month name matched by its
/// first three letters (case-sensitive, `Jan`..`Dec`), and a year.
///
/// # Errors
///
/// Returns [`ScheduleError::DateParse`] if the shape is wrong, the month is
/// unrecognized, the day or year is not numeric, or the triple does not name
/// a real calendar date. Unrecognized input is never silently coerced.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_clock::date::parse_schedule_date;
///
/// let date = parse_schedule_date("29th March 2021").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 29).unwrap());
/// ```
pub fn parse_schedule_date(text: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let [day_part, month_part, year_part] = parts[..] else {
        return Err(ScheduleError::DateParse(format!(
            "expected '<day> <month> <year>', got '{}'",
            text.trim()
        )));
    };

    // Strip the ordinal suffix (st/nd/rd/th) by taking the leading digit run.
    let digit_len = day_part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(day_part.len());
    let day: u32 = day_part[..digit_len]
        .parse()
        .map_err(|_| ScheduleError::DateParse(format!("invalid day '{day_part}'")))?;

    let month = MONTH_NAMES
        .iter()
        .position(|name| month_part.starts_with(name))
        .map(|i| i as u32 + 1)
        .ok_or_else(|| ScheduleError::DateParse(format!("unrecognized month '{month_part}'")))?;

    let year: i32 = year_part
        .parse()
        .map_err(|_| ScheduleError::DateParse(format!("invalid year '{year_part}'")))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ScheduleError::DateParse(format!("'{}' is not a calendar date", text.trim()))
    })
}

/// Shift a date by a signed number of days.
///
/// Exact calendar arithmetic: month and year boundaries roll over, leap
/// days included. The weekly table only ever asks for offsets 0 through 6,
/// but any delta within chrono's date range is fine.
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Render a date in the normalized `YYYY-MM-DD` interchange format.
pub fn format_rfc_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a normalized `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`ScheduleError::DateParse`] if the string is not a zero-padded
/// `YYYY-MM-DD` date.
pub fn parse_rfc_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| ScheduleError::DateParse(format!("'{text}': {e}")))
}

// ── Tests ───────────────────────────────────────────────────────────────────
