//! 12-hour token parsing and local-time rendering.
//!
//! Takes a time token as written on the page ("7pm", "11:30am"), pins it to
//! a calendar date with the UK offset for that date, and re-renders the
//! instant in the caller's timezone. All functions are pure; the supplied
//! [`TimeZone`] is the only point where the platform's timezone data is
//! consulted (callers typically pass `chrono::Local`).

use std::fmt;

use chrono::{NaiveDate, TimeZone, Timelike};
use serde::Serialize;

use crate::dst::uk_utc_offset;
use crate::error::{Result, ScheduleError};

/// AM/PM designator in 12-hour clock notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        })
    }
}

/// A time as written on the schedule page: 12-hour clock plus meridiem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockTime12 {
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

impl ClockTime12 {
    /// Parse a token of the form `<H>[:<MM>](am|pm)`, meridiem
    /// case-insensitive, minute defaulting to 0.
    ///
    /// Shape only: the hour is range-checked later by [`hour_to_24`], so
    /// `"13pm"` parses here and fails there.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::TimeParse`] if the token does not match the
    /// pattern or the minute is not 0-59.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();
        let (digits, meridiem) = if let Some(rest) = lower.strip_suffix("pm") {
            (rest, Meridiem::Pm)
        } else if let Some(rest) = lower.strip_suffix("am") {
            (rest, Meridiem::Am)
        } else {
            return Err(ScheduleError::TimeParse(format!(
                "expected am/pm suffix in '{trimmed}'"
            )));
        };

        let (hour_part, minute_part) = match digits.split_once(':') {
            Some((h, m)) => (h, Some(m)),
            None => (digits, None),
        };

        let hour = parse_digits(hour_part)
            .ok_or_else(|| ScheduleError::TimeParse(format!("invalid hour in '{trimmed}'")))?;
        let minute = match minute_part {
            Some(m) => parse_digits(m)
                .ok_or_else(|| ScheduleError::TimeParse(format!("invalid minute in '{trimmed}'")))?,
            None => 0,
        };
        if minute > 59 {
            return Err(ScheduleError::TimeParse(format!(
                "minute out of range in '{trimmed}'"
            )));
        }

        Ok(ClockTime12 {
            hour,
            minute,
            meridiem,
        })
    }
}

/// Parse a bare ASCII digit run. Rejects signs, whitespace, and empty input.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Map a 12-hour clock hour to the 24-hour clock.
///
/// Hours 1-11 keep their value for AM and gain 12 for PM; 12 (or 0) maps to
/// 12 for PM and 0 for AM. Anything above 12 is not a 12-hour clock value.
pub fn hour_to_24(hour: u32, meridiem: Meridiem) -> Option<u32> {
    match (hour, meridiem) {
        (1..=11, Meridiem::Am) => Some(hour),
        (1..=11, Meridiem::Pm) => Some(hour + 12),
        (0 | 12, Meridiem::Am) => Some(0),
        (0 | 12, Meridiem::Pm) => Some(12),
        _ => None,
    }
}

/// Map a 24-hour clock hour to the 12-hour clock. Hour 0 (or 24) comes back
/// as 12am, never "0am".
pub fn hour_to_12(hour: u32) -> (u32, Meridiem) {
    match hour {
        0 | 24 => (12, Meridiem::Am),
        1..=11 => (hour, Meridiem::Am),
        12 => (12, Meridiem::Pm),
        _ => (hour - 12, Meridiem::Pm),
    }
}

/// Output clock format for rendered local times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimeFormat {
    /// Zero-padded `HH:MM`.
    #[default]
    TwentyFourHour,
    /// `H[:MM]am/pm`, minutes omitted when zero.
    TwelveHour,
}

/// Convert a UK schedule time token to the viewer's local clock.
///
/// The token is interpreted as UK wall time on `date`: +01:00 if British
/// Summer Time is in effect on that date, +00:00 otherwise. The resulting
/// instant is re-expressed in `tz` and rendered per `format`.
///
/// # Errors
///
/// Returns [`ScheduleError::TimeParse`] if the token does not match
/// `<H>[:<MM>](am|pm)` or its hour is outside the 12-hour clock.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use schedule_clock::convert::{convert_uk_time, TimeFormat};
///
/// // Mid-January: GMT, so 7pm UK is 19:00 UTC
/// let date = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
/// let local = convert_uk_time(date, "7pm", &Utc, TimeFormat::TwentyFourHour).unwrap();
/// assert_eq!(local, "19:00");
/// ```
pub fn convert_uk_time<T: TimeZone>(
    date: NaiveDate,
    time_text: &str,
    tz: &T,
    format: TimeFormat,
) -> Result<String> {
    let clock = ClockTime12::parse(time_text)?;
    let hour24 = hour_to_24(clock.hour, clock.meridiem).ok_or_else(|| {
        ScheduleError::TimeParse(format!(
            "hour {} is not on the 12-hour clock",
            clock.hour
        ))
    })?;

    let naive = date.and_hms_opt(hour24, clock.minute, 0).ok_or_else(|| {
        ScheduleError::TimeParse(format!("'{}' is not a wall time", time_text.trim()))
    })?;
    let instant = uk_utc_offset(date)
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| {
            ScheduleError::TimeParse(format!("'{}' has no single instant", time_text.trim()))
        })?;

    let local = instant.with_timezone(tz);
    Ok(render_local(local.hour(), local.minute(), format))
}

/// Render a local hour/minute pair in the requested clock format.
fn render_local(hour: u32, minute: u32, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwentyFourHour => format!("{hour:02}:{minute:02}"),
        TimeFormat::TwelveHour => {
            let (hour12, meridiem) = hour_to_12(hour);
            if minute == 0 {
                format!("{hour12}{meridiem}")
            } else {
                format!("{hour12}:{minute:02}{meridiem}")
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use chrono_tz::Europe::Berlin;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── ClockTime12 parsing ─────────────────────────────────────────────

    #[test]
    fn test_parse_hour_only() {
        let t = ClockTime12::parse("7pm").unwrap();
        assert_eq!((t.hour, t.minute, t.meridiem), (7, 0, Meridiem::Pm));
    }

    #[test]
    fn test_parse_hour_and_minute() {
        let t = ClockTime12::parse("11:30am").unwrap();
        assert_eq!((t.hour, t.minute, t.meridiem), (11, 30, Meridiem::Am));
    }

    #[test]
    fn test_parse_meridiem_case_insensitive() {
        assert_eq!(ClockTime12::parse("7PM").unwrap().meridiem, Meridiem::Pm);
        assert_eq!(ClockTime12::parse("7Am").unwrap().meridiem, Meridiem::Am);
    }

    #[test]
    fn test_parse_rejects_missing_meridiem() {
        assert!(ClockTime12::parse("19:00").is_err());
        assert!(ClockTime12::parse("7").is_err());
    }

    #[test]
    fn test_parse_rejects_inner_whitespace() {
        assert!(ClockTime12::parse("7 pm").is_err());
    }

    #[test]
    fn test_parse_rejects_signed_hour() {
        assert!(ClockTime12::parse("+7pm").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_minute() {
        assert!(ClockTime12::parse("7:pm").is_err());
    }

    #[test]
    fn test_parse_rejects_minute_out_of_range() {
        assert!(ClockTime12::parse("7:60pm").is_err());
    }

    // ── Hour mapping ────────────────────────────────────────────────────

    #[test]
    fn test_hour_to_24_table() {
        assert_eq!(hour_to_24(1, Meridiem::Am), Some(1));
        assert_eq!(hour_to_24(11, Meridiem::Am), Some(11));
        assert_eq!(hour_to_24(1, Meridiem::Pm), Some(13));
        assert_eq!(hour_to_24(11, Meridiem::Pm), Some(23));
        assert_eq!(hour_to_24(12, Meridiem::Am), Some(0));
        assert_eq!(hour_to_24(12, Meridiem::Pm), Some(12));
        assert_eq!(hour_to_24(0, Meridiem::Am), Some(0));
        assert_eq!(hour_to_24(0, Meridiem::Pm), Some(12));
    }

    #[test]
    fn test_hour_to_24_rejects_out_of_range() {
        assert_eq!(hour_to_24(13, Meridiem::Pm), None);
        assert_eq!(hour_to_24(99, Meridiem::Am), None);
    }

    #[test]
    fn test_hour_to_12_midnight_boundary() {
        // 24-hour 0 maps back to 12am, not "0am"
        assert_eq!(hour_to_12(0), (12, Meridiem::Am));
        assert_eq!(hour_to_12(24), (12, Meridiem::Am));
    }

    proptest! {
        #[test]
        fn test_hour_mapping_round_trips(hour in 1u32..=12, pm in any::<bool>()) {
            let meridiem = if pm { Meridiem::Pm } else { Meridiem::Am };
            let hour24 = hour_to_24(hour, meridiem).unwrap();
            prop_assert_eq!(hour_to_12(hour24), (hour, meridiem));
        }
    }

    // ── convert_uk_time ─────────────────────────────────────────────────

    #[test]
    fn test_convert_gmt_to_utc() {
        let date = ymd(2021, 1, 15);
        assert_eq!(
            convert_uk_time(date, "7pm", &Utc, TimeFormat::TwentyFourHour).unwrap(),
            "19:00"
        );
    }

    #[test]
    fn test_convert_midnight_and_noon() {
        let date = ymd(2021, 1, 15);
        assert_eq!(
            convert_uk_time(date, "12am", &Utc, TimeFormat::TwentyFourHour).unwrap(),
            "00:00"
        );
        assert_eq!(
            convert_uk_time(date, "12pm", &Utc, TimeFormat::TwentyFourHour).unwrap(),
            "12:00"
        );
    }

    #[test]
    fn test_convert_bst_shifts_back_to_utc() {
        // Mid-July: BST, so 7pm UK is 18:00 UTC
        let date = ymd(2021, 7, 15);
        assert_eq!(
            convert_uk_time(date, "7pm", &Utc, TimeFormat::TwentyFourHour).unwrap(),
            "18:00"
        );
    }

    #[test]
    fn test_convert_to_fixed_offset_target() {
        // 7pm GMT at UTC+5:30 is 00:30 the next day; only the clock shows
        let date = ymd(2021, 1, 15);
        let target = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            convert_uk_time(date, "7pm", &target, TimeFormat::TwentyFourHour).unwrap(),
            "00:30"
        );
    }

    #[test]
    fn test_convert_to_tzdb_target() {
        // July: UK is BST (+1), Berlin is CEST (+2)
        let date = ymd(2021, 7, 15);
        assert_eq!(
            convert_uk_time(date, "7pm", &Berlin, TimeFormat::TwentyFourHour).unwrap(),
            "20:00"
        );
    }

    #[test]
    fn test_convert_twelve_hour_output() {
        let date = ymd(2021, 1, 15);
        assert_eq!(
            convert_uk_time(date, "7:05pm", &Utc, TimeFormat::TwelveHour).unwrap(),
            "7:05pm"
        );
        // Minutes omitted when zero
        assert_eq!(
            convert_uk_time(date, "7pm", &Utc, TimeFormat::TwelveHour).unwrap(),
            "7pm"
        );
    }

    #[test]
    fn test_convert_twelve_hour_midnight() {
        let date = ymd(2021, 1, 15);
        assert_eq!(
            convert_uk_time(date, "12am", &Utc, TimeFormat::TwelveHour).unwrap(),
            "12am"
        );
    }

    #[test]
    fn test_convert_out_of_range_hour_is_error() {
        let date = ymd(2021, 1, 15);
        let err = convert_uk_time(date, "13pm", &Utc, TimeFormat::TwentyFourHour).unwrap_err();
        assert!(err.to_string().contains("12-hour clock"), "got: {err}");
    }

    #[test]
    fn test_convert_unparseable_token_is_error() {
        let date = ymd(2021, 1, 15);
        assert!(convert_uk_time(date, "soon", &Utc, TimeFormat::TwentyFourHour).is_err());
    }
}
