//! Week-table localization.
//!
//! Scans each weekday cell for 12-hour time tokens, converts every token
//! into the viewer's timezone, and substitutes the rendered local time back
//! in place. A token that fails to parse or convert degrades to
//! [`UNPARSEABLE_MARKER`] for that token only; sibling tokens and cells are
//! unaffected. A malformed week-start date, by contrast, is surfaced as an
//! error up front, since every cell's conversion depends on it.

use std::sync::OnceLock;

use chrono::{NaiveDate, TimeZone};
use regex::Regex;

use crate::convert::{convert_uk_time, TimeFormat};
use crate::date::{parse_schedule_date, shift_days};
use crate::error::Result;
use crate::error::ScheduleError;

/// Substituted for any time token that fails to parse or convert.
pub const UNPARSEABLE_MARKER: &str = "???";

/// Heading prefix on the schedule page that carries the week-start date.
const WEEK_HEADING_PREFIX: &str = "Week Commencing Mon ";

/// Options for [`localize_week`] and [`localize_cell`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalizeOptions {
    /// Clock format for rendered local times.
    pub format: TimeFormat,
}

/// The time-token pattern scanned for inside cell text.
fn time_token() -> &'static Regex {
    static TIME_TOKEN: OnceLock<Regex> = OnceLock::new();
    TIME_TOKEN.get_or_init(|| {
        Regex::new(r"(?i)\d+(?::\d+)?(?:am|pm)").expect("time token pattern is valid")
    })
}

/// Extract the week-start date from a schedule heading like
/// `"Week Commencing Mon 29th March 2021"`.
///
/// # Errors
///
/// Returns [`ScheduleError::DateParse`] if the heading does not carry the
/// expected prefix or the trailing date does not parse.
pub fn week_start_from_heading(heading: &str) -> Result<NaiveDate> {
    let rest = heading
        .trim()
        .strip_prefix(WEEK_HEADING_PREFIX)
        .ok_or_else(|| {
            ScheduleError::DateParse(format!(
                "heading does not carry a week start: '{}'",
                heading.trim()
            ))
        })?;
    parse_schedule_date(rest)
}

/// Rewrite every time token in one cell to the viewer's local clock.
///
/// Text outside the tokens passes through untouched, so blank cells and
/// annotations around the times survive as-is.
pub fn localize_cell<T: TimeZone>(
    date: NaiveDate,
    cell: &str,
    tz: &T,
    options: LocalizeOptions,
) -> String {
    time_token()
        .replace_all(cell, |caps: &regex::Captures<'_>| {
            convert_uk_time(date, &caps[0], tz, options.format)
                .unwrap_or_else(|_| UNPARSEABLE_MARKER.to_string())
        })
        .into_owned()
}

/// Localize one week of schedule cells.
///
/// `cells` holds the UK-time cell text for Monday onward in column order;
/// cell `i` is anchored to `week_start` shifted by `i` days, so the BST
/// decision is made per weekday rather than once per week. That matters on
/// transition weeks, where the Sunday column already carries the new offset.
pub fn localize_week<T, S>(
    week_start: NaiveDate,
    cells: &[S],
    tz: &T,
    options: LocalizeOptions,
) -> Vec<String>
where
    T: TimeZone,
    S: AsRef<str>,
{
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| localize_cell(shift_days(week_start, i as i64), cell.as_ref(), tz, options))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
