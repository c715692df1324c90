//! Hard-coded United Kingdom daylight-saving rule.
//!
//! British Summer Time begins at 01:00 GMT on the last Sunday of March and
//! ends at 01:00 GMT (02:00 BST) on the last Sunday of October. This module
//! works at date granularity only: the transition day counts as already
//! switched, so the last Sunday of March is BST all day and the last Sunday
//! of October is GMT all day. Away from the 01:00 transition instant this
//! agrees with the Europe/London tzdb; no timezone database is consulted
//! here and no other source zone is modeled.

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, Offset, Utc};

/// Whether British Summer Time is in effect on `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use schedule_clock::dst::is_uk_dst;
///
/// // 2021: last Sunday of March is the 28th
/// assert!(!is_uk_dst(NaiveDate::from_ymd_opt(2021, 3, 27).unwrap()));
/// assert!(is_uk_dst(NaiveDate::from_ymd_opt(2021, 3, 28).unwrap()));
/// ```
pub fn is_uk_dst(date: NaiveDate) -> bool {
    match date.month() {
        4..=9 => true,
        3 => date >= last_sunday(date.year(), 3),
        10 => date < last_sunday(date.year(), 10),
        _ => false,
    }
}

/// The UK's UTC offset on `date`: +01:00 under BST, +00:00 under GMT.
pub fn uk_utc_offset(date: NaiveDate) -> FixedOffset {
    let secs = if is_uk_dst(date) { 3600 } else { 0 };
    // Well inside FixedOffset's supported range.
    FixedOffset::east_opt(secs).unwrap_or_else(|| Utc.fix())
}

/// The last Sunday of a transition month (March or October, both 31 days).
///
/// Walking back from the 31st by its days-from-Sunday count lands on the
/// preceding (or same) Sunday.
fn last_sunday(year: i32, month: u32) -> NaiveDate {
    let last_day = NaiveDate::from_ymd_opt(year, month, 31).unwrap_or(NaiveDate::MAX);
    last_day - Duration::days(i64::from(last_day.weekday().num_days_from_sunday()))
}

// ── Tests ───────────────────────────────────────────────────────────────────
