//! # schedule-clock
//!
//! Localize a UK weekly schedule into the viewer's timezone.
//!
//! The schedule page publishes its times on the 12-hour clock in UK wall
//! time. This crate parses the page's week-start date, decides whether
//! British Summer Time applies to each weekday, and re-renders every time
//! token in the viewer's timezone. The UK is the only source zone modeled;
//! its BST/GMT rule is hard-coded at date granularity rather than looked up
//! in a timezone database. The target side is any `chrono::TimeZone` the
//! caller supplies (typically `chrono::Local`).
//!
//! All functions are pure: no system clock access, no I/O, no shared state.
//! A malformed time token degrades to a marker for that token only; a
//! malformed week-start date is an error, since nothing downstream is
//! meaningful without it.
//!
//! ## Modules
//!
//! - [`date`] — schedule date parsing, day shifting, normalized date format
//! - [`dst`] — hard-coded UK BST/GMT rule
//! - [`convert`] — 12/24-hour clock mapping and single-token conversion
//! - [`schedule`] — week-table cell rewriting with per-token error isolation
//! - [`error`] — error types

pub mod convert;
pub mod date;
pub mod dst;
pub mod error;
pub mod schedule;

pub use convert::{convert_uk_time, hour_to_12, hour_to_24, ClockTime12, Meridiem, TimeFormat};
pub use date::{format_rfc_date, parse_rfc_date, parse_schedule_date, shift_days};
pub use dst::{is_uk_dst, uk_utc_offset};
pub use error::ScheduleError;
pub use schedule::{
    localize_cell, localize_week, week_start_from_heading, LocalizeOptions, UNPARSEABLE_MARKER,
};
