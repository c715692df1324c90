//! Error types for schedule-clock operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid date: {0}")]
    DateParse(String),

    #[error("Invalid time: {0}")]
    TimeParse(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
