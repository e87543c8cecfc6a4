//! Error types for NBA week resolution.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekError {
    #[error("No Sunday found for NBA Week {0}")]
    WeekNotFound(i32),

    #[error("Date {0} is before the first NBA week of the season")]
    DateBeforeSeason(NaiveDate),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, WeekError>;
