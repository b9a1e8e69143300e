//! Error types for time conversions.

use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Errors from calendar, Julian Date, or timezone conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Julian Date cannot be represented as a calendar instant.
    #[error("julian date {0} is outside the representable range")]
    OutOfRange(f64),
    /// Local wall-clock time falls in a DST gap.
    #[error("local time {local} does not exist in {tz}")]
    NonexistentLocalTime { local: NaiveDateTime, tz: Tz },
    /// Civil date cannot be resolved.
    #[error("invalid civil date: {0}")]
    InvalidDate(String),
}
