//! Error types for position and rise/set computation.

use panchang_time::TimeError;

/// Errors from the celestial position provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemError {
    /// Latitude, longitude, altitude, or timezone is unusable.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
    /// Date is unparseable or outside the provider's supported epoch.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// The position model produced no usable value.
    #[error("position unavailable: {0}")]
    PositionUnavailable(&'static str),
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
