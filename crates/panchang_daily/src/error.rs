//! Error type for daily panchang assembly.

use panchang_ephem::EphemError;
use panchang_time::TimeError;

/// Failure of a panchang request. No partial record accompanies an error.
///
/// An unverified record is not an error; see `PanchangRecord::verified`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PanchangError {
    /// Coordinates or timezone unusable.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
    /// Date unparseable or outside the provider's supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// The position provider could not produce a usable value.
    #[error("position unavailable: {0}")]
    PositionUnavailable(&'static str),
    /// Civil time conversion failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// A derived index has no entry in a name table.
    #[error("no {element} name for index {index}")]
    NameMissing { element: &'static str, index: u8 },
}

impl From<EphemError> for PanchangError {
    fn from(e: EphemError) -> Self {
        match e {
            EphemError::InvalidLocation(m) => Self::InvalidLocation(m),
            EphemError::InvalidDate(m) => Self::InvalidDate(m),
            EphemError::PositionUnavailable(b) => Self::PositionUnavailable(b),
            EphemError::Time(t) => Self::Time(t),
            _ => Self::PositionUnavailable("provider"),
        }
    }
}

impl PanchangError {
    /// Whether the caller supplied bad input (as opposed to a computation failure).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidLocation(_) | Self::InvalidDate(_))
    }
}
