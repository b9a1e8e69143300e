//! Reasons a record stays unverified, and backend failures.

use std::time::Duration;

/// Error reported by an external confirmation backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmationError {
    /// Backend could not be reached.
    #[error("confirmation backend unavailable: {0}")]
    Unavailable(String),
    /// Backend answered with something unusable.
    #[error("confirmation backend returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Why the gate left a record unverified.
///
/// None of these is a request failure: the record is still returned,
/// flagged and carrying the disclaimer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnverifiedReason {
    /// Declared source is blank or not in the trusted registry.
    #[error("source not trusted")]
    SourceNotTrusted,
    /// Backend did not answer within the configured timeout.
    #[error("verification timed out after {0:?}")]
    Timeout(Duration),
    /// Backend failed.
    #[error("confirmation failed: {0}")]
    ConfirmationFailed(#[from] ConfirmationError),
    /// Backend answered, but did not confirm the record.
    #[error("not confirmed by trusted source")]
    NotConfirmed,
}
