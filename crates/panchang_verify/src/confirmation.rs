//! External confirmation backends.

use async_trait::async_trait;

use crate::error::ConfirmationError;

/// Confirms a computed record against an independent trusted source.
///
/// `Ok(true)` means the source agrees with the record; `Ok(false)` means it
/// answered and disagrees (or has no data). Implementations may perform I/O.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one backend can serve
/// concurrent requests.
#[async_trait]
pub trait ExternalConfirmation<R>: Send + Sync
where
    R: Sync + ?Sized,
{
    /// Short identifier, for logs.
    fn name(&self) -> &'static str;

    /// Ask the backend whether `record`, attributed to `source`, is correct.
    async fn confirm(&self, record: &R, source: &str) -> Result<bool, ConfirmationError>;
}

/// Backend that never confirms anything.
///
/// The default until a real trusted-source integration is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unconfirmed;

#[async_trait]
impl<R> ExternalConfirmation<R> for Unconfirmed
where
    R: Sync + ?Sized,
{
    fn name(&self) -> &'static str {
        "unconfirmed"
    }

    async fn confirm(&self, _record: &R, _source: &str) -> Result<bool, ConfirmationError> {
        Ok(false)
    }
}
