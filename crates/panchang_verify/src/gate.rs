//! The verification gate.
//!
//! A computed record moves `Computed → PendingVerification → {Verified,
//! Unverified}`. `Verified` requires both a trusted declared source and a
//! positive answer from the confirmation backend within the timeout; every
//! other path ends `Unverified`, which is terminal but not an error.

use std::time::Duration;

use serde::{Serialize, Serializer};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::confirmation::ExternalConfirmation;
use crate::error::UnverifiedReason;
use crate::registry::TrustedSourceRegistry;

/// Text attached to every unverified record.
pub const UNVERIFIED_DISCLAIMER: &str = "This is not Factually correct.";

/// Default bound on the confirmation call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Lifecycle of a record through the gate.
///
/// A [`VerificationResult`] only ever carries the terminal outcomes,
/// `Verified` or `Unverified`. `Computed` and `PendingVerification` name the
/// states before and during the backend call; they appear in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    Computed,
    PendingVerification,
    Verified,
    Unverified,
}

impl VerificationState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Verified | Self::Unverified)
    }
}

/// Outcome of [`VerificationGate::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationResult {
    pub state: VerificationState,
    /// Registry entry the declared source matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_source: Option<&'static str>,
    #[serde(serialize_with = "reason_text", skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnverifiedReason>,
}

fn reason_text<S: Serializer>(
    reason: &Option<UnverifiedReason>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match reason {
        Some(r) => serializer.serialize_str(&r.to_string()),
        None => serializer.serialize_none(),
    }
}

impl VerificationResult {
    fn verified(matched: &'static str) -> Self {
        Self {
            state: VerificationState::Verified,
            matched_source: Some(matched),
            reason: None,
        }
    }

    fn unverified(matched: Option<&'static str>, reason: UnverifiedReason) -> Self {
        Self {
            state: VerificationState::Unverified,
            matched_source: matched,
            reason: Some(reason),
        }
    }

    pub fn is_verified(&self) -> bool {
        self.state == VerificationState::Verified
    }

    /// The disclaimer to show, present exactly when unverified.
    pub fn disclaimer(&self) -> Option<&'static str> {
        (!self.is_verified()).then_some(UNVERIFIED_DISCLAIMER)
    }
}

/// Gate combining the trusted-source registry with a confirmation backend.
#[derive(Debug, Clone)]
pub struct VerificationGate<C> {
    registry: TrustedSourceRegistry,
    confirmation: C,
    timeout: Duration,
}

impl<C> VerificationGate<C> {
    pub fn new(confirmation: C) -> Self {
        Self {
            registry: TrustedSourceRegistry,
            confirmation,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn registry(&self) -> &TrustedSourceRegistry {
        &self.registry
    }

    /// Verify `record` as attributed to `declared_source`.
    ///
    /// An untrusted source fails immediately without contacting the
    /// backend. Dropping the returned future cancels the backend call.
    pub async fn verify<R>(&self, record: &R, declared_source: &str) -> VerificationResult
    where
        C: ExternalConfirmation<R>,
        R: Sync + ?Sized,
    {
        let Some(matched) = self.registry.matching_entry(declared_source) else {
            warn!(source = declared_source, "declared source not trusted");
            return VerificationResult::unverified(None, UnverifiedReason::SourceNotTrusted);
        };

        debug!(
            source = declared_source,
            matched,
            backend = self.confirmation.name(),
            state = ?VerificationState::PendingVerification,
            "awaiting external confirmation"
        );

        let outcome = timeout(
            self.timeout,
            self.confirmation.confirm(record, declared_source),
        )
        .await;

        let result = match outcome {
            Ok(Ok(true)) => VerificationResult::verified(matched),
            Ok(Ok(false)) => {
                VerificationResult::unverified(Some(matched), UnverifiedReason::NotConfirmed)
            }
            Ok(Err(e)) => VerificationResult::unverified(Some(matched), e.into()),
            Err(_) => VerificationResult::unverified(
                Some(matched),
                UnverifiedReason::Timeout(self.timeout),
            ),
        };

        match &result.reason {
            None => debug!(matched, "record verified"),
            Some(reason) => warn!(matched, %reason, "record left unverified"),
        }
        result
    }
}
