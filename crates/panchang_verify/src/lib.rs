//! Provenance verification for computed panchang records.
//!
//! This crate provides:
//! - The fixed [`TrustedSourceRegistry`]
//! - The [`ExternalConfirmation`] backend seam and the [`Unconfirmed`] default
//! - [`VerificationGate`]: source check, then a time-bounded confirmation
//! - The content validation policy in [`content`]

pub mod confirmation;
pub mod content;
pub mod error;
pub mod gate;
pub mod registry;

pub use confirmation::{ExternalConfirmation, Unconfirmed};
pub use content::{
    ContentClaim, ContentValidation, CopyrightStatus, DateClaim, Sect, SectScope, SectSpecific,
    can_verify_date, historical_label, validate_content, validate_copyright,
    validate_historical_claim, validate_panchang_data, validate_sect_content, validate_sources,
};
pub use error::{ConfirmationError, UnverifiedReason};
pub use gate::{
    DEFAULT_TIMEOUT, UNVERIFIED_DISCLAIMER, VerificationGate, VerificationResult,
    VerificationState,
};
pub use registry::{SourceKind, TRUSTED_SOURCES, TrustedSource, TrustedSourceRegistry};
