//! Daily panchang for a date and location.
//!
//! This crate provides:
//! - [`compute_panchang`]: positions, elements, localized names, cutoffs
//! - [`panchang_for_date`]: the same, passed through the verification gate
//! - [`DailyConfig`]: every knob, with defaults
//!
//! Computations are synchronous; only verification awaits.

pub mod config;
pub mod daily;
pub mod daily_types;
pub mod error;

pub use config::{DEFAULT_DATA_SOURCE, DailyConfig, VerificationConfig};
pub use daily::{compute_panchang, gate_from_config, panchang_for_date, parse_date};
pub use daily_types::{
    ComputedPanchang, DayEvents, KaranaElement, NakshatraElement, PachkhanTimes, PanchangRecord,
    TithiElement, VaarElement, YogaElement,
};
pub use error::PanchangError;
