//! Sun and Moon positions and horizon events for the panchang core.
//!
//! This crate provides:
//! - The [`PositionProvider`] seam and the truncated-series [`MeeusProvider`]
//! - Ecliptic/equatorial conversion with nutation and obliquity
//! - Sunrise/sunset (iterative hour angle) and moonrise/moonset (scan + bisection)
//! - [`positions_for_date`]: validated positions and events for a civil date

pub mod coords;
pub mod error;
pub mod location;
pub mod lunar;
mod lunar_terms;
pub mod meeus;
pub mod positions;
pub mod provider;
pub mod riseset;
pub mod riseset_types;
pub mod solar;

pub use coords::{EclipticCoords, EquatorialCoords, normalize_360, normalize_pm180};
pub use error::EphemError;
pub use location::{Location, parse_timezone};
pub use meeus::MeeusProvider;
pub use positions::{
    DayPositions, EvaluationMoment, SunMoonEvents, SunMoonPosition, events_for_date,
    positions_for_date, sun_moon_position_at,
};
pub use provider::{AccuracyBound, Body, BodyPosition, PositionProvider};
pub use riseset::{compute_moon_rise_set, compute_rise_set, compute_sun_rise_set};
pub use riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};
