//! Time-scale helpers for the panchang core.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - ΔT (TT − UT) for converting civil instants to dynamical time
//! - Greenwich/local mean sidereal time
//! - Civil-date ↔ Julian Date bridging in IANA timezones

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    civil_day_bounds_jd, jd_to_local, jd_to_utc, local_noon_jd, local_to_jd, start_of_day_jd,
    utc_to_jd,
};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, jd_to_decimal_year,
};
pub use sidereal::{SIDEREAL_RATE, gmst_rad, local_sidereal_time_rad};
