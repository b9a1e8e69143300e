//! Truncated-series provider after Meeus, _Astronomical Algorithms_.

use std::ops::RangeInclusive;

use panchang_time::{jd_to_centuries, jd_ut_to_tt};

use crate::coords::{EclipticCoords, nutation};
use crate::error::EphemError;
use crate::lunar::moon_apparent_ecliptic;
use crate::provider::{AccuracyBound, PositionProvider};
use crate::solar::sun_apparent_ecliptic;

/// Sun from ch. 25, Moon from ch. 47, ΔT from Espenak–Meeus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeeusProvider;

impl MeeusProvider {
    pub const fn new() -> Self {
        Self
    }
}

impl PositionProvider for MeeusProvider {
    fn name(&self) -> &'static str {
        "meeus"
    }

    fn sun_ecliptic(&self, jd_ut: f64) -> Result<EclipticCoords, EphemError> {
        let t = jd_to_centuries(jd_ut_to_tt(jd_ut));
        Ok(sun_apparent_ecliptic(t))
    }

    fn moon_ecliptic(&self, jd_ut: f64) -> Result<EclipticCoords, EphemError> {
        let t = jd_to_centuries(jd_ut_to_tt(jd_ut));
        Ok(moon_apparent_ecliptic(t, nutation(t).delta_psi_deg))
    }

    fn accuracy(&self) -> AccuracyBound {
        AccuracyBound {
            sun_arcmin: 0.6,
            moon_arcmin: 1.0,
        }
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        1900..=2100
    }
}
