//! The position provider seam.
//!
//! Calendar derivation only needs the Sun's and Moon's apparent ecliptic
//! coordinates and enough equatorial information for horizon events. Any
//! model that can supply those (a truncated series, a JPL kernel reader,
//! a remote service wrapped synchronously) plugs in here.

use std::ops::RangeInclusive;

use panchang_time::{jd_to_centuries, jd_ut_to_tt};

use crate::coords::{EclipticCoords, EquatorialCoords, ecliptic_to_equatorial, mean_obliquity_deg, nutation};
use crate::error::EphemError;

/// Stated worst-case error of a provider's apparent longitudes.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AccuracyBound {
    pub sun_arcmin: f64,
    pub moon_arcmin: f64,
}

/// Which body a position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// A body's apparent place at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub ecliptic: EclipticCoords,
    pub equatorial: EquatorialCoords,
}

/// Source of apparent geocentric Sun and Moon coordinates.
///
/// All instants are Julian Dates in UT; implementations apply ΔT
/// themselves. Implementations must be stateless across calls.
pub trait PositionProvider: Send + Sync {
    /// Short identifier, for logs and records.
    fn name(&self) -> &'static str;

    /// Apparent geocentric ecliptic coordinates of the Sun, of date.
    fn sun_ecliptic(&self, jd_ut: f64) -> Result<EclipticCoords, EphemError>;

    /// Apparent geocentric ecliptic coordinates of the Moon, of date.
    fn moon_ecliptic(&self, jd_ut: f64) -> Result<EclipticCoords, EphemError>;

    /// Stated error bound of the apparent longitudes.
    fn accuracy(&self) -> AccuracyBound;

    /// Civil years for which the stated accuracy holds.
    fn supported_years(&self) -> RangeInclusive<i32>;

    /// True obliquity of the ecliptic at `jd_ut`, in degrees.
    fn true_obliquity_deg(&self, jd_ut: f64) -> f64 {
        let t = jd_to_centuries(jd_ut_to_tt(jd_ut));
        mean_obliquity_deg(t) + nutation(t).delta_eps_deg
    }

    /// Ecliptic and equatorial place of `body` at `jd_ut`.
    ///
    /// Non-finite model output is reported as `PositionUnavailable`.
    fn position(&self, body: Body, jd_ut: f64) -> Result<BodyPosition, EphemError> {
        let ecliptic = match body {
            Body::Sun => self.sun_ecliptic(jd_ut)?,
            Body::Moon => self.moon_ecliptic(jd_ut)?,
        };
        if !(ecliptic.longitude_deg.is_finite()
            && ecliptic.latitude_deg.is_finite()
            && ecliptic.distance_km.is_finite())
        {
            return Err(EphemError::PositionUnavailable(body.name()));
        }
        let equatorial = ecliptic_to_equatorial(
            ecliptic.longitude_deg,
            ecliptic.latitude_deg,
            self.true_obliquity_deg(jd_ut),
        );
        Ok(BodyPosition {
            ecliptic,
            equatorial,
        })
    }
}
