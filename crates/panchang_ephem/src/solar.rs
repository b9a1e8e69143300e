//! Low-accuracy apparent solar coordinates.
//!
//! Source: Meeus, _Astronomical Algorithms_, ch. 25 ("Solar Coordinates",
//! lower accuracy). Apparent longitude is good to about 0.01°.

use crate::coords::{EclipticCoords, normalize_360};

/// Astronomical unit in km (IAU 2012 Resolution B2).
pub const AU_KM: f64 = 149_597_870.7;

/// Solar quantities at one instant, all angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTerms {
    /// Geometric (true) longitude referred to the mean equinox of date.
    pub true_longitude_deg: f64,
    /// Apparent longitude: true longitude corrected for nutation and aberration.
    pub apparent_longitude_deg: f64,
    /// Radius vector in AU.
    pub radius_au: f64,
    /// Longitude of the Moon's ascending node (Ω) used by the apparent correction.
    pub omega_deg: f64,
}

/// Solar terms for Julian centuries `t` of TT since J2000.0.
pub fn solar_terms(t: f64) -> SolarTerms {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let m_rad = m.to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    let true_longitude = l0 + c;
    let nu = (m + c).to_radians();
    let radius_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let omega = 125.04 - 1934.136 * t;
    let apparent = true_longitude - 0.005_69 - 0.004_78 * omega.to_radians().sin();

    SolarTerms {
        true_longitude_deg: normalize_360(true_longitude),
        apparent_longitude_deg: normalize_360(apparent),
        radius_au,
        omega_deg: omega,
    }
}

/// Apparent geocentric ecliptic coordinates of the Sun.
///
/// The solar latitude never exceeds 1.2″ and is taken as zero.
pub fn sun_apparent_ecliptic(t: f64) -> EclipticCoords {
    let s = solar_terms(t);
    EclipticCoords {
        longitude_deg: s.apparent_longitude_deg,
        latitude_deg: 0.0,
        distance_km: s.radius_au * AU_KM,
    }
}
