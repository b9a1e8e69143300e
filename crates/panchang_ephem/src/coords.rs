//! Ecliptic/equatorial coordinate types, obliquity, and low-precision nutation.
//!
//! Sources: Meeus, _Astronomical Algorithms_, eqs. 13.3–13.4 (transformation),
//! 22.2 (mean obliquity), and the abridged nutation series of ch. 22
//! (accurate to 0.5″ in Δψ and 0.1″ in Δε).

use serde::{Deserialize, Serialize};

/// Geocentric apparent ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoords {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees, [-90, 90].
    pub latitude_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
}

/// Geocentric apparent equatorial coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoords {
    /// Right ascension in radians, [0, 2π).
    pub ra_rad: f64,
    /// Declination in radians, [-π/2, π/2].
    pub dec_rad: f64,
}

/// Nutation in longitude and obliquity, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    pub delta_psi_deg: f64,
    pub delta_eps_deg: f64,
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Mean obliquity of the ecliptic in degrees.
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// Abridged nutation in longitude and obliquity.
pub fn nutation(t: f64) -> Nutation {
    let omega = (125.044_52 - 1934.136_261 * t).to_radians();
    let l_sun = (280.4665 + 36_000.7698 * t).to_radians();
    let l_moon = (218.3165 + 481_267.8813 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        delta_psi_deg: dpsi / 3600.0,
        delta_eps_deg: deps / 3600.0,
    }
}

/// Convert ecliptic longitude/latitude to right ascension/declination.
pub fn ecliptic_to_equatorial(
    longitude_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> EquatorialCoords {
    let lam = longitude_deg.to_radians();
    let beta = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let ra = (lam.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lam.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin();

    EquatorialCoords {
        ra_rad: ra.rem_euclid(std::f64::consts::TAU),
        dec_rad: dec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!(normalize_360(-1e-18) < 360.0);
    }

    #[test]
    fn pm180() {
        assert!((normalize_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_pm180(-190.0) - 170.0).abs() < 1e-12);
        assert_eq!(normalize_pm180(180.0), 180.0);
    }

    #[test]
    fn obliquity_j2000() {
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.439_291).abs() < 1e-6, "eps = {eps}");
    }

    #[test]
    fn meeus_example_22a_nutation() {
        // 1987 April 10, 0h TD: Δψ = -3.788″, Δε = +9.443″
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let n = nutation(t);
        assert!((n.delta_psi_deg * 3600.0 + 3.788).abs() < 0.5);
        assert!((n.delta_eps_deg * 3600.0 - 9.443).abs() < 0.1);
    }

    #[test]
    fn equinox_point_maps_to_origin() {
        let eq = ecliptic_to_equatorial(0.0, 0.0, 23.44);
        assert!(eq.ra_rad.abs() < 1e-12 || (eq.ra_rad - std::f64::consts::TAU).abs() < 1e-12);
        assert!(eq.dec_rad.abs() < 1e-12);
    }

    #[test]
    fn solstice_declination_equals_obliquity() {
        let eq = ecliptic_to_equatorial(90.0, 0.0, 23.44);
        assert!((eq.dec_rad.to_degrees() - 23.44).abs() < 1e-9);
        assert!((eq.ra_rad.to_degrees() - 90.0).abs() < 1e-9);
    }
}
