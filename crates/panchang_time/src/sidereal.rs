//! Greenwich and local mean sidereal time.
//!
//! Takes UT Julian Dates. UT1 − UTC (< 0.9 s) is ignored; at the Earth's
//! rotation rate that is below 0.004° of hour angle, far inside the
//! rise/set tolerance.
//!
//! Source: Meeus, _Astronomical Algorithms_, eq. 12.4.

use std::f64::consts::TAU;

use crate::julian::{J2000_JD, jd_to_centuries};

/// Sidereal rotation rate relative to the mean Sun, in revolutions per day.
pub const SIDEREAL_RATE: f64 = 1.002_737_909_350_795;

/// Greenwich Mean Sidereal Time in radians, in [0, 2π).
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let deg = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    deg.to_radians().rem_euclid(TAU)
}

/// Local Mean Sidereal Time in radians for an east-positive longitude.
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_east_rad: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_12a() {
        // 1987 April 10, 0h UT → GMST 13h10m46.3668s = 197.693195°
        let gmst = gmst_rad(2_446_895.5).to_degrees();
        assert!((gmst - 197.693_195).abs() < 1e-4, "gmst = {gmst}");
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let g1 = gmst_rad(2_460_000.5);
        let g2 = gmst_rad(2_460_001.5);
        let diff = (g2 - g1).rem_euclid(TAU).to_degrees();
        assert!((diff - 0.9856).abs() < 1e-3, "diff = {diff}");
    }

    #[test]
    fn local_adds_longitude() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_rad(jd, std::f64::consts::FRAC_PI_2);
        let expected = (gmst_rad(jd) + std::f64::consts::FRAC_PI_2).rem_euclid(TAU);
        assert!((lst - expected).abs() < 1e-12);
    }
}
