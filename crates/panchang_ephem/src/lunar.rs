//! Geocentric lunar coordinates from the truncated ELP-2000/82 series.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 47. Accuracy is
//! about 10″ in longitude and 4″ in latitude over 1900–2100.

use crate::coords::{EclipticCoords, normalize_360};
use crate::lunar_terms::{LATITUDE, LONGITUDE_DISTANCE};

/// Mean Moon–Earth distance term of the series, in km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Fundamental arguments of the lunar theory, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Moon's mean longitude L′.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_arg: f64,
    /// Eccentricity factor E.
    pub eccentricity: f64,
}

impl LunarArguments {
    /// Arguments for Julian centuries `t` of TT since J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_arg: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
            eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        }
    }

    /// Argument `D·d + M·m + M′·mp + F·f` in radians.
    fn combine(&self, d: i8, m: i8, mp: i8, f: i8) -> f64 {
        (f64::from(d) * self.elongation
            + f64::from(m) * self.sun_anomaly
            + f64::from(mp) * self.moon_anomaly
            + f64::from(f) * self.latitude_arg)
            .to_radians()
    }

    /// Eccentricity correction for terms containing the Sun's anomaly.
    fn e_factor(&self, m: i8) -> f64 {
        match m.unsigned_abs() {
            0 => 1.0,
            1 => self.eccentricity,
            _ => self.eccentricity * self.eccentricity,
        }
    }
}

/// Sums Σl, Σb (1e-6 degree) and Σr (1e-3 km) including the additive terms.
fn periodic_sums(a: &LunarArguments, t: f64) -> (f64, f64, f64) {
    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(d, m, mp, f, cl, cr) in &LONGITUDE_DISTANCE {
        let arg = a.combine(d, m, mp, f);
        let e = a.e_factor(m);
        sum_l += f64::from(cl) * e * arg.sin();
        sum_r += f64::from(cr) * e * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(d, m, mp, f, cb) in &LATITUDE {
        let arg = a.combine(d, m, mp, f);
        sum_b += f64::from(cb) * a.e_factor(m) * arg.sin();
    }

    // Venus (A1), Jupiter (A2), and flattening (L′ terms) perturbations
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let lp = a.mean_longitude.to_radians();
    let mp = a.moon_anomaly.to_radians();
    let f = a.latitude_arg.to_radians();

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    (sum_l, sum_b, sum_r)
}

/// Geometric geocentric ecliptic coordinates of the Moon (mean equinox of
/// date, no nutation).
pub fn moon_geometric_ecliptic(t: f64) -> EclipticCoords {
    let a = LunarArguments::at(t);
    let (sum_l, sum_b, sum_r) = periodic_sums(&a, t);
    EclipticCoords {
        longitude_deg: normalize_360(a.mean_longitude + sum_l / 1_000_000.0),
        latitude_deg: sum_b / 1_000_000.0,
        distance_km: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

/// Apparent geocentric ecliptic coordinates of the Moon.
///
/// Adds nutation in longitude; the Moon's aberration is below 0.001″
/// and is ignored.
pub fn moon_apparent_ecliptic(t: f64, delta_psi_deg: f64) -> EclipticCoords {
    let geo = moon_geometric_ecliptic(t);
    EclipticCoords {
        longitude_deg: normalize_360(geo.longitude_deg + delta_psi_deg),
        ..geo
    }
}

/// Equatorial horizontal parallax in radians for a geocentric distance in km.
pub fn horizontal_parallax_rad(distance_km: f64) -> f64 {
    (6378.14 / distance_km).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_1992_APR_12: f64 = (2_448_724.5 - 2_451_545.0) / 36_525.0;

    #[test]
    fn meeus_example_47a_arguments() {
        let a = LunarArguments::at(T_1992_APR_12);
        assert!((normalize_360(a.mean_longitude) - 134.290_182).abs() < 1e-5);
        assert!((normalize_360(a.elongation) - 113.842_304).abs() < 1e-5);
        assert!((normalize_360(a.sun_anomaly) - 97.643_514).abs() < 1e-5);
        assert!((normalize_360(a.moon_anomaly) - 5.150_833).abs() < 1e-5);
        assert!((normalize_360(a.latitude_arg) - 219.889_721).abs() < 1e-5);
        assert!((a.eccentricity - 1.000_194).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_47a_position() {
        let moon = moon_geometric_ecliptic(T_1992_APR_12);
        assert!((moon.longitude_deg - 133.162_655).abs() < 1e-3, "λ = {}", moon.longitude_deg);
        assert!((moon.latitude_deg + 3.229_126).abs() < 1e-3, "β = {}", moon.latitude_deg);
        assert!((moon.distance_km - 368_409.7).abs() < 5.0, "Δ = {}", moon.distance_km);
    }

    #[test]
    fn meeus_example_47a_parallax() {
        let pi = horizontal_parallax_rad(368_409.7).to_degrees();
        assert!((pi - 0.991_990).abs() < 1e-5, "π = {pi}");
    }

    #[test]
    fn apparent_adds_nutation() {
        let geo = moon_geometric_ecliptic(0.1);
        let app = moon_apparent_ecliptic(0.1, 0.004);
        let d = normalize_360(app.longitude_deg - geo.longitude_deg + 180.0) - 180.0;
        assert!((d - 0.004).abs() < 1e-12);
        assert_eq!(app.latitude_deg, geo.latitude_deg);
    }

    #[test]
    fn distance_within_orbit_bounds() {
        for i in 0..100 {
            let t = 0.2 + f64::from(i) * 0.001;
            let d = moon_geometric_ecliptic(t).distance_km;
            assert!((356_000.0..407_000.0).contains(&d), "distance {d} at t={t}");
        }
    }
}
