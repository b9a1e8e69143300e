//! ΔT = TT − UT from the Espenak–Meeus polynomial expressions.
//!
//! Covers 1900–2150, which brackets every epoch the position provider
//! accepts. Typical uncertainty is below 1 s through 2020 and grows to a
//! few tens of seconds by 2100; at the Moon's rate of ~0.55″/s that stays
//! inside the provider's stated error bound.

use crate::julian::{SECONDS_PER_DAY, jd_to_decimal_year};

/// ΔT in seconds for a decimal Gregorian year.
///
/// Years outside 1900–2150 are clamped to the nearest covered segment's
/// polynomial, which still returns a finite value.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    }
}

/// Convert a Julian Date in UT to a Julian Date in TT.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_to_decimal_year(jd_ut)) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_about_64s() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "dt = {dt}");
    }

    #[test]
    fn year_2024_within_band() {
        // Observed ΔT in 2024 is ~69 s; the 2005–2050 polynomial runs a few
        // seconds high.
        let dt = delta_t_seconds(2024.0);
        assert!((68.0..76.0).contains(&dt), "dt = {dt}");
    }

    #[test]
    fn segments_join_smoothly() {
        for &edge in &[1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let below = delta_t_seconds(edge - 1e-6);
            let above = delta_t_seconds(edge);
            assert!(
                (below - above).abs() < 2.0,
                "discontinuity at {edge}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let jd_ut = 2_460_000.5;
        let jd_tt = jd_ut_to_tt(jd_ut);
        let diff_s = (jd_tt - jd_ut) * SECONDS_PER_DAY;
        assert!(diff_s > 60.0 && diff_s < 80.0, "diff = {diff_s}");
    }
}
