//! Tropical or sidereal (Lahiri) zodiac for nakshatra and yoga.
//!
//! The ayanamsha is the angular offset between the tropical zodiac
//! (anchored to the vernal equinox) and the sidereal zodiac (anchored to
//! the fixed stars). Lahiri fixes Spica at 0° Libra; its value at J2000.0
//! is 23.853°, advanced by the IAU 2006 general precession in longitude.
//!
//! Tithi and karana depend only on Moon − Sun, in which the ayanamsha
//! cancels, so they are the same in either zodiac.

use std::fmt;
use std::str::FromStr;

use panchang_ephem::SunMoonPosition;
use panchang_time::{jd_to_centuries, jd_ut_to_tt};
use serde::{Deserialize, Serialize};

/// Lahiri ayanamsha at J2000.0 in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// Zodiac in which nakshatra and yoga are reckoned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zodiac {
    /// Longitudes from the vernal equinox of date.
    Tropical,
    /// Lahiri (Chitrapaksha) sidereal longitudes.
    #[default]
    Lahiri,
}

impl Zodiac {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tropical => "tropical",
            Self::Lahiri => "lahiri",
        }
    }

    /// Ayanamsha in degrees at a UT Julian Date.
    pub fn ayanamsha_deg(self, jd_ut: f64) -> f64 {
        match self {
            Self::Tropical => 0.0,
            Self::Lahiri => lahiri_ayanamsha_deg(jd_to_centuries(jd_ut_to_tt(jd_ut))),
        }
    }

    /// Express a tropical position in this zodiac.
    pub fn apply(self, position: SunMoonPosition) -> SunMoonPosition {
        position.with_ayanamsha(self.ayanamsha_deg(position.jd_ut))
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zodiac {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tropical" | "sayana" => Ok(Self::Tropical),
            "lahiri" | "sidereal" | "nirayana" => Ok(Self::Lahiri),
            other => Err(format!("unknown zodiac '{other}'")),
        }
    }
}

/// IAU 2006 general precession in ecliptic longitude, arcseconds.
///
/// Capitaine et al. (2003), eq. 39; `t` in Julian centuries of TT.
pub fn general_precession_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796_195 * t + 1.105_434_8 * t2 + 0.000_079_64 * t3 - 0.000_023_857 * t4
        - 0.000_000_038_3 * t5
}

/// Lahiri ayanamsha in degrees, mean equinox of date.
pub fn lahiri_ayanamsha_deg(t: f64) -> f64 {
    LAHIRI_J2000_DEG + general_precession_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_at_j2000() {
        assert!((lahiri_ayanamsha_deg(0.0) - LAHIRI_J2000_DEG).abs() < 1e-15);
    }

    #[test]
    fn lahiri_2024_about_24_19() {
        let t = 24.2 / 100.0;
        let a = lahiri_ayanamsha_deg(t);
        assert!((a - 24.19).abs() < 0.02, "ayanamsha = {a}");
    }

    #[test]
    fn precession_about_50_arcsec_per_year() {
        let per_year = general_precession_arcsec(0.01);
        assert!((per_year - 50.29).abs() < 0.01);
    }

    #[test]
    fn tropical_is_identity() {
        let p = SunMoonPosition::tropical(10.0, 200.0, 2_460_000.5);
        assert_eq!(Zodiac::Tropical.apply(p), p);
    }

    #[test]
    fn lahiri_preserves_elongation() {
        let p = SunMoonPosition::tropical(10.0, 200.0, 2_460_000.5);
        let s = Zodiac::Lahiri.apply(p);
        assert!((s.elongation_deg() - p.elongation_deg()).abs() < 1e-9);
        assert!(s.sun_longitude_deg > 340.0);
    }

    #[test]
    fn parse_and_default() {
        assert_eq!(Zodiac::default(), Zodiac::Lahiri);
        assert_eq!("Tropical".parse::<Zodiac>(), Ok(Zodiac::Tropical));
        assert_eq!("sidereal".parse::<Zodiac>(), Ok(Zodiac::Lahiri));
        assert!("fagan".parse::<Zodiac>().is_err());
        assert_eq!(serde_json::to_string(&Zodiac::Lahiri).unwrap(), "\"lahiri\"");
    }
}
