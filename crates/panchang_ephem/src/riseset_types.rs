//! Types for sunrise/sunset and moonrise/moonset calculations.
//!
//! Event kinds, horizon configuration, and result types used by the
//! rise/set computation module.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::provider::Body;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// IAU 2015 nominal solar radius in km (Resolution B3).
const SUN_RADIUS_KM: f64 = 696_000.0;

/// Horizon events of the Sun and Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears at the horizon.
    Sunrise,
    /// Upper limb of the Sun disappears below the horizon.
    Sunset,
    /// Upper limb of the Moon appears at the horizon.
    Moonrise,
    /// Upper limb of the Moon disappears below the horizon.
    Moonset,
}

impl RiseSetEvent {
    /// Whether this is a rising event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise | Self::Moonrise)
    }

    /// The body whose limb defines the event.
    pub fn body(self) -> Body {
        match self {
            Self::Sunrise | Self::Sunset => Body::Sun,
            Self::Moonrise | Self::Moonset => Body::Moon,
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Fixed solar semidiameter in arcminutes. `None` derives it from the
    /// Earth–Sun distance (15.7′ to 16.3′).
    pub semidiameter_arcmin: Option<f64>,
    /// Whether to apply geometric dip for observer altitude,
    /// `dip = sqrt(2h/R)` radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: None,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Geometric dip of the horizon in degrees for an observer altitude.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        }
    }

    /// Solar semidiameter in arcminutes at a given Earth–Sun distance.
    pub fn solar_semidiameter_arcmin(&self, distance_km: f64) -> f64 {
        self.semidiameter_arcmin
            .unwrap_or_else(|| (SUN_RADIUS_KM / distance_km).asin().to_degrees() * 60.0)
    }

    /// Geocentric altitude of the Sun's center at rise/set, in degrees.
    ///
    /// `h0 = -(refraction + semidiameter) / 60 - dip`
    pub fn sun_target_altitude_deg(&self, distance_km: f64, altitude_m: f64) -> f64 {
        -(self.refraction_arcmin + self.solar_semidiameter_arcmin(distance_km)) / 60.0
            - self.dip_deg(altitude_m)
    }

    /// Geocentric altitude of the Moon's center at rise/set, in degrees.
    ///
    /// `h0 = 0.7275·π - refraction / 60 - dip`, where π is the equatorial
    /// horizontal parallax; the 0.7275 factor folds in the semidiameter.
    pub fn moon_target_altitude_deg(&self, parallax_deg: f64, altitude_m: f64) -> f64 {
        0.7275 * parallax_deg - self.refraction_arcmin / 60.0 - self.dip_deg(altitude_m)
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UT).
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Body stays below the horizon all day (polar night).
    NeverRises,
    /// Body stays above the horizon all day (midnight sun).
    NeverSets,
    /// Body crosses the horizon, but this event falls on another civil day.
    NotThisDay,
}

impl RiseSetResult {
    /// The event instant, if one occurs on the requested day.
    pub fn jd_ut(&self) -> Option<f64> {
        match *self {
            Self::Event { jd_ut, .. } => Some(jd_ut),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_rising_correct() {
        assert!(RiseSetEvent::Sunrise.is_rising());
        assert!(RiseSetEvent::Moonrise.is_rising());
        assert!(!RiseSetEvent::Sunset.is_rising());
        assert!(!RiseSetEvent::Moonset.is_rising());
        assert_eq!(RiseSetEvent::Moonset.body(), Body::Moon);
    }

    #[test]
    fn default_config() {
        let c = RiseSetConfig::default();
        assert_eq!(c.refraction_arcmin, 34.0);
        assert!(c.semidiameter_arcmin.is_none());
        assert!(c.altitude_correction);
    }

    #[test]
    fn sun_target_sea_level_fixed_semidiameter() {
        let c = RiseSetConfig {
            semidiameter_arcmin: Some(16.0),
            ..Default::default()
        };
        let h0 = c.sun_target_altitude_deg(1.496e8, 0.0);
        assert!((h0 + 50.0 / 60.0).abs() < 1e-12, "h0 = {h0}");
    }

    #[test]
    fn semidiameter_from_distance() {
        let c = RiseSetConfig::default();
        let sd = c.solar_semidiameter_arcmin(149_597_870.7);
        assert!((sd - 15.99).abs() < 0.02, "sd = {sd}");
    }

    #[test]
    fn dip_1000m() {
        let c = RiseSetConfig::default();
        let dip = c.dip_deg(1000.0);
        assert!(dip > 0.9 && dip < 1.2, "dip = {dip}");
        let off = RiseSetConfig {
            altitude_correction: false,
            ..Default::default()
        };
        assert_eq!(off.dip_deg(1000.0), 0.0);
    }

    #[test]
    fn moon_target_mean_parallax() {
        // Meeus ch. 15: +0.125° for the mean parallax 0.95°
        let h0 = RiseSetConfig::default().moon_target_altitude_deg(0.950_7, 0.0);
        assert!((h0 - 0.125).abs() < 0.01, "h0 = {h0}");
    }

    #[test]
    fn config_deserializes_partial() {
        let c: RiseSetConfig = serde_json::from_str(r#"{"refraction_arcmin": 35.0}"#).unwrap();
        assert_eq!(c.refraction_arcmin, 35.0);
        assert!(c.altitude_correction);
    }

    #[test]
    fn result_jd() {
        let r = RiseSetResult::Event {
            jd_ut: 2_460_000.25,
            event: RiseSetEvent::Sunrise,
        };
        assert_eq!(r.jd_ut(), Some(2_460_000.25));
        assert_eq!(RiseSetResult::NeverRises.jd_ut(), None);
        assert_eq!(RiseSetResult::NotThisDay.jd_ut(), None);
    }
}
