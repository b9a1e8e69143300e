//! Observer location: geodetic coordinates plus IANA timezone.

use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::EphemError;

/// Observer location on Earth's surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
    /// IANA timezone in which all clock times are expressed.
    pub timezone: Tz,
    /// Optional display name (e.g. "Palitana").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Location {
    /// Create a location at sea level. Call [`Location::validate`] before use.
    pub fn new(latitude_deg: f64, longitude_deg: f64, timezone: Tz) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m: 0.0,
            timezone,
            name: None,
        }
    }

    /// Create a location from an IANA timezone identifier.
    pub fn with_timezone_name(
        latitude_deg: f64,
        longitude_deg: f64,
        timezone: &str,
    ) -> Result<Self, EphemError> {
        let tz = parse_timezone(timezone)?;
        Ok(Self::new(latitude_deg, longitude_deg, tz))
    }

    /// Set the altitude in meters.
    pub fn at_altitude(mut self, altitude_m: f64) -> Self {
        self.altitude_m = altitude_m;
        self
    }

    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check coordinate ranges.
    pub fn validate(&self) -> Result<(), EphemError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemError::InvalidLocation(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemError::InvalidLocation(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemError::InvalidLocation("altitude is not finite".into()));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Parse an IANA timezone identifier such as `"Asia/Kolkata"`.
pub fn parse_timezone(name: &str) -> Result<Tz, EphemError> {
    Tz::from_str(name.trim())
        .map_err(|_| EphemError::InvalidLocation(format!("unknown timezone '{name}'")))
}
