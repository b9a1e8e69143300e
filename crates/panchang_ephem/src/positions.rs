//! Daily Sun/Moon positions and horizon events for a civil date.

use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use panchang_time::{civil_day_bounds_jd, jd_to_local, local_noon_jd};

use crate::coords::normalize_360;
use crate::error::EphemError;
use crate::location::Location;
use crate::provider::PositionProvider;
use crate::riseset::compute_rise_set;
use crate::riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};

/// Sun and Moon ecliptic longitudes at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunMoonPosition {
    /// Sun longitude in degrees, [0, 360).
    pub sun_longitude_deg: f64,
    /// Moon longitude in degrees, [0, 360).
    pub moon_longitude_deg: f64,
    /// Ayanamsha already subtracted from both longitudes; 0 for tropical.
    pub ayanamsha_deg: f64,
    /// Instant of evaluation, Julian Date (UT).
    pub jd_ut: f64,
}

impl SunMoonPosition {
    /// Tropical position from raw longitudes, normalizing both.
    pub fn tropical(sun_longitude_deg: f64, moon_longitude_deg: f64, jd_ut: f64) -> Self {
        Self {
            sun_longitude_deg: normalize_360(sun_longitude_deg),
            moon_longitude_deg: normalize_360(moon_longitude_deg),
            ayanamsha_deg: 0.0,
            jd_ut,
        }
    }

    /// Re-express both longitudes with an ayanamsha subtracted.
    ///
    /// Replaces any ayanamsha applied earlier, so the result never
    /// accumulates two offsets.
    pub fn with_ayanamsha(self, ayanamsha_deg: f64) -> Self {
        let shift = ayanamsha_deg - self.ayanamsha_deg;
        Self {
            sun_longitude_deg: normalize_360(self.sun_longitude_deg - shift),
            moon_longitude_deg: normalize_360(self.moon_longitude_deg - shift),
            ayanamsha_deg,
            jd_ut: self.jd_ut,
        }
    }

    /// Whether longitudes are sidereal.
    pub fn is_sidereal(&self) -> bool {
        self.ayanamsha_deg != 0.0
    }

    /// Moon − Sun, normalized to [0, 360). Independent of the ayanamsha.
    pub fn elongation_deg(&self) -> f64 {
        normalize_360(self.moon_longitude_deg - self.sun_longitude_deg)
    }
}

/// Horizon events on one civil day, in the location's timezone.
///
/// Each field is `None` when the event does not occur that day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SunMoonEvents {
    pub sunrise: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub moonrise: Option<DateTime<Tz>>,
    pub moonset: Option<DateTime<Tz>>,
}

/// Instant at which the day's positions are evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMoment {
    /// Local sunrise, falling back to local noon when the Sun does not rise.
    #[default]
    Sunrise,
    /// Local clock noon.
    LocalNoon,
}

impl EvaluationMoment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::LocalNoon => "local_noon",
        }
    }
}

impl std::fmt::Display for EvaluationMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EvaluationMoment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunrise" => Ok(Self::Sunrise),
            "local_noon" | "noon" => Ok(Self::LocalNoon),
            other => Err(format!("unknown evaluation moment '{other}'")),
        }
    }
}

/// Everything the calendar derivation needs for one civil day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPositions {
    /// Tropical Sun/Moon longitudes at the evaluation instant.
    pub position: SunMoonPosition,
    /// Horizon events of the day.
    pub events: SunMoonEvents,
    /// The moment actually used (`LocalNoon` after a sunrise fallback).
    pub moment: EvaluationMoment,
    /// The evaluation instant in the location's timezone.
    pub evaluated_at: DateTime<Tz>,
}

/// Tropical Sun/Moon longitudes at `jd_ut`.
pub fn sun_moon_position_at(
    provider: &dyn PositionProvider,
    jd_ut: f64,
) -> Result<SunMoonPosition, EphemError> {
    let sun = provider.sun_ecliptic(jd_ut)?;
    let moon = provider.moon_ecliptic(jd_ut)?;
    if !sun.longitude_deg.is_finite() {
        return Err(EphemError::PositionUnavailable("Sun"));
    }
    if !moon.longitude_deg.is_finite() {
        return Err(EphemError::PositionUnavailable("Moon"));
    }
    Ok(SunMoonPosition::tropical(
        sun.longitude_deg,
        moon.longitude_deg,
        jd_ut,
    ))
}

fn check_supported(
    provider: &dyn PositionProvider,
    date: NaiveDate,
    location: &Location,
) -> Result<(), EphemError> {
    location.validate()?;
    let years = provider.supported_years();
    if !years.contains(&date.year()) {
        return Err(EphemError::InvalidDate(format!(
            "{date} outside supported years {}..={} of provider '{}'",
            years.start(),
            years.end(),
            provider.name()
        )));
    }
    Ok(())
}

fn event_local(
    provider: &dyn PositionProvider,
    location: &Location,
    event: RiseSetEvent,
    bounds: (f64, f64),
    config: &RiseSetConfig,
) -> Result<Option<DateTime<Tz>>, EphemError> {
    let result = compute_rise_set(provider, location, event, bounds.0, bounds.1, config)?;
    if !matches!(result, RiseSetResult::Event { .. }) {
        debug!(?event, ?result, "horizon event absent");
    }
    result
        .jd_ut()
        .map(|jd| jd_to_local(jd, location.timezone))
        .transpose()
        .map_err(EphemError::from)
}

/// Sunrise, sunset, moonrise, and moonset on `date` at `location`.
pub fn events_for_date(
    provider: &dyn PositionProvider,
    date: NaiveDate,
    location: &Location,
    config: &RiseSetConfig,
) -> Result<SunMoonEvents, EphemError> {
    check_supported(provider, date, location)?;
    let bounds = civil_day_bounds_jd(date, location.timezone)?;
    Ok(SunMoonEvents {
        sunrise: event_local(provider, location, RiseSetEvent::Sunrise, bounds, config)?,
        sunset: event_local(provider, location, RiseSetEvent::Sunset, bounds, config)?,
        moonrise: event_local(provider, location, RiseSetEvent::Moonrise, bounds, config)?,
        moonset: event_local(provider, location, RiseSetEvent::Moonset, bounds, config)?,
    })
}

/// Positions and events for one civil day.
///
/// Validates the location, then the date against the provider's supported
/// years, before any position is computed. Absent horizon events are not
/// errors.
pub fn positions_for_date(
    provider: &dyn PositionProvider,
    date: NaiveDate,
    location: &Location,
    config: &RiseSetConfig,
    moment: EvaluationMoment,
) -> Result<DayPositions, EphemError> {
    let events = events_for_date(provider, date, location, config)?;

    let (evaluated_at, used) = match (moment, events.sunrise) {
        (EvaluationMoment::Sunrise, Some(sunrise)) => (sunrise, EvaluationMoment::Sunrise),
        _ => {
            let noon = local_noon_jd(date, location.timezone)?;
            (jd_to_local(noon, location.timezone)?, EvaluationMoment::LocalNoon)
        }
    };
    let jd_ut = panchang_time::utc_to_jd(&evaluated_at.with_timezone(&chrono::Utc));
    let position = sun_moon_position_at(provider, jd_ut)?;

    debug!(
        %date,
        moment = %used,
        sun = position.sun_longitude_deg,
        moon = position.moon_longitude_deg,
        "positions computed"
    );

    Ok(DayPositions {
        position,
        events,
        moment: used,
        evaluated_at,
    })
}
