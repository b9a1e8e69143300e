//! Sunrise/sunset and moonrise/moonset computation.
//!
//! The Sun uses the iterative hour-angle method: start from a transit
//! estimate, then repeatedly recompute the Sun's place at the event estimate
//! and correct by the hour-angle residual. The Moon moves too fast for a
//! single transit estimate to be reliable, so its altitude is sampled across
//! the civil day and sign changes are refined by bisection.
//!
//! Sources: Meeus, _Astronomical Algorithms_, ch. 13 and 15; Montenbruck &
//! Pfleger, _Astronomy on the Personal Computer_, ch. 3.

use std::f64::consts::{PI, TAU};

use panchang_time::{SIDEREAL_RATE, local_sidereal_time_rad};

use crate::error::EphemError;
use crate::location::Location;
use crate::lunar::horizontal_parallax_rad;
use crate::provider::{Body, PositionProvider};
use crate::riseset_types::{RiseSetConfig, RiseSetEvent, RiseSetResult};

/// Maximum iterations for the solar refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Altitude sampling interval for the Moon, in days.
const MOON_SCAN_STEP_DAYS: f64 = 1.0 / 24.0;

/// Bisection stops once the bracket is narrower than this (~0.1 s).
const BISECTION_TOLERANCE_DAYS: f64 = 1.0e-6;

/// Hour-angle rate in radians per day.
const HOUR_ANGLE_RATE: f64 = TAU * SIDEREAL_RATE;

fn wrap_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Compute one horizon event for the civil day `[day_start, day_end)`.
///
/// Both bounds are Julian Dates in UT. Sunrise and sunset are the pair
/// around the day's solar transit: a sunset after the civil day's end (high
/// summer latitudes) still belongs to this day, as does a sunrise before its
/// start. Moon events must fall inside the bounds, otherwise the result is
/// [`RiseSetResult::NotThisDay`].
pub fn compute_rise_set(
    provider: &dyn PositionProvider,
    location: &Location,
    event: RiseSetEvent,
    day_start: f64,
    day_end: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemError> {
    match event.body() {
        Body::Sun => {
            let noon = 0.5 * (day_start + day_end);
            let result = compute_sun_rise_set(provider, location, event, noon, config)?;
            let window = if event.is_rising() {
                day_start - 0.5..day_end
            } else {
                day_start..day_end + 0.5
            };
            Ok(match result.jd_ut() {
                Some(jd) if !window.contains(&jd) => RiseSetResult::NotThisDay,
                _ => result,
            })
        }
        Body::Moon => compute_moon_rise_set(provider, location, event, day_start, day_end, config),
    }
}

/// Compute sunrise or sunset nearest to a local-noon estimate.
///
/// # Arguments
/// * `provider`: source of the Sun's apparent place
/// * `location`: observer location (validated by the caller)
/// * `event`: `Sunrise` or `Sunset`
/// * `jd_ut_noon`: approximate local noon on the desired date (UT JD)
/// * `config`: refraction, semidiameter, and altitude parameters
///
/// # Returns
/// * `RiseSetResult::Event` with the event time in JD UT
/// * `RiseSetResult::NeverRises` if the Sun stays below the horizon (polar night)
/// * `RiseSetResult::NeverSets` if the Sun stays above the horizon (midnight sun)
pub fn compute_sun_rise_set(
    provider: &dyn PositionProvider,
    location: &Location,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemError> {
    let phi = location.latitude_rad();
    let lon = location.longitude_rad();

    let sun = provider.position(Body::Sun, jd_ut_noon)?;
    let h0 = config
        .sun_target_altitude_deg(sun.ecliptic.distance_km, location.altitude_m)
        .to_radians();
    let dec = sun.equatorial.dec_rad;

    let cos_h0 = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    // Transit: hour angle zero
    let ha_noon = wrap_pi(local_sidereal_time_rad(jd_ut_noon, lon) - sun.equatorial.ra_rad);
    let jd_transit = jd_ut_noon - ha_noon / HOUR_ANGLE_RATE;

    let h0_days = cos_h0.acos() / HOUR_ANGLE_RATE;
    let mut jd_event = if event.is_rising() {
        jd_transit - h0_days
    } else {
        jd_transit + h0_days
    };

    for _ in 0..MAX_ITERATIONS {
        let sun_i = provider.position(Body::Sun, jd_event)?;
        let h0_i = config
            .sun_target_altitude_deg(sun_i.ecliptic.distance_km, location.altitude_m)
            .to_radians();
        let dec_i = sun_i.equatorial.dec_rad;

        let cos_h_i = (h0_i.sin() - phi.sin() * dec_i.sin()) / (phi.cos() * dec_i.cos());
        if cos_h_i > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h_i < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h_i.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };

        let ha_actual = wrap_pi(local_sidereal_time_rad(jd_event, lon) - sun_i.equatorial.ra_rad);
        let correction = wrap_pi(ha_target - ha_actual) / HOUR_ANGLE_RATE;
        jd_event += correction;

        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_ut: jd_event,
        event,
    })
}

/// Moon altitude above its rise/set threshold at `jd_ut`, in degrees.
fn moon_altitude_excess_deg(
    provider: &dyn PositionProvider,
    location: &Location,
    jd_ut: f64,
    config: &RiseSetConfig,
) -> Result<f64, EphemError> {
    let moon = provider.position(Body::Moon, jd_ut)?;
    let phi = location.latitude_rad();
    let dec = moon.equatorial.dec_rad;
    let ha = local_sidereal_time_rad(jd_ut, location.longitude_rad()) - moon.equatorial.ra_rad;

    let altitude = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * ha.cos())
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees();
    let parallax = horizontal_parallax_rad(moon.ecliptic.distance_km).to_degrees();
    Ok(altitude - config.moon_target_altitude_deg(parallax, location.altitude_m))
}

/// Compute moonrise or moonset within `[day_start, day_end)`.
///
/// Samples the Moon's altitude at hourly steps and bisects the first
/// bracket whose sign change matches the event direction.
pub fn compute_moon_rise_set(
    provider: &dyn PositionProvider,
    location: &Location,
    event: RiseSetEvent,
    day_start: f64,
    day_end: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, EphemError> {
    let span = day_end - day_start;
    let steps = ((span / MOON_SCAN_STEP_DAYS).ceil() as usize).max(1);
    let step = span / steps as f64;

    let mut prev_jd = day_start;
    let mut prev = moon_altitude_excess_deg(provider, location, prev_jd, config)?;
    let mut any_above = prev >= 0.0;
    let mut any_below = prev < 0.0;

    for i in 1..=steps {
        let jd = day_start + step * i as f64;
        let cur = moon_altitude_excess_deg(provider, location, jd, config)?;
        any_above |= cur >= 0.0;
        any_below |= cur < 0.0;

        let crossed = if event.is_rising() {
            prev < 0.0 && cur >= 0.0
        } else {
            prev >= 0.0 && cur < 0.0
        };
        if crossed {
            let jd_event = bisect(provider, location, config, prev_jd, jd, prev)?;
            if jd_event < day_end {
                return Ok(RiseSetResult::Event {
                    jd_ut: jd_event,
                    event,
                });
            }
        }
        prev_jd = jd;
        prev = cur;
    }

    Ok(match (any_above, any_below) {
        (true, false) => RiseSetResult::NeverSets,
        (false, true) => RiseSetResult::NeverRises,
        _ => RiseSetResult::NotThisDay,
    })
}

fn bisect(
    provider: &dyn PositionProvider,
    location: &Location,
    config: &RiseSetConfig,
    mut lo: f64,
    mut hi: f64,
    f_lo: f64,
) -> Result<f64, EphemError> {
    let lo_negative = f_lo < 0.0;
    while hi - lo > BISECTION_TOLERANCE_DAYS {
        let mid = 0.5 * (lo + hi);
        let f_mid = moon_altitude_excess_deg(provider, location, mid, config)?;
        if (f_mid < 0.0) == lo_negative {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}
