//! Bridge between civil dates in an IANA timezone and Julian Dates in UT.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// Julian Date (UT) of a UTC instant.
pub fn utc_to_jd(t: &DateTime<Utc>) -> f64 {
    let secs = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// UTC instant of a Julian Date (UT), to the nearest microsecond.
pub fn jd_to_utc(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    let micros = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1e6).round();
    if !micros.is_finite() || micros.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp_micros(micros as i64).ok_or(TimeError::OutOfRange(jd))
}

/// Local date-time of a Julian Date (UT) in the given timezone.
pub fn jd_to_local(jd: f64, tz: Tz) -> Result<DateTime<Tz>, TimeError> {
    Ok(jd_to_utc(jd)?.with_timezone(&tz))
}

/// Julian Date (UT) of a local wall-clock time.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. A time
/// inside a DST gap is an error.
pub fn local_to_jd(local: NaiveDateTime, tz: Tz) -> Result<f64, TimeError> {
    let resolved = tz
        .from_local_datetime(&local)
        .earliest()
        .ok_or(TimeError::NonexistentLocalTime { local, tz })?;
    Ok(utc_to_jd(&resolved.with_timezone(&Utc)))
}

/// Julian Date (UT) at which the civil day `date` begins in `tz`.
///
/// A few zones switch clocks at midnight, so the first existing hour is
/// used when 00:00 falls in a gap.
pub fn start_of_day_jd(date: NaiveDate, tz: Tz) -> Result<f64, TimeError> {
    for hour in 0..3 {
        let Some(local) = date.and_hms_opt(hour, 0, 0) else {
            continue;
        };
        match local_to_jd(local, tz) {
            Ok(jd) => return Ok(jd),
            Err(TimeError::NonexistentLocalTime { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(TimeError::InvalidDate(format!("{date} has no start of day in {tz}")))
}

/// `(start, end)` Julian Dates (UT) bracketing the civil day `date` in `tz`.
pub fn civil_day_bounds_jd(date: NaiveDate, tz: Tz) -> Result<(f64, f64), TimeError> {
    let next = date
        .succ_opt()
        .ok_or_else(|| TimeError::InvalidDate(format!("{date} has no successor")))?;
    Ok((start_of_day_jd(date, tz)?, start_of_day_jd(next, tz)?))
}

/// Julian Date (UT) of local clock noon on `date` in `tz`.
pub fn local_noon_jd(date: NaiveDate, tz: Tz) -> Result<f64, TimeError> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| TimeError::InvalidDate(date.to_string()))?;
    local_to_jd(noon, tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn unix_epoch_roundtrip() {
        let t = DateTime::from_timestamp(0, 0).unwrap();
        assert!((utc_to_jd(&t) - UNIX_EPOCH_JD).abs() < 1e-12);
        let back = jd_to_utc(UNIX_EPOCH_JD).unwrap();
        assert_eq!(back.timestamp(), 0);
    }

    #[test]
    fn kolkata_midnight_is_1830_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let jd = start_of_day_jd(date, chrono_tz::Asia::Kolkata).unwrap();
        let utc = jd_to_utc(jd).unwrap();
        assert_eq!(utc.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 19).unwrap());
        assert_eq!((utc.hour(), utc.minute()), (18, 30));
    }

    #[test]
    fn day_bounds_span_23h_on_spring_forward() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let (start, end) = civil_day_bounds_jd(date, chrono_tz::America::New_York).unwrap();
        let hours = (end - start) * 24.0;
        assert!((hours - 23.0).abs() < 1e-6, "hours = {hours}");
    }

    #[test]
    fn gap_time_is_rejected() {
        let local = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let err = local_to_jd(local, chrono_tz::America::New_York).unwrap_err();
        assert!(matches!(err, TimeError::NonexistentLocalTime { .. }));
    }

    #[test]
    fn local_noon_in_kolkata() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let jd = local_noon_jd(date, chrono_tz::Asia::Kolkata).unwrap();
        let local = jd_to_local(jd, chrono_tz::Asia::Kolkata).unwrap();
        assert_eq!((local.hour(), local.minute()), (12, 0));
    }
}
