//! Julian Date ↔ proleptic Gregorian calendar conversions.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 7.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date for a Gregorian calendar date.
///
/// `day_frac` carries the time of day as a fraction (e.g. 15.5 = noon on
/// the 15th).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b - 1524.5
}

/// Calendar date `(year, month, day_frac)` for a Julian Date.
///
/// Dates before 1582-Oct-15 fall back to the Julian calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;
    (year, month, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Decimal year for a Julian Date, taken at mid-month.
///
/// Follows the Espenak–Meeus convention `y = year + (month − 0.5) / 12`
/// that the ΔT polynomials are fitted against.
pub fn jd_to_decimal_year(jd: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd);
    f64::from(year) + (f64::from(month) - 0.5) / 12.0
}
