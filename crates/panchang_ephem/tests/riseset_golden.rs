//! Golden-value tests for sunrise/sunset against published almanac times.
//!
//! Reference times are rounded to the minute; the tolerances cover the
//! rounding plus the provider's stated error.

use chrono::{NaiveDate, Timelike};
use chrono_tz::Tz;
use panchang_ephem::{
    EvaluationMoment, Location, MeeusProvider, RiseSetConfig, events_for_date, positions_for_date,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn minutes_of_day<T: Timelike>(t: &T) -> u32 {
    t.hour() * 60 + t.minute()
}

#[test]
fn new_delhi_equinox_sunrise() {
    let loc = Location::new(28.6139, 77.209, chrono_tz::Asia::Kolkata);
    let ev = events_for_date(&MeeusProvider, date(2024, 3, 20), &loc, &RiseSetConfig::default())
        .unwrap();
    let rise = ev.sunrise.expect("Delhi has a sunrise");
    let m = minutes_of_day(&rise);
    // 06:18–06:26 IST
    assert!((378..=386).contains(&m), "sunrise {rise}");
    assert_eq!(rise.date_naive(), date(2024, 3, 20));
}

#[test]
fn new_delhi_equinox_sunset() {
    let loc = Location::new(28.6139, 77.209, chrono_tz::Asia::Kolkata);
    let ev = events_for_date(&MeeusProvider, date(2024, 3, 20), &loc, &RiseSetConfig::default())
        .unwrap();
    let set = ev.sunset.expect("Delhi has a sunset");
    let m = minutes_of_day(&set);
    // ~18:32 IST
    assert!((1108..=1116).contains(&m), "sunset {set}");
}

#[test]
fn new_york_summer_solstice_in_edt() {
    let tz: Tz = chrono_tz::America::New_York;
    let loc = Location::new(40.7128, -74.006, tz);
    let ev = events_for_date(&MeeusProvider, date(2024, 6, 20), &loc, &RiseSetConfig::default())
        .unwrap();
    // 05:25 and 20:31 EDT
    let rise = minutes_of_day(&ev.sunrise.unwrap());
    let set = minutes_of_day(&ev.sunset.unwrap());
    assert!((321..=329).contains(&rise), "sunrise {rise}");
    assert!((1227..=1235).contains(&set), "sunset {set}");
}

#[test]
fn tromso_polar_night_has_no_sunrise() {
    let loc = Location::new(69.6492, 18.9553, chrono_tz::Europe::Oslo);
    let ev = events_for_date(&MeeusProvider, date(2024, 12, 20), &loc, &RiseSetConfig::default())
        .unwrap();
    assert!(ev.sunrise.is_none());
    assert!(ev.sunset.is_none());
}

#[test]
fn reykjavik_midsummer_sunset_after_midnight() {
    let loc = Location::new(64.1466, -21.9426, chrono_tz::Atlantic::Reykjavik);
    let ev = events_for_date(&MeeusProvider, date(2024, 6, 21), &loc, &RiseSetConfig::default())
        .unwrap();
    // 02:55 and 00:03 (next day), UTC+0
    let rise = ev.sunrise.expect("Reykjavik has a sunrise");
    let set = ev.sunset.expect("Reykjavik has a sunset");
    assert_eq!(rise.date_naive(), date(2024, 6, 21));
    assert!((170..=180).contains(&minutes_of_day(&rise)), "sunrise {rise}");
    assert_eq!(set.date_naive(), date(2024, 6, 22));
    assert!(minutes_of_day(&set) <= 8, "sunset {set}");
}

#[test]
fn polar_night_falls_back_to_local_noon() {
    let loc = Location::new(69.6492, 18.9553, chrono_tz::Europe::Oslo);
    let day = positions_for_date(
        &MeeusProvider,
        date(2024, 12, 20),
        &loc,
        &RiseSetConfig::default(),
        EvaluationMoment::Sunrise,
    )
    .unwrap();
    assert_eq!(day.moment, EvaluationMoment::LocalNoon);
    assert_eq!(day.evaluated_at.hour(), 12);
}

#[test]
fn sunrise_moment_used_when_available() {
    let loc = Location::new(21.52, 71.82, chrono_tz::Asia::Kolkata);
    let day = positions_for_date(
        &MeeusProvider,
        date(2024, 11, 15),
        &loc,
        &RiseSetConfig::default(),
        EvaluationMoment::Sunrise,
    )
    .unwrap();
    assert_eq!(day.moment, EvaluationMoment::Sunrise);
    assert_eq!(Some(day.evaluated_at), day.events.sunrise);
}

#[test]
fn higher_altitude_rises_earlier() {
    let base = Location::new(28.6139, 77.209, chrono_tz::Asia::Kolkata);
    let high = base.clone().at_altitude(2000.0);
    let cfg = RiseSetConfig::default();
    let a = events_for_date(&MeeusProvider, date(2024, 3, 20), &base, &cfg).unwrap();
    let b = events_for_date(&MeeusProvider, date(2024, 3, 20), &high, &cfg).unwrap();
    assert!(b.sunrise.unwrap() < a.sunrise.unwrap());
    assert!(b.sunset.unwrap() > a.sunset.unwrap());
}
