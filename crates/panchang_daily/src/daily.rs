//! Daily panchang assembly: positions, elements, names, cutoffs, verification.

use chrono::{DateTime, NaiveDate, SecondsFormat};
use chrono_tz::Tz;
use tracing::{debug, info};

use panchang_base::{
    MultilingualText, clock_string, compute_cutoffs, elements_from_position, karana_name,
    nakshatra_name, paksha_name, tithi_name, vaar_from_date, vaar_name, yoga_name,
};
use panchang_ephem::{Location, PositionProvider, SunMoonEvents, positions_for_date};
use panchang_verify::{ExternalConfirmation, VerificationGate};

use crate::config::DailyConfig;
use crate::daily_types::{
    ComputedPanchang, DayEvents, KaranaElement, NakshatraElement, PachkhanTimes, PanchangRecord,
    TithiElement, VaarElement, YogaElement,
};
use crate::error::PanchangError;

/// Parse a `YYYY-MM-DD` civil date.
pub fn parse_date(s: &str) -> Result<NaiveDate, PanchangError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| PanchangError::InvalidDate(format!("'{s}': {e}")))
}

/// Build a verification gate honoring the configured timeout.
pub fn gate_from_config<C>(confirmation: C, config: &DailyConfig) -> VerificationGate<C> {
    VerificationGate::new(confirmation).with_timeout(config.verification.timeout())
}

fn named(
    element: &'static str,
    index: u8,
    name: Option<&'static MultilingualText>,
) -> Result<&'static MultilingualText, PanchangError> {
    name.ok_or(PanchangError::NameMissing { element, index })
}

fn clock(t: Option<DateTime<Tz>>) -> Option<String> {
    t.map(|t| clock_string(&t))
}

fn day_events(events: &SunMoonEvents) -> DayEvents {
    DayEvents {
        sunrise: clock(events.sunrise),
        sunset: clock(events.sunset),
        moonrise: clock(events.moonrise),
        moonset: clock(events.moonset),
    }
}

fn pachkhan_times(events: &SunMoonEvents) -> PachkhanTimes {
    let sunrise = events.sunrise.map(|t| t.naive_local());
    let sunset = events.sunset.map(|t| t.naive_local());
    match compute_cutoffs(sunrise, sunset) {
        Ok(c) => PachkhanTimes {
            navkarshi: Some(clock_string(&c.navkarshi)),
            porsi: Some(clock_string(&c.porsi)),
            sadh_porsi: Some(clock_string(&c.sadh_porsi)),
            ratri_bhojan_end: Some(clock_string(&c.ratri_bhojan_end)),
            unavailable: None,
        },
        Err(e) => {
            debug!(reason = %e, "pachkhan cutoffs absent");
            PachkhanTimes {
                unavailable: Some(e.to_string()),
                ..PachkhanTimes::default()
            }
        }
    }
}

/// Compute the panchang for `date` at `location` without verification.
///
/// Fails with no partial record when the location or date is invalid, or
/// when the provider cannot produce a position. Missing horizon events only
/// blank the dependent fields.
pub fn compute_panchang(
    provider: &dyn PositionProvider,
    date: NaiveDate,
    location: &Location,
    config: &DailyConfig,
) -> Result<ComputedPanchang, PanchangError> {
    let day = positions_for_date(provider, date, location, &config.riseset, config.evaluation)?;
    let position = config.zodiac.apply(day.position);
    let elements = elements_from_position(&position);

    let tithi = elements.tithi;
    let nakshatra = elements.nakshatra;
    let yoga = elements.yoga;
    let karana = elements.karana;
    let vaar = vaar_from_date(date);

    let panchang = ComputedPanchang {
        date,
        location: location.clone(),
        language: config.language,
        zodiac: config.zodiac,
        evaluation: day.moment,
        evaluated_at: day.evaluated_at.to_rfc3339_opts(SecondsFormat::Secs, false),
        sun_longitude_deg: position.sun_longitude_deg,
        moon_longitude_deg: position.moon_longitude_deg,
        ayanamsha_deg: position.ayanamsha_deg,
        tithi: TithiElement {
            index: tithi.index,
            paksha: tithi.paksha,
            in_paksha: tithi.in_paksha,
            name: named("tithi", tithi.index, tithi_name(tithi.index))?,
            paksha_name: paksha_name(tithi.paksha),
        },
        nakshatra: NakshatraElement {
            index: nakshatra.index,
            pada: nakshatra.pada,
            name: named("nakshatra", nakshatra.index, nakshatra_name(nakshatra.index))?,
        },
        yoga: YogaElement {
            index: yoga.index,
            name: named("yoga", yoga.index, yoga_name(yoga.index))?,
        },
        karana: KaranaElement {
            half_tithi_index: karana.half_tithi_index,
            kind: karana.kind,
            name: named(
                "karana",
                karana.karana.name_index(),
                karana_name(karana.karana),
            )?,
        },
        vaar: VaarElement {
            index: vaar.index(),
            name: named("vaar", vaar.index(), vaar_name(vaar.index()))?,
        },
        events: day_events(&day.events),
        pachkhan: pachkhan_times(&day.events),
        provider: provider.name(),
        accuracy: provider.accuracy(),
        data_source: config.data_source.clone(),
    };

    info!(
        %date,
        tithi = panchang.tithi.name.en,
        nakshatra = panchang.nakshatra.name.en,
        zodiac = %config.zodiac,
        moment = %day.moment,
        "panchang computed"
    );
    Ok(panchang)
}

/// Compute the panchang and pass it through the verification gate.
///
/// The record is returned whether or not verification succeeds; an
/// unverified record carries the disclaimer.
pub async fn panchang_for_date<C>(
    provider: &dyn PositionProvider,
    gate: &VerificationGate<C>,
    date: NaiveDate,
    location: &Location,
    config: &DailyConfig,
) -> Result<PanchangRecord, PanchangError>
where
    C: ExternalConfirmation<ComputedPanchang>,
{
    let panchang = compute_panchang(provider, date, location, config)?;
    let verification = gate.verify(&panchang, &config.data_source).await;
    debug!(
        %date,
        source = %config.data_source,
        state = ?verification.state,
        "verification finished"
    );
    Ok(PanchangRecord::new(panchang, &verification))
}
