//! Types for the assembled daily panchang.

use chrono::NaiveDate;
use serde::Serialize;

use panchang_base::{KaranaKind, Language, MultilingualText, Paksha, Zodiac};
use panchang_ephem::{AccuracyBound, EvaluationMoment, Location};
use panchang_verify::VerificationResult;

/// Tithi with its localized names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiElement {
    /// 1..=30.
    pub index: u8,
    pub paksha: Paksha,
    /// 1..=15.
    pub in_paksha: u8,
    pub name: &'static MultilingualText,
    pub paksha_name: &'static MultilingualText,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraElement {
    /// 0..=26.
    pub index: u8,
    /// 1..=4.
    pub pada: u8,
    pub name: &'static MultilingualText,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaElement {
    /// 0..=26.
    pub index: u8,
    pub name: &'static MultilingualText,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaElement {
    /// 0..=59.
    pub half_tithi_index: u8,
    pub kind: KaranaKind,
    pub name: &'static MultilingualText,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VaarElement {
    /// 0 = Sunday.
    pub index: u8,
    pub name: &'static MultilingualText,
}

/// Pachkhan cutoffs as `HH:MM` strings; all present or all absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PachkhanTimes {
    pub navkarshi: Option<String>,
    pub porsi: Option<String>,
    pub sadh_porsi: Option<String>,
    pub ratri_bhojan_end: Option<String>,
    /// Why the cutoffs are absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
}

impl PachkhanTimes {
    pub fn is_available(&self) -> bool {
        self.unavailable.is_none()
    }
}

/// Horizon events as `HH:MM` strings in the location's timezone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayEvents {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub moonrise: Option<String>,
    pub moonset: Option<String>,
}

/// Everything computed for a day, before verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedPanchang {
    pub date: NaiveDate,
    pub location: Location,
    pub language: Language,
    pub zodiac: Zodiac,
    /// Moment actually used for the elements.
    pub evaluation: EvaluationMoment,
    /// Evaluation instant, RFC 3339 with the location's offset.
    pub evaluated_at: String,
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    pub ayanamsha_deg: f64,
    pub tithi: TithiElement,
    pub nakshatra: NakshatraElement,
    pub yoga: YogaElement,
    pub karana: KaranaElement,
    pub vaar: VaarElement,
    #[serde(flatten)]
    pub events: DayEvents,
    pub pachkhan: PachkhanTimes,
    /// Provider identifier, e.g. `"meeus"`.
    pub provider: &'static str,
    pub accuracy: AccuracyBound,
    /// Source declared to the verification gate.
    pub data_source: String,
}

/// A computed panchang together with its verification outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangRecord {
    #[serde(flatten)]
    pub panchang: ComputedPanchang,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<&'static str>,
}

impl PanchangRecord {
    pub fn new(panchang: ComputedPanchang, verification: &VerificationResult) -> Self {
        Self {
            panchang,
            verified: verification.is_verified(),
            reason: verification.reason.as_ref().map(ToString::to_string),
            disclaimer: verification.disclaimer(),
        }
    }
}
