//! Calendar derivation for the daily panchang.
//!
//! This crate provides:
//! - Tithi, nakshatra, yoga, karana, and vaar classification
//! - Tropical or Lahiri sidereal zodiac
//! - Pachkhan (fasting) cutoffs from sunrise and sunset
//! - Localized names in English, Hindi, Marathi, and Gujarati
//!
//! Everything here is a pure function of its inputs.

pub mod ayanamsha;
pub mod karana;
pub mod nakshatra;
pub mod names;
pub mod pachkhan;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use ayanamsha::{LAHIRI_J2000_DEG, Zodiac, general_precession_arcsec, lahiri_ayanamsha_deg};
pub use karana::{
    ALL_KARANAS, Karana, KaranaInfo, KaranaKind, MOVABLE_KARANAS, karana_from_elongation,
    karana_from_half_tithi,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use names::{
    Language, MultilingualText, karana_name, nakshatra_name, paksha_name, tithi_name, vaar_name,
    yoga_name,
};
pub use pachkhan::{
    CutoffsUnavailable, PachkhanCutoffs, PachkhanKind, clock_string, compute_cutoffs,
};
pub use tithi::{Paksha, TITHI_SPAN_DEG, TithiInfo, tithi_from_elongation};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_date};
pub use yoga::{ALL_YOGAS, YOGA_SPAN, Yoga, YogaInfo, yoga_from_longitudes, yoga_from_sum};

use panchang_ephem::SunMoonPosition;

/// The four longitude-derived elements at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elements {
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
}

/// Derive tithi, nakshatra, yoga, and karana from a position.
///
/// Nakshatra and yoga follow whatever zodiac `position` is expressed in.
pub fn elements_from_position(position: &SunMoonPosition) -> Elements {
    let elongation = position.elongation_deg();
    Elements {
        tithi: tithi_from_elongation(elongation),
        nakshatra: nakshatra_from_longitude(position.moon_longitude_deg),
        yoga: yoga_from_longitudes(position.sun_longitude_deg, position.moon_longitude_deg),
        karana: karana_from_elongation(elongation),
    }
}
