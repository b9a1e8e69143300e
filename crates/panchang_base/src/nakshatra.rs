//! Nakshatra (lunar mansion) from the Moon's ecliptic longitude.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13°20′, each with
//! 4 padas of 3°20′. The Moon's actual longitude is used, never its
//! illuminated fraction.

use panchang_ephem::normalize_360;
use serde::{Deserialize, Serialize};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// 0-based index (Ashwini=0 .. Revati=26).
    pub fn index(self) -> u8 {
        ALL_NAKSHATRAS
            .iter()
            .position(|&n| n == self)
            .map_or(0, |i| i as u8)
    }

    /// Nakshatra at a 0-based index.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_NAKSHATRAS.get(usize::from(index)).copied()
    }
}

/// Nakshatra classification at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub index: u8,
    /// Pada within the nakshatra, 1..=4.
    pub pada: u8,
    /// Degrees within the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from the Moon's longitude.
pub fn nakshatra_from_longitude(moon_longitude_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(moon_longitude_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8) % 27;
    let degrees_in_nakshatra = (lon - f64::from(idx) * NAKSHATRA_SPAN).max(0.0);
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[usize::from(idx)],
        index: idx,
        pada,
        degrees_in_nakshatra,
    }
}
