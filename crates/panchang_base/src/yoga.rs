//! Yoga from the sum of Sun and Moon longitudes.
//!
//! The 27 yogas divide the longitude sum into equal 13°20′ arcs, starting
//! with Vishkambha at 0°.

use panchang_ephem::normalize_360;
use serde::{Deserialize, Serialize};

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

/// The 27 yogas in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

/// Yoga classification at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 0-based index (0 = Vishkambha).
    pub index: u8,
    /// `(sun + moon) mod 360` in degrees.
    pub sum_deg: f64,
}

/// Classify a Sun+Moon longitude sum (degrees, any range) into a yoga.
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let index = ((sum / YOGA_SPAN).floor() as u8) % 27;
    YogaInfo {
        yoga: ALL_YOGAS[usize::from(index)],
        index,
        sum_deg: sum,
    }
}

/// Classify from individual Sun and Moon longitudes.
pub fn yoga_from_longitudes(sun_longitude_deg: f64, moon_longitude_deg: f64) -> YogaInfo {
    yoga_from_sum(sun_longitude_deg + moon_longitude_deg)
}
