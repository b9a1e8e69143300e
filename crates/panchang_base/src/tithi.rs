//! Tithi (lunar day) and paksha from Moon–Sun elongation.
//!
//! The synodic month is divided into 30 tithis of 12° elongation each.
//! Tithis 1–15 form the waxing half (Shukla paksha, ending at Purnima),
//! 16–30 the waning half (Krishna paksha, ending at Amavasya).

use panchang_ephem::normalize_360;
use serde::{Deserialize, Serialize};

/// Elongation span of one tithi in degrees.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paksha {
    /// Waxing (bright) half.
    Shukla,
    /// Waning (dark) half.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// 0 = Shukla, 1 = Krishna.
    pub const fn index(self) -> u8 {
        match self {
            Self::Shukla => 0,
            Self::Krishna => 1,
        }
    }

    /// Fortnight of a 1-based tithi index (1..=30).
    pub const fn of_tithi(tithi_index: u8) -> Self {
        if tithi_index <= 15 { Self::Shukla } else { Self::Krishna }
    }
}

/// Tithi classification at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiInfo {
    /// 1-based tithi index in the month, 1..=30.
    pub index: u8,
    pub paksha: Paksha,
    /// 1-based number within the paksha, 1..=15.
    pub in_paksha: u8,
    /// Elongation already covered within this tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify an elongation (Moon − Sun, degrees) into a tithi.
///
/// Intervals are half-open: `[12k, 12(k+1))` maps to tithi `k + 1`.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let e = normalize_360(elongation_deg);
    let k = ((e / TITHI_SPAN_DEG).floor() as u8).min(29);
    let index = k + 1;
    let paksha = Paksha::of_tithi(index);
    TithiInfo {
        index,
        paksha,
        in_paksha: if index <= 15 { index } else { index - 15 },
        degrees_in_tithi: e - f64::from(k) * TITHI_SPAN_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_shukla_pratipada() {
        let t = tithi_from_elongation(0.0);
        assert_eq!((t.index, t.paksha, t.in_paksha), (1, Paksha::Shukla, 1));
    }

    #[test]
    fn one_eighty_is_krishna_pratipada() {
        let t = tithi_from_elongation(180.0);
        assert_eq!((t.index, t.paksha, t.in_paksha), (16, Paksha::Krishna, 1));
    }

    #[test]
    fn boundary_belongs_to_next_tithi() {
        assert_eq!(tithi_from_elongation(11.999_999).index, 1);
        assert_eq!(tithi_from_elongation(12.0).index, 2);
        assert_eq!(tithi_from_elongation(168.0).index, 15);
        assert_eq!(tithi_from_elongation(179.999).in_paksha, 15);
    }

    #[test]
    fn end_of_month_is_amavasya() {
        let t = tithi_from_elongation(359.999_999);
        assert_eq!((t.index, t.paksha, t.in_paksha), (30, Paksha::Krishna, 15));
    }

    #[test]
    fn wraps_out_of_range_input() {
        assert_eq!(tithi_from_elongation(360.0).index, 1);
        assert_eq!(tithi_from_elongation(-6.0).index, 30);
    }

    #[test]
    fn degrees_in_tithi() {
        let t = tithi_from_elongation(40.5);
        assert_eq!(t.index, 4);
        assert!((t.degrees_in_tithi - 4.5).abs() < 1e-12);
    }
}
