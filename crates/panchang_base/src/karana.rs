//! Karana (half-tithi) from Moon–Sun elongation.
//!
//! Each tithi has two karanas of 6°, giving 60 per month. The first is the
//! fixed Kimstughna; the next 56 cycle through the seven movable karanas
//! eight times; the last three are the fixed Shakuni, Chatushpada, Naga.

use panchang_ephem::normalize_360;
use serde::{Deserialize, Serialize};

/// Elongation span of one karana in degrees.
pub const KARANA_SPAN_DEG: f64 = 6.0;

/// The 11 distinct karanas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

/// All 11 karanas in name-table order (0 = Kimstughna).
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Kimstughna,
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
];

/// The seven movable karanas, in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Index into [`ALL_KARANAS`] (and the karana name table).
    pub fn name_index(self) -> u8 {
        ALL_KARANAS
            .iter()
            .position(|&k| k == self)
            .map_or(0, |i| i as u8)
    }
}

/// Position of a half-tithi in the fixed/movable scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "position", rename_all = "snake_case")]
pub enum KaranaKind {
    /// Half-tithi 0 (Kimstughna).
    FixedFirst,
    /// Half-tithis 1..=56; position 1..=7 within the movable cycle.
    Movable(u8),
    /// Half-tithis 57..=59; position 1..=3 (Shakuni, Chatushpada, Naga).
    FixedLast(u8),
}

/// Karana classification at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based half-tithi index in the month, 0..=59.
    pub half_tithi_index: u8,
    pub kind: KaranaKind,
}

fn classify(half_tithi_index: u8) -> KaranaInfo {
    let (karana, kind) = match half_tithi_index {
        0 => (Karana::Kimstughna, KaranaKind::FixedFirst),
        1..=56 => {
            let pos = (half_tithi_index - 1) % 7;
            (MOVABLE_KARANAS[usize::from(pos)], KaranaKind::Movable(pos + 1))
        }
        57 => (Karana::Shakuni, KaranaKind::FixedLast(1)),
        58 => (Karana::Chatushpada, KaranaKind::FixedLast(2)),
        _ => (Karana::Naga, KaranaKind::FixedLast(3)),
    };
    KaranaInfo {
        karana,
        half_tithi_index,
        kind,
    }
}

/// Karana for a 0-based half-tithi index, or `None` past 59.
pub fn karana_from_half_tithi(half_tithi_index: u8) -> Option<KaranaInfo> {
    (half_tithi_index <= 59).then(|| classify(half_tithi_index))
}

/// Classify an elongation (Moon − Sun, degrees) into a karana.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let e = normalize_360(elongation_deg);
    classify(((e / KARANA_SPAN_DEG).floor() as u8).min(59))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_first() {
        let k = karana_from_elongation(0.0);
        assert_eq!(k.karana, Karana::Kimstughna);
        assert_eq!(k.kind, KaranaKind::FixedFirst);
    }

    #[test]
    fn movable_cycle() {
        assert_eq!(karana_from_elongation(6.0).karana, Karana::Bava);
        assert_eq!(karana_from_elongation(42.0).karana, Karana::Vishti);
        assert_eq!(karana_from_elongation(48.0).karana, Karana::Bava);
        let k = karana_from_half_tithi(56).unwrap();
        assert_eq!(k.karana, Karana::Vishti);
        assert_eq!(k.kind, KaranaKind::Movable(7));
    }

    #[test]
    fn fixed_last_three() {
        assert_eq!(karana_from_half_tithi(57).unwrap().karana, Karana::Shakuni);
        assert_eq!(karana_from_half_tithi(58).unwrap().karana, Karana::Chatushpada);
        assert_eq!(karana_from_half_tithi(59).unwrap().karana, Karana::Naga);
        assert_eq!(karana_from_elongation(359.99).kind, KaranaKind::FixedLast(3));
        assert!(karana_from_half_tithi(60).is_none());
    }

    #[test]
    fn full_moon_half_tithi() {
        // 180° → half-tithi 30 → (30 - 1) mod 7 = 1 → Balava
        let k = karana_from_elongation(180.0);
        assert_eq!(k.half_tithi_index, 30);
        assert_eq!(k.karana, Karana::Balava);
    }

    #[test]
    fn name_index_matches_table() {
        for (i, k) in ALL_KARANAS.iter().enumerate() {
            assert_eq!(usize::from(k.name_index()), i);
        }
    }

    #[test]
    fn kind_serializes_tagged() {
        let json = serde_json::to_string(&KaranaKind::Movable(3)).unwrap();
        assert_eq!(json, r#"{"kind":"movable","position":3}"#);
    }
}
