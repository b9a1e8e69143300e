//! Pachkhan (fasting vow) time cutoffs anchored to sunrise and sunset.
//!
//! Offsets are added to the local wall-clock time, so a DST change later in
//! the day does not shift a cutoff.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

/// Navkarshi: 48 minutes (one ghadi pair) after sunrise.
pub const NAVKARSHI_OFFSET_MIN: i64 = 48;
/// Porsi: one prahar after sunrise.
pub const PORSI_OFFSET_MIN: i64 = 3 * 60;
/// Sadh-Porsi: a prahar and a half after sunrise.
pub const SADH_PORSI_OFFSET_MIN: i64 = 4 * 60 + 30;
/// Ratri bhojan (night-eating) window closes 48 minutes after sunset.
pub const RATRI_BHOJAN_OFFSET_MIN: i64 = 48;

/// Why cutoffs could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CutoffsUnavailable {
    #[error("sunrise does not occur on this date")]
    MissingSunrise,
    #[error("sunset does not occur on this date")]
    MissingSunset,
}

/// Observance kinds a user may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PachkhanKind {
    /// Full-day fast.
    Upvas,
    /// One meal a day.
    Ekasanu,
    /// Two meals a day.
    Biyasanu,
    Navkarshi,
    Porsi,
    SadhPorsi,
    RatriBhojan,
}

impl PachkhanKind {
    pub const ALL: [PachkhanKind; 7] = [
        Self::Upvas,
        Self::Ekasanu,
        Self::Biyasanu,
        Self::Navkarshi,
        Self::Porsi,
        Self::SadhPorsi,
        Self::RatriBhojan,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upvas => "Upvas",
            Self::Ekasanu => "Ekasanu",
            Self::Biyasanu => "Biyasanu",
            Self::Navkarshi => "Navkarshi",
            Self::Porsi => "Porsi",
            Self::SadhPorsi => "Sadh Porsi",
            Self::RatriBhojan => "Ratri Bhojan",
        }
    }

    /// Whether the vow ends at a clock cutoff.
    pub const fn is_time_bound(self) -> bool {
        matches!(
            self,
            Self::Navkarshi | Self::Porsi | Self::SadhPorsi | Self::RatriBhojan
        )
    }
}

/// The four cutoffs for one day, as local wall-clock date-times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PachkhanCutoffs {
    pub navkarshi: NaiveDateTime,
    pub porsi: NaiveDateTime,
    pub sadh_porsi: NaiveDateTime,
    pub ratri_bhojan_end: NaiveDateTime,
}

impl PachkhanCutoffs {
    /// Cutoff that ends a time-bound observance; `None` for whole-day kinds.
    pub fn cutoff_for(&self, kind: PachkhanKind) -> Option<NaiveDateTime> {
        match kind {
            PachkhanKind::Navkarshi => Some(self.navkarshi),
            PachkhanKind::Porsi => Some(self.porsi),
            PachkhanKind::SadhPorsi => Some(self.sadh_porsi),
            PachkhanKind::RatriBhojan => Some(self.ratri_bhojan_end),
            PachkhanKind::Upvas | PachkhanKind::Ekasanu | PachkhanKind::Biyasanu => None,
        }
    }
}

/// Compute all four cutoffs from local sunrise and sunset.
///
/// Either input absent yields an error and no partial set.
pub fn compute_cutoffs(
    sunrise: Option<NaiveDateTime>,
    sunset: Option<NaiveDateTime>,
) -> Result<PachkhanCutoffs, CutoffsUnavailable> {
    let sunrise = sunrise.ok_or(CutoffsUnavailable::MissingSunrise)?;
    let sunset = sunset.ok_or(CutoffsUnavailable::MissingSunset)?;
    Ok(PachkhanCutoffs {
        navkarshi: sunrise + TimeDelta::minutes(NAVKARSHI_OFFSET_MIN),
        porsi: sunrise + TimeDelta::minutes(PORSI_OFFSET_MIN),
        sadh_porsi: sunrise + TimeDelta::minutes(SADH_PORSI_OFFSET_MIN),
        ratri_bhojan_end: sunset + TimeDelta::minutes(RATRI_BHOJAN_OFFSET_MIN),
    })
}

/// `HH:MM` of a wall-clock time; seconds are truncated, not rounded.
pub fn clock_string<T: Timelike>(t: &T) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn six_to_six() {
        let c = compute_cutoffs(Some(at(6, 0)), Some(at(18, 0))).unwrap();
        assert_eq!(clock_string(&c.navkarshi), "06:48");
        assert_eq!(clock_string(&c.porsi), "09:00");
        assert_eq!(clock_string(&c.sadh_porsi), "10:30");
        assert_eq!(clock_string(&c.ratri_bhojan_end), "18:48");
    }

    #[test]
    fn missing_sunrise_or_sunset() {
        assert_eq!(
            compute_cutoffs(None, Some(at(18, 0))),
            Err(CutoffsUnavailable::MissingSunrise)
        );
        assert_eq!(
            compute_cutoffs(Some(at(6, 0)), None),
            Err(CutoffsUnavailable::MissingSunset)
        );
    }

    #[test]
    fn late_sunset_crosses_midnight() {
        let c = compute_cutoffs(Some(at(3, 30)), Some(at(23, 40))).unwrap();
        assert_eq!(clock_string(&c.ratri_bhojan_end), "00:28");
        assert_eq!(c.ratri_bhojan_end.date(), NaiveDate::from_ymd_opt(2024, 3, 21).unwrap());
    }

    #[test]
    fn clock_string_truncates_seconds() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(6, 23, 59)
            .unwrap();
        assert_eq!(clock_string(&t), "06:23");
    }

    #[test]
    fn cutoff_for_kinds() {
        let c = compute_cutoffs(Some(at(6, 0)), Some(at(18, 0))).unwrap();
        assert_eq!(c.cutoff_for(PachkhanKind::Porsi), Some(c.porsi));
        assert_eq!(c.cutoff_for(PachkhanKind::Upvas), None);
        for kind in PachkhanKind::ALL {
            assert_eq!(c.cutoff_for(kind).is_some(), kind.is_time_bound());
        }
    }
}
