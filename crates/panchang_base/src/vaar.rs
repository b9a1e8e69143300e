//! Vaar (weekday) of a civil date.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The seven vaars, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    /// 0 = Sunday .. 6 = Saturday.
    pub fn index(self) -> u8 {
        ALL_VAARS
            .iter()
            .position(|&v| v == self)
            .map_or(0, |i| i as u8)
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        ALL_VAARS[weekday.num_days_from_sunday() as usize]
    }
}

/// Vaar of a civil date in its own calendar (no sunrise adjustment).
pub fn vaar_from_date(date: NaiveDate) -> Vaar {
    Vaar::from_weekday(date.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_dates() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(vaar_from_date(d(2024, 3, 20)), Vaar::Budhvaar);
        assert_eq!(vaar_from_date(d(2024, 3, 24)), Vaar::Ravivaar);
        assert_eq!(vaar_from_date(d(2000, 1, 1)).index(), 6);
    }

    #[test]
    fn indices_sunday_first() {
        assert_eq!(Vaar::from_weekday(Weekday::Sun).index(), 0);
        assert_eq!(Vaar::from_weekday(Weekday::Sat).index(), 6);
    }
}
