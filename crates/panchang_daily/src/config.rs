//! Configuration for daily panchang computation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use panchang_base::{Language, Zodiac};
use panchang_ephem::{EvaluationMoment, RiseSetConfig};

/// Source name declared when nothing else is configured.
///
/// Deliberately not a registry entry: locally computed values are not
/// attributed to an external authority unless an operator says so.
pub const DEFAULT_DATA_SOURCE: &str = "Meeus truncated series";

/// Verification gate settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Bound on the external confirmation call, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self { timeout_ms: 5_000 }
    }
}

impl VerificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// All knobs of a daily computation. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyConfig {
    /// Zodiac for nakshatra and yoga.
    pub zodiac: Zodiac,
    /// Instant at which the day's elements are evaluated.
    pub evaluation: EvaluationMoment,
    pub riseset: RiseSetConfig,
    pub verification: VerificationConfig,
    /// Source identifier declared to the verification gate.
    pub data_source: String,
    /// Preferred display language.
    pub language: Language,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            zodiac: Zodiac::default(),
            evaluation: EvaluationMoment::default(),
            riseset: RiseSetConfig::default(),
            verification: VerificationConfig::default(),
            data_source: DEFAULT_DATA_SOURCE.to_owned(),
            language: Language::default(),
        }
    }
}
