//! Load [`DailyConfig`] from a TOML file and `PANCHANG_*` environment variables.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, the
//! environment. Every TOML key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use panchang_base::{Language, Zodiac};
use panchang_daily::DailyConfig;
use tracing::debug;

use crate::error::ConfigError;

pub const ENV_ZODIAC: &str = "PANCHANG_ZODIAC";
pub const ENV_LANGUAGE: &str = "PANCHANG_LANGUAGE";
pub const ENV_DATA_SOURCE: &str = "PANCHANG_DATA_SOURCE";
pub const ENV_VERIFY_TIMEOUT_MS: &str = "PANCHANG_VERIFY_TIMEOUT_MS";

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "panchang.toml";

/// Parse TOML text into a configuration. Missing keys take defaults.
pub fn parse_config(text: &str, origin: &Path) -> Result<DailyConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Read and parse a TOML configuration file.
pub fn read_config_file(path: &Path) -> Result<DailyConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, path)
}

fn invalid(var: &'static str, value: &str, message: impl ToString) -> ConfigError {
    ConfigError::Override {
        var,
        value: value.to_owned(),
        message: message.to_string(),
    }
}

/// Apply `PANCHANG_*` overrides read through `lookup`.
///
/// Blank values are ignored.
pub fn apply_overrides<F>(mut config: DailyConfig, lookup: F) -> Result<DailyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

    if let Some(v) = get(ENV_ZODIAC) {
        config.zodiac = v
            .parse::<Zodiac>()
            .map_err(|e| invalid(ENV_ZODIAC, &v, e))?;
        debug!(var = ENV_ZODIAC, value = %v, "override applied");
    }
    if let Some(v) = get(ENV_LANGUAGE) {
        config.language = v
            .parse::<Language>()
            .map_err(|e| invalid(ENV_LANGUAGE, &v, e))?;
        debug!(var = ENV_LANGUAGE, value = %v, "override applied");
    }
    if let Some(v) = get(ENV_DATA_SOURCE) {
        config.data_source = v.trim().to_owned();
        debug!(var = ENV_DATA_SOURCE, value = %v, "override applied");
    }
    if let Some(v) = get(ENV_VERIFY_TIMEOUT_MS) {
        config.verification.timeout_ms = v
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid(ENV_VERIFY_TIMEOUT_MS, &v, e))?;
        debug!(var = ENV_VERIFY_TIMEOUT_MS, value = %v, "override applied");
    }
    Ok(config)
}

/// Load configuration for a run.
///
/// With `path`, that file must exist. Without it, `panchang.toml` in the
/// working directory is used when present, else the defaults. Environment
/// overrides apply last.
pub fn load_config(path: Option<&Path>) -> Result<DailyConfig, ConfigError> {
    let base = match path {
        Some(p) => read_config_file(p)?,
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                read_config_file(&fallback)?
            } else {
                DailyConfig::default()
            }
        }
    };
    apply_overrides(base, |var| std::env::var(var).ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_toml_is_default() {
        let c = parse_config("", Path::new("inline")).unwrap();
        assert_eq!(c, DailyConfig::default());
    }

    #[test]
    fn nested_tables_parse() {
        let c = parse_config(
            r#"
zodiac = "tropical"
evaluation = "local_noon"
language = "gu"
data_source = "Drik Panchang"

[riseset]
refraction_arcmin = 35.0
altitude_correction = false

[verification]
timeout_ms = 1500
"#,
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(c.zodiac, Zodiac::Tropical);
        assert_eq!(c.language, Language::Gu);
        assert_eq!(c.data_source, "Drik Panchang");
        assert_eq!(c.riseset.refraction_arcmin, 35.0);
        assert!(!c.riseset.altitude_correction);
        assert_eq!(c.verification.timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn unknown_zodiac_is_parse_error() {
        let err = parse_config(r#"zodiac = "fagan""#, Path::new("inline")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn overrides_win() {
        let c = apply_overrides(
            DailyConfig::default(),
            env(&[
                (ENV_ZODIAC, "tropical"),
                (ENV_LANGUAGE, "hi"),
                (ENV_DATA_SOURCE, " Swiss Ephemeris "),
                (ENV_VERIFY_TIMEOUT_MS, "250"),
            ]),
        )
        .unwrap();
        assert_eq!(c.zodiac, Zodiac::Tropical);
        assert_eq!(c.language, Language::Hi);
        assert_eq!(c.data_source, "Swiss Ephemeris");
        assert_eq!(c.verification.timeout_ms, 250);
    }

    #[test]
    fn blank_override_ignored() {
        let c = apply_overrides(DailyConfig::default(), env(&[(ENV_ZODIAC, "  ")])).unwrap();
        assert_eq!(c.zodiac, Zodiac::Lahiri);
    }

    #[test]
    fn bad_timeout_rejected() {
        let err = apply_overrides(
            DailyConfig::default(),
            env(&[(ENV_VERIFY_TIMEOUT_MS, "soon")]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Override {
                var: ENV_VERIFY_TIMEOUT_MS,
                ..
            }
        ));
    }

    #[test]
    fn bad_language_rejected() {
        let err = apply_overrides(DailyConfig::default(), env(&[(ENV_LANGUAGE, "fr")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LANGUAGE));
    }
}
