//! Configuration loading for the panchang core.
//!
//! This crate provides:
//! - [`load_config`]: TOML file, then `PANCHANG_*` environment overrides
//! - [`apply_overrides`] with an injectable variable lookup

pub mod error;
pub mod loader;

pub use error::ConfigError;
pub use loader::{
    DEFAULT_CONFIG_FILE, ENV_DATA_SOURCE, ENV_LANGUAGE, ENV_VERIFY_TIMEOUT_MS, ENV_ZODIAC,
    apply_overrides, load_config, parse_config, read_config_file,
};
