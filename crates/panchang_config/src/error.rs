//! Configuration loading errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// An environment override holds an unusable value.
    #[error("invalid value '{value}' for {var}: {message}")]
    Override {
        var: &'static str,
        value: String,
        message: String,
    },
}
