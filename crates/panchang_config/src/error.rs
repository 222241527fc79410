//! Error types for configuration loading.

use thiserror::Error;

/// Errors from reading or interpreting a configuration file.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {path}: {message}")]
    Read { path: String, message: String },
    /// The text is not valid TOML or has the wrong shape.
    #[error("invalid config: {0}")]
    Parse(String),
    /// A recognised key with a value outside its vocabulary or range.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.message().to_string())
    }
}
