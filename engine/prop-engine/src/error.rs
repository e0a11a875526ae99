//! Error types for the prop engine
//!
//! The analytical operations never fail; these cover record conversion and
//! configuration loading only.

use crate::stats::StatKey;
use thiserror::Error;

/// Errors raised while converting raw feed data into a `GameStatRecord`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Unknown statistic key: {0}")]
    UnknownStat(String),

    #[error("Invalid value {value} for {stat}: must be finite and non-negative")]
    InvalidValue { stat: StatKey, value: f64 },
}

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
