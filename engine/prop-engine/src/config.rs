use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the prop engine and the tools that drive it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PropConfig {
    /// Analysis parameters
    pub analysis: AnalysisConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Only the last N games feed threshold probabilities (None = whole history)
    pub recent_window: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, pretty, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string() }
    }
}

const LOG_FORMATS: [&str; 3] = ["compact", "pretty", "json"];

impl PropConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PropConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Override fields from `PROP_RECENT_WINDOW`, `PROP_LOG_LEVEL` and `PROP_LOG_FORMAT`
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(window) = lookup("PROP_RECENT_WINDOW") {
            self.analysis.recent_window = match window.trim() {
                "" | "all" => None,
                value => Some(value.parse().map_err(|_| ConfigError::InvalidEnv {
                    key: "PROP_RECENT_WINDOW".to_string(),
                    value: window.clone(),
                })?),
            };
        }

        if let Some(level) = lookup("PROP_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("PROP_LOG_FORMAT") {
            self.logging.format = format;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.recent_window == Some(0) {
            return Err(ConfigError::Invalid("analysis.recent_window must be at least 1".into()));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.format must be one of {:?}, got '{}'",
                LOG_FORMATS, self.logging.format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PropConfig::default();
        assert_eq!(config.analysis.recent_window, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "compact");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = PropConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("PROP_RECENT_WINDOW", "8"),
                ("PROP_LOG_LEVEL", "debug"),
                ("PROP_LOG_FORMAT", "json"),
            ]))
            .unwrap();
        assert_eq!(config.analysis.recent_window, Some(8));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");

        config.apply_overrides(lookup_from(&[("PROP_RECENT_WINDOW", "all")])).unwrap();
        assert_eq!(config.analysis.recent_window, None);
    }

    #[test]
    fn test_bad_env_values() {
        let mut config = PropConfig::default();
        let err = config.apply_overrides(lookup_from(&[("PROP_RECENT_WINDOW", "ten")]));
        assert!(matches!(err, Err(ConfigError::InvalidEnv { .. })));

        let mut config = PropConfig::default();
        let err = config.apply_overrides(lookup_from(&[("PROP_RECENT_WINDOW", "0")]));
        assert!(matches!(err, Err(ConfigError::Invalid(_))));

        let mut config = PropConfig::default();
        let err = config.apply_overrides(lookup_from(&[("PROP_LOG_FORMAT", "xml")]));
        assert!(matches!(err, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.toml");

        let mut config = PropConfig::default();
        config.analysis.recent_window = Some(6);
        config.logging.format = "pretty".to_string();
        config.to_file(&path).unwrap();

        assert_eq!(PropConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.toml");
        std::fs::write(&path, "[analysis]\nrecent_window = 4\n").unwrap();

        let config = PropConfig::from_file(&path).unwrap();
        assert_eq!(config.analysis.recent_window, Some(4));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = PropConfig::from_file("/nonexistent/prop.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
