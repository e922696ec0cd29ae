//! Configuration management for Calcdeck
//!
//! Everything is optional: a missing file means defaults, and every section
//! and field falls back to its default when omitted.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{EmiInputs, LengthUnit};
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiSection,
    pub emi: EmiInputs,
    pub converter: ConverterDefaults,
    pub history: HistorySection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub colors: bool,
    pub unicode: bool,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConverterDefaults {
    pub value: f64,
    pub from: LengthUnit,
    pub to: LengthUnit,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HistorySection {
    /// Also record loan, conversion, age and date results in history
    pub record_domain_results: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: String,
    pub level: String,
    pub file: Option<String>,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            colors: true,
            unicode: true,
            tick_rate_ms: 250,
        }
    }
}

impl Default for ConverterDefaults {
    fn default() -> Self {
        Self {
            value: 1.0,
            from: LengthUnit::M,
            to: LengthUnit::Cm,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults are returned instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms", "must be greater than zero"));
        }
        if self.emi.tenure == 0 {
            return Err(invalid("emi.tenure", "must be at least one month"));
        }
        if !self.emi.principal.is_finite() || self.emi.principal < 0.0 {
            return Err(invalid("emi.principal", "must be a non-negative number"));
        }
        if !self.emi.rate.is_finite() || self.emi.rate < 0.0 {
            return Err(invalid("emi.rate", "must be a non-negative number"));
        }
        if !self.converter.value.is_finite() {
            return Err(invalid("converter.value", "must be a finite number"));
        }
        Ok(())
    }

    /// Log file path with `~` expanded, if file logging is configured
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

fn invalid(field: &str, reason: &str) -> crate::error::CalcError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Resolve the configuration file path, `$XDG_CONFIG_HOME/calcdeck/config.toml` by default
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CALCDECK_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::InvalidValue {
        field: "config directory".to_string(),
        reason: "could not be determined".to_string(),
    })?;

    Ok(config_dir.join("calcdeck").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.ui.colors);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.emi, EmiInputs::default());
        assert_eq!(config.converter.from, LengthUnit::M);
        assert_eq!(config.converter.to, LengthUnit::Cm);
        assert!(!config.history.record_domain_results);
        assert_eq!(config.logging.level, "info");
        assert!(config.log_file().is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml(
            r#"
            [emi]
            rate = 9.25

            [converter]
            from = "ft"
            to = "in"
            "#,
        )
        .unwrap();

        assert_eq!(config.emi.rate, 9.25);
        assert_eq!(config.emi.principal, 50000.0);
        assert_eq!(config.converter.from, LengthUnit::Ft);
        assert_eq!(config.converter.to, LengthUnit::In);
    }

    #[test]
    fn test_unknown_unit_is_parse_error() {
        let result = Config::from_toml("[converter]\nfrom = \"yard\"\n");
        assert!(matches!(
            result,
            Err(crate::error::CalcError::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn test_zero_tick_rate_is_rejected() {
        let result = Config::from_toml("[ui]\ntick_rate_ms = 0\n");
        assert!(matches!(
            result,
            Err(crate::error::CalcError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_zero_tenure_is_rejected() {
        assert!(Config::from_toml("[emi]\ntenure = 0\n").is_err());
    }
}
