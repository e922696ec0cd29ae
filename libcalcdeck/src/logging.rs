//! Centralized logging configuration
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Writing to a log file instead of stderr
//!
//! # Examples
//!
//! ```no_run
//! use libcalcdeck::logging::{LoggingConfig, LogFormat};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), false)
//!     .with_file("/tmp/calcdeck.log".into());
//! config.init().expect("logging already initialized");
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file = Some(path);
        self
    }

    /// Build from the `[logging]` section, letting environment variables win
    ///
    /// Respects `CALCDECK_LOG_FORMAT`, `CALCDECK_LOG_LEVEL` and
    /// `CALCDECK_LOG_FILE`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let format_text =
            std::env::var("CALCDECK_LOG_FORMAT").unwrap_or_else(|_| config.logging.format.clone());
        let format = format_text.parse::<LogFormat>().map_err(|reason| ConfigError::InvalidValue {
            field: "logging.format".to_string(),
            reason,
        })?;

        let level =
            std::env::var("CALCDECK_LOG_LEVEL").unwrap_or_else(|_| config.logging.level.clone());

        let file = match std::env::var("CALCDECK_LOG_FILE") {
            Ok(path) => Some(PathBuf::from(shellexpand::tilde(&path).to_string())),
            Err(_) => config.log_file(),
        };

        Ok(Self {
            format,
            level,
            verbose: false,
            file,
        })
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program; a second
    /// call returns an error instead of panicking.
    pub fn init(&self) -> Result<()> {
        // Determine the filter based on verbose flag and level
        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };

        let (writer, ansi) = match &self.file {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(ConfigError::Io)?;
                (BoxMakeWriter::new(Mutex::new(file)), false)
            }
            None => (BoxMakeWriter::new(std::io::stderr), true),
        };

        let result = match self.format {
            LogFormat::Json => {
                // One JSON object per line
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .try_init()
            }
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false)
                .with_level(true)
                .try_init(),
        };

        result.map_err(|e| ConfigError::Logging(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "invalid".parse::<LogFormat>();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .contains("Invalid log format: 'invalid'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    fn test_with_file() {
        let config = LoggingConfig::new(LogFormat::Text, "warn".to_string(), false)
            .with_file(PathBuf::from("/tmp/calcdeck.log"));
        assert_eq!(config.file, Some(PathBuf::from("/tmp/calcdeck.log")));
        assert_eq!(config.level, "warn");
    }
}
