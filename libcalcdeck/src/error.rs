//! Error types for Calcdeck

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Marker shown in place of a result when an expression cannot be evaluated.
pub const ERROR_MARKER: &str = "Error";

/// Marker shown when a numeric field holds something that is not a number.
pub const NAN_MARKER: &str = "NaN";

/// Marker shown when a date field cannot be parsed.
pub const INVALID_DATE_MARKER: &str = "Invalid Date";

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Malformed expression: {0}")]
    Malformed(#[from] ParseError),

    #[error("Result is not a finite number: {0}")]
    NonFinite(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CalcError {
    /// Short marker to display instead of a result
    ///
    /// Expression failures always read as [`ERROR_MARKER`]; invalid domain
    /// input uses the marker chosen by the calculator that rejected it.
    pub fn marker(&self, invalid_input_marker: &'static str) -> &'static str {
        match self {
            CalcError::InvalidInput(_) => invalid_input_marker,
            CalcError::Malformed(_) | CalcError::NonFinite(_) | CalcError::Config(_) => ERROR_MARKER,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("character '{ch}' is not allowed at position {position}")]
    ForbiddenCharacter { ch: char, position: usize },

    #[error("unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("malformed number '{text}' at position {position}")]
    MalformedNumber { text: String, position: usize },

    #[error("parenthesis opened at position {position} is never closed")]
    UnclosedParen { position: usize },

    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_for_expression_errors() {
        let error = CalcError::Malformed(ParseError::UnexpectedEnd);
        assert_eq!(error.marker(NAN_MARKER), ERROR_MARKER);

        let error = CalcError::NonFinite(f64::INFINITY);
        assert_eq!(error.marker(NAN_MARKER), ERROR_MARKER);
    }

    #[test]
    fn test_marker_for_invalid_input_uses_caller_marker() {
        let error = CalcError::InvalidInput("not a date".to_string());
        assert_eq!(error.marker(INVALID_DATE_MARKER), "Invalid Date");
        assert_eq!(error.marker(NAN_MARKER), "NaN");
    }

    #[test]
    fn test_error_message_formatting_forbidden_character() {
        let error = CalcError::from(ParseError::ForbiddenCharacter { ch: 'x', position: 3 });
        assert_eq!(
            error.to_string(),
            "Malformed expression: character 'x' is not allowed at position 3"
        );
    }

    #[test]
    fn test_error_message_formatting_config() {
        let error = CalcError::from(ConfigError::InvalidValue {
            field: "ui.tick_rate_ms".to_string(),
            reason: "must be greater than zero".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid value for ui.tick_rate_ms: must be greater than zero"
        );
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: CalcError = ConfigError::from(io).into();

        match error {
            CalcError::Config(ConfigError::Io(_)) => {}
            _ => panic!("Expected CalcError::Config(ConfigError::Io)"),
        }
    }
}
