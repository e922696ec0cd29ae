//! Error types for calcdeck-tui
//!
//! Wraps engine errors and terminal/IO errors for unified error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Engine or configuration error
    #[error("Calculator error: {0}")]
    Engine(#[from] libcalcdeck::CalcError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_converts() {
        let err: TuiError = libcalcdeck::CalcError::InvalidInput("bad".to_string()).into();
        assert!(matches!(err, TuiError::Engine(_)));
        assert!(err.to_string().starts_with("Calculator error"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: TuiError = std::io::Error::new(std::io::ErrorKind::Other, "gone").into();
        assert_eq!(err.to_string(), "Terminal error: gone");
    }
}
