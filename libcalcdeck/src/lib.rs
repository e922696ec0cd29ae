//! Calcdeck - everyday calculators in one place
//!
//! This library provides the calculator engine behind the Calcdeck
//! front-ends: an expression buffer, a restricted arithmetic evaluator, a
//! capped history ledger and independent domain calculators (loan
//! instalments, length units, age, calendar systems).

pub mod buffer;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod eval;
pub mod history;
pub mod logging;

// Re-export commonly used types
pub use buffer::ExpressionBuffer;
pub use config::Config;
pub use engine::{Calculator, Constant};
pub use error::{CalcError, ParseError, Result, ERROR_MARKER, INVALID_DATE_MARKER, NAN_MARKER};
pub use eval::{evaluate, format_number, UnaryFunction};
pub use history::{HistoryEntry, HistoryLedger, HISTORY_CAPACITY};
