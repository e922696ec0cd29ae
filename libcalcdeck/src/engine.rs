//! Calculator engine
//!
//! Owns the expression buffer, the displayed result and the history ledger,
//! and wires them together: input edits the buffer, evaluation fills the
//! result and records history, history entries can be reused.
//!
//! Failures never escape as panics. They set the displayed result to
//! [`ERROR_MARKER`] and are returned so callers can log them.

use tracing::{debug, trace};

use crate::buffer::ExpressionBuffer;
use crate::error::{ParseError, Result, ERROR_MARKER};
use crate::eval::{self, format_number, UnaryFunction};
use crate::history::{HistoryEntry, HistoryLedger};

/// Expression loaded by the "example" quick action
pub const EXAMPLE_EXPRESSION: &str = "(1+1)/2";

/// Constants offered as quick actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    /// Numeric literal inserted into the buffer
    pub fn literal(self) -> String {
        format_number(self.value())
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    buffer: ExpressionBuffer,
    result: Option<String>,
    history: HistoryLedger,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression(&self) -> &str {
        self.buffer.as_str()
    }

    /// Result currently displayed next to the expression, if any
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Append a token; the displayed result no longer matches and is cleared
    pub fn append(&mut self, token: &str) {
        self.buffer.append(token);
        self.result = None;
    }

    pub fn backspace(&mut self) {
        self.buffer.backspace();
        self.result = None;
    }

    /// Empty the buffer and the displayed result
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.result = None;
    }

    /// Evaluate the buffer
    ///
    /// An empty buffer leaves everything untouched and reports
    /// [`ParseError::Empty`]. On success the result is displayed and
    /// recorded; on failure the error marker is displayed and history is
    /// left alone.
    pub fn evaluate(&mut self) -> Result<f64> {
        if self.buffer.is_empty() {
            return Err(ParseError::Empty.into());
        }

        let expr = self.buffer.as_str().to_string();
        match eval::evaluate(&expr) {
            Ok(value) => {
                let res = format_number(value);
                debug!(expression = %expr, result = %res, "expression evaluated");
                self.history.prepend(HistoryEntry::new(expr, res.clone()));
                self.result = Some(res);
                Ok(value)
            }
            Err(e) => {
                debug!(expression = %expr, error = %e, "expression rejected");
                self.result = Some(e.marker(ERROR_MARKER).to_string());
                Err(e)
            }
        }
    }

    /// Apply a scientific function to the value of the buffer
    ///
    /// The buffer (or `0` when empty) is evaluated first. On success the
    /// buffer and the result are replaced by the new value and
    /// `name(buffer)` is recorded.
    pub fn apply_function(&mut self, function: UnaryFunction) -> Result<f64> {
        let seed = if self.buffer.is_empty() {
            "0".to_string()
        } else {
            self.buffer.as_str().to_string()
        };

        match eval::evaluate(&seed).and_then(|value| function.apply(value)) {
            Ok(value) => {
                let res = format_number(value);
                let expr = format!("{}({})", function.history_name(), seed);
                debug!(expression = %expr, result = %res, "function applied");
                self.history.prepend(HistoryEntry::new(expr, res.clone()));
                self.buffer.replace(res.clone());
                self.result = Some(res);
                Ok(value)
            }
            Err(e) => {
                debug!(function = function.history_name(), seed = %seed, error = %e, "function rejected");
                self.result = Some(e.marker(ERROR_MARKER).to_string());
                Err(e)
            }
        }
    }

    /// Copy a history entry back onto the buffer and display
    ///
    /// Does not re-evaluate. Returns `false` when `index` is out of range.
    pub fn reuse(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(entry) => {
                trace!(index, expression = %entry.expr, "history entry reused");
                self.buffer.replace(entry.expr.clone());
                self.result = Some(entry.res.clone());
                true
            }
            None => false,
        }
    }

    pub fn remove_history(&mut self, index: usize) -> Option<HistoryEntry> {
        self.history.remove_at(index)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Record an externally computed result, e.g. from a domain calculator
    pub fn record(&mut self, expr: impl Into<String>, res: impl Into<String>) {
        self.history.prepend(HistoryEntry::new(expr, res));
    }

    /// Replace buffer and result with a constant's literal
    pub fn insert_constant(&mut self, constant: Constant) {
        let literal = constant.literal();
        self.buffer.replace(literal.clone());
        self.result = Some(literal);
    }

    /// Load the sample expression without evaluating it
    pub fn load_example(&mut self) {
        self.buffer.replace(EXAMPLE_EXPRESSION);
        self.result = None;
    }

    /// Clear the buffer, the result and the whole history
    pub fn clear_all(&mut self) {
        self.clear();
        self.history.clear();
    }
}
