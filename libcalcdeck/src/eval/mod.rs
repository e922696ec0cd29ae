//! Expression evaluator
//!
//! Turns buffer text into a number using a restricted arithmetic grammar:
//! numeric literals (scientific notation included), `+ - * / % **` and
//! parentheses. There are no identifiers, so nothing in the buffer can
//! reach anything other than arithmetic.
//!
//! Pipeline: [`normalize`] display glyphs, [`lexer::tokenize`],
//! [`parser::Parser`] evaluates, non-finite results are rejected.

pub mod format;
pub mod functions;
pub mod lexer;
pub mod parser;

pub use format::format_number;
pub use functions::UnaryFunction;

use crate::error::{CalcError, Result};

/// Map display-only glyphs to the operators the parser understands
///
/// `×` → `*`, `÷` → `/`, `−` → `-`, `^` → `**`.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            '^' => out.push_str("**"),
            other => out.push(other),
        }
    }
    out
}

/// Evaluate buffer text to a finite number
pub fn evaluate(input: &str) -> Result<f64> {
    let normalized = normalize(input);
    let tokens = lexer::tokenize(&normalized)?;
    let value = parser::Parser::new(&tokens).parse()?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite(value))
    }
}
