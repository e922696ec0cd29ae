//! Single-argument scientific functions

use std::f64::consts::PI;

use crate::error::{CalcError, Result};

/// Largest integer whose factorial is still a finite `f64`
const MAX_FACTORIAL: f64 = 170.0;

/// Scientific keypad functions applied to the current value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunction {
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    Ln,
    Log10,
    Square,
    Sqrt,
    /// Factorial of the floored value
    Factorial,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 8] = [
        UnaryFunction::Sin,
        UnaryFunction::Cos,
        UnaryFunction::Tan,
        UnaryFunction::Ln,
        UnaryFunction::Log10,
        UnaryFunction::Square,
        UnaryFunction::Sqrt,
        UnaryFunction::Factorial,
    ];

    /// Name used in history entries, e.g. `sqrt(16)`
    pub fn history_name(self) -> &'static str {
        match self {
            UnaryFunction::Sin => "sin",
            UnaryFunction::Cos => "cos",
            UnaryFunction::Tan => "tan",
            UnaryFunction::Ln => "ln",
            UnaryFunction::Log10 => "log",
            UnaryFunction::Square => "sqr",
            UnaryFunction::Sqrt => "sqrt",
            UnaryFunction::Factorial => "fact",
        }
    }

    /// Keypad caption
    pub fn label(self) -> &'static str {
        match self {
            UnaryFunction::Sin => "sin",
            UnaryFunction::Cos => "cos",
            UnaryFunction::Tan => "tan",
            UnaryFunction::Ln => "ln",
            UnaryFunction::Log10 => "log",
            UnaryFunction::Square => "x²",
            UnaryFunction::Sqrt => "√",
            UnaryFunction::Factorial => "n!",
        }
    }

    /// Apply the function; non-finite outputs are errors
    pub fn apply(self, x: f64) -> Result<f64> {
        let value = match self {
            UnaryFunction::Sin => (x * PI / 180.0).sin(),
            UnaryFunction::Cos => (x * PI / 180.0).cos(),
            UnaryFunction::Tan => (x * PI / 180.0).tan(),
            UnaryFunction::Ln => x.ln(),
            UnaryFunction::Log10 => x.log10(),
            UnaryFunction::Square => x * x,
            UnaryFunction::Sqrt => x.sqrt(),
            UnaryFunction::Factorial => factorial(x)?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFinite(value))
        }
    }
}

fn factorial(x: f64) -> Result<f64> {
    let n = x.floor();
    if n < 0.0 {
        return Err(CalcError::InvalidInput(format!(
            "factorial is undefined for {}",
            n
        )));
    }
    if n > MAX_FACTORIAL {
        return Err(CalcError::NonFinite(f64::INFINITY));
    }

    let mut acc = 1.0;
    let mut i = 2.0;
    while i <= n {
        acc *= i;
        i += 1.0;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_trig_uses_degrees() {
        assert!(close(UnaryFunction::Sin.apply(30.0).unwrap(), 0.5));
        assert!(close(UnaryFunction::Cos.apply(60.0).unwrap(), 0.5));
        assert!(close(UnaryFunction::Tan.apply(45.0).unwrap(), 1.0));
    }

    #[test]
    fn test_logarithms() {
        assert!(close(UnaryFunction::Ln.apply(std::f64::consts::E).unwrap(), 1.0));
        assert!(close(UnaryFunction::Log10.apply(1000.0).unwrap(), 3.0));
    }

    #[test]
    fn test_log_of_zero_is_an_error() {
        assert!(matches!(UnaryFunction::Ln.apply(0.0), Err(CalcError::NonFinite(_))));
    }

    #[test]
    fn test_sqrt_of_negative_is_an_error() {
        assert!(matches!(UnaryFunction::Sqrt.apply(-4.0), Err(CalcError::NonFinite(_))));
    }

    #[test]
    fn test_square_and_sqrt() {
        assert_eq!(UnaryFunction::Square.apply(-3.0).unwrap(), 9.0);
        assert_eq!(UnaryFunction::Sqrt.apply(16.0).unwrap(), 4.0);
    }

    #[test]
    fn test_factorial_floors_input() {
        assert_eq!(UnaryFunction::Factorial.apply(5.0).unwrap(), 120.0);
        assert_eq!(UnaryFunction::Factorial.apply(5.9).unwrap(), 120.0);
        assert_eq!(UnaryFunction::Factorial.apply(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_factorial_of_negative_is_an_error() {
        assert!(matches!(
            UnaryFunction::Factorial.apply(-1.0),
            Err(CalcError::InvalidInput(_))
        ));
        // -0.5 floors to -1
        assert!(UnaryFunction::Factorial.apply(-0.5).is_err());
    }

    #[test]
    fn test_factorial_overflow() {
        assert!(UnaryFunction::Factorial.apply(170.0).is_ok());
        assert!(matches!(
            UnaryFunction::Factorial.apply(171.0),
            Err(CalcError::NonFinite(_))
        ));
    }

    #[test]
    fn test_history_names_are_distinct() {
        let mut names: Vec<&str> = UnaryFunction::ALL.iter().map(|f| f.history_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), UnaryFunction::ALL.len());
    }
}
