//! Length unit conversion

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::round_to;
use crate::error::{CalcError, NAN_MARKER};
use crate::eval::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Km,
    M,
    Cm,
    Mm,
    In,
    Ft,
}

impl LengthUnit {
    /// Selector order
    pub const ALL: [LengthUnit; 6] = [
        LengthUnit::M,
        LengthUnit::Cm,
        LengthUnit::Mm,
        LengthUnit::Km,
        LengthUnit::In,
        LengthUnit::Ft,
    ];

    /// Size of one unit in meters
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Km => 1000.0,
            LengthUnit::M => 1.0,
            LengthUnit::Cm => 0.01,
            LengthUnit::Mm => 0.001,
            LengthUnit::In => 0.0254,
            LengthUnit::Ft => 0.3048,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Km => "km",
            LengthUnit::M => "m",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Ft => "ft",
        }
    }

    /// Next unit in selector order, wrapping around
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|u| *u == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous unit in selector order, wrapping around
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|u| *u == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" => Ok(LengthUnit::Km),
            "m" => Ok(LengthUnit::M),
            "cm" => Ok(LengthUnit::Cm),
            "mm" => Ok(LengthUnit::Mm),
            "in" => Ok(LengthUnit::In),
            "ft" => Ok(LengthUnit::Ft),
            other => Err(CalcError::InvalidInput(format!(
                "unknown length unit '{}'. Valid options: km, m, cm, mm, in, ft",
                other
            ))),
        }
    }
}

/// Outcome of converting user-typed text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionResult {
    Value(f64),
    NotANumber,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionResult::Value(v) => f.write_str(&format_number(*v)),
            ConversionResult::NotANumber => f.write_str(NAN_MARKER),
        }
    }
}

/// Convert through meters and round to 6 decimals
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let meters = value * from.factor();
    round_to(meters / to.factor(), 6)
}

/// Convert a typed value; anything that is not a finite number is NaN
pub fn convert_length_input(input: &str, from: LengthUnit, to: LengthUnit) -> ConversionResult {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => ConversionResult::Value(convert_length(value, from, to)),
        _ => {
            tracing::debug!(input, "conversion input is not a number");
            ConversionResult::NotANumber
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_km_to_m() {
        assert_eq!(convert_length(1.0, LengthUnit::Km, LengthUnit::M), 1000.0);
    }

    #[test]
    fn test_inches_to_cm_is_rounded() {
        assert_eq!(convert_length(12.0, LengthUnit::In, LengthUnit::Cm), 30.48);
    }

    #[test]
    fn test_feet_to_inches() {
        assert_eq!(convert_length(5.0, LengthUnit::Ft, LengthUnit::In), 60.0);
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(convert_length(3.25, LengthUnit::Mm, LengthUnit::Mm), 3.25);
    }

    #[test]
    fn test_non_numeric_input_is_nan() {
        assert_eq!(
            convert_length_input("abc", LengthUnit::M, LengthUnit::Cm),
            ConversionResult::NotANumber
        );
        assert_eq!(
            convert_length_input("", LengthUnit::M, LengthUnit::Cm),
            ConversionResult::NotANumber
        );
        assert_eq!(
            convert_length_input("inf", LengthUnit::M, LengthUnit::Cm),
            ConversionResult::NotANumber
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(
            convert_length_input(" 2 ", LengthUnit::M, LengthUnit::Cm),
            ConversionResult::Value(200.0)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ConversionResult::Value(30.48).to_string(), "30.48");
        assert_eq!(ConversionResult::NotANumber.to_string(), "NaN");
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("KM".parse::<LengthUnit>().unwrap(), LengthUnit::Km);
        assert_eq!("ft".parse::<LengthUnit>().unwrap(), LengthUnit::Ft);
        assert!("yard".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_unit_cycling_wraps() {
        assert_eq!(LengthUnit::M.next(), LengthUnit::Cm);
        assert_eq!(LengthUnit::Ft.next(), LengthUnit::M);
        assert_eq!(LengthUnit::M.prev(), LengthUnit::Ft);
    }
}
