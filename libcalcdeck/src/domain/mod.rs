//! Domain calculators
//!
//! Independent pure functions: loan instalments, length conversion, age in
//! years/months/days and calendar-system date formatting. None of them touch
//! the expression buffer or the history ledger.

pub mod age;
pub mod calendar;
pub mod emi;
pub mod units;

pub use age::{calculate_age, parse_date, AgeResult};
pub use calendar::{convert_date_input, format_long, CalendarSystem};
pub use emi::{calculate_emi, EmiInputs, EmiResult};
pub use units::{convert_length, convert_length_input, ConversionResult, LengthUnit};

/// Round half away from zero to `places` decimals
///
/// Values too large to carry that many decimals are returned unchanged.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= 1e17 {
        return value;
    }
    scaled.round() / scale
}
