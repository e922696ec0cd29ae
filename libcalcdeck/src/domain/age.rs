//! Age in whole years, months and days

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{CalcError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Parse a `YYYY-MM-DD` date as typed into a form field
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| CalcError::InvalidInput(format!("'{}' is not a valid date: {}", input.trim(), e)))
}

/// Age on `today` of someone born on `birth`
///
/// Components are subtracted field by field. A negative day count borrows
/// the length of the month before `today`'s month (and of earlier months
/// if one borrow is not enough, e.g. born on the 31st); a negative month
/// count borrows 12 from the years.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> Result<AgeResult> {
    if birth > today {
        return Err(CalcError::InvalidInput(format!(
            "birth date {} is after {}",
            birth, today
        )));
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    let mut borrowed = 0;
    while days < 0 {
        borrowed += 1;
        days += days_in_month_before(today, borrowed)?;
        months -= 1;
    }

    while months < 0 {
        months += 12;
        years -= 1;
    }

    Ok(AgeResult {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

/// Length of the month `back` months before `date`'s month
fn days_in_month_before(date: NaiveDate, back: u32) -> Result<i32> {
    let first = date
        .with_day(1)
        .and_then(|d| d.checked_sub_months(Months::new(back)))
        .ok_or_else(|| CalcError::InvalidInput(format!("date {} is out of range", date)))?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| CalcError::InvalidInput(format!("date {} is out of range", date)))?;
    Ok((next - first).num_days() as i32)
}
