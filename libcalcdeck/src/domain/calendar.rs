//! Calendar-system date conversion
//!
//! Gregorian dates are formatted directly. The Islamic calendar is the
//! arithmetic (civil) variant: 30-year cycle with leap years 2, 5, 7, 10,
//! 13, 16, 18, 21, 24, 26 and 29, epoch 16 July 622 (Julian). The Bengali
//! calendar is the revised Bangladesh calendar: the year begins on
//! 14 April, Boishakh to Ashwin have 31 days, Kartik to Magh 30, Falgun 29
//! (30 when the Gregorian February is a leap month) and Choitro 30.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use super::age::parse_date;
use crate::error::{CalcError, Result, INVALID_DATE_MARKER};

/// Day number (0001-01-01 = 1) of 1 Muharram 1 AH
const ISLAMIC_EPOCH: i64 = 227_015;

const ISLAMIC_MONTHS: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

const BENGALI_MONTHS: [&str; 12] = [
    "Boishakh",
    "Joishtho",
    "Asharh",
    "Srabon",
    "Bhadro",
    "Ashwin",
    "Kartik",
    "Ogrohayon",
    "Poush",
    "Magh",
    "Falgun",
    "Choitro",
];

/// Offset between the Gregorian and Bangla year from 14 April onwards
const BENGALI_YEAR_OFFSET: i32 = 593;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarSystem {
    Gregorian,
    Islamic,
    Bengali,
}

impl CalendarSystem {
    pub const ALL: [CalendarSystem; 3] = [
        CalendarSystem::Gregorian,
        CalendarSystem::Islamic,
        CalendarSystem::Bengali,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CalendarSystem::Gregorian => "Gregorian",
            CalendarSystem::Islamic => "Islamic",
            CalendarSystem::Bengali => "Bengali",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CalendarSystem::Gregorian => CalendarSystem::Islamic,
            CalendarSystem::Islamic => CalendarSystem::Bengali,
            CalendarSystem::Bengali => CalendarSystem::Gregorian,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CalendarSystem::Gregorian => CalendarSystem::Bengali,
            CalendarSystem::Islamic => CalendarSystem::Gregorian,
            CalendarSystem::Bengali => CalendarSystem::Islamic,
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gregorian" | "gregory" => Ok(CalendarSystem::Gregorian),
            "islamic" | "hijri" => Ok(CalendarSystem::Islamic),
            "bengali" | "bangla" | "beng" => Ok(CalendarSystem::Bengali),
            other => Err(CalcError::InvalidInput(format!(
                "unknown calendar system '{}'. Valid options: gregorian, islamic, bengali",
                other
            ))),
        }
    }
}

/// A date expressed in a non-Gregorian calendar; `month` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

fn fixed_from_islamic(year: i64, month: i64, day: i64) -> i64 {
    day + 29 * (month - 1)
        + (6 * month - 1).div_euclid(11)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_EPOCH
        - 1
}

/// Arithmetic Islamic date for a Gregorian date
pub fn to_islamic(date: NaiveDate) -> CalendarDate {
    let fixed = i64::from(date.num_days_from_ce());
    let year = (30 * (fixed - ISLAMIC_EPOCH) + 10646).div_euclid(10631);
    let prior_days = fixed - fixed_from_islamic(year, 1, 1);
    let month = (11 * prior_days + 330).div_euclid(325);
    let day = fixed - fixed_from_islamic(year, month, 1) + 1;

    CalendarDate {
        year,
        month: month as u32,
        day: day as u32,
    }
}

/// Revised Bangladesh calendar date for a Gregorian date
pub fn to_bengali(date: NaiveDate) -> Result<CalendarDate> {
    let out_of_range = || CalcError::InvalidInput(format!("date {} is out of range", date));

    let mut start_year = date.year();
    let mut start = NaiveDate::from_ymd_opt(start_year, 4, 14).ok_or_else(out_of_range)?;
    if date < start {
        start_year -= 1;
        start = NaiveDate::from_ymd_opt(start_year, 4, 14).ok_or_else(out_of_range)?;
    }

    // Falgun covers the February of the following Gregorian year
    let falgun = if NaiveDate::from_ymd_opt(start_year + 1, 2, 29).is_some() {
        30
    } else {
        29
    };
    let lengths = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, falgun, 30];

    let mut offset = (date - start).num_days();
    let mut month = 0;
    while month < lengths.len() - 1 && offset >= lengths[month] {
        offset -= lengths[month];
        month += 1;
    }

    Ok(CalendarDate {
        year: i64::from(start_year - BENGALI_YEAR_OFFSET),
        month: month as u32 + 1,
        day: offset as u32 + 1,
    })
}

/// Long-form rendering of `date` in the target calendar
///
/// e.g. `Monday, October 19, 2026`, `Monday, Jumada al-Awwal 7, 1448 AH`,
/// `Monday, Kartik 3, 1433 BS`.
pub fn format_long(date: NaiveDate, system: CalendarSystem) -> Result<String> {
    let weekday = date.format("%A");

    let formatted = match system {
        CalendarSystem::Gregorian => date.format("%A, %B %-d, %Y").to_string(),
        CalendarSystem::Islamic => {
            let d = to_islamic(date);
            format!(
                "{}, {} {}, {} AH",
                weekday,
                ISLAMIC_MONTHS[(d.month - 1) as usize],
                d.day,
                d.year
            )
        }
        CalendarSystem::Bengali => {
            let d = to_bengali(date)?;
            format!(
                "{}, {} {}, {} BS",
                weekday,
                BENGALI_MONTHS[(d.month - 1) as usize],
                d.day,
                d.year
            )
        }
    };

    Ok(formatted)
}

/// Convert a typed `YYYY-MM-DD` date; unparseable input reads "Invalid Date"
pub fn convert_date_input(input: &str, system: CalendarSystem) -> String {
    match parse_date(input).and_then(|date| format_long(date, system)) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::debug!(input, error = %e, "date conversion rejected");
            INVALID_DATE_MARKER.to_string()
        }
    }
}
