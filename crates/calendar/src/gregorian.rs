//! Civil (proleptic Gregorian) calendar conversions.
//!
//! `chrono::NaiveDate::num_days_from_ce` counts 0001-01-01 as day 1, which is
//! exactly R.D. numbering, so the conversion is a direct mapping. Years use
//! astronomical numbering (year 0 exists, 1 BCE = 0).

use chrono::{Datelike, NaiveDate};

use crate::day_number::DayNumber;
use crate::error::CalendarError;

/// Converts a civil date to its day number.
pub fn to_day_number(date: NaiveDate) -> DayNumber {
    DayNumber::new(i64::from(date.num_days_from_ce()))
}

/// Converts a day number to its civil date.
///
/// # Errors
///
/// Returns [`CalendarError::CivilDateOutOfRange`] if the day number lies
/// outside the span `chrono` can represent.
pub fn from_day_number(day_number: DayNumber) -> Result<NaiveDate, CalendarError> {
    i32::try_from(day_number.get())
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(CalendarError::CivilDateOutOfRange {
            day_number: day_number.get(),
        })
}

/// Converts a civil `(year, month, day)` triple to its day number.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidArgument`] if the triple is not a valid
/// civil date.
pub fn ymd_to_day_number(year: i32, month: u32, day: u32) -> Result<DayNumber, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(to_day_number)
        .ok_or_else(|| CalendarError::InvalidArgument {
            reason: format!("invalid civil date {year}-{month:02}-{day:02}"),
        })
}
