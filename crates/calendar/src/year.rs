//! Whole-year attributes of the Hebrew calendar.

use std::fmt;

use crate::day_number::DayNumber;
use crate::error::CalendarError;
use crate::hebrew::{check_year, days_in_year, is_leap_year, months_in_year, new_year_day};

/// How Cheshvan and Kislev are sized in a year.
///
/// Together with leap status this fixes the year length: deficient years
/// have 353 or 383 days, regular 354 or 384, complete 355 or 385.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// Cheshvan and Kislev both have 29 days.
    Deficient,
    /// Cheshvan has 29 days and Kislev 30.
    Regular,
    /// Cheshvan and Kislev both have 30 days.
    Complete,
}

impl fmt::Display for YearKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            YearKind::Deficient => "deficient",
            YearKind::Regular => "regular",
            YearKind::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// Returns the kind of `year`.
pub fn year_kind(year: i32) -> YearKind {
    match days_in_year(year) % 10 {
        3 => YearKind::Deficient,
        5 => YearKind::Complete,
        _ => YearKind::Regular,
    }
}

/// Summary of one Hebrew year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearInfo {
    /// The Hebrew year.
    pub year: i32,
    /// Whether the year has thirteen months.
    pub is_leap: bool,
    /// Number of days (353..=355 or 383..=385).
    pub length: u16,
    /// Length class of the year.
    pub kind: YearKind,
    /// Number of months (12 or 13).
    pub months: u8,
    /// Day number of 1 Tishrei.
    pub new_year: DayNumber,
}

impl YearInfo {
    /// Computes the attributes of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for an unsupported year.
    pub fn new(year: i32) -> Result<Self, CalendarError> {
        check_year(year)?;
        Ok(Self {
            year,
            is_leap: is_leap_year(year),
            length: days_in_year(year),
            kind: year_kind(year),
            months: months_in_year(year),
            new_year: new_year_day(year),
        })
    }
}
