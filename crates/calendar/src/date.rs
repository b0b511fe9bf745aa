//! Validated Hebrew date with its cached day number.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, Weekday};

use crate::day_number::DayNumber;
use crate::error::CalendarError;
use crate::gregorian;
use crate::hebrew::{
    day_number_to_hebrew, days_in_month, hebrew_to_day_number, is_leap_year,
};
use crate::month::Month;

/// A date in the Hebrew calendar.
///
/// Every constructor validates the day against the month's length, so a
/// `HebrewDate` always names a real day. Equality, hashing and ordering go
/// through the day number.
#[derive(Debug, Clone, Copy)]
pub struct HebrewDate {
    year: i32,
    month: Month,
    day: u8,
    day_number: DayNumber,
}

impl PartialEq for HebrewDate {
    fn eq(&self, other: &Self) -> bool {
        self.day_number == other.day_number
    }
}

impl Eq for HebrewDate {}

impl Hash for HebrewDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.day_number.hash(state);
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day_number.cmp(&other.day_number)
    }
}

impl HebrewDate {
    /// Creates a date from day, month and year.
    ///
    /// Adar II in a common year is taken as the single Adar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is out of range or the day does
    /// not exist in the month.
    pub fn new(day: u8, month: Month, year: i32) -> Result<Self, CalendarError> {
        let day_number = hebrew_to_day_number(year, month, day)?;
        Ok(Self {
            year,
            month: month.in_year(year),
            day,
            day_number,
        })
    }

    /// Creates a date from day, month name and year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month name cannot be resolved for
    /// `year` or the resulting date is invalid.
    pub fn from_name(day: u8, month: &str, year: i32) -> Result<Self, CalendarError> {
        Self::new(day, Month::resolve_name(month, year)?, year)
    }

    /// Creates the date that falls on `day_number`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNumberOutOfRange`] outside the supported
    /// window.
    pub fn from_day_number(day_number: DayNumber) -> Result<Self, CalendarError> {
        let (year, month, day) = day_number_to_hebrew(day_number)?;
        Ok(Self {
            year,
            month,
            day,
            day_number,
        })
    }

    /// Creates the date that falls on the civil date `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNumberOutOfRange`] if the civil date lies
    /// outside the supported window.
    pub fn from_civil(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::from_day_number(gregorian::to_day_number(date))
    }

    /// Creates a date from loosely typed parts, as given on a command line.
    ///
    /// One part is read as a day number or an ISO civil date
    /// (`2010-12-07`). Three parts are read as day, month (ordinal or name)
    /// and year. A month ordinal must exist in the year: 13 is accepted only
    /// in a leap year (see [`Month::from_ordinal_in_year`]).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidArgument`] for any other number of
    /// parts or for a part that cannot be parsed, and the usual range and
    /// name errors otherwise.
    pub fn from_parts(parts: &[&str]) -> Result<Self, CalendarError> {
        match parts {
            [single] => {
                let single = single.trim();
                if let Ok(raw) = single.parse::<i64>() {
                    return Self::from_day_number(DayNumber::new(raw));
                }
                match NaiveDate::parse_from_str(single, "%Y-%m-%d") {
                    Ok(date) => Self::from_civil(date),
                    Err(_) => Err(bad_argument(single)),
                }
            }
            [day, month, year] => {
                let day: u8 = day.trim().parse().map_err(|_| bad_argument(day))?;
                let year: i32 = year.trim().parse().map_err(|_| bad_argument(year))?;
                let month = match month.trim().parse::<u8>() {
                    Ok(ordinal) => Month::from_ordinal_in_year(ordinal, year)?,
                    Err(_) => Month::resolve_name(month, year)?,
                };
                Self::new(day, month, year)
            }
            _ => Err(CalendarError::InvalidArgument {
                reason: format!("date requires 1 or 3 arguments, got {}", parts.len()),
            }),
        }
    }

    /// Returns the Hebrew year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, normalised to the months of its year.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the day of the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month's name in this date's year.
    pub fn month_name(self) -> &'static str {
        self.month.name(self.year)
    }

    /// Returns `true` if this date's year has thirteen months.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the length of this date's month.
    pub fn days_in_month(self) -> u8 {
        days_in_month(self.month, self.year)
    }

    /// Returns the day number, which identifies the date.
    pub fn day_number(self) -> DayNumber {
        self.day_number
    }

    /// Returns the civil date of this day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::CivilDateOutOfRange`] if `chrono` cannot
    /// represent the day.
    pub fn to_civil(self) -> Result<NaiveDate, CalendarError> {
        gregorian::from_day_number(self.day_number)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.day_number.weekday()
    }

    /// Returns `true` if both dates fall on the same day.
    pub fn is_same_date(self, other: HebrewDate) -> bool {
        self.day_number == other.day_number
    }

    /// Returns the following day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNumberOutOfRange`] after the last
    /// supported day.
    pub fn next(self) -> Result<Self, CalendarError> {
        if self.day < self.days_in_month() {
            return Ok(self.shift_within_month(1));
        }
        Self::from_day_number(self.day_number.next())
    }

    /// Returns the preceding day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNumberOutOfRange`] before the first
    /// supported day.
    pub fn prev(self) -> Result<Self, CalendarError> {
        if self.day > 1 {
            return Ok(self.shift_within_month(-1));
        }
        Self::from_day_number(self.day_number.prev())
    }

    /// Returns the latest date on or before this one that falls on `weekday`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNumberOutOfRange`] if that day lies before
    /// the supported window.
    pub fn on_or_before(self, weekday: Weekday) -> Result<Self, CalendarError> {
        Self::from_day_number(self.day_number.on_or_before(weekday))
    }

    /// Returns the earliest date on or after this one that falls on `weekday`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNumberOutOfRange`] if that day lies after
    /// the supported window.
    pub fn on_or_after(self, weekday: Weekday) -> Result<Self, CalendarError> {
        Self::from_day_number(self.day_number.on_or_after(weekday))
    }

    fn shift_within_month(self, days: i8) -> Self {
        Self {
            day: self.day.wrapping_add_signed(days),
            day_number: self.day_number + i64::from(days),
            ..self
        }
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

fn bad_argument(part: &str) -> CalendarError {
    CalendarError::InvalidArgument {
        reason: part.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = HebrewDate::new(29, Month::Cheshvan, 5769).unwrap();
        assert_eq!(date.year(), 5769);
        assert_eq!(date.month(), Month::Cheshvan);
        assert_eq!(date.day(), 29);
        assert_eq!(date.day_number(), DayNumber::new(733373));
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            HebrewDate::new(30, Month::Tevet, 5769).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: "Tevet",
                year: 5769,
                max_day: 29,
            }
        );
    }

    #[test]
    fn adar_ii_normalised_in_common_year() {
        let date = HebrewDate::new(14, Month::AdarII, 5780).unwrap();
        assert_eq!(date.month(), Month::AdarI);
        assert_eq!(date.month_name(), "Adar");
    }

    #[test]
    fn from_name_resolves() {
        let date = HebrewDate::from_name(15, "Cheshvan", 5769).unwrap();
        assert_eq!(date.day_number(), DayNumber::new(733359));
        assert!(HebrewDate::from_name(14, "Adar", 5779).is_err());
        assert!(HebrewDate::from_name(14, "Adar II", 5779).is_ok());
    }

    #[test]
    fn from_civil_and_back() {
        let civil = NaiveDate::from_ymd_opt(1751, 1, 1).unwrap();
        let date = HebrewDate::from_civil(civil).unwrap();
        assert_eq!(date.to_string(), "4 Tevet 5511");
        assert_eq!(date.day_number(), DayNumber::new(639175));
        assert_eq!(date.to_civil().unwrap(), civil);
    }

    #[test]
    fn from_parts_single_day_number() {
        let date = HebrewDate::from_parts(&["733359"]).unwrap();
        assert_eq!(date.to_string(), "15 Cheshvan 5769");
    }

    #[test]
    fn from_parts_single_iso() {
        let date = HebrewDate::from_parts(&["2008-11-27"]).unwrap();
        assert_eq!(date.to_string(), "29 Cheshvan 5769");
    }

    #[test]
    fn from_parts_three() {
        let by_name = HebrewDate::from_parts(&["4", "Tamuz", "5536"]).unwrap();
        let by_number = HebrewDate::from_parts(&["4", "4", "5536"]).unwrap();
        assert_eq!(by_name, by_number);
        assert_eq!(by_name.day_number(), DayNumber::new(648478));
    }

    #[test]
    fn from_parts_bad_single() {
        let err = HebrewDate::from_parts(&["17 Cheshvan 5759"]).unwrap_err();
        assert_eq!(err.to_string(), "bad argument: 17 Cheshvan 5759");
    }

    #[test]
    fn from_parts_wrong_arity() {
        let err = HebrewDate::from_parts(&["17", "Cheshvan"]).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidArgument {
                reason: "date requires 1 or 3 arguments, got 2".to_string()
            }
        );
        assert!(HebrewDate::from_parts(&[]).is_err());
    }

    #[test]
    fn from_parts_bad_month_ordinal() {
        assert_eq!(
            HebrewDate::from_parts(&["1", "14", "5780"]).unwrap_err(),
            CalendarError::InvalidMonth {
                month: 14,
                year: 5780
            }
        );
    }

    #[test]
    fn from_parts_ordinal_13_needs_leap_year() {
        assert_eq!(
            HebrewDate::from_parts(&["1", "13", "5780"]).unwrap_err(),
            CalendarError::InvalidMonth {
                month: 13,
                year: 5780
            }
        );
        let leap = HebrewDate::from_parts(&["1", "13", "5779"]).unwrap();
        assert_eq!(leap.month(), Month::AdarII);
        assert_eq!(leap.to_string(), "1 Adar II 5779");
    }

    #[test]
    fn next_crosses_month_and_year() {
        let last = HebrewDate::new(29, Month::Elul, 5770).unwrap();
        let next = last.next().unwrap();
        assert_eq!(next, HebrewDate::new(1, Month::Tishrei, 5771).unwrap());
        assert_eq!(next.prev().unwrap(), last);

        let adar = HebrewDate::new(29, Month::AdarI, 5780).unwrap();
        assert_eq!(adar.next().unwrap().month(), Month::Nisan);
    }

    #[test]
    fn weekday_helpers() {
        // 2010-12-07 was a Tuesday.
        let date = HebrewDate::from_day_number(DayNumber::new(734113)).unwrap();
        assert_eq!(date.weekday(), Weekday::Tue);
        let sat = date.on_or_before(Weekday::Sat).unwrap();
        assert_eq!(sat.day_number(), DayNumber::new(734110));
        let sat = date.on_or_after(Weekday::Sat).unwrap();
        assert_eq!(sat.day_number(), DayNumber::new(734117));
    }

    #[test]
    fn equality_by_day_number() {
        let a = HebrewDate::new(1, Month::AdarII, 5780).unwrap();
        let b = HebrewDate::new(1, Month::AdarI, 5780).unwrap();
        assert_eq!(a, b);
        assert!(a.is_same_date(b));
        assert!(a < a.next().unwrap());
    }

    #[test]
    fn display() {
        let date = HebrewDate::new(3, Month::Tishrei, 1003).unwrap();
        assert_eq!(date.to_string(), "3 Tishrei 1003");
        assert_eq!(date.day_number(), DayNumber::new(-1007451));
    }
}
