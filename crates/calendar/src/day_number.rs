//! Linear day-number newtype shared by the Hebrew and civil calendars.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::Weekday;

/// A signed day count in R.D. numbering.
///
/// Day 1 is Monday, January 1 of year 1 in the proleptic Gregorian calendar.
/// Both calendars convert through this coordinate, so two dates are the same
/// calendar day exactly when their day numbers are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayNumber(i64);

impl DayNumber {
    /// Creates a day number from its raw value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day count.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the weekday of this day.
    pub fn weekday(self) -> Weekday {
        match self.0.rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Returns the latest day on or before `self` that falls on `weekday`.
    pub fn on_or_before(self, weekday: Weekday) -> Self {
        let target = i64::from(weekday.num_days_from_sunday());
        Self(self.0 - (self.0 - target).rem_euclid(7))
    }

    /// Returns the earliest day on or after `self` that falls on `weekday`.
    pub fn on_or_after(self, weekday: Weekday) -> Self {
        (self + 6).on_or_before(weekday)
    }

    /// Returns the following day.
    pub fn next(self) -> Self {
        self + 1
    }

    /// Returns the preceding day.
    pub fn prev(self) -> Self {
        self - 1
    }
}

impl From<i64> for DayNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Add<i64> for DayNumber {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

impl Sub<i64> for DayNumber {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        Self(self.0 - days)
    }
}

impl Sub for DayNumber {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        self.0 - other.0
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
