//! Molad (mean lunar conjunction) computation in exact fixed point.
//!
//! Lunar time is counted in chalakim: 1080 to the hour, 18 to the minute.
//! The reckoning day of the calendar starts at 18:00 the previous evening;
//! a [`Molad`] reports clock time, so the epoch molad is shifted back by six
//! hours before the day boundary is taken.

use std::fmt;

use chrono::Weekday;

use crate::day_number::DayNumber;
use crate::error::CalendarError;
use crate::hebrew::{HEBREW_EPOCH, check_year, months_before_year};
use crate::month::{Month, months_of_year};

/// Chalakim in one hour.
pub const PARTS_PER_HOUR: i64 = 1080;

/// Chalakim in one day.
pub const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;

/// Chalakim in one minute.
pub const PARTS_PER_MINUTE: i64 = 18;

/// Length of the mean synodic month: 29 days, 12 hours, 793 chalakim.
pub const MEAN_MONTH_PARTS: i64 = 29 * PARTS_PER_DAY + 12 * PARTS_PER_HOUR + 793;

/// Molad of Tishrei AM 1 (BaHaRaD: day 2, 5 hours, 204 chalakim) measured
/// from the start of reckoning day 1.
pub const EPOCH_MOLAD_PARTS: i64 = 5 * PARTS_PER_HOUR + 204;

/// Offset between the reckoning day (from 18:00) and the clock day.
const CLOCK_SHIFT_PARTS: i64 = 6 * PARTS_PER_HOUR;

/// A computed molad: the day it falls on and the clock time within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Molad {
    day: DayNumber,
    hour: u8,
    chalakim: u16,
}

impl Molad {
    /// Computes the molad of the month that begins `months` lunar months
    /// after the epoch molad.
    pub fn from_months_elapsed(months: i64) -> Self {
        let parts = months * MEAN_MONTH_PARTS + EPOCH_MOLAD_PARTS - CLOCK_SHIFT_PARTS;
        let day = 1 + parts.div_euclid(PARTS_PER_DAY);
        let within_day = parts.rem_euclid(PARTS_PER_DAY);
        Self {
            day: DayNumber::new(HEBREW_EPOCH + day),
            hour: (within_day / PARTS_PER_HOUR) as u8,
            chalakim: (within_day % PARTS_PER_HOUR) as u16,
        }
    }

    /// Computes the molad of `month` in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for an unsupported year.
    pub fn new(year: i32, month: Month) -> Result<Self, CalendarError> {
        check_year(year)?;
        let month = month.in_year(year);
        let position = months_of_year(year)
            .position(|m| m == month)
            .unwrap_or_default();
        Ok(Self::from_months_elapsed(
            months_before_year(year) + position as i64,
        ))
    }

    /// Returns the day number on which the molad falls.
    pub fn day_number(&self) -> DayNumber {
        self.day
    }

    /// Returns the weekday on which the molad falls.
    pub fn weekday(&self) -> Weekday {
        self.day.weekday()
    }

    /// Returns the clock hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the chalakim past the hour (0..=1079).
    pub fn chalakim(&self) -> u16 {
        self.chalakim
    }

    /// Returns the whole minutes past the hour.
    pub fn minutes(&self) -> u8 {
        (i64::from(self.chalakim) / PARTS_PER_MINUTE) as u8
    }

    /// Returns the chalakim past the minute (0..=17).
    pub fn chalakim_in_minute(&self) -> u8 {
        (i64::from(self.chalakim) % PARTS_PER_MINUTE) as u8
    }

    /// Formats the announcement read on Shabbat Mevarchim, e.g.
    /// `Molad Tevet: Sat, 10 minutes and 16 chalakim after 16:00`.
    pub fn announcement(&self, month_name: &str) -> String {
        format!("Molad {month_name}: {self}")
    }
}

impl fmt::Display for Molad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} minutes and {} chalakim after {}:00",
            self.weekday(),
            self.minutes(),
            self.chalakim_in_minute(),
            self.hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_constants() {
        assert_eq!(PARTS_PER_DAY, 25920);
        assert_eq!(MEAN_MONTH_PARTS, 765433);
        assert_eq!(EPOCH_MOLAD_PARTS, 5604);
    }

    #[test]
    fn molad_tevet_5769() {
        let molad = Molad::new(5769, Month::Tevet).unwrap();
        assert_eq!(molad.day_number(), DayNumber::new(733403));
        assert_eq!(molad.weekday(), Weekday::Sat);
        assert_eq!(molad.hour(), 16);
        assert_eq!(molad.chalakim(), 196);
        assert_eq!(molad.minutes(), 10);
        assert_eq!(molad.chalakim_in_minute(), 16);
        assert_eq!(
            molad.announcement("Tevet"),
            "Molad Tevet: Sat, 10 minutes and 16 chalakim after 16:00"
        );
    }

    #[test]
    fn molad_tishrei_5780() {
        let molad = Molad::new(5780, Month::Tishrei).unwrap();
        assert_eq!(molad.day_number(), DayNumber::new(737331));
        assert_eq!(molad.weekday(), Weekday::Sun);
        assert_eq!(molad.hour(), 5);
        assert_eq!(molad.minutes(), 50);
        assert_eq!(molad.chalakim_in_minute(), 5);
    }

    #[test]
    fn epoch_molad_is_sunday_evening() {
        let molad = Molad::from_months_elapsed(0);
        assert_eq!(molad.weekday(), Weekday::Sun);
        assert_eq!(molad.hour(), 23);
        assert_eq!(molad.chalakim(), 204);
        assert_eq!(molad, Molad::new(1, Month::Tishrei).unwrap());
        assert_eq!(
            molad.to_string(),
            "Sun, 11 minutes and 6 chalakim after 23:00"
        );
    }

    #[test]
    fn consecutive_molads_one_mean_month_apart() {
        let a = Molad::from_months_elapsed(71477);
        let b = Molad::from_months_elapsed(71478);
        let to_parts = |m: &Molad| {
            m.day_number().get() * PARTS_PER_DAY
                + i64::from(m.hour()) * PARTS_PER_HOUR
                + i64::from(m.chalakim())
        };
        assert_eq!(to_parts(&b) - to_parts(&a), MEAN_MONTH_PARTS);
    }

    #[test]
    fn adar_ii_in_common_year_is_adar() {
        assert_eq!(
            Molad::new(5780, Month::AdarII).unwrap(),
            Molad::new(5780, Month::AdarI).unwrap()
        );
    }

    #[test]
    fn year_out_of_range() {
        assert_eq!(
            Molad::new(0, Month::Tishrei).unwrap_err(),
            CalendarError::YearOutOfRange { year: 0 }
        );
    }
}
