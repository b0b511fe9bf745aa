//! Hebrew calendar arithmetic: leap cycle, year and month lengths, and
//! conversion between Hebrew dates and day numbers.
//!
//! All arithmetic is exact integer arithmetic. Lunar time is measured in
//! chalakim (parts), see [`crate::molad`] for the unit constants.

use crate::day_number::DayNumber;
use crate::error::CalendarError;
use crate::molad::{EPOCH_MOLAD_PARTS, MEAN_MONTH_PARTS, PARTS_PER_DAY};
use crate::month::{Month, months_of_year};

/// Day number of the day before 1 Tishrei AM 1.
pub const HEBREW_EPOCH: i64 = -1_373_428;

/// Earliest supported Hebrew year.
pub const MIN_YEAR: i32 = 1;

/// Latest supported Hebrew year.
pub const MAX_YEAR: i32 = 32658;

/// Earliest supported day number (1 Tishrei AM 1).
pub const MIN_DAY_NUMBER: DayNumber = DayNumber::new(HEBREW_EPOCH + 1);

/// Latest supported day number (29 Elul 32658).
pub const MAX_DAY_NUMBER: DayNumber = DayNumber::new(10_554_776);

/// Mean year length as the exact fraction 179876755 / 492480 days
/// (235 mean months per 19 years).
const MEAN_YEAR_NUMERATOR: i64 = 179_876_755;
const MEAN_YEAR_DENOMINATOR: i64 = 492_480;

// Dechiyot thresholds, in chalakim since the start of the molad's day.
const MOLAD_ZAKEN: i64 = 18 * 1080;
const GATARAD: i64 = 9 * 1080 + 204;
const BETUTAKPAT: i64 = 15 * 1080 + 589;

/// Returns `true` if `year` has thirteen months.
///
/// Leap years occupy positions 3, 6, 8, 11, 14, 17 and 19 of the 19-year
/// cycle.
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Returns the number of months in `year` (12 or 13).
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Returns the number of lunar months from the epoch to 1 Tishrei of `year`.
pub fn months_before_year(year: i32) -> i64 {
    let prev = i64::from(year) - 1;
    let cycles = prev.div_euclid(19);
    let in_cycle = prev.rem_euclid(19);
    235 * cycles + 12 * in_cycle + (7 * in_cycle + 1) / 19
}

/// Returns the number of days from the epoch to 1 Tishrei of `year`.
///
/// The molad of Tishrei fixes the tentative day; the four deferral rules are
/// then applied in order. The first three are mutually exclusive and add at
/// most one day; the fourth keeps Rosh Hashana off Sunday, Wednesday and
/// Friday.
pub fn elapsed_days(year: i32) -> i64 {
    let molad = months_before_year(year) * MEAN_MONTH_PARTS + EPOCH_MOLAD_PARTS;
    let day = 1 + molad.div_euclid(PARTS_PER_DAY);
    let parts = molad.rem_euclid(PARTS_PER_DAY);
    let weekday = day.rem_euclid(7);

    let mut new_year = day;
    if parts >= MOLAD_ZAKEN
        || (weekday == 2 && parts >= GATARAD && !is_leap_year(year))
        || (weekday == 1 && parts >= BETUTAKPAT && is_leap_year(year - 1))
    {
        new_year += 1;
    }
    if matches!(new_year.rem_euclid(7), 0 | 3 | 5) {
        new_year += 1;
    }
    new_year
}

/// Returns the day number of 1 Tishrei of `year`.
pub fn new_year_day(year: i32) -> DayNumber {
    DayNumber::new(HEBREW_EPOCH + elapsed_days(year))
}

/// Returns the length of `year` in days: 353, 354 or 355 for common years,
/// 383, 384 or 385 for leap years.
pub fn days_in_year(year: i32) -> u16 {
    (elapsed_days(year + 1) - elapsed_days(year)) as u16
}

/// Returns `true` if Cheshvan has 30 days in `year`.
pub fn long_cheshvan(year: i32) -> bool {
    days_in_year(year) % 10 == 5
}

/// Returns `true` if Kislev has 29 days in `year`.
pub fn short_kislev(year: i32) -> bool {
    days_in_year(year) % 10 == 3
}

/// Returns the number of days in `month` of `year` (29 or 30).
pub fn days_in_month(month: Month, year: i32) -> u8 {
    let short = match month.in_year(year) {
        Month::Iyyar | Month::Tamuz | Month::Elul | Month::Tevet | Month::AdarII => true,
        Month::AdarI => !is_leap_year(year),
        Month::Cheshvan => !long_cheshvan(year),
        Month::Kislev => short_kislev(year),
        _ => false,
    };
    if short { 29 } else { 30 }
}

/// Checks that `year` lies in the supported range.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] otherwise.
pub fn check_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::YearOutOfRange {
            year: i64::from(year),
        })
    }
}

/// Converts a Hebrew date to its day number.
///
/// Adar II in a common year is read as the single Adar.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] for an unsupported year and
/// [`CalendarError::InvalidDay`] if `day` exceeds the month's length.
pub fn hebrew_to_day_number(year: i32, month: Month, day: u8) -> Result<DayNumber, CalendarError> {
    check_year(year)?;
    let month = month.in_year(year);
    let max_day = days_in_month(month, year);
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month: month.name(year),
            year,
            max_day,
        });
    }
    Ok(day_number_unchecked(year, month, day))
}

/// Day number of an already-validated date.
pub(crate) fn day_number_unchecked(year: i32, month: Month, day: u8) -> DayNumber {
    let before: i64 = months_of_year(year)
        .take_while(|&m| m != month)
        .map(|m| i64::from(days_in_month(m, year)))
        .sum();
    new_year_day(year) + before + i64::from(day) - 1
}

/// Converts a day number to a Hebrew `(year, month, day)` triple.
///
/// The year is estimated from the exact mean year length and corrected by
/// stepping over new-year boundaries; the month is then found by walking
/// the months of that year.
///
/// # Errors
///
/// Returns [`CalendarError::DayNumberOutOfRange`] if `day_number` lies
/// outside [`MIN_DAY_NUMBER`]..=[`MAX_DAY_NUMBER`].
pub fn day_number_to_hebrew(day_number: DayNumber) -> Result<(i32, Month, u8), CalendarError> {
    if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&day_number) {
        return Err(CalendarError::DayNumberOutOfRange {
            day_number: day_number.get(),
        });
    }

    let since_epoch = day_number.get() - HEBREW_EPOCH;
    let estimate = since_epoch * MEAN_YEAR_DENOMINATOR / MEAN_YEAR_NUMERATOR;
    let mut year = i32::try_from(estimate.max(1)).unwrap_or(MAX_YEAR);
    while year > MIN_YEAR && new_year_day(year) > day_number {
        year -= 1;
    }
    while new_year_day(year + 1) <= day_number {
        year += 1;
    }

    let mut month_start = new_year_day(year);
    for month in months_of_year(year) {
        let length = i64::from(days_in_month(month, year));
        if day_number - month_start < length {
            let day = (day_number - month_start + 1) as u8;
            return Ok((year, month, day));
        }
        month_start = month_start + length;
    }
    Err(CalendarError::DayNumberOutOfRange {
        day_number: day_number.get(),
    })
}
