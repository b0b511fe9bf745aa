//! Error types for the luach-calendar crate.

/// Error type for all fallible operations in the luach-calendar crate.
///
/// Variants fall into three families: argument errors (a construction
/// request of the wrong shape), range errors (a value outside the supported
/// calendar domain), and name-resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a dynamic date construction request has the wrong shape.
    #[error("bad argument: {reason}")]
    InvalidArgument {
        /// Description naming the offending input.
        reason: String,
    },

    /// Returned when a day number lies outside the supported window.
    #[error("day number {day_number} out of range")]
    DayNumberOutOfRange {
        /// The day number that was provided.
        day_number: i64,
    },

    /// Returned when a Hebrew year lies outside the supported range.
    #[error("Hebrew year {year} out of range (must be 1..=32658)")]
    YearOutOfRange {
        /// The year that was provided.
        year: i64,
    },

    /// Returned when a day number has no representable civil date.
    #[error("day number {day_number} has no representable civil date")]
    CivilDateOutOfRange {
        /// The day number that was provided.
        day_number: i64,
    },

    /// Returned when a month ordinal does not exist in the given year.
    #[error("invalid month: {month} for year {year}")]
    InvalidMonth {
        /// The invalid month ordinal.
        month: u8,
        /// The Hebrew year the month was checked against.
        year: i32,
    },

    /// Returned when a day exceeds the length of its month.
    #[error("invalid day: {day} for {month} {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day.
        day: u8,
        /// Name of the month the day was checked against.
        month: &'static str,
        /// The Hebrew year.
        year: i32,
        /// The last valid day of the month.
        max_day: u8,
    },

    /// Returned when a month name matches no known spelling.
    #[error("unable to parse month name: {name:?}")]
    UnknownMonthName {
        /// The name that was provided.
        name: String,
    },

    /// Returned when a bare "Adar" is used in a year that has two of them.
    #[error("month name {name:?} is ambiguous in leap year {year}; use Adar I or Adar II")]
    AmbiguousMonthName {
        /// The name that was provided.
        name: String,
        /// The leap year in which the name is ambiguous.
        year: i32,
    },
}
