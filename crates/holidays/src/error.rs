//! Error types for the luach-holidays crate.

use luach_calendar::CalendarError;

/// Error type for all fallible operations in the luach-holidays crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HolidayError {
    /// Propagated from the calendar engine (range and validation errors).
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Returned when a postponed observance lands on a weekday its rule
    /// still forbids.
    #[error("postponement of {holiday} did not resolve (day number {day_number})")]
    UnresolvedPostponement {
        /// Description of the observance.
        holiday: String,
        /// Day number the single shift produced.
        day_number: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_from_calendar() {
        let err: HolidayError = CalendarError::YearOutOfRange { year: 0 }.into();
        assert_eq!(
            err,
            HolidayError::Calendar(CalendarError::YearOutOfRange { year: 0 })
        );
        assert!(err.to_string().starts_with("calendar error: "));
    }

    #[test]
    fn error_unresolved_postponement() {
        let err = HolidayError::UnresolvedPostponement {
            holiday: "Tzom Gedaliah".to_string(),
            day_number: 733661,
        };
        assert_eq!(
            err.to_string(),
            "postponement of Tzom Gedaliah did not resolve (day number 733661)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<HolidayError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<HolidayError>();
    }
}
