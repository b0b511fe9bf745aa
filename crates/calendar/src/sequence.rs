//! Contiguous runs of Hebrew dates.

use crate::date::HebrewDate;

/// Generates up to `n_days` consecutive Hebrew dates starting at `start`.
///
/// Month and year boundaries (including leap-year Adars) are handled by
/// [`HebrewDate::next`]. The run stops early at the end of the supported
/// range.
///
/// # Example
///
/// ```ignore
/// let start = HebrewDate::new(29, Month::Elul, 5770).unwrap();
/// let dates = hebrew_sequence(start, 3);
/// // 29 Elul 5770, 1 Tishrei 5771, 2 Tishrei 5771
/// ```
pub fn hebrew_sequence(start: HebrewDate, n_days: usize) -> Vec<HebrewDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        match current.next() {
            Ok(next) => current = next,
            Err(_) => break,
        }
        dates.push(current);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    #[test]
    fn empty() {
        let start = HebrewDate::new(1, Month::Tishrei, 5780).unwrap();
        assert!(hebrew_sequence(start, 0).is_empty());
    }

    #[test]
    fn single() {
        let start = HebrewDate::new(15, Month::Nisan, 5780).unwrap();
        let dates = hebrew_sequence(start, 1);
        assert_eq!(dates, vec![start]);
    }

    #[test]
    fn year_boundary() {
        let start = HebrewDate::new(29, Month::Elul, 5770).unwrap();
        let dates = hebrew_sequence(start, 3);
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[1].to_string(), "1 Tishrei 5771");
        assert_eq!(dates[2].to_string(), "2 Tishrei 5771");
    }

    #[test]
    fn full_year_length() {
        let start = HebrewDate::new(1, Month::Tishrei, 5779).unwrap();
        let dates = hebrew_sequence(start, 386);
        assert_eq!(dates[384].to_string(), "29 Elul 5779");
        assert_eq!(dates[385].to_string(), "1 Tishrei 5780");
    }

    #[test]
    fn stops_at_end_of_range() {
        let start = HebrewDate::new(28, Month::Elul, 32658).unwrap();
        let dates = hebrew_sequence(start, 10);
        assert_eq!(dates.len(), 2);
    }

    #[test]
    fn consecutive_day_numbers() {
        let start = HebrewDate::new(20, Month::Shvat, 5782).unwrap();
        let dates = hebrew_sequence(start, 90);
        for pair in dates.windows(2) {
            assert_eq!(pair[1].day_number() - pair[0].day_number(), 1);
        }
    }
}
