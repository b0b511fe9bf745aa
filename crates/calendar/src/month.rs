//! Hebrew month identities, leap-aware names and name resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::CalendarError;
use crate::hebrew::{is_leap_year, months_in_year};

/// A Hebrew month.
///
/// Ordinals count from Nisan. The civil year number changes at Tishrei, so
/// within one Hebrew year the months run Tishrei..=Adar, then Nisan..=Elul.
/// In a common year [`Month::AdarI`] is the single Adar and
/// [`Month::AdarII`] is read as that same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// First month of the festival year; Pesach falls on the 15th.
    Nisan = 1,
    /// Iyyar, always 29 days.
    Iyyar = 2,
    /// Sivan, always 30 days.
    Sivan = 3,
    /// Tamuz, always 29 days.
    Tamuz = 4,
    /// Av, always 30 days.
    Av = 5,
    /// Last month of the civil year, always 29 days.
    Elul = 6,
    /// First month of the civil year; Rosh Hashana falls on the 1st.
    Tishrei = 7,
    /// Cheshvan, 30 days in a complete year and 29 otherwise.
    Cheshvan = 8,
    /// Kislev, 29 days in a deficient year and 30 otherwise.
    Kislev = 9,
    /// Tevet, always 29 days.
    Tevet = 10,
    /// Sh'vat, always 30 days.
    Shvat = 11,
    /// Adar I of a leap year (30 days), or the single Adar (29 days).
    AdarI = 12,
    /// Adar II of a leap year, always 29 days.
    AdarII = 13,
}

impl Month {
    /// All months in ordinal order.
    pub const ALL: [Month; 13] = [
        Month::Nisan,
        Month::Iyyar,
        Month::Sivan,
        Month::Tamuz,
        Month::Av,
        Month::Elul,
        Month::Tishrei,
        Month::Cheshvan,
        Month::Kislev,
        Month::Tevet,
        Month::Shvat,
        Month::AdarI,
        Month::AdarII,
    ];

    /// Returns the month's ordinal (1..=13).
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the month with the given ordinal, if any.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal).checked_sub(1)?).copied()
    }

    /// Returns the month with the given ordinal in `year`.
    ///
    /// Only `1..=months_in_year(year)` is accepted, so 13 names Adar II in a
    /// leap year and is rejected in a common year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for any other ordinal.
    pub fn from_ordinal_in_year(ordinal: u8, year: i32) -> Result<Self, CalendarError> {
        Self::from_ordinal(ordinal)
            .filter(|_| ordinal <= months_in_year(year))
            .ok_or(CalendarError::InvalidMonth {
                month: ordinal,
                year,
            })
    }

    /// Returns the month as it exists in `year`: Adar II collapses to the
    /// single Adar of a common year.
    pub fn in_year(self, year: i32) -> Self {
        if self == Month::AdarII && !is_leap_year(year) {
            Month::AdarI
        } else {
            self
        }
    }

    /// Returns the canonical English name of the month in `year`.
    pub fn name(self, year: i32) -> &'static str {
        let leap = is_leap_year(year);
        match self {
            Month::Nisan => "Nisan",
            Month::Iyyar => "Iyyar",
            Month::Sivan => "Sivan",
            Month::Tamuz => "Tamuz",
            Month::Av => "Av",
            Month::Elul => "Elul",
            Month::Tishrei => "Tishrei",
            Month::Cheshvan => "Cheshvan",
            Month::Kislev => "Kislev",
            Month::Tevet => "Tevet",
            Month::Shvat => "Sh'vat",
            Month::AdarI if leap => "Adar I",
            Month::AdarII if leap => "Adar II",
            Month::AdarI | Month::AdarII => "Adar",
        }
    }

    /// Resolves a month name for a date in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownMonthName`] if the name matches no
    /// spelling, and [`CalendarError::AmbiguousMonthName`] for a bare "Adar"
    /// in a leap year.
    pub fn resolve_name(name: &str, year: i32) -> Result<Self, CalendarError> {
        let month = month_from_name(name)?;
        if is_leap_year(year) && BARE_ADAR.contains(&normalize(name).as_str()) {
            return Err(CalendarError::AmbiguousMonthName {
                name: name.to_string(),
                year,
            });
        }
        Ok(month.in_year(year))
    }
}

impl fmt::Display for Month {
    /// Formats the month under its leap-year name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Month::AdarI => "Adar I",
            Month::AdarII => "Adar II",
            other => other.name(1),
        };
        f.write_str(name)
    }
}

/// Returns the months of `year` in calendar order, Tishrei first.
pub fn months_of_year(year: i32) -> impl Iterator<Item = Month> {
    let last = months_in_year(year);
    (7..=last).chain(1..=6).filter_map(Month::from_ordinal)
}

/// Returns the name of the month with ordinal `ordinal` in `year`.
///
/// The ordinal one past the last month of the year names "Nisan", the
/// month that follows Adar.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for any other ordinal outside
/// the year.
pub fn month_name(ordinal: u8, year: i32) -> Result<&'static str, CalendarError> {
    let count = months_in_year(year);
    if ordinal == count + 1 {
        return Ok(Month::Nisan.name(year));
    }
    Month::from_ordinal(ordinal)
        .filter(|_| ordinal <= count)
        .map(|month| month.name(year))
        .ok_or(CalendarError::InvalidMonth {
            month: ordinal,
            year,
        })
}

/// Resolves a month name, ignoring case, whitespace and punctuation.
///
/// Accepts common transliterations and Hebrew script. A bare "Adar" resolves
/// to [`Month::AdarII`], which is the single Adar in a common year.
///
/// # Errors
///
/// Returns [`CalendarError::UnknownMonthName`] if no spelling matches.
pub fn month_from_name(name: &str) -> Result<Month, CalendarError> {
    MONTH_LOOKUP
        .get(&normalize(name))
        .copied()
        .ok_or_else(|| CalendarError::UnknownMonthName {
            name: name.to_string(),
        })
}

/// Spellings that name Adar without saying which one.
const BARE_ADAR: [&str; 2] = ["adar", "אדר"];

/// Accepted spellings, matched after [`normalize`].
#[rustfmt::skip]
const MONTH_NAMES: &[(&str, Month)] = &[
    ("Nisan", Month::Nisan), ("Nissan", Month::Nisan), ("N", Month::Nisan), ("ניסן", Month::Nisan),
    ("Iyyar", Month::Iyyar), ("Iyar", Month::Iyyar), ("Iy", Month::Iyyar), ("אייר", Month::Iyyar),
    ("איר", Month::Iyyar),
    ("Sivan", Month::Sivan), ("Siwan", Month::Sivan), ("סיון", Month::Sivan), ("סייון", Month::Sivan),
    ("Tamuz", Month::Tamuz), ("Tammuz", Month::Tamuz), ("תמוז", Month::Tamuz),
    ("Av", Month::Av), ("Ab", Month::Av), ("Menachem Av", Month::Av), ("אב", Month::Av),
    ("מנחם אב", Month::Av),
    ("Elul", Month::Elul), ("אלול", Month::Elul),
    ("Tishrei", Month::Tishrei), ("Tishri", Month::Tishrei), ("תשרי", Month::Tishrei),
    ("Cheshvan", Month::Cheshvan), ("Heshvan", Month::Cheshvan), ("Marcheshvan", Month::Cheshvan),
    ("Mar Cheshvan", Month::Cheshvan), ("Chesvan", Month::Cheshvan), ("חשון", Month::Cheshvan),
    ("חשוון", Month::Cheshvan), ("מרחשון", Month::Cheshvan), ("מרחשוון", Month::Cheshvan),
    ("Kislev", Month::Kislev), ("Kislew", Month::Kislev), ("כסלו", Month::Kislev),
    ("כסליו", Month::Kislev),
    ("Tevet", Month::Tevet), ("Teves", Month::Tevet), ("Tebeth", Month::Tevet), ("טבת", Month::Tevet),
    ("Shvat", Month::Shvat), ("Shevat", Month::Shvat), ("Shebat", Month::Shvat), ("שבט", Month::Shvat),
    ("Adar I", Month::AdarI), ("Adar 1", Month::AdarI), ("Adar Aleph", Month::AdarI),
    ("Adar Rishon", Month::AdarI), ("אדר א", Month::AdarI), ("אדר 1", Month::AdarI),
    ("אדר ראשון", Month::AdarI),
    ("Adar II", Month::AdarII), ("Adar 2", Month::AdarII), ("Adar Bet", Month::AdarII),
    ("Adar Sheni", Month::AdarII), ("Adar", Month::AdarII), ("אדר ב", Month::AdarII),
    ("אדר 2", Month::AdarII), ("אדר שני", Month::AdarII), ("אדר", Month::AdarII),
];

static MONTH_LOOKUP: LazyLock<HashMap<String, Month>> = LazyLock::new(|| {
    MONTH_NAMES
        .iter()
        .map(|&(name, month)| (normalize(name), month))
        .collect()
});

/// Lowercases and drops everything but letters and digits, including
/// Hebrew vowel points and cantillation marks.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() && !('\u{0591}'..='\u{05C7}').contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}
