//! # luach-calendar
//!
//! Exact arithmetic for the fixed Hebrew calendar and its conversion to the
//! civil (proleptic Gregorian) calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"gregorian::to_day_number()"| B["DayNumber"]
//!     B -->|"gregorian::from_day_number()"| A
//!     B -->|"HebrewDate::from_day_number()"| C["HebrewDate"]
//!     C -->|".day_number()"| B
//!     C -->|".next()"| C
//!     C -->|"hebrew_sequence()"| D["Vec of HebrewDate"]
//!     E["(year, Month)"] -->|"Molad::new()"| F["Molad"]
//!     G["year"] -->|"YearInfo::new()"| H["YearInfo"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use luach_calendar::{HebrewDate, Molad, Month, YearInfo};
//!
//! // Civil to Hebrew
//! let date = HebrewDate::from_civil(chrono::NaiveDate::from_ymd_opt(1751, 1, 1).unwrap())?;
//! assert_eq!(date.to_string(), "4 Tevet 5511");
//!
//! // Year attributes
//! let info = YearInfo::new(5782)?; // leap, 384 days
//!
//! // Molad announcement
//! let molad = Molad::new(5769, Month::Tevet)?;
//! println!("{}", molad.announcement("Tevet"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day_number` | Linear day count shared by both calendars |
//! | `gregorian` | Civil date conversions backed by `chrono` |
//! | `hebrew` | Leap cycle, year and month lengths, date conversion |
//! | `year` | Year kind and per-year summary |
//! | `month` | Month enum, names and name lookup |
//! | `molad` | Fixed-point molad arithmetic |
//! | `date` | Validated Hebrew date |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod day_number;
mod error;
pub mod gregorian;
pub mod hebrew;
mod molad;
mod month;
mod sequence;
mod year;

pub use date::HebrewDate;
pub use day_number::DayNumber;
pub use error::CalendarError;
pub use hebrew::{
    MAX_DAY_NUMBER, MAX_YEAR, MIN_DAY_NUMBER, MIN_YEAR, day_number_to_hebrew, days_in_month,
    days_in_year, elapsed_days, hebrew_to_day_number, is_leap_year, long_cheshvan,
    months_in_year, short_kislev,
};
pub use molad::{Molad, PARTS_PER_DAY, PARTS_PER_HOUR, PARTS_PER_MINUTE};
pub use month::{Month, month_from_name, month_name, months_of_year};
pub use sequence::hebrew_sequence;
pub use year::{YearInfo, YearKind, year_kind};
