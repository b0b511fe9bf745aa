//! # luach-holidays
//!
//! Annual holiday occurrences computed on the arithmetic Hebrew calendar:
//! major and minor holidays, fasts with their weekday postponements, special
//! Sabbaths, modern Israeli observances, Rosh Chodesh and Shabbat Mevarchim
//! with its molad announcement.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────────┐     ┌──────────────────┐     ┌────────────────────┐
//!  │  HolidayRuleSet  │────▶│ HolidayGenerator │────▶│ Vec of             │
//!  │ (priority order) │     │ (locale, exclude)│     │ HolidayOccurrence  │
//!  └──────────────────┘     └──────────────────┘     └────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use luach_holidays::{GeneratorConfig, HolidayGenerator, Locale};
//!
//! let config = GeneratorConfig::new().with_locale(Some(Locale::Israel));
//! let generator = HolidayGenerator::new(config);
//! for occ in generator.for_hebrew_year(5720)? {
//!     println!("{} {}", occ.date(), occ.desc());
//! }
//! ```

mod config;
mod error;
mod flags;
mod generator;
mod occurrence;
mod rules;

pub use config::GeneratorConfig;
pub use error::HolidayError;
pub use flags::HolidayFlags;
pub use generator::HolidayGenerator;
pub use occurrence::HolidayOccurrence;
pub use rules::{Anchor, HolidayRule, HolidayRuleSet, Locale, Postponement};
