//! Configuration for holiday generation.

use crate::flags::HolidayFlags;
use crate::rules::Locale;

/// Configuration for the holiday generator.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use luach_holidays::{GeneratorConfig, HolidayFlags, Locale};
///
/// let config = GeneratorConfig::new()
///     .with_locale(Some(Locale::Israel))
///     .with_exclude(HolidayFlags::MODERN_HOLIDAY);
/// assert_eq!(config.locale(), Some(Locale::Israel));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    locale: Option<Locale>,
    exclude: HolidayFlags,
}

impl GeneratorConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `locale = Some(Diaspora)`, nothing excluded.
    pub fn new() -> Self {
        Self {
            locale: Some(Locale::Diaspora),
            exclude: HolidayFlags::empty(),
        }
    }

    /// Sets the locale. `None` keeps the observances of every locale.
    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        self.locale = locale;
        self
    }

    /// Drops occurrences carrying any of the given flags.
    pub fn with_exclude(mut self, exclude: HolidayFlags) -> Self {
        self.exclude = exclude;
        self
    }

    // --- Accessors ---

    /// Returns the locale.
    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    /// Returns the exclusion mask.
    pub fn exclude(&self) -> HolidayFlags {
        self.exclude
    }

    /// Returns `true` if an occurrence with `flags` passes the exclusion
    /// mask.
    pub fn keeps(&self, flags: HolidayFlags) -> bool {
        !flags.intersects(self.exclude)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
