//! Evaluation of the holiday table over Hebrew and civil years.

use chrono::NaiveDate;
use luach_calendar::hebrew::check_year;
use luach_calendar::{CalendarError, HebrewDate, gregorian};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::HolidayError;
use crate::occurrence::HolidayOccurrence;
use crate::rules::HolidayRuleSet;

/// Computes holiday occurrences from a rule set and a configuration.
#[derive(Debug, Clone)]
pub struct HolidayGenerator {
    config: GeneratorConfig,
    rules: HolidayRuleSet,
}

impl HolidayGenerator {
    /// Creates a generator over the standard rule set.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rules(config, HolidayRuleSet::standard())
    }

    /// Creates a generator over a custom rule set.
    pub fn with_rules(config: GeneratorConfig, rules: HolidayRuleSet) -> Self {
        Self { config, rules }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn rules(&self) -> &HolidayRuleSet {
        &self.rules
    }

    /// Returns every occurrence in Hebrew year `year`, ordered by day and
    /// then by rule priority.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::Calendar`] for an unsupported year and
    /// [`HolidayError::UnresolvedPostponement`] if a rule's postponement
    /// cannot be satisfied.
    #[tracing::instrument(skip(self))]
    pub fn for_hebrew_year(&self, year: i32) -> Result<Vec<HolidayOccurrence>, HolidayError> {
        check_year(year)?;
        let locale = self.config.locale();

        let mut ranked = Vec::new();
        let mut applied = 0usize;
        for (priority, rule) in self.rules.rules().iter().enumerate() {
            if !rule.applies_to(year, locale) || !self.config.keeps(rule.flags()) {
                continue;
            }
            applied += 1;
            for occurrence in rule.occurrences(year)? {
                ranked.push((occurrence.date().day_number(), priority, occurrence));
            }
        }
        // Stable: monthly rules keep their calendar order within a priority.
        ranked.sort_by_key(|(day, priority, _)| (*day, *priority));

        debug!(
            year,
            rules = applied,
            occurrences = ranked.len(),
            "evaluated holiday rules"
        );
        Ok(ranked.into_iter().map(|(_, _, occ)| occ).collect())
    }

    /// Returns the occurrences of `n_years` consecutive Hebrew years starting
    /// at `start`.
    ///
    /// # Errors
    ///
    /// See [`HolidayGenerator::for_hebrew_year`].
    pub fn for_hebrew_years(
        &self,
        start: i32,
        n_years: usize,
    ) -> Result<Vec<HolidayOccurrence>, HolidayError> {
        let mut out = Vec::new();
        for year in (start..).take(n_years) {
            out.extend(self.for_hebrew_year(year)?);
        }
        Ok(out)
    }

    /// Returns the occurrences whose civil date lies in the `n_years` civil
    /// years starting January 1 of `start`.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::Calendar`] if the civil range is not
    /// representable or leaves the supported Hebrew range, including a
    /// last year that overflows `i32`.
    #[tracing::instrument(skip(self))]
    pub fn for_civil_years(
        &self,
        start: i32,
        n_years: u32,
    ) -> Result<Vec<HolidayOccurrence>, HolidayError> {
        if n_years == 0 {
            return Ok(Vec::new());
        }
        let end_year = i32::try_from(n_years - 1)
            .ok()
            .and_then(|span| start.checked_add(span))
            .ok_or(CalendarError::YearOutOfRange {
                year: i64::from(start) + i64::from(n_years) - 1,
            })?;
        let first = gregorian::ymd_to_day_number(start, 1, 1)?;
        let last = gregorian::ymd_to_day_number(end_year, 12, 31)?;
        let first_year = HebrewDate::from_day_number(first)?.year();
        let last_year = HebrewDate::from_day_number(last)?.year();

        let mut out = Vec::new();
        for year in first_year..=last_year {
            out.extend(self.for_hebrew_year(year)?.into_iter().filter(|occ| {
                let day = occ.date().day_number();
                first <= day && day <= last
            }));
        }
        debug!(start, n_years, occurrences = out.len(), "civil range");
        Ok(out)
    }

    /// Returns the occurrences on `date` in priority order, or `None` if
    /// nothing is observed that day.
    ///
    /// # Errors
    ///
    /// See [`HolidayGenerator::for_hebrew_year`].
    pub fn on_date(
        &self,
        date: HebrewDate,
    ) -> Result<Option<Vec<HolidayOccurrence>>, HolidayError> {
        let found: Vec<HolidayOccurrence> = self
            .for_hebrew_year(date.year())?
            .into_iter()
            .filter(|occ| occ.date().is_same_date(date))
            .collect();
        Ok(if found.is_empty() { None } else { Some(found) })
    }

    /// Civil-date convenience for [`HolidayGenerator::on_date`].
    ///
    /// # Errors
    ///
    /// See [`HolidayGenerator::on_date`].
    pub fn on_civil_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<Vec<HolidayOccurrence>>, HolidayError> {
        self.on_date(HebrewDate::from_civil(date)?)
    }
}

impl Default for HolidayGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::HolidayFlags;
    use crate::rules::Locale;
    use luach_calendar::Month;

    #[test]
    fn sorted_by_day() {
        let generator = HolidayGenerator::default();
        let events = generator.for_hebrew_year(5771).unwrap();
        for pair in events.windows(2) {
            assert!(pair[0].date() <= pair[1].date());
        }
        assert_eq!(events[0].desc(), "Rosh Hashana 5771");
        assert_eq!(events.last().unwrap().desc(), "Erev Rosh Hashana");
    }

    #[test]
    fn tie_broken_by_rule_priority() {
        let generator = HolidayGenerator::default();
        let date = HebrewDate::new(29, Month::Cheshvan, 5771).unwrap();
        let descs: Vec<String> = generator
            .on_date(date)
            .unwrap()
            .unwrap()
            .iter()
            .map(|o| o.desc().to_string())
            .collect();
        assert_eq!(descs, ["Sigd", "Shabbat Mevarchim Chodesh Kislev"]);
    }

    #[test]
    fn exclusion_mask() {
        let config = GeneratorConfig::new()
            .with_exclude(HolidayFlags::ROSH_CHODESH | HolidayFlags::SHABBAT_MEVARCHIM);
        let events = HolidayGenerator::new(config).for_hebrew_year(5771).unwrap();
        assert!(events.iter().all(|o| !o.desc().starts_with("Rosh Chodesh")));
        assert!(events.iter().all(|o| o.memo().is_none()));
    }

    #[test]
    fn no_locale_keeps_both_variants() {
        let config = GeneratorConfig::new().with_locale(None);
        let events = HolidayGenerator::new(config).for_hebrew_year(5781).unwrap();
        assert!(events.iter().any(|o| o.desc() == "Shavuot"));
        assert!(events.iter().any(|o| o.desc() == "Shavuot II"));
    }

    #[test]
    fn israel_drops_diaspora_days() {
        let config = GeneratorConfig::new().with_locale(Some(Locale::Israel));
        let events = HolidayGenerator::new(config).for_hebrew_year(5781).unwrap();
        assert!(events.iter().all(|o| o.desc() != "Pesach VIII"));
        assert!(events.iter().any(|o| o.desc() == "Pesach II (CH''M)"));
    }

    #[test]
    fn hebrew_years_concatenate() {
        let generator = HolidayGenerator::default();
        let two = generator.for_hebrew_years(5780, 2).unwrap();
        let a = generator.for_hebrew_year(5780).unwrap();
        let b = generator.for_hebrew_year(5781).unwrap();
        assert_eq!(two.len(), a.len() + b.len());
        assert!(generator.for_hebrew_years(5780, 0).unwrap().is_empty());
    }

    #[test]
    fn civil_span_overflow_is_an_error() {
        let generator = HolidayGenerator::default();
        for n_years in [i32::MAX as u32, u32::MAX] {
            assert!(
                matches!(
                    generator.for_civil_years(2020, n_years),
                    Err(HolidayError::Calendar(CalendarError::YearOutOfRange { .. }))
                ),
                "n_years = {n_years}"
            );
        }
        assert!(generator.for_civil_years(2020, 0).unwrap().is_empty());
    }

    #[test]
    fn year_out_of_range() {
        let generator = HolidayGenerator::default();
        assert!(matches!(
            generator.for_hebrew_year(0),
            Err(HolidayError::Calendar(_))
        ));
    }
}
