//! A single materialised observance.

use std::fmt;
use std::sync::OnceLock;

use luach_calendar::{HebrewDate, Molad};
use regex::Regex;

use crate::flags::HolidayFlags;

/// One observance on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayOccurrence {
    date: HebrewDate,
    desc: String,
    flags: HolidayFlags,
    observed: bool,
    molad: Option<Molad>,
    memo: Option<String>,
}

impl HolidayOccurrence {
    /// Creates an occurrence on `date` with the given description and flags.
    pub fn new(date: HebrewDate, desc: impl Into<String>, flags: HolidayFlags) -> Self {
        Self {
            date,
            desc: desc.into(),
            flags,
            observed: false,
            molad: None,
            memo: None,
        }
    }

    /// Marks the occurrence as moved off its calendar date.
    pub fn with_observed(mut self, observed: bool) -> Self {
        self.observed = observed;
        self
    }

    /// Attaches the molad of the announced month, named `month_name`.
    pub fn with_molad(mut self, molad: Molad, month_name: &str) -> Self {
        self.memo = Some(molad.announcement(month_name));
        self.molad = Some(molad);
        self
    }

    pub fn date(&self) -> HebrewDate {
        self.date
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn flags(&self) -> HolidayFlags {
        self.flags
    }

    /// Returns `true` if the observance was moved off its calendar date.
    pub fn observed(&self) -> bool {
        self.observed
    }

    pub fn molad(&self) -> Option<Molad> {
        self.molad
    }

    /// Returns the molad announcement for Shabbat Mevarchim occurrences.
    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref()
    }

    /// Returns the holiday's name without day counters, years and
    /// qualifiers, e.g. `Pesach` for `Pesach IV (CH''M)`.
    ///
    /// Rosh Chodesh and Shabbat Mevarchim keep their full description, since
    /// the month is part of their identity.
    pub fn basename(&self) -> &str {
        if self
            .flags
            .intersects(HolidayFlags::ROSH_CHODESH | HolidayFlags::SHABBAT_MEVARCHIM)
        {
            return &self.desc;
        }
        basename_re()
            .captures(&self.desc)
            .and_then(|caps| caps.get(1))
            .map_or(self.desc.as_str(), |m| m.as_str())
    }
}

impl fmt::Display for HolidayOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date, self.desc)
    }
}

fn basename_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:Erev )?(.+?)(?: \d{4}| [IVX]+)?(?: \((?:CH''M|observed|Hoshana Raba)\))?(?:: (?:\d Candles?|8th Day))?$",
        )
        .expect("basename regex must compile")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_calendar::Month;

    fn occurrence(desc: &str, flags: HolidayFlags) -> HolidayOccurrence {
        let date = HebrewDate::new(18, Month::Nisan, 5763).unwrap();
        HolidayOccurrence::new(date, desc, flags)
    }

    #[test]
    fn basename_strips_qualifiers() {
        let cases: &[(&str, &str)] = &[
            ("Pesach IV (CH''M)", "Pesach"),
            ("Simchat Torah", "Simchat Torah"),
            ("Erev Tish'a B'Av", "Tish'a B'Av"),
            ("Tish'a B'Av (observed)", "Tish'a B'Av"),
            ("Rosh Hashana 5771", "Rosh Hashana"),
            ("Rosh Hashana II", "Rosh Hashana"),
            ("Sukkot VII (Hoshana Raba)", "Sukkot"),
            ("Chanukah: 1 Candle", "Chanukah"),
            ("Chanukah: 8 Candles", "Chanukah"),
            ("Chanukah: 8th Day", "Chanukah"),
            ("Shavuot", "Shavuot"),
            ("Yom HaAtzma'ut", "Yom HaAtzma'ut"),
            ("Erev Yom Kippur", "Yom Kippur"),
        ];
        for &(desc, expected) in cases {
            assert_eq!(
                occurrence(desc, HolidayFlags::empty()).basename(),
                expected,
                "basename of {desc}"
            );
        }
    }

    #[test]
    fn basename_keeps_month_for_rosh_chodesh() {
        let rc = occurrence("Rosh Chodesh Adar II", HolidayFlags::ROSH_CHODESH);
        assert_eq!(rc.basename(), "Rosh Chodesh Adar II");
        let mv = occurrence(
            "Shabbat Mevarchim Chodesh Tevet",
            HolidayFlags::SHABBAT_MEVARCHIM,
        );
        assert_eq!(mv.basename(), "Shabbat Mevarchim Chodesh Tevet");
    }

    #[test]
    fn mevarchim_memo() {
        let date = HebrewDate::new(23, Month::Kislev, 5769).unwrap();
        let molad = Molad::new(5769, Month::Tevet).unwrap();
        let mv = HolidayOccurrence::new(
            date,
            "Shabbat Mevarchim Chodesh Tevet",
            HolidayFlags::SHABBAT_MEVARCHIM,
        )
        .with_molad(molad, "Tevet");
        assert_eq!(
            mv.memo(),
            Some("Molad Tevet: Sat, 10 minutes and 16 chalakim after 16:00")
        );
        assert_eq!(mv.molad(), Some(molad));
    }

    #[test]
    fn plain_occurrence_has_no_memo() {
        let occ = occurrence("Pesach IV (CH''M)", HolidayFlags::CHOL_HAMOED);
        assert_eq!(occ.memo(), None);
        assert!(!occ.observed());
        assert!(occ.with_observed(true).observed());
    }

    #[test]
    fn display() {
        let occ = occurrence("Pesach IV (CH''M)", HolidayFlags::CHOL_HAMOED);
        assert_eq!(occ.to_string(), "18 Nisan 5763: Pesach IV (CH''M)");
    }
}
