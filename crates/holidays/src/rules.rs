//! The declarative table of annual observances.
//!
//! Each [`HolidayRule`] names an anchor in the Hebrew year, the years and
//! locales it applies to, an optional weekday postponement and the flags of
//! the occurrences it produces. [`HolidayRuleSet::standard`] lists the rules
//! in priority order; occurrences that share a day are emitted in that order.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use luach_calendar::hebrew::check_year;
use luach_calendar::{
    DayNumber, HebrewDate, Molad, Month, days_in_month, hebrew_to_day_number, is_leap_year,
    months_of_year,
};
use tracing::trace;

use crate::error::HolidayError;
use crate::flags::HolidayFlags;
use crate::occurrence::HolidayOccurrence;

/// Where an observance is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Diaspora,
    Israel,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Diaspora => f.write_str("diaspora"),
            Locale::Israel => f.write_str("israel"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "diaspora" | "chul" => Ok(Locale::Diaspora),
            "israel" | "il" => Ok(Locale::Israel),
            other => Err(format!("unknown locale {other:?} (expected diaspora or israel)")),
        }
    }
}

/// Where in the year a rule's occurrences fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// A fixed day of a month.
    Date { month: Month, day: u8 },
    /// A fixed day of a month moved by a number of days.
    Offset { month: Month, day: u8, days: i64 },
    /// The Saturday on or before a fixed day moved by a number of days.
    SaturdayOnOrBefore { month: Month, day: u8, days: i64 },
    /// The first of every month but Tishrei, preceded by the 30th of the
    /// previous month when that month is full.
    RoshChodesh,
    /// The Saturday on or before the 29th of every month but Elul, announcing
    /// the following month.
    Mevarchim,
}

/// Moves an occurrence off weekdays it may not fall on.
///
/// At most one shift is applied: the first entry whose weekday matches.
/// The shifted day is checked once more and must not match any entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Postponement {
    moves: &'static [(Weekday, i64)],
    suffix: Option<&'static str>,
}

impl Postponement {
    /// Creates a policy from `(forbidden weekday, shift in days)` pairs.
    pub const fn new(moves: &'static [(Weekday, i64)]) -> Self {
        Self {
            moves,
            suffix: None,
        }
    }

    /// Appends `suffix` to the description when the shift happens.
    pub const fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// Returns the shifted day, or `None` if `day` is allowed as is.
    fn shift(&self, day: DayNumber) -> Option<DayNumber> {
        let weekday = day.weekday();
        self.moves
            .iter()
            .find(|(from, _)| *from == weekday)
            .map(|&(_, days)| day + days)
    }

    fn forbids(&self, day: DayNumber) -> bool {
        let weekday = day.weekday();
        self.moves.iter().any(|(from, _)| *from == weekday)
    }
}

/// One row of the holiday table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRule {
    name: &'static str,
    anchor: Anchor,
    flags: HolidayFlags,
    locale: Option<Locale>,
    leap_only: bool,
    since: Option<i32>,
    until: Option<i32>,
    postponement: Option<Postponement>,
}

impl HolidayRule {
    /// Creates a rule anchored on `anchor`.
    ///
    /// `{year}` in `name` is replaced by the Hebrew year and `{month}` by the
    /// month a monthly rule is about.
    pub fn new(name: &'static str, anchor: Anchor, flags: HolidayFlags) -> Self {
        Self {
            name,
            anchor,
            flags,
            locale: None,
            leap_only: false,
            since: None,
            until: None,
            postponement: None,
        }
    }

    /// A rule on a fixed day of a month.
    pub fn on(name: &'static str, day: u8, month: Month, flags: HolidayFlags) -> Self {
        Self::new(name, Anchor::Date { month, day }, flags)
    }

    /// Restricts the rule to the Diaspora.
    pub fn diaspora(mut self) -> Self {
        self.locale = Some(Locale::Diaspora);
        self.flags |= HolidayFlags::CHUL_ONLY;
        self
    }

    /// Restricts the rule to Israel.
    pub fn israel(mut self) -> Self {
        self.locale = Some(Locale::Israel);
        self.flags |= HolidayFlags::IL_ONLY;
        self
    }

    /// Restricts the rule to leap years.
    pub fn leap_years_only(mut self) -> Self {
        self.leap_only = true;
        self
    }

    /// Applies the rule from `year` onwards.
    pub fn since(mut self, year: i32) -> Self {
        self.since = Some(year);
        self
    }

    /// Applies the rule up to and including `year`.
    pub fn until(mut self, year: i32) -> Self {
        self.until = Some(year);
        self
    }

    /// Moves occurrences off forbidden weekdays with `postponement`.
    pub fn postponed(mut self, postponement: Postponement) -> Self {
        self.postponement = Some(postponement);
        self
    }

    // --- Accessors ---

    /// Returns the description template.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns where in the year the rule falls.
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the flags attached to every occurrence.
    pub fn flags(&self) -> HolidayFlags {
        self.flags
    }

    /// Returns the only locale the rule applies to, if restricted.
    pub fn locale(&self) -> Option<Locale> {
        self.locale
    }

    /// Returns `true` if the rule is kept in `year` for `locale`.
    ///
    /// A `None` locale accepts rules of every locale.
    pub fn applies_to(&self, year: i32, locale: Option<Locale>) -> bool {
        if self.leap_only && !is_leap_year(year) {
            return false;
        }
        if self.since.is_some_and(|since| year < since) {
            return false;
        }
        if self.until.is_some_and(|until| year > until) {
            return false;
        }
        match (self.locale, locale) {
            (Some(rule), Some(wanted)) => rule == wanted,
            _ => true,
        }
    }

    /// Materialises the rule's occurrences in `year`, ignoring locale and
    /// year-range conditions.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::Calendar`] for an unsupported year and
    /// [`HolidayError::UnresolvedPostponement`] if a shift lands on another
    /// forbidden weekday.
    pub fn occurrences(&self, year: i32) -> Result<Vec<HolidayOccurrence>, HolidayError> {
        check_year(year)?;
        match self.anchor {
            Anchor::Date { month, day } => {
                let base = hebrew_to_day_number(year, month, day)?;
                self.single(year, base).map(|occ| vec![occ])
            }
            Anchor::Offset { month, day, days } => {
                let base = hebrew_to_day_number(year, month, day)? + days;
                self.single(year, base).map(|occ| vec![occ])
            }
            Anchor::SaturdayOnOrBefore { month, day, days } => {
                let base = (hebrew_to_day_number(year, month, day)? + days)
                    .on_or_before(Weekday::Sat);
                self.single(year, base).map(|occ| vec![occ])
            }
            Anchor::RoshChodesh => self.rosh_chodesh(year),
            Anchor::Mevarchim => self.mevarchim(year),
        }
    }

    fn describe(&self, year: i32) -> String {
        self.name.replace("{year}", &year.to_string())
    }

    fn single(&self, year: i32, base: DayNumber) -> Result<HolidayOccurrence, HolidayError> {
        let mut desc = self.describe(year);
        let mut day = base;
        let mut observed = false;

        if let Some(postponement) = &self.postponement {
            if let Some(shifted) = postponement.shift(base) {
                if postponement.forbids(shifted) {
                    return Err(HolidayError::UnresolvedPostponement {
                        holiday: desc,
                        day_number: shifted.get(),
                    });
                }
                trace!(holiday = %desc, from = %base, to = %shifted, "postponed");
                if let Some(suffix) = postponement.suffix {
                    desc.push_str(suffix);
                }
                day = shifted;
                observed = true;
            }
        }

        let date = HebrewDate::from_day_number(day)?;
        Ok(HolidayOccurrence::new(date, desc, self.flags).with_observed(observed))
    }

    fn rosh_chodesh(&self, year: i32) -> Result<Vec<HolidayOccurrence>, HolidayError> {
        let months: Vec<Month> = months_of_year(year).collect();
        let mut out = Vec::new();
        for pair in months.windows(2) {
            let (prev, month) = (pair[0], pair[1]);
            let desc = self.name.replace("{month}", month.name(year));
            if days_in_month(prev, year) == 30 {
                let date = HebrewDate::new(30, prev, year)?;
                out.push(HolidayOccurrence::new(date, desc.clone(), self.flags));
            }
            let date = HebrewDate::new(1, month, year)?;
            out.push(HolidayOccurrence::new(date, desc, self.flags));
        }
        Ok(out)
    }

    fn mevarchim(&self, year: i32) -> Result<Vec<HolidayOccurrence>, HolidayError> {
        let months: Vec<Month> = months_of_year(year).collect();
        let mut out = Vec::new();
        for pair in months.windows(2) {
            let (month, next) = (pair[0], pair[1]);
            let next_name = next.name(year);
            let day = hebrew_to_day_number(year, month, 29)?.on_or_before(Weekday::Sat);
            let date = HebrewDate::from_day_number(day)?;
            let molad = Molad::new(year, next)?;
            let desc = self.name.replace("{month}", next_name);
            out.push(HolidayOccurrence::new(date, desc, self.flags).with_molad(molad, next_name));
        }
        Ok(out)
    }
}

/// An ordered list of holiday rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRuleSet {
    rules: Vec<HolidayRule>,
}

impl HolidayRuleSet {
    /// Creates a rule set. Earlier rules win ties on the same day.
    pub fn new(rules: Vec<HolidayRule>) -> Self {
        Self { rules }
    }

    /// Returns the rules in priority order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The standard table of major, minor and modern holidays, special
    /// Sabbaths, Rosh Chodesh and Shabbat Mevarchim.
    pub fn standard() -> Self {
        use Month::*;
        type F = HolidayFlags;

        const SAT_FORWARD: Postponement = Postponement::new(&[(Weekday::Sat, 1)]);
        const SAT_BACK_TO_THU: Postponement = Postponement::new(&[(Weekday::Sat, -2)]);
        const FRI_FORWARD: Postponement = Postponement::new(&[(Weekday::Fri, 1)]);
        const YOM_HASHOAH: Postponement =
            Postponement::new(&[(Weekday::Fri, -1), (Weekday::Sun, 1)]);
        const YOM_HAZIKARON_5708: Postponement =
            Postponement::new(&[(Weekday::Fri, -2), (Weekday::Thu, -1)]);
        const YOM_HAZIKARON_5764: Postponement =
            Postponement::new(&[(Weekday::Fri, -2), (Weekday::Thu, -1), (Weekday::Sun, 1)]);
        const YOM_HAATZMAUT_5708: Postponement =
            Postponement::new(&[(Weekday::Sat, -2), (Weekday::Fri, -1)]);
        const YOM_HAATZMAUT_5764: Postponement =
            Postponement::new(&[(Weekday::Sat, -2), (Weekday::Fri, -1), (Weekday::Mon, 1)]);

        let sat_before = |name, day, month, days, flags| {
            HolidayRule::new(
                name,
                Anchor::SaturdayOnOrBefore { month, day, days },
                flags,
            )
        };
        let offset = |name, day, month, days, flags| {
            HolidayRule::new(name, Anchor::Offset { month, day, days }, flags)
        };

        let mut rules = vec![
            HolidayRule::on(
                "Rosh Hashana {year}",
                1,
                Tishrei,
                F::CHAG | F::LIGHT_CANDLES_TZEIS,
            ),
            HolidayRule::on("Rosh Hashana II", 2, Tishrei, F::CHAG | F::YOM_TOV_ENDS),
            sat_before("Shabbat Shuva", 1, Tishrei, 7, F::SPECIAL_SHABBAT),
            HolidayRule::on("Tzom Gedaliah", 3, Tishrei, F::MINOR_FAST).postponed(SAT_FORWARD),
            HolidayRule::on("Erev Yom Kippur", 9, Tishrei, F::EREV | F::LIGHT_CANDLES),
            HolidayRule::on(
                "Yom Kippur",
                10,
                Tishrei,
                F::CHAG | F::MAJOR_FAST | F::YOM_TOV_ENDS,
            ),
            HolidayRule::on("Erev Sukkot", 14, Tishrei, F::EREV | F::LIGHT_CANDLES),
            HolidayRule::on("Sukkot I", 15, Tishrei, F::CHAG | F::LIGHT_CANDLES_TZEIS),
            HolidayRule::on("Sukkot II", 16, Tishrei, F::CHAG | F::YOM_TOV_ENDS).diaspora(),
            HolidayRule::on("Sukkot II (CH''M)", 16, Tishrei, F::CHOL_HAMOED).israel(),
            HolidayRule::on("Sukkot III (CH''M)", 17, Tishrei, F::CHOL_HAMOED),
            HolidayRule::on("Sukkot IV (CH''M)", 18, Tishrei, F::CHOL_HAMOED),
            HolidayRule::on("Sukkot V (CH''M)", 19, Tishrei, F::CHOL_HAMOED),
            HolidayRule::on("Sukkot VI (CH''M)", 20, Tishrei, F::CHOL_HAMOED),
            HolidayRule::on(
                "Sukkot VII (Hoshana Raba)",
                21,
                Tishrei,
                F::CHOL_HAMOED | F::LIGHT_CANDLES,
            ),
            HolidayRule::on("Shmini Atzeret", 22, Tishrei, F::CHAG | F::LIGHT_CANDLES_TZEIS),
            HolidayRule::on("Simchat Torah", 23, Tishrei, F::CHAG | F::YOM_TOV_ENDS).diaspora(),
        ];

        let candles = [
            "Chanukah: 1 Candle",
            "Chanukah: 2 Candles",
            "Chanukah: 3 Candles",
            "Chanukah: 4 Candles",
            "Chanukah: 5 Candles",
            "Chanukah: 6 Candles",
            "Chanukah: 7 Candles",
            "Chanukah: 8 Candles",
        ];
        for (night, name) in (0..).zip(candles) {
            rules.push(offset(
                name,
                24,
                Kislev,
                night,
                F::CHANUKAH_CANDLES | F::MINOR_HOLIDAY,
            ));
        }
        rules.push(offset("Chanukah: 8th Day", 24, Kislev, 8, F::MINOR_HOLIDAY));

        rules.extend([
            HolidayRule::on("Asara B'Tevet", 10, Tevet, F::MINOR_FAST),
            HolidayRule::on("Tu BiShvat", 15, Shvat, F::MINOR_HOLIDAY),
            sat_before("Shabbat Shirah", 10, Shvat, 6, F::SPECIAL_SHABBAT),
            HolidayRule::on("Purim Katan", 14, AdarI, F::MINOR_HOLIDAY).leap_years_only(),
            sat_before("Shabbat Shekalim", 15, Nisan, -43, F::SPECIAL_SHABBAT),
            sat_before("Shabbat Zachor", 15, Nisan, -30, F::SPECIAL_SHABBAT),
            HolidayRule::on("Ta'anit Esther", 13, AdarII, F::MINOR_FAST)
                .postponed(SAT_BACK_TO_THU),
            sat_before("Shabbat Parah", 15, Nisan, -21, F::SPECIAL_SHABBAT),
            sat_before("Shabbat HaChodesh", 15, Nisan, -14, F::SPECIAL_SHABBAT),
            sat_before("Shabbat HaGadol", 15, Nisan, -1, F::SPECIAL_SHABBAT),
            HolidayRule::on("Ta'anit Bechorot", 14, Nisan, F::MINOR_FAST)
                .postponed(SAT_BACK_TO_THU),
            HolidayRule::on("Erev Purim", 13, AdarII, F::EREV | F::MINOR_HOLIDAY),
            HolidayRule::on("Purim", 14, AdarII, F::MINOR_HOLIDAY),
            HolidayRule::on("Shushan Purim", 15, AdarII, F::MINOR_HOLIDAY)
                .postponed(SAT_FORWARD),
            HolidayRule::on("Erev Pesach", 14, Nisan, F::EREV | F::LIGHT_CANDLES),
            HolidayRule::on("Pesach I", 15, Nisan, F::CHAG | F::LIGHT_CANDLES_TZEIS),
            HolidayRule::on("Pesach II", 16, Nisan, F::CHAG | F::YOM_TOV_ENDS).diaspora(),
            HolidayRule::on("Pesach II (CH''M)", 16, Nisan, F::CHOL_HAMOED).israel(),
            HolidayRule::on("Pesach III (CH''M)", 17, Nisan, F::CHOL_HAMOED),
            HolidayRule::on("Pesach IV (CH''M)", 18, Nisan, F::CHOL_HAMOED),
            HolidayRule::on("Pesach V (CH''M)", 19, Nisan, F::CHOL_HAMOED),
            HolidayRule::on(
                "Pesach VI (CH''M)",
                20,
                Nisan,
                F::CHOL_HAMOED | F::LIGHT_CANDLES,
            ),
            HolidayRule::on("Pesach VII", 21, Nisan, F::CHAG | F::LIGHT_CANDLES_TZEIS),
            HolidayRule::on("Pesach VIII", 22, Nisan, F::CHAG | F::YOM_TOV_ENDS).diaspora(),
            HolidayRule::on("Pesach Sheni", 14, Iyyar, F::MINOR_HOLIDAY),
            HolidayRule::on("Lag BaOmer", 18, Iyyar, F::MINOR_HOLIDAY),
            HolidayRule::on("Erev Shavuot", 5, Sivan, F::EREV | F::LIGHT_CANDLES),
            HolidayRule::on("Shavuot I", 6, Sivan, F::CHAG | F::LIGHT_CANDLES_TZEIS).diaspora(),
            HolidayRule::on("Shavuot II", 7, Sivan, F::CHAG | F::YOM_TOV_ENDS).diaspora(),
            HolidayRule::on("Shavuot", 6, Sivan, F::CHAG | F::YOM_TOV_ENDS).israel(),
            HolidayRule::on("Tzom Tammuz", 17, Tamuz, F::MINOR_FAST).postponed(SAT_FORWARD),
            HolidayRule::on("Erev Tish'a B'Av", 8, Av, F::EREV | F::MAJOR_FAST)
                .postponed(FRI_FORWARD),
            HolidayRule::on("Tish'a B'Av", 9, Av, F::MAJOR_FAST)
                .postponed(SAT_FORWARD.with_suffix(" (observed)")),
            sat_before("Shabbat Chazon", 9, Av, 0, F::SPECIAL_SHABBAT),
            sat_before("Shabbat Nachamu", 9, Av, 7, F::SPECIAL_SHABBAT),
            HolidayRule::on("Tu B'Av", 15, Av, F::MINOR_HOLIDAY),
            sat_before("Leil Selichot", 29, Elul, -3, F::MINOR_HOLIDAY),
            HolidayRule::on("Erev Rosh Hashana", 29, Elul, F::EREV | F::LIGHT_CANDLES),
            HolidayRule::on("Yom HaShoah", 27, Nisan, F::MODERN_HOLIDAY)
                .postponed(YOM_HASHOAH)
                .since(5711),
            HolidayRule::on("Yom HaZikaron", 4, Iyyar, F::MODERN_HOLIDAY)
                .postponed(YOM_HAZIKARON_5708)
                .since(5708)
                .until(5763),
            HolidayRule::on("Yom HaZikaron", 4, Iyyar, F::MODERN_HOLIDAY)
                .postponed(YOM_HAZIKARON_5764)
                .since(5764),
            HolidayRule::on("Yom HaAtzma'ut", 5, Iyyar, F::MODERN_HOLIDAY)
                .postponed(YOM_HAATZMAUT_5708)
                .since(5708)
                .until(5763),
            HolidayRule::on("Yom HaAtzma'ut", 5, Iyyar, F::MODERN_HOLIDAY)
                .postponed(YOM_HAATZMAUT_5764)
                .since(5764),
            HolidayRule::on("Yom Yerushalayim", 28, Iyyar, F::MODERN_HOLIDAY).since(5727),
            HolidayRule::on("Sigd", 29, Cheshvan, F::MODERN_HOLIDAY).since(5769),
            HolidayRule::new("Rosh Chodesh {month}", Anchor::RoshChodesh, F::ROSH_CHODESH),
            HolidayRule::new(
                "Shabbat Mevarchim Chodesh {month}",
                Anchor::Mevarchim,
                F::SHABBAT_MEVARCHIM,
            ),
        ]);

        Self::new(rules)
    }
}

impl Default for HolidayRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
