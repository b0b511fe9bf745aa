//! Capability flags attached to holiday occurrences.

bitflags::bitflags! {
    /// What an observance is and how it is kept.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HolidayFlags: u32 {
        /// Yom tov: work is prohibited.
        const CHAG = 1 << 0;
        /// Candles are lit before sundown.
        const LIGHT_CANDLES = 1 << 1;
        /// The last day of a yom tov.
        const YOM_TOV_ENDS = 1 << 2;
        /// Observed only in the Diaspora.
        const CHUL_ONLY = 1 << 3;
        /// Observed only in Israel.
        const IL_ONLY = 1 << 4;
        /// Candles are lit after nightfall.
        const LIGHT_CANDLES_TZEIS = 1 << 5;
        const CHANUKAH_CANDLES = 1 << 6;
        const ROSH_CHODESH = 1 << 7;
        const MINOR_FAST = 1 << 8;
        const SPECIAL_SHABBAT = 1 << 9;
        const MODERN_HOLIDAY = 1 << 10;
        const MAJOR_FAST = 1 << 11;
        const SHABBAT_MEVARCHIM = 1 << 12;
        const MINOR_HOLIDAY = 1 << 13;
        /// The day before a holiday.
        const EREV = 1 << 14;
        /// The intermediate days of Sukkot and Pesach.
        const CHOL_HAMOED = 1 << 15;
    }
}

impl HolidayFlags {
    /// Parses a flag name such as `minor_fast` in any letter case.
    ///
    /// The generated [`HolidayFlags::from_name`] only matches the exact
    /// constant name (`MINOR_FAST`).
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::all()
            .iter_names()
            .find(|(flag, _)| flag.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }
}

impl Default for HolidayFlags {
    fn default() -> Self {
        HolidayFlags::empty()
    }
}
