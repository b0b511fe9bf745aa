//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, anyhow, bail};

use luach_calendar::Month;
use luach_holidays::{GeneratorConfig, HolidayFlags, Locale};

use crate::cli::Format;
use crate::config::{HolidaysToml, LuachConfig};

/// Parses a locale name. `any` keeps the observances of every locale.
pub fn parse_locale(s: &str) -> Result<Option<Locale>> {
    if s.eq_ignore_ascii_case("any") {
        return Ok(None);
    }
    s.parse::<Locale>().map(Some).map_err(|e| anyhow!(e))
}

/// Parses an exclusion category into the flags it covers.
///
/// Besides the named categories, any single flag name such as `chag` or
/// `erev` is accepted.
pub fn parse_category(s: &str) -> Result<HolidayFlags> {
    let flags = match s.to_lowercase().as_str() {
        "modern" => HolidayFlags::MODERN_HOLIDAY,
        "rosh_chodesh" => HolidayFlags::ROSH_CHODESH,
        "special_shabbat" => HolidayFlags::SPECIAL_SHABBAT,
        "minor_fasts" => HolidayFlags::MINOR_FAST,
        "mevarchim" => HolidayFlags::SHABBAT_MEVARCHIM,
        "minor_holidays" => HolidayFlags::MINOR_HOLIDAY,
        other => match HolidayFlags::from_name_ignore_case(other) {
            Some(flag) => flag,
            None => bail!("unknown holiday category: {other:?}"),
        },
    };
    Ok(flags)
}

/// Parses an output format name.
pub fn parse_format(s: &str) -> Result<Format> {
    match s.to_lowercase().as_str() {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Picks the CLI format if given, else the configured one.
pub fn resolve_format(cli: Option<Format>, config: &LuachConfig) -> Result<Format> {
    match cli {
        Some(format) => Ok(format),
        None => parse_format(&config.output.format),
    }
}

/// Resolves a month given as an ordinal (`1` = Nisan) or a name.
///
/// Ordinal 13 (Adar II) exists only in leap years.
pub fn parse_month(s: &str, year: i32) -> Result<Month> {
    if let Ok(ordinal) = s.parse::<u8>() {
        return Ok(Month::from_ordinal_in_year(ordinal, year)?);
    }
    Ok(Month::resolve_name(s, year)?)
}

/// Builds a [`GeneratorConfig`] from the TOML holidays configuration.
pub fn build_generator_config(holidays: &HolidaysToml) -> Result<GeneratorConfig> {
    let locale = parse_locale(&holidays.locale)?;
    let mut exclude = HolidayFlags::empty();
    for category in &holidays.exclude {
        exclude |= parse_category(category)?;
    }
    Ok(GeneratorConfig::new()
        .with_locale(locale)
        .with_exclude(exclude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locales() {
        assert_eq!(parse_locale("Israel").unwrap(), Some(Locale::Israel));
        assert_eq!(parse_locale("diaspora").unwrap(), Some(Locale::Diaspora));
        assert_eq!(parse_locale("ANY").unwrap(), None);
        assert!(parse_locale("mars").is_err());
    }

    #[test]
    fn categories() {
        assert_eq!(
            parse_category("minor_fasts").unwrap(),
            HolidayFlags::MINOR_FAST
        );
        assert_eq!(
            parse_category("Mevarchim").unwrap(),
            HolidayFlags::SHABBAT_MEVARCHIM
        );
        assert_eq!(parse_category("erev").unwrap(), HolidayFlags::EREV);
        assert_eq!(
            parse_category("chol_hamoed").unwrap(),
            HolidayFlags::CHOL_HAMOED
        );
        assert!(parse_category("sports").is_err());
    }

    #[test]
    fn formats() {
        assert_eq!(parse_format("JSON").unwrap(), Format::Json);
        assert!(parse_format("yaml").is_err());
        let config = LuachConfig::default();
        assert_eq!(resolve_format(None, &config).unwrap(), Format::Text);
        assert_eq!(
            resolve_format(Some(Format::Json), &config).unwrap(),
            Format::Json
        );
    }

    #[test]
    fn months() {
        assert_eq!(parse_month("7", 5771).unwrap(), Month::Tishrei);
        assert_eq!(parse_month("Tevet", 5769).unwrap(), Month::Tevet);
        assert_eq!(parse_month("Adar II", 5770).unwrap(), Month::AdarI);
        assert!(parse_month("Adar", 5771).is_err());
        assert!(parse_month("14", 5771).is_err());
        assert_eq!(parse_month("13", 5771).unwrap(), Month::AdarII);
        assert!(parse_month("13", 5780).is_err());
        assert!(parse_month("Brumaire", 5771).is_err());
    }

    #[test]
    fn generator_config() {
        let toml = HolidaysToml {
            locale: "israel".to_string(),
            exclude: vec!["modern".to_string(), "rosh_chodesh".to_string()],
        };
        let config = build_generator_config(&toml).unwrap();
        assert_eq!(config.locale(), Some(Locale::Israel));
        assert_eq!(
            config.exclude(),
            HolidayFlags::MODERN_HOLIDAY | HolidayFlags::ROSH_CHODESH
        );

        let bad = HolidaysToml {
            locale: "diaspora".to_string(),
            exclude: vec!["nope".to_string()],
        };
        assert!(build_generator_config(&bad).is_err());
    }
}
