//! Holidays command: list observances for a range of years.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use luach_calendar::HebrewDate;
use luach_holidays::{HolidayGenerator, HolidayOccurrence};

use crate::cli::HolidaysArgs;
use crate::config::{HolidaysToml, LuachConfig};
use crate::convert;
use crate::output::emit;

#[derive(Debug, Serialize)]
struct HolidayRow {
    civil: String,
    hebrew: String,
    desc: String,
    basename: String,
    flags: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    observed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    memo: Option<String>,
}

/// Run the holiday listing.
pub fn run(args: HolidaysArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("holidays").entered();
    let format = convert::resolve_format(args.format, config)?;
    let generator = HolidayGenerator::new(convert::build_generator_config(&effective_settings(
        &args,
        &config.holidays,
    ))?);

    let occurrences = match args.civil_year {
        Some(year) => generator
            .for_civil_years(year, args.years)
            .with_context(|| format!("failed to list holidays for civil year {year}"))?,
        None => {
            let year = match args.year {
                Some(year) => year,
                None => HebrewDate::from_civil(chrono::Local::now().date_naive())?.year(),
            };
            generator
                .for_hebrew_years(year, args.years as usize)
                .with_context(|| format!("failed to list holidays for year {year}"))?
        }
    };
    info!(occurrences = occurrences.len(), "holidays listed");

    let rows = occurrences
        .iter()
        .map(to_row)
        .collect::<Result<Vec<_>>>()?;
    emit(&rows, format, |rows| {
        rows.iter().map(render_row).collect::<Vec<_>>().join("\n")
    })
}

/// Applies CLI overrides on top of the configured holiday settings.
fn effective_settings(args: &HolidaysArgs, holidays: &HolidaysToml) -> HolidaysToml {
    HolidaysToml {
        locale: args
            .locale
            .clone()
            .unwrap_or_else(|| holidays.locale.clone()),
        exclude: if args.exclude.is_empty() {
            holidays.exclude.clone()
        } else {
            args.exclude.clone()
        },
    }
}

fn to_row(occ: &HolidayOccurrence) -> Result<HolidayRow> {
    Ok(HolidayRow {
        civil: occ.date().to_civil()?.format("%Y-%m-%d").to_string(),
        hebrew: occ.date().to_string(),
        desc: occ.desc().to_string(),
        basename: occ.basename().to_string(),
        flags: occ
            .flags()
            .iter_names()
            .map(|(name, _)| name.to_lowercase())
            .collect(),
        observed: occ.observed(),
        memo: occ.memo().map(str::to_string),
    })
}

fn render_row(row: &HolidayRow) -> String {
    match &row.memo {
        Some(memo) => format!("{}  {}  ({memo})", row.civil, row.desc),
        None => format!("{}  {}", row.civil, row.desc),
    }
}
