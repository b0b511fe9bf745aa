//! Molad command: mean conjunction times for a year's months.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info_span};

use luach_calendar::{HebrewDate, Molad, Month, gregorian, months_of_year};

use crate::cli::MoladArgs;
use crate::config::LuachConfig;
use crate::convert;
use crate::output::emit;

#[derive(Debug, Serialize)]
struct MoladRow {
    month: &'static str,
    civil: String,
    /// Absent for the molad of Tishrei AM 1, which precedes the first day.
    #[serde(skip_serializing_if = "Option::is_none")]
    hebrew: Option<String>,
    hour: u8,
    minutes: u8,
    chalakim: u8,
    text: String,
}

/// Run the molad listing.
pub fn run(args: MoladArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("molad", year = args.year).entered();
    let format = convert::resolve_format(args.format, config)?;

    let months: Vec<Month> = match &args.month {
        Some(name) => vec![convert::parse_month(name, args.year)?],
        None => months_of_year(args.year).collect(),
    };
    let rows = months
        .into_iter()
        .map(|month| molad_row(args.year, month))
        .collect::<Result<Vec<_>>>()?;
    debug!(rows = rows.len(), "molad rows");

    emit(&rows, format, |rows| {
        rows.iter()
            .map(|row| format!("{:<8} {}  ({})", row.month, row.text, row.civil))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn molad_row(year: i32, month: Month) -> Result<MoladRow> {
    let molad = Molad::new(year, month)?;
    let civil = gregorian::from_day_number(molad.day_number())?;
    Ok(MoladRow {
        month: month.name(year),
        civil: civil.format("%Y-%m-%d").to_string(),
        hebrew: HebrewDate::from_day_number(molad.day_number())
            .ok()
            .map(|date| date.to_string()),
        hour: molad.hour(),
        minutes: molad.minutes(),
        chalakim: molad.chalakim_in_minute(),
        text: molad.to_string(),
    })
}
