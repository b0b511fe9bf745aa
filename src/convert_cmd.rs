//! Convert command: show one date in both calendars.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use luach_calendar::HebrewDate;
use luach_holidays::HolidayGenerator;

use crate::cli::ConvertArgs;
use crate::config::LuachConfig;
use crate::convert;
use crate::output::emit;

#[derive(Debug, Serialize)]
struct ConvertedDate {
    hebrew: String,
    civil: String,
    weekday: String,
    day_number: i64,
    holidays: Vec<String>,
}

/// Run the date conversion.
pub fn run(args: ConvertArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let format = convert::resolve_format(args.format, config)?;

    let parts: Vec<&str> = args.date.iter().map(String::as_str).collect();
    let date = HebrewDate::from_parts(&parts)
        .with_context(|| format!("cannot read date: {}", args.date.join(" ")))?;
    info!(day_number = date.day_number().get(), "date resolved");

    let generator = HolidayGenerator::new(convert::build_generator_config(&config.holidays)?);
    let holidays = generator
        .on_date(date)?
        .unwrap_or_default()
        .iter()
        .map(|occ| occ.desc().to_string())
        .collect();

    let civil = date.to_civil()?;
    let row = ConvertedDate {
        hebrew: date.to_string(),
        civil: civil.format("%Y-%m-%d").to_string(),
        weekday: civil.format("%A").to_string(),
        day_number: date.day_number().get(),
        holidays,
    };

    emit(&row, format, render)
}

fn render(row: &ConvertedDate) -> String {
    let mut out = format!(
        "{} = {} ({}, day {})",
        row.civil, row.hebrew, row.weekday, row.day_number
    );
    for holiday in &row.holidays {
        out.push_str("\n  ");
        out.push_str(holiday);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lists_holidays() {
        let row = ConvertedDate {
            hebrew: "30 Kislev 5771".to_string(),
            civil: "2010-12-07".to_string(),
            weekday: "Tuesday".to_string(),
            day_number: 734113,
            holidays: vec![
                "Chanukah: 7 Candles".to_string(),
                "Rosh Chodesh Tevet".to_string(),
            ],
        };
        assert_eq!(
            render(&row),
            "2010-12-07 = 30 Kislev 5771 (Tuesday, day 734113)\n  Chanukah: 7 Candles\n  Rosh Chodesh Tevet"
        );
    }
}
