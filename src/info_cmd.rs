//! Info command: the shape of one Hebrew year.

use anyhow::Result;
use serde::Serialize;
use tracing::info_span;

use luach_calendar::{HebrewDate, YearInfo, days_in_month, months_of_year};

use crate::cli::InfoArgs;
use crate::config::LuachConfig;
use crate::convert;
use crate::output::emit;

#[derive(Debug, Serialize)]
struct YearSummary {
    year: i32,
    leap: bool,
    length: u16,
    kind: String,
    rosh_hashana: String,
    months: Vec<MonthSummary>,
}

#[derive(Debug, Serialize)]
struct MonthSummary {
    name: &'static str,
    days: u8,
    starts: String,
}

/// Run the year summary.
pub fn run(args: InfoArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("info", year = args.year).entered();
    let format = convert::resolve_format(args.format, config)?;
    emit(&summarise(args.year)?, format, render)
}

fn summarise(year: i32) -> Result<YearSummary> {
    let info = YearInfo::new(year)?;
    let months = months_of_year(year)
        .map(|month| -> Result<MonthSummary> {
            let first = HebrewDate::new(1, month, year)?;
            Ok(MonthSummary {
                name: first.month_name(),
                days: days_in_month(month, year),
                starts: first.to_civil()?.format("%Y-%m-%d").to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let rosh_hashana = HebrewDate::from_day_number(info.new_year)?.to_civil()?;

    Ok(YearSummary {
        year,
        leap: info.is_leap,
        length: info.length,
        kind: info.kind.to_string(),
        rosh_hashana: rosh_hashana.format("%Y-%m-%d").to_string(),
        months,
    })
}

fn render(summary: &YearSummary) -> String {
    let mut out = format!(
        "{}: {} days, {}{}, Rosh Hashana {}",
        summary.year,
        summary.length,
        summary.kind,
        if summary.leap { ", leap" } else { "" },
        summary.rosh_hashana
    );
    for month in &summary.months {
        out.push_str(&format!(
            "\n  {:<9} {:>2} days  from {}",
            month.name, month.days, month.starts
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_5771() {
        let summary = summarise(5771).unwrap();
        assert!(summary.leap);
        assert_eq!(summary.length, 385);
        assert_eq!(summary.rosh_hashana, "2010-09-09");
        assert_eq!(summary.months.len(), 13);
        assert_eq!(summary.months[0].name, "Tishrei");
        assert_eq!(summary.months[5].name, "Adar I");
        assert_eq!(summary.months[12].name, "Elul");
        let total: u16 = summary.months.iter().map(|m| u16::from(m.days)).sum();
        assert_eq!(total, summary.length);
    }

    #[test]
    fn unsupported_year() {
        assert!(summarise(0).is_err());
    }
}
