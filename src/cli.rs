use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Luach Hebrew calendar tool.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar conversion and holiday listings"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: luach.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a civil date, day number or Hebrew date.
    Convert(ConvertArgs),
    /// Show the structure of a Hebrew year.
    Info(InfoArgs),
    /// Show the molad of one month or of every month in a year.
    Molad(MoladArgs),
    /// List holidays for Hebrew or civil years.
    Holidays(HolidaysArgs),
}

/// Output format shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// A day number, an ISO civil date (2010-12-07), or DAY MONTH YEAR.
    #[arg(required = true, num_args = 1..=3, allow_hyphen_values = true)]
    pub date: Vec<String>,

    /// Override output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}

/// Arguments for the `info` subcommand.
#[derive(clap::Args)]
pub struct InfoArgs {
    /// Hebrew year.
    pub year: i32,

    /// Override output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}

/// Arguments for the `molad` subcommand.
#[derive(clap::Args)]
pub struct MoladArgs {
    /// Hebrew year.
    pub year: i32,

    /// Month name or number; every month of the year when omitted.
    pub month: Option<String>,

    /// Override output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Hebrew year to list.
    #[arg(long, conflicts_with = "civil_year")]
    pub year: Option<i32>,

    /// Civil year to list instead of a Hebrew year.
    #[arg(long = "civil-year")]
    pub civil_year: Option<i32>,

    /// Number of consecutive years.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub years: u32,

    /// Override locale from config (diaspora, israel, any).
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Exclude a category (repeatable); replaces the config list.
    #[arg(short = 'x', long)]
    pub exclude: Vec<String>,

    /// Override output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}
