use clap::{Parser, Subcommand};
use hijri_date::Calendar;

/// Gregorian <-> Hijri date converter.
#[derive(Debug, Parser)]
#[command(
    name = "hijri",
    version,
    about = "Convert dates between the Gregorian and tabular Hijri calendars"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to Hijri.
    ToHijri(DateArgs),
    /// Convert a Hijri date to Gregorian.
    ToGregorian(DateArgs),
    /// Show a date on both calendars along with its Julian day number.
    Show(ShowArgs),
}

/// Arguments for the `to-hijri` and `to-gregorian` subcommands.
#[derive(Debug, clap::Args)]
pub struct DateArgs {
    /// Date as YYYY-MM-DD (a leading '-' marks a negative year).
    #[arg(allow_hyphen_values = true)]
    pub date: String,
}

/// Arguments for the `show` subcommand.
#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Date as YYYY-MM-DD (a leading '-' marks a negative year).
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Calendar the date is written in (gregorian or hijri).
    #[arg(short, long, default_value = "gregorian")]
    pub calendar: Calendar,
}
