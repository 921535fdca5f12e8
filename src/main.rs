mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use hijri_date::{CalendarDate, Direction, DualDate, convert_str};
use tracing::info;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(&cli, &mut stdout) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::ToHijri(args) => convert_cmd(Direction::GregorianToHijri, &args.date, cli.json, out),
        Command::ToGregorian(args) => convert_cmd(Direction::HijriToGregorian, &args.date, cli.json, out),
        Command::Show(args) => {
            let date = CalendarDate::parse(args.calendar, &args.date)
                .with_context(|| format!("cannot read {:?} as a {} date", args.date, args.calendar))?;
            let dual = DualDate::from(date);
            info!(jdn = %dual.jdn, "show");
            if cli.json {
                serde_json::to_writer(&mut *out, &dual)?;
                writeln!(out)?;
            } else {
                writeln!(out, "JDN: {}", dual.jdn)?;
                writeln!(out, "GREGORIAN: {}", dual.gregorian)?;
                writeln!(out, "HIJRI: {}", dual.hijri)?;
            }
            Ok(())
        }
    }
}

fn convert_cmd(direction: Direction, input: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let converted = convert_str(direction, input)
        .with_context(|| format!("cannot convert {input:?} ({direction})"))?;
    info!(%direction, input, %converted, "converted");
    if json {
        serde_json::to_writer(&mut *out, &converted)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{converted}")?;
    }
    Ok(())
}
