use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use iseries_date::{CalendarDate, ConvertError, DateError, DateSync, ISeriesOffset, Input};

use crate::cli::{FromOffsetArgs, OutputFormat, ToOffsetArgs};
use crate::config::Settings;

/// One converted pair as printed to stdout.
#[derive(Debug, Serialize)]
struct Conversion {
    date:   String,
    offset: ISeriesOffset,
    epoch:  String,
}

fn render(settings: &Settings, date: CalendarDate, offset: ISeriesOffset) -> Result<String> {
    let conversion = Conversion {
        date: date.format(settings.date_style),
        offset,
        epoch: settings.converter.epoch().format(settings.date_style),
    };
    match settings.format {
        OutputFormat::Text => Ok(format!("{}\t{}", conversion.date, conversion.offset)),
        OutputFormat::Json => serde_json::to_string(&conversion).context("failed to encode JSON output"),
    }
}

/// `to-offset`: date in, offset out.
pub fn to_offset(args: &ToOffsetArgs, settings: &Settings) -> Result<()> {
    let date: CalendarDate = args
        .date
        .parse()
        .with_context(|| format!("cannot convert {:?}", args.date))?;
    let offset = settings.converter.to_offset(date);
    info!(%date, %offset, "converted date to offset");
    println!("{}", render(settings, date, offset)?);
    Ok(())
}

/// `from-offset`: offset in, date out.
pub fn from_offset(args: &FromOffsetArgs, settings: &Settings) -> Result<()> {
    let date = settings
        .converter
        .from_offset_i64(args.offset)
        .with_context(|| format!("cannot convert offset {}", args.offset))?;
    let offset = settings.converter.to_offset(date);
    info!(%offset, %date, "converted offset to date");
    println!("{}", render(settings, date, offset)?);
    Ok(())
}

/// `today`: the pair the converter opens on.
pub fn today(settings: &Settings) -> Result<()> {
    let sync = DateSync::today(settings.converter).context("cannot determine today's date")?;
    println!("{}", render(settings, sync.date(), sync.offset())?);
    Ok(())
}

/// `interactive`: a line-oriented stand-in for the calendar and spinner.
pub fn interactive(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let sync = DateSync::today(settings.converter).context("cannot determine today's date")?;
    run_session(settings, sync, stdin.lock(), stdout.lock(), stderr.lock())?;
    Ok(())
}

/// Drives a [`DateSync`] from input lines and returns its final state.
///
/// Each line is a date, an offset, or a `year month day` triple numbered per
/// the configured month base. Rejected lines are reported on `errors` and
/// leave the pair as it was.
fn run_session<R, W, E>(settings: &Settings, mut sync: DateSync, input: R, mut out: W, mut errors: E) -> Result<DateSync>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(out, "{}", render(settings, sync.date(), sync.offset())?)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "exit") {
            break;
        }

        match apply_line(settings, &mut sync, trimmed) {
            Ok(()) => {
                debug!(date = %sync.date(), offset = %sync.offset(), "state updated");
                writeln!(out, "{}", render(settings, sync.date(), sync.offset())?)?;
            },
            Err(e) => {
                debug!(input = trimmed, error = %e, "rejected input");
                writeln!(errors, "error: {e}")?;
            },
        }
    }

    out.flush()?;
    Ok(sync)
}

fn apply_line(settings: &Settings, sync: &mut DateSync, line: &str) -> Result<(), ConvertError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if let [year, month, day] = fields.as_slice() {
        let year = parse_field::<u16>(year)?;
        let month = parse_field::<u8>(month)?;
        let day = parse_field::<u8>(day)?;
        return sync.select_ymd(year, month, day, settings.month_base).map(|_| ());
    }
    let input: Input = line.parse()?;
    sync.apply(input)
}

fn parse_field<T: std::str::FromStr>(s: &str) -> Result<T, DateError> {
    s.parse::<T>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
}
