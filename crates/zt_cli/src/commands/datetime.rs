//! Datetime commands - Converter and calculator.

use anyhow::Result;
use chrono::Utc;
use clap::{ArgGroup, Args, Subcommand};
use tracing::debug;

use zt_time::{
    difference, format_datetime, from_timestamp, now_pair, parse_epoch, shift, to_timestamp,
    EpochUnit, TimeUnit,
};

use super::{CliError, Context, TextOutput};

#[derive(Subcommand)]
pub enum DatetimeCommand {
    /// Convert a date-time to a Unix timestamp, or back with --decode
    Convert(ConvertArgs),

    /// Add and subtract an amount, or measure the span to --to
    Calc(CalcArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Date-time, or timestamp with --decode
    #[arg(required_unless_present = "now")]
    value: Option<String>,

    /// Timestamp to date-time
    #[arg(short, long)]
    decode: bool,

    /// Timestamp unit for --decode: seconds, millis or auto
    #[arg(long, default_value = "seconds")]
    unit: String,

    /// Time zone (IANA name), defaults to the configured one
    #[arg(long)]
    tz: Option<String>,

    /// Print the current time both ways
    #[arg(long, conflicts_with_all = ["value", "decode"])]
    now: bool,
}

#[derive(Args)]
#[command(group(ArgGroup::new("operation").required(true).args(["amount", "to"])))]
pub struct CalcArgs {
    /// Start date-time, defaults to now
    from: Option<String>,

    /// Amount to add and subtract, may be fractional
    #[arg(short, long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// Unit of --amount: ms, s, m, h, d, w, M, Q or y
    #[arg(short, long, default_value = "d")]
    unit: String,

    /// Second date-time; prints the span between the two
    #[arg(long)]
    to: Option<String>,

    /// Time zone (IANA name), defaults to the configured one
    #[arg(long)]
    tz: Option<String>,
}

pub async fn execute(command: DatetimeCommand, ctx: &Context) -> Result<()> {
    match command {
        DatetimeCommand::Convert(args) => convert(args, ctx),
        DatetimeCommand::Calc(args) => calc(args, ctx),
    }
}

fn parse_unit(unit: &str, value: i64) -> Result<EpochUnit> {
    match unit.to_ascii_lowercase().as_str() {
        "s" | "sec" | "seconds" => Ok(EpochUnit::Seconds),
        "ms" | "millis" | "milliseconds" => Ok(EpochUnit::Millis),
        "auto" => Ok(EpochUnit::detect(value)),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown timestamp unit: {} (expected seconds, millis or auto)",
            other
        ))
        .into()),
    }
}

fn convert(args: ConvertArgs, ctx: &Context) -> Result<()> {
    let tz = ctx.timezone(args.tz.as_deref())?;

    if args.now {
        let pair = now_pair(Utc::now(), tz);
        return ctx.emit(&pair, || {
            format!("{}\n{}", pair.datetime, pair.timestamp.millis)
        });
    }

    let value = args
        .value
        .ok_or_else(|| CliError::InvalidArgument("A value is required".to_string()))?;

    if args.decode {
        let epoch = parse_epoch(&value)?;
        let unit = parse_unit(&args.unit, epoch)?;
        debug!("Decoding {} as {:?} in {}", epoch, unit, tz);
        let result = TextOutput {
            output: from_timestamp(epoch, unit, tz)?,
        };
        ctx.emit(&result, || result.output.clone())
    } else {
        let timestamp = to_timestamp(&value, tz)?;
        ctx.emit(&timestamp, || timestamp.millis.to_string())
    }
}

fn calc(args: CalcArgs, ctx: &Context) -> Result<()> {
    let tz = ctx.timezone(args.tz.as_deref())?;
    let from = args
        .from
        .unwrap_or_else(|| format_datetime(&Utc::now().with_timezone(&tz)));

    if let Some(to) = &args.to {
        let span = difference(&from, to, tz)?;
        return ctx.emit(&span, || span.render());
    }

    let amount = args
        .amount
        .ok_or_else(|| CliError::InvalidArgument("--amount or --to is required".to_string()))?;
    let unit: TimeUnit = args.unit.parse()?;
    let shifted = shift(&from, &amount, unit, tz)?;
    ctx.emit(&shifted, || shifted.render())
}
