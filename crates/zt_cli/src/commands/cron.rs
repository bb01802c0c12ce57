//! Cron command - Validate, schedule and describe a cron expression.

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use serde::Serialize;

use zt_time::{CronExpression, CronReport};

use super::Context;

#[derive(Args)]
pub struct CronArgs {
    /// Expression with 5, 6 or 7 fields, quoted
    expression: String,

    /// Number of upcoming runs to show
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Time zone (IANA name), defaults to the configured one
    #[arg(long)]
    tz: Option<String>,
}

#[derive(Serialize)]
struct CronOutput {
    #[serde(flatten)]
    report: CronReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    upcoming: Vec<String>,
}

pub async fn execute(args: CronArgs, ctx: &Context) -> Result<()> {
    let tz = ctx.timezone(args.tz.as_deref())?;
    let now = Utc::now();

    let cron = match CronExpression::parse(&args.expression) {
        Ok(cron) => cron,
        Err(e) => {
            // Print the status, then surface the parser's reason.
            let report = CronReport::invalid();
            ctx.emit(&report, || report.status.to_string())?;
            return Err(e.into());
        }
    };

    let upcoming = if args.count > 1 {
        cron.upcoming(now, tz, args.count)
    } else {
        Vec::new()
    };

    let result = CronOutput {
        report: cron.report(now, tz),
        upcoming,
    };
    ctx.emit(&result, || {
        let mut lines = vec![
            format!("Status: {}", result.report.status),
            format!("Description: {}", result.report.description),
        ];
        if result.upcoming.is_empty() {
            let next = if result.report.next.is_empty() {
                "none"
            } else {
                result.report.next.as_str()
            };
            lines.push(format!("Next: {}", next));
        } else {
            lines.push("Upcoming:".to_string());
            lines.extend(result.upcoming.iter().map(|run| format!("  {}", run)));
        }
        lines.join("\n")
    })
}
