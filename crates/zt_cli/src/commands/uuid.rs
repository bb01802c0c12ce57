//! UUID commands - Generate and validate UUIDs.

use anyhow::Result;
use clap::{Args, Subcommand};

use zt_security::{generate_uuids, validate_batch, UuidFormat, UuidOptions, UuidVersion};

use super::{CliError, Context, InputArgs};

#[derive(Subcommand)]
pub enum UuidCommand {
    /// Generate UUIDs
    Generate(GenerateArgs),

    /// Validate UUIDs, one per line
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// How many to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// v4 (random) or v7 (time ordered)
    #[arg(short, long)]
    kind: Option<String>,

    /// hyphenated, simple, urn or braced
    #[arg(short, long, default_value = "hyphenated")]
    style: String,

    /// Uppercase hex digits
    #[arg(short, long)]
    uppercase: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,
}

pub async fn execute(command: UuidCommand, ctx: &Context) -> Result<()> {
    match command {
        UuidCommand::Generate(args) => generate(args, ctx),
        UuidCommand::Validate(args) => validate(args, ctx).await,
    }
}

fn generate(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let defaults = &ctx.config.uuid;
    let options = UuidOptions {
        version: args
            .kind
            .as_deref()
            .unwrap_or(&defaults.version)
            .parse::<UuidVersion>()?,
        format: args.style.parse::<UuidFormat>()?,
        uppercase: args.uppercase || defaults.uppercase,
    };

    let ids = generate_uuids(args.count.unwrap_or(defaults.count), &options)?;
    ctx.emit(&ids, || ids.join("\n"))
}

async fn validate(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let text = args.input.read_text().await?;
    let report = validate_batch(&text);
    ctx.emit(&report, || report.render().trim_end_matches('\n').to_string())?;

    if !report.all_valid {
        let invalid = report.checks.iter().filter(|c| !c.valid).count();
        return Err(CliError::InvalidInput(format!(
            "{} of {} line(s) are not valid UUIDs",
            invalid,
            report.checks.len()
        ))
        .into());
    }
    Ok(())
}
