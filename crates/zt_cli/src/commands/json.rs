//! JSON commands - View and compare JSON documents.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use zt_core::Validity;
use zt_text::{compare_json, JsonDocument};

use super::{comparison_outcome, read_file_text, render_comparison, Context, InputArgs};

#[derive(Subcommand)]
pub enum JsonCommand {
    /// Validate JSON and show it as an outline, pretty or compact
    View(ViewArgs),

    /// Compare two JSON files ignoring key order
    Compare(CompareArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ViewMode {
    Outline,
    Pretty,
    Compact,
}

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    input: InputArgs,

    /// How to show the document
    #[arg(short, long, value_enum, default_value_t = ViewMode::Outline)]
    mode: ViewMode,

    /// Indent width for pretty output
    #[arg(long)]
    indent: Option<usize>,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Left document
    left: PathBuf,

    /// Right document
    right: PathBuf,
}

#[derive(Serialize)]
struct ViewOutput {
    status: Validity,
    output: String,
}

pub async fn execute(command: JsonCommand, ctx: &Context) -> Result<()> {
    match command {
        JsonCommand::View(args) => view(args, ctx).await,
        JsonCommand::Compare(args) => {
            let left = read_file_text(&args.left).await?;
            let right = read_file_text(&args.right).await?;
            let comparison = compare_json(&left, &right);
            ctx.emit(&comparison, || render_comparison(&comparison))?;
            comparison_outcome(&comparison)
        }
    }
}

async fn view(args: ViewArgs, ctx: &Context) -> Result<()> {
    let text = args.input.read_text().await?;
    let document = JsonDocument::parse(&text).context("JSON input is invalid")?;

    let output = match args.mode {
        ViewMode::Outline => document.outline().trim_end().to_string(),
        ViewMode::Pretty => document.pretty(args.indent.unwrap_or(ctx.config.beautify.indent))?,
        ViewMode::Compact => document.minified(),
    };

    let result = ViewOutput {
        status: Validity::Valid,
        output,
    };
    ctx.emit(&result, || result.output.clone())
}
