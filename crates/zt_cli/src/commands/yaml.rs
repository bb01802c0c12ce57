//! YAML commands - Validate and compare YAML documents.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use zt_text::{compare_yaml, validate_yaml};

use super::{comparison_outcome, read_file_text, render_comparison, CliError, Context, InputArgs};

#[derive(Subcommand)]
pub enum YamlCommand {
    /// Check that YAML parses as a single document
    Validate(ValidateArgs),

    /// Compare two YAML files by their data
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Left document
    left: PathBuf,

    /// Right document
    right: PathBuf,
}

pub async fn execute(command: YamlCommand, ctx: &Context) -> Result<()> {
    match command {
        YamlCommand::Validate(args) => {
            let text = args.input.read_text().await?;
            let check = validate_yaml(&text);
            ctx.emit(&check, || check.status.to_string())?;

            match check.error {
                None => Ok(()),
                Some(error) => {
                    let location = match (error.line, error.column) {
                        (Some(line), Some(column)) => format!(" at line {}, column {}", line, column),
                        _ => String::new(),
                    };
                    Err(CliError::InvalidInput(format!("Invalid YAML{}: {}", location, error.message)).into())
                }
            }
        }
        YamlCommand::Compare(args) => {
            let left = read_file_text(&args.left).await?;
            let right = read_file_text(&args.right).await?;
            let comparison = compare_yaml(&left, &right);
            ctx.emit(&comparison, || render_comparison(&comparison))?;
            comparison_outcome(&comparison)
        }
    }
}
