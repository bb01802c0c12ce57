//! Regex commands - Browse and test regex templates.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use zt_text::{find_template, templates, test_pattern};

use super::{CliError, Context, InputArgs};

#[derive(Subcommand)]
pub enum RegexCommand {
    /// List the templates
    List,

    /// Show one template
    Show(ShowArgs),

    /// Test input against a template or a pattern
    Test(TestArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Template key, e.g. email or ipv4
    key: String,
}

#[derive(Args)]
pub struct TestArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Template key
    #[arg(short, long, conflicts_with = "pattern", required_unless_present = "pattern")]
    template: Option<String>,

    /// Rust regular expression
    #[arg(short, long)]
    pattern: Option<String>,
}

#[derive(Serialize)]
struct TestOutput {
    matched: bool,
}

pub async fn execute(command: RegexCommand, ctx: &Context) -> Result<()> {
    match command {
        RegexCommand::List => {
            let all = templates();
            ctx.emit(all, || {
                all.iter()
                    .map(|t| format!("{:<16} {}", t.key, t.label))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        RegexCommand::Show(args) => {
            let template = find_template(&args.key)?;
            ctx.emit(template, || template.pattern.to_string())
        }
        RegexCommand::Test(args) => {
            let text = args.input.read_text().await?;
            let matched = match (&args.template, &args.pattern) {
                (Some(key), _) => find_template(key)?.is_match(&text),
                (None, Some(pattern)) => test_pattern(pattern, &text)?,
                (None, None) => {
                    return Err(CliError::InvalidArgument(
                        "Either --template or --pattern is required".to_string(),
                    )
                    .into())
                }
            };
            let result = TestOutput { matched };
            ctx.emit(&result, || {
                if result.matched { "Match" } else { "No match" }.to_string()
            })
        }
    }
}
