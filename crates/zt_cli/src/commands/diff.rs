//! Diff command - Compare two text files.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use zt_text::{diff_text, unified, DiffGranularity};

use super::{read_file_text, CliError, Context, TextOutput};

#[derive(Args)]
pub struct DiffArgs {
    /// Original file
    old: PathBuf,

    /// Changed file
    new: PathBuf,

    /// chars, words or lines
    #[arg(short, long, default_value = "chars")]
    granularity: String,

    /// Print a unified diff with this many context lines instead
    #[arg(short, long, value_name = "LINES", conflicts_with = "html")]
    unified: Option<usize>,

    /// Render as HTML with <ins> and <del>
    #[arg(long)]
    html: bool,
}

pub async fn execute(args: DiffArgs, ctx: &Context) -> Result<()> {
    let old = read_file_text(&args.old).await?;
    let new = read_file_text(&args.new).await?;

    if let Some(context) = args.unified {
        let patch = unified(&old, &new, context);
        let changed = !patch.is_empty();
        let result = TextOutput { output: patch };
        ctx.emit(&result, || result.output.trim_end().to_string())?;
        return outcome(changed);
    }

    let granularity: DiffGranularity = args.granularity.parse()?;
    let result = diff_text(&old, &new, granularity);
    ctx.emit(&result, || {
        if args.html {
            result.render_html()
        } else {
            format!(
                "{}\n\n+{} -{} ({:.1}% similar)",
                result.render_inline(),
                result.stats.insertions,
                result.stats.deletions,
                result.stats.similarity * 100.0
            )
        }
    })?;
    outcome(result.has_changes())
}

fn outcome(changed: bool) -> Result<()> {
    if changed {
        Err(CliError::Mismatch("Texts differ".to_string()).into())
    } else {
        Ok(())
    }
}
