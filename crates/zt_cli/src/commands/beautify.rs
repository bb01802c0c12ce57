//! Beautify command - Pretty-print or minify code.

use anyhow::{Context as _, Result};
use clap::Args;

use zt_text::{process, BeautifyMode, CodeLanguage};

use super::{Context, InputArgs, TextOutput};

#[derive(Args)]
pub struct BeautifyArgs {
    #[command(flatten)]
    input: InputArgs,

    /// json, html, css, js, xml or sql
    #[arg(short, long, default_value = "json")]
    language: String,

    /// Minify instead of pretty-print
    #[arg(short, long)]
    minify: bool,

    /// Indent width
    #[arg(long)]
    indent: Option<usize>,
}

pub async fn execute(args: BeautifyArgs, ctx: &Context) -> Result<()> {
    let text = args.input.read_text().await?;
    let language: CodeLanguage = args.language.parse()?;
    let mode = if args.minify {
        BeautifyMode::Minify
    } else {
        BeautifyMode::Beautify
    };
    let indent = args.indent.unwrap_or(ctx.config.beautify.indent);

    let output = process(&text, language, mode, indent)
        .with_context(|| format!("Failed to process {}", language))?;
    let result = TextOutput { output };
    ctx.emit(&result, || result.output.clone())
}
