//! Stacktrace command - Put each frame of a trace on its own line.

use anyhow::Result;
use clap::Args;

use zt_debug::{format_stack_trace, StackTraceLanguage};

use super::{Context, InputArgs, TextOutput};

#[derive(Args)]
pub struct StacktraceArgs {
    #[command(flatten)]
    input: InputArgs,

    /// java or python
    #[arg(short, long, default_value = "java")]
    language: String,
}

pub async fn execute(args: StacktraceArgs, ctx: &Context) -> Result<()> {
    let text = args.input.read_text().await?;
    let language: StackTraceLanguage = args.language.parse()?;
    let result = TextOutput {
        output: format_stack_trace(&text, language),
    };
    ctx.emit(&result, || result.output.clone())
}
