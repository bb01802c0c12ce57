//! Count command - Character counter.

use anyhow::Result;
use clap::Args;

use zt_text::count;

use super::{Context, InputArgs};

#[derive(Args)]
pub struct CountArgs {
    #[command(flatten)]
    input: InputArgs,
}

pub async fn execute(args: CountArgs, ctx: &Context) -> Result<()> {
    let text = args.input.read_text().await?;
    let counts = count(&text);
    ctx.emit(&counts, || {
        format!(
            "Characters: {}\nUTF-16 units: {}\nBytes: {}\nWords: {}\nLines: {}",
            counts.characters, counts.utf16_units, counts.bytes, counts.words, counts.lines
        )
    })
}
