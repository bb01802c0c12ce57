//! Encode commands - Text, URL, HTML and file encoders.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::info;

use zt_encoding::{
    decode_component, decode_file, decode_form, decode_html, decode_text, encode_bytes,
    encode_component, encode_form, encode_html, encode_text, FileEncoding, TextEncoding,
};

use super::{Context, InputArgs, TextOutput};

#[derive(Subcommand)]
pub enum EncodeCommand {
    /// Binary, octal, decimal, hexadecimal, Base64 or Base64 URL
    Text(TextArgs),

    /// Percent-encoding
    Url(UrlArgs),

    /// HTML entities
    Html(HtmlArgs),

    /// Encode a file as text, or decode text back into a file
    File(FileArgs),
}

#[derive(Args)]
pub struct TextArgs {
    #[command(flatten)]
    input: InputArgs,

    /// binary, octal, decimal, hex, base64 or base64url
    #[arg(short, long, default_value = "base64")]
    encoding: String,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,
}

#[derive(Args)]
pub struct UrlArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Use form encoding (spaces as `+`)
    #[arg(long)]
    form: bool,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,
}

#[derive(Args)]
pub struct HtmlArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,
}

#[derive(Args)]
pub struct FileArgs {
    #[command(flatten)]
    input: InputArgs,

    /// binary, octal, decimal, hex, base64 or base64url
    #[arg(short, long, default_value = "base64")]
    encoding: String,

    /// Decode text into a file
    #[arg(short, long)]
    decode: bool,

    /// Where decoded bytes go; defaults to a name derived from the content
    #[arg(short, long, value_name = "FILE", requires = "decode")]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct WrittenFile {
    path: PathBuf,
    size: usize,
    extension: String,
}

pub async fn execute(command: EncodeCommand, ctx: &Context) -> Result<()> {
    match command {
        EncodeCommand::Text(args) => {
            let text = args.input.read_text().await?;
            let encoding: TextEncoding = args.encoding.parse()?;
            let output = if args.decode {
                decode_text(&text, encoding).context("Failed to decode text")?
            } else {
                encode_text(&text, encoding)
            };
            emit_text(ctx, output)
        }
        EncodeCommand::Url(args) => {
            let text = args.input.read_text().await?;
            let output = match (args.decode, args.form) {
                (false, false) => encode_component(&text),
                (false, true) => encode_form(&text),
                (true, false) => decode_component(&text).context("Failed to decode URL")?,
                (true, true) => decode_form(&text).context("Failed to decode form data")?,
            };
            emit_text(ctx, output)
        }
        EncodeCommand::Html(args) => {
            let text = args.input.read_text().await?;
            let output = if args.decode {
                decode_html(&text)
            } else {
                encode_html(&text)
            };
            emit_text(ctx, output)
        }
        EncodeCommand::File(args) => file(args, ctx).await,
    }
}

fn emit_text(ctx: &Context, output: String) -> Result<()> {
    let result = TextOutput { output };
    ctx.emit(&result, || result.output.clone())
}

async fn file(args: FileArgs, ctx: &Context) -> Result<()> {
    let encoding: FileEncoding = args.encoding.parse()?;

    if !args.decode {
        let data = args.input.read_bytes().await?;
        info!("Encoding {} bytes as {}", data.len(), encoding);
        return emit_text(ctx, encode_bytes(&data, encoding));
    }

    let text = args.input.read_text().await?;
    let decoded = decode_file(&text, encoding).context("Failed to decode file contents")?;
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&decoded.suggested_name));

    tokio::fs::write(&path, &decoded.bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} bytes to {}", decoded.size, path.display());

    let written = WrittenFile {
        path,
        size: decoded.size,
        extension: decoded.extension,
    };
    ctx.emit(&written, || {
        format!(
            "Wrote {} bytes (.{}) to {}",
            written.size,
            written.extension,
            written.path.display()
        )
    })
}
