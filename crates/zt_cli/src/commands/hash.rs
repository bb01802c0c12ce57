//! Hash command - Compute message digests.

use anyhow::Result;
use clap::Args;

use zt_security::{hash_all, hash_encoded, DigestEncoding, HashAlgorithm};

use super::{Context, InputArgs};

#[derive(Args)]
pub struct HashArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Algorithm, e.g. sha256, sha3_256, keccak256, rmd160 or md5
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Digest encoding: hex, hex_upper or base64
    #[arg(short, long)]
    encoding: Option<String>,

    /// Compute every supported algorithm
    #[arg(long, conflicts_with = "algorithm")]
    all: bool,
}

pub async fn execute(args: HashArgs, ctx: &Context) -> Result<()> {
    let data = args.input.read_bytes().await?;
    let encoding: DigestEncoding = args
        .encoding
        .as_deref()
        .unwrap_or(&ctx.config.hash.encoding)
        .parse()?;

    if args.all {
        let outputs = hash_all(&data, encoding);
        return ctx.emit(&outputs, || {
            outputs
                .iter()
                .map(|o| format!("{:<11} {}", o.algorithm.label(), o.digest))
                .collect::<Vec<_>>()
                .join("\n")
        });
    }

    let algorithm: HashAlgorithm = args
        .algorithm
        .as_deref()
        .unwrap_or(&ctx.config.hash.algorithm)
        .parse()?;
    let output = hash_encoded(algorithm, &data, encoding);
    ctx.emit(&output, || output.digest.clone())
}
