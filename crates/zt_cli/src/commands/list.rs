//! List command - Show the tool catalog.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use zt_core::{ToolCategory, ToolDescriptor, ToolRegistry};

use super::{CliError, Context};

#[derive(Args)]
pub struct ListArgs {
    /// Only show one category: security, encoding, text, datetime or debugging
    #[arg(short, long)]
    category: Option<String>,
}

/// Every tool zt ships.
pub fn registry() -> ToolRegistry {
    ToolRegistry::from_descriptors(
        zt_security::descriptors()
            .into_iter()
            .chain(zt_encoding::descriptors())
            .chain(zt_text::descriptors())
            .chain(zt_time::descriptors())
            .chain(zt_debug::descriptors()),
    )
}

fn parse_category(name: &str) -> Result<ToolCategory, CliError> {
    let wanted = name.trim().to_lowercase().replace(['-', '_', ' '], "");
    ToolCategory::ALL
        .into_iter()
        .find(|c| {
            let label = c.label().to_lowercase().replace(' ', "");
            label == wanted || label.trim_end_matches("tools") == wanted
        })
        .ok_or_else(|| CliError::InvalidArgument(format!("Unknown category: {}", name)))
}

pub async fn execute(args: ListArgs, ctx: &Context) -> Result<()> {
    let registry = registry();
    let categories = match &args.category {
        Some(name) => vec![parse_category(name)?],
        None => ToolCategory::ALL.to_vec(),
    };
    debug!("Listing {} tools", registry.len());

    let tools: Vec<&ToolDescriptor> = categories
        .iter()
        .flat_map(|c| registry.by_category(*c))
        .collect();

    ctx.emit(&tools, || {
        let mut out = Vec::new();
        for category in &categories {
            out.push(category.label().to_string());
            for tool in tools.iter().filter(|t| t.category == *category) {
                out.push(format!("  {:<22} {}", tool.id, tool.description));
            }
        }
        out.join("\n")
    })
}
