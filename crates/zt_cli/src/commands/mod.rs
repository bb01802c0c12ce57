//! CLI command definitions.
//!
//! Each subcommand maps to one tool (or one direction of a tool). Commands
//! share a [`Context`] carrying the loaded configuration and the output
//! format.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tokio::io::AsyncReadExt;

use zt_core::{OutputFormat, ToolboxConfig};
use zt_text::Comparison;

pub mod beautify;
pub mod count;
pub mod cron;
pub mod datetime;
pub mod diff;
pub mod encode;
pub mod hash;
pub mod json;
pub mod list;
pub mod password;
pub mod regex;
pub mod stacktrace;
pub mod uuid;
pub mod yaml;

/// zt - developer utility toolbox
#[derive(Parser)]
#[command(name = "zt")]
#[command(version, about = "zt - developer utility toolbox")]
#[command(long_about = r#"
zt bundles small, self-contained developer utilities: hashing, UUIDs,
passwords, encoders, JSON/YAML tools, code beautifiers, regex templates,
text diffs, date-time conversion, cron inspection and stack-trace formatting.

Text input is taken from the positional argument, then --input <file>, then
stdin.

CONFIGURATION:
  --config <file>, then $ZT_CONFIG, then <config dir>/zt/config.toml

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Invalid input
  4 - Comparison mismatch
  5 - Configuration error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format, overrides the configured default
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available tools
    List(list::ListArgs),

    /// Compute message digests
    Hash(hash::HashArgs),

    /// Generate or validate UUIDs
    #[command(subcommand)]
    Uuid(uuid::UuidCommand),

    /// Generate passwords
    Password(password::PasswordArgs),

    /// Encode or decode text, URLs, HTML and files
    #[command(subcommand)]
    Encode(encode::EncodeCommand),

    /// View or compare JSON
    #[command(subcommand)]
    Json(json::JsonCommand),

    /// Validate or compare YAML
    #[command(subcommand)]
    Yaml(yaml::YamlCommand),

    /// Pretty-print or minify code
    Beautify(beautify::BeautifyArgs),

    /// Browse and test regex templates
    #[command(subcommand)]
    Regex(regex::RegexCommand),

    /// Compare two text files
    Diff(diff::DiffArgs),

    /// Count characters, words and lines
    Count(count::CountArgs),

    /// Convert and calculate date-times
    #[command(subcommand)]
    Datetime(datetime::DatetimeCommand),

    /// Validate, schedule and describe a cron expression
    Cron(cron::CronArgs),

    /// Put each frame of a stack trace on its own line
    Stacktrace(stacktrace::StacktraceArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Failures that only exist at the command line.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Mismatch(String),
}

/// State shared by every command.
pub struct Context {
    pub config: ToolboxConfig,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: ToolboxConfig, format: Option<FormatArg>) -> Self {
        let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
        Self { config, format }
    }

    /// Print `value` as JSON, or the text produced by `text`.
    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => println!("{}", text()),
        }
        Ok(())
    }

    /// Zone from `--tz`, else the configured one.
    pub fn timezone(&self, flag: Option<&str>) -> Result<Tz> {
        let name = flag.unwrap_or(&self.config.datetime.timezone);
        Ok(zt_time::parse_timezone(name)?)
    }
}

/// Single text result.
#[derive(Serialize)]
pub struct TextOutput {
    pub output: String,
}

/// Where a command reads its input from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Input text; read from --input or stdin when omitted
    pub text: Option<String>,

    /// Read input from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,
}

/// Drop one trailing line break left by editors and `echo`.
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

impl InputArgs {
    /// Raw bytes, untouched.
    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        if let Some(text) = &self.text {
            return Ok(text.clone().into_bytes());
        }
        if let Some(path) = &self.input {
            return read_file(path).await;
        }
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("Failed to read stdin")?;
        Ok(buf)
    }

    /// Text input. A single trailing newline from a file or stdin is
    /// dropped; the positional argument is used as given.
    pub async fn read_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let bytes = self.read_bytes().await?;
        let text = String::from_utf8(bytes)
            .map_err(|_| CliError::InvalidInput("Input is not valid UTF-8".to_string()))?;
        Ok(strip_trailing_newline(text))
    }
}

pub async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

pub async fn read_file_text(path: &Path) -> Result<String> {
    let bytes = read_file(path).await?;
    String::from_utf8(bytes)
        .map_err(|_| CliError::InvalidInput(format!("{} is not valid UTF-8", path.display())).into())
}

/// Human-readable comparison report.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = comparison.summary();
    for difference in &comparison.differences {
        let side = |value: &Option<serde_json::Value>| {
            value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        out.push_str(&format!(
            "\n  {:<8} {}: {} -> {}",
            format!("{:?}", difference.kind),
            difference.path,
            side(&difference.left),
            side(&difference.right)
        ));
    }
    out
}

/// Exit status for a comparison that was already printed.
pub fn comparison_outcome(comparison: &Comparison) -> Result<()> {
    if !comparison.both_valid() {
        return Err(CliError::InvalidInput(comparison.summary()).into());
    }
    if !comparison.equal {
        return Err(CliError::Mismatch(comparison.summary()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("abc\n".into()), "abc");
        assert_eq!(strip_trailing_newline("abc\r\n".into()), "abc");
        assert_eq!(strip_trailing_newline("abc\n\n".into()), "abc\n");
        assert_eq!(strip_trailing_newline("abc".into()), "abc");
    }

    #[test]
    fn test_format_flag_overrides_config() {
        let mut config = ToolboxConfig::default();
        config.output.format = OutputFormat::Json;
        assert_eq!(Context::new(config.clone(), None).format, OutputFormat::Json);
        assert_eq!(
            Context::new(config, Some(FormatArg::Text)).format,
            OutputFormat::Text
        );
    }

    #[test]
    fn test_render_comparison() {
        let comparison = zt_text::compare_json(r#"{"a":1,"b":[1]}"#, r#"{"a":2,"b":[1],"c":null}"#);
        let text = render_comparison(&comparison);
        assert!(text.starts_with("Documents differ in 2 place(s)"));
        assert!(text.contains("Changed  $.a: 1 -> 2"));
        assert!(text.contains("Added    $.c: - -> null"));
        assert!(matches!(
            comparison_outcome(&comparison).unwrap_err().downcast_ref::<CliError>(),
            Some(CliError::Mismatch(_))
        ));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
