//! zt CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Invalid input
//! - 4: Comparison mismatch
//! - 5: Configuration error

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zt_core::{CoreError, ToolboxConfig};
use zt_debug::DebugError;
use zt_encoding::EncodingError;
use zt_security::SecurityError;
use zt_text::TextError;
use zt_time::TimeError;

mod commands;

use commands::{Cli, CliError, Commands, Context};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const INVALID_INPUT: u8 = 3;
    pub const MISMATCH: u8 = 4;
    pub const CONFIG_ERROR: u8 = 5;
}

fn init_logging(verbose: bool, quiet: bool) {
    let directive = if verbose {
        "zt=debug,warn"
    } else if quiet {
        "zt=error,error"
    } else {
        "zt=info,warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    // A second initialization only happens in tests; keep the first.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        ToolboxConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let ctx = Context::new(config, cli.format);

    match cli.command {
        Commands::List(args) => commands::list::execute(args, &ctx).await,
        Commands::Hash(args) => commands::hash::execute(args, &ctx).await,
        Commands::Uuid(command) => commands::uuid::execute(command, &ctx).await,
        Commands::Password(args) => commands::password::execute(args, &ctx).await,
        Commands::Encode(command) => commands::encode::execute(command, &ctx).await,
        Commands::Json(command) => commands::json::execute(command, &ctx).await,
        Commands::Yaml(command) => commands::yaml::execute(command, &ctx).await,
        Commands::Beautify(args) => commands::beautify::execute(args, &ctx).await,
        Commands::Regex(command) => commands::regex::execute(command, &ctx).await,
        Commands::Diff(args) => commands::diff::execute(args, &ctx).await,
        Commands::Count(args) => commands::count::execute(args, &ctx).await,
        Commands::Datetime(command) => commands::datetime::execute(command, &ctx).await,
        Commands::Cron(args) => commands::cron::execute(args, &ctx).await,
        Commands::Stacktrace(args) => commands::stacktrace::execute(args, &ctx).await,
    }
}

/// Map the first recognised error in the chain to an exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(err) = cause.downcast_ref::<CliError>() {
            return match err {
                CliError::InvalidArgument(_) => ExitCodes::INVALID_ARGS,
                CliError::InvalidInput(_) => ExitCodes::INVALID_INPUT,
                CliError::Mismatch(_) => ExitCodes::MISMATCH,
            };
        }

        if let Some(err) = cause.downcast_ref::<CoreError>() {
            return match err {
                CoreError::ToolNotFound(_) => ExitCodes::INVALID_ARGS,
                _ => ExitCodes::CONFIG_ERROR,
            };
        }

        if cause.is::<SecurityError>() || cause.is::<DebugError>() {
            return ExitCodes::INVALID_ARGS;
        }

        if let Some(err) = cause.downcast_ref::<EncodingError>() {
            return match err {
                EncodingError::UnknownEncoding(_) => ExitCodes::INVALID_ARGS,
                _ => ExitCodes::INVALID_INPUT,
            };
        }

        if let Some(err) = cause.downcast_ref::<TextError>() {
            return match err {
                TextError::UnknownLanguage(_)
                | TextError::UnknownGranularity(_)
                | TextError::UnknownTemplate(_)
                | TextError::InvalidRegex(_) => ExitCodes::INVALID_ARGS,
                _ => ExitCodes::INVALID_INPUT,
            };
        }

        if let Some(err) = cause.downcast_ref::<TimeError>() {
            return match err {
                TimeError::UnknownTimezone(_) | TimeError::UnknownUnit(_) => {
                    ExitCodes::INVALID_ARGS
                }
                _ => ExitCodes::INVALID_INPUT,
            };
        }
    }

    ExitCodes::GENERAL_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_through_context() {
        let err = anyhow::Error::new(TextError::UnknownLanguage("cobol".into()))
            .context("Failed to beautify");
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);

        let err = anyhow::Error::new(TimeError::InvalidDateTime("x".into())).context("convert");
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_INPUT);
    }

    #[test]
    fn test_categorize_cli_errors() {
        let err = anyhow::Error::new(CliError::Mismatch("differ".into()));
        assert_eq!(categorize_error(&err), ExitCodes::MISMATCH);

        let err = anyhow::Error::new(CoreError::ConfigNotFound("x.toml".into()));
        assert_eq!(categorize_error(&err), ExitCodes::CONFIG_ERROR);
    }

    #[test]
    fn test_unknown_errors_are_general() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }
}
