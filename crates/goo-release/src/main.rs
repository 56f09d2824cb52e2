//! goo-release - assemble a versioned goo engine release directory.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use goo_release_assembler::ReleaseError;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Exit status for a malformed command line.
const USAGE_EXIT: u8 = 1;

#[derive(Debug, Parser)]
#[command(name = "goo-release")]
#[command(about = "Build and assemble a goo engine release")]
#[command(version)]
pub struct Cli {
    /// Version identifier, e.g. 0.15.0
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    release_version: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(USAGE_EXIT),
            };
        }
    };

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match commands::release::run(cli.release_version) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            exit_code(&err)
        }
    }
}

/// Propagate a failing tool's exit status; everything else exits 1.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ReleaseError>() {
        Some(ReleaseError::ToolFailed {
            code: Some(code), ..
        }) => u8::try_from(*code)
            .ok()
            .filter(|code| *code != 0)
            .map(ExitCode::from)
            .unwrap_or(ExitCode::FAILURE),
        _ => ExitCode::FAILURE,
    }
}
