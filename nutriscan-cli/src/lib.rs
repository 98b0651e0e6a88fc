//! Command-line interface for the Nutriscan rating engine.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

mod error;
mod fs;
mod lookup;
mod rate;
mod telemetry;

pub use error::CliError;
use lookup::{LookupArgs, run_lookup};
use nutriscan_scorer::ZeroValuePolicy;
use rate::{RateArgs, run_rate};

pub(crate) const ARG_BARCODE: &str = "barcode";
pub(crate) const ARG_DATABASE: &str = "database";
pub(crate) const ARG_ALTERNATIVES_LIMIT: &str = "alternatives-limit";
pub(crate) const ARG_ZERO_VALUES: &str = "zero-values";
pub(crate) const ARG_RECORD: &str = "record";
pub(crate) const ARG_LOG_LEVEL: &str = "log-level";
pub(crate) const ENV_LOOKUP_BARCODE: &str = "NUTRISCAN_CMDS_LOOKUP_BARCODE";
pub(crate) const ENV_LOOKUP_DATABASE: &str = "NUTRISCAN_CMDS_LOOKUP_DATABASE";
pub(crate) const ENV_RATE_RECORD: &str = "NUTRISCAN_CMDS_RATE_RECORD";

/// Run the Nutriscan CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when a
/// product cannot be found or decoded, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    telemetry::init(cli.log_level.as_deref())?;
    match cli.command {
        Command::Lookup(args) => run_lookup(args),
        Command::Rate(args) => run_rate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nutriscan",
    about = "Rate packaged food products and suggest healthier alternatives",
    version
)]
struct Cli {
    /// Log filter directive (e.g. "debug" or "nutriscan_scorer=debug").
    ///
    /// Falls back to `RUST_LOG`, then to "warn".
    #[arg(long = ARG_LOG_LEVEL, value_name = "filter", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a product by barcode, rate it and rank healthier alternatives.
    Lookup(LookupArgs),
    /// Rate a single product record read from a JSON file.
    Rate(RateArgs),
}

/// Treatment of zero-valued nutrients, as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ZeroValuesArg {
    /// Zero or absent nutrients earn the full credit.
    #[default]
    #[value(alias = "default-credit")]
    #[serde(alias = "default-credit")]
    Credit,
    /// Zero nutrients go through the ordinary formula.
    Formula,
}

impl From<ZeroValuesArg> for ZeroValuePolicy {
    fn from(value: ZeroValuesArg) -> Self {
        match value {
            ZeroValuesArg::Credit => Self::DefaultCredit,
            ZeroValuesArg::Formula => Self::Formula,
        }
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match crate::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Print `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
