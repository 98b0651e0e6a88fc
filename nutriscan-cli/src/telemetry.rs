//! Log subscriber installation.
//!
//! Library crates log through the `log` facade; the subscriber's bridge
//! forwards those records to a compact formatter on stderr so stdout stays
//! reserved for JSON output.

use tracing_subscriber::EnvFilter;

use crate::CliError;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// `directive` wins over `RUST_LOG`, which wins over [`DEFAULT_LOG_FILTER`].
pub(crate) fn init(directive: Option<&str>) -> Result<(), CliError> {
    let filter = build_filter(directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(CliError::Subscriber)
}

pub(crate) fn build_filter(directive: Option<&str>) -> Result<EnvFilter, CliError> {
    if let Some(value) = directive {
        return parse_filter(value);
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_filter(DEFAULT_LOG_FILTER),
    }
}

fn parse_filter(value: &str) -> Result<EnvFilter, CliError> {
    EnvFilter::try_new(value).map_err(|source| CliError::LogFilter {
        value: value.to_owned(),
        source,
    })
}
