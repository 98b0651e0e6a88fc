//! Rate command implementation for the Nutriscan CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use nutriscan_core::{Rater, RatingResult, RawProductRecord};
use nutriscan_scorer::{NutritionRater, ScoringPolicy};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RECORD, ARG_ZERO_VALUES, CliError, ENV_RATE_RECORD, ZeroValuesArg, fs::open_utf8_file,
    require_existing,
};

/// CLI arguments for the `rate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rate one product described by a JSON record. Nutrient \
                 fields may be numbers, numeric strings or null; anything \
                 unparsable counts as zero.",
    about = "Rate a product record read from a JSON file"
)]
#[ortho_config(prefix = "NUTRISCAN")]
pub(crate) struct RateArgs {
    /// Path to a JSON file holding one product record.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) record: Option<Utf8PathBuf>,
    /// How zero-valued nutrients are scored on the generic path.
    #[arg(long = ARG_ZERO_VALUES, value_enum, value_name = "policy")]
    #[serde(default)]
    pub(crate) zero_values: Option<ZeroValuesArg>,
}

impl RateArgs {
    pub(crate) fn into_config(self) -> Result<RateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RateConfig::try_from(merged)
    }
}

/// Resolved `rate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RateConfig {
    pub(crate) record: Utf8PathBuf,
    pub(crate) policy: ScoringPolicy,
}

impl TryFrom<RateArgs> for RateConfig {
    type Error = CliError;

    fn try_from(args: RateArgs) -> Result<Self, Self::Error> {
        let record = args.record.ok_or(CliError::MissingArgument {
            field: ARG_RECORD,
            env: ENV_RATE_RECORD,
        })?;
        let zero_values = args.zero_values.unwrap_or_default();
        Ok(Self {
            record,
            policy: ScoringPolicy::with_zero_values(zero_values.into()),
        })
    }
}

pub(crate) fn run_rate(args: RateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rate_with(args, &mut stdout)
}

pub(crate) fn run_rate_with(args: RateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.record, ARG_RECORD)?;
    let result = rate_record(&config)?;
    crate::write_json(writer, &result)
}

fn rate_record(config: &RateConfig) -> Result<RatingResult, CliError> {
    let record = load_record(&config.record)?;
    let profile = record.into_profile();
    Ok(NutritionRater::new(config.policy).rate(&profile))
}

/// Loads a JSON-encoded [`RawProductRecord`] from disk.
pub(crate) fn load_record(path: &Utf8Path) -> Result<RawProductRecord, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRecord {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRecord {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RateConfig, CliError> {
    let merged = RateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RateConfig::try_from(merged)
}
