//! Lookup command implementation for the Nutriscan CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use nutriscan_core::{
    Barcode, NutrientProfile, ProductStore, Rater, RatingResult, ScoredAlternative,
    store::DEFAULT_ALTERNATIVES_LIMIT,
};
use nutriscan_scorer::{AlternativeRanker, NutritionRater, ScoringPolicy};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ALTERNATIVES_LIMIT, ARG_BARCODE, ARG_DATABASE, ARG_ZERO_VALUES, CliError,
    ENV_LOOKUP_BARCODE, ENV_LOOKUP_DATABASE, ZeroValuesArg,
};

/// CLI arguments for the `lookup` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Look up a product in a SQLite product database by its \
                 barcode, rate it, and rank same-category products that \
                 score better. The report is printed as JSON.",
    about = "Rate a product and suggest healthier alternatives"
)]
#[ortho_config(prefix = "NUTRISCAN")]
pub(crate) struct LookupArgs {
    /// EAN-8 or EAN-13 barcode of the product.
    #[arg(value_name = ARG_BARCODE)]
    #[serde(default)]
    pub(crate) barcode: Option<String>,
    /// Path to the SQLite product database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Maximum number of candidate alternatives fetched from the database.
    #[arg(long = ARG_ALTERNATIVES_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) alternatives_limit: Option<usize>,
    /// How zero-valued nutrients are scored on the generic path.
    #[arg(long = ARG_ZERO_VALUES, value_enum, value_name = "policy")]
    #[serde(default)]
    pub(crate) zero_values: Option<ZeroValuesArg>,
}

impl LookupArgs {
    pub(crate) fn into_config(self) -> Result<LookupConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LookupConfig::try_from(merged)
    }
}

/// Resolved `lookup` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LookupConfig {
    /// Validated product barcode.
    pub(crate) barcode: Barcode,
    /// Path to the SQLite product database.
    pub(crate) database: Utf8PathBuf,
    /// Candidate alternatives fetched per lookup.
    pub(crate) alternatives_limit: usize,
    /// Scoring policy handed to the rater.
    pub(crate) policy: ScoringPolicy,
}

impl LookupConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        crate::require_existing(&self.database, ARG_DATABASE)
    }
}

impl TryFrom<LookupArgs> for LookupConfig {
    type Error = CliError;

    fn try_from(args: LookupArgs) -> Result<Self, Self::Error> {
        let raw_barcode = args.barcode.ok_or(CliError::MissingArgument {
            field: ARG_BARCODE,
            env: ENV_LOOKUP_BARCODE,
        })?;
        let barcode =
            Barcode::parse(&raw_barcode).map_err(|source| CliError::InvalidBarcode {
                value: raw_barcode,
                source,
            })?;
        let database = args.database.ok_or(CliError::MissingArgument {
            field: ARG_DATABASE,
            env: ENV_LOOKUP_DATABASE,
        })?;
        let zero_values = args.zero_values.unwrap_or_default();

        Ok(Self {
            barcode,
            database,
            alternatives_limit: args
                .alternatives_limit
                .unwrap_or(DEFAULT_ALTERNATIVES_LIMIT),
            policy: ScoringPolicy::with_zero_values(zero_values.into()),
        })
    }
}

/// Opens the product store for the current lookup invocation.
pub(crate) trait LookupStoreBuilder {
    fn build(&self, config: &LookupConfig) -> Result<Box<dyn ProductStore>, CliError>;
}

pub(crate) struct DefaultLookupStoreBuilder;

impl LookupStoreBuilder for DefaultLookupStoreBuilder {
    #[cfg(feature = "store-sqlite")]
    fn build(&self, config: &LookupConfig) -> Result<Box<dyn ProductStore>, CliError> {
        let store = nutriscan_core::SqliteProductStore::open(config.database.as_std_path())?;
        Ok(Box::new(store))
    }

    #[cfg(not(feature = "store-sqlite"))]
    fn build(&self, _config: &LookupConfig) -> Result<Box<dyn ProductStore>, CliError> {
        Err(CliError::MissingFeature {
            feature: "store-sqlite",
            action: "lookup",
        })
    }
}

/// JSON document printed by `lookup`.
#[derive(Debug, Serialize)]
pub(crate) struct LookupReport {
    pub(crate) product: NutrientProfile,
    pub(crate) rating: RatingResult,
    pub(crate) alternatives: Vec<ScoredAlternative>,
}

pub(crate) fn run_lookup(args: LookupArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_lookup_with(args, &DefaultLookupStoreBuilder, &mut stdout)
}

pub(crate) fn run_lookup_with(
    args: LookupArgs,
    builder: &dyn LookupStoreBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let store = builder.build(&config)?;
    let report = execute_lookup(&config, store.as_ref())?;
    crate::write_json(writer, &report)
}

pub(crate) fn execute_lookup(
    config: &LookupConfig,
    store: &dyn ProductStore,
) -> Result<LookupReport, CliError> {
    let product = store.find_by_barcode(&config.barcode)?;
    let rater = NutritionRater::new(config.policy);
    let rating = rater.rate(&product);
    log::info!(
        "rated {} ({}) at {}",
        product.barcode,
        product.category_label,
        rating.rating
    );

    let candidates = store.find_alternatives(
        &product.category_label,
        &product.barcode,
        config.alternatives_limit,
    )?;
    let ranker = AlternativeRanker::new(rater);
    let alternatives = ranker.rank(candidates, &product, &product.category_label);

    Ok(LookupReport {
        product,
        rating,
        alternatives,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<LookupConfig, CliError> {
    let merged = LookupArgs::merge_from_layers(layers).map_err(CliError::from)?;
    LookupConfig::try_from(merged)
}
