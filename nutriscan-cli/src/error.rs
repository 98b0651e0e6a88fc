//! Error types emitted by the Nutriscan CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nutriscan_core::{Barcode, BarcodeError, StoreError};
use thiserror::Error;

/// Errors emitted by the Nutriscan CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The log filter directive could not be parsed.
    #[error("invalid log filter {value:?}: {source}")]
    LogFilter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// Installing the log subscriber failed.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The barcode failed validation.
    #[error("invalid barcode {value:?}: {source}")]
    InvalidBarcode {
        value: String,
        #[source]
        source: BarcodeError,
    },
    /// Opening the product database failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    OpenProductStore(#[from] nutriscan_core::SqliteProductStoreError),
    /// No product is stored under the barcode.
    #[error("no product found for barcode {barcode}")]
    ProductNotFound { barcode: Barcode },
    /// The product store failed while answering a query.
    #[error("product lookup failed: {0}")]
    Store(#[source] StoreError),
    /// Opening the product record file failed.
    #[error("failed to open product record at {path:?}: {source}")]
    OpenRecord {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The product record JSON could not be decoded.
    #[error("failed to parse product record JSON at {path:?}: {source}")]
    ParseRecord {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<StoreError> for CliError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { barcode } => Self::ProductNotFound { barcode },
            other => Self::Store(other),
        }
    }
}
