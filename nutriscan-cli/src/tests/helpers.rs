//! Test helpers for building product datasets and record files.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use nutriscan_core::{MemoryProductStore, NutrientProfile, Nutrients, ProductStore};
use tempfile::TempDir;

use super::*;
use crate::lookup::{LookupConfig, LookupStoreBuilder};

pub(super) const TARGET_BARCODE: &str = "40000001";
pub(super) const BEST_BARCODE: &str = "40000005";
pub(super) const BETTER_BARCODE: &str = "40000003";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write file");
}

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Persist [`chocolate_catalogue`] as `products.db` and return its path.
    pub(super) fn write_catalogue(&self) -> Utf8PathBuf {
        let path = self.path("products.db");
        nutriscan_core::test_support::write_sqlite_database(
            path.as_std_path(),
            &chocolate_catalogue(),
        )
        .expect("write product database");
        path
    }
}

fn chocolate(barcode: &str, nutrients: Nutrients) -> NutrientProfile {
    NutrientProfile::new(barcode, "chocolate", nutrients).with_name(format!("bar {barcode}"))
}

/// Products in storage order.
///
/// The target scores 19. In storage order the other chocolate bars score
/// 19, 48 and 90, with a soft drink between them.
pub(super) fn chocolate_catalogue() -> Vec<NutrientProfile> {
    let plain = Nutrients {
        calories: 550.0,
        fat: 35.0,
        sodium: 150.0,
        sugar: 50.0,
        protein: 1.0,
        carbohydrate: 60.0,
    };
    vec![
        chocolate(TARGET_BARCODE, plain),
        chocolate("40000002", plain),
        chocolate(
            BETTER_BARCODE,
            Nutrients {
                calories: 450.0,
                fat: 15.0,
                sodium: 80.0,
                sugar: 20.0,
                protein: 3.0,
                carbohydrate: 30.0,
            },
        ),
        NutrientProfile::new("40000004", "soft-drink", Nutrients::default()),
        chocolate(
            BEST_BARCODE,
            Nutrients {
                calories: 380.0,
                fat: 8.0,
                sodium: 40.0,
                sugar: 4.0,
                protein: 6.0,
                carbohydrate: 15.0,
            },
        ),
    ]
}

/// Builder that hands out a clone of an in-memory store.
pub(super) struct MemoryStoreBuilder {
    pub(super) store: MemoryProductStore,
}

impl MemoryStoreBuilder {
    pub(super) fn catalogue() -> Self {
        Self {
            store: MemoryProductStore::with_products(chocolate_catalogue()),
        }
    }
}

impl LookupStoreBuilder for MemoryStoreBuilder {
    fn build(&self, _config: &LookupConfig) -> Result<Box<dyn ProductStore>, CliError> {
        Ok(Box::new(self.store.clone()))
    }
}

/// Barcodes listed under `alternatives` in a lookup report.
pub(super) fn alternative_barcodes(report: &serde_json::Value) -> Vec<String> {
    report["alternatives"]
        .as_array()
        .expect("alternatives array")
        .iter()
        .map(|entry| entry["barcode"].as_str().expect("barcode").to_owned())
        .collect()
}
