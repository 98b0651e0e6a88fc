//! SQLite-backed store implementation for persisted products.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OpenFlags, OptionalExtension, Row, types::Value};
use thiserror::Error;

use crate::{Barcode, NutrientProfile, RawProductRecord, RawValue};

use super::{ProductStore, StoreError};

/// Table layout read by [`SqliteProductStore`].
///
/// Nutrient columns carry no declared type so rows keep whatever the
/// importer wrote (numbers, text or null); values are coerced on read.
pub(crate) const PRODUCTS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    barcode TEXT NOT NULL,
    name TEXT,
    brand TEXT,
    category TEXT,
    energy,
    fat,
    sodium,
    sugar,
    protein,
    carbohydrate,
    productimage TEXT
)";

const PRODUCT_COLUMNS: &str = "barcode, name, brand, category, energy, fat, sodium, sugar, \
     protein, carbohydrate, productimage";

/// Predicate matching the `barcode` column against the `:barcode` parameter.
///
/// Importers may store barcodes as numbers, which drops leading zeros, so
/// numeric cells are compared by value as well as by text.
const BARCODE_MATCHES: &str = "(CAST(barcode AS TEXT) = :barcode \
     OR (typeof(barcode) IN ('integer', 'real') AND barcode = CAST(:barcode AS INTEGER)))";

/// Error raised when opening a product database.
#[derive(Debug, Error)]
pub enum SqliteProductStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// The database has no `products` table.
    #[error("SQLite database at {path} has no products table")]
    MissingProductsTable {
        /// Location of the SQLite database on disk.
        path: PathBuf,
    },
    /// Generic SQLite error while inspecting the schema.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only product store backed by a SQLite `products` table.
pub struct SqliteProductStore {
    connection: Connection,
}

impl fmt::Debug for SqliteProductStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProductStore")
            .field("path", &self.connection.path())
            .finish_non_exhaustive()
    }
}

impl SqliteProductStore {
    /// Open a store backed by the SQLite database at `database_path`.
    ///
    /// # Errors
    /// Returns [`SqliteProductStoreError`] when the file cannot be opened
    /// read-only or lacks a `products` table.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteProductStoreError>
    where
        P: AsRef<Path>,
    {
        let path = database_path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteProductStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;

        let has_table = connection
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'products' LIMIT 1",
                [],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);
        if !has_table {
            return Err(SqliteProductStoreError::MissingProductsTable {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { connection })
    }
}

impl ProductStore for SqliteProductStore {
    fn find_by_barcode(&self, barcode: &Barcode) -> Result<NutrientProfile, StoreError> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE {BARCODE_MATCHES} ORDER BY rowid LIMIT 1"
        );
        let mut statement = self
            .connection
            .prepare_cached(&query)
            .map_err(StoreError::connection)?;
        statement
            .query_row(
                rusqlite::named_params! { ":barcode": barcode.as_str() },
                read_record,
            )
            .optional()
            .map_err(StoreError::connection)?
            .map(RawProductRecord::into_profile)
            .ok_or_else(|| StoreError::NotFound {
                barcode: barcode.clone(),
            })
    }

    fn find_alternatives(
        &self,
        category: &str,
        exclude: &str,
        limit: usize,
    ) -> Result<Vec<NutrientProfile>, StoreError> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE category = :category AND NOT {BARCODE_MATCHES} \
             ORDER BY rowid LIMIT :limit"
        );
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut statement = self
            .connection
            .prepare_cached(&query)
            .map_err(StoreError::connection)?;
        let rows = statement
            .query_map(
                rusqlite::named_params! {
                    ":category": category,
                    ":barcode": exclude.trim(),
                    ":limit": limit,
                },
                read_record,
            )
            .map_err(StoreError::connection)?;

        let mut products = Vec::new();
        for row in rows {
            let record = row.map_err(StoreError::connection)?;
            products.push(record.into_profile());
        }
        Ok(products)
    }
}

fn read_record(row: &Row<'_>) -> rusqlite::Result<RawProductRecord> {
    Ok(RawProductRecord {
        barcode: raw_value(row.get(0)?),
        name: row.get(1)?,
        brand: row.get(2)?,
        category: row.get(3)?,
        calories: raw_value(row.get(4)?),
        fat: raw_value(row.get(5)?),
        sodium: raw_value(row.get(6)?),
        sugar: raw_value(row.get(7)?),
        protein: raw_value(row.get(8)?),
        carbohydrate: raw_value(row.get(9)?),
        image: row.get(10)?,
    })
}

fn raw_value(value: Value) -> Option<RawValue> {
    match value {
        Value::Null => None,
        Value::Integer(number) => Some(RawValue::Number(number as f64)),
        Value::Real(number) => Some(RawValue::Number(number)),
        Value::Text(text) => Some(RawValue::Text(text)),
        Value::Blob(_) => Some(RawValue::Unsupported),
    }
}
