//! In-memory collaborators used by unit and behaviour tests, plus SQLite
//! fixture helpers.

use crate::NutrientProfile;

/// In-memory `ProductStore` implementation.
///
/// The store performs a linear scan and keeps insertion order, so it suits
/// small datasets and tests.
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
#[derive(Default, Debug, Clone)]
pub struct MemoryProductStore {
    products: Vec<NutrientProfile>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemoryProductStore {
    /// Create a store containing a single product.
    pub fn with_product(product: NutrientProfile) -> Self {
        Self::with_products(std::iter::once(product))
    }

    /// Create a store from a collection of products.
    pub fn with_products<I>(products: I) -> Self
    where
        I: IntoIterator<Item = NutrientProfile>,
    {
        Self {
            products: products.into_iter().collect(),
        }
    }

    /// Borrow every stored product.
    #[must_use]
    pub fn products(&self) -> &[NutrientProfile] {
        &self.products
    }
}

#[cfg(any(test, feature = "test-support"))]
impl crate::ProductStore for MemoryProductStore {
    fn find_by_barcode(
        &self,
        barcode: &crate::Barcode,
    ) -> Result<NutrientProfile, crate::StoreError> {
        self.products
            .iter()
            .find(|product| barcode.matches(&product.barcode))
            .cloned()
            .ok_or_else(|| crate::StoreError::NotFound {
                barcode: barcode.clone(),
            })
    }

    fn find_alternatives(
        &self,
        category: &str,
        exclude: &str,
        limit: usize,
    ) -> Result<Vec<NutrientProfile>, crate::StoreError> {
        Ok(self
            .products
            .iter()
            .filter(|product| product.category_label == category)
            .filter(|product| product.barcode.trim() != exclude.trim())
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Test `Rater` that returns a fixed score per barcode.
///
/// Unknown barcodes score `0`. The rating is the clamped score and no
/// highlights or details are produced, which keeps ranking tests focused on
/// ordering.
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
#[derive(Debug, Clone, Default)]
pub struct FixedRater {
    scores: std::collections::HashMap<String, i32>,
}

#[cfg(any(test, feature = "test-support"))]
impl FixedRater {
    /// Build a rater from `(barcode, score)` pairs.
    pub fn new<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            scores: scores
                .into_iter()
                .map(|(barcode, score)| (barcode.into(), score))
                .collect(),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl crate::Rater for FixedRater {
    fn rate(&self, profile: &NutrientProfile) -> crate::RatingResult {
        let score = self.scores.get(&profile.barcode).copied().unwrap_or(0);
        crate::RatingResult {
            score,
            rating: <Self as crate::Rater>::clamp_rating(score),
            highlights: Vec::new(),
            rating_details: crate::RatingDetails::default(),
        }
    }
}

/// Create a `products` table at `path` and insert `products`.
///
/// Numeric columns are written as SQLite `REAL`s and the barcode as `TEXT`,
/// mirroring the layout [`SqliteProductStore`](crate::SqliteProductStore)
/// reads.
///
/// # Errors
/// Propagates any `rusqlite` failure.
#[cfg(feature = "store-sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "store-sqlite")))]
pub fn write_sqlite_database(
    path: &std::path::Path,
    products: &[NutrientProfile],
) -> Result<(), rusqlite::Error> {
    let connection = rusqlite::Connection::open(path)?;
    connection.execute_batch(crate::store::PRODUCTS_SCHEMA)?;
    let mut statement = connection.prepare(
        "INSERT INTO products (
            barcode, name, brand, category, energy, fat, sodium, sugar, protein,
            carbohydrate, productimage
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )?;
    for product in products {
        let n = &product.nutrients;
        statement.execute(rusqlite::params![
            product.barcode,
            product.name,
            product.brand,
            product.category_label,
            n.calories,
            n.fat,
            n.sodium,
            n.sugar,
            n.protein,
            n.carbohydrate,
            product.image,
        ])?;
    }
    Ok(())
}
