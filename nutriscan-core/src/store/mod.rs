//! Data access traits for products.
//!
//! The `ProductStore` trait defines a read-only interface for retrieving
//! [`NutrientProfile`] values: a single product by barcode, and a bounded set
//! of candidate alternatives from the same category.

use thiserror::Error;

use crate::{Barcode, NutrientProfile};

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteProductStore, SqliteProductStoreError};
#[cfg(feature = "store-sqlite")]
pub(crate) use sqlite::PRODUCTS_SCHEMA;

/// Number of alternatives fetched per lookup unless configured otherwise.
pub const DEFAULT_ALTERNATIVES_LIMIT: usize = 3;

/// Errors raised by [`ProductStore`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product matched the barcode.
    #[error("no product found for barcode {barcode}")]
    NotFound {
        /// Barcode that was looked up.
        barcode: Barcode,
    },
    /// The backing store could not be reached or queried.
    #[error("product store unavailable: {source}")]
    Connection {
        /// Underlying transport or driver error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    /// Wrap a transport or driver failure.
    pub fn connection<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            source: Box::new(source),
        }
    }

    /// Report whether the error means the product does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Read-only access to persisted products.
///
/// Category matching in [`ProductStore::find_alternatives`] compares the raw
/// label exactly; case folding is the rating engine's business.
///
/// # Examples
///
/// ```rust
/// use nutriscan_core::{Barcode, NutrientProfile, Nutrients, ProductStore, StoreError};
///
/// struct SingleProduct(NutrientProfile);
///
/// impl ProductStore for SingleProduct {
///     fn find_by_barcode(&self, barcode: &Barcode) -> Result<NutrientProfile, StoreError> {
///         if barcode.matches(&self.0.barcode) {
///             Ok(self.0.clone())
///         } else {
///             Err(StoreError::NotFound { barcode: barcode.clone() })
///         }
///     }
///
///     fn find_alternatives(
///         &self,
///         _category: &str,
///         _exclude: &str,
///         _limit: usize,
///     ) -> Result<Vec<NutrientProfile>, StoreError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let store = SingleProduct(NutrientProfile::new("96385074", "snack", Nutrients::default()));
/// let barcode = Barcode::parse("96385074").expect("valid barcode");
/// assert_eq!(store.find_by_barcode(&barcode).expect("found").barcode, "96385074");
/// ```
pub trait ProductStore {
    /// Return the product stored under `barcode`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no product matches and
    /// [`StoreError::Connection`] when the store cannot be queried.
    fn find_by_barcode(&self, barcode: &Barcode) -> Result<NutrientProfile, StoreError>;

    /// Return up to `limit` products labelled `category`, excluding `exclude`.
    ///
    /// `exclude` is the barcode as the store itself reports it (usually the
    /// `barcode` of a profile previously returned by
    /// [`ProductStore::find_by_barcode`]), so it need not be a valid
    /// [`Barcode`]. Results keep storage order.
    ///
    /// # Errors
    /// Returns [`StoreError::Connection`] when the store cannot be queried.
    fn find_alternatives(
        &self,
        category: &str,
        exclude: &str,
        limit: usize,
    ) -> Result<Vec<NutrientProfile>, StoreError>;
}
