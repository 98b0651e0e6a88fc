//! Core domain types for the Nutriscan engine.
//!
//! The crate defines the product model consumed by the rating engine, the
//! outputs it produces, and the collaborator traits around it:
//! - [`Barcode`] validates scanned or typed barcodes before any lookup.
//! - [`NutrientProfile`] carries a product's identity and nutrient facts.
//! - [`RawProductRecord`] coerces loosely typed datastore rows into profiles.
//! - [`Rater`] turns a profile into a [`RatingResult`].
//! - [`ProductStore`] fetches products and same-category candidates.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod barcode;
pub mod category;
pub mod profile;
pub mod rater;
pub mod rating;
pub mod raw;
pub mod store;
pub mod test_support;

pub use barcode::{Barcode, BarcodeError};
pub use category::Category;
pub use profile::{NutrientProfile, Nutrients};
pub use rater::Rater;
pub use rating::{Highlight, RatingDetails, RatingResult, ScoredAlternative};
pub use raw::{RawProductRecord, RawValue};
pub use store::{ProductStore, StoreError};

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteProductStore, SqliteProductStoreError};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub use test_support::MemoryProductStore;
