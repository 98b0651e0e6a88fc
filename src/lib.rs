//! Facade crate for the Nutriscan rating engine.
//!
//! This crate re-exports the product model, the nutrition rater and the
//! alternative ranker, and exposes the SQLite product store behind a
//! feature flag.
//!
//! ```
//! use nutriscan_engine::{NutrientProfile, Nutrients, NutritionRater, Rater};
//!
//! let drink = NutrientProfile::new("96385074", "soft-drink", Nutrients::default());
//! assert_eq!(NutritionRater::default().rate(&drink).rating, 77);
//! ```

#![forbid(unsafe_code)]

pub use nutriscan_core::{
    Barcode, BarcodeError, Category, Highlight, NutrientProfile, Nutrients, ProductStore, Rater,
    RatingDetails, RatingResult, RawProductRecord, RawValue, ScoredAlternative, StoreError,
    store::DEFAULT_ALTERNATIVES_LIMIT,
};
pub use nutriscan_scorer::{
    AlternativeRanker, LogObserver, NoopObserver, NutritionRater, RankObserver, ScoringPolicy,
    ZeroValuePolicy, rate,
};

#[cfg(feature = "store-sqlite")]
pub use nutriscan_core::{SqliteProductStore, SqliteProductStoreError};

#[cfg(feature = "test-support")]
pub use nutriscan_core::{MemoryProductStore, test_support};
