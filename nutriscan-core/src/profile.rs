//! Nutrient profiles: a product's identity plus the facts the rating engine
//! scores.

use crate::Category;

/// Nutrient facts per reference serving.
///
/// Values are plain numbers; zero means "zero" as far as this type is
/// concerned. How a zero is scored is decided by the rating engine.
///
/// # Examples
/// ```
/// use nutriscan_core::Nutrients;
///
/// let nutrients = Nutrients::default().with_sugar(4.0).with_protein(6.0);
/// assert_eq!(nutrients.sugar, 4.0);
/// assert_eq!(nutrients.fat, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Nutrients {
    /// Energy in kcal.
    pub calories: f64,
    /// Fat in grams.
    pub fat: f64,
    /// Sodium in milligrams.
    pub sodium: f64,
    /// Sugar in grams.
    pub sugar: f64,
    /// Protein in grams.
    pub protein: f64,
    /// Carbohydrate in grams.
    pub carbohydrate: f64,
}

impl Nutrients {
    /// Set calories while returning `self` for chaining.
    #[must_use]
    pub const fn with_calories(mut self, calories: f64) -> Self {
        self.calories = calories;
        self
    }

    /// Set fat while returning `self` for chaining.
    #[must_use]
    pub const fn with_fat(mut self, fat: f64) -> Self {
        self.fat = fat;
        self
    }

    /// Set sodium while returning `self` for chaining.
    #[must_use]
    pub const fn with_sodium(mut self, sodium: f64) -> Self {
        self.sodium = sodium;
        self
    }

    /// Set sugar while returning `self` for chaining.
    #[must_use]
    pub const fn with_sugar(mut self, sugar: f64) -> Self {
        self.sugar = sugar;
        self
    }

    /// Set protein while returning `self` for chaining.
    #[must_use]
    pub const fn with_protein(mut self, protein: f64) -> Self {
        self.protein = protein;
        self
    }

    /// Set carbohydrate while returning `self` for chaining.
    #[must_use]
    pub const fn with_carbohydrate(mut self, carbohydrate: f64) -> Self {
        self.carbohydrate = carbohydrate;
        self
    }
}

/// A product as seen by the rating engine.
///
/// `barcode`, `name`, `brand` and `image` identify the product and are carried
/// through untouched. `category` is the datastore's free-text label; use
/// [`NutrientProfile::category`] for the resolved [`Category`].
///
/// # Examples
/// ```
/// use nutriscan_core::{Category, NutrientProfile, Nutrients};
///
/// let profile = NutrientProfile::new("96385074", "Chocolate", Nutrients::default())
///     .with_name("Dark 85%");
/// assert_eq!(profile.category(), Category::Chocolate);
/// assert_eq!(profile.category_label, "Chocolate");
/// assert_eq!(profile.name, "Dark 85%");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NutrientProfile {
    /// Barcode as stored by the datastore.
    pub barcode: String,
    /// Display name.
    pub name: String,
    /// Manufacturer or brand.
    pub brand: String,
    /// Image reference, usually a URL.
    pub image: String,
    /// Free-text category label.
    #[cfg_attr(feature = "serde", serde(rename = "category"))]
    pub category_label: String,
    /// Nutrient facts.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub nutrients: Nutrients,
}

impl NutrientProfile {
    /// Construct a profile with empty name, brand and image.
    pub fn new(
        barcode: impl Into<String>,
        category_label: impl Into<String>,
        nutrients: Nutrients,
    ) -> Self {
        Self {
            barcode: barcode.into(),
            category_label: category_label.into(),
            nutrients,
            ..Self::default()
        }
    }

    /// Set the display name while returning `self` for chaining.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the brand while returning `self` for chaining.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the image reference while returning `self` for chaining.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Resolve the category label, ignoring case.
    #[must_use]
    pub fn category(&self) -> Category {
        Category::from_label(&self.category_label)
    }
}
