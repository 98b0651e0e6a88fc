//! Loosely typed product records as delivered by datastores.
//!
//! Rows often carry numeric columns as text, nulls, or omit them entirely.
//! Everything is coerced to a finite `f64` before it reaches the rating
//! engine: numbers pass through, text is trimmed and parsed, and anything
//! else (missing, null, unparsable, non-finite) becomes `0.0`.

use crate::{NutrientProfile, Nutrients};

/// A single raw column value.
///
/// # Examples
/// ```
/// use nutriscan_core::RawValue;
///
/// assert_eq!(RawValue::Text(" 12.5 ".into()).coerce(), 12.5);
/// assert_eq!(RawValue::Text("n/a".into()).coerce(), 0.0);
/// assert_eq!(RawValue::Number(f64::NAN).coerce(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "wire::WireValue"))]
pub enum RawValue {
    /// A numeric value.
    Number(f64),
    /// A textual value that may hold a number.
    Text(String),
    /// Any other shape (booleans, arrays, objects).
    Unsupported,
}

impl RawValue {
    /// Coerce the value to a finite number, defaulting to `0.0`.
    #[must_use]
    pub fn coerce(&self) -> f64 {
        let value = match self {
            Self::Number(number) => *number,
            Self::Text(text) => parse_text(text),
            Self::Unsupported => 0.0,
        };
        if value.is_finite() { value } else { 0.0 }
    }

    /// Render the value as an identifier, as used for barcodes.
    ///
    /// Integral numbers print without a fractional part.
    #[must_use]
    pub fn to_identifier(&self) -> String {
        match self {
            Self::Number(number) if number.is_finite() && number.fract() == 0.0 => {
                format!("{number:.0}")
            }
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.trim().to_owned(),
            Self::Unsupported => String::new(),
        }
    }
}

fn parse_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or_else(|_| {
        log::warn!("coercing unparsable nutrient value {trimmed:?} to 0");
        0.0
    })
}

fn coerce(value: Option<&RawValue>) -> f64 {
    value.map_or(0.0, RawValue::coerce)
}

/// A product row before coercion.
///
/// Field aliases accept the column names used by the `products` table:
/// `energy` for calories, `carbs` for carbohydrate and `productimage` for the
/// image reference. Unknown fields are ignored.
///
/// # Examples
/// ```
/// use nutriscan_core::{RawProductRecord, RawValue};
///
/// let record = RawProductRecord {
///     barcode: Some(RawValue::Number(96_385_074.0)),
///     category: Some("snack".into()),
///     calories: Some(RawValue::Text("150".into())),
///     sugar: None,
///     ..RawProductRecord::default()
/// };
/// let profile = record.into_profile();
/// assert_eq!(profile.barcode, "96385074");
/// assert_eq!(profile.nutrients.calories, 150.0);
/// assert_eq!(profile.nutrients.sugar, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawProductRecord {
    /// Barcode as a number or string.
    pub barcode: Option<RawValue>,
    /// Display name.
    pub name: Option<String>,
    /// Manufacturer or brand.
    pub brand: Option<String>,
    /// Image reference.
    #[cfg_attr(feature = "serde", serde(alias = "productimage"))]
    pub image: Option<String>,
    /// Free-text category label.
    pub category: Option<String>,
    /// Energy in kcal.
    #[cfg_attr(feature = "serde", serde(alias = "energy"))]
    pub calories: Option<RawValue>,
    /// Fat in grams.
    pub fat: Option<RawValue>,
    /// Sodium in milligrams.
    pub sodium: Option<RawValue>,
    /// Sugar in grams.
    pub sugar: Option<RawValue>,
    /// Protein in grams.
    pub protein: Option<RawValue>,
    /// Carbohydrate in grams.
    #[cfg_attr(feature = "serde", serde(alias = "carbs"))]
    pub carbohydrate: Option<RawValue>,
}

impl RawProductRecord {
    /// Coerce every field and build a [`NutrientProfile`].
    #[must_use]
    pub fn into_profile(self) -> NutrientProfile {
        let nutrients = Nutrients {
            calories: coerce(self.calories.as_ref()),
            fat: coerce(self.fat.as_ref()),
            sodium: coerce(self.sodium.as_ref()),
            sugar: coerce(self.sugar.as_ref()),
            protein: coerce(self.protein.as_ref()),
            carbohydrate: coerce(self.carbohydrate.as_ref()),
        };
        NutrientProfile {
            barcode: self
                .barcode
                .as_ref()
                .map(RawValue::to_identifier)
                .unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            category_label: self.category.unwrap_or_default(),
            nutrients,
        }
    }
}

impl From<RawProductRecord> for NutrientProfile {
    fn from(record: RawProductRecord) -> Self {
        record.into_profile()
    }
}

#[cfg(feature = "serde")]
mod wire {
    //! Untagged wire shape used to deserialise [`RawValue`].

    use serde::{Deserialize, de::IgnoredAny};

    use super::RawValue;

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(super) enum WireValue {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    impl From<WireValue> for RawValue {
        fn from(value: WireValue) -> Self {
            match value {
                WireValue::Number(number) => Self::Number(number),
                WireValue::Text(text) => Self::Text(text),
                WireValue::Other(_) => Self::Unsupported,
            }
        }
    }
}
