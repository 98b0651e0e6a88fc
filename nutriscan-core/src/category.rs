//! Product categories with dedicated scoring rules.
//!
//! Datastores label products with free text. The rating engine only cares
//! whether that label names one of the categories it has a bucket algorithm
//! for; every other label, including an empty one, is [`Category::General`].
//!
//! # Examples
//! ```
//! use nutriscan_core::Category;
//!
//! assert_eq!(Category::from_label("Soft-Drink"), Category::SoftDrink);
//! assert_eq!(Category::from_label("cereal"), Category::General);
//! assert_eq!(Category::Chocolate.to_string(), "chocolate");
//! ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Carbonated and still soft drinks.
    SoftDrink,
    /// Savoury and sweet snacks.
    Snack,
    /// Chocolate bars and confectionery.
    Chocolate,
    /// Anything without a dedicated algorithm.
    #[default]
    General,
}

impl Category {
    /// Categories that carry their own bucket algorithm.
    pub const SPECIFIC: [Self; 3] = [Self::SoftDrink, Self::Snack, Self::Chocolate];

    /// Resolve a free-text label.
    ///
    /// Matching lowercases the label and compares it exactly; surrounding
    /// whitespace is significant.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let key = label.to_lowercase();
        Self::SPECIFIC
            .into_iter()
            .find(|category| key == category.as_str())
            .unwrap_or_default()
    }

    /// Return the registry key, or `"general"` for the fallback.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SoftDrink => "soft-drink",
            Self::Snack => "snack",
            Self::Chocolate => "chocolate",
            Self::General => "general",
        }
    }

    /// Report whether the category has a dedicated algorithm.
    #[must_use]
    pub const fn is_specific(self) -> bool {
        !matches!(self, Self::General)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}
