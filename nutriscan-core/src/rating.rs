//! Rating outputs handed to presentation layers.

use std::fmt;

use crate::NutrientProfile;

/// Qualitative badge attached to a rating.
///
/// Tier variants summarise the final rating; the rest flag individual
/// nutrients. Each variant renders as the text shown to users.
///
/// # Examples
/// ```
/// use nutriscan_core::Highlight;
///
/// assert_eq!(Highlight::FatFree.as_str(), "Fat-free");
/// assert_eq!(Highlight::NeedsImprovement.to_string(), "Needs improvement");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// Soft drink rated 85 or above.
    ExcellentSoftDrink,
    /// Soft drink rated 70 or above.
    GoodSoftDrink,
    /// Soft drink rated 50 or above.
    ModerateSoftDrink,
    /// Soft drink rated below 50.
    UnhealthySoftDrink,
    /// Soft drink with at most 5 g sugar.
    LowSugarContent,
    /// Low energy for the product's category.
    LowCalorie,
    /// Soft drink without fat.
    FatFree,
    /// Product rated 90 or above.
    ExcellentProfile,
    /// Product rated 70 or above.
    GoodBalance,
    /// Product rated 50 or above.
    ModerateValue,
    /// Product rated below 50.
    NeedsImprovement,
    /// Fat within 70% of the daily reference.
    LowFat,
    /// Sodium within 70% of the daily reference.
    LowSodium,
    /// Sugar within 70% of the daily reference.
    LowSugar,
    /// Protein at 150% of the daily reference or more.
    HighProtein,
    /// No energy at all.
    ZeroCalories,
    /// No fat at all.
    ZeroFat,
    /// No sugar at all.
    ZeroSugar,
}

impl Highlight {
    /// Return the display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExcellentSoftDrink => "Excellent soft drink choice!",
            Self::GoodSoftDrink => "Good soft drink choice",
            Self::ModerateSoftDrink => "Moderate soft drink choice",
            Self::UnhealthySoftDrink => "Unhealthy soft drink",
            Self::LowSugarContent => "Low sugar content",
            Self::LowCalorie => "Low calorie",
            Self::FatFree => "Fat-free",
            Self::ExcellentProfile => "Excellent nutritional profile!",
            Self::GoodBalance => "Good nutritional balance",
            Self::ModerateValue => "Moderate nutritional value",
            Self::NeedsImprovement => "Needs improvement",
            Self::LowFat => "Low fat",
            Self::LowSodium => "Low sodium",
            Self::LowSugar => "Low sugar",
            Self::HighProtein => "High protein",
            Self::ZeroCalories => "Zero calories",
            Self::ZeroFat => "Zero fat",
            Self::ZeroSugar => "Zero sugar",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Highlight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-nutrient display scores, nominally `0..=100`.
///
/// Values are not clamped. A category breakdown can exceed 100 (a top sugar
/// bucket maps to 150) and the generic formula can go negative for extreme
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RatingDetails {
    /// Energy sub-score.
    pub calories: i32,
    /// Fat sub-score.
    pub fat: i32,
    /// Sodium sub-score.
    pub sodium: i32,
    /// Sugar sub-score.
    pub sugar: i32,
}

/// The outcome of rating one product.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RatingResult {
    /// Category or generic nutrition score before adjustments. Unbounded.
    pub score: i32,
    /// Final rating after bonus and penalty, clamped to `0..=100`.
    pub rating: u8,
    /// Badges in the order their checks ran.
    pub highlights: Vec<Highlight>,
    /// Display sub-scores for calories, fat, sodium and sugar.
    pub rating_details: RatingDetails,
}

impl RatingResult {
    /// Report whether a highlight was produced.
    #[must_use]
    pub fn has_highlight(&self, highlight: Highlight) -> bool {
        self.highlights.contains(&highlight)
    }
}

/// A candidate product together with its computed score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredAlternative {
    /// The candidate as supplied.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub profile: NutrientProfile,
    /// The candidate's nutrition score.
    pub score: i32,
    /// Highlights from rating the candidate.
    pub highlights: Vec<Highlight>,
}

impl ScoredAlternative {
    /// Attach a rating to a profile.
    #[must_use]
    pub fn new(profile: NutrientProfile, rating: RatingResult) -> Self {
        Self {
            profile,
            score: rating.score,
            highlights: rating.highlights,
        }
    }

    /// Discard the score and return the candidate.
    #[must_use]
    pub fn into_profile(self) -> NutrientProfile {
        self.profile
    }
}
