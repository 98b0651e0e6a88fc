//! Rating engine combining the category algorithms, the generic formula,
//! the final adjustment and the highlights.

use nutriscan_core::{NutrientProfile, Nutrients, Rater, RatingResult};

use crate::{
    CategoryScore, GenericSubScores, ScoringPolicy, category_score, highlights,
    reference::{HIGH_PROTEIN_THRESHOLD, HIGH_SODIUM_THRESHOLD, PROTEIN_BONUS, SODIUM_PENALTY},
};

/// Default [`Rater`] implementation.
///
/// Categories with a dedicated algorithm use its bucket score; every other
/// category uses the generic formula. The display details come from the
/// algorithm's breakdown when it reports one and from the generic
/// sub-scores otherwise, never a mix of the two.
///
/// # Examples
/// ```
/// use nutriscan_core::{NutrientProfile, Nutrients, Rater, RatingDetails};
/// use nutriscan_scorer::NutritionRater;
///
/// let bar = NutrientProfile::new(
///     "96385074",
///     "chocolate",
///     Nutrients {
///         calories: 380.0,
///         fat: 8.0,
///         sodium: 40.0,
///         sugar: 4.0,
///         protein: 6.0,
///         carbohydrate: 15.0,
///     },
/// );
/// let result = NutritionRater::default().rate(&bar);
/// assert_eq!(result.score, 90);
/// assert_eq!(
///     result.rating_details,
///     RatingDetails { calories: 75, fat: 100, sodium: 25, sugar: 150 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NutritionRater {
    policy: ScoringPolicy,
}

impl NutritionRater {
    /// Construct a rater with the given policy.
    #[must_use]
    pub const fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Return the active policy.
    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }
}

impl Rater for NutritionRater {
    fn rate(&self, profile: &NutrientProfile) -> RatingResult {
        let nutrients = &profile.nutrients;
        let category = profile.category();
        let generic = GenericSubScores::compute(nutrients, self.policy.zero_values);

        let (score, rating_details) = match category_score(category, nutrients) {
            Some(CategoryScore {
                score,
                breakdown: Some(breakdown),
            }) => (score, breakdown.details()),
            Some(CategoryScore {
                score,
                breakdown: None,
            }) => (score, generic.details()),
            None => (generic.nutrition_score(), generic.details()),
        };

        let rating = Self::clamp_rating(adjust_rating(score, nutrients));
        RatingResult {
            score,
            rating,
            highlights: highlights(category, nutrients, rating),
            rating_details,
        }
    }
}

/// Apply the protein bonus and the sodium penalty to `score`.
///
/// The result is not clamped.
#[must_use]
pub const fn adjust_rating(score: i32, nutrients: &Nutrients) -> i32 {
    let mut rating = score;
    if nutrients.protein >= HIGH_PROTEIN_THRESHOLD {
        rating = rating.saturating_add(PROTEIN_BONUS);
    }
    if nutrients.sodium > HIGH_SODIUM_THRESHOLD {
        rating = rating.saturating_sub(SODIUM_PENALTY);
    }
    rating
}

/// Rate `profile` with the default policy.
///
/// # Examples
/// ```
/// use nutriscan_core::{Highlight, NutrientProfile, Nutrients};
///
/// let result = nutriscan_scorer::rate(&NutrientProfile::new(
///     "96385074",
///     "",
///     Nutrients::default(),
/// ));
/// assert_eq!(result.rating, 26);
/// assert_eq!(result.highlights[0], Highlight::NeedsImprovement);
/// ```
#[must_use]
pub fn rate(profile: &NutrientProfile) -> RatingResult {
    NutritionRater::default().rate(profile)
}
