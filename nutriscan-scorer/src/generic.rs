//! Generic nutrition formula for products without a category algorithm.
//!
//! Each nutrient gets a sub-score on a nominal `0..=20` scale. The four
//! limiters (calories, fat, sodium, sugar) lose points linearly as they
//! approach their daily reference, and protein gains points linearly up to
//! its reference. Neither direction is clamped: a limiter above its
//! reference goes negative, and protein above its reference exceeds 20.

use nutriscan_core::{Nutrients, RatingDetails};

use crate::{
    ZeroValuePolicy,
    reference::{MAX_CALORIES, MAX_FAT, MAX_SODIUM, MAX_SUGAR, PROTEIN_REFERENCE},
    round_half_up,
};

const SUB_SCORE_MAX: f64 = 20.0;
const SUB_SCORE_COUNT: f64 = 5.0;
const SCORE_SCALE: f64 = 2.0;
const DETAIL_SCALE: f64 = 5.0;

const CALORIES_CREDIT: f64 = 10.0;
const FAT_CREDIT: f64 = 15.0;
const SODIUM_CREDIT: f64 = 15.0;
const SUGAR_CREDIT: f64 = 15.0;
const PROTEIN_CREDIT: f64 = 10.0;

/// Unrounded sub-scores for the five scored nutrients.
///
/// # Examples
/// ```
/// use nutriscan_core::Nutrients;
/// use nutriscan_scorer::{GenericSubScores, ZeroValuePolicy};
///
/// let empty = GenericSubScores::compute(&Nutrients::default(), ZeroValuePolicy::DefaultCredit);
/// assert_eq!(empty.nutrition_score(), 26);
///
/// let literal = GenericSubScores::compute(&Nutrients::default(), ZeroValuePolicy::Formula);
/// assert_eq!(literal.nutrition_score(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenericSubScores {
    /// Energy sub-score.
    pub calories: f64,
    /// Fat sub-score.
    pub fat: f64,
    /// Sodium sub-score.
    pub sodium: f64,
    /// Sugar sub-score.
    pub sugar: f64,
    /// Protein sub-score.
    pub protein: f64,
}

impl GenericSubScores {
    /// Compute every sub-score under `policy`.
    #[must_use]
    pub const fn compute(nutrients: &Nutrients, policy: ZeroValuePolicy) -> Self {
        Self {
            calories: limiter(nutrients.calories, MAX_CALORIES, CALORIES_CREDIT, policy),
            fat: limiter(nutrients.fat, MAX_FAT, FAT_CREDIT, policy),
            sodium: limiter(nutrients.sodium, MAX_SODIUM, SODIUM_CREDIT, policy),
            sugar: limiter(nutrients.sugar, MAX_SUGAR, SUGAR_CREDIT, policy),
            protein: protein(nutrients.protein, policy),
        }
    }

    /// Double the mean of the five sub-scores and round half up.
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is the scaled mean of the sub-scores"
    )]
    #[must_use]
    pub fn nutrition_score(&self) -> i32 {
        let total = self.calories + self.fat + self.sodium + self.sugar + self.protein;
        round_half_up(total / SUB_SCORE_COUNT * SCORE_SCALE)
    }

    /// Scale the four limiter sub-scores to display details.
    ///
    /// Values are rounded but not clamped.
    #[must_use]
    pub fn details(&self) -> RatingDetails {
        RatingDetails {
            calories: detail(self.calories),
            fat: detail(self.fat),
            sodium: detail(self.sodium),
            sugar: detail(self.sugar),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "limiter sub-scores fall linearly with the nutrient"
)]
const fn limiter(value: f64, reference: f64, credit: f64, policy: ZeroValuePolicy) -> f64 {
    if policy.credits(value) {
        credit
    } else {
        SUB_SCORE_MAX - value / reference * SUB_SCORE_MAX
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "protein sub-score rises linearly with the nutrient"
)]
const fn protein(value: f64, policy: ZeroValuePolicy) -> f64 {
    if policy.credits(value) {
        PROTEIN_CREDIT
    } else {
        value / PROTEIN_REFERENCE * SUB_SCORE_MAX
    }
}

#[expect(clippy::float_arithmetic, reason = "details rescale sub-scores")]
fn detail(sub_score: f64) -> i32 {
    round_half_up(sub_score * DETAIL_SCALE)
}
