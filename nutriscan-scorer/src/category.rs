//! Bucket algorithms for categories with dedicated scoring rules.
//!
//! Each algorithm maps nutrients onto fixed point ladders and sums the
//! points. Chocolate and soft drinks also report a per-nutrient breakdown
//! that replaces the generic display details; snacks do not.

use nutriscan_core::{Category, Nutrients, RatingDetails};

use crate::{reference::DETAIL_SCALE, round_half_up};

/// Points for a value, picked from the first step whose limit it meets.
struct Ladder {
    steps: &'static [(f64, i32)],
    otherwise: i32,
}

impl Ladder {
    const fn new(steps: &'static [(f64, i32)], otherwise: i32) -> Self {
        Self { steps, otherwise }
    }

    /// Points for the first limit `value` does not exceed.
    fn at_most(&self, value: f64) -> i32 {
        self.steps
            .iter()
            .find(|(limit, _)| value <= *limit)
            .map_or(self.otherwise, |&(_, points)| points)
    }

    /// Points for the first limit `value` reaches.
    fn at_least(&self, value: f64) -> i32 {
        self.steps
            .iter()
            .find(|(limit, _)| value >= *limit)
            .map_or(self.otherwise, |&(_, points)| points)
    }
}

const CHOCOLATE_CALORIES: Ladder = Ladder::new(&[(400.0, 15), (500.0, 10)], 5);
const CHOCOLATE_SUGAR: Ladder = Ladder::new(&[(5.0, 30), (15.0, 20), (25.0, 10)], 5);
const CHOCOLATE_FAT: Ladder = Ladder::new(&[(10.0, 20), (20.0, 15), (30.0, 10)], 5);
const CHOCOLATE_SODIUM: Ladder = Ladder::new(&[(50.0, 5), (100.0, 3)], 0);
const CHOCOLATE_CARBOHYDRATE: Ladder = Ladder::new(&[(20.0, 10), (40.0, 5)], 2);
const CHOCOLATE_PROTEIN: Ladder = Ladder::new(&[(5.0, 10), (2.0, 5)], 2);

const SOFT_DRINK_ZERO: i32 = 20;
const SOFT_DRINK_LOW_SODIUM: i32 = 17;
const SOFT_DRINK_LOW_SODIUM_LIMIT: f64 = 5.0;
const SOFT_DRINK_OTHERWISE: i32 = 5;

const SNACK_CALORIES: Ladder = Ladder::new(&[(200.0, 15), (400.0, 10)], 5);
const SNACK_SUGAR: Ladder = Ladder::new(&[(2.0, 20), (5.0, 15), (10.0, 10)], 5);
const SNACK_FAT: Ladder = Ladder::new(&[(3.0, 20), (10.0, 15)], 5);
const SNACK_SODIUM: Ladder = Ladder::new(&[(120.0, 15), (250.0, 10)], 5);
const SNACK_CARBOHYDRATE: Ladder = Ladder::new(&[(20.0, 10)], 5);
const SNACK_PROTEIN_THRESHOLD: f64 = 5.0;
const SNACK_PROTEIN_PER_GRAM: f64 = 2.0;
const SNACK_PROTEIN_CAP: f64 = 20.0;
const SNACK_PROTEIN_OTHERWISE: f64 = 5.0;

/// Bucket points a category algorithm awarded per nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    /// Energy points.
    pub calories: i32,
    /// Fat points.
    pub fat: i32,
    /// Sodium points.
    pub sodium: i32,
    /// Sugar points.
    pub sugar: i32,
    /// Carbohydrate points, when the algorithm scores carbohydrate.
    pub carbohydrate: Option<i32>,
}

impl Breakdown {
    /// Scale the displayed nutrients by five.
    ///
    /// Carbohydrate is not displayed. A ladder worth more than 20 points
    /// (chocolate sugar) yields details above 100.
    #[must_use]
    pub const fn details(&self) -> RatingDetails {
        RatingDetails {
            calories: self.calories * DETAIL_SCALE,
            fat: self.fat * DETAIL_SCALE,
            sodium: self.sodium * DETAIL_SCALE,
            sugar: self.sugar * DETAIL_SCALE,
        }
    }
}

/// Result of a category algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    /// Sum of all bucket points, rounded half up.
    pub score: i32,
    /// Per-nutrient points, for algorithms that report them.
    pub breakdown: Option<Breakdown>,
}

/// Run the algorithm for `category`, or return `None` for
/// [`Category::General`].
///
/// # Examples
/// ```
/// use nutriscan_core::{Category, Nutrients};
/// use nutriscan_scorer::category_score;
///
/// let drink = category_score(Category::SoftDrink, &Nutrients::default()).expect("soft drink");
/// assert_eq!(drink.score, 77);
/// assert!(category_score(Category::General, &Nutrients::default()).is_none());
/// ```
#[must_use]
pub fn category_score(category: Category, nutrients: &Nutrients) -> Option<CategoryScore> {
    match category {
        Category::Chocolate => Some(score_chocolate(nutrients)),
        Category::SoftDrink => Some(score_soft_drink(nutrients)),
        Category::Snack => Some(score_snack(nutrients)),
        Category::General => None,
    }
}

/// Score a chocolate product. Protein counts towards the score but is left
/// out of the breakdown.
#[must_use]
pub fn score_chocolate(nutrients: &Nutrients) -> CategoryScore {
    let breakdown = Breakdown {
        calories: CHOCOLATE_CALORIES.at_most(nutrients.calories),
        fat: CHOCOLATE_FAT.at_most(nutrients.fat),
        sodium: CHOCOLATE_SODIUM.at_most(nutrients.sodium),
        sugar: CHOCOLATE_SUGAR.at_most(nutrients.sugar),
        carbohydrate: Some(CHOCOLATE_CARBOHYDRATE.at_most(nutrients.carbohydrate)),
    };
    let protein = CHOCOLATE_PROTEIN.at_least(nutrients.protein);
    let score = breakdown.calories
        + breakdown.fat
        + breakdown.sodium
        + breakdown.sugar
        + breakdown.carbohydrate.unwrap_or_default()
        + protein;
    CategoryScore {
        score,
        breakdown: Some(breakdown),
    }
}

/// Score a soft drink. Only exact zeros (and sodium up to 5 mg) earn the
/// high buckets.
#[must_use]
pub const fn score_soft_drink(nutrients: &Nutrients) -> CategoryScore {
    let breakdown = Breakdown {
        calories: zero_or_otherwise(nutrients.calories),
        fat: zero_or_otherwise(nutrients.fat),
        sodium: if nutrients.sodium <= SOFT_DRINK_LOW_SODIUM_LIMIT {
            SOFT_DRINK_LOW_SODIUM
        } else {
            SOFT_DRINK_OTHERWISE
        },
        sugar: zero_or_otherwise(nutrients.sugar),
        carbohydrate: None,
    };
    CategoryScore {
        score: breakdown.calories + breakdown.fat + breakdown.sodium + breakdown.sugar,
        breakdown: Some(breakdown),
    }
}

/// Score a snack. Protein from 5 g earns two points per gram, capped at 20.
#[expect(
    clippy::float_arithmetic,
    reason = "snack protein points scale with grams"
)]
#[must_use]
pub fn score_snack(nutrients: &Nutrients) -> CategoryScore {
    let buckets = SNACK_CALORIES.at_most(nutrients.calories)
        + SNACK_SUGAR.at_most(nutrients.sugar)
        + SNACK_FAT.at_most(nutrients.fat)
        + SNACK_SODIUM.at_most(nutrients.sodium)
        + SNACK_CARBOHYDRATE.at_most(nutrients.carbohydrate);
    let protein = if nutrients.protein >= SNACK_PROTEIN_THRESHOLD {
        (nutrients.protein * SNACK_PROTEIN_PER_GRAM).min(SNACK_PROTEIN_CAP)
    } else {
        SNACK_PROTEIN_OTHERWISE
    };
    CategoryScore {
        score: round_half_up(f64::from(buckets) + protein),
        breakdown: None,
    }
}

const fn zero_or_otherwise(value: f64) -> i32 {
    if value == 0.0 {
        SOFT_DRINK_ZERO
    } else {
        SOFT_DRINK_OTHERWISE
    }
}
