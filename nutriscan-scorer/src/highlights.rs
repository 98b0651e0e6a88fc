//! Qualitative highlights attached to a rating.

use nutriscan_core::{Category, Highlight, Nutrients};

use crate::reference::{
    HIGH_PROTEIN_THRESHOLD, LOW_CALORIES_LIMIT, LOW_FAT_LIMIT, LOW_SODIUM_LIMIT, LOW_SUGAR_LIMIT,
};

const SOFT_DRINK_LOW_SUGAR_LIMIT: f64 = 5.0;
const SOFT_DRINK_LOW_CALORIE_LIMIT: f64 = 25.0;

/// Build the highlights for a product with the given final `rating`.
///
/// The tier highlight always comes first. Soft drinks get their own tiers
/// and nutrient checks; every other category shares the general set.
///
/// # Examples
/// ```
/// use nutriscan_core::{Category, Highlight, Nutrients};
/// use nutriscan_scorer::highlights;
///
/// let tags = highlights(Category::SoftDrink, &Nutrients::default(), 77);
/// assert_eq!(
///     tags,
///     [
///         Highlight::GoodSoftDrink,
///         Highlight::LowSugarContent,
///         Highlight::LowCalorie,
///         Highlight::FatFree,
///     ]
/// );
/// ```
#[must_use]
pub fn highlights(category: Category, nutrients: &Nutrients, rating: u8) -> Vec<Highlight> {
    match category {
        Category::SoftDrink => soft_drink_highlights(nutrients, rating),
        Category::Snack | Category::Chocolate | Category::General => {
            general_highlights(nutrients, rating)
        }
    }
}

fn soft_drink_highlights(nutrients: &Nutrients, rating: u8) -> Vec<Highlight> {
    let tier = match rating {
        85.. => Highlight::ExcellentSoftDrink,
        70..=84 => Highlight::GoodSoftDrink,
        50..=69 => Highlight::ModerateSoftDrink,
        _ => Highlight::UnhealthySoftDrink,
    };
    let checks = [
        (
            nutrients.sugar <= SOFT_DRINK_LOW_SUGAR_LIMIT,
            Highlight::LowSugarContent,
        ),
        (
            nutrients.calories <= SOFT_DRINK_LOW_CALORIE_LIMIT,
            Highlight::LowCalorie,
        ),
        (nutrients.fat == 0.0, Highlight::FatFree),
    ];
    with_tier(tier, checks)
}

fn general_highlights(nutrients: &Nutrients, rating: u8) -> Vec<Highlight> {
    let tier = match rating {
        90.. => Highlight::ExcellentProfile,
        70..=89 => Highlight::GoodBalance,
        50..=69 => Highlight::ModerateValue,
        _ => Highlight::NeedsImprovement,
    };
    let checks = [
        (
            is_low(nutrients.calories, LOW_CALORIES_LIMIT),
            Highlight::LowCalorie,
        ),
        (is_low(nutrients.fat, LOW_FAT_LIMIT), Highlight::LowFat),
        (
            is_low(nutrients.sodium, LOW_SODIUM_LIMIT),
            Highlight::LowSodium,
        ),
        (is_low(nutrients.sugar, LOW_SUGAR_LIMIT), Highlight::LowSugar),
        (
            nutrients.protein >= HIGH_PROTEIN_THRESHOLD,
            Highlight::HighProtein,
        ),
        (nutrients.calories == 0.0, Highlight::ZeroCalories),
        (nutrients.fat == 0.0, Highlight::ZeroFat),
        (nutrients.sugar == 0.0, Highlight::ZeroSugar),
    ];
    with_tier(tier, checks)
}

fn with_tier<const N: usize>(tier: Highlight, checks: [(bool, Highlight); N]) -> Vec<Highlight> {
    std::iter::once(tier)
        .chain(
            checks
                .into_iter()
                .filter_map(|(hit, highlight)| hit.then_some(highlight)),
        )
        .collect()
}

/// Present and within the low-nutrient limit.
const fn is_low(value: f64, limit: f64) -> bool {
    value > 0.0 && value <= limit
}
