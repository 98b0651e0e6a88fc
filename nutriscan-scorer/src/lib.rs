//! Rating engine and alternative ranker for packaged-food products.
//!
//! The crate provides two capabilities on top of `nutriscan-core`:
//! - **Rating**: [`NutritionRater`] implements the
//!   [`Rater`](nutriscan_core::Rater) trait. Soft drinks, snacks and
//!   chocolate use dedicated bucket algorithms; every other category uses
//!   the generic formula over daily reference values. The score is then
//!   adjusted for high protein and high sodium, clamped to `0..=100` and
//!   annotated with highlights.
//! - **Ranking**: [`AlternativeRanker`] rates a pool of same-category
//!   candidates with the same rater and keeps those that strictly outscore
//!   the target, best first. Diagnostics go to a [`RankObserver`].
//!
//! Both are pure: nothing is cached between calls.
//!
//! # Examples
//!
//! ```
//! use nutriscan_core::{NutrientProfile, Nutrients, Rater};
//! use nutriscan_scorer::{AlternativeRanker, NoopObserver, NutritionRater};
//!
//! let cola = NutrientProfile::new(
//!     "5000112637922",
//!     "soft-drink",
//!     Nutrients::default().with_calories(42.0).with_sugar(10.6),
//! );
//! let zero = NutrientProfile::new("5000112637939", "soft-drink", Nutrients::default());
//!
//! let rater = NutritionRater::default();
//! assert_eq!(rater.rate(&zero).rating, 77);
//!
//! let ranker = AlternativeRanker::with_observer(rater, NoopObserver);
//! let better = ranker.rank(vec![zero], &cola, "soft-drink");
//! assert_eq!(better[0].score, 77);
//! ```

#![forbid(unsafe_code)]

pub mod category;
mod generic;
mod highlights;
mod policy;
mod ranker;
mod rater;
pub mod reference;

pub use category::{Breakdown, CategoryScore, category_score};
pub use generic::GenericSubScores;
pub use highlights::highlights;
pub use policy::{ScoringPolicy, ZeroValuePolicy};
pub use ranker::{AlternativeRanker, LogObserver, NoopObserver, RankObserver};
pub use rater::{NutritionRater, adjust_rating, rate};

/// Round half up, as `floor(value + 0.5)`.
///
/// Halves round towards positive infinity, so `-2.5` becomes `-2`. Values
/// outside the `i32` range saturate and `NaN` becomes `0`.
#[expect(clippy::float_arithmetic, reason = "rounding offsets by one half")]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is floored and the cast saturates"
)]
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::round_half_up;
    use rstest::rstest;

    #[rstest]
    #[case(89.5, 90)]
    #[case(89.49, 89)]
    #[case(2.5, 3)]
    #[case(-2.5, -2)]
    #[case(-0.5, 0)]
    #[case(-0.51, -1)]
    #[case(f64::NAN, 0)]
    #[case(f64::INFINITY, i32::MAX)]
    #[case(f64::NEG_INFINITY, i32::MIN)]
    fn rounds_half_up(#[case] value: f64, #[case] expected: i32) {
        assert_eq!(round_half_up(value), expected);
    }
}
