//! Property-based tests for the rating engine and the alternative ranker.
//!
//! # Invariants tested
//!
//! - **Bounded rating:** every profile rates within `0..=100`.
//! - **Determinism:** rating the same profile twice gives the same result.
//! - **Case-insensitive categories:** label case never changes the result.
//! - **Breakdown details:** chocolate and soft-drink details are multiples
//!   of five within `0..=150`.
//! - **Better alternatives only:** every ranked candidate outscores the
//!   target, never shares its barcode, and results are sorted best first.

use nutriscan_core::{NutrientProfile, Nutrients, Rater};
use nutriscan_scorer::{
    AlternativeRanker, NoopObserver, NutritionRater, ScoringPolicy, ZeroValuePolicy,
};
use proptest::prelude::*;

fn nutrient_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        0.0_f64..50.0,
        0.0_f64..3000.0,
        0.0_f64..1.0e6,
    ]
}

fn nutrients_strategy() -> impl Strategy<Value = Nutrients> {
    (
        nutrient_value(),
        nutrient_value(),
        nutrient_value(),
        nutrient_value(),
        nutrient_value(),
        nutrient_value(),
    )
        .prop_map(|(calories, fat, sodium, sugar, protein, carbohydrate)| Nutrients {
            calories,
            fat,
            sodium,
            sugar,
            protein,
            carbohydrate,
        })
}

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("soft-drink".to_owned()),
        Just("snack".to_owned()),
        Just("chocolate".to_owned()),
        Just("cereal".to_owned()),
        Just(String::new()),
    ]
}

fn policy_strategy() -> impl Strategy<Value = ScoringPolicy> {
    prop_oneof![
        Just(ScoringPolicy::with_zero_values(ZeroValuePolicy::DefaultCredit)),
        Just(ScoringPolicy::with_zero_values(ZeroValuePolicy::Formula)),
    ]
}

fn profile_strategy() -> impl Strategy<Value = NutrientProfile> {
    (label_strategy(), nutrients_strategy())
        .prop_map(|(label, nutrients)| NutrientProfile::new("96385074", label, nutrients))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rating_stays_within_bounds(
        profile in profile_strategy(),
        policy in policy_strategy(),
    ) {
        let result = NutritionRater::new(policy).rate(&profile);
        prop_assert!(result.rating <= 100, "rating {} above 100", result.rating);
    }

    #[test]
    fn rating_is_deterministic(profile in profile_strategy()) {
        let rater = NutritionRater::default();
        prop_assert_eq!(rater.rate(&profile), rater.rate(&profile));
    }

    #[test]
    fn category_case_is_ignored(profile in profile_strategy()) {
        let rater = NutritionRater::default();
        let mut shouted = profile.clone();
        shouted.category_label = profile.category_label.to_uppercase();
        prop_assert_eq!(rater.rate(&shouted), rater.rate(&profile));
    }

    #[test]
    fn breakdown_details_are_bounded(
        nutrients in nutrients_strategy(),
        label in prop_oneof![Just("chocolate"), Just("soft-drink")],
    ) {
        let profile = NutrientProfile::new("96385074", label, nutrients);
        let details = NutritionRater::default().rate(&profile).rating_details;
        for value in [details.calories, details.fat, details.sodium, details.sugar] {
            prop_assert!((0..=150).contains(&value), "detail {} out of range", value);
            prop_assert_eq!(value.rem_euclid(5), 0);
        }
    }

    #[test]
    fn ranked_alternatives_strictly_outscore_target(
        target in nutrients_strategy(),
        pool in proptest::collection::vec(nutrients_strategy(), 0..12),
    ) {
        let rater = NutritionRater::default();
        let target = NutrientProfile::new("30000000", "snack", target);
        let target_score = rater.rate(&target).score;
        let mut candidates: Vec<NutrientProfile> = pool
            .into_iter()
            .enumerate()
            .map(|(idx, nutrients)| {
                NutrientProfile::new(format!("{:08}", 30_000_001 + idx), "snack", nutrients)
            })
            .collect();
        candidates.push(target.clone());

        let ranked = AlternativeRanker::with_observer(rater, NoopObserver)
            .rank(candidates, &target, "snack");

        for alternative in &ranked {
            prop_assert!(alternative.score > target_score);
            prop_assert_ne!(&alternative.profile.barcode, &target.barcode);
        }
        prop_assert!(ranked.is_sorted_by(|better, worse| better.score >= worse.score));
    }
}
