//! Rank same-category alternatives that outscore a target product.

use std::cmp::Reverse;

use nutriscan_core::{NutrientProfile, Rater, ScoredAlternative};

/// Hook receiving ranking diagnostics.
///
/// Every method defaults to a no-op, so observers implement only what they
/// need.
pub trait RankObserver {
    /// Called once with the target's score.
    fn target_scored(&self, _target: &NutrientProfile, _score: i32) {}

    /// Called for each candidate that passed the category and barcode filter.
    fn candidate_scored(&self, _candidate: &NutrientProfile, _score: i32) {}

    /// Called with the final, ordered alternatives.
    fn ranked(&self, _alternatives: &[ScoredAlternative]) {}
}

/// Observer forwarding diagnostics to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl RankObserver for LogObserver {
    fn target_scored(&self, target: &NutrientProfile, score: i32) {
        log::debug!("target {} scored {score}", target.barcode);
    }

    fn candidate_scored(&self, candidate: &NutrientProfile, score: i32) {
        log::debug!("alternative {} scored {score}", candidate.barcode);
    }

    fn ranked(&self, alternatives: &[ScoredAlternative]) {
        log::debug!(
            "kept {} better alternatives: {:?}",
            alternatives.len(),
            alternatives
                .iter()
                .map(|alt| (alt.profile.barcode.as_str(), alt.score))
                .collect::<Vec<_>>()
        );
    }
}

/// Observer that discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RankObserver for NoopObserver {}

impl<O: RankObserver + ?Sized> RankObserver for &O {
    fn target_scored(&self, target: &NutrientProfile, score: i32) {
        (**self).target_scored(target, score);
    }

    fn candidate_scored(&self, candidate: &NutrientProfile, score: i32) {
        (**self).candidate_scored(candidate, score);
    }

    fn ranked(&self, alternatives: &[ScoredAlternative]) {
        (**self).ranked(alternatives);
    }
}

/// Suggest healthier products from a candidate pool.
///
/// Candidates must carry exactly the requested category label (case
/// sensitive, unlike the rating engine's category resolution) and a barcode
/// different from the target's. Survivors are rated with the same
/// [`Rater`] as the target; only those scoring strictly higher are kept,
/// best first. Ties keep their pool order.
///
/// # Examples
/// ```
/// use nutriscan_core::{NutrientProfile, Nutrients};
/// use nutriscan_scorer::{AlternativeRanker, NutritionRater};
///
/// let target = NutrientProfile::new("10000001", "snack", Nutrients::default().with_sugar(12.0));
/// let better = NutrientProfile::new("10000002", "snack", Nutrients::default());
/// let worse = NutrientProfile::new("10000003", "snack", Nutrients::default().with_fat(40.0));
///
/// let ranker = AlternativeRanker::new(NutritionRater::default());
/// let ranked = ranker.rank([better, worse], &target, "snack");
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].profile.barcode, "10000002");
/// ```
#[derive(Debug, Clone)]
pub struct AlternativeRanker<R, O = LogObserver> {
    rater: R,
    observer: O,
}

impl<R: Rater> AlternativeRanker<R> {
    /// Construct a ranker that logs diagnostics through [`LogObserver`].
    #[must_use]
    pub const fn new(rater: R) -> Self {
        Self {
            rater,
            observer: LogObserver,
        }
    }
}

impl<R: Rater, O: RankObserver> AlternativeRanker<R, O> {
    /// Construct a ranker reporting to `observer`.
    #[must_use]
    pub const fn with_observer(rater: R, observer: O) -> Self {
        Self { rater, observer }
    }

    /// Borrow the rater shared by target and candidates.
    #[must_use]
    pub const fn rater(&self) -> &R {
        &self.rater
    }

    /// Return the candidates that outscore `target`, best first.
    ///
    /// An empty result means the target is already the best choice in its
    /// category.
    #[must_use]
    pub fn rank<I>(
        &self,
        candidates: I,
        target: &NutrientProfile,
        category: &str,
    ) -> Vec<ScoredAlternative>
    where
        I: IntoIterator<Item = NutrientProfile>,
    {
        let target_score = self.rater.rate(target).score;
        self.observer.target_scored(target, target_score);

        let mut alternatives: Vec<ScoredAlternative> = candidates
            .into_iter()
            .filter(|candidate| {
                candidate.category_label == category && candidate.barcode != target.barcode
            })
            .map(|candidate| {
                let rating = self.rater.rate(&candidate);
                self.observer.candidate_scored(&candidate, rating.score);
                ScoredAlternative::new(candidate, rating)
            })
            .filter(|alternative| alternative.score > target_score)
            .collect();
        alternatives.sort_by_key(|alternative| Reverse(alternative.score));

        self.observer.ranked(&alternatives);
        alternatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriscan_core::{Nutrients, test_support::FixedRater};
    use rstest::{fixture, rstest};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingObserver {
        events: RefCell<Vec<String>>,
    }

    impl RankObserver for RecordingObserver {
        fn target_scored(&self, target: &NutrientProfile, score: i32) {
            self.events
                .borrow_mut()
                .push(format!("target {} {score}", target.barcode));
        }

        fn candidate_scored(&self, candidate: &NutrientProfile, score: i32) {
            self.events
                .borrow_mut()
                .push(format!("candidate {} {score}", candidate.barcode));
        }

        fn ranked(&self, alternatives: &[ScoredAlternative]) {
            self.events
                .borrow_mut()
                .push(format!("ranked {}", alternatives.len()));
        }
    }

    fn snack(barcode: &str) -> NutrientProfile {
        NutrientProfile::new(barcode, "snack", Nutrients::default())
    }

    fn barcodes(alternatives: &[ScoredAlternative]) -> Vec<&str> {
        alternatives
            .iter()
            .map(|alt| alt.profile.barcode.as_str())
            .collect()
    }

    #[fixture]
    fn rater() -> FixedRater {
        FixedRater::new([
            ("00000000", 50),
            ("00000001", 50),
            ("00000002", 60),
            ("00000003", 40),
            ("00000004", 70),
            ("00000005", 60),
        ])
    }

    #[rstest]
    fn keeps_strictly_better_candidates_best_first(rater: FixedRater) {
        let ranker = AlternativeRanker::with_observer(rater, NoopObserver);
        let pool = ["00000001", "00000002", "00000003", "00000004"].map(snack);
        let ranked = ranker.rank(pool, &snack("00000000"), "snack");
        assert_eq!(barcodes(&ranked), ["00000004", "00000002"]);
        assert_eq!(
            ranked.iter().map(|alt| alt.score).collect::<Vec<_>>(),
            [70, 60]
        );
    }

    #[rstest]
    fn ties_keep_pool_order(rater: FixedRater) {
        let ranker = AlternativeRanker::with_observer(rater, NoopObserver);
        let pool = ["00000005", "00000004", "00000002"].map(snack);
        let ranked = ranker.rank(pool, &snack("00000000"), "snack");
        assert_eq!(barcodes(&ranked), ["00000004", "00000005", "00000002"]);
    }

    #[rstest]
    fn skips_target_and_other_labels(rater: FixedRater) {
        let ranker = AlternativeRanker::with_observer(rater, NoopObserver);
        let target = NutrientProfile::new("00000003", "snack", Nutrients::default());
        let pool = vec![
            NutrientProfile::new("00000003", "snack", Nutrients::default()),
            NutrientProfile::new("00000004", "Snack", Nutrients::default()),
            NutrientProfile::new("00000002", "chocolate", Nutrients::default()),
            NutrientProfile::new("00000005", "snack", Nutrients::default()),
        ];
        let ranked = ranker.rank(pool, &target, "snack");
        assert_eq!(barcodes(&ranked), ["00000005"]);
    }

    #[rstest]
    #[case(Vec::new())]
    #[case(vec![snack("00000001"), snack("00000003")])]
    fn empty_or_worse_pools_rank_nothing(rater: FixedRater, #[case] pool: Vec<NutrientProfile>) {
        let ranker = AlternativeRanker::with_observer(rater, NoopObserver);
        assert!(ranker.rank(pool, &snack("00000000"), "snack").is_empty());
    }

    #[rstest]
    fn observer_sees_every_scored_candidate(rater: FixedRater) {
        let observer = RecordingObserver::default();
        let ranker = AlternativeRanker::with_observer(rater, &observer);
        let pool = vec![
            snack("00000002"),
            NutrientProfile::new("00000004", "chocolate", Nutrients::default()),
            snack("00000003"),
        ];
        let ranked = ranker.rank(pool, &snack("00000000"), "snack");
        assert_eq!(ranked.len(), 1);
        assert_eq!(
            *observer.events.borrow(),
            [
                "target 00000000 50",
                "candidate 00000002 60",
                "candidate 00000003 40",
                "ranked 1",
            ]
        );
    }
}
