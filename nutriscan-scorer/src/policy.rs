//! Scoring configuration.

use serde::{Deserialize, Serialize};

/// How the generic formula treats a nutrient recorded as zero.
///
/// Datastores write `0` both for "contains none" and for "not measured", so
/// the generic path cannot tell the two apart.
///
/// # Examples
/// ```
/// use nutriscan_scorer::ZeroValuePolicy;
///
/// let policy: ZeroValuePolicy = serde_json::from_str("\"formula\"").expect("known policy");
/// assert_eq!(policy, ZeroValuePolicy::Formula);
/// assert_eq!(ZeroValuePolicy::default(), ZeroValuePolicy::DefaultCredit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroValuePolicy {
    /// Replace the sub-score of a non-positive nutrient with a fixed credit:
    /// calories 10, fat 15, sodium 15, sugar 15, protein 10.
    #[default]
    DefaultCredit,
    /// Apply the linear formula to zero like any other value.
    Formula,
}

impl ZeroValuePolicy {
    /// Report whether `value` should receive the fixed credit.
    #[must_use]
    pub const fn credits(self, value: f64) -> bool {
        match self {
            Self::DefaultCredit => value.is_nan() || value <= 0.0,
            Self::Formula => false,
        }
    }
}

/// Tunable behaviour of [`NutritionRater`](crate::NutritionRater).
///
/// # Examples
/// ```
/// use nutriscan_scorer::{ScoringPolicy, ZeroValuePolicy};
///
/// let policy: ScoringPolicy =
///     serde_json::from_str(r#"{"zero-values":"formula"}"#).expect("valid policy");
/// assert_eq!(policy.zero_values, ZeroValuePolicy::Formula);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScoringPolicy {
    /// Treatment of zero nutrients on the generic path.
    pub zero_values: ZeroValuePolicy,
}

impl ScoringPolicy {
    /// Build a policy with the given zero-value treatment.
    #[must_use]
    pub const fn with_zero_values(zero_values: ZeroValuePolicy) -> Self {
        Self { zero_values }
    }
}
