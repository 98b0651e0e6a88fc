//! Daily reference values shared by the generic formula, the final
//! adjustment and the highlight thresholds.

/// Energy reference in kcal.
pub const MAX_CALORIES: f64 = 2000.0;
/// Fat reference in grams.
pub const MAX_FAT: f64 = 70.0;
/// Sodium reference in milligrams.
pub const MAX_SODIUM: f64 = 2300.0;
/// Sugar reference in grams.
pub const MAX_SUGAR: f64 = 50.0;
/// Protein reference in grams. The generic protein sub-score reaches 20 here.
pub const PROTEIN_REFERENCE: f64 = 50.0;

/// 70% of [`MAX_CALORIES`]; upper bound of the "Low calorie" highlight.
pub const LOW_CALORIES_LIMIT: f64 = 1400.0;
/// 70% of [`MAX_FAT`]; upper bound of the "Low fat" highlight.
pub const LOW_FAT_LIMIT: f64 = 49.0;
/// 70% of [`MAX_SODIUM`]; upper bound of the "Low sodium" highlight.
pub const LOW_SODIUM_LIMIT: f64 = 1610.0;
/// 70% of [`MAX_SUGAR`]; upper bound of the "Low sugar" highlight.
pub const LOW_SUGAR_LIMIT: f64 = 35.0;

/// 150% of [`PROTEIN_REFERENCE`]. Reaching it earns [`PROTEIN_BONUS`].
pub const HIGH_PROTEIN_THRESHOLD: f64 = 75.0;
/// Sodium strictly above this costs [`SODIUM_PENALTY`].
pub const HIGH_SODIUM_THRESHOLD: f64 = LOW_SODIUM_LIMIT;
/// Rating points added for high protein.
pub const PROTEIN_BONUS: i32 = 10;
/// Rating points removed for high sodium.
pub const SODIUM_PENALTY: i32 = 10;

/// Multiplier from sub-score scale to display-detail scale.
pub const DETAIL_SCALE: i32 = 5;
