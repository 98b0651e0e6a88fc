//! Rate products from their nutrient facts.
//!
//! The `Rater` trait turns a [`NutrientProfile`](crate::NutrientProfile)
//! into a [`RatingResult`](crate::RatingResult).

use crate::{NutrientProfile, RatingResult};

/// Lowest rating a product can receive.
pub const MIN_RATING: u8 = 0;
/// Highest rating a product can receive.
pub const MAX_RATING: u8 = 100;

/// Calculate a nutritional rating for a product.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one rater can
/// serve concurrent lookups, and must be total: every profile yields a
/// result, with zero or absent nutrients treated as data. Repeated calls
/// with the same profile must return the same result.
///
/// Use [`Rater::clamp_rating`] to bound the final rating.
///
/// # Examples
///
/// ```rust
/// use nutriscan_core::{NutrientProfile, Nutrients, Rater, RatingDetails, RatingResult};
///
/// struct FlatRater;
///
/// impl Rater for FlatRater {
///     fn rate(&self, _profile: &NutrientProfile) -> RatingResult {
///         RatingResult {
///             score: 120,
///             rating: Self::clamp_rating(120),
///             highlights: Vec::new(),
///             rating_details: RatingDetails::default(),
///         }
///     }
/// }
///
/// let profile = NutrientProfile::new("96385074", "snack", Nutrients::default());
/// assert_eq!(FlatRater.rate(&profile).rating, 100);
/// ```
pub trait Rater: Send + Sync {
    /// Rate `profile`.
    fn rate(&self, profile: &NutrientProfile) -> RatingResult;

    /// Clamp an adjusted score into `0..=100`.
    #[must_use]
    fn clamp_rating(raw: i32) -> u8
    where
        Self: Sized,
    {
        let clamped = raw.clamp(i32::from(MIN_RATING), i32::from(MAX_RATING));
        u8::try_from(clamped).unwrap_or(MAX_RATING)
    }
}

impl<R: Rater + ?Sized> Rater for &R {
    fn rate(&self, profile: &NutrientProfile) -> RatingResult {
        (**self).rate(profile)
    }
}

impl<R: Rater + ?Sized> Rater for Box<R> {
    fn rate(&self, profile: &NutrientProfile) -> RatingResult {
        (**self).rate(profile)
    }
}
