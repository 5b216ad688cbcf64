pub mod fertilizer_efficacy;
pub mod nutrient_balance;
pub mod soil_quality;
pub mod weather;

pub use fertilizer_efficacy::FertilizerEfficacyFactor;
pub use nutrient_balance::NutrientBalanceFactor;
pub use soil_quality::SoilQualityFactor;
pub use weather::WeatherFactor;

use crate::models::AgriculturalInput;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// One component of the yield heuristic.
pub trait Factor: Send + Sync {
    /// Unique identifier for this factor
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Share of the final yield this factor contributes
    fn weight(&self) -> f64;

    /// Sub-score in [0, 100] for the given input
    fn score(&self, input: &AgriculturalInput) -> f64;
}

/// Factors in the order their weighted contributions are summed.
pub fn all() -> [&'static dyn Factor; 4] {
    [
        &SoilQualityFactor,
        &NutrientBalanceFactor,
        &WeatherFactor,
        &FertilizerEfficacyFactor,
    ]
}

pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}
