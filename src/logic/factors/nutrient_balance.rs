use super::{clamp_score, Factor};
use crate::models::{AgriculturalInput, Crop};

pub const WEIGHT: f64 = 0.30;

const BASE_SCORE: f64 = 50.0;
const IN_RANGE_BONUS: f64 = 25.0;
const FAR_OUT_PENALTY: f64 = 20.0;
/// Below this fraction of the minimum counts as badly deficient.
const DEFICIENT_RATIO: f64 = 0.7;
/// Above this multiple of the maximum counts as badly excessive.
const EXCESS_RATIO: f64 = 1.5;

/// Nutrient balance factor
///
/// Compares soil nitrogen and phosphorous against the crop's own
/// requirement bands. An unknown crop has no bands and keeps the base score.
pub struct NutrientBalanceFactor;

impl Factor for NutrientBalanceFactor {
    fn id(&self) -> &'static str {
        "nutrient_balance"
    }

    fn name(&self) -> &'static str {
        "Nutrient Balance"
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    fn score(&self, input: &AgriculturalInput) -> f64 {
        score(input.nitrogen, input.phosphorous, input.crop)
    }
}

pub fn score(nitrogen: f64, phosphorous: f64, crop: Option<Crop>) -> f64 {
    let mut score = BASE_SCORE;

    if let Some(req) = crop.map(|c| c.nutrient_requirement()) {
        score += band_adjustment(nitrogen, req.n_min, req.n_max);
        score += band_adjustment(phosphorous, req.p_min, req.p_max);
    }

    clamp_score(score)
}

fn band_adjustment(value: f64, min: f64, max: f64) -> f64 {
    if value >= min && value <= max {
        IN_RANGE_BONUS
    } else if value < min * DEFICIENT_RATIO || value > max * EXCESS_RATIO {
        -FAR_OUT_PENALTY
    } else {
        0.0
    }
}
