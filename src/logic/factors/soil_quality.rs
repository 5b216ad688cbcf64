use super::{clamp_score, Factor};
use crate::models::{AgriculturalInput, SoilColor};

pub const WEIGHT: f64 = 0.25;

const BASE_SCORE: f64 = 60.0;
const UNKNOWN_COLOR_BONUS: f64 = 0.0;

/// Soil quality factor
///
/// Rewards fertile soil colors and moderate nitrogen/phosphorous levels,
/// independent of which crop is planted.
///
/// - Color bonus: Loam +20, Black +18, Brown +15, Red +12, Clay +8, Sandy +5
/// - Nitrogen 100-200 ppm: +10; below 50 or above 300: -15
/// - Phosphorous 30-60 ppm: +10; below 15 or above 100: -15
pub struct SoilQualityFactor;

impl Factor for SoilQualityFactor {
    fn id(&self) -> &'static str {
        "soil_quality"
    }

    fn name(&self) -> &'static str {
        "Soil Quality"
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    fn score(&self, input: &AgriculturalInput) -> f64 {
        score(input.soil_color, input.nitrogen, input.phosphorous)
    }
}

pub fn score(soil_color: Option<SoilColor>, nitrogen: f64, phosphorous: f64) -> f64 {
    let mut score = BASE_SCORE;

    score += soil_color.map_or(UNKNOWN_COLOR_BONUS, |c| c.quality_bonus());

    if (100.0..=200.0).contains(&nitrogen) {
        score += 10.0;
    } else if nitrogen < 50.0 || nitrogen > 300.0 {
        score -= 15.0;
    }

    if (30.0..=60.0).contains(&phosphorous) {
        score += 10.0;
    } else if phosphorous < 15.0 || phosphorous > 100.0 {
        score -= 15.0;
    }

    clamp_score(score)
}
