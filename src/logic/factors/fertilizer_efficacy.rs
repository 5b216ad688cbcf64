use super::{clamp_score, Factor};
use crate::models::{AgriculturalInput, Crop, Fertilizer};

pub const WEIGHT: f64 = 0.20;

const BASE_SCORE: f64 = 60.0;
const UNKNOWN_FERTILIZER_BONUS: f64 = 0.0;
const PREFERRED_PAIRING_BONUS: f64 = 10.0;

/// Fertilizer efficacy factor
///
/// Nitrogen-heavy Urea and phosphate-heavy DAP/Complex help most when the
/// soil is short on the nutrient they carry. A fertilizer on the crop's
/// preferred list earns an extra +10.
pub struct FertilizerEfficacyFactor;

impl Factor for FertilizerEfficacyFactor {
    fn id(&self) -> &'static str {
        "fertilizer_efficiency"
    }

    fn name(&self) -> &'static str {
        "Fertilizer Efficiency"
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    fn score(&self, input: &AgriculturalInput) -> f64 {
        score(input.fertilizer, input.crop, input.nitrogen, input.phosphorous)
    }
}

pub fn score(
    fertilizer: Option<Fertilizer>,
    crop: Option<Crop>,
    nitrogen: f64,
    phosphorous: f64,
) -> f64 {
    let mut score = BASE_SCORE;

    score += fertilizer.map_or(UNKNOWN_FERTILIZER_BONUS, |f| {
        fertilizer_bonus(f, nitrogen, phosphorous)
    });

    if let (Some(fertilizer), Some(crop)) = (fertilizer, crop) {
        if crop.prefers(fertilizer) {
            score += PREFERRED_PAIRING_BONUS;
        }
    }

    clamp_score(score)
}

fn fertilizer_bonus(fertilizer: Fertilizer, nitrogen: f64, phosphorous: f64) -> f64 {
    match fertilizer {
        Fertilizer::Npk => 15.0,
        Fertilizer::Urea => {
            if nitrogen < 100.0 {
                20.0
            } else {
                5.0
            }
        }
        Fertilizer::Dap => {
            if phosphorous < 40.0 {
                18.0
            } else {
                8.0
            }
        }
        Fertilizer::Potash => 12.0,
        Fertilizer::Complex => {
            if phosphorous < 50.0 {
                16.0
            } else {
                10.0
            }
        }
        Fertilizer::OrganicCompost => 18.0,
    }
}
