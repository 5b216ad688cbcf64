use super::{clamp_score, Factor};
use crate::models::{AgriculturalInput, Crop};

pub const WEIGHT: f64 = 0.25;

const DEFAULT_SCORE: f64 = 50.0;
const OPTIMAL_SCORE: f64 = 95.0;
const OUT_OF_RANGE_SCORE: f64 = 30.0;
/// Largest drop from the optimal score while still inside [min, max].
const MAX_DECAY: f64 = 35.0;
/// Rainfall between these multiples of the optimum counts as optimal.
const OPTIMAL_LOW_RATIO: f64 = 0.9;
const OPTIMAL_HIGH_RATIO: f64 = 1.1;

/// Weather suitability factor
///
/// Scores annual rainfall against the crop's min/optimal/max table:
/// - within 10% of optimal: 95
/// - inside [min, max]: linear decay from 95 down to 60 at the far edge
/// - outside [min, max]: 30
///
/// An unknown crop has no table and keeps the default of 50.
pub struct WeatherFactor;

impl Factor for WeatherFactor {
    fn id(&self) -> &'static str {
        "weather_conditions"
    }

    fn name(&self) -> &'static str {
        "Weather Conditions"
    }

    fn weight(&self) -> f64 {
        WEIGHT
    }

    fn score(&self, input: &AgriculturalInput) -> f64 {
        score(input.rainfall, input.crop)
    }
}

pub fn score(rainfall: f64, crop: Option<Crop>) -> f64 {
    let mut score = DEFAULT_SCORE;

    if let Some(req) = crop.map(|c| c.rainfall_requirement()) {
        let low = req.optimal * OPTIMAL_LOW_RATIO;
        let high = req.optimal * OPTIMAL_HIGH_RATIO;

        score = if rainfall >= low && rainfall <= high {
            OPTIMAL_SCORE
        } else if rainfall >= req.min && rainfall <= req.max {
            let distance = (rainfall - req.optimal).abs();
            OPTIMAL_SCORE - (distance / req.max_distance()) * MAX_DECAY
        } else {
            OUT_OF_RANGE_SCORE
        };
    }

    clamp_score(score)
}
