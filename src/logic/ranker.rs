use super::predictor::predict;
use crate::models::{
    AgriculturalInput, Crop, CropRecommendation, Environment, Fertilizer, YieldPrediction,
};

/// Number of alternatives shown when the caller does not ask for a count.
pub const DEFAULT_TOP_N: usize = 3;

/// The `top_n` best crops for this land, each paired with its best fertilizer.
///
/// Returns `min(top_n, 8)` entries ordered by potential yield, highest first.
pub fn recommend(environment: &Environment, top_n: usize) -> Vec<CropRecommendation> {
    let mut ranked = rank_all(environment);
    ranked.truncate(top_n);
    ranked
}

/// Every crop with its best fertilizer, ordered by potential yield.
pub fn rank_all(environment: &Environment) -> Vec<CropRecommendation> {
    rank_with(environment, predict)
}

/// Exhaustive crop x fertilizer search using the given predictor.
///
/// Ties keep the earlier fertilizer, and the sort is stable so tied crops
/// stay in enumeration order.
pub fn rank_with<P>(environment: &Environment, mut predictor: P) -> Vec<CropRecommendation>
where
    P: FnMut(&AgriculturalInput) -> YieldPrediction,
{
    let mut ranked: Vec<CropRecommendation> = Crop::all()
        .iter()
        .map(|&crop| best_pairing(environment, crop, &mut predictor))
        .collect();

    ranked.sort_by(|a, b| b.potential_yield.cmp(&a.potential_yield));

    tracing::debug!(
        district = %environment.district,
        top = ?ranked.first().map(|r| r.crop),
        "Ranked crops"
    );

    ranked
}

fn best_pairing<P>(environment: &Environment, crop: Crop, predictor: &mut P) -> CropRecommendation
where
    P: FnMut(&AgriculturalInput) -> YieldPrediction,
{
    let mut best: Option<(Fertilizer, u8)> = None;

    for &fertilizer in Fertilizer::all() {
        let predicted = predictor(&environment.with_choice(crop, fertilizer)).predicted_yield;
        tracing::trace!(%crop, %fertilizer, predicted, "Evaluated pairing");

        if best.map_or(true, |(_, top)| predicted > top) {
            best = Some((fertilizer, predicted));
        }
    }

    let (best_fertilizer, potential_yield) = best.unwrap_or((Fertilizer::all()[0], 0));

    CropRecommendation {
        crop,
        best_fertilizer,
        potential_yield,
    }
}
