use super::factors::{
    self, Factor, FertilizerEfficacyFactor, NutrientBalanceFactor, SoilQualityFactor,
    WeatherFactor,
};
use crate::models::{AgriculturalInput, FactorScores, YieldPrediction};

const BASE_CONFIDENCE: i32 = 85;
const MIN_CONFIDENCE: i32 = 60;
const MAX_CONFIDENCE: i32 = 95;

/// Combines the four factor scores into a yield estimate.
///
/// Stateless: the same input always produces the same prediction, which the
/// ranker relies on when it searches every crop/fertilizer pairing.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldPredictor;

impl YieldPredictor {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, input: &AgriculturalInput) -> YieldPrediction {
        let scores = FactorScores {
            soil_quality: SoilQualityFactor.score(input),
            nutrient_balance: NutrientBalanceFactor.score(input),
            weather_conditions: WeatherFactor.score(input),
            fertilizer_efficiency: FertilizerEfficacyFactor.score(input),
        };

        let prediction = YieldPrediction {
            predicted_yield: weighted_yield(&scores),
            confidence: confidence(input),
            factors: scores,
        };

        tracing::debug!(
            crop = ?input.crop,
            fertilizer = ?input.fertilizer,
            predicted_yield = prediction.predicted_yield,
            confidence = prediction.confidence,
            "Predicted yield"
        );

        prediction
    }

    /// (id, name, weight) for every factor, in summation order.
    pub fn list_factors(&self) -> Vec<(&'static str, &'static str, f64)> {
        factors::all()
            .iter()
            .map(|f| (f.id(), f.name(), f.weight()))
            .collect()
    }
}

/// Predict yield for a complete input record.
pub fn predict(input: &AgriculturalInput) -> YieldPrediction {
    YieldPredictor.predict(input)
}

/// Weighted sum of the sub-scores, rounded half away from zero.
pub fn weighted_yield(scores: &FactorScores) -> u8 {
    let total = scores.soil_quality * factors::soil_quality::WEIGHT
        + scores.nutrient_balance * factors::nutrient_balance::WEIGHT
        + scores.weather_conditions * factors::weather::WEIGHT
        + scores.fertilizer_efficiency * factors::fertilizer_efficacy::WEIGHT;

    total.round().clamp(0.0, 100.0) as u8
}

/// How much to trust the estimate given how extreme the inputs are.
///
/// - Nitrogen above 400 or phosphorous above 150: -10
/// - Rainfall below 200 or above 3000: -15
/// - District label longer than 2 characters: +5
pub fn confidence(input: &AgriculturalInput) -> u8 {
    let mut confidence = BASE_CONFIDENCE;

    if input.nitrogen > 400.0 || input.phosphorous > 150.0 {
        confidence -= 10;
    }
    if input.rainfall < 200.0 || input.rainfall > 3000.0 {
        confidence -= 15;
    }
    if input.district.chars().count() > 2 {
        confidence += 5;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, Environment, Fertilizer, SoilColor};

    fn pune_rice_npk() -> AgriculturalInput {
        Environment::new("Pune", SoilColor::Loam, 150.0, 45.0, 1500.0)
            .with_choice(Crop::Rice, Fertilizer::Npk)
    }

    fn all_unknown() -> AgriculturalInput {
        AgriculturalInput {
            district: String::new(),
            soil_color: None,
            nitrogen: 600.0,
            phosphorous: 200.0,
            fertilizer: None,
            rainfall: 5000.0,
            crop: None,
        }
    }

    #[test]
    fn pune_rice_scenario() {
        let prediction = predict(&pune_rice_npk());

        assert_eq!(prediction.factors.soil_quality, 100.0);
        assert_eq!(prediction.factors.nutrient_balance, 100.0);
        assert_eq!(prediction.factors.weather_conditions, 95.0);
        assert_eq!(prediction.factors.fertilizer_efficiency, 85.0);
        // 25 + 30 + 23.75 + 17 = 95.75
        assert_eq!(prediction.predicted_yield, 96);
        assert_eq!(prediction.confidence, 90);
    }

    #[test]
    fn unknown_vocabulary_scenario() {
        let prediction = predict(&all_unknown());

        assert_eq!(prediction.factors.soil_quality, 30.0);
        assert_eq!(prediction.factors.nutrient_balance, 50.0);
        assert_eq!(prediction.factors.weather_conditions, 50.0);
        assert_eq!(prediction.factors.fertilizer_efficiency, 60.0);
        // 7.5 + 15 + 12.5 + 12 = 47
        assert_eq!(prediction.predicted_yield, 47);
        // 85 - 10 - 15
        assert_eq!(prediction.confidence, 60);
    }

    #[test]
    fn district_bonus_lifts_the_floor() {
        let mut input = all_unknown();
        input.district = "Ab".into();
        assert_eq!(confidence(&input), 60);
        input.district = "Abc".into();
        assert_eq!(confidence(&input), 65);
    }

    #[test]
    fn confidence_adjustments() {
        let mut input = pune_rice_npk();
        assert_eq!(confidence(&input), 90);

        input.nitrogen = 401.0;
        assert_eq!(confidence(&input), 80);

        input.nitrogen = 150.0;
        input.phosphorous = 151.0;
        assert_eq!(confidence(&input), 80);

        input.phosphorous = 45.0;
        input.rainfall = 199.0;
        assert_eq!(confidence(&input), 75);

        input.rainfall = 3000.0;
        assert_eq!(confidence(&input), 90);

        input.district = "".into();
        assert_eq!(confidence(&input), 85);
    }

    #[test]
    fn district_length_counts_characters() {
        let mut input = pune_rice_npk();
        // Two characters, six bytes
        input.district = "宇治".into();
        assert_eq!(confidence(&input), 85);
        input.district = "宇治市".into();
        assert_eq!(confidence(&input), 90);
    }

    #[test]
    fn district_padding_counts_toward_length() {
        let mut input = pune_rice_npk();
        input.district = " ab ".into();
        assert_eq!(confidence(&input), 90);
        input.district = "ab".into();
        assert_eq!(confidence(&input), 85);
    }

    #[test]
    fn weighted_yield_matches_formula() {
        let factors = FactorScores {
            soil_quality: 30.0,
            nutrient_balance: 50.0,
            weather_conditions: 50.0,
            fertilizer_efficiency: 60.0,
        };
        assert_eq!(weighted_yield(&factors), 47);

        let factors = FactorScores {
            soil_quality: 0.0,
            nutrient_balance: 0.0,
            weather_conditions: 0.0,
            fertilizer_efficiency: 0.0,
        };
        assert_eq!(weighted_yield(&factors), 0);

        let factors = FactorScores {
            soil_quality: 100.0,
            nutrient_balance: 100.0,
            weather_conditions: 100.0,
            fertilizer_efficiency: 100.0,
        };
        assert_eq!(weighted_yield(&factors), 100);
    }

    #[test]
    fn prediction_is_consistent_with_its_factors() {
        let env = Environment::new("Nagpur", SoilColor::Black, 120.0, 35.0, 900.0);
        for crop in Crop::all() {
            for fertilizer in Fertilizer::all() {
                let prediction = predict(&env.with_choice(*crop, *fertilizer));
                let f = prediction.factors;
                let expected =
                    (0.25 * f.soil_quality + 0.30 * f.nutrient_balance
                        + 0.25 * f.weather_conditions
                        + 0.20 * f.fertilizer_efficiency)
                        .round() as u8;
                assert_eq!(prediction.predicted_yield, expected);
            }
        }
    }

    #[test]
    fn ranges_hold_for_extreme_inputs() {
        let colors = [None, Some(SoilColor::Sandy), Some(SoilColor::Loam)];
        let crops = [None, Some(Crop::Rice), Some(Crop::Potato)];
        let fertilizers = [None, Some(Fertilizer::Urea), Some(Fertilizer::Dap)];

        for soil_color in colors {
            for crop in crops {
                for fertilizer in fertilizers {
                    for level in [0.0, 75.0, 250.0, 5_000.0] {
                        let input = AgriculturalInput {
                            district: "X".into(),
                            soil_color,
                            nitrogen: level,
                            phosphorous: level / 2.0,
                            fertilizer,
                            rainfall: level * 4.0,
                            crop,
                        };
                        let p = predict(&input);
                        for s in [
                            p.factors.soil_quality,
                            p.factors.nutrient_balance,
                            p.factors.weather_conditions,
                            p.factors.fertilizer_efficiency,
                        ] {
                            assert!((0.0..=100.0).contains(&s));
                        }
                        assert!(p.predicted_yield <= 100);
                        assert!((60..=95).contains(&p.confidence));
                    }
                }
            }
        }
    }

    #[test]
    fn prediction_is_deterministic() {
        let input = pune_rice_npk();
        assert_eq!(predict(&input), predict(&input));
        assert_eq!(YieldPredictor::new().predict(&input), predict(&input));
    }

    #[test]
    fn list_factors_in_summation_order() {
        let ids: Vec<&str> = YieldPredictor::new()
            .list_factors()
            .into_iter()
            .map(|(id, _, _)| id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "soil_quality",
                "nutrient_balance",
                "weather_conditions",
                "fertilizer_efficiency"
            ]
        );
    }
}
