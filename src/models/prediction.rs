use super::{Crop, Fertilizer};
use serde::{Deserialize, Serialize};

/// The four sub-scores behind a prediction, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub soil_quality: f64,
    pub nutrient_balance: f64,
    pub weather_conditions: f64,
    pub fertilizer_efficiency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldPrediction {
    /// Yield efficiency percentage, rounded to the nearest integer.
    pub predicted_yield: u8,
    /// Always within [60, 95].
    pub confidence: u8,
    pub factors: FactorScores,
}

impl YieldPrediction {
    pub fn category(&self) -> YieldCategory {
        YieldCategory::from_yield(self.predicted_yield)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop: Crop,
    pub best_fertilizer: Fertilizer,
    pub potential_yield: u8,
}

/// Presentation bucket for a yield percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum YieldCategory {
    Poor,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl YieldCategory {
    pub fn from_yield(predicted_yield: u8) -> Self {
        match predicted_yield {
            85.. => YieldCategory::Excellent,
            70..=84 => YieldCategory::Good,
            55..=69 => YieldCategory::Average,
            40..=54 => YieldCategory::BelowAverage,
            _ => YieldCategory::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            YieldCategory::Poor => "Poor",
            YieldCategory::BelowAverage => "Below Average",
            YieldCategory::Average => "Average",
            YieldCategory::Good => "Good",
            YieldCategory::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for YieldCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
