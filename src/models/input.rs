use super::{Crop, Fertilizer, SoilColor};
use crate::error::{CropYieldError, Result};
use serde::{Deserialize, Serialize};

/// Land conditions shared by every crop/fertilizer candidate.
///
/// `soil_color` is `None` when the label supplied at the boundary was not a
/// known color and lenient parsing let it through; scorers treat that as
/// "no bonus".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub district: String,
    pub soil_color: Option<SoilColor>,
    /// ppm
    pub nitrogen: f64,
    /// ppm
    pub phosphorous: f64,
    /// mm per year
    pub rainfall: f64,
}

impl Environment {
    pub fn new(
        district: impl Into<String>,
        soil_color: SoilColor,
        nitrogen: f64,
        phosphorous: f64,
        rainfall: f64,
    ) -> Self {
        Self {
            district: district.into(),
            soil_color: Some(soil_color),
            nitrogen,
            phosphorous,
            rainfall,
        }
    }

    /// Full input record for one candidate pairing.
    pub fn with_choice(&self, crop: Crop, fertilizer: Fertilizer) -> AgriculturalInput {
        self.with_parsed_choice(Some(crop), Some(fertilizer))
    }

    /// Like [`Environment::with_choice`], for labels that may have failed
    /// lenient parsing.
    pub fn with_parsed_choice(
        &self,
        crop: Option<Crop>,
        fertilizer: Option<Fertilizer>,
    ) -> AgriculturalInput {
        AgriculturalInput {
            district: self.district.clone(),
            soil_color: self.soil_color,
            nitrogen: self.nitrogen,
            phosphorous: self.phosphorous,
            fertilizer,
            rainfall: self.rainfall,
            crop,
        }
    }

    /// Boundary check; the scoring core itself accepts anything.
    pub fn validate(&self) -> Result<()> {
        if self.district.trim().is_empty() {
            return Err(CropYieldError::InvalidInput(
                "district must not be empty".into(),
            ));
        }

        for (label, value) in [
            ("nitrogen", self.nitrogen),
            ("phosphorous", self.phosphorous),
            ("rainfall", self.rainfall),
        ] {
            if !value.is_finite() {
                return Err(CropYieldError::InvalidInput(format!(
                    "{} must be a finite number",
                    label
                )));
            }
            if value < 0.0 {
                return Err(CropYieldError::InvalidInput(format!(
                    "{} must be >= 0 (got {})",
                    label, value
                )));
            }
        }

        Ok(())
    }
}

/// Everything the farmer reported, including their own crop and fertilizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgriculturalInput {
    pub district: String,
    pub soil_color: Option<SoilColor>,
    pub nitrogen: f64,
    pub phosphorous: f64,
    pub fertilizer: Option<Fertilizer>,
    pub rainfall: f64,
    pub crop: Option<Crop>,
}

impl AgriculturalInput {
    /// Drops the crop and fertilizer choice.
    pub fn environment(&self) -> Environment {
        Environment {
            district: self.district.clone(),
            soil_color: self.soil_color,
            nitrogen: self.nitrogen,
            phosphorous: self.phosphorous,
            rainfall: self.rainfall,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.environment().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pune() -> Environment {
        Environment::new("Pune", SoilColor::Loam, 150.0, 45.0, 1500.0)
    }

    #[test]
    fn with_choice_keeps_environment() {
        let env = pune();
        let input = env.with_choice(Crop::Rice, Fertilizer::Npk);

        assert_eq!(input.crop, Some(Crop::Rice));
        assert_eq!(input.fertilizer, Some(Fertilizer::Npk));
        assert_eq!(input.environment(), env);
    }

    #[test]
    fn parsed_choice_allows_unknowns() {
        let input = pune().with_parsed_choice(None, Some(Fertilizer::Urea));
        assert_eq!(input.crop, None);
        assert_eq!(input.fertilizer, Some(Fertilizer::Urea));
        assert_eq!(input.soil_color, Some(SoilColor::Loam));
    }

    #[test]
    fn validate_accepts_reasonable_input() {
        assert!(pune().validate().is_ok());
        assert!(pune().with_choice(Crop::Wheat, Fertilizer::Dap).validate().is_ok());
    }

    #[test]
    fn validate_accepts_zero_values() {
        let env = Environment::new("Nagpur", SoilColor::Red, 0.0, 0.0, 0.0);
        assert!(env.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_district() {
        let mut env = pune();
        env.district = "   ".into();
        assert!(matches!(
            env.validate(),
            Err(CropYieldError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_rejects_negative_and_non_finite() {
        let mut env = pune();
        env.nitrogen = -1.0;
        assert!(env.validate().is_err());

        let mut env = pune();
        env.rainfall = f64::NAN;
        assert!(env.validate().is_err());

        let mut env = pune();
        env.phosphorous = f64::INFINITY;
        assert!(env.validate().is_err());
    }
}
