use crate::config::Config;
use cropyield::error::{CropYieldError, Result};
use cropyield::logic::hints::{nitrogen_hint, phosphorous_hint, rainfall_hint, LevelHint};
use cropyield::models::{AgriculturalInput, Crop, Fertilizer, SoilColor, Vocabulary};
use dialoguer::{Input, Select};

pub const MAX_NITROGEN: f64 = 500.0;
pub const MAX_PHOSPHOROUS: f64 = 200.0;
pub const MAX_RAINFALL: f64 = 3000.0;

const TOTAL_STEPS: usize = 7;

fn input_error(e: dialoguer::Error) -> CropYieldError {
    CropYieldError::InvalidInput(format!("Input error: {}", e))
}

/// Collect a full input record one field at a time.
pub fn collect(config: &Config) -> Result<AgriculturalInput> {
    println!();
    println!("Crop yield prediction - enter your farm details");
    println!();

    step_header(1, "District");
    let mut district_prompt = Input::<String>::new()
        .with_prompt("  District name (e.g. Pune, Nagpur)")
        .validate_with(|s: &String| -> std::result::Result<(), &str> {
            if s.trim().is_empty() {
                Err("district is required")
            } else {
                Ok(())
            }
        });
    if let Some(district) = &config.defaults.district {
        district_prompt = district_prompt.default(district.clone());
    }
    let district = district_prompt.interact_text().map_err(input_error)?;

    step_header(2, "Soil Color");
    let default_color = config
        .defaults
        .soil_color
        .as_deref()
        .and_then(SoilColor::from_str);
    let soil_color = select_one::<SoilColor>("  Soil color", default_color)?;

    step_header(3, "Nitrogen");
    let nitrogen = read_amount("  Nitrogen content (ppm)", 100.0, MAX_NITROGEN)?;
    show_hint(nitrogen_hint(nitrogen));

    step_header(4, "Phosphorous");
    let phosphorous = read_amount("  Phosphorous content (ppm)", 40.0, MAX_PHOSPHOROUS)?;
    show_hint(phosphorous_hint(phosphorous));

    step_header(5, "Fertilizer");
    let fertilizer = select_one::<Fertilizer>("  Fertilizer you plan to use", None)?;

    step_header(6, "Rainfall");
    let rainfall = read_amount("  Annual rainfall (mm)", 800.0, MAX_RAINFALL)?;
    show_hint(rainfall_hint(rainfall));

    step_header(7, "Crop");
    let crop = select_one::<Crop>("  Crop you plan to grow", None)?;

    println!();

    Ok(AgriculturalInput {
        district,
        soil_color: Some(soil_color),
        nitrogen,
        phosphorous,
        fertilizer: Some(fertilizer),
        rainfall,
        crop: Some(crop),
    })
}

fn step_header(step: usize, title: &str) {
    println!("Step {} of {}: {}", step, TOTAL_STEPS, title);
}

fn show_hint(hint: LevelHint) {
    println!("  Level: {} - {}", hint.level, hint.advice);
    println!();
}

fn select_one<T: Vocabulary>(prompt: &str, default: Option<T>) -> Result<T>
where
    T: PartialEq,
{
    let labels: Vec<&str> = T::all().iter().map(|v| v.as_str()).collect();
    let default_idx = default
        .and_then(|d| T::all().iter().position(|v| *v == d))
        .unwrap_or(0);

    let idx = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default_idx)
        .interact()
        .map_err(input_error)?;

    Ok(T::all()[idx])
}

fn read_amount(prompt: &str, default: f64, max: f64) -> Result<f64> {
    let value: f64 = Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(input_error)?;

    Ok(clamp_amount(value, max))
}

/// Out-of-range or non-numeric entries are pulled back into [0, max].
pub fn clamp_amount(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_amount_limits() {
        assert_eq!(clamp_amount(-10.0, MAX_NITROGEN), 0.0);
        assert_eq!(clamp_amount(150.0, MAX_NITROGEN), 150.0);
        assert_eq!(clamp_amount(900.0, MAX_NITROGEN), 500.0);
        assert_eq!(clamp_amount(250.0, MAX_PHOSPHOROUS), 200.0);
        assert_eq!(clamp_amount(f64::INFINITY, MAX_RAINFALL), 3000.0);
        assert_eq!(clamp_amount(f64::NAN, MAX_RAINFALL), 0.0);
    }
}
