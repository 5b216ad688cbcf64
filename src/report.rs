use crate::config::OutputFormat;
use cropyield::error::Result;
use cropyield::logic::hints::{nitrogen_hint, phosphorous_hint, rainfall_hint};
use cropyield::logic::YieldPredictor;
use cropyield::models::{
    AgriculturalInput, CropRecommendation, Environment, YieldCategory, YieldPrediction,
};
use serde::Serialize;
use std::fmt::Write;

const UNKNOWN_LABEL: &str = "(unrecognized)";
const BAR_WIDTH: usize = 20;

/// Everything shown to the farmer after a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub environment: Environment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<AgriculturalInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<YieldPrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<YieldCategory>,
    pub recommendations: Vec<CropRecommendation>,
}

impl Report {
    pub fn for_prediction(
        input: AgriculturalInput,
        prediction: YieldPrediction,
        recommendations: Vec<CropRecommendation>,
    ) -> Self {
        Self {
            environment: input.environment(),
            category: Some(prediction.category()),
            input: Some(input),
            prediction: Some(prediction),
            recommendations,
        }
    }

    pub fn for_environment(
        environment: Environment,
        recommendations: Vec<CropRecommendation>,
    ) -> Self {
        Self {
            environment,
            input: None,
            prediction: None,
            category: None,
            recommendations,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let (Some(input), Some(prediction)) = (&self.input, &self.prediction) {
            write_prediction(&mut out, input, prediction);
        }

        write_summary(&mut out, &self.environment);

        if !self.recommendations.is_empty() {
            write_recommendations(&mut out, &self.recommendations);
        }

        out
    }
}

fn label<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN_LABEL.to_string(), |v| v.to_string())
}

fn bar(score: f64) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

// Writing to a String cannot fail.
fn write_prediction(out: &mut String, input: &AgriculturalInput, prediction: &YieldPrediction) {
    let _ = writeln!(out, "Prediction for Your Choice");
    let _ = writeln!(
        out,
        "  {} with {} in {}",
        label(input.crop),
        label(input.fertilizer),
        input.district
    );
    let _ = writeln!(
        out,
        "  Predicted yield efficiency: {}% ({} yield potential)",
        prediction.predicted_yield,
        prediction.category()
    );
    let _ = writeln!(out, "  Confidence: {}%", prediction.confidence);
    let _ = writeln!(out);

    let _ = writeln!(out, "Factor Breakdown");
    let f = &prediction.factors;
    let scores = [
        f.soil_quality,
        f.nutrient_balance,
        f.weather_conditions,
        f.fertilizer_efficiency,
    ];
    for ((_, name, weight), score) in YieldPredictor::new().list_factors().into_iter().zip(scores) {
        let _ = writeln!(
            out,
            "  {:<22} {:>5.1}  [{}]  weight {:.0}%",
            name,
            score,
            bar(score),
            weight * 100.0
        );
    }
    let _ = writeln!(out);
}

fn write_summary(out: &mut String, env: &Environment) {
    let n = nitrogen_hint(env.nitrogen);
    let p = phosphorous_hint(env.phosphorous);
    let r = rainfall_hint(env.rainfall);

    let _ = writeln!(out, "Your Input Summary");
    let _ = writeln!(out, "  Location:    {}", env.district);
    let _ = writeln!(out, "  Soil:        {}", label(env.soil_color));
    let _ = writeln!(
        out,
        "  Nitrogen:    {} ppm ({} - {})",
        env.nitrogen, n.level, n.advice
    );
    let _ = writeln!(
        out,
        "  Phosphorous: {} ppm ({} - {})",
        env.phosphorous, p.level, p.advice
    );
    let _ = writeln!(
        out,
        "  Rainfall:    {} mm ({} - {})",
        env.rainfall, r.level, r.advice
    );
    let _ = writeln!(out);
}

fn write_recommendations(out: &mut String, recs: &[CropRecommendation]) {
    let _ = writeln!(out, "Top Alternative Recommendations");
    for (i, rec) in recs.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {:<10} {:>3}%  best fertilizer: {}",
            i + 1,
            rec.crop.as_str(),
            rec.potential_yield,
            rec.best_fertilizer
        );
    }
}
