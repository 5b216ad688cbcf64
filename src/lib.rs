//! Crop yield efficiency estimation.
//!
//! [`predict`] scores one farmer's choice of crop and fertilizer against their
//! land; [`recommend`] searches every crop/fertilizer pairing for the same land
//! and returns the best crops. Both are pure functions of their input.

pub mod error;
pub mod logic;
pub mod models;

pub use error::{CropYieldError, Result};
pub use logic::{predict, rank_all, recommend, YieldPredictor, DEFAULT_TOP_N};
pub use models::{
    AgriculturalInput, Crop, CropRecommendation, Environment, FactorScores, Fertilizer,
    SoilColor, YieldCategory, YieldPrediction,
};
