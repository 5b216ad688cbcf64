use super::{Fertilizer, Vocabulary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Rice,
    Wheat,
    Corn,
    Cotton,
    Sugarcane,
    Soybean,
    Potato,
    Tomato,
}

/// Acceptable soil nitrogen and phosphorous bands for a crop, in ppm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRequirement {
    pub n_min: f64,
    pub n_max: f64,
    pub p_min: f64,
    pub p_max: f64,
}

/// Annual rainfall tolerance for a crop, in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainfallRequirement {
    pub min: f64,
    pub optimal: f64,
    pub max: f64,
}

impl RainfallRequirement {
    /// Largest distance from the optimum that still lies inside [min, max].
    pub fn max_distance(&self) -> f64 {
        (self.optimal - self.min).max(self.max - self.optimal)
    }
}

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Corn => "Corn",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Soybean => "Soybean",
            Crop::Potato => "Potato",
            Crop::Tomato => "Tomato",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rice" | "paddy" => Some(Crop::Rice),
            "wheat" => Some(Crop::Wheat),
            "corn" | "maize" => Some(Crop::Corn),
            "cotton" => Some(Crop::Cotton),
            "sugarcane" | "sugar cane" => Some(Crop::Sugarcane),
            "soybean" | "soy" | "soya" => Some(Crop::Soybean),
            "potato" => Some(Crop::Potato),
            "tomato" => Some(Crop::Tomato),
            _ => None,
        }
    }

    pub fn all() -> &'static [Crop] {
        &[
            Crop::Rice,
            Crop::Wheat,
            Crop::Corn,
            Crop::Cotton,
            Crop::Sugarcane,
            Crop::Soybean,
            Crop::Potato,
            Crop::Tomato,
        ]
    }

    pub fn nutrient_requirement(&self) -> NutrientRequirement {
        let (n_min, n_max, p_min, p_max) = match self {
            Crop::Rice => (80.0, 150.0, 25.0, 50.0),
            Crop::Wheat => (100.0, 180.0, 30.0, 60.0),
            Crop::Corn => (120.0, 200.0, 35.0, 70.0),
            Crop::Cotton => (90.0, 160.0, 20.0, 45.0),
            Crop::Sugarcane => (150.0, 250.0, 40.0, 80.0),
            Crop::Soybean => (60.0, 120.0, 25.0, 55.0),
            Crop::Potato => (100.0, 180.0, 35.0, 65.0),
            Crop::Tomato => (120.0, 200.0, 40.0, 75.0),
        };
        NutrientRequirement {
            n_min,
            n_max,
            p_min,
            p_max,
        }
    }

    pub fn rainfall_requirement(&self) -> RainfallRequirement {
        let (min, optimal, max) = match self {
            Crop::Rice => (1000.0, 1500.0, 2500.0),
            Crop::Wheat => (400.0, 700.0, 1200.0),
            Crop::Corn => (500.0, 800.0, 1400.0),
            Crop::Cotton => (500.0, 750.0, 1300.0),
            Crop::Sugarcane => (1200.0, 1800.0, 2800.0),
            Crop::Soybean => (450.0, 700.0, 1200.0),
            Crop::Potato => (400.0, 600.0, 1000.0),
            Crop::Tomato => (400.0, 650.0, 1100.0),
        };
        RainfallRequirement { min, optimal, max }
    }

    /// Fertilizers known to pair well with this crop. Sugarcane, Soybean and
    /// Potato have no list.
    pub fn preferred_fertilizers(&self) -> Option<&'static [Fertilizer]> {
        match self {
            Crop::Rice => Some(&[Fertilizer::Npk, Fertilizer::Urea, Fertilizer::Complex]),
            Crop::Wheat => Some(&[Fertilizer::Npk, Fertilizer::Dap, Fertilizer::Complex]),
            Crop::Corn => Some(&[Fertilizer::Npk, Fertilizer::Urea]),
            Crop::Cotton => Some(&[Fertilizer::Npk, Fertilizer::Complex, Fertilizer::Potash]),
            Crop::Tomato => Some(&[
                Fertilizer::Npk,
                Fertilizer::Complex,
                Fertilizer::OrganicCompost,
            ]),
            Crop::Sugarcane | Crop::Soybean | Crop::Potato => None,
        }
    }

    pub fn prefers(&self, fertilizer: Fertilizer) -> bool {
        self.preferred_fertilizers()
            .is_some_and(|list| list.contains(&fertilizer))
    }
}

impl Vocabulary for Crop {
    const KIND: &'static str = "crop";

    fn all() -> &'static [Self] {
        Crop::all()
    }

    fn as_str(&self) -> &'static str {
        Crop::as_str(self)
    }

    fn from_str(s: &str) -> Option<Self> {
        Crop::from_str(s)
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
