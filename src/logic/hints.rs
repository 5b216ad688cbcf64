/// Coarse reading of a single soil or weather measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    Moderate,
    Good,
    High,
    VeryHigh,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::Moderate => "Moderate",
            Level::Good => "Good",
            Level::High => "High",
            Level::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelHint {
    pub level: Level,
    pub advice: &'static str,
}

impl LevelHint {
    fn new(level: Level, advice: &'static str) -> Self {
        Self { level, advice }
    }
}

/// Soil nitrogen in ppm.
pub fn nitrogen_hint(nitrogen: f64) -> LevelHint {
    if nitrogen < 50.0 {
        LevelHint::new(Level::Low, "Consider nitrogen-rich fertilizers")
    } else if nitrogen < 150.0 {
        LevelHint::new(Level::Medium, "Balanced fertilization recommended")
    } else if nitrogen < 250.0 {
        LevelHint::new(Level::Good, "Optimal nitrogen levels")
    } else {
        LevelHint::new(Level::High, "Monitor for over-fertilization")
    }
}

/// Soil phosphorous in ppm.
pub fn phosphorous_hint(phosphorous: f64) -> LevelHint {
    if phosphorous < 20.0 {
        LevelHint::new(Level::Low, "Add phosphate fertilizers")
    } else if phosphorous < 40.0 {
        LevelHint::new(Level::Medium, "Moderate phosphorus application needed")
    } else if phosphorous < 80.0 {
        LevelHint::new(Level::Good, "Optimal phosphorus levels")
    } else {
        LevelHint::new(Level::High, "Sufficient phosphorus available")
    }
}

/// Annual rainfall in mm.
pub fn rainfall_hint(rainfall: f64) -> LevelHint {
    if rainfall < 400.0 {
        LevelHint::new(Level::Low, "Irrigation required")
    } else if rainfall < 800.0 {
        LevelHint::new(Level::Moderate, "Supplemental irrigation may be needed")
    } else if rainfall < 1500.0 {
        LevelHint::new(Level::Good, "Adequate rainfall for most crops")
    } else if rainfall < 2000.0 {
        LevelHint::new(Level::High, "Excellent water availability")
    } else {
        LevelHint::new(Level::VeryHigh, "Consider drainage management")
    }
}
