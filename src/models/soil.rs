use super::Vocabulary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilColor {
    Black,
    Brown,
    Red,
    Sandy,
    Clay,
    Loam,
}

impl SoilColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilColor::Black => "Black",
            SoilColor::Brown => "Brown",
            SoilColor::Red => "Red",
            SoilColor::Sandy => "Sandy",
            SoilColor::Clay => "Clay",
            SoilColor::Loam => "Loam",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "black" => Some(SoilColor::Black),
            "brown" => Some(SoilColor::Brown),
            "red" => Some(SoilColor::Red),
            "sandy" | "sand" => Some(SoilColor::Sandy),
            "clay" => Some(SoilColor::Clay),
            "loam" | "loamy" => Some(SoilColor::Loam),
            _ => None,
        }
    }

    pub fn all() -> &'static [SoilColor] {
        &[
            SoilColor::Black,
            SoilColor::Brown,
            SoilColor::Red,
            SoilColor::Sandy,
            SoilColor::Clay,
            SoilColor::Loam,
        ]
    }

    /// Points added on top of the soil quality base score.
    pub fn quality_bonus(&self) -> f64 {
        match self {
            SoilColor::Loam => 20.0,
            SoilColor::Black => 18.0,
            SoilColor::Brown => 15.0,
            SoilColor::Red => 12.0,
            SoilColor::Clay => 8.0,
            SoilColor::Sandy => 5.0,
        }
    }
}

impl Vocabulary for SoilColor {
    const KIND: &'static str = "soil color";

    fn all() -> &'static [Self] {
        SoilColor::all()
    }

    fn as_str(&self) -> &'static str {
        SoilColor::as_str(self)
    }

    fn from_str(s: &str) -> Option<Self> {
        SoilColor::from_str(s)
    }
}

impl std::fmt::Display for SoilColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_color_from_str_valid() {
        assert_eq!(SoilColor::from_str("Loam"), Some(SoilColor::Loam));
        assert_eq!(SoilColor::from_str("loamy"), Some(SoilColor::Loam));
        assert_eq!(SoilColor::from_str("BLACK"), Some(SoilColor::Black));
        assert_eq!(SoilColor::from_str(" red "), Some(SoilColor::Red));
        assert_eq!(SoilColor::from_str("sand"), Some(SoilColor::Sandy));
    }

    #[test]
    fn soil_color_from_str_invalid() {
        assert_eq!(SoilColor::from_str("Unknown"), None);
        assert_eq!(SoilColor::from_str(""), None);
        assert_eq!(SoilColor::from_str("silt"), None);
    }

    #[test]
    fn soil_color_round_trip() {
        for color in SoilColor::all() {
            assert_eq!(SoilColor::from_str(color.as_str()), Some(*color));
        }
    }

    #[test]
    fn loam_has_the_largest_bonus() {
        let best = SoilColor::all()
            .iter()
            .max_by(|a, b| a.quality_bonus().total_cmp(&b.quality_bonus()))
            .copied();
        assert_eq!(best, Some(SoilColor::Loam));
        assert_eq!(SoilColor::Sandy.quality_bonus(), 5.0);
    }
}
