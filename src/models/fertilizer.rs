use super::Vocabulary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fertilizer {
    #[serde(rename = "NPK (20-20-20)")]
    Npk,
    #[serde(rename = "Urea (46-0-0)")]
    Urea,
    #[serde(rename = "DAP (18-46-0)")]
    Dap,
    #[serde(rename = "Potash (0-0-60)")]
    Potash,
    #[serde(rename = "Complex (12-32-16)")]
    Complex,
    #[serde(rename = "Organic Compost")]
    OrganicCompost,
}

impl Fertilizer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fertilizer::Npk => "NPK (20-20-20)",
            Fertilizer::Urea => "Urea (46-0-0)",
            Fertilizer::Dap => "DAP (18-46-0)",
            Fertilizer::Potash => "Potash (0-0-60)",
            Fertilizer::Complex => "Complex (12-32-16)",
            Fertilizer::OrganicCompost => "Organic Compost",
        }
    }

    /// Accepts the full product label, the bare name, or the name with its
    /// N-P-K grade in any spacing/punctuation.
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match key.as_str() {
            "npk" | "npk202020" => Some(Fertilizer::Npk),
            "urea" | "urea4600" => Some(Fertilizer::Urea),
            "dap" | "dap18460" => Some(Fertilizer::Dap),
            "potash" | "potash0060" => Some(Fertilizer::Potash),
            "complex" | "complex123216" => Some(Fertilizer::Complex),
            "organiccompost" | "organic" | "compost" => Some(Fertilizer::OrganicCompost),
            _ => None,
        }
    }

    pub fn all() -> &'static [Fertilizer] {
        &[
            Fertilizer::Npk,
            Fertilizer::Urea,
            Fertilizer::Dap,
            Fertilizer::Potash,
            Fertilizer::Complex,
            Fertilizer::OrganicCompost,
        ]
    }
}

impl Vocabulary for Fertilizer {
    const KIND: &'static str = "fertilizer";

    fn all() -> &'static [Self] {
        Fertilizer::all()
    }

    fn as_str(&self) -> &'static str {
        Fertilizer::as_str(self)
    }

    fn from_str(s: &str) -> Option<Self> {
        Fertilizer::from_str(s)
    }
}

impl std::fmt::Display for Fertilizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fertilizer_from_str_valid() {
        assert_eq!(Fertilizer::from_str("NPK (20-20-20)"), Some(Fertilizer::Npk));
        assert_eq!(Fertilizer::from_str("npk"), Some(Fertilizer::Npk));
        assert_eq!(Fertilizer::from_str("Urea 46-0-0"), Some(Fertilizer::Urea));
        assert_eq!(Fertilizer::from_str("dap"), Some(Fertilizer::Dap));
        assert_eq!(Fertilizer::from_str("Potash"), Some(Fertilizer::Potash));
        assert_eq!(
            Fertilizer::from_str("complex(12-32-16)"),
            Some(Fertilizer::Complex)
        );
        assert_eq!(
            Fertilizer::from_str("organic-compost"),
            Some(Fertilizer::OrganicCompost)
        );
        assert_eq!(
            Fertilizer::from_str("compost"),
            Some(Fertilizer::OrganicCompost)
        );
    }

    #[test]
    fn fertilizer_from_str_invalid() {
        assert_eq!(Fertilizer::from_str("Unknown"), None);
        assert_eq!(Fertilizer::from_str(""), None);
        assert_eq!(Fertilizer::from_str("NPK (10-10-10)"), None);
    }

    #[test]
    fn serializes_as_product_label() {
        for fertilizer in Fertilizer::all() {
            let json = serde_json::to_string(fertilizer).unwrap();
            assert_eq!(json, format!("\"{}\"", fertilizer.as_str()));

            let back: Fertilizer = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *fertilizer);
        }
    }

    #[test]
    fn fertilizer_labels_round_trip() {
        for fertilizer in Fertilizer::all() {
            assert_eq!(Fertilizer::from_str(fertilizer.as_str()), Some(*fertilizer));
        }
    }
}
