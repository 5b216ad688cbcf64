pub mod crop;
pub mod fertilizer;
pub mod input;
pub mod prediction;
pub mod soil;

pub use crop::*;
pub use fertilizer::*;
pub use input::*;
pub use prediction::*;
pub use soil::*;

use crate::error::{CropYieldError, Result};

/// A closed set of labels the farmer picks from.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Human-readable name of the set, used in error messages.
    const KIND: &'static str;

    fn all() -> &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_str(s: &str) -> Option<Self>;
}

/// Parse a label, rejecting anything outside the set.
pub fn parse_strict<T: Vocabulary>(value: &str) -> Result<T> {
    T::from_str(value).ok_or_else(|| CropYieldError::UnknownValue {
        kind: T::KIND,
        value: value.to_string(),
    })
}

/// Parse a label, letting unknown values through as `None` so the scorers
/// give them no bonus.
pub fn parse_lenient<T: Vocabulary>(value: &str) -> Option<T> {
    let parsed = T::from_str(value);
    if parsed.is_none() {
        tracing::warn!(
            "Unrecognized {} '{}' - scoring without its bonus",
            T::KIND,
            value
        );
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strict_reports_kind_and_value() {
        let err = parse_strict::<Crop>("Barley").unwrap_err();
        match err {
            CropYieldError::UnknownValue { kind, value } => {
                assert_eq!(kind, "crop");
                assert_eq!(value, "Barley");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn parse_strict_accepts_known_labels() {
        assert_eq!(parse_strict::<SoilColor>("Black").unwrap(), SoilColor::Black);
        assert_eq!(
            parse_strict::<Fertilizer>("Urea (46-0-0)").unwrap(),
            Fertilizer::Urea
        );
    }

    #[test]
    fn parse_lenient_maps_unknown_to_none() {
        assert_eq!(parse_lenient::<SoilColor>("Unknown"), None);
        assert_eq!(parse_lenient::<Fertilizer>("Unknown"), None);
        assert_eq!(parse_lenient::<Crop>("Tomato"), Some(Crop::Tomato));
    }
}
