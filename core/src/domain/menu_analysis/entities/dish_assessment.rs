use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNKNOWN_DISH_NAME: &str = "Unknown Item";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FodmapLevel {
    Low,
    Moderate,
    High,
    #[default]
    Unknown,
}

impl FodmapLevel {
    /// Case-insensitive match against the three known levels. Anything else,
    /// including "unknown" spelled by the model, maps to `Unknown`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => FodmapLevel::Low,
            "moderate" => FodmapLevel::Moderate,
            "high" => FodmapLevel::High,
            _ => FodmapLevel::Unknown,
        }
    }
}

/// One identified menu item and its FODMAP assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishAssessment {
    pub name: String,
    pub description: String,
    pub fodmap_level: FodmapLevel,
    pub concerns: Vec<String>,
    pub alternatives: Vec<String>,
}

impl Default for DishAssessment {
    fn default() -> Self {
        Self {
            name: UNKNOWN_DISH_NAME.to_string(),
            description: String::new(),
            fodmap_level: FodmapLevel::Unknown,
            concerns: Vec::new(),
            alternatives: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!(FodmapLevel::parse_lenient("HIGH"), FodmapLevel::High);
        assert_eq!(FodmapLevel::parse_lenient(" Moderate "), FodmapLevel::Moderate);
        assert_eq!(FodmapLevel::parse_lenient("low"), FodmapLevel::Low);
    }

    #[test]
    fn test_level_parse_rejects_other_values() {
        assert_eq!(FodmapLevel::parse_lenient("extreme"), FodmapLevel::Unknown);
        assert_eq!(FodmapLevel::parse_lenient(""), FodmapLevel::Unknown);
        assert_eq!(FodmapLevel::parse_lenient("lowish"), FodmapLevel::Unknown);
    }

    #[test]
    fn test_levels_serialize_as_lowercase_symbols() {
        let levels = [
            FodmapLevel::Low,
            FodmapLevel::Moderate,
            FodmapLevel::High,
            FodmapLevel::Unknown,
        ];

        let symbols = serde_json::to_value(levels).unwrap();
        assert_eq!(
            symbols,
            serde_json::json!(["low", "moderate", "high", "unknown"])
        );
    }

    #[test]
    fn test_dish_serializes_camel_case() {
        let dish = DishAssessment {
            name: "Risotto".to_string(),
            fodmap_level: FodmapLevel::Moderate,
            ..Default::default()
        };

        let value = serde_json::to_value(&dish).unwrap();
        assert_eq!(value["fodmapLevel"], "moderate");
        assert_eq!(value["concerns"], serde_json::json!([]));
        assert!(value.get("fodmap_level").is_none());
    }
}
