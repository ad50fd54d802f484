//! Coerces untrusted model JSON into `DishAssessment`s.
//!
//! Normalization never fails. Malformed fields fall back to defaults and
//! elements that are not objects are skipped, so callers always get something
//! renderable.

use serde_json::{Map, Value};

use crate::domain::menu_analysis::entities::{DishAssessment, FodmapLevel, UNKNOWN_DISH_NAME};

pub fn normalize_dishes(value: Value) -> Vec<DishAssessment> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(fields) => Some(normalize_dish(&fields)),
                _ => None,
            })
            .collect(),
        Value::Object(fields) => vec![normalize_dish(&fields)],
        _ => Vec::new(),
    }
}

fn normalize_dish(fields: &Map<String, Value>) -> DishAssessment {
    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_DISH_NAME)
        .to_string();

    let description = fields
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let fodmap_level = fields
        .get("fodmapLevel")
        .and_then(Value::as_str)
        .map(FodmapLevel::parse_lenient)
        .unwrap_or_default();

    DishAssessment {
        name,
        description,
        fodmap_level,
        concerns: string_list(fields.get("concerns")),
        alternatives: string_list(fields.get("alternatives")),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
