//! The persisted form of a roll result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{RollCategory, RollHeader};
use crate::error::CoreResult;

/// A roll result as stored in history.
///
/// Base fields are shared by every kind. Variant-specific fields live in
/// `extra`; embedded results are stored there as nested documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollDocument {
    /// Stable identity of the variant that produced this document.
    pub kind: String,
    /// How the dice values should be read.
    #[serde(default)]
    pub category: RollCategory,
    /// Short description of what was rolled.
    pub label: String,
    /// Raw dice in roll order.
    #[serde(default)]
    pub dice_values: Vec<i32>,
    /// Total of the dice, or the variant's own reduction.
    #[serde(default)]
    pub raw_total: i32,
    /// Human-readable interpretation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    /// When the result was created.
    pub created_at: DateTime<Utc>,
    /// Variant-specific fields.
    #[serde(default)]
    pub extra: Map<String, Value>,
}

impl RollDocument {
    /// Build a document from a header and an encoded `extra` map.
    pub fn from_header(kind: &str, header: &RollHeader, extra: Map<String, Value>) -> Self {
        Self {
            kind: kind.to_string(),
            category: header.category(),
            label: header.label().to_string(),
            dice_values: header.dice_values().to_vec(),
            raw_total: header.raw_total(),
            interpretation: header.interpretation().map(str::to_string),
            created_at: header.created_at(),
            extra,
        }
    }

    /// Split into the base header and the `extra` map.
    pub fn into_parts(self) -> (RollHeader, Map<String, Value>) {
        let header = RollHeader::restore(
            self.category,
            self.label,
            self.dice_values,
            self.raw_total,
            self.interpretation,
            self.created_at,
        );
        (header, self.extra)
    }

    /// Parse a single document from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_base_fields() {
        let header = RollHeader::new(RollCategory::Fate, "4dF", vec![1, 0, -1, 1], None);
        let doc = RollDocument::from_header("fate_dice", &header, Map::new());
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["kind"], "fate_dice");
        assert_eq!(value["category"], "fate");
        assert_eq!(value["diceValues"], serde_json::json!([1, 0, -1, 1]));
        assert_eq!(value["rawTotal"], 1);
        assert!(value["createdAt"].is_string());
        assert!(value["extra"].is_object());
        assert!(value.get("interpretation").is_none());
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{"kind":"mystery","label":"Old Roll","createdAt":"2024-05-01T10:00:00Z"}"#;
        let doc = RollDocument::from_json(json).unwrap();
        assert_eq!(doc.category, RollCategory::Standard);
        assert!(doc.dice_values.is_empty());
        assert_eq!(doc.raw_total, 0);
        assert!(doc.extra.is_empty());
    }

    #[test]
    fn missing_kind_is_rejected() {
        let json = r#"{"label":"x","createdAt":"2024-05-01T10:00:00Z"}"#;
        assert!(RollDocument::from_json(json).is_err());
    }

    #[test]
    fn parts_preserve_header() {
        let header = RollHeader::new(
            RollCategory::Standard,
            "2d6",
            vec![2, 5],
            Some("seven".into()),
        );
        let doc = RollDocument::from_header("dice_roll", &header, Map::new());
        let (restored, extra) = doc.into_parts();
        assert_eq!(restored, header);
        assert!(extra.is_empty());
    }
}
