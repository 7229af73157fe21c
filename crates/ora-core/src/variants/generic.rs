//! The fallback shape for kinds the registry does not know.

use serde_json::Map;

use crate::roll::{RollCategory, RollDocument, RollHeader};

/// A result decoded from an unregistered kind.
///
/// Only the base fields survive; the original `extra` is discarded. The
/// original kind string is kept so the record re-encodes under its own name.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericRoll {
    kind: String,
    header: RollHeader,
}

impl GenericRoll {
    /// Wrap a header under an arbitrary kind.
    pub fn new(kind: impl Into<String>, header: RollHeader) -> Self {
        Self {
            kind: kind.into(),
            header,
        }
    }

    /// Build from a document, dropping its `extra`.
    pub fn from_document(document: RollDocument) -> Self {
        let kind = document.kind.clone();
        let (header, _) = document.into_parts();
        Self { kind, header }
    }

    /// An empty stand-in for a nested result that was missing on decode.
    pub(crate) fn placeholder(kind: &str) -> Self {
        Self::new(
            kind,
            RollHeader::new(RollCategory::Standard, kind, Vec::new(), None),
        )
    }

    /// The kind this record was stored under.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Base fields.
    pub fn header(&self) -> &RollHeader {
        &self.header
    }

    /// Encode with an empty `extra`.
    pub fn encode(&self) -> RollDocument {
        RollDocument::from_header(&self.kind, &self.header, Map::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_document_drops_extra() {
        let mut extra = Map::new();
        extra.insert("hidden".into(), serde_json::json!(1));
        let header = RollHeader::new(RollCategory::Fate, "Odd", vec![1, -1], None);
        let doc = RollDocument::from_header("odd_kind", &header, extra);

        let generic = GenericRoll::from_document(doc);
        assert_eq!(generic.kind(), "odd_kind");
        assert_eq!(generic.header(), &header);
        assert!(generic.encode().extra.is_empty());
    }

    #[test]
    fn converts_into_roll_result() {
        let header = RollHeader::new(RollCategory::Standard, "Odd", vec![2, 5], None);
        let result: crate::roll::RollResult = GenericRoll::new("odd_kind", header).into();
        assert!(result.is_generic());
        assert_eq!(result.kind(), "odd_kind");
        assert_eq!(result.raw_total(), 7);
        assert!(result.embedded().is_empty());
    }

    #[test]
    fn placeholder_is_empty() {
        let p = GenericRoll::placeholder("item_base");
        assert_eq!(p.kind(), "item_base");
        assert!(p.header().dice_values().is_empty());
        assert_eq!(p.header().raw_total(), 0);
    }
}
