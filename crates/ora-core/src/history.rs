//! History storage and export.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreResult;
use crate::registry::Registry;
use crate::roll::{RollDocument, RollResult};

/// An append-only log of encoded results.
///
/// Stored on disk as a JSON array of documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<RollDocument>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode and append a result.
    pub fn append(&mut self, result: &RollResult) {
        self.entries.push(result.encode());
    }

    /// Append an already encoded document.
    pub fn append_document(&mut self, document: RollDocument) {
        self.entries.push(document);
    }

    /// All stored documents, oldest first.
    pub fn entries(&self) -> &[RollDocument] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode every entry. Unknown kinds come back as generic rolls.
    pub fn restore(&self, registry: &Registry) -> Vec<RollResult> {
        self.entries
            .iter()
            .cloned()
            .map(|doc| registry.decode(doc))
            .collect()
    }

    /// Parse a history from a JSON array, skipping records that are not
    /// valid documents.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<RollDocument>(record) {
                Ok(doc) => entries.push(doc),
                Err(err) => tracing::warn!(index, error = %err, "skipping invalid history record"),
            }
        }
        Ok(Self { entries })
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a history file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let history = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), entries = history.len(), "history loaded");
        Ok(history)
    }

    /// Write the history file, replacing any previous contents.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!(path = %path.display(), entries = self.len(), "history saved");
        Ok(())
    }

    /// Export the history as markdown.
    pub fn export_markdown(&self, registry: &Registry) -> String {
        let mut out = String::from("# Session History\n\n");
        for result in self.restore(registry) {
            push_markdown(&mut out, &result, 0);
            out.push('\n');
        }
        out
    }

    /// Export the history as plain text.
    pub fn export_text(&self, registry: &Registry) -> String {
        let mut out = String::from("Session History\n===============\n\n");
        for result in self.restore(registry) {
            push_text(&mut out, &result, 0);
            out.push('\n');
        }
        out
    }
}

fn dice_list(result: &RollResult) -> String {
    let values: Vec<String> = result.dice_values().iter().map(|v| v.to_string()).collect();
    values.join(", ")
}

fn push_markdown(out: &mut String, result: &RollResult, depth: usize) {
    let indent = "  ".repeat(depth);
    let bullet = if depth == 0 { "" } else { "- " };
    out.push_str(&format!(
        "{indent}{bullet}**{}** `{}`: [{}] = {}\n",
        result.label(),
        result.kind(),
        dice_list(result),
        result.raw_total()
    ));
    if let Some(text) = result.interpretation() {
        out.push_str(&format!("{indent}  *{text}*\n"));
    }
    for child in result.embedded() {
        push_markdown(out, child, depth + 1);
    }
}

fn push_text(out: &mut String, result: &RollResult, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{indent}{} [{}] = {} ({})\n",
        result.label(),
        dice_list(result),
        result.raw_total(),
        result.created_at().format("%Y-%m-%d %H:%M:%S")
    ));
    if let Some(text) = result.interpretation() {
        out.push_str(&format!("{indent}  {text}\n"));
    }
    for child in result.embedded() {
        push_text(out, child, depth + 1);
    }
}
