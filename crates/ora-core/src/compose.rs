//! Embedding and triggering.
//!
//! A composite parent folds its children into its own header: its own dice
//! come first, then each child's dice in embedding order, and totals are
//! summed. A check that triggers a sub-roll only *attaches* it: the child
//! keeps its dice and only its interpretation reaches the parent.

use crate::roll::{RollCategory, RollHeader, RollResult, sum_dice};

/// Separator used when a triggered result's interpretation is attached.
pub const ATTACH_SEPARATOR: &str = " | ";

/// Accumulates dice, total and interpretation for a composite result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    dice: Vec<i32>,
    total: i32,
    notes: Vec<String>,
}

impl Composition {
    /// Start an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add dice the parent rolled itself. Call before any `embed`.
    pub fn own(mut self, dice: &[i32]) -> Self {
        self.dice.extend_from_slice(dice);
        self.total = self.total.saturating_add(sum_dice(dice));
        self
    }

    /// Add a parent-level interpretation fragment.
    pub fn note(mut self, text: impl Into<String>) -> Self {
        self.notes.push(text.into());
        self
    }

    /// Fold in an embedded result.
    pub fn embed(mut self, child: &RollResult) -> Self {
        self.dice.extend_from_slice(child.dice_values());
        self.total = self.total.saturating_add(child.raw_total());
        if let Some(text) = child.interpretation() {
            self.notes.push(text.to_string());
        }
        self
    }

    /// Fold in several embedded results in order.
    pub fn embed_all<'a>(self, children: impl IntoIterator<Item = &'a RollResult>) -> Self {
        children.into_iter().fold(self, Self::embed)
    }

    /// Dice collected so far.
    pub fn dice_values(&self) -> &[i32] {
        &self.dice
    }

    /// Total collected so far.
    pub fn raw_total(&self) -> i32 {
        self.total
    }

    /// Joined interpretation, or `None` if nothing contributed text.
    pub fn interpretation(&self, separator: &str) -> Option<String> {
        if self.notes.is_empty() {
            None
        } else {
            Some(self.notes.join(separator))
        }
    }

    /// Finish as a composite header, joining collected text with `separator`.
    pub fn into_header(self, label: impl Into<String>, separator: &str) -> RollHeader {
        let interpretation = self.interpretation(separator);
        self.into_header_with(label, interpretation)
    }

    /// Finish as a composite header with a parent-written interpretation.
    pub fn into_header_with(
        self,
        label: impl Into<String>,
        interpretation: Option<String>,
    ) -> RollHeader {
        RollHeader::with_total(
            RollCategory::Composite,
            label,
            self.dice,
            self.total,
            interpretation,
        )
    }
}

/// Whether the first two dice match.
pub fn is_doubles(dice: &[i32]) -> bool {
    matches!(dice, [a, b, ..] if a == b)
}

/// Append a triggered result's interpretation to a parent's.
pub fn attach(base: String, triggered: Option<&RollResult>) -> String {
    match triggered.and_then(RollResult::interpretation) {
        Some(text) => format!("{base}{ATTACH_SEPARATOR}{text}"),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::dice::DiceRoll;

    fn roll(dice: Vec<i32>) -> RollResult {
        DiceRoll::new(format!("{}d6", dice.len()), dice).into()
    }

    #[test]
    fn embedding_preserves_order_and_sums() {
        let a = roll(vec![2, 5]);
        let b = roll(vec![4]);
        let header = Composition::new()
            .embed_all([&a, &b])
            .into_header("Pair", ", ");
        assert_eq!(header.dice_values(), &[2, 5, 4]);
        assert_eq!(header.raw_total(), 11);
        assert_eq!(header.category(), RollCategory::Composite);
    }

    #[test]
    fn totals_saturate() {
        let huge = roll(vec![i32::MAX]);
        let comp = Composition::new().own(&[3]).embed(&huge).embed(&huge);
        assert_eq!(comp.raw_total(), i32::MAX);
        assert_eq!(comp.dice_values().len(), 3);
    }

    #[test]
    fn own_dice_come_first() {
        let child = roll(vec![6]);
        let comp = Composition::new().own(&[1, 3]).embed(&child);
        assert_eq!(comp.dice_values(), &[1, 3, 6]);
        assert_eq!(comp.raw_total(), 10);
    }

    #[test]
    fn interpretations_join_with_separator() {
        let comp = Composition::new().note("Town").note("Tavern");
        assert_eq!(comp.interpretation(" / ").as_deref(), Some("Town / Tavern"));
        assert!(Composition::new().interpretation(", ").is_none());
    }

    #[test]
    fn doubles_detection() {
        assert!(is_doubles(&[3, 3]));
        assert!(is_doubles(&[6, 6, 1]));
        assert!(!is_doubles(&[3, 4]));
        assert!(!is_doubles(&[3]));
        assert!(!is_doubles(&[]));
    }

    #[test]
    fn attach_appends_only_when_present() {
        assert_eq!(attach("Yes".into(), None), "Yes");
        let plain = roll(vec![2]);
        assert_eq!(attach("Yes".into(), Some(&plain)), "Yes");
    }
}
