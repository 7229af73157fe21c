//! Freeform dice rolls.

use serde::{Deserialize, Serialize};

use super::NoExtra;
use crate::registry::Registry;
use crate::roll::{RollCategory, RollHeader, Variant};

/// A plain `NdM` roll. The label is the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceRoll {
    header: RollHeader,
    expression: String,
}

/// `extra` payload of [`DiceRoll`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceRollExtra {
    expression: String,
}

impl DiceRoll {
    /// Build from the expression that was rolled and its dice.
    pub fn new(expression: impl Into<String>, dice: Vec<i32>) -> Self {
        let expression = expression.into();
        Self {
            header: RollHeader::new(RollCategory::Standard, expression.clone(), dice, None),
            expression,
        }
    }

    /// The expression, e.g. `3d6`.
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

impl Variant for DiceRoll {
    const KIND: &'static str = "dice_roll";
    type Extra = DiceRollExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> DiceRollExtra {
        DiceRollExtra {
            expression: self.expression.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: DiceRollExtra, _: &Registry) -> Self {
        let expression = if extra.expression.is_empty() {
            header.label().to_string()
        } else {
            extra.expression
        };
        Self { header, expression }
    }
}

/// A plain `NdF` roll.
#[derive(Debug, Clone, PartialEq)]
pub struct FateDice {
    header: RollHeader,
}

impl FateDice {
    /// Build from rolled fate dice.
    pub fn new(dice: Vec<i32>) -> Self {
        let label = format!("{}dF", dice.len());
        Self {
            header: RollHeader::new(RollCategory::Fate, label, dice, None),
        }
    }
}

impl Variant for FateDice {
    const KIND: &'static str = "fate_dice";
    type Extra = NoExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> NoExtra {
        NoExtra {}
    }

    fn from_parts(header: RollHeader, _: NoExtra, _: &Registry) -> Self {
        Self { header }
    }
}
