//! Dice notation such as `2d6`, `d100` or `4dF`.

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};
use crate::source::RollSource;

/// Upper bound on dice in one expression.
pub const MAX_DICE: u32 = 100;

/// A parsed `NdM` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpr {
    /// How many dice to roll.
    pub count: u32,
    /// Which die to roll.
    pub die: Die,
}

impl DiceExpr {
    /// Create an expression directly.
    pub fn new(count: u32, die: Die) -> Self {
        Self { count, die }
    }

    /// Parse notation like `2d6`, `d20`, `3d%` or `4dF`.
    pub fn parse(s: &str) -> DiceResult<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        let Some(pos) = lower.find('d') else {
            return Err(DiceError::Notation(trimmed.to_string()));
        };
        let (count_str, die_str) = lower.split_at(pos);
        let count = if count_str.is_empty() {
            1
        } else {
            count_str
                .parse::<u32>()
                .map_err(|_| DiceError::Notation(trimmed.to_string()))?
        };
        if count == 0 || count > MAX_DICE {
            return Err(DiceError::Notation(trimmed.to_string()));
        }
        let die =
            Die::from_str_tag(die_str).ok_or_else(|| DiceError::Notation(trimmed.to_string()))?;
        Ok(Self { count, die })
    }

    /// Roll every die in the expression, in order.
    pub fn roll(&self, source: &mut RollSource) -> DiceResult<Vec<i32>> {
        if self.die.is_fate() {
            source.roll_fate_dice(self.count)
        } else {
            source.roll_dice(self.count, self.die.sides())
        }
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard() {
        assert_eq!(DiceExpr::parse("2d6").unwrap(), DiceExpr::new(2, Die::D6));
        assert_eq!(DiceExpr::parse("d20").unwrap(), DiceExpr::new(1, Die::D20));
        assert_eq!(DiceExpr::parse(" 3D% ").unwrap(), DiceExpr::new(3, Die::D100));
        assert_eq!(DiceExpr::parse("4dF").unwrap(), DiceExpr::new(4, Die::Fate));
        assert_eq!(
            DiceExpr::parse("2d7").unwrap(),
            DiceExpr::new(2, Die::Custom(7))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let bad_inputs = [
            "", "6", "0d6", "d", "2d", "2d1", "xd6", "101d6", "2e6", "d1001", "100d2000000000",
        ];
        for bad in bad_inputs {
            assert!(DiceExpr::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn largest_expression_rolls_without_overflow() {
        let mut src = RollSource::seeded(0);
        let expr = DiceExpr::parse("100d1000").unwrap();
        let values = expr.roll(&mut src).unwrap();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (1..=1000).contains(v)));
    }

    #[test]
    fn display() {
        assert_eq!(DiceExpr::new(2, Die::D6).to_string(), "2d6");
        assert_eq!(DiceExpr::new(4, Die::Fate).to_string(), "4dF");
    }

    #[test]
    fn roll_counts_and_ranges() {
        let mut src = RollSource::seeded(42);
        let values = DiceExpr::new(3, Die::D8).roll(&mut src).unwrap();
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| (1..=8).contains(v)));

        let fate = DiceExpr::new(4, Die::Fate).roll(&mut src).unwrap();
        assert_eq!(fate.len(), 4);
        assert!(fate.iter().all(|v| (-1..=1).contains(v)));
    }
}
