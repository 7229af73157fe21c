//! Weighted lookup tables.

use crate::error::{DiceError, DiceResult};
use crate::source::RollSource;

/// A table of `(weight, value)` rows rolled with a single weighted draw.
#[derive(Debug, Clone)]
pub struct WeightedTable<'a, T> {
    rows: &'a [(u32, T)],
    weights: Vec<u32>,
}

/// A row picked from a [`WeightedTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TablePick<'a, T> {
    /// The 1-based draw against the table's total weight.
    pub draw: i32,
    /// Index of the chosen row.
    pub index: usize,
    /// The chosen row's value.
    pub value: &'a T,
}

impl<'a, T> WeightedTable<'a, T> {
    /// Wrap a slice of rows, validating that it can be rolled.
    pub fn new(rows: &'a [(u32, T)]) -> DiceResult<Self> {
        if rows.is_empty() {
            return Err(DiceError::EmptyTable);
        }
        let weights: Vec<u32> = rows.iter().map(|(w, _)| *w).collect();
        let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
        if total == 0 || total > i32::MAX as u64 {
            return Err(DiceError::InvalidWeight(total));
        }
        Ok(Self { rows, weights })
    }

    /// Sum of all row weights.
    pub fn total_weight(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows. Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Roll on the table.
    pub fn roll(&self, source: &mut RollSource) -> DiceResult<TablePick<'a, T>> {
        let pick = source.roll_weighted(&self.weights)?;
        let (_, value) = &self.rows[pick.index];
        Ok(TablePick {
            draw: pick.draw,
            index: pick.index,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &[(u32, &str)] = &[(3, "common"), (1, "rare"), (0, "never")];

    #[test]
    fn rejects_empty_and_zero_tables() {
        let empty: &[(u32, &str)] = &[];
        assert_eq!(WeightedTable::new(empty).unwrap_err(), DiceError::EmptyTable);
        let zero: &[(u32, &str)] = &[(0, "a"), (0, "b")];
        assert_eq!(
            WeightedTable::new(zero).unwrap_err(),
            DiceError::InvalidWeight(0)
        );
    }

    #[test]
    fn total_weight_and_len() {
        let table = WeightedTable::new(ROWS).unwrap();
        assert_eq!(table.total_weight(), 4);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn roll_stays_within_weighted_rows() {
        let table = WeightedTable::new(ROWS).unwrap();
        let mut src = RollSource::seeded(42);
        for _ in 0..200 {
            let pick = table.roll(&mut src).unwrap();
            assert!((1..=4).contains(&pick.draw));
            assert_ne!(*pick.value, "never");
            assert_eq!(*pick.value, ROWS[pick.index].1);
        }
    }
}
