//! Settlements and what they hold.

use ora_core::variants::{Establishment, Settlement, SettlementName, SettlementSize};
use ora_dice::{RollSource, WeightedTable};

use crate::error::OracleResult;
use crate::tables::{ESTABLISHMENTS, SETTLEMENT_PREFIXES, SETTLEMENT_SUFFIXES, lookup};

/// Join a d10 prefix and a d10 suffix.
pub fn settlement_name(source: &mut RollSource) -> OracleResult<SettlementName> {
    let prefix = source.roll_die(10)?;
    let suffix = source.roll_die(10)?;
    Ok(SettlementName::new(
        prefix,
        suffix,
        lookup(SETTLEMENT_PREFIXES, prefix),
        lookup(SETTLEMENT_SUFFIXES, suffix),
    ))
}

/// Draw one establishment from the weighted table.
///
/// The recorded die is the raw draw in `1..=total_weight`.
pub fn establishment(source: &mut RollSource) -> OracleResult<Establishment> {
    let table = WeightedTable::new(ESTABLISHMENTS)?;
    let pick = table.roll(source)?;
    Ok(Establishment::new(pick.draw, *pick.value))
}

/// A named settlement with d4 plus a size bonus establishments.
pub fn settlement(source: &mut RollSource, size: SettlementSize) -> OracleResult<Settlement> {
    let count_roll = source.roll_die(4)?;
    let name = settlement_name(source)?;
    let count = (count_roll + size.establishment_bonus()).max(1);
    let establishments = (0..count)
        .map(|_| establishment(source))
        .collect::<OracleResult<Vec<_>>>()?;
    Ok(Settlement::new(count_roll, size, name, establishments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ora_core::Variant;

    #[test]
    fn establishment_draw_is_within_total_weight() {
        let total: u32 = ESTABLISHMENTS.iter().map(|(w, _)| w).sum();
        let mut source = RollSource::seeded(11);
        for _ in 0..100 {
            let place = establishment(&mut source).unwrap();
            let draw = place.header().dice_values()[0];
            assert!(draw >= 1 && draw as u32 <= total);
            assert!(ESTABLISHMENTS.iter().any(|(_, name)| *name == place.establishment()));
        }
    }

    #[test]
    fn settlement_count_follows_size() {
        for size in SettlementSize::all() {
            for seed in 0..20 {
                let town = settlement(&mut RollSource::seeded(seed), *size).unwrap();
                let count_roll = town.header().dice_values()[0];
                let expected = (count_roll + size.establishment_bonus()).max(1) as usize;
                assert_eq!(town.establishment_count(), expected);
                assert_eq!(town.header().dice_values().len(), 1 + 2 + expected);
            }
        }
    }

    #[test]
    fn settlement_text_names_the_place() {
        let town = settlement(&mut RollSource::seeded(6), SettlementSize::Town).unwrap();
        let name = town.name().interpretation().unwrap().to_string();
        assert!(town.header().interpretation().unwrap().starts_with(&name));
        assert!(town.header().interpretation().unwrap().contains("(Town)"));
    }
}
