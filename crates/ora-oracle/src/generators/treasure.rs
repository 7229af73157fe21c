//! Items, coins and hoards.

use ora_core::variants::{
    Coins, ItemBase, ItemCategory, ItemColor, ItemCreation, ItemProperty, TreasureHoard,
};
use ora_dice::RollSource;

use crate::error::{OracleError, OracleResult};
use crate::tables::{ITEM_COLORS, ITEM_PROPERTIES, items, lookup};

/// Valid treasure tiers.
pub const TIERS: std::ops::RangeInclusive<u8> = 1..=4;

fn check_tier(tier: u8) -> OracleResult<()> {
    if TIERS.contains(&tier) {
        Ok(())
    } else {
        Err(OracleError::InvalidParameter(format!(
            "treasure tier {tier}, expected 1-4"
        )))
    }
}

/// Category (d10) then an item of that category (d10).
pub fn item_base(source: &mut RollSource) -> OracleResult<ItemBase> {
    let category = source.roll_die(10)?;
    let item = source.roll_die(10)?;
    let name = lookup(items(ItemCategory::from_roll(category)), item);
    Ok(ItemBase::new(category, item, name))
}

/// A property (d10) and its intensity (d6).
pub fn item_property(source: &mut RollSource) -> OracleResult<ItemProperty> {
    let property = source.roll_die(10)?;
    let intensity = source.roll_die(6)?;
    Ok(ItemProperty::new(
        property,
        intensity,
        lookup(ITEM_PROPERTIES, property),
    ))
}

/// A color on a d10.
pub fn item_color(source: &mut RollSource) -> OracleResult<ItemColor> {
    let roll = source.roll_die(10)?;
    Ok(ItemColor::new(roll, lookup(ITEM_COLORS, roll)))
}

/// A base, two properties and, when `colored`, a color.
pub fn item_creation(source: &mut RollSource, colored: bool) -> OracleResult<ItemCreation> {
    let base = item_base(source)?;
    let properties = [item_property(source)?, item_property(source)?];
    let color = if colored {
        Some(item_color(source)?)
    } else {
        None
    };
    Ok(ItemCreation::new(base, properties, color))
}

/// Tier plus one d6, paid in the tier's denomination.
pub fn coins(source: &mut RollSource, tier: u8) -> OracleResult<Coins> {
    check_tier(tier)?;
    let dice = source.roll_dice(u32::from(tier) + 1, 6)?;
    Ok(Coins::new(dice, tier))
}

/// A d6 hoard roll, the coins, and a colored item when the roll is 5 or more.
pub fn treasure_hoard(source: &mut RollSource, tier: u8) -> OracleResult<TreasureHoard> {
    check_tier(tier)?;
    let roll = source.roll_die(6)?;
    let coins = coins(source, tier)?;
    let item = if roll >= TreasureHoard::ITEM_THRESHOLD {
        tracing::debug!(roll, "hoard includes an item");
        Some(item_creation(source, true)?)
    } else {
        None
    };
    Ok(TreasureHoard::new(roll, tier, coins, item))
}
