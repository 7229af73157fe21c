//! Items, coins and hoards.

use serde::{Deserialize, Serialize};

use super::{Intensity, die_at, keep_or_fill};
use crate::compose::Composition;
use crate::registry::Registry;
use crate::roll::{RollCategory, RollDocument, RollHeader, RollResult, Variant};

/// Broad item category, from a d10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// 1.
    Weapon,
    /// 2.
    Armor,
    /// 3.
    Tool,
    /// 4.
    Clothing,
    /// 5.
    Jewelry,
    /// 6.
    Book,
    /// 7.
    Potion,
    /// 8.
    Instrument,
    /// 9.
    Trinket,
    /// 10.
    Relic,
}

impl ItemCategory {
    /// Map a d10 face to a category.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=1 => Self::Weapon,
            2 => Self::Armor,
            3 => Self::Tool,
            4 => Self::Clothing,
            5 => Self::Jewelry,
            6 => Self::Book,
            7 => Self::Potion,
            8 => Self::Instrument,
            9 => Self::Trinket,
            _ => Self::Relic,
        }
    }

    /// Position in the d10 table, starting at 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "Weapon"),
            Self::Armor => write!(f, "Armor"),
            Self::Tool => write!(f, "Tool"),
            Self::Clothing => write!(f, "Clothing"),
            Self::Jewelry => write!(f, "Jewelry"),
            Self::Book => write!(f, "Book"),
            Self::Potion => write!(f, "Potion"),
            Self::Instrument => write!(f, "Instrument"),
            Self::Trinket => write!(f, "Trinket"),
            Self::Relic => write!(f, "Relic"),
        }
    }
}

/// The base object of an item: a d10 category and a d10 entry within it.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBase {
    header: RollHeader,
    category: ItemCategory,
    item: String,
}

/// `extra` payload of [`ItemBase`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemBaseExtra {
    category: Option<ItemCategory>,
    item: String,
}

impl ItemBase {
    /// Build from the two rolls and the looked-up item.
    pub fn new(category_roll: i32, item_roll: i32, item: impl Into<String>) -> Self {
        let category = ItemCategory::from_roll(category_roll);
        let item = item.into();
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Item Base",
                vec![category_roll, item_roll],
                Some(format!("{item} ({category})")),
            ),
            category,
            item,
        }
    }

    /// The category.
    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// The item.
    pub fn item(&self) -> &str {
        &self.item
    }
}

impl Variant for ItemBase {
    const KIND: &'static str = "item_base";
    type Extra = ItemBaseExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> ItemBaseExtra {
        ItemBaseExtra {
            category: Some(self.category),
            item: self.item.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: ItemBaseExtra, _: &Registry) -> Self {
        let category = extra
            .category
            .unwrap_or_else(|| ItemCategory::from_roll(die_at(&header, 0)));
        let header = keep_or_fill(header, || Some(format!("{} ({category})", extra.item)));
        Self {
            header,
            category,
            item: extra.item,
        }
    }
}

/// A property of an item: a d10 entry and a d6 intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProperty {
    header: RollHeader,
    property: String,
    intensity: Intensity,
}

/// `extra` payload of [`ItemProperty`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPropertyExtra {
    property: String,
    intensity: Option<Intensity>,
}

impl ItemProperty {
    /// Build from the two rolls and the looked-up property.
    pub fn new(property_roll: i32, intensity_roll: i32, property: impl Into<String>) -> Self {
        let property = property.into();
        let intensity = Intensity::from_roll(intensity_roll);
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Item Property",
                vec![property_roll, intensity_roll],
                Some(format!("{property} ({intensity})")),
            ),
            property,
            intensity,
        }
    }

    /// The property.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// How strong it is.
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }
}

impl Variant for ItemProperty {
    const KIND: &'static str = "item_property";
    type Extra = ItemPropertyExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> ItemPropertyExtra {
        ItemPropertyExtra {
            property: self.property.clone(),
            intensity: Some(self.intensity),
        }
    }

    fn from_parts(header: RollHeader, extra: ItemPropertyExtra, _: &Registry) -> Self {
        let intensity = extra
            .intensity
            .unwrap_or_else(|| Intensity::from_roll(die_at(&header, 1)));
        let header = keep_or_fill(header, || {
            Some(format!("{} ({intensity})", extra.property))
        });
        Self {
            header,
            property: extra.property,
            intensity,
        }
    }
}

/// The color of an item, from a d10.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemColor {
    header: RollHeader,
    color: String,
}

/// `extra` payload of [`ItemColor`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemColorExtra {
    color: String,
}

impl ItemColor {
    /// Build from the roll and the looked-up color.
    pub fn new(roll: i32, color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Item Color",
                vec![roll],
                Some(color.clone()),
            ),
            color,
        }
    }

    /// The color.
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Variant for ItemColor {
    const KIND: &'static str = "item_color";
    type Extra = ItemColorExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> ItemColorExtra {
        ItemColorExtra {
            color: self.color.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: ItemColorExtra, _: &Registry) -> Self {
        let header = keep_or_fill(header, || Some(extra.color.clone()));
        Self {
            header,
            color: extra.color,
        }
    }
}

const ITEM_SEPARATOR: &str = ", ";

/// An item assembled from a base, two properties and an optional color.
///
/// Dice are the base's, then each property's, then the color's.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCreation {
    header: RollHeader,
    base: Box<RollResult>,
    properties: Vec<RollResult>,
    color: Option<Box<RollResult>>,
}

/// `extra` payload of [`ItemCreation`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemCreationExtra {
    base: Option<RollDocument>,
    properties: Vec<RollDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<RollDocument>,
}

impl ItemCreation {
    /// Combine the parts of an item.
    pub fn new(base: ItemBase, properties: [ItemProperty; 2], color: Option<ItemColor>) -> Self {
        let base: RollResult = base.into();
        let properties: Vec<RollResult> = properties.into_iter().map(Into::into).collect();
        let color: Option<RollResult> = color.map(Into::into);
        let header = Composition::new()
            .embed(&base)
            .embed_all(&properties)
            .embed_all(color.as_ref())
            .into_header("Item Creation", ITEM_SEPARATOR);
        Self {
            header,
            base: Box::new(base),
            properties,
            color: color.map(Box::new),
        }
    }

    /// The base object.
    pub fn base(&self) -> &RollResult {
        &self.base
    }

    /// Property results in roll order.
    pub fn properties(&self) -> &[RollResult] {
        &self.properties
    }

    /// The color, if one was rolled.
    pub fn color(&self) -> Option<&RollResult> {
        self.color.as_deref()
    }
}

impl Variant for ItemCreation {
    const KIND: &'static str = "item_creation";
    type Extra = ItemCreationExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> ItemCreationExtra {
        ItemCreationExtra {
            base: Some(self.base.encode()),
            properties: self.properties.iter().map(RollResult::encode).collect(),
            color: self.color.as_ref().map(|c| c.encode()),
        }
    }

    fn from_parts(header: RollHeader, extra: ItemCreationExtra, registry: &Registry) -> Self {
        let base = registry.decode_embedded(extra.base, ItemBase::KIND);
        let properties: Vec<RollResult> = extra
            .properties
            .into_iter()
            .map(|doc| registry.decode(doc))
            .collect();
        let color = extra.color.map(|doc| registry.decode(doc));
        let header = keep_or_fill(header, || {
            Composition::new()
                .embed(&base)
                .embed_all(&properties)
                .embed_all(color.as_ref())
                .interpretation(ITEM_SEPARATOR)
        });
        Self {
            header,
            base: Box::new(base),
            properties,
            color: color.map(Box::new),
        }
    }

    fn embedded(&self) -> Vec<&RollResult> {
        std::iter::once(&*self.base)
            .chain(self.properties.iter())
            .chain(self.color.as_deref())
            .collect()
    }
}

/// Coin denomination, chosen by treasure tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    /// Tier 1.
    Copper,
    /// Tier 2.
    Silver,
    /// Tier 3.
    Gold,
    /// Tier 4.
    Platinum,
}

impl Denomination {
    /// Denomination for a treasure tier. Tiers above 4 pay in platinum.
    pub fn for_tier(tier: u8) -> Self {
        match tier {
            ..=1 => Self::Copper,
            2 => Self::Silver,
            3 => Self::Gold,
            _ => Self::Platinum,
        }
    }

    /// Coins per pip.
    pub fn multiplier(self) -> i32 {
        match self {
            Self::Copper => 10,
            Self::Silver => 10,
            Self::Gold => 5,
            Self::Platinum => 2,
        }
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copper => write!(f, "copper"),
            Self::Silver => write!(f, "silver"),
            Self::Gold => write!(f, "gold"),
            Self::Platinum => write!(f, "platinum"),
        }
    }
}

/// A pile of coins: Nd6 times the denomination's multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct Coins {
    header: RollHeader,
    tier: u8,
    denomination: Denomination,
    multiplier: i32,
}

/// `extra` payload of [`Coins`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinsExtra {
    tier: u8,
    denomination: Option<Denomination>,
    multiplier: Option<i32>,
    amount: Option<i32>,
}

impl Coins {
    /// Build from the rolled d6s and the treasure tier.
    pub fn new(dice: Vec<i32>, tier: u8) -> Self {
        let denomination = Denomination::for_tier(tier);
        let multiplier = denomination.multiplier();
        let header = RollHeader::new(RollCategory::Standard, "Coins", dice, None);
        let text = Self::describe(header.raw_total().saturating_mul(multiplier), denomination);
        Self {
            header: header.reinterpret(Some(text)),
            tier,
            denomination,
            multiplier,
        }
    }

    fn describe(amount: i32, denomination: Denomination) -> String {
        format!("{amount} {denomination}")
    }

    /// Treasure tier.
    pub fn tier(&self) -> u8 {
        self.tier
    }

    /// Coin type.
    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Coins per pip.
    pub fn multiplier(&self) -> i32 {
        self.multiplier
    }

    /// Number of coins.
    pub fn amount(&self) -> i32 {
        self.header.raw_total().saturating_mul(self.multiplier)
    }
}

impl Variant for Coins {
    const KIND: &'static str = "coins";
    type Extra = CoinsExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> CoinsExtra {
        CoinsExtra {
            tier: self.tier,
            denomination: Some(self.denomination),
            multiplier: Some(self.multiplier),
            amount: Some(self.amount()),
        }
    }

    fn from_parts(header: RollHeader, extra: CoinsExtra, _: &Registry) -> Self {
        let denomination = extra
            .denomination
            .unwrap_or_else(|| Denomination::for_tier(extra.tier));
        let multiplier = extra
            .multiplier
            .unwrap_or_else(|| denomination.multiplier());
        let amount = header.raw_total().saturating_mul(multiplier);
        let header = keep_or_fill(header, || Some(Self::describe(amount, denomination)));
        Self {
            header,
            tier: extra.tier,
            denomination,
            multiplier,
        }
    }
}

/// A hoard: a d6 roll, coins, and an item when the roll is 5 or more.
#[derive(Debug, Clone, PartialEq)]
pub struct TreasureHoard {
    header: RollHeader,
    tier: u8,
    coins: Box<RollResult>,
    item: Option<Box<RollResult>>,
}

/// `extra` payload of [`TreasureHoard`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasureHoardExtra {
    tier: u8,
    coins: Option<RollDocument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<RollDocument>,
}

const HOARD_SEPARATOR: &str = " and ";

impl TreasureHoard {
    /// Hoard roll at or above which an item is included.
    pub const ITEM_THRESHOLD: i32 = 5;

    /// Combine the hoard roll, the coins and the item, if any.
    pub fn new(roll: i32, tier: u8, coins: Coins, item: Option<ItemCreation>) -> Self {
        let coins: RollResult = coins.into();
        let item: Option<RollResult> = item.map(Into::into);
        let header = Composition::new()
            .own(&[roll])
            .embed(&coins)
            .embed_all(item.as_ref())
            .into_header("Treasure Hoard", HOARD_SEPARATOR);
        Self {
            header,
            tier,
            coins: Box::new(coins),
            item: item.map(Box::new),
        }
    }

    /// Treasure tier.
    pub fn tier(&self) -> u8 {
        self.tier
    }

    /// The coins.
    pub fn coins(&self) -> &RollResult {
        &self.coins
    }

    /// The item, if the hoard roll was high enough.
    pub fn item(&self) -> Option<&RollResult> {
        self.item.as_deref()
    }
}

impl Variant for TreasureHoard {
    const KIND: &'static str = "treasure_hoard";
    type Extra = TreasureHoardExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> TreasureHoardExtra {
        TreasureHoardExtra {
            tier: self.tier,
            coins: Some(self.coins.encode()),
            item: self.item.as_ref().map(|i| i.encode()),
        }
    }

    fn from_parts(header: RollHeader, extra: TreasureHoardExtra, registry: &Registry) -> Self {
        let coins = registry.decode_embedded(extra.coins, Coins::KIND);
        let item = extra.item.map(|doc| registry.decode(doc));
        let header = keep_or_fill(header, || {
            Composition::new()
                .embed(&coins)
                .embed_all(item.as_ref())
                .interpretation(HOARD_SEPARATOR)
        });
        Self {
            header,
            tier: extra.tier,
            coins: Box::new(coins),
            item: item.map(Box::new),
        }
    }

    fn embedded(&self) -> Vec<&RollResult> {
        std::iter::once(&*self.coins)
            .chain(self.item.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> ItemCreation {
        ItemCreation::new(
            ItemBase::new(1, 4, "Longsword"),
            [
                ItemProperty::new(2, 6, "Glowing"),
                ItemProperty::new(9, 1, "Rusted"),
            ],
            Some(ItemColor::new(3, "Crimson")),
        )
    }

    #[test]
    fn item_creation_order_and_text() {
        let item = sword();
        assert_eq!(item.header().dice_values(), &[1, 4, 2, 6, 9, 1, 3]);
        assert_eq!(item.header().raw_total(), 26);
        assert_eq!(
            item.header().interpretation(),
            Some("Longsword (Weapon), Glowing (High), Rusted (Low), Crimson")
        );
    }

    #[test]
    fn item_without_color() {
        let item = ItemCreation::new(
            ItemBase::new(7, 2, "Elixir"),
            [
                ItemProperty::new(1, 3, "Bitter"),
                ItemProperty::new(5, 4, "Fizzing"),
            ],
            None,
        );
        assert!(item.color().is_none());
        assert_eq!(item.header().dice_values().len(), 6);
        assert_eq!(item.embedded().len(), 3);
    }

    #[test]
    fn coins_amount_uses_multiplier() {
        let coins = Coins::new(vec![3, 4, 5, 6], 3);
        assert_eq!(coins.denomination(), Denomination::Gold);
        assert_eq!(coins.header().raw_total(), 18);
        assert_eq!(coins.amount(), 90);
        assert_eq!(coins.header().interpretation(), Some("90 gold"));
    }

    #[test]
    fn hoard_aggregates_coins_and_item() {
        let hoard = TreasureHoard::new(6, 3, Coins::new(vec![1, 2], 3), Some(sword()));
        assert_eq!(hoard.header().dice_values()[..3], [6, 1, 2]);
        assert_eq!(hoard.header().raw_total(), 6 + 3 + 26);
        assert!(hoard.item().is_some());
    }

    #[test]
    fn hoard_round_trip_is_recursive() {
        let registry = Registry::builtin().unwrap();
        let hoard: RollResult =
            TreasureHoard::new(5, 2, Coins::new(vec![6, 6, 1], 2), Some(sword())).into();
        let restored = registry.decode(hoard.encode());
        assert_eq!(restored, hoard);
        assert!(!restored.contains_generic());
    }

    #[test]
    fn coins_recover_from_missing_multiplier() {
        let registry = Registry::builtin().unwrap();
        let json = r#"{"kind":"coins","label":"Coins","diceValues":[2,2],"rawTotal":4,
            "createdAt":"2024-01-01T00:00:00Z","extra":{"tier":4}}"#;
        let RollResult::Coins(coins) = registry.decode_json(json).unwrap() else {
            panic!("expected coins");
        };
        assert_eq!(coins.denomination(), Denomination::Platinum);
        assert_eq!(coins.amount(), 8);
        assert_eq!(coins.header().interpretation(), Some("8 platinum"));
    }
}
