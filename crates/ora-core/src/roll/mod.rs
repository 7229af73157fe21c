//! The base roll-result contract.
//!
//! A [`RollHeader`] carries the fields every result shares. Each concrete
//! shape implements [`Variant`], which pairs the header with a typed `Extra`
//! schema for its own fields. [`RollResult`] is the closed set of built-in
//! shapes plus [`GenericRoll`], the fallback for unknown kinds.

pub mod document;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use document::RollDocument;

use crate::error::CoreResult;
use crate::registry::{Registry, RegistryBuilder};
use crate::variants::dice::{DiceRoll, FateDice};
use crate::variants::dungeon::{DungeonDetail, DungeonEncounter, DungeonRoom, DungeonTrap};
use crate::variants::generic::GenericRoll;
use crate::variants::npc::{DetailedNpc, NpcAction, NpcName, NpcProfile, NpcReaction};
use crate::variants::oracle::{
    DiscoverMeaning, ExpectationCheck, FateCheck, RandomEvent, SceneAdjustment, SceneCheck,
};
use crate::variants::settlement::{Establishment, Settlement, SettlementName};
use crate::variants::treasure::{
    Coins, ItemBase, ItemColor, ItemCreation, ItemProperty, TreasureHoard,
};
use crate::variants::wilderness::{Weather, WildernessEncounter};

/// How the dice values of a result should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollCategory {
    /// Numeric die faces.
    #[default]
    Standard,
    /// Fate dice with faces -1, 0, +1.
    Fate,
    /// A result built from embedded results.
    Composite,
}

impl std::fmt::Display for RollCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Fate => write!(f, "fate"),
            Self::Composite => write!(f, "composite"),
        }
    }
}

/// Fields shared by every roll result. Set once at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RollHeader {
    category: RollCategory,
    label: String,
    dice_values: Vec<i32>,
    raw_total: i32,
    interpretation: Option<String>,
    created_at: DateTime<Utc>,
}

impl RollHeader {
    /// Create a header whose total is the sum of its dice.
    pub fn new(
        category: RollCategory,
        label: impl Into<String>,
        dice_values: Vec<i32>,
        interpretation: Option<String>,
    ) -> Self {
        let raw_total = sum_dice(&dice_values);
        Self::with_total(category, label, dice_values, raw_total, interpretation)
    }

    /// Create a header with an explicit total.
    pub fn with_total(
        category: RollCategory,
        label: impl Into<String>,
        dice_values: Vec<i32>,
        raw_total: i32,
        interpretation: Option<String>,
    ) -> Self {
        Self {
            category,
            label: label.into(),
            dice_values,
            raw_total,
            interpretation,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn restore(
        category: RollCategory,
        label: String,
        dice_values: Vec<i32>,
        raw_total: i32,
        interpretation: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            label,
            dice_values,
            raw_total,
            interpretation,
            created_at,
        }
    }

    /// Replace the interpretation with one recomputed from primary fields.
    pub(crate) fn reinterpret(mut self, interpretation: Option<String>) -> Self {
        self.interpretation = interpretation;
        self
    }

    /// How the dice should be read.
    pub fn category(&self) -> RollCategory {
        self.category
    }

    /// Short description of what was rolled.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw dice in roll order.
    pub fn dice_values(&self) -> &[i32] {
        &self.dice_values
    }

    /// Total of the dice, or the variant's own reduction.
    pub fn raw_total(&self) -> i32 {
        self.raw_total
    }

    /// The frozen interpretation text.
    pub fn interpretation(&self) -> Option<&str> {
        self.interpretation.as_deref()
    }

    /// When the result was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A concrete roll-result shape.
///
/// `KIND` is the serialization contract and must never change once shipped.
/// `Extra` is the typed schema for the variant's fields inside a document's
/// `extra` map; every field needs a serde default so that a partial or
/// malformed map still decodes.
pub trait Variant: Sized {
    /// Stable identity string.
    const KIND: &'static str;

    /// Typed `extra` payload.
    type Extra: Serialize + DeserializeOwned + Default;

    /// The shared base fields.
    fn header(&self) -> &RollHeader;

    /// Encode variant fields.
    fn to_extra(&self) -> Self::Extra;

    /// Rebuild from a restored header and decoded variant fields.
    fn from_parts(header: RollHeader, extra: Self::Extra, registry: &Registry) -> Self;

    /// Results embedded in this one, in embedding order.
    fn embedded(&self) -> Vec<&RollResult> {
        Vec::new()
    }
}

/// Encode any variant into a document.
pub fn encode_variant<V: Variant>(value: &V) -> RollDocument {
    let extra = match serde_json::to_value(value.to_extra()) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(kind = V::KIND, value = %other, "extra did not encode to an object");
            Map::new()
        }
        Err(err) => {
            tracing::warn!(kind = V::KIND, error = %err, "failed to encode extra");
            Map::new()
        }
    };
    RollDocument::from_header(V::KIND, value.header(), extra)
}

/// Decode a document as variant `V`.
///
/// A malformed `extra` map falls back to `V::Extra::default()`; the variant
/// then recomputes what it can from the header's primary fields.
pub fn decode_variant<V>(document: RollDocument, registry: &Registry) -> RollResult
where
    V: Variant + Into<RollResult>,
{
    let (header, extra) = document.into_parts();
    let extra = match serde_json::from_value::<V::Extra>(Value::Object(extra)) {
        Ok(extra) => extra,
        Err(err) => {
            tracing::warn!(kind = V::KIND, error = %err, "malformed extra, using defaults");
            V::Extra::default()
        }
    };
    V::from_parts(header, extra, registry).into()
}

/// Sum dice values, saturating at the `i32` bounds.
pub fn sum_dice(dice: &[i32]) -> i32 {
    dice.iter().fold(0i32, |total, &d| total.saturating_add(d))
}

macro_rules! roll_variants {
    ($($(#[$attr:meta])* $variant:ident($ty:ty),)+) => {
        /// Every built-in result shape, plus the generic fallback.
        #[derive(Debug, Clone, PartialEq)]
        pub enum RollResult {
            /// A result whose kind is not registered; only base fields survive.
            Generic(GenericRoll),
            $($(#[$attr])* $variant($ty),)+
        }

        impl RollResult {
            /// The stable identity of this result's variant.
            pub fn kind(&self) -> &str {
                match self {
                    Self::Generic(r) => r.kind(),
                    $(Self::$variant(_) => <$ty as Variant>::KIND,)+
                }
            }

            /// The base fields shared by every variant.
            pub fn header(&self) -> &RollHeader {
                match self {
                    Self::Generic(r) => r.header(),
                    $(Self::$variant(r) => Variant::header(r),)+
                }
            }

            /// Encode to the persisted document shape.
            pub fn encode(&self) -> RollDocument {
                match self {
                    Self::Generic(r) => r.encode(),
                    $(Self::$variant(r) => encode_variant(r),)+
                }
            }

            /// Results embedded in this one, in embedding order.
            pub fn embedded(&self) -> Vec<&RollResult> {
                match self {
                    Self::Generic(_) => Vec::new(),
                    $(Self::$variant(r) => Variant::embedded(r),)+
                }
            }
        }

        $(
            impl From<$ty> for RollResult {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+

        impl From<GenericRoll> for RollResult {
            fn from(value: GenericRoll) -> Self {
                Self::Generic(value)
            }
        }

        /// Kinds of every built-in variant, in declaration order.
        pub const BUILTIN_KINDS: &[&str] = &[$(<$ty as Variant>::KIND,)+];

        pub(crate) fn register_builtin(builder: RegistryBuilder) -> CoreResult<RegistryBuilder> {
            Ok(builder $(.register(<$ty as Variant>::KIND, decode_variant::<$ty>)?)+)
        }
    };
}

roll_variants! {
    /// A 2d6 yes/no question with a likelihood modifier.
    FateCheck(FateCheck),
    /// A 2dF check of how a scene compares to expectations.
    ExpectationCheck(ExpectationCheck),
    /// A random event: focus plus action and subject words.
    RandomEvent(RandomEvent),
    /// An adjective and noun prompt.
    DiscoverMeaning(DiscoverMeaning),
    /// A d10 check of a scene setup against the chaos factor.
    SceneCheck(SceneCheck),
    /// How an altered scene differs.
    SceneAdjustment(SceneAdjustment),
    /// An NPC's attitude on a seven-step scale.
    NpcReaction(NpcReaction),
    /// What an NPC does next.
    NpcAction(NpcAction),
    /// A generated NPC name.
    NpcName(NpcName),
    /// An NPC's personality, need and motive.
    NpcProfile(NpcProfile),
    /// Name, profile and reaction together.
    DetailedNpc(DetailedNpc),
    /// A generated settlement name.
    SettlementName(SettlementName),
    /// A business or landmark in a settlement.
    Establishment(Establishment),
    /// A settlement with a name and establishments.
    Settlement(Settlement),
    /// A dungeon room and its notable feature.
    DungeonRoom(DungeonRoom),
    /// A dungeon trap and its trigger.
    DungeonTrap(DungeonTrap),
    /// A dungeon encounter scaled by danger level.
    DungeonEncounter(DungeonEncounter),
    /// The state of a dungeon area.
    DungeonDetail(DungeonDetail),
    /// The base object of a created item.
    ItemBase(ItemBase),
    /// A property of a created item.
    ItemProperty(ItemProperty),
    /// The color of a created item.
    ItemColor(ItemColor),
    /// An item assembled from base, properties and color.
    ItemCreation(ItemCreation),
    /// A pile of coins.
    Coins(Coins),
    /// Coins plus an optional item.
    TreasureHoard(TreasureHoard),
    /// Weather for a season.
    Weather(Weather),
    /// A creature met while travelling.
    WildernessEncounter(WildernessEncounter),
    /// A freeform `NdM` roll.
    DiceRoll(DiceRoll),
    /// A freeform `NdF` roll.
    FateDice(FateDice),
}

impl RollResult {
    /// How the dice should be read.
    pub fn category(&self) -> RollCategory {
        self.header().category()
    }

    /// Short description of what was rolled.
    pub fn label(&self) -> &str {
        self.header().label()
    }

    /// Raw dice in roll order.
    pub fn dice_values(&self) -> &[i32] {
        self.header().dice_values()
    }

    /// Total of the dice, or the variant's own reduction.
    pub fn raw_total(&self) -> i32 {
        self.header().raw_total()
    }

    /// The frozen interpretation text.
    pub fn interpretation(&self) -> Option<&str> {
        self.header().interpretation()
    }

    /// When the result was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.header().created_at()
    }

    /// Whether this is the fallback shape for an unregistered kind.
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic(_))
    }

    /// Whether this result or anything embedded in it is a generic fallback.
    pub fn contains_generic(&self) -> bool {
        self.is_generic() || self.embedded().iter().any(|r| r.contains_generic())
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice: Vec<String> = self.dice_values().iter().map(|v| v.to_string()).collect();
        write!(
            f,
            "{} [{}] = {}",
            self.label(),
            dice.join(", "),
            self.raw_total()
        )?;
        if let Some(text) = self.interpretation() {
            write!(f, ": {text}")?;
        }
        Ok(())
    }
}
