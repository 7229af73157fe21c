//! Concrete result shapes, grouped by oracle family.
//!
//! Constructors take dice that were already rolled and table entries that
//! were already looked up; nothing here draws randomness.

pub mod dice;
pub mod dungeon;
pub mod generic;
pub mod npc;
pub mod oracle;
pub mod settlement;
pub mod treasure;
pub mod wilderness;

use serde::{Deserialize, Serialize};

use crate::roll::RollHeader;

pub use dice::{DiceRoll, FateDice};
pub use dungeon::{
    DungeonCondition, DungeonDetail, DungeonEncounter, DungeonRoom, DungeonTrap, Threat,
};
pub use generic::GenericRoll;
pub use npc::{DetailedNpc, Disposition, NpcAction, NpcName, NpcProfile, NpcReaction};
pub use oracle::{
    DiscoverMeaning, EventFocus, Expectation, ExpectationCheck, FateCheck, FateOutcome,
    Likelihood, RandomEvent, SceneAdjustment, SceneCheck, SceneStatus,
};
pub use settlement::{Establishment, Settlement, SettlementName, SettlementSize};
pub use treasure::{
    Coins, Denomination, ItemBase, ItemCategory, ItemColor, ItemCreation, ItemProperty,
    TreasureHoard,
};
pub use wilderness::{Distance, Environment, Season, Weather, WeatherCondition, WildernessEncounter};

/// Strength of an action or property, read from a d6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// 1-2.
    #[default]
    Low,
    /// 3-4.
    Moderate,
    /// 5-6.
    High,
}

impl Intensity {
    /// Map a d6 face to an intensity.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=2 => Self::Low,
            3..=4 => Self::Moderate,
            _ => Self::High,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

/// `extra` payload for variants with no fields of their own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NoExtra {}

/// Keep a restored interpretation, or compute one if the document had none.
pub(crate) fn keep_or_fill(
    header: RollHeader,
    compute: impl FnOnce() -> Option<String>,
) -> RollHeader {
    if header.interpretation().is_some() {
        header
    } else {
        header.reinterpret(compute())
    }
}

/// Die at `index`, or 0 when a restored document is short.
pub(crate) fn die_at(header: &RollHeader, index: usize) -> i32 {
    header.dice_values().get(index).copied().unwrap_or_default()
}
