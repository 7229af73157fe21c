//! One generator per result kind.
//!
//! Generators draw their dice from the caller's [`RollSource`](ora_dice::RollSource)
//! in a fixed order, so a seeded source reproduces the same results.

pub mod dice;
pub mod dungeon;
pub mod npc;
pub mod oracle;
pub mod settlement;
pub mod treasure;
pub mod wilderness;

pub use dice::{dice_roll, fate_dice, roll_notation};
pub use dungeon::{dungeon_detail, dungeon_encounter, dungeon_room, dungeon_trap};
pub use npc::{detailed_npc, npc_action, npc_name, npc_profile, npc_reaction};
pub use oracle::{
    discover_meaning, expectation_check, fate_check, random_event, scene_adjustment, scene_check,
};
pub use settlement::{establishment, settlement, settlement_name};
pub use treasure::{coins, item_base, item_color, item_creation, item_property, treasure_hoard};
pub use wilderness::{weather, wilderness_encounter};
