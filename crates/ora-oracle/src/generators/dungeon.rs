//! Dungeon rooms, traps, encounters and dressing.

use ora_core::variants::{DungeonDetail, DungeonEncounter, DungeonRoom, DungeonTrap};
use ora_dice::RollSource;

use crate::error::{OracleError, OracleResult};
use crate::tables::{
    DUNGEON_CREATURES, DUNGEON_DRESSING, DUNGEON_ROOMS, ROOM_FEATURES, TRAP_TRIGGERS, TRAPS, lookup,
};

/// Valid danger levels.
pub const DANGER_LEVELS: std::ops::RangeInclusive<u8> = 1..=5;

/// A room (d10) and its feature (d10).
pub fn dungeon_room(source: &mut RollSource) -> OracleResult<DungeonRoom> {
    let room = source.roll_die(10)?;
    let feature = source.roll_die(10)?;
    Ok(DungeonRoom::new(
        room,
        feature,
        lookup(DUNGEON_ROOMS, room),
        lookup(ROOM_FEATURES, feature),
    ))
}

/// A trap (d10) and its trigger (d6). A 6 on the trigger die is lethal.
pub fn dungeon_trap(source: &mut RollSource) -> OracleResult<DungeonTrap> {
    let trap = source.roll_die(10)?;
    let trigger = source.roll_die(6)?;
    Ok(DungeonTrap::new(
        trap,
        trigger,
        lookup(TRAPS, trap),
        lookup(TRAP_TRIGGERS, trigger),
    ))
}

/// Threat (d10 plus danger level) and creature (d10).
pub fn dungeon_encounter(
    source: &mut RollSource,
    danger_level: u8,
) -> OracleResult<DungeonEncounter> {
    if !DANGER_LEVELS.contains(&danger_level) {
        return Err(OracleError::InvalidDangerLevel(i64::from(danger_level)));
    }
    let threat = source.roll_die(10)?;
    let creature = source.roll_die(10)?;
    Ok(DungeonEncounter::new(
        threat,
        creature,
        danger_level,
        lookup(DUNGEON_CREATURES, creature),
    ))
}

/// Room condition (d6) and dressing (d10).
pub fn dungeon_detail(source: &mut RollSource) -> OracleResult<DungeonDetail> {
    let condition = source.roll_die(6)?;
    let dressing = source.roll_die(10)?;
    Ok(DungeonDetail::new(
        condition,
        dressing,
        lookup(DUNGEON_DRESSING, dressing),
    ))
}
