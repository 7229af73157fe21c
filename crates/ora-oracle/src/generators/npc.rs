//! Non-player characters.

use ora_core::variants::{DetailedNpc, NpcAction, NpcName, NpcProfile, NpcReaction};
use ora_dice::RollSource;

use crate::error::OracleResult;
use crate::tables::{
    MOTIVES, NAME_ENDS, NAME_MIDDLES, NAME_STARTS, NEEDS, NPC_ACTIONS, PERSONALITIES, lookup,
};

/// Roll an NPC's first reaction on 2d10.
pub fn npc_reaction(source: &mut RollSource, npc: Option<&str>) -> OracleResult<NpcReaction> {
    let first = source.roll_die(10)?;
    let second = source.roll_die(10)?;
    Ok(NpcReaction::new(first, second, npc.map(str::to_string)))
}

/// Roll what an NPC does (d10) and how hard (d6).
pub fn npc_action(source: &mut RollSource) -> OracleResult<NpcAction> {
    let action = source.roll_die(10)?;
    let intensity = source.roll_die(6)?;
    Ok(NpcAction::new(action, intensity, lookup(NPC_ACTIONS, action)))
}

/// Assemble a name from three d20 syllables.
pub fn npc_name(source: &mut RollSource) -> OracleResult<NpcName> {
    let rolls = [
        source.roll_die(20)?,
        source.roll_die(20)?,
        source.roll_die(20)?,
    ];
    let name = format!(
        "{}{}{}",
        lookup(NAME_STARTS, rolls[0]),
        lookup(NAME_MIDDLES, rolls[1]),
        lookup(NAME_ENDS, rolls[2])
    );
    Ok(NpcName::new(rolls, name))
}

/// Roll personality, need and motive on 3d10.
pub fn npc_profile(source: &mut RollSource) -> OracleResult<NpcProfile> {
    let rolls = [
        source.roll_die(10)?,
        source.roll_die(10)?,
        source.roll_die(10)?,
    ];
    Ok(NpcProfile::new(
        rolls,
        lookup(PERSONALITIES, rolls[0]),
        lookup(NEEDS, rolls[1]),
        lookup(MOTIVES, rolls[2]),
    ))
}

/// Name, profile and reaction in one result.
pub fn detailed_npc(source: &mut RollSource) -> OracleResult<DetailedNpc> {
    let name = npc_name(source)?;
    let profile = npc_profile(source)?;
    let reaction = npc_reaction(source, Some(name.name()))?;
    Ok(DetailedNpc::new(name, profile, reaction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ora_core::{RollCategory, RollResult, Variant};

    #[test]
    fn reaction_names_the_npc() {
        let reaction = npc_reaction(&mut RollSource::seeded(1), Some("Mira")).unwrap();
        assert_eq!(reaction.npc(), Some("Mira"));
        let text = reaction.header().interpretation().unwrap();
        assert!(text.starts_with("Mira is "));
    }

    #[test]
    fn name_is_built_from_its_rolls() {
        let name = npc_name(&mut RollSource::seeded(8)).unwrap();
        let d = name.header().dice_values();
        let expected = format!(
            "{}{}{}",
            lookup(NAME_STARTS, d[0]),
            lookup(NAME_MIDDLES, d[1]),
            lookup(NAME_ENDS, d[2])
        );
        assert_eq!(name.name(), expected);
    }

    #[test]
    fn detailed_npc_collects_child_dice_in_order() {
        let npc: RollResult = detailed_npc(&mut RollSource::seeded(4)).unwrap().into();
        assert_eq!(npc.category(), RollCategory::Composite);
        let children = npc.embedded();
        assert_eq!(children.len(), 3);
        let mut expected = Vec::new();
        for child in &children {
            expected.extend_from_slice(child.dice_values());
        }
        assert_eq!(npc.dice_values(), expected.as_slice());
        assert_eq!(npc.dice_values().len(), 8);
        assert_eq!(npc.raw_total(), expected.iter().sum::<i32>());
    }

    #[test]
    fn action_stays_in_range() {
        let mut source = RollSource::seeded(2);
        for _ in 0..30 {
            let action = npc_action(&mut source).unwrap();
            assert!(NPC_ACTIONS.contains(&action.action()));
        }
    }
}
