//! Dungeon rooms, traps, encounters and details.

use serde::{Deserialize, Serialize};

use super::{die_at, keep_or_fill};
use crate::registry::Registry;
use crate::roll::{RollCategory, RollHeader, Variant};

/// A room and its notable feature, from 2d10.
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonRoom {
    header: RollHeader,
    room: String,
    feature: String,
}

/// `extra` payload of [`DungeonRoom`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonRoomExtra {
    room: String,
    feature: String,
}

impl DungeonRoom {
    /// Build from the two rolls and the looked-up entries.
    pub fn new(
        room_roll: i32,
        feature_roll: i32,
        room: impl Into<String>,
        feature: impl Into<String>,
    ) -> Self {
        let room = room.into();
        let feature = feature.into();
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Dungeon Room",
                vec![room_roll, feature_roll],
                Some(format!("{room} with {feature}")),
            ),
            room,
            feature,
        }
    }

    /// The room type.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// What stands out in it.
    pub fn feature(&self) -> &str {
        &self.feature
    }
}

impl Variant for DungeonRoom {
    const KIND: &'static str = "dungeon_room";
    type Extra = DungeonRoomExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> DungeonRoomExtra {
        DungeonRoomExtra {
            room: self.room.clone(),
            feature: self.feature.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: DungeonRoomExtra, _: &Registry) -> Self {
        let header = keep_or_fill(header, || {
            Some(format!("{} with {}", extra.room, extra.feature))
        });
        Self {
            header,
            room: extra.room,
            feature: extra.feature,
        }
    }
}

/// A trap and its trigger. A 6 on the trigger die makes it lethal.
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonTrap {
    header: RollHeader,
    trap: String,
    trigger: String,
    lethal: bool,
}

/// `extra` payload of [`DungeonTrap`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonTrapExtra {
    trap: String,
    trigger: String,
    lethal: Option<bool>,
}

impl DungeonTrap {
    /// Build from the d10 trap roll, the d6 trigger roll and the entries.
    pub fn new(
        trap_roll: i32,
        trigger_roll: i32,
        trap: impl Into<String>,
        trigger: impl Into<String>,
    ) -> Self {
        let trap = trap.into();
        let trigger = trigger.into();
        let lethal = trigger_roll == 6;
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Dungeon Trap",
                vec![trap_roll, trigger_roll],
                Some(Self::describe(&trap, &trigger, lethal)),
            ),
            trap,
            trigger,
            lethal,
        }
    }

    fn describe(trap: &str, trigger: &str, lethal: bool) -> String {
        if lethal {
            format!("{trap}, triggered by {trigger} (lethal)")
        } else {
            format!("{trap}, triggered by {trigger}")
        }
    }

    /// What the trap does.
    pub fn trap(&self) -> &str {
        &self.trap
    }

    /// What sets it off.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Whether it kills outright.
    pub fn is_lethal(&self) -> bool {
        self.lethal
    }
}

impl Variant for DungeonTrap {
    const KIND: &'static str = "dungeon_trap";
    type Extra = DungeonTrapExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> DungeonTrapExtra {
        DungeonTrapExtra {
            trap: self.trap.clone(),
            trigger: self.trigger.clone(),
            lethal: Some(self.lethal),
        }
    }

    fn from_parts(header: RollHeader, extra: DungeonTrapExtra, _: &Registry) -> Self {
        let lethal = extra.lethal.unwrap_or_else(|| die_at(&header, 1) == 6);
        let header = keep_or_fill(header, || {
            Some(Self::describe(&extra.trap, &extra.trigger, lethal))
        });
        Self {
            header,
            trap: extra.trap,
            trigger: extra.trigger,
            lethal,
        }
    }
}

/// How dangerous an encounter is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threat {
    /// Nothing shows up.
    None,
    /// A nuisance.
    Minor,
    /// A fair fight.
    Standard,
    /// A hard fight.
    Dangerous,
    /// Run.
    Deadly,
}

impl Threat {
    /// Map a d10 plus danger level to a threat.
    pub fn from_total(total: i32) -> Self {
        match total {
            ..=4 => Self::None,
            5..=8 => Self::Minor,
            9..=11 => Self::Standard,
            12..=13 => Self::Dangerous,
            _ => Self::Deadly,
        }
    }
}

impl std::fmt::Display for Threat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Minor => write!(f, "Minor"),
            Self::Standard => write!(f, "Standard"),
            Self::Dangerous => write!(f, "Dangerous"),
            Self::Deadly => write!(f, "Deadly"),
        }
    }
}

/// An encounter: a d10 threat roll plus the danger level, and a d10 creature.
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonEncounter {
    header: RollHeader,
    danger_level: u8,
    threat: Threat,
    creature: String,
}

/// `extra` payload of [`DungeonEncounter`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DungeonEncounterExtra {
    danger_level: u8,
    threat: Option<Threat>,
    creature: String,
}

impl DungeonEncounter {
    /// Build from the two rolls, the danger level and the looked-up creature.
    pub fn new(
        threat_roll: i32,
        creature_roll: i32,
        danger_level: u8,
        creature: impl Into<String>,
    ) -> Self {
        let threat = Threat::from_total(threat_roll + i32::from(danger_level));
        let creature = creature.into();
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Dungeon Encounter",
                vec![threat_roll, creature_roll],
                Some(Self::describe(threat, &creature)),
            ),
            danger_level,
            threat,
            creature,
        }
    }

    fn describe(threat: Threat, creature: &str) -> String {
        match threat {
            Threat::None => "No encounter".to_string(),
            _ => format!("{threat}: {creature}"),
        }
    }

    /// Danger level the encounter was rolled at.
    pub fn danger_level(&self) -> u8 {
        self.danger_level
    }

    /// How dangerous it is.
    pub fn threat(&self) -> Threat {
        self.threat
    }

    /// What is encountered.
    pub fn creature(&self) -> &str {
        &self.creature
    }
}

impl Variant for DungeonEncounter {
    const KIND: &'static str = "dungeon_encounter";
    type Extra = DungeonEncounterExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> DungeonEncounterExtra {
        DungeonEncounterExtra {
            danger_level: self.danger_level,
            threat: Some(self.threat),
            creature: self.creature.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: DungeonEncounterExtra, _: &Registry) -> Self {
        let threat = extra.threat.unwrap_or_else(|| {
            Threat::from_total(die_at(&header, 0).saturating_add(i32::from(extra.danger_level)))
        });
        let header = keep_or_fill(header, || Some(Self::describe(threat, &extra.creature)));
        Self {
            header,
            danger_level: extra.danger_level,
            threat,
            creature: extra.creature,
        }
    }
}

/// State of a dungeon area, from a d6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DungeonCondition {
    /// Partly caved in.
    Collapsed,
    /// Standing water.
    Flooded,
    /// Roots and moss.
    Overgrown,
    /// Long abandoned.
    Dusty,
    /// Well kept.
    Pristine,
    /// Someone lives here.
    Occupied,
}

impl DungeonCondition {
    /// Map a d6 face to a condition.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=1 => Self::Collapsed,
            2 => Self::Flooded,
            3 => Self::Overgrown,
            4 => Self::Dusty,
            5 => Self::Pristine,
            _ => Self::Occupied,
        }
    }
}

impl std::fmt::Display for DungeonCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collapsed => write!(f, "Collapsed"),
            Self::Flooded => write!(f, "Flooded"),
            Self::Overgrown => write!(f, "Overgrown"),
            Self::Dusty => write!(f, "Dusty"),
            Self::Pristine => write!(f, "Pristine"),
            Self::Occupied => write!(f, "Occupied"),
        }
    }
}

/// Condition and dressing of a dungeon area.
///
/// The condition and interpretation are recomputed from the first die on
/// decode.
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonDetail {
    header: RollHeader,
    condition: DungeonCondition,
    dressing: String,
}

/// `extra` payload of [`DungeonDetail`]. The condition is written for
/// readers and ignored on decode.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonDetailExtra {
    condition: Option<DungeonCondition>,
    dressing: String,
}

impl DungeonDetail {
    /// Build from the d6 condition roll, the d10 dressing roll and the dressing.
    pub fn new(condition_roll: i32, dressing_roll: i32, dressing: impl Into<String>) -> Self {
        Self::from_header(
            RollHeader::new(
                RollCategory::Standard,
                "Dungeon Detail",
                vec![condition_roll, dressing_roll],
                None,
            ),
            dressing.into(),
        )
    }

    fn from_header(header: RollHeader, dressing: String) -> Self {
        let condition = DungeonCondition::from_roll(die_at(&header, 0));
        let text = format!("{condition}, {dressing}");
        Self {
            header: header.reinterpret(Some(text)),
            condition,
            dressing,
        }
    }

    /// State of the area.
    pub fn condition(&self) -> DungeonCondition {
        self.condition
    }

    /// Set dressing.
    pub fn dressing(&self) -> &str {
        &self.dressing
    }
}

impl Variant for DungeonDetail {
    const KIND: &'static str = "dungeon_detail";
    type Extra = DungeonDetailExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> DungeonDetailExtra {
        DungeonDetailExtra {
            condition: Some(self.condition),
            dressing: self.dressing.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: DungeonDetailExtra, _: &Registry) -> Self {
        Self::from_header(header, extra.dressing)
    }
}
