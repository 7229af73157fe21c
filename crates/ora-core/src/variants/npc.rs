//! NPC reactions, actions, names and profiles.

use serde::{Deserialize, Serialize};

use super::{Intensity, die_at, keep_or_fill};
use crate::compose::Composition;
use crate::registry::Registry;
use crate::roll::{RollCategory, RollDocument, RollHeader, RollResult, Variant};

/// NPC attitude on a seven-level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Actively antagonistic.
    Hostile,
    /// Uncooperative and cold.
    Unfriendly,
    /// Wary and guarded.
    Cautious,
    /// Indifferent.
    Neutral,
    /// Pleasantly engaged.
    Sociable,
    /// Actively helpful.
    Friendly,
    /// Exceptionally giving.
    Generous,
}

impl Disposition {
    /// Map a 2d10 total to a disposition.
    pub fn from_total(total: i32) -> Self {
        match total {
            ..=3 => Self::Hostile,
            4..=5 => Self::Unfriendly,
            6..=8 => Self::Cautious,
            9..=12 => Self::Neutral,
            13..=15 => Self::Sociable,
            16..=18 => Self::Friendly,
            _ => Self::Generous,
        }
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hostile => write!(f, "Hostile"),
            Self::Unfriendly => write!(f, "Unfriendly"),
            Self::Cautious => write!(f, "Cautious"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Sociable => write!(f, "Sociable"),
            Self::Friendly => write!(f, "Friendly"),
            Self::Generous => write!(f, "Generous"),
        }
    }
}

/// An NPC's reaction, from 2d10.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcReaction {
    header: RollHeader,
    npc: Option<String>,
    disposition: Disposition,
}

/// `extra` payload of [`NpcReaction`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcReactionExtra {
    #[serde(skip_serializing_if = "Option::is_none")]
    npc: Option<String>,
    disposition: Option<Disposition>,
}

impl NpcReaction {
    /// Build from the two d10s, optionally naming who reacts.
    pub fn new(first: i32, second: i32, npc: Option<String>) -> Self {
        let disposition = Disposition::from_total(first + second);
        let text = Self::describe(npc.as_deref(), disposition);
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "NPC Reaction",
                vec![first, second],
                Some(text),
            ),
            npc,
            disposition,
        }
    }

    fn describe(npc: Option<&str>, disposition: Disposition) -> String {
        match npc {
            Some(name) => format!("{name} is {disposition}"),
            None => disposition.to_string(),
        }
    }

    /// Who is reacting.
    pub fn npc(&self) -> Option<&str> {
        self.npc.as_deref()
    }

    /// The attitude.
    pub fn disposition(&self) -> Disposition {
        self.disposition
    }
}

impl Variant for NpcReaction {
    const KIND: &'static str = "npc_reaction";
    type Extra = NpcReactionExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> NpcReactionExtra {
        NpcReactionExtra {
            npc: self.npc.clone(),
            disposition: Some(self.disposition),
        }
    }

    fn from_parts(header: RollHeader, extra: NpcReactionExtra, _: &Registry) -> Self {
        let disposition = extra
            .disposition
            .unwrap_or_else(|| Disposition::from_total(header.raw_total()));
        let header = keep_or_fill(header, || {
            Some(Self::describe(extra.npc.as_deref(), disposition))
        });
        Self {
            header,
            npc: extra.npc,
            disposition,
        }
    }
}

/// What an NPC does next: a d10 action and a d6 intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcAction {
    header: RollHeader,
    action: String,
    intensity: Intensity,
}

/// `extra` payload of [`NpcAction`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcActionExtra {
    action: String,
    intensity: Option<Intensity>,
}

impl NpcAction {
    /// Build from the action and intensity rolls and the looked-up action.
    pub fn new(action_roll: i32, intensity_roll: i32, action: impl Into<String>) -> Self {
        let action = action.into();
        let intensity = Intensity::from_roll(intensity_roll);
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "NPC Action",
                vec![action_roll, intensity_roll],
                Some(format!("{action} ({intensity})")),
            ),
            action,
            intensity,
        }
    }

    /// The action.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// How forcefully it is done.
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }
}

impl Variant for NpcAction {
    const KIND: &'static str = "npc_action";
    type Extra = NpcActionExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> NpcActionExtra {
        NpcActionExtra {
            action: self.action.clone(),
            intensity: Some(self.intensity),
        }
    }

    fn from_parts(header: RollHeader, extra: NpcActionExtra, _: &Registry) -> Self {
        let intensity = extra
            .intensity
            .unwrap_or_else(|| Intensity::from_roll(die_at(&header, 1)));
        let header = keep_or_fill(header, || Some(format!("{} ({intensity})", extra.action)));
        Self {
            header,
            action: extra.action,
            intensity,
        }
    }
}

/// A generated NPC name from 3d20.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcName {
    header: RollHeader,
    name: String,
}

/// `extra` payload of [`NpcName`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcNameExtra {
    name: String,
}

impl NpcName {
    /// Build from the three fragment rolls and the assembled name.
    pub fn new(rolls: [i32; 3], name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "NPC Name",
                rolls.to_vec(),
                Some(name.clone()),
            ),
            name,
        }
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Variant for NpcName {
    const KIND: &'static str = "npc_name";
    type Extra = NpcNameExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> NpcNameExtra {
        NpcNameExtra {
            name: self.name.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: NpcNameExtra, _: &Registry) -> Self {
        let header = keep_or_fill(header, || Some(extra.name.clone()));
        Self {
            header,
            name: extra.name,
        }
    }
}

/// Personality, need and motive from 3d10.
///
/// The description is always recomputed from the three words on decode.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcProfile {
    header: RollHeader,
    personality: String,
    need: String,
    motive: String,
}

/// `extra` payload of [`NpcProfile`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcProfileExtra {
    personality: String,
    need: String,
    motive: String,
}

impl NpcProfile {
    /// Build from the three rolls and the looked-up words.
    pub fn new(
        rolls: [i32; 3],
        personality: impl Into<String>,
        need: impl Into<String>,
        motive: impl Into<String>,
    ) -> Self {
        Self::from_words(
            RollHeader::new(RollCategory::Standard, "NPC Profile", rolls.to_vec(), None),
            personality.into(),
            need.into(),
            motive.into(),
        )
    }

    fn from_words(header: RollHeader, personality: String, need: String, motive: String) -> Self {
        let description = format!("{personality}, needs {need}, driven by {motive}");
        Self {
            header: header.reinterpret(Some(description)),
            personality,
            need,
            motive,
        }
    }

    /// Personality trait.
    pub fn personality(&self) -> &str {
        &self.personality
    }

    /// What the NPC needs.
    pub fn need(&self) -> &str {
        &self.need
    }

    /// What drives the NPC.
    pub fn motive(&self) -> &str {
        &self.motive
    }

    /// One-line description.
    pub fn description(&self) -> &str {
        self.header.interpretation().unwrap_or_default()
    }
}

impl Variant for NpcProfile {
    const KIND: &'static str = "npc_profile";
    type Extra = NpcProfileExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> NpcProfileExtra {
        NpcProfileExtra {
            personality: self.personality.clone(),
            need: self.need.clone(),
            motive: self.motive.clone(),
        }
    }

    fn from_parts(header: RollHeader, extra: NpcProfileExtra, _: &Registry) -> Self {
        Self::from_words(header, extra.personality, extra.need, extra.motive)
    }
}

/// Name, profile and reaction rolled together.
///
/// The summary is recomputed from the decoded parts on restore.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedNpc {
    header: RollHeader,
    name: Box<RollResult>,
    profile: Box<RollResult>,
    reaction: Box<RollResult>,
}

/// `extra` payload of [`DetailedNpc`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedNpcExtra {
    name: Option<RollDocument>,
    profile: Option<RollDocument>,
    reaction: Option<RollDocument>,
}

const SUMMARY_SEPARATOR: &str = "; ";

impl DetailedNpc {
    /// Combine a name, a profile and a reaction.
    pub fn new(name: NpcName, profile: NpcProfile, reaction: NpcReaction) -> Self {
        let name: RollResult = name.into();
        let profile: RollResult = profile.into();
        let reaction: RollResult = reaction.into();
        let header = Composition::new()
            .embed_all([&name, &profile, &reaction])
            .into_header("Detailed NPC", SUMMARY_SEPARATOR);
        Self {
            header,
            name: Box::new(name),
            profile: Box::new(profile),
            reaction: Box::new(reaction),
        }
    }

    /// The name result.
    pub fn name(&self) -> &RollResult {
        &self.name
    }

    /// The profile result.
    pub fn profile(&self) -> &RollResult {
        &self.profile
    }

    /// The reaction result.
    pub fn reaction(&self) -> &RollResult {
        &self.reaction
    }
}

impl Variant for DetailedNpc {
    const KIND: &'static str = "detailed_npc";
    type Extra = DetailedNpcExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> DetailedNpcExtra {
        DetailedNpcExtra {
            name: Some(self.name.encode()),
            profile: Some(self.profile.encode()),
            reaction: Some(self.reaction.encode()),
        }
    }

    fn from_parts(header: RollHeader, extra: DetailedNpcExtra, registry: &Registry) -> Self {
        let name = registry.decode_embedded(extra.name, NpcName::KIND);
        let profile = registry.decode_embedded(extra.profile, NpcProfile::KIND);
        let reaction = registry.decode_embedded(extra.reaction, NpcReaction::KIND);
        let summary = Composition::new()
            .embed_all([&name, &profile, &reaction])
            .interpretation(SUMMARY_SEPARATOR);
        Self {
            header: header.reinterpret(summary),
            name: Box::new(name),
            profile: Box::new(profile),
            reaction: Box::new(reaction),
        }
    }

    fn embedded(&self) -> Vec<&RollResult> {
        vec![&*self.name, &*self.profile, &*self.reaction]
    }
}
