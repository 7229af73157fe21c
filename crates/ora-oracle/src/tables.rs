//! Lookup tables for the generators.
//!
//! Every table is indexed by a die face starting at 1. Tables shorter than the
//! die wrap around, so a d10 on a five-row table reads each row twice.

use ora_core::variants::{Environment, ItemCategory};

/// Look up a die face in a table.
///
/// Faces wrap modulo the table length. An empty table yields `""`.
pub fn lookup<'a>(table: &[&'a str], roll: i32) -> &'a str {
    if table.is_empty() {
        return "";
    }
    let len = table.len() as i32;
    table[(roll - 1).rem_euclid(len) as usize]
}

/// Event action words, read with a d100.
#[rustfmt::skip]
pub const ACTION_WORDS: &[&str] = &[
    "Attainment", "Starting", "Neglect", "Fight", "Recruit", "Triumph", "Violate", "Oppose", "Malice", "Communicate",
    "Persecute", "Increase", "Decrease", "Abandon", "Gratify", "Inquire", "Antagonize", "Move", "Waste", "Truce",
    "Release", "Befriend", "Judge", "Desert", "Dominate", "Delay", "Praise", "Separate", "Take", "Break",
    "Heal", "Imitate", "Deceive", "Usurp", "Bestow", "Guide", "Expose", "Disrupt", "Reveal", "Carry",
    "Attract", "Conceal", "Protect", "Renew", "Wander", "Pursue", "Lose", "Hunt", "Promise", "Burden",
    "Plot", "Mourn", "Wound", "Bargain", "Spy", "Rescue", "Trap", "Corrupt", "Warn", "Assist",
    "Inspect", "Summon", "Bind", "Ruin", "Escape", "Honor", "Threaten", "Celebrate", "Steal", "Sacrifice",
    "Forge", "Return", "Open", "Close", "Betray", "Refuse", "Challenge", "Obey", "Transform", "Awaken",
    "Endure", "Hide", "Command", "Haunt", "Mislead", "Shelter", "Seek", "Claim", "Transmit", "Ignore",
    "Demand", "Weaken", "Strengthen", "Trust", "Scatter", "Gather", "Devour", "Depart", "Arrive", "Confront",
];

/// Event subject words, read with a d100.
#[rustfmt::skip]
pub const SUBJECT_WORDS: &[&str] = &[
    "Goals", "Dreams", "Environment", "Outside", "Inside", "Reality", "Allies", "Enemies", "Evil", "Good",
    "Emotions", "Opposition", "War", "Peace", "Innocent", "Love", "Spirit", "Intellect", "Ideas", "Joy",
    "Messages", "Energy", "Balance", "Tension", "Friendship", "Physical", "Project", "Pleasures", "Pain", "Possessions",
    "Benefits", "Plans", "Lies", "Expectations", "Legal", "Bureaucracy", "Business", "Path", "News", "Exterior",
    "Advice", "Plot", "Competition", "Prison", "Illness", "Food", "Attention", "Success", "Failure", "Travel",
    "Jealousy", "Dispute", "Home", "Investment", "Suffering", "Wishes", "Tactics", "Stalemate", "Randomness", "Misfortune",
    "Death", "Disruption", "Power", "Burden", "Intrigues", "Fears", "Ambush", "Rumors", "Wounds", "Extravagance",
    "Representative", "Adversities", "Opulence", "Liberty", "Military", "Mundane", "Trials", "Masses", "Vehicle", "Art",
    "Victory", "Shelter", "Magic", "Oath", "Ruins", "Secrets", "Weather", "Treasure", "Kin", "Faith",
    "Debt", "Borders", "Memory", "Time", "Hunger", "Sickness", "Throne", "Knowledge", "Beast", "Stranger",
];

/// Meaning adjectives, read with a d20.
pub const MEANING_ADJECTIVES: &[&str] = &[
    "Ancient", "Broken", "Cold", "Distant", "Empty", "Forgotten", "Golden", "Hidden", "Hollow",
    "Hungry", "Lonely", "Loud", "Narrow", "Pale", "Quiet", "Rotten", "Sacred", "Shattered",
    "Tangled", "Wild",
];

/// Meaning nouns, read with a d20.
pub const MEANING_NOUNS: &[&str] = &[
    "Altar", "Bridge", "Crown", "Door", "Ember", "Feather", "Gate", "Hearth", "Key", "Lantern",
    "Mirror", "Needle", "Oath", "Path", "River", "Seed", "Tower", "Veil", "Well", "Wound",
];

/// How an altered scene changes, read with a d10.
pub const SCENE_ADJUSTMENTS: &[&str] = &[
    "Remove a character",
    "Add a character",
    "Reduce or remove an activity",
    "Increase an activity",
    "Remove an object",
    "Add an object",
    "Change the location",
    "Change the time",
    "Make two adjustments",
    "Make two adjustments",
];

/// What an NPC does, read with a d10.
pub const NPC_ACTIONS: &[&str] = &[
    "Talks",
    "Acts out of character",
    "Seeks to end the encounter",
    "Gives something",
    "Takes something",
    "Pursues a goal",
    "Reveals a secret",
    "Asks for help",
    "Attacks",
    "Does something unexpected",
];

/// Opening name syllables, read with a d20.
pub const NAME_STARTS: &[&str] = &[
    "Al", "Bel", "Cor", "Dar", "El", "Fen", "Gar", "Hal", "Is", "Jor", "Kel", "Lor", "Mar", "Nor",
    "Or", "Per", "Quen", "Ros", "Sal", "Tor",
];

/// Middle name syllables, read with a d20.
pub const NAME_MIDDLES: &[&str] = &[
    "a", "e", "i", "o", "u", "an", "en", "in", "on", "ar", "er", "ir", "or", "al", "el", "il",
    "ol", "ath", "eth", "ith",
];

/// Closing name syllables, read with a d20.
pub const NAME_ENDS: &[&str] = &[
    "d", "n", "s", "th", "ra", "ric", "wyn", "mir", "dor", "las", "ria", "mon", "bert", "wen",
    "gar", "lin", "ven", "rick", "na", "sa",
];

/// Personality traits, read with a d10.
pub const PERSONALITIES: &[&str] = &[
    "Cheerful", "Suspicious", "Curious", "Stern", "Generous", "Nervous", "Proud", "Gentle",
    "Reckless", "Cunning",
];

/// NPC needs, read with a d10.
pub const NEEDS: &[&str] = &[
    "money", "safety", "revenge", "knowledge", "love", "freedom", "respect", "a cure", "a home",
    "forgiveness",
];

/// NPC motives, read with a d10.
pub const MOTIVES: &[&str] = &[
    "duty", "greed", "fear", "faith", "ambition", "loyalty", "guilt", "curiosity", "pride",
    "desperation",
];

/// Settlement name prefixes, read with a d10.
pub const SETTLEMENT_PREFIXES: &[&str] = &[
    "Ash", "Black", "Cold", "Deep", "Elm", "Green", "High", "Iron", "Oak", "Stone",
];

/// Settlement name suffixes, read with a d10.
pub const SETTLEMENT_SUFFIXES: &[&str] = &[
    "ford", "haven", "hollow", "moor", "stead", "vale", "wick", "bridge", "field", "gate",
];

/// Establishments with their draw weights.
pub const ESTABLISHMENTS: &[(u32, &str)] = &[
    (6, "Tavern"),
    (5, "Market"),
    (4, "Smithy"),
    (4, "Inn"),
    (3, "Temple"),
    (3, "Stables"),
    (2, "Apothecary"),
    (2, "Guard post"),
    (1, "Library"),
    (1, "Mage tower"),
];

/// Dungeon rooms, read with a d10.
pub const DUNGEON_ROOMS: &[&str] = &[
    "Corridor", "Guard room", "Storeroom", "Shrine", "Crypt", "Barracks", "Cell block", "Library",
    "Throne room", "Cavern",
];

/// Dungeon room features, read with a d10.
pub const ROOM_FEATURES: &[&str] = &[
    "a collapsed ceiling",
    "a pool of still water",
    "a locked chest",
    "a strange statue",
    "scattered bones",
    "a hidden passage",
    "a burning brazier",
    "a deep pit",
    "ancient murals",
    "nothing at all",
];

/// Traps, read with a d10.
pub const TRAPS: &[&str] = &[
    "Pit", "Dart", "Poison needle", "Falling block", "Scything blade", "Net", "Gas vent",
    "Flooding room", "Fire jet", "Collapsing floor",
];

/// Trap triggers, read with a d6.
pub const TRAP_TRIGGERS: &[&str] = &[
    "pressure plate",
    "tripwire",
    "opened door",
    "lifted object",
    "spoken word",
    "magic ward",
];

/// Dungeon creatures, read with a d10.
pub const DUNGEON_CREATURES: &[&str] = &[
    "Giant rats", "Goblins", "Skeletons", "Cultists", "Slime", "Orcs", "Ghoul", "Ogre",
    "Wraith", "Young dragon",
];

/// Dungeon dressing, read with a d10.
pub const DUNGEON_DRESSING: &[&str] = &[
    "cobwebs", "dripping water", "rusted chains", "old campfire", "claw marks", "torn banner",
    "broken weapons", "strange symbols", "rotting furniture", "piles of rubble",
];

/// Items by category, read with a d10 inside the category.
#[rustfmt::skip]
const ITEMS: [&[&str]; 10] = [
    &["Dagger", "Longsword", "Axe", "Spear", "Bow"],
    &["Helm", "Shield", "Gauntlets", "Chain shirt", "Breastplate"],
    &["Rope", "Lockpicks", "Hammer", "Lantern", "Compass"],
    &["Cloak", "Boots", "Gloves", "Hat", "Belt"],
    &["Ring", "Amulet", "Brooch", "Circlet", "Earring"],
    &["Grimoire", "Journal", "Map", "Ledger", "Prayer book"],
    &["Healing draught", "Elixir", "Tonic", "Poison", "Philter"],
    &["Lute", "Flute", "Drum", "Horn", "Harp"],
    &["Carved figurine", "Dice", "Locket", "Music box", "Pocket watch"],
    &["Idol", "Crown", "Chalice", "Sceptre", "Orb"],
];

/// Items of a category.
pub fn items(category: ItemCategory) -> &'static [&'static str] {
    ITEMS[category.index()]
}

/// Item properties, read with a d10.
pub const ITEM_PROPERTIES: &[&str] = &[
    "Glowing", "Whispering", "Warm", "Cold", "Heavy", "Weightless", "Cursed", "Blessed",
    "Bloodthirsty", "Silent",
];

/// Item colors, read with a d10.
pub const ITEM_COLORS: &[&str] = &[
    "Crimson", "Azure", "Emerald", "Gold", "Silver", "Black", "Ivory", "Violet", "Amber", "Teal",
];

#[rustfmt::skip]
const WILDERNESS_CREATURES: [&[&str]; 7] = [
    &["Wolves", "Bear", "Wild boar", "Dryad", "Bandits"],
    &["Goats", "Eagle", "Troll", "Giant", "Rockslide"],
    &["Horses", "Nomads", "Lion", "Centaurs", "Merchant caravan"],
    &["Crocodile", "Leeches", "Will-o'-wisp", "Hag", "Bog zombies"],
    &["Scorpion", "Vultures", "Sand worm", "Mummy", "Raiders"],
    &["Crabs", "Smugglers", "Sea serpent", "Harpies", "Shipwreck survivors"],
    &["Polar bear", "Frost wolves", "Yeti", "Ice spirit", "Hunters"],
];

/// Creatures met in an environment, read with a d10.
pub fn wilderness_creatures(environment: Environment) -> &'static [&'static str] {
    WILDERNESS_CREATURES[environment.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_tables_have_100_entries() {
        assert_eq!(ACTION_WORDS.len(), 100);
        assert_eq!(SUBJECT_WORDS.len(), 100);
    }

    #[test]
    fn tables_match_their_dice() {
        assert_eq!(MEANING_ADJECTIVES.len(), 20);
        assert_eq!(MEANING_NOUNS.len(), 20);
        assert_eq!(NAME_STARTS.len(), 20);
        assert_eq!(NAME_MIDDLES.len(), 20);
        assert_eq!(NAME_ENDS.len(), 20);
        assert_eq!(TRAP_TRIGGERS.len(), 6);
        for table in [SCENE_ADJUSTMENTS, NPC_ACTIONS, PERSONALITIES, NEEDS, MOTIVES, TRAPS] {
            assert_eq!(table.len(), 10);
        }
    }

    #[test]
    fn lookup_is_one_based_and_wraps() {
        assert_eq!(lookup(TRAP_TRIGGERS, 1), "pressure plate");
        assert_eq!(lookup(TRAP_TRIGGERS, 6), "magic ward");
        assert_eq!(lookup(TRAP_TRIGGERS, 7), "pressure plate");
        assert_eq!(lookup(TRAP_TRIGGERS, 0), "magic ward");
        assert_eq!(lookup(&[], 3), "");
    }

    #[test]
    fn every_category_and_environment_has_entries() {
        for roll in 1..=10 {
            assert!(!items(ItemCategory::from_roll(roll)).is_empty());
        }
        for env in Environment::all() {
            assert!(!wilderness_creatures(*env).is_empty());
        }
    }
}
