//! Named generators and their string parameters.
//!
//! The command line refers to generators by kind and passes parameters as
//! `key=value` pairs; [`Generator::invoke`] validates them and runs the
//! matching function from [`generators`](crate::generators).

use std::collections::BTreeMap;

use ora_core::RollResult;
use ora_core::variants::{Environment, Likelihood, Season, SettlementSize};
use ora_dice::RollSource;

use crate::chaos::ChaosFactor;
use crate::error::{OracleError, OracleResult};
use crate::generators;

/// Parse a likelihood label.
pub fn parse_likelihood(s: &str) -> OracleResult<Likelihood> {
    Likelihood::parse(s).ok_or_else(|| OracleError::InvalidLikelihood(s.to_string()))
}

/// Parse a season label.
pub fn parse_season(s: &str) -> OracleResult<Season> {
    Season::parse(s).ok_or_else(|| {
        OracleError::InvalidParameter(format!(
            "unknown season '{s}', use: spring, summer, autumn, winter"
        ))
    })
}

/// Parse an environment label.
pub fn parse_environment(s: &str) -> OracleResult<Environment> {
    Environment::parse(s).ok_or_else(|| {
        let names: Vec<String> = Environment::all()
            .iter()
            .map(|e| e.to_string().to_lowercase())
            .collect();
        OracleError::InvalidParameter(format!(
            "unknown environment '{s}', use: {}",
            names.join(", ")
        ))
    })
}

/// Parse a settlement size label.
pub fn parse_size(s: &str) -> OracleResult<SettlementSize> {
    SettlementSize::parse(s).ok_or_else(|| {
        OracleError::InvalidParameter(format!(
            "unknown settlement size '{s}', use: hamlet, village, town, city"
        ))
    })
}

/// Parse a danger level. Range checking happens in the generator.
pub fn parse_danger_level(s: &str) -> OracleResult<u8> {
    let level: i64 = s
        .trim()
        .parse()
        .map_err(|_| OracleError::InvalidParameter(format!("danger level '{s}' is not a number")))?;
    u8::try_from(level).map_err(|_| OracleError::InvalidDangerLevel(level))
}

/// Parse a treasure tier. Range checking happens in the generator.
pub fn parse_tier(s: &str) -> OracleResult<u8> {
    s.trim()
        .parse()
        .map_err(|_| OracleError::InvalidParameter(format!("treasure tier '{s}', expected 1-4")))
}

/// `key=value` parameters for a generator.
///
/// Unset keys fall back to a default per parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorParams {
    values: BTreeMap<String, String>,
}

impl GeneratorParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` strings.
    pub fn from_pairs<I, S>(pairs: I) -> OracleResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                OracleError::InvalidParameter(format!("expected key=value, got '{pair}'"))
            })?;
            params = params.with(key.trim(), value.trim());
        }
        Ok(params)
    }

    /// Set a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into().to_lowercase(), value.into());
        self
    }

    /// Raw value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// `likelihood`, default even.
    pub fn likelihood(&self) -> OracleResult<Likelihood> {
        self.get("likelihood")
            .map_or(Ok(Likelihood::Even), parse_likelihood)
    }

    /// `question`, if any.
    pub fn question(&self) -> Option<&str> {
        self.get("question")
    }

    /// `npc`, if any.
    pub fn npc(&self) -> Option<&str> {
        self.get("npc")
    }

    /// `chaos`, default 5. Clamped to 1-9.
    pub fn chaos(&self) -> OracleResult<ChaosFactor> {
        match self.get("chaos") {
            None => Ok(ChaosFactor::default()),
            Some(s) => s.trim().parse().map(ChaosFactor::new).map_err(|_| {
                OracleError::InvalidParameter(format!("chaos '{s}' is not a number"))
            }),
        }
    }

    /// `level`, default 1.
    pub fn danger_level(&self) -> OracleResult<u8> {
        self.get("level").map_or(Ok(1), parse_danger_level)
    }

    /// `season`, default spring.
    pub fn season(&self) -> OracleResult<Season> {
        self.get("season").map_or(Ok(Season::default()), parse_season)
    }

    /// `environment` (or `env`), default forest.
    pub fn environment(&self) -> OracleResult<Environment> {
        self.get("environment")
            .or_else(|| self.get("env"))
            .map_or(Ok(Environment::default()), parse_environment)
    }

    /// `size`, default village.
    pub fn size(&self) -> OracleResult<SettlementSize> {
        self.get("size").map_or(Ok(SettlementSize::default()), parse_size)
    }

    /// `tier`, default 1.
    pub fn tier(&self) -> OracleResult<u8> {
        self.get("tier").map_or(Ok(1), parse_tier)
    }

    /// `expr`, default `2d6`.
    pub fn expression(&self) -> &str {
        self.get("expr").unwrap_or("2d6")
    }

    /// `count` of fate dice, default 4.
    pub fn count(&self) -> OracleResult<u32> {
        match self.get("count") {
            None => Ok(4),
            Some(s) => s.trim().parse().map_err(|_| {
                OracleError::InvalidParameter(format!("count '{s}' is not a number"))
            }),
        }
    }

    /// `color`, default yes.
    pub fn colored(&self) -> OracleResult<bool> {
        match self.get("color").map(str::to_lowercase).as_deref() {
            None | Some("yes" | "true" | "on") => Ok(true),
            Some("no" | "false" | "off") => Ok(false),
            Some(other) => Err(OracleError::InvalidParameter(format!(
                "color '{other}', use yes or no"
            ))),
        }
    }
}

macro_rules! generator_table {
    ($($variant:ident => $kind:literal, $about:literal;)*) => {
        /// Every generator, named by the kind it produces.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Generator {
            $(
                #[doc = $about]
                $variant,
            )*
        }

        impl Generator {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The kind of result this generator produces.
            pub fn kind(self) -> &'static str {
                match self {
                    $(Self::$variant => $kind,)*
                }
            }

            /// One-line description.
            pub fn about(self) -> &'static str {
                match self {
                    $(Self::$variant => $about,)*
                }
            }
        }
    };
}

generator_table! {
    FateCheck => "fate_check", "Yes/no question on 2d6. Params: likelihood, question";
    ExpectationCheck => "expectation_check", "Test an expectation on 2dF";
    RandomEvent => "random_event", "Event focus, action and subject on 3d100";
    DiscoverMeaning => "discover_meaning", "Adjective and noun on 2d20";
    SceneCheck => "scene_check", "Test a scene against chaos on a d10. Params: chaos";
    SceneAdjustment => "scene_adjustment", "How an altered scene changes, on a d10";
    NpcReaction => "npc_reaction", "NPC disposition on 2d10. Params: npc";
    NpcAction => "npc_action", "What an NPC does and how hard";
    NpcName => "npc_name", "A name from three d20 syllables";
    NpcProfile => "npc_profile", "Personality, need and motive on 3d10";
    DetailedNpc => "detailed_npc", "Name, profile and reaction";
    SettlementName => "settlement_name", "A settlement name on 2d10";
    Establishment => "establishment", "One weighted establishment";
    Settlement => "settlement", "A named settlement. Params: size";
    DungeonRoom => "dungeon_room", "A room and its feature on 2d10";
    DungeonTrap => "dungeon_trap", "A trap and its trigger";
    DungeonEncounter => "dungeon_encounter", "Threat and creature. Params: level";
    DungeonDetail => "dungeon_detail", "Room condition and dressing";
    ItemBase => "item_base", "Item category and item on 2d10";
    ItemProperty => "item_property", "An item property and its intensity";
    ItemColor => "item_color", "An item color on a d10";
    ItemCreation => "item_creation", "A complete item. Params: color";
    Coins => "coins", "Coins by tier. Params: tier";
    TreasureHoard => "treasure_hoard", "Coins and maybe an item. Params: tier";
    Weather => "weather", "Weather on 2d6. Params: season";
    WildernessEncounter => "wilderness_encounter", "A creature and its distance. Params: environment";
    DiceRoll => "dice_roll", "Roll NdM dice. Params: expr";
    FateDice => "fate_dice", "Roll NdF dice. Params: count";
}

impl Generator {
    /// Every generator, in table order.
    pub fn all() -> &'static [Self] {
        Self::ALL
    }

    /// Look up a generator by kind. Hyphens and case are ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL.iter().copied().find(|g| g.kind() == wanted)
    }

    /// Run the generator.
    pub fn invoke(
        self,
        source: &mut RollSource,
        params: &GeneratorParams,
    ) -> OracleResult<RollResult> {
        tracing::debug!(generator = self.kind(), "invoking generator");
        let result: RollResult = match self {
            Self::FateCheck => {
                generators::fate_check(source, params.likelihood()?, params.question())?.into()
            }
            Self::ExpectationCheck => generators::expectation_check(source)?.into(),
            Self::RandomEvent => generators::random_event(source)?.into(),
            Self::DiscoverMeaning => generators::discover_meaning(source)?.into(),
            Self::SceneCheck => generators::scene_check(source, params.chaos()?)?.into(),
            Self::SceneAdjustment => generators::scene_adjustment(source)?.into(),
            Self::NpcReaction => generators::npc_reaction(source, params.npc())?.into(),
            Self::NpcAction => generators::npc_action(source)?.into(),
            Self::NpcName => generators::npc_name(source)?.into(),
            Self::NpcProfile => generators::npc_profile(source)?.into(),
            Self::DetailedNpc => generators::detailed_npc(source)?.into(),
            Self::SettlementName => generators::settlement_name(source)?.into(),
            Self::Establishment => generators::establishment(source)?.into(),
            Self::Settlement => generators::settlement(source, params.size()?)?.into(),
            Self::DungeonRoom => generators::dungeon_room(source)?.into(),
            Self::DungeonTrap => generators::dungeon_trap(source)?.into(),
            Self::DungeonEncounter => {
                generators::dungeon_encounter(source, params.danger_level()?)?.into()
            }
            Self::DungeonDetail => generators::dungeon_detail(source)?.into(),
            Self::ItemBase => generators::item_base(source)?.into(),
            Self::ItemProperty => generators::item_property(source)?.into(),
            Self::ItemColor => generators::item_color(source)?.into(),
            Self::ItemCreation => generators::item_creation(source, params.colored()?)?.into(),
            Self::Coins => generators::coins(source, params.tier()?)?.into(),
            Self::TreasureHoard => generators::treasure_hoard(source, params.tier()?)?.into(),
            Self::Weather => generators::weather(source, params.season()?)?.into(),
            Self::WildernessEncounter => {
                generators::wilderness_encounter(source, params.environment()?)?.into()
            }
            Self::DiceRoll => generators::dice_roll(source, params.expression())?.into(),
            Self::FateDice => generators::fate_dice(source, params.count()?)?.into(),
        };
        Ok(result)
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ora_core::BUILTIN_KINDS;

    #[test]
    fn one_generator_per_builtin_kind() {
        assert_eq!(Generator::all().len(), BUILTIN_KINDS.len());
        for kind in BUILTIN_KINDS {
            assert!(Generator::parse(kind).is_some(), "no generator for {kind}");
        }
    }

    #[test]
    fn parse_ignores_case_and_hyphens() {
        assert_eq!(Generator::parse("Fate-Check"), Some(Generator::FateCheck));
        assert_eq!(Generator::parse("nope"), None);
    }

    #[test]
    fn invoke_produces_its_kind() {
        let mut source = RollSource::seeded(42);
        let params = GeneratorParams::new();
        for generator in Generator::all() {
            let result = generator.invoke(&mut source, &params).unwrap();
            assert_eq!(result.kind(), generator.kind());
        }
    }

    #[test]
    fn pairs_parse() {
        let params = GeneratorParams::from_pairs(["tier=3", "Season = winter"]).unwrap();
        assert_eq!(params.tier().unwrap(), 3);
        assert_eq!(params.season().unwrap(), Season::Winter);
        assert!(GeneratorParams::from_pairs(["tier"]).is_err());
    }

    #[test]
    fn invalid_params_are_reported() {
        let mut source = RollSource::seeded(1);
        let bad = |k: &str, v: &str| GeneratorParams::new().with(k, v);
        assert!(matches!(
            Generator::FateCheck.invoke(&mut source, &bad("likelihood", "maybe")),
            Err(OracleError::InvalidLikelihood(_))
        ));
        assert!(matches!(
            Generator::DungeonEncounter.invoke(&mut source, &bad("level", "9")),
            Err(OracleError::InvalidDangerLevel(9))
        ));
        assert!(matches!(
            Generator::DungeonEncounter.invoke(&mut source, &bad("level", "-1")),
            Err(OracleError::InvalidDangerLevel(-1))
        ));
        assert!(matches!(
            Generator::Weather.invoke(&mut source, &bad("season", "monsoon")),
            Err(OracleError::InvalidParameter(_))
        ));
        assert!(matches!(
            Generator::WildernessEncounter.invoke(&mut source, &bad("env", "moon")),
            Err(OracleError::InvalidParameter(_))
        ));
        assert!(matches!(
            Generator::Settlement.invoke(&mut source, &bad("size", "metropolis")),
            Err(OracleError::InvalidParameter(_))
        ));
        assert!(matches!(
            Generator::Coins.invoke(&mut source, &bad("tier", "7")),
            Err(OracleError::InvalidParameter(_))
        ));
    }

    #[test]
    fn defaults() {
        let params = GeneratorParams::new();
        assert_eq!(params.likelihood().unwrap(), Likelihood::Even);
        assert_eq!(params.chaos().unwrap().value(), 5);
        assert_eq!(params.danger_level().unwrap(), 1);
        assert_eq!(params.tier().unwrap(), 1);
        assert_eq!(params.expression(), "2d6");
        assert!(params.colored().unwrap());
    }
}
