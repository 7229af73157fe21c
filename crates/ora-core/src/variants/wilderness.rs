//! Weather and wilderness encounters.

use serde::{Deserialize, Serialize};

use super::{die_at, keep_or_fill};
use crate::registry::Registry;
use crate::roll::{RollCategory, RollHeader, Variant};

/// Season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// No modifier.
    #[default]
    Spring,
    /// +1 to the weather roll.
    Summer,
    /// -1 to the weather roll.
    Autumn,
    /// -2 to the weather roll.
    Winter,
}

impl Season {
    /// Parse a season label. "fall" is accepted for autumn.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    /// All seasons.
    pub fn all() -> &'static [Self] {
        &[Self::Spring, Self::Summer, Self::Autumn, Self::Winter]
    }

    /// Modifier added to the 2d6 weather roll.
    pub fn modifier(self) -> i32 {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Autumn => -1,
            Self::Winter => -2,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Autumn => write!(f, "Autumn"),
            Self::Winter => write!(f, "Winter"),
        }
    }
}

/// Coarse weather band from the modified 2d6 total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// 3 or less.
    Storm,
    /// 4-5.
    HeavyPrecipitation,
    /// 6-7.
    Overcast,
    /// 8-9.
    Fair,
    /// 10-11.
    Clear,
    /// 12 or more.
    Extreme,
}

impl WeatherCondition {
    /// Map a modified total to a condition.
    pub fn from_total(total: i32) -> Self {
        match total {
            ..=3 => Self::Storm,
            4..=5 => Self::HeavyPrecipitation,
            6..=7 => Self::Overcast,
            8..=9 => Self::Fair,
            10..=11 => Self::Clear,
            _ => Self::Extreme,
        }
    }

    /// Season-specific wording.
    pub fn describe(self, season: Season) -> &'static str {
        match (self, season) {
            (Self::Storm, Season::Winter) => "Blizzard",
            (Self::Storm, _) => "Thunderstorm",
            (Self::HeavyPrecipitation, Season::Winter) => "Heavy snow",
            (Self::HeavyPrecipitation, _) => "Heavy rain",
            (Self::Overcast, Season::Winter) => "Grey and freezing",
            (Self::Overcast, _) => "Overcast",
            (Self::Fair, _) => "Fair",
            (Self::Clear, Season::Summer) => "Clear and hot",
            (Self::Clear, Season::Winter) => "Clear and cold",
            (Self::Clear, _) => "Clear skies",
            (Self::Extreme, Season::Summer) => "Heatwave",
            (Self::Extreme, Season::Winter) => "Bitter cold",
            (Self::Extreme, Season::Spring) => "Flash floods",
            (Self::Extreme, Season::Autumn) => "Gale",
        }
    }
}

/// Weather for a season, from 2d6 plus the season modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Weather {
    header: RollHeader,
    season: Season,
    condition: WeatherCondition,
}

/// `extra` payload of [`Weather`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherExtra {
    season: Season,
    condition: Option<WeatherCondition>,
}

impl Weather {
    /// Build from the two dice and the season.
    pub fn new(first: i32, second: i32, season: Season) -> Self {
        let condition = WeatherCondition::from_total(first + second + season.modifier());
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Weather",
                vec![first, second],
                Some(condition.describe(season).to_string()),
            ),
            season,
            condition,
        }
    }

    /// The season.
    pub fn season(&self) -> Season {
        self.season
    }

    /// The weather band.
    pub fn condition(&self) -> WeatherCondition {
        self.condition
    }

    /// Dice total plus the season modifier.
    pub fn modified_total(&self) -> i32 {
        self.header.raw_total().saturating_add(self.season.modifier())
    }
}

impl Variant for Weather {
    const KIND: &'static str = "weather";
    type Extra = WeatherExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> WeatherExtra {
        WeatherExtra {
            season: self.season,
            condition: Some(self.condition),
        }
    }

    fn from_parts(header: RollHeader, extra: WeatherExtra, _: &Registry) -> Self {
        let season = extra.season;
        let condition = extra.condition.unwrap_or_else(|| {
            WeatherCondition::from_total(header.raw_total().saturating_add(season.modifier()))
        });
        let header = keep_or_fill(header, || Some(condition.describe(season).to_string()));
        Self {
            header,
            season,
            condition,
        }
    }
}

/// Terrain a wilderness encounter happens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Woodland.
    #[default]
    Forest,
    /// High ground.
    Mountains,
    /// Open grassland.
    Plains,
    /// Wetland.
    Swamp,
    /// Sand and rock.
    Desert,
    /// Shoreline.
    Coast,
    /// Frozen waste.
    Tundra,
}

impl Environment {
    /// Parse an environment label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "forest" | "woods" => Some(Self::Forest),
            "mountains" | "mountain" => Some(Self::Mountains),
            "plains" | "grassland" => Some(Self::Plains),
            "swamp" | "marsh" => Some(Self::Swamp),
            "desert" => Some(Self::Desert),
            "coast" | "shore" => Some(Self::Coast),
            "tundra" => Some(Self::Tundra),
            _ => None,
        }
    }

    /// All environments.
    pub fn all() -> &'static [Self] {
        &[
            Self::Forest,
            Self::Mountains,
            Self::Plains,
            Self::Swamp,
            Self::Desert,
            Self::Coast,
            Self::Tundra,
        ]
    }

    /// Position in [`Environment::all`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forest => write!(f, "Forest"),
            Self::Mountains => write!(f, "Mountains"),
            Self::Plains => write!(f, "Plains"),
            Self::Swamp => write!(f, "Swamp"),
            Self::Desert => write!(f, "Desert"),
            Self::Coast => write!(f, "Coast"),
            Self::Tundra => write!(f, "Tundra"),
        }
    }
}

/// How far off an encounter starts, from a d6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// 1-2.
    Close,
    /// 3-4.
    Near,
    /// 5-6.
    Far,
}

impl Distance {
    /// Map a d6 face to a distance.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=2 => Self::Close,
            3..=4 => Self::Near,
            _ => Self::Far,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Close => write!(f, "close"),
            Self::Near => write!(f, "near"),
            Self::Far => write!(f, "far"),
        }
    }
}

/// A creature met while travelling: a d10 creature and a d6 distance.
#[derive(Debug, Clone, PartialEq)]
pub struct WildernessEncounter {
    header: RollHeader,
    environment: Environment,
    creature: String,
    distance: Distance,
}

/// `extra` payload of [`WildernessEncounter`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WildernessEncounterExtra {
    environment: Environment,
    creature: String,
    distance: Option<Distance>,
}

impl WildernessEncounter {
    /// Build from the two rolls, the environment and the looked-up creature.
    pub fn new(
        creature_roll: i32,
        distance_roll: i32,
        environment: Environment,
        creature: impl Into<String>,
    ) -> Self {
        let creature = creature.into();
        let distance = Distance::from_roll(distance_roll);
        Self {
            header: RollHeader::new(
                RollCategory::Standard,
                "Wilderness Encounter",
                vec![creature_roll, distance_roll],
                Some(format!("{creature} ({distance})")),
            ),
            environment,
            creature,
            distance,
        }
    }

    /// Where it happens.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// What is met.
    pub fn creature(&self) -> &str {
        &self.creature
    }

    /// How far off it starts.
    pub fn distance(&self) -> Distance {
        self.distance
    }
}

impl Variant for WildernessEncounter {
    const KIND: &'static str = "wilderness_encounter";
    type Extra = WildernessEncounterExtra;

    fn header(&self) -> &RollHeader {
        &self.header
    }

    fn to_extra(&self) -> WildernessEncounterExtra {
        WildernessEncounterExtra {
            environment: self.environment,
            creature: self.creature.clone(),
            distance: Some(self.distance),
        }
    }

    fn from_parts(header: RollHeader, extra: WildernessEncounterExtra, _: &Registry) -> Self {
        let distance = extra
            .distance
            .unwrap_or_else(|| Distance::from_roll(die_at(&header, 1)));
        let header = keep_or_fill(header, || Some(format!("{} ({distance})", extra.creature)));
        Self {
            header,
            environment: extra.environment,
            creature: extra.creature,
            distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_parse_accepts_fall() {
        assert_eq!(Season::parse("Fall"), Some(Season::Autumn));
        assert_eq!(Season::parse("monsoon"), None);
    }

    #[test]
    fn winter_shifts_weather_down() {
        let spring = Weather::new(2, 3, Season::Spring);
        let winter = Weather::new(2, 3, Season::Winter);
        assert_eq!(spring.condition(), WeatherCondition::HeavyPrecipitation);
        assert_eq!(winter.condition(), WeatherCondition::Storm);
        assert_eq!(winter.header().interpretation(), Some("Blizzard"));
        assert_eq!(spring.header().raw_total(), winter.header().raw_total());
        assert_eq!(winter.modified_total(), 3);
    }

    #[test]
    fn summer_extreme_is_heatwave() {
        let w = Weather::new(6, 6, Season::Summer);
        assert_eq!(w.condition(), WeatherCondition::Extreme);
        assert_eq!(w.header().interpretation(), Some("Heatwave"));
    }

    #[test]
    fn encounter_distance_bands() {
        assert_eq!(Distance::from_roll(1), Distance::Close);
        assert_eq!(Distance::from_roll(4), Distance::Near);
        assert_eq!(Distance::from_roll(6), Distance::Far);
        let e = WildernessEncounter::new(3, 5, Environment::Swamp, "Bog hag");
        assert_eq!(e.header().interpretation(), Some("Bog hag (far)"));
    }

    #[test]
    fn environment_index_matches_all() {
        for (i, env) in Environment::all().iter().enumerate() {
            assert_eq!(env.index(), i);
            assert_eq!(Environment::parse(&env.to_string()), Some(*env));
        }
    }
}
