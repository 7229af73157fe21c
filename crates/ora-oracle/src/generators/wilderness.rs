//! Weather and wilderness encounters.

use ora_core::variants::{Environment, Season, Weather, WildernessEncounter};
use ora_dice::RollSource;

use crate::error::OracleResult;
use crate::tables::{lookup, wilderness_creatures};

/// 2d6 plus the season's modifier.
pub fn weather(source: &mut RollSource, season: Season) -> OracleResult<Weather> {
    let first = source.roll_die(6)?;
    let second = source.roll_die(6)?;
    Ok(Weather::new(first, second, season))
}

/// A creature of the environment (d10) and its distance (d6).
pub fn wilderness_encounter(
    source: &mut RollSource,
    environment: Environment,
) -> OracleResult<WildernessEncounter> {
    let creature = source.roll_die(10)?;
    let distance = source.roll_die(6)?;
    Ok(WildernessEncounter::new(
        creature,
        distance,
        environment,
        lookup(wilderness_creatures(environment), creature),
    ))
}
