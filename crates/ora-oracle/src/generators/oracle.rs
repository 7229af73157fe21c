//! Yes/no questions, random events and scene checks.

use ora_core::is_doubles;
use ora_core::variants::{
    DiscoverMeaning, ExpectationCheck, FateCheck, Likelihood, RandomEvent, SceneAdjustment,
    SceneCheck, SceneStatus,
};
use ora_dice::RollSource;

use crate::chaos::ChaosFactor;
use crate::error::OracleResult;
use crate::tables::{
    ACTION_WORDS, MEANING_ADJECTIVES, MEANING_NOUNS, SCENE_ADJUSTMENTS, SUBJECT_WORDS, lookup,
};

/// Ask the oracle a yes/no question on 2d6.
///
/// Doubles trigger a random event, drawn after the two dice and attached to
/// the answer.
pub fn fate_check(
    source: &mut RollSource,
    likelihood: Likelihood,
    question: Option<&str>,
) -> OracleResult<FateCheck> {
    let first = source.roll_die(6)?;
    let second = source.roll_die(6)?;
    let event = if is_doubles(&[first, second]) {
        tracing::debug!(first, second, "doubles, drawing a random event");
        Some(random_event(source)?.into())
    } else {
        None
    };
    Ok(FateCheck::new(
        first,
        second,
        likelihood,
        question.map(str::to_string),
        event,
    ))
}

/// Roll 2dF against what the player expects.
pub fn expectation_check(source: &mut RollSource) -> OracleResult<ExpectationCheck> {
    let first = source.roll_fate_die()?;
    let second = source.roll_fate_die()?;
    Ok(ExpectationCheck::new(first, second))
}

/// Roll focus, action and subject on three d100s.
pub fn random_event(source: &mut RollSource) -> OracleResult<RandomEvent> {
    let focus = source.roll_die(100)?;
    let action = source.roll_die(100)?;
    let subject = source.roll_die(100)?;
    Ok(RandomEvent::new(
        focus,
        action,
        subject,
        lookup(ACTION_WORDS, action),
        lookup(SUBJECT_WORDS, subject),
    ))
}

/// Pair an adjective and a noun on 2d20.
pub fn discover_meaning(source: &mut RollSource) -> OracleResult<DiscoverMeaning> {
    let adjective = source.roll_die(20)?;
    let noun = source.roll_die(20)?;
    Ok(DiscoverMeaning::new(
        adjective,
        noun,
        lookup(MEANING_ADJECTIVES, adjective),
        lookup(MEANING_NOUNS, noun),
    ))
}

/// Test a new scene against the chaos factor on a d10.
///
/// An altered scene draws an adjustment and an interrupted one a random
/// event; either is attached to the check.
pub fn scene_check(source: &mut RollSource, chaos: ChaosFactor) -> OracleResult<SceneCheck> {
    let roll = source.roll_die(10)?;
    let triggered = match SceneStatus::resolve(roll, chaos.value()) {
        SceneStatus::Expected => None,
        SceneStatus::Altered => {
            tracing::debug!(roll, chaos = chaos.value(), "scene altered");
            Some(scene_adjustment(source)?.into())
        }
        SceneStatus::Interrupted => {
            tracing::debug!(roll, chaos = chaos.value(), "scene interrupted");
            Some(random_event(source)?.into())
        }
    };
    Ok(SceneCheck::new(roll, chaos.value(), triggered))
}

/// How an altered scene changes, on a d10.
pub fn scene_adjustment(source: &mut RollSource) -> OracleResult<SceneAdjustment> {
    let roll = source.roll_die(10)?;
    Ok(SceneAdjustment::new(roll, lookup(SCENE_ADJUSTMENTS, roll)))
}
