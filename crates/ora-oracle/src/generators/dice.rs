//! Freeform dice.

use ora_core::RollResult;
use ora_core::variants::{DiceRoll, FateDice};
use ora_dice::{DiceExpr, RollSource};

use crate::error::OracleResult;

/// Roll an `NdM` expression.
pub fn dice_roll(source: &mut RollSource, expression: &str) -> OracleResult<DiceRoll> {
    let expr = DiceExpr::parse(expression)?;
    let dice = expr.roll(source)?;
    Ok(DiceRoll::new(expr.to_string(), dice))
}

/// Roll `count` fate dice.
pub fn fate_dice(source: &mut RollSource, count: u32) -> OracleResult<FateDice> {
    Ok(FateDice::new(source.roll_fate_dice(count)?))
}

/// Roll any notation. Fate dice come back as [`FateDice`], the rest as
/// [`DiceRoll`].
pub fn roll_notation(source: &mut RollSource, expression: &str) -> OracleResult<RollResult> {
    let expr = DiceExpr::parse(expression)?;
    if expr.die.is_fate() {
        return Ok(fate_dice(source, expr.count)?.into());
    }
    let dice = expr.roll(source)?;
    Ok(DiceRoll::new(expr.to_string(), dice).into())
}
