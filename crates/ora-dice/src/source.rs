//! The deterministic roll source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};

/// The outcome of a weighted pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedPick {
    /// Index of the chosen row.
    pub index: usize,
    /// The 1-based draw against the total weight, recordable as a die value.
    pub draw: i32,
}

/// A seedable source of dice.
///
/// Every draw advances the internal RNG cursor, so a source must be owned by
/// exactly one session at a time. Two sources built from the same seed and
/// driven through the same sequence of calls produce identical values.
#[derive(Debug)]
pub struct RollSource {
    rng: StdRng,
    seed: Option<u64>,
    draws: u64,
}

impl RollSource {
    /// Create a reproducible source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            draws: 0,
        }
    }

    /// Create a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
            draws: 0,
        }
    }

    /// The seed this source was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of primitive draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Roll one die with `sides` faces, returning a value in `[1, sides]`.
    pub fn roll_die(&mut self, sides: u32) -> DiceResult<i32> {
        if sides == 0 || sides > i32::MAX as u32 {
            return Err(DiceError::InvalidSides(sides));
        }
        self.draws += 1;
        let value: u32 = self.rng.random_range(1..=sides);
        Ok(value as i32)
    }

    /// Roll `count` dice with `sides` faces, in call order.
    pub fn roll_dice(&mut self, count: u32, sides: u32) -> DiceResult<Vec<i32>> {
        if sides == 0 || sides > i32::MAX as u32 {
            return Err(DiceError::InvalidSides(sides));
        }
        (0..count).map(|_| self.roll_die(sides)).collect()
    }

    /// Roll one fate die: -1, 0 or +1 with equal probability.
    pub fn roll_fate_die(&mut self) -> DiceResult<i32> {
        Ok(self.roll_die(3)? - 2)
    }

    /// Roll `count` fate dice, in call order.
    pub fn roll_fate_dice(&mut self, count: u32) -> DiceResult<Vec<i32>> {
        (0..count).map(|_| self.roll_fate_die()).collect()
    }

    /// Roll a single die of the given type.
    pub fn roll(&mut self, die: Die) -> DiceResult<i32> {
        if die.is_fate() {
            self.roll_fate_die()
        } else {
            self.roll_die(die.sides())
        }
    }

    /// Pick an index in `[0, n)` uniformly.
    pub fn pick_uniform(&mut self, n: usize) -> DiceResult<usize> {
        if n == 0 {
            return Err(DiceError::EmptyRange);
        }
        self.draws += 1;
        Ok(self.rng.random_range(0..n))
    }

    /// Pick an index with probability `weights[i] / sum(weights)`.
    pub fn pick_weighted(&mut self, weights: &[u32]) -> DiceResult<usize> {
        self.roll_weighted(weights).map(|pick| pick.index)
    }

    /// Pick an index by weight and report the draw that selected it.
    ///
    /// One uniform draw in `[0, sum)` is compared against the running
    /// cumulative sum; the first row whose cumulative weight exceeds the
    /// draw wins.
    pub fn roll_weighted(&mut self, weights: &[u32]) -> DiceResult<WeightedPick> {
        if weights.is_empty() {
            return Err(DiceError::EmptyTable);
        }
        let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
        if total == 0 || total > i32::MAX as u64 {
            return Err(DiceError::InvalidWeight(total));
        }
        let draw = self.roll_die(total as u32)?;
        let threshold = (draw - 1) as u64;

        let mut cumulative = 0u64;
        for (index, weight) in weights.iter().enumerate() {
            cumulative += u64::from(*weight);
            if threshold < cumulative {
                return Ok(WeightedPick { index, draw });
            }
        }
        // The draw is strictly below `total`, so the scan always returns.
        Err(DiceError::InvalidWeight(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_die_in_range() {
        let mut src = RollSource::seeded(42);
        for _ in 0..500 {
            let v = src.roll_die(6).unwrap();
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn one_sided_die_always_one() {
        let mut src = RollSource::seeded(1);
        assert_eq!(src.roll_dice(5, 1).unwrap(), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn zero_sides_fails_fast() {
        let mut src = RollSource::seeded(1);
        assert_eq!(src.roll_die(0), Err(DiceError::InvalidSides(0)));
        assert_eq!(src.roll_dice(2, 0), Err(DiceError::InvalidSides(0)));
        assert_eq!(src.draws(), 0);
    }

    #[test]
    fn roll_dice_preserves_call_order() {
        let mut pooled = RollSource::seeded(7);
        let mut single = RollSource::seeded(7);
        let pool = pooled.roll_dice(4, 20).unwrap();
        let one_by_one: Vec<i32> = (0..4).map(|_| single.roll_die(20).unwrap()).collect();
        assert_eq!(pool, one_by_one);
    }

    #[test]
    fn zero_count_rolls_nothing() {
        let mut src = RollSource::seeded(7);
        assert!(src.roll_dice(0, 6).unwrap().is_empty());
        assert_eq!(src.draws(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RollSource::seeded(99);
        let mut b = RollSource::seeded(99);
        for _ in 0..50 {
            assert_eq!(a.roll_die(100).unwrap(), b.roll_die(100).unwrap());
            assert_eq!(a.pick_uniform(13).unwrap(), b.pick_uniform(13).unwrap());
            assert_eq!(
                a.pick_weighted(&[5, 1, 9]).unwrap(),
                b.pick_weighted(&[5, 1, 9]).unwrap()
            );
        }
        assert_eq!(a.draws(), b.draws());
    }

    #[test]
    fn fate_dice_faces() {
        let mut src = RollSource::seeded(3);
        let mut seen = std::collections::HashSet::new();
        for v in src.roll_fate_dice(300).unwrap() {
            assert!((-1..=1).contains(&v));
            seen.insert(v);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn roll_by_die_type() {
        let mut src = RollSource::seeded(5);
        for _ in 0..100 {
            assert!((1..=12).contains(&src.roll(Die::D12).unwrap()));
            assert!((-1..=1).contains(&src.roll(Die::Fate).unwrap()));
        }
    }

    #[test]
    fn pick_uniform_bounds() {
        let mut src = RollSource::seeded(11);
        for _ in 0..200 {
            assert!(src.pick_uniform(4).unwrap() < 4);
        }
        assert_eq!(src.pick_uniform(0), Err(DiceError::EmptyRange));
    }

    #[test]
    fn weighted_rejects_bad_tables() {
        let mut src = RollSource::seeded(11);
        assert_eq!(src.pick_weighted(&[]), Err(DiceError::EmptyTable));
        assert_eq!(src.pick_weighted(&[0, 0]), Err(DiceError::InvalidWeight(0)));
    }

    #[test]
    fn weighted_never_picks_zero_weight_rows() {
        let mut src = RollSource::seeded(17);
        for _ in 0..500 {
            let idx = src.pick_weighted(&[0, 3, 0, 1]).unwrap();
            assert!(idx == 1 || idx == 3);
        }
    }

    #[test]
    fn weighted_draw_maps_to_cumulative_rows() {
        let mut src = RollSource::seeded(23);
        for _ in 0..500 {
            let pick = src.roll_weighted(&[1, 2, 3, 4]).unwrap();
            let expected = match pick.draw {
                1 => 0,
                2..=3 => 1,
                4..=6 => 2,
                7..=10 => 3,
                other => panic!("draw out of range: {other}"),
            };
            assert_eq!(pick.index, expected);
        }
    }

    #[test]
    fn weighted_frequency_tracks_weights() {
        // Index 3 of [1, 2, 3, 4] carries 4/10 of the weight.
        let trials = 4000u64;
        let mut high = 0u64;
        for seed in 0..trials {
            let mut src = RollSource::seeded(seed);
            if src.pick_weighted(&[1, 2, 3, 4]).unwrap() == 3 {
                high += 1;
            }
        }
        let freq = high as f64 / trials as f64;
        assert!((0.35..=0.45).contains(&freq), "frequency {freq}");
    }

    #[test]
    fn seed_is_reported() {
        assert_eq!(RollSource::seeded(8).seed(), Some(8));
        assert_eq!(RollSource::from_entropy().seed(), None);
    }

    proptest::proptest! {
        #[test]
        fn any_die_stays_in_range(seed in 0u64..10_000, sides in 1u32..1_000, count in 0u32..20) {
            let mut src = RollSource::seeded(seed);
            let values = src.roll_dice(count, sides).unwrap();
            proptest::prop_assert_eq!(values.len(), count as usize);
            for v in values {
                proptest::prop_assert!(v >= 1 && v <= sides as i32);
            }
        }
    }
}
