//! The chaos factor that drives scene checks.

use serde::{Deserialize, Serialize};

/// Lowest chaos value.
pub const MIN_CHAOS: u32 = 1;
/// Highest chaos value.
pub const MAX_CHAOS: u32 = 9;

/// How unpredictable the story has become, from 1 (orderly) to 9 (chaotic).
///
/// A scene check whose d10 lands at or under the chaos value is altered or
/// interrupted, so a higher factor means more surprises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ChaosFactor {
    value: u32,
}

impl ChaosFactor {
    /// Create a chaos factor, clamped to 1-9.
    pub fn new(value: u32) -> Self {
        Self {
            value: value.clamp(MIN_CHAOS, MAX_CHAOS),
        }
    }

    /// Current value.
    pub fn value(self) -> u32 {
        self.value
    }

    /// Raise by one, capped at 9.
    pub fn increase(&mut self) {
        self.value = (self.value + 1).min(MAX_CHAOS);
    }

    /// Lower by one, floored at 1.
    pub fn decrease(&mut self) {
        self.value = self.value.saturating_sub(1).max(MIN_CHAOS);
    }
}

impl Default for ChaosFactor {
    fn default() -> Self {
        Self::new(5)
    }
}

impl From<u32> for ChaosFactor {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<ChaosFactor> for u32 {
    fn from(chaos: ChaosFactor) -> Self {
        chaos.value
    }
}

impl std::fmt::Display for ChaosFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{MAX_CHAOS}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five() {
        assert_eq!(ChaosFactor::default().value(), 5);
    }

    #[test]
    fn clamped_on_creation() {
        assert_eq!(ChaosFactor::new(0).value(), 1);
        assert_eq!(ChaosFactor::new(100).value(), 9);
        assert_eq!(ChaosFactor::new(5).value(), 5);
    }

    #[test]
    fn increase_caps_at_nine() {
        let mut c = ChaosFactor::new(8);
        c.increase();
        c.increase();
        assert_eq!(c.value(), 9);
    }

    #[test]
    fn decrease_floors_at_one() {
        let mut c = ChaosFactor::new(2);
        c.decrease();
        c.decrease();
        assert_eq!(c.value(), 1);
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&ChaosFactor::new(7)).unwrap();
        assert_eq!(json, "7");
        let c: ChaosFactor = serde_json::from_str(&json).unwrap();
        assert_eq!(c.to_string(), "7/9");
        let clamped: ChaosFactor = serde_json::from_str("42").unwrap();
        assert_eq!(clamped.value(), 9);
    }
}
