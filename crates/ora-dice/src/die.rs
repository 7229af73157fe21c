//! Die types.
//!
//! Supports standard polyhedral dice (d4 through d100), custom dice, and the
//! three-faced fate die whose faces read -1, 0 and +1.

use serde::{Deserialize, Serialize};

/// Largest custom die accepted from notation.
pub const MAX_SIDES: u32 = 1000;

/// A single die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
    /// A fate die: faces -1, 0, +1.
    Fate,
}

impl Die {
    /// Returns the number of faces on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
            Self::Fate => 3,
        }
    }

    /// Whether this die reads -1/0/+1 instead of 1..=sides.
    pub fn is_fate(self) -> bool {
        matches!(self, Self::Fate)
    }

    /// The standard die with the given number of sides.
    pub fn with_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Parse a die from a string like "d20", "d6", "d100" or "dF".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "df" => Some(Self::Fate),
            "d%" => Some(Self::D100),
            other => {
                let num = other.strip_prefix('d')?.parse::<u32>().ok()?;
                if (2..=MAX_SIDES).contains(&num) {
                    Some(Self::with_sides(num))
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fate => write!(f, "dF"),
            other => write!(f, "d{}", other.sides()),
        }
    }
}
