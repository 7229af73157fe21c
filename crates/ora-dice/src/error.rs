//! Error types for the dice layer.

/// Errors raised by invalid draw requests.
///
/// These are programmer errors: callers pass static sides, counts and
/// weights, so the source refuses them instead of clamping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A die must have between 1 and `i32::MAX` sides.
    #[error("invalid die: {0} sides")]
    InvalidSides(u32),

    /// A uniform pick was requested from an empty range.
    #[error("cannot pick from an empty range")]
    EmptyRange,

    /// A weighted pick was requested from a table with no rows.
    #[error("weighted table has no rows")]
    EmptyTable,

    /// A weighted pick was requested from a table whose weights sum to zero
    /// or overflow a single draw.
    #[error("weighted table has an unusable total weight of {0}")]
    InvalidWeight(u64),

    /// A dice expression could not be parsed.
    #[error("invalid dice notation: {0}")]
    Notation(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
