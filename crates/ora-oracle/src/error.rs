//! Error types for the oracle crate.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors raised while generating results or running a session.
#[derive(Debug, Error)]
pub enum OracleError {
    /// A draw failed in the roll source.
    #[error("{0}")]
    Dice(#[from] ora_dice::DiceError),

    /// Encoding, decoding or history storage failed.
    #[error("{0}")]
    Core(#[from] ora_core::CoreError),

    /// Invalid likelihood string.
    #[error("invalid likelihood: {0}")]
    InvalidLikelihood(String),

    /// Danger level outside 1-5.
    #[error("invalid danger level {0}, expected 1-5")]
    InvalidDangerLevel(i64),

    /// A generator parameter could not be parsed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
