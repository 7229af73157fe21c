//! Oracle generators for solo play.
//!
//! Each generator draws from a [`RollSource`](ora_dice::RollSource), looks the
//! dice up in the built-in tables, and returns a typed result from `ora-core`.
//! [`OracleSession`] wraps the generators in a line-oriented command loop with
//! a chaos factor and a persistent history.

pub mod chaos;
pub mod config;
pub mod error;
pub mod generator;
pub mod generators;
pub mod session;
pub mod tables;

pub use chaos::ChaosFactor;
pub use config::SessionConfig;
pub use error::{OracleError, OracleResult};
pub use generator::{Generator, GeneratorParams};
pub use session::OracleSession;
