//! Deterministic dice for the Orakel oracle engine.
//!
//! A [`RollSource`] wraps a seedable RNG and exposes the primitive draws every
//! generator is built from: single dice, dice pools, fate dice, uniform picks
//! and weighted picks. Given the same seed and the same call sequence, a
//! source always yields the same values.

pub mod die;
pub mod error;
pub mod notation;
pub mod source;
pub mod table;

pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use notation::DiceExpr;
pub use source::{RollSource, WeightedPick};
pub use table::{TablePick, WeightedTable};
