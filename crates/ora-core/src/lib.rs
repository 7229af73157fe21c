//! Roll results for the Orakel oracle engine.
//!
//! Every generator produces a [`RollResult`]: an immutable record of the dice
//! it consumed, their total, a frozen interpretation, and variant-specific
//! fields. Results encode to a [`RollDocument`] for storage and decode back
//! through a [`Registry`] keyed on the result's stable `kind` string. Some
//! results embed others by value; [`compose`] holds the rules for that.

/// Composition rules for embedding and triggering sub-results.
pub mod compose;
/// Error types used throughout the crate.
pub mod error;
/// Append-only session history of encoded results.
pub mod history;
/// The `kind` to decoder lookup table.
pub mod registry;
/// The base result contract, the persisted document, and the result enum.
pub mod roll;
/// Concrete result shapes.
pub mod variants;

/// Re-export composition helpers.
pub use compose::{Composition, is_doubles};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the history log.
pub use history::History;
/// Re-export registry types.
pub use registry::{DecodeFn, Registry, RegistryBuilder};
/// Re-export the result model.
pub use roll::{BUILTIN_KINDS, RollCategory, RollDocument, RollHeader, RollResult, Variant};
