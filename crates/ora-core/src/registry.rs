use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::roll::{self, RollDocument, RollResult};
use crate::variants::generic::GenericRoll;

/// Rebuilds a concrete result from a document. Nested documents are decoded
/// through the registry that is passed in.
pub type DecodeFn = fn(RollDocument, &Registry) -> RollResult;

/// Collects decoders before the registry is frozen.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    decoders: HashMap<String, DecodeFn>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoder for `kind`.
    ///
    /// A kind can be registered once; a second registration fails with
    /// [`CoreError::DuplicateKind`] and never replaces the first decoder.
    pub fn register(mut self, kind: &str, decode: DecodeFn) -> CoreResult<Self> {
        if self.decoders.contains_key(kind) {
            return Err(CoreError::DuplicateKind(kind.to_string()));
        }
        self.decoders.insert(kind.to_string(), decode);
        Ok(self)
    }

    /// Register every built-in variant.
    pub fn with_builtin(self) -> CoreResult<Self> {
        roll::register_builtin(self)
    }

    /// Freeze the collected decoders.
    pub fn build(self) -> Registry {
        tracing::debug!(kinds = self.decoders.len(), "registry built");
        Registry {
            decoders: self.decoders,
        }
    }
}

/// An immutable `kind` to decoder table.
///
/// Built once at startup and passed by reference to every decode call site.
#[derive(Debug)]
pub struct Registry {
    decoders: HashMap<String, DecodeFn>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry holding every built-in variant.
    pub fn builtin() -> CoreResult<Self> {
        Ok(RegistryBuilder::new().with_builtin()?.build())
    }

    /// Decode a document into a concrete result.
    ///
    /// Unknown kinds fall back to [`RollResult::Generic`] built from the base
    /// fields alone.
    pub fn decode(&self, document: RollDocument) -> RollResult {
        match self.decoders.get(&document.kind) {
            Some(decode) => decode(document, self),
            None => {
                tracing::warn!(kind = %document.kind, "unregistered kind, decoding as generic roll");
                GenericRoll::from_document(document).into()
            }
        }
    }

    /// Parse and decode a single JSON document.
    pub fn decode_json(&self, json: &str) -> CoreResult<RollResult> {
        Ok(self.decode(RollDocument::from_json(json)?))
    }

    /// Decode a nested document stored in a parent's `extra`.
    ///
    /// A missing nested document yields an empty generic roll of the expected
    /// kind so that the parent can still be rebuilt.
    pub fn decode_embedded(&self, document: Option<RollDocument>, expected: &str) -> RollResult {
        match document {
            Some(document) => self.decode(document),
            None => {
                tracing::warn!(kind = expected, "missing embedded roll, using placeholder");
                GenericRoll::placeholder(expected).into()
            }
        }
    }

    /// Whether a decoder exists for `kind`.
    pub fn is_registered(&self, kind: &str) -> bool {
        self.decoders.contains_key(kind)
    }

    /// Registered kinds in sorted order.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}
