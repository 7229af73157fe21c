/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building a registry or moving documents in and out of
/// storage.
///
/// Decoding a well-formed document never fails: unknown kinds and malformed
/// variant fields are recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Two decoders were registered under the same kind.
    #[error("kind already registered: \"{0}\"")]
    DuplicateKind(String),

    /// A document or history file was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A history file could not be read or written.
    #[error("history I/O error: {0}")]
    Io(#[from] std::io::Error),
}
