//! Storage backend errors.

use thiserror::Error;

/// Errors surfaced by a [`PrivateStorageBackend`](crate::ports::outbound::PrivateStorageBackend).
///
/// The module maps every variant to a stanza-level `internal-server-error`;
/// the distinction only matters for logs and for backend implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not complete the operation.
    #[error("backend operation failed: {0}")]
    Backend(String),

    /// A persisted payload could not be decoded back into an element.
    #[error("stored payload could not be decoded: {0}")]
    Corrupted(String),
}
