//! # Outbound Port (Driven Port)
//!
//! The persistence SPI the module drives. Implementations own atomicity:
//! the module performs no locking of its own and may be shared by several
//! sessions of the same account.

use warble_stanza::Element;

use crate::error::StorageError;

/// Persistence backend for private XML items.
///
/// Items are keyed by `(owner, element local-name, element namespace)`;
/// the element subtree is the stored value.
pub trait PrivateStorageBackend: Send + Sync {
    /// Insert or overwrite every item in one atomic batch. On error no item
    /// may have been written.
    fn upsert_items(&self, owner: &str, items: &[Element]) -> Result<(), StorageError>;

    /// Fetch all items the owner has stored under `namespace`, in a stable
    /// order. An unknown namespace yields an empty vector, not an error.
    fn fetch_items(&self, owner: &str, namespace: &str) -> Result<Vec<Element>, StorageError>;
}
