//! In-memory storage backend.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use warble_stanza::Element;

use crate::error::StorageError;
use crate::ports::outbound::PrivateStorageBackend;

/// Map key: `(owner, element name, element namespace)`.
type ItemKey = (String, String, String);

/// In-memory private storage backend.
///
/// Values are bincode-encoded element subtrees, matching what a persistent
/// backend would write. Batch atomicity comes from encoding every item
/// before taking the single write section; a BTreeMap keeps fetch order
/// stable across runs.
#[derive(Default)]
pub struct MemoryBackend {
    items: RwLock<BTreeMap<ItemKey, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored items across all owners.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl PrivateStorageBackend for MemoryBackend {
    fn upsert_items(&self, owner: &str, items: &[Element]) -> Result<(), StorageError> {
        // Encode everything up front so a failure leaves the map untouched
        let mut encoded = Vec::with_capacity(items.len());
        for item in items {
            let key = (
                owner.to_string(),
                item.name().to_string(),
                item.namespace().to_string(),
            );
            let value =
                bincode::serialize(item).map_err(|e| StorageError::Backend(e.to_string()))?;
            encoded.push((key, value));
        }

        let mut map = self.items.write();
        for (key, value) in encoded {
            map.insert(key, value);
        }
        Ok(())
    }

    fn fetch_items(&self, owner: &str, namespace: &str) -> Result<Vec<Element>, StorageError> {
        let map = self.items.read();
        map.iter()
            .filter(|((o, _, ns), _)| o == owner && ns == namespace)
            .map(|(_, value)| {
                bincode::deserialize(value).map_err(|e| StorageError::Corrupted(e.to_string()))
            })
            .collect()
    }
}
