//! Fault-injecting backend wrapper.

use std::sync::atomic::{AtomicBool, Ordering};

use warble_stanza::Element;

use crate::error::StorageError;
use crate::ports::outbound::PrivateStorageBackend;

/// Wraps a backend and fails every operation while the toggle is on.
///
/// Used to exercise the `internal-server-error` paths without reaching into
/// the wrapped backend's state.
pub struct FaultyBackend<B> {
    inner: B,
    failing: AtomicBool,
}

impl<B> FaultyBackend<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            failing: AtomicBool::new(false),
        }
    }

    /// Turn injected failures on or off.
    pub fn fail_requests(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("injected backend fault".to_string()));
        }
        Ok(())
    }
}

impl<B: PrivateStorageBackend> PrivateStorageBackend for FaultyBackend<B> {
    fn upsert_items(&self, owner: &str, items: &[Element]) -> Result<(), StorageError> {
        self.check()?;
        self.inner.upsert_items(owner, items)
    }

    fn fetch_items(&self, owner: &str, namespace: &str) -> Result<Vec<Element>, StorageError> {
        self.check()?;
        self.inner.fetch_items(owner, namespace)
    }
}
