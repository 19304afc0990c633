//! Mock session for module tests.

use std::collections::VecDeque;

use parking_lot::{Mutex, RwLock};
use warble_stanza::{Iq, Jid};

use crate::session::Session;

/// A [`Session`] test double that records every stanza sent to it.
///
/// The bound username can be changed mid-test to simulate a stream
/// authenticated as a different account than the stanzas claim.
pub struct MockSession {
    id: String,
    username: RwLock<String>,
    jid: Jid,
    outbound: Mutex<VecDeque<Iq>>,
}

impl MockSession {
    /// Create a mock stream bound to `jid`, with the username taken from the
    /// JID localpart.
    pub fn new(id: impl Into<String>, jid: Jid) -> Self {
        let username = jid.node().unwrap_or_default().to_string();
        Self {
            id: id.into(),
            username: RwLock::new(username),
            jid,
            outbound: Mutex::new(VecDeque::new()),
        }
    }

    /// Rebind the stream to a different username.
    pub fn set_username(&self, username: impl Into<String>) {
        *self.username.write() = username.into();
    }

    /// Pop the oldest stanza queued by the module under test.
    pub fn fetch(&self) -> Option<Iq> {
        self.outbound.lock().pop_front()
    }

    /// Number of stanzas still queued.
    pub fn pending(&self) -> usize {
        self.outbound.lock().len()
    }
}

impl Session for MockSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn username(&self) -> String {
        self.username.read().clone()
    }

    fn jid(&self) -> Jid {
        self.jid.clone()
    }

    fn send(&self, stanza: Iq) {
        self.outbound.lock().push_back(stanza);
    }
}
