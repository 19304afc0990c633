//! Reserved namespace denylist.
//!
//! Core protocol vocabularies must never be hijacked for private storage:
//! a client that stored payloads under `jabber:client` could later replay
//! them as stanza content. The denylist is configurable per deployment and
//! seeded with the known core namespaces.

use warble_stanza::ns;

/// Namespaces a private storage payload may not use.
///
/// A namespace is reserved when it matches one of the exact entries or
/// starts with one of the prefixes.
#[derive(Debug, Clone)]
pub struct ReservedNamespaces {
    exact: Vec<String>,
    prefixes: Vec<String>,
}

impl ReservedNamespaces {
    /// Build a denylist from explicit entries.
    pub fn new(exact: Vec<String>, prefixes: Vec<String>) -> Self {
        Self { exact, prefixes }
    }

    /// Whether `namespace` may not be used for stored payloads.
    pub fn is_reserved(&self, namespace: &str) -> bool {
        self.exact.iter().any(|e| e == namespace)
            || self.prefixes.iter().any(|p| namespace.starts_with(p.as_str()))
    }
}

impl Default for ReservedNamespaces {
    /// The core vocabularies: every `jabber:*` namespace, everything under
    /// the `http://jabber.org` registry, and vCard storage.
    fn default() -> Self {
        Self {
            exact: vec![ns::VCARD.to_string()],
            prefixes: vec!["jabber:".to_string(), "http://jabber.org".to_string()],
        }
    }
}
