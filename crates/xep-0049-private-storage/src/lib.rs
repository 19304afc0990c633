//! # Private XML Storage (XEP-0049)
//!
//! Per-user private XML storage over IQ stanzas. An authenticated session
//! persists and retrieves namespace-keyed XML fragments that only that user
//! can access; the exchange is mediated entirely through `get`/`set`
//! requests wrapped in a `query` element under `jabber:iq:private`.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Pure request classification: the ordered validation
//!   pipeline, the authorization check, and the reserved-namespace denylist
//! - `ports/` - Port traits (inbound module API, outbound storage SPI)
//! - `service/` - The [`PrivateStorage`] application service wiring
//!   matcher, authorizer, validator, and storage bridge together
//! - `adapters/` - Storage backends: in-memory, and a fault-injecting
//!   wrapper for failure-path tests
//!
//! ## Request Pipeline
//!
//! ```text
//! Received → Matched? → Authorized? → KindValid? → BodyNonEmpty?
//!          → PerChildValid? → StorageOp → Responded
//! ```
//!
//! Every `?` short-circuits into a terminal stanza error (`forbidden`,
//! `bad-request`, `not-acceptable`, or `internal-server-error`); only
//! `StorageOp` touches the backend, and each processed request is answered
//! by exactly one response stanza.
//!
//! ## Storage Contract
//!
//! Stored items are keyed by `(owner, element name, element namespace)`; a
//! new `set` for an existing key overwrites it, and a whole `set` request is
//! one atomic batch. A `get` fetches every item of the owner stored under
//! the selector's namespace; an unknown namespace yields a success result
//! echoing an empty selector, never an error.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{FaultyBackend, MemoryBackend};
pub use domain::namespaces::ReservedNamespaces;
pub use domain::PRIVATE_STORAGE_NAMESPACE;
pub use error::StorageError;
pub use ports::inbound::IqModule;
pub use ports::outbound::PrivateStorageBackend;
pub use service::PrivateStorage;
