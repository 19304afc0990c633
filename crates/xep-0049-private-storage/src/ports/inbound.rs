//! # Inbound Port (Driving Port)
//!
//! The contract every IQ-handling module exposes to the server's stanza
//! router and service-discovery registry.

use warble_stanza::Iq;

/// An IQ-handling server module.
pub trait IqModule {
    /// Feature namespaces this module advertises for service discovery,
    /// beyond the one it matches requests on.
    fn associated_namespaces(&self) -> Vec<&'static str>;

    /// Whether this module handles the given request. Pure predicate; the
    /// router calls it on every inbound IQ.
    fn matches_iq(&self, iq: &Iq) -> bool;

    /// Drive a matched request to completion, emitting exactly one response
    /// stanza on the owning session.
    fn process_iq(&self, iq: &Iq);
}
