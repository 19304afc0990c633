//! Core protocol namespaces.
//!
//! These identify the base stanza vocabularies. Extension modules reserve
//! their own namespace strings and must never reuse the ones below for
//! arbitrary payloads.

/// Client-to-server stanza namespace.
pub const CLIENT: &str = "jabber:client";

/// Server-to-server stanza namespace.
pub const SERVER: &str = "jabber:server";

/// Stanza error condition namespace.
pub const STANZAS: &str = "urn:ietf:params:xml:ns:xmpp-stanzas";

/// Stream framing namespace.
pub const STREAM: &str = "http://etherx.jabber.org/streams";

/// vCard storage namespace.
pub const VCARD: &str = "vcard-temp";
