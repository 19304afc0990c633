//! The session trait consumed by server modules.

use warble_stanza::{Iq, Jid};

/// An authenticated client stream, as seen from a protocol module.
///
/// Modules read the bound identity and emit response stanzas; everything
/// else about the stream (socket, TLS state, resource binding) stays behind
/// this boundary.
pub trait Session: Send + Sync {
    /// Stream identifier, unique per connection.
    fn id(&self) -> &str;

    /// The localpart bound to this stream at authentication time.
    fn username(&self) -> String;

    /// The full JID negotiated for this stream.
    fn jid(&self) -> Jid;

    /// Queue a stanza for delivery to the peer.
    fn send(&self, stanza: Iq);
}
