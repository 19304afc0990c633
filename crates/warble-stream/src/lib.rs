//! # Warble Stream
//!
//! The session/stream abstraction exposed to server modules.
//!
//! A module never owns a socket. It sees an authenticated stream through the
//! [`Session`] trait: the username bound at authentication time and a way to
//! queue an outbound stanza. The real client-to-server stream lives in the
//! connection layer; [`MockSession`] stands in for it in module tests.

pub mod mock;
pub mod session;

pub use mock::MockSession;
pub use session::Session;
