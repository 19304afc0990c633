//! Port traits: the inbound module API and the outbound storage SPI.

pub mod inbound;
pub mod outbound;

pub use inbound::IqModule;
pub use outbound::PrivateStorageBackend;
