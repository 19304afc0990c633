//! Pure request classification.
//!
//! Nothing in this module touches a session or a backend: given an IQ and
//! the module configuration it either produces a typed, accepted request or
//! the first matching stanza error.

pub mod namespaces;
pub mod validation;

pub use namespaces::ReservedNamespaces;
pub use validation::{authorize, validate, PrivateRequest};

/// The namespace reserved for this module: it identifies matching requests
/// and wraps every response.
pub const PRIVATE_STORAGE_NAMESPACE: &str = "jabber:iq:private";
