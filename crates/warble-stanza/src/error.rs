//! Stanza error conditions.
//!
//! A stanza error is reported by echoing the offending stanza with type
//! `error` and an appended `<error/>` child carrying the defined condition
//! under the stanzas namespace, plus the legacy numeric code.

use std::fmt;

use crate::element::Element;
use crate::ns;

/// The stanza-level error conditions emitted by server modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StanzaErrorKind {
    /// Malformed or misused request (type `modify`, code 400).
    BadRequest,
    /// Requester lacks authorization (type `auth`, code 403).
    Forbidden,
    /// Request is understood but disallowed (type `modify`, code 406).
    NotAcceptable,
    /// The server failed while handling the request (type `wait`, code 500).
    InternalServerError,
}

impl StanzaErrorKind {
    /// Defined condition name, as it appears on the wire.
    pub fn condition(&self) -> &'static str {
        match self {
            StanzaErrorKind::BadRequest => "bad-request",
            StanzaErrorKind::Forbidden => "forbidden",
            StanzaErrorKind::NotAcceptable => "not-acceptable",
            StanzaErrorKind::InternalServerError => "internal-server-error",
        }
    }

    /// Error type attribute.
    pub fn error_type(&self) -> &'static str {
        match self {
            StanzaErrorKind::BadRequest => "modify",
            StanzaErrorKind::Forbidden => "auth",
            StanzaErrorKind::NotAcceptable => "modify",
            StanzaErrorKind::InternalServerError => "wait",
        }
    }

    /// Legacy numeric error code.
    pub fn code(&self) -> u16 {
        match self {
            StanzaErrorKind::BadRequest => 400,
            StanzaErrorKind::Forbidden => 403,
            StanzaErrorKind::NotAcceptable => 406,
            StanzaErrorKind::InternalServerError => 500,
        }
    }

    /// Build the `<error/>` element for this condition.
    pub fn to_element(&self) -> Element {
        let mut error = Element::new("error");
        error.set_attribute("code", self.code().to_string());
        error.set_attribute("type", self.error_type());
        error.append_child(Element::with_namespace(self.condition(), ns::STANZAS));
        error
    }
}

impl fmt::Display for StanzaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.condition())
    }
}
