//! Authorization check and the ordered validation pipeline.
//!
//! Both functions are pure: they classify the request and never touch
//! session or storage state, so a rejected request provably has no side
//! effects.

use warble_stanza::{Element, Iq, StanzaErrorKind};

use super::namespaces::ReservedNamespaces;
use super::PRIVATE_STORAGE_NAMESPACE;

/// An accepted private storage request, borrowed from the incoming IQ.
#[derive(Debug, PartialEq, Eq)]
pub enum PrivateRequest<'a> {
    /// A `get` naming the single item set wanted back.
    Get { selector: &'a Element },
    /// A `set` carrying one or more items to store.
    Set { items: Vec<&'a Element> },
}

/// Check that the request addresses the storage owned by the session.
///
/// Both the declared sender and the declared target must carry the
/// session's bound username as localpart. This runs before any body
/// inspection: a structurally perfect but misaddressed request is still
/// `forbidden`.
pub fn authorize(iq: &Iq, username: &str) -> Result<(), StanzaErrorKind> {
    let owns = |jid: Option<&warble_stanza::Jid>| {
        jid.and_then(|j| j.node()).is_some_and(|node| node == username)
    };
    if !owns(iq.from()) || !owns(iq.to()) {
        return Err(StanzaErrorKind::Forbidden);
    }
    Ok(())
}

/// Classify the request body, first matching rule wins.
///
/// Rules, in order:
/// 1. kind must be `get` or `set`, else `bad-request`
/// 2. the `query` container must hold at least one child, else
///    `not-acceptable`
/// 3. per child: an empty namespace is `bad-request`, a reserved namespace
///    is `not-acceptable`
/// 4. for `get`: exactly one child, and that child empty of further
///    children, else `not-acceptable`
pub fn validate<'a>(
    iq: &'a Iq,
    reserved: &ReservedNamespaces,
) -> Result<PrivateRequest<'a>, StanzaErrorKind> {
    if !iq.is_get() && !iq.is_set() {
        return Err(StanzaErrorKind::BadRequest);
    }

    let query = iq
        .element_with_namespace("query", PRIVATE_STORAGE_NAMESPACE)
        .ok_or(StanzaErrorKind::NotAcceptable)?;

    if query.is_empty() {
        return Err(StanzaErrorKind::NotAcceptable);
    }

    for child in query.children() {
        if child.namespace().is_empty() {
            return Err(StanzaErrorKind::BadRequest);
        }
        if reserved.is_reserved(child.namespace()) {
            return Err(StanzaErrorKind::NotAcceptable);
        }
    }

    if iq.is_get() {
        // A selector names the wanted items; it carries no payload of its own.
        if query.child_count() != 1 || !query.children()[0].is_empty() {
            return Err(StanzaErrorKind::NotAcceptable);
        }
        return Ok(PrivateRequest::Get {
            selector: &query.children()[0],
        });
    }

    Ok(PrivateRequest::Set {
        items: query.children().iter().collect(),
    })
}
