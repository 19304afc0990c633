//! The private storage application service.
//!
//! [`PrivateStorage`] wires the four stages together: matcher → authorizer →
//! validator → storage bridge. It holds no request state of its own; the
//! backend handle and the owning session are injected at construction.


use std::sync::Arc;

use warble_stanza::{Element, Iq, StanzaErrorKind};
use warble_stream::Session;

use crate::domain::{
    authorize, validate, PrivateRequest, ReservedNamespaces, PRIVATE_STORAGE_NAMESPACE,
};
use crate::ports::inbound::IqModule;
use crate::ports::outbound::PrivateStorageBackend;

/// The XEP-0049 module bound to one session.
pub struct PrivateStorage<B, S> {
    backend: Arc<B>,
    session: Arc<S>,
    reserved: ReservedNamespaces,
}

impl<B, S> PrivateStorage<B, S>
where
    B: PrivateStorageBackend,
    S: Session,
{
    /// Create the module with the default reserved-namespace denylist.
    pub fn new(backend: Arc<B>, session: Arc<S>) -> Self {
        Self::with_reserved(backend, session, ReservedNamespaces::default())
    }

    /// Create the module with a deployment-specific denylist.
    pub fn with_reserved(
        backend: Arc<B>,
        session: Arc<S>,
        reserved: ReservedNamespaces,
    ) -> Self {
        Self {
            backend,
            session,
            reserved,
        }
    }

    /// Run authorizer, validator, and storage bridge for one request.
    ///
    /// Validation failures return before any backend call; the response
    /// stanza is built exactly once at the boundary in `process_iq`.
    fn handle(&self, iq: &Iq) -> Result<Iq, StanzaErrorKind> {
        let username = self.session.username();
        authorize(iq, &username)?;

        match validate(iq, &self.reserved)? {
            PrivateRequest::Set { items } => self.handle_set(iq, &username, &items),
            PrivateRequest::Get { selector } => self.handle_get(iq, &username, selector),
        }
    }

    fn handle_set(
        &self,
        iq: &Iq,
        username: &str,
        items: &[&Element],
    ) -> Result<Iq, StanzaErrorKind> {
        let owned: Vec<Element> = items.iter().map(|item| (*item).clone()).collect();
        self.backend.upsert_items(username, &owned).map_err(|e| {
            tracing::error!(user = %username, error = %e, "private storage write failed");
            StanzaErrorKind::InternalServerError
        })?;

        tracing::debug!(user = %username, items = owned.len(), "private storage updated");
        Ok(iq.result_response())
    }

    fn handle_get(
        &self,
        iq: &Iq,
        username: &str,
        selector: &Element,
    ) -> Result<Iq, StanzaErrorKind> {
        let stored = self
            .backend
            .fetch_items(username, selector.namespace())
            .map_err(|e| {
                tracing::error!(user = %username, error = %e, "private storage read failed");
                StanzaErrorKind::InternalServerError
            })?;

        let mut query = Element::with_namespace("query", PRIVATE_STORAGE_NAMESPACE);
        if stored.is_empty() {
            // Nothing under this namespace: echo an empty selector, absence
            // of data is not an error
            query.append_child(Element::with_namespace(
                selector.name(),
                selector.namespace(),
            ));
        } else {
            for item in stored {
                query.append_child(item);
            }
        }

        let mut result = iq.result_response();
        result.append_element(query);
        Ok(result)
    }
}

impl<B, S> IqModule for PrivateStorage<B, S>
where
    B: PrivateStorageBackend,
    S: Session,
{
    fn associated_namespaces(&self) -> Vec<&'static str> {
        // The module advertises no optional sub-features
        Vec::new()
    }

    fn matches_iq(&self, iq: &Iq) -> bool {
        iq.element_with_namespace("query", PRIVATE_STORAGE_NAMESPACE)
            .is_some()
    }

    fn process_iq(&self, iq: &Iq) {
        match self.handle(iq) {
            Ok(response) => self.session.send(response),
            Err(kind) => {
                tracing::debug!(
                    id = %iq.id(),
                    stream = %self.session.id(),
                    condition = %kind,
                    "private storage request rejected"
                );
                self.session.send(iq.error_response(kind));
            }
        }
    }
}
