//! # Private Storage Integration Flows
//!
//! Exercises the XEP-0049 module end to end: a mock client session drives
//! `get`/`set` requests through the module against a shared storage backend,
//! asserting the response stanza for every accepted and rejected request.
//!
//! ## Flows Tested
//!
//! 1. **Dispatch**: namespace matching keeps foreign IQs out of the module
//! 2. **Full session scenario**: set two items, read them back with one
//!    selector, read an unknown namespace, with fault injection on both the
//!    write and the read path
//! 3. **Multi-device**: two sessions of one account observe the same items
//!    through the shared backend

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use warble_stanza::{Element, Iq, IqType, Jid};
    use warble_stream::MockSession;
    use xep_0049_private_storage::{
        FaultyBackend, IqModule, MemoryBackend, PrivateStorage, PrivateStorageBackend,
        ReservedNamespaces, PRIVATE_STORAGE_NAMESPACE,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn jid(resource: &str) -> Jid {
        Jid::new("ortuman", "warble.im", resource).unwrap()
    }

    fn private_iq(from: &Jid, iq_type: IqType, children: Vec<Element>) -> Iq {
        let mut iq = Iq::new(Uuid::new_v4().to_string(), iq_type);
        iq.set_from(from.clone());
        iq.set_to(from.to_bare());
        let mut query = Element::with_namespace("query", PRIVATE_STORAGE_NAMESPACE);
        for child in children {
            query.append_child(child);
        }
        iq.append_element(query);
        iq
    }

    fn item(name: &str, namespace: &str) -> Element {
        Element::with_namespace(name, namespace)
    }

    fn expect_result(stm: &MockSession, id: &str) -> Iq {
        let response = stm.fetch().expect("module must answer every request");
        assert_eq!(response.iq_type(), IqType::Result);
        assert_eq!(response.id(), id);
        assert_eq!(stm.pending(), 0, "exactly one response per request");
        response
    }

    fn expect_error(stm: &MockSession, condition: &str) {
        let response = stm.fetch().expect("module must answer every request");
        assert_eq!(response.iq_type(), IqType::Error);
        assert_eq!(response.error_condition(), Some(condition));
        assert_eq!(stm.pending(), 0, "exactly one response per request");
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    #[test]
    fn router_dispatch_predicate_matches_only_private_queries() {
        crate::init_logging();

        let stm = Arc::new(MockSession::new("abcd", jid("balcony")));
        let backend = Arc::new(MemoryBackend::new());
        let module = PrivateStorage::new(backend, stm.clone());

        let mut iq = Iq::new(Uuid::new_v4().to_string(), IqType::Get);
        iq.set_from(jid("balcony"));
        iq.set_to(jid("balcony").to_bare());
        assert!(!module.matches_iq(&iq));

        iq.append_element(Element::with_namespace("query", PRIVATE_STORAGE_NAMESPACE));
        assert!(module.matches_iq(&iq));

        // Matching alone emits nothing
        assert_eq!(stm.pending(), 0);
    }

    // =========================================================================
    // FULL SESSION SCENARIO
    // =========================================================================

    #[test]
    fn private_storage_session_scenario() {
        crate::init_logging();

        let stm = Arc::new(MockSession::new("abcd", jid("balcony")));
        let backend = Arc::new(FaultyBackend::new(MemoryBackend::new()));
        let module = PrivateStorage::new(backend.clone(), stm.clone());

        // A stream bound to another account may not touch this storage
        stm.set_username("romeo");
        let set_iq = private_iq(
            &jid("balcony"),
            IqType::Set,
            vec![item("exodus1", "exodus:ns"), item("exodus2", "exodus:ns")],
        );
        module.process_iq(&set_iq);
        expect_error(&stm, "forbidden");

        stm.set_username("ortuman");

        // Write failure: the whole request fails, nothing is stored
        backend.fail_requests(true);
        module.process_iq(&set_iq);
        expect_error(&stm, "internal-server-error");
        backend.fail_requests(false);
        assert!(backend.fetch_items("ortuman", "exodus:ns").unwrap().is_empty());

        // Successful set
        module.process_iq(&set_iq);
        let ack = expect_result(&stm, set_iq.id());
        assert!(ack.elements().is_empty());

        // Read failure
        let get_iq = private_iq(
            &jid("balcony"),
            IqType::Get,
            vec![item("exodus1", "exodus:ns")],
        );
        backend.fail_requests(true);
        module.process_iq(&get_iq);
        expect_error(&stm, "internal-server-error");
        backend.fail_requests(false);

        // One selector fetches every item under its namespace
        module.process_iq(&get_iq);
        let result = expect_result(&stm, get_iq.id());
        let query = result
            .element_with_namespace("query", PRIVATE_STORAGE_NAMESPACE)
            .unwrap();
        assert_eq!(query.child_count(), 2);
        assert!(query.children().iter().all(|c| c.namespace() == "exodus:ns"));

        // A namespace never stored yields a success result echoing the selector
        let missing_iq = private_iq(
            &jid("balcony"),
            IqType::Get,
            vec![item("exodus1", "exodus:ns:2")],
        );
        module.process_iq(&missing_iq);
        let result = expect_result(&stm, missing_iq.id());
        let query = result
            .element_with_namespace("query", PRIVATE_STORAGE_NAMESPACE)
            .unwrap();
        assert_eq!(query.child_count(), 1);
        assert_eq!(query.children()[0].name(), "exodus1");
        assert_eq!(query.children()[0].namespace(), "exodus:ns:2");
        assert!(query.children()[0].is_empty());
    }

    #[test]
    fn custom_denylist_is_enforced_per_deployment() {
        crate::init_logging();

        let stm = Arc::new(MockSession::new("abcd", jid("balcony")));
        let backend = Arc::new(MemoryBackend::new());
        let reserved =
            ReservedNamespaces::new(vec!["app:internal".to_string()], vec!["urn:warble:".to_string()]);
        let module = PrivateStorage::with_reserved(backend, stm.clone(), reserved);

        module.process_iq(&private_iq(
            &jid("balcony"),
            IqType::Set,
            vec![item("state", "urn:warble:sessions")],
        ));
        expect_error(&stm, "not-acceptable");

        // The default core namespaces are not part of a custom denylist
        let set_iq = private_iq(
            &jid("balcony"),
            IqType::Set,
            vec![item("exodus", "jabber:client")],
        );
        module.process_iq(&set_iq);
        expect_result(&stm, set_iq.id());
    }

    // =========================================================================
    // MULTI-DEVICE
    // =========================================================================

    #[test]
    fn two_sessions_of_one_account_share_stored_items() {
        crate::init_logging();

        let backend = Arc::new(MemoryBackend::new());

        let balcony = Arc::new(MockSession::new("s-1", jid("balcony")));
        let garden = Arc::new(MockSession::new("s-2", jid("garden")));
        let module_balcony = PrivateStorage::new(backend.clone(), balcony.clone());
        let module_garden = PrivateStorage::new(backend, garden.clone());

        let set_iq = private_iq(
            &jid("balcony"),
            IqType::Set,
            vec![item("bookmarks", "app:bookmarks")],
        );
        module_balcony.process_iq(&set_iq);
        expect_result(&balcony, set_iq.id());

        let get_iq = private_iq(
            &jid("garden"),
            IqType::Get,
            vec![item("bookmarks", "app:bookmarks")],
        );
        module_garden.process_iq(&get_iq);
        let result = expect_result(&garden, get_iq.id());
        let query = result
            .element_with_namespace("query", PRIVATE_STORAGE_NAMESPACE)
            .unwrap();
        assert_eq!(query.child_count(), 1);
        assert_eq!(query.children()[0].name(), "bookmarks");
    }
}
