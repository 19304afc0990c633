//! IQ stanzas.
//!
//! An IQ is a request/response pair: a `get` or `set` request from one
//! entity is answered by exactly one `result` or `error` stanza carrying the
//! same id, with sender and target reversed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::StanzaErrorKind;
use crate::jid::Jid;

/// The four IQ stanza kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IqType {
    Get,
    Set,
    Result,
    Error,
}

impl IqType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IqType::Get => "get",
            IqType::Set => "set",
            IqType::Result => "result",
            IqType::Error => "error",
        }
    }
}

impl fmt::Display for IqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed IQ stanza.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iq {
    id: String,
    iq_type: IqType,
    from: Option<Jid>,
    to: Option<Jid>,
    elements: Vec<Element>,
}

impl Iq {
    /// Create an IQ with the given id and type and no payload.
    pub fn new(id: impl Into<String>, iq_type: IqType) -> Self {
        Self {
            id: id.into(),
            iq_type,
            from: None,
            to: None,
            elements: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn iq_type(&self) -> IqType {
        self.iq_type
    }

    pub fn set_type(&mut self, iq_type: IqType) {
        self.iq_type = iq_type;
    }

    pub fn is_get(&self) -> bool {
        self.iq_type == IqType::Get
    }

    pub fn is_set(&self) -> bool {
        self.iq_type == IqType::Set
    }

    pub fn from(&self) -> Option<&Jid> {
        self.from.as_ref()
    }

    pub fn set_from(&mut self, jid: Jid) {
        self.from = Some(jid);
    }

    pub fn to(&self) -> Option<&Jid> {
        self.to.as_ref()
    }

    pub fn set_to(&mut self, jid: Jid) {
        self.to = Some(jid);
    }

    /// Append a payload element.
    pub fn append_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// All payload elements in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// First payload element with the given local name.
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name() == name)
    }

    /// First payload element with the given local name and namespace.
    pub fn element_with_namespace(&self, name: &str, namespace: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.name() == name && e.namespace() == namespace)
    }

    /// Build the empty `result` stanza answering this request: same id,
    /// sender and target reversed, no payload. Callers append payload
    /// elements as needed.
    pub fn result_response(&self) -> Iq {
        Iq {
            id: self.id.clone(),
            iq_type: IqType::Result,
            from: self.to.clone(),
            to: self.from.clone(),
            elements: Vec::new(),
        }
    }

    /// Build the `error` stanza answering this request: the original payload
    /// echoed back with the condition element appended, sender and target
    /// reversed.
    pub fn error_response(&self, kind: StanzaErrorKind) -> Iq {
        let mut elements = self.elements.clone();
        elements.push(kind.to_element());
        Iq {
            id: self.id.clone(),
            iq_type: IqType::Error,
            from: self.to.clone(),
            to: self.from.clone(),
            elements,
        }
    }

    /// The condition name carried by an `error` typed stanza, if any.
    pub fn error_condition(&self) -> Option<&str> {
        self.element("error")
            .and_then(|e| e.children().first())
            .map(|c| c.name())
    }
}
