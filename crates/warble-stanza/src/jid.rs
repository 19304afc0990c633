//! JID addressing.
//!
//! A JID identifies an account (`node@domain`) or a single bound session
//! (`node@domain/resource`). Modules that scope data per account compare
//! bare JIDs, never full ones.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing or parsing a JID.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JidError {
    #[error("jid domain must not be empty")]
    EmptyDomain,

    #[error("malformed jid: {0:?}")]
    Malformed(String),
}

/// A parsed JID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jid {
    node: Option<String>,
    domain: String,
    resource: Option<String>,
}

impl Jid {
    /// Build a JID from its parts. `node` and `resource` may be empty, the
    /// domain may not.
    pub fn new(node: &str, domain: &str, resource: &str) -> Result<Self, JidError> {
        if domain.is_empty() {
            return Err(JidError::EmptyDomain);
        }
        Ok(Self {
            node: (!node.is_empty()).then(|| node.to_string()),
            domain: domain.to_string(),
            resource: (!resource.is_empty()).then(|| resource.to_string()),
        })
    }

    /// Parse a `node@domain/resource` string. Node and resource are optional.
    pub fn parse(raw: &str) -> Result<Self, JidError> {
        let (bare, resource) = match raw.split_once('/') {
            Some((_, "")) => return Err(JidError::Malformed(raw.to_string())),
            Some((bare, res)) => (bare, res),
            None => (raw, ""),
        };
        let (node, domain) = match bare.split_once('@') {
            Some(("", _)) => return Err(JidError::Malformed(raw.to_string())),
            Some((node, dom)) => (node, dom),
            None => ("", bare),
        };
        Self::new(node, domain, resource)
    }

    /// Localpart, when present.
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Domain part.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Resource part, when present.
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Whether this JID carries no resource.
    pub fn is_bare(&self) -> bool {
        self.resource.is_none()
    }

    /// The account-level JID, with any resource stripped.
    pub fn to_bare(&self) -> Jid {
        Jid {
            node: self.node.clone(),
            domain: self.domain.clone(),
            resource: None,
        }
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(node) = &self.node {
            write!(f, "{node}@")?;
        }
        write!(f, "{}", self.domain)?;
        if let Some(resource) = &self.resource {
            write!(f, "/{resource}")?;
        }
        Ok(())
    }
}
