//! # Warble Stanza Model
//!
//! This crate contains the stanza/XML object model shared across server
//! modules: generic XML elements, JIDs, IQ stanzas, and stanza-level error
//! conditions.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-module stanza types are defined
//!   here. Modules operate on typed elements, never on raw XML text.
//! - **Parsing Is External**: The wire parser lives in the connection layer.
//!   This crate models stanzas that have already been parsed.
//! - **Serializable Payloads**: Elements derive `serde` traits so storage
//!   modules can persist element subtrees verbatim.

pub mod element;
pub mod error;
pub mod iq;
pub mod jid;
pub mod ns;

pub use element::Element;
pub use error::StanzaErrorKind;
pub use iq::{Iq, IqType};
pub use jid::{Jid, JidError};
