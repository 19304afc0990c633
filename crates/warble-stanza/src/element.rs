//! Generic XML element tree.
//!
//! An [`Element`] is the in-memory form of a parsed XML element: a local
//! name, a flat attribute list (the namespace lives in the `xmlns`
//! attribute, as on the wire), character data, and child elements.
//! Subtrees are preserved verbatim so modules can treat payloads as opaque.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute name carrying the element namespace.
const XMLNS: &str = "xmlns";

/// A single XML element and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    /// Create an element with no namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Create an element carrying an `xmlns` attribute.
    pub fn with_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let mut el = Self::new(name);
        el.set_namespace(namespace);
        el
    }

    /// Local name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element namespace, or the empty string when no `xmlns` attribute is
    /// present.
    pub fn namespace(&self) -> &str {
        self.attribute(XMLNS).unwrap_or("")
    }

    /// Set or replace the element namespace.
    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.set_attribute(XMLNS, namespace);
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set or replace an attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Character data directly inside this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the character data of this element.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a child element, preserving document order.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// All direct children in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether the element holds no child elements.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child with the given local name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First direct child with the given local name and namespace.
    pub fn child_with_namespace(&self, name: &str, namespace: &str) -> Option<&Element> {
        self.children
            .iter()
            .find(|c| c.name == name && c.namespace() == namespace)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, raw: &str) -> fmt::Result {
    for ch in raw.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '\'' => f.write_str("&apos;")?,
            '"' => f.write_str("&quot;")?,
            _ => write!(f, "{ch}")?,
        }
    }
    Ok(())
}

impl fmt::Display for Element {
    /// Serialize the subtree as escaped XML text. Used for logging and for
    /// debugging dumps; persistence uses the serde representation instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (k, v) in &self.attributes {
            write!(f, " {k}=\"")?;
            write_escaped(f, v)?;
            write!(f, "\"")?;
        }
        if self.children.is_empty() && self.text.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        write_escaped(f, &self.text)?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}
