//! Documentation tokens and cross-reference links
//!
//! Doc comments arrive from the driver already tokenized into plain text
//! and `{@link ...}` references. Links carry the resolved target type and
//! the element they point at.

use crate::ir::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// Kind of the element a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Class,
    Interface,
    Enum,
    Method,
    Constructor,
    Field,
    Other,
}

/// The element a link resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkElement {
    /// Element kind
    pub kind: ElementKind,
    /// Element simple name (method name for methods)
    pub simple_name: String,
}

impl LinkElement {
    /// Create a new link element
    pub fn new(kind: ElementKind, simple_name: impl Into<String>) -> Self {
        Self {
            kind,
            simple_name: simple_name.into(),
        }
    }
}

/// A resolved `{@link ...}` reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocLink {
    /// Raw type owning the target element
    pub target: TypeDescriptor,
    /// Element the link points at
    pub element: LinkElement,
    /// Link label as written, may be blank
    #[serde(default)]
    pub label: String,
}

impl DocLink {
    /// Link to a type
    pub fn to_type(target: TypeDescriptor) -> Self {
        let element = LinkElement::new(ElementKind::Class, target.simple_name.clone());
        Self {
            target,
            element,
            label: String::new(),
        }
    }

    /// Link to a method of a type
    pub fn to_method(target: TypeDescriptor, method: impl Into<String>) -> Self {
        Self {
            target,
            element: LinkElement::new(ElementKind::Method, method),
            label: String::new(),
        }
    }

    /// Set the element kind
    pub fn with_element_kind(mut self, kind: ElementKind) -> Self {
        self.element.kind = kind;
        self
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A documentation token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocToken {
    /// Plain text, may span several lines
    Text(String),
    /// Cross-reference
    Link(DocLink),
}

/// A tokenized doc comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Doc {
    pub tokens: Vec<DocToken>,
}

impl Doc {
    /// Create an empty doc
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.tokens.push(DocToken::Text(text.into()));
        self
    }

    /// Append a link
    pub fn link(mut self, link: DocLink) -> Self {
        self.tokens.push(DocToken::Link(link));
        self
    }
}
