//! Structured validation diagnostics

use crate::flashml::ast::Position;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    MissingRoot,
    UnknownTag,
    DisallowedParent,
    MissingAttribute,
    DisallowedAttribute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// Start of the offending element; the missing-root diagnostic has none
    pub position: Option<Position>,
}

impl Diagnostic {
    pub fn missing_root(root: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingRoot,
            message: format!("root element '{}' is required", root),
            position: None,
        }
    }

    pub fn unknown_tag(tag: &str, position: Position) -> Self {
        Self {
            kind: DiagnosticKind::UnknownTag,
            message: format!("unknown tag '{}'", tag),
            position: Some(position),
        }
    }

    /// `parent` is `None` when the element sits directly in the document
    pub fn disallowed_parent(tag: &str, parent: Option<&str>, position: Position) -> Self {
        let message = match parent {
            Some(parent) => format!("'{}' is not allowed inside '{}'", tag, parent),
            None => format!("'{}' is not allowed at document level", tag),
        };
        Self {
            kind: DiagnosticKind::DisallowedParent,
            message,
            position: Some(position),
        }
    }

    pub fn missing_attribute(tag: &str, attribute: &str, position: Position) -> Self {
        Self {
            kind: DiagnosticKind::MissingAttribute,
            message: format!("attribute '{}' is required on '{}'", attribute, tag),
            position: Some(position),
        }
    }

    pub fn disallowed_attribute(tag: &str, attribute: &str, position: Position) -> Self {
        Self {
            kind: DiagnosticKind::DisallowedAttribute,
            message: format!("attribute '{}' is not allowed on '{}'", attribute, tag),
            position: Some(position),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(f, "{} at {}", self.message, position),
            None => write!(f, "{}", self.message),
        }
    }
}
