//! Semantic validation
//!
//! Checks a parsed [Document](crate::flashml::ast::Document) against the FlashML tag grammar and
//! returns every problem found, in document order. Validation never fails: an empty list means
//! the document may be emitted.
//!
//!     grammar:     the static tag table (allowed parents, required and optional attributes)
//!     diagnostics: the structured [Diagnostic] records
//!     validator:   the tree walk

pub mod diagnostics;
pub mod grammar;
pub mod validator;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use grammar::{rule_for, TagRule, ROOT_TAG};
pub use validator::validate;
