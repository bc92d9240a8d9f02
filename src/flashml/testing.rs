//! Testing helpers for flashml
//!
//!     assert_ast:
//!         Fluent assertions over a parsed [Document](crate::flashml::ast::Document), so tests
//!         read as a description of the expected tree instead of a chain of matches and indexes.
//!
//!     samples:
//!         Verified FlashML sample documents under `docs/samples/`. Tests should load these
//!         rather than repeat long sources inline.

pub mod assertions;
pub mod samples;

pub use assertions::{assert_ast, DocumentAssertion, ElementAssertion};
pub use samples::Sample;
