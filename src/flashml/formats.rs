//! Output formats for parsed documents
//!
//! Every serialization of a [Document](crate::flashml::ast::Document) is a [Formatter] registered
//! by name in the [FormatRegistry]:
//!
//!     intermediate-json / intermediate-yaml: the tagged intermediate record
//!     html: the full HTML page
//!     ast-treeviz: one node per line, for debugging
//!
//! Formatters assume the document already passed validation; they never check the grammar.

pub mod html;
pub mod intermediate;
pub mod registry;
pub mod treeviz;

pub use html::{render_body, render_page, HtmlFormatter, HtmlOptions};
pub use intermediate::{
    to_intermediate, IntermediateJsonFormatter, IntermediateNode, IntermediateOptions,
    IntermediateYamlFormatter,
};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
