//! # flashml
//!
//! A compiler for FlashML, a small tag-based markup language for structured
//! narrative content (seasons, episodes, scenes, characters, dialogue).
//!
//! The compiler turns FlashML source into a validated HTML document plus a
//! structurally equivalent intermediate tree (JSON or YAML).
//!
//! ## Testing
//!
//! For testing helpers and sample documents, see the [testing module](flashml::testing).

pub mod flashml;
