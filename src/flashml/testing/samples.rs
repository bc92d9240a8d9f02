//! Sample documents for tests
//!
//! The sources live under `docs/samples/` so they double as user-facing examples. Each sample
//! is known to lex and parse; the ones under [Sample::invalid] fail validation.

use crate::flashml::ast::Document;
use crate::flashml::{lexing, parsing};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// The compact one-liner with a root and a title
    Minimal,
    /// A full valid episode: the structural tags with their attributes, a comment, the media
    /// tag and one power
    Pilot,
    /// A title with no `velocista` root
    MissingRoot,
    /// An unknown tag wrapping a tag that would be misplaced
    UnknownTag,
    /// A `temporada` at document level with no `numero`
    OrphanSeason,
}

impl Sample {
    pub fn all() -> &'static [Sample] {
        &[
            Sample::Minimal,
            Sample::Pilot,
            Sample::MissingRoot,
            Sample::UnknownTag,
            Sample::OrphanSeason,
        ]
    }

    pub fn valid() -> &'static [Sample] {
        &[Sample::Minimal, Sample::Pilot]
    }

    pub fn invalid() -> &'static [Sample] {
        &[Sample::MissingRoot, Sample::UnknownTag, Sample::OrphanSeason]
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Sample::Minimal => "minimal.flashml",
            Sample::Pilot => "pilot.flashml",
            Sample::MissingRoot => "missing-root.flashml",
            Sample::UnknownTag => "unknown-tag.flashml",
            Sample::OrphanSeason => "orphan-season.flashml",
        }
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("docs")
            .join("samples")
            .join(self.file_name())
    }

    /// Read the sample source, panicking with the path on failure
    pub fn source(&self) -> String {
        let path = self.path();
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read sample {}: {}", path.display(), err))
    }

    /// Lex and parse the sample, panicking on any error
    pub fn parse(&self) -> Document {
        let source = self.source();
        let tokens = lexing::tokenize(&source)
            .unwrap_or_else(|err| panic!("{} failed to lex: {}", self.file_name(), err));
        parsing::parse(tokens)
            .unwrap_or_else(|err| panic!("{} failed to parse: {}", self.file_name(), err))
    }
}
