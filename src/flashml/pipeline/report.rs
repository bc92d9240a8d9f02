//! File boundary: read a source, compile it, write the artifacts
//!
//! `<base>.html` and `<base>.json` are written next to the explicit output path when one is
//! given, otherwise next to the input. An artifact path equal to the input is refused, so a
//! source named `*.html` or `*.json` is never overwritten. Nothing here panics: every failure,
//! I/O included, ends up as a [ReportedError] in the [CompileReport].

use super::compiler::Compiler;
use crate::flashml::error::CompileError;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Destination for compiled artifacts
pub trait ArtifactSink {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Writes artifacts to the filesystem
#[derive(Debug, Default)]
pub struct FsSink;

impl ArtifactSink for FsSink {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Keeps artifacts in memory, in write order
#[derive(Debug, Default)]
pub struct MemorySink {
    pub artifacts: Vec<(PathBuf, String)>,
}

impl MemorySink {
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|(written, _)| written == path)
            .map(|(_, contents)| contents.as_str())
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        self.artifacts.push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Lexical,
    Syntactic,
    Semantic,
    /// I/O and serialization failures around the compiler
    General,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Lexical => "lexical",
            ErrorCategory::Syntactic => "syntactic",
            ErrorCategory::Semantic => "semantic",
            ErrorCategory::General => "general",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    pub category: ErrorCategory,
    pub message: String,
}

impl ReportedError {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            category: ErrorCategory::General,
            message: message.into(),
        }
    }

    /// One entry per problem: a single one for lexical and syntax errors, one per diagnostic
    pub fn from_compile_error(err: &CompileError) -> Vec<ReportedError> {
        match err {
            CompileError::Lexical(err) => vec![Self {
                category: ErrorCategory::Lexical,
                message: err.to_string(),
            }],
            CompileError::Syntax(err) => vec![Self {
                category: ErrorCategory::Syntactic,
                message: err.to_string(),
            }],
            CompileError::Semantic(diagnostics) => diagnostics
                .iter()
                .map(|diagnostic| Self {
                    category: ErrorCategory::Semantic,
                    message: diagnostic.to_string(),
                })
                .collect(),
        }
    }
}

/// Outcome of compiling one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub input: PathBuf,
    /// Path of the HTML artifact, set once it has been written
    pub html: Option<PathBuf>,
    /// Path of the intermediate JSON artifact, set once it has been written
    pub intermediate: Option<PathBuf>,
    pub errors: Vec<ReportedError>,
}

impl CompileReport {
    fn new(input: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            html: None,
            intermediate: None,
            errors: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> String {
        // A report is plain strings and paths; serializing it cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// `(html, json)` artifact paths: the explicit output path, or else the input, with its
/// extension replaced
pub fn output_paths(input: &Path, output: Option<&Path>) -> (PathBuf, PathBuf) {
    let base = output.unwrap_or(input);
    (base.with_extension("html"), base.with_extension("json"))
}

/// Compile `input` and write its artifacts through `sink`
pub fn compile_file(
    input: &Path,
    output: Option<&Path>,
    compiler: &Compiler,
    sink: &mut dyn ArtifactSink,
) -> CompileReport {
    let mut report = CompileReport::new(input);
    info!(input = %input.display(), "compiling file");

    let (html_path, json_path) = output_paths(input, output);
    if html_path == input || json_path == input {
        error!(input = %input.display(), "artifact path would overwrite the input");
        report.errors.push(ReportedError::general(format!(
            "refusing to overwrite the input {}; choose another output path with -o",
            input.display()
        )));
        return report;
    }

    let source = match fs::read_to_string(input) {
        Ok(source) => source,
        Err(err) => {
            error!(input = %input.display(), error = %err, "failed to read source");
            report.errors.push(ReportedError::general(format!(
                "failed to read {}: {}",
                input.display(),
                err
            )));
            return report;
        }
    };

    let compiled = match compiler.compile(&source) {
        Ok(compiled) => compiled,
        Err(err) => {
            error!(input = %input.display(), "{}", err);
            report.errors = ReportedError::from_compile_error(&err);
            return report;
        }
    };

    match sink.write(&html_path, &compiled.html) {
        Ok(()) => {
            info!(path = %html_path.display(), "wrote html");
            report.html = Some(html_path);
        }
        Err(err) => report.errors.push(write_error(&html_path, &err)),
    }

    let json = compiled.intermediate_json(compiler.intermediate_options());
    match json {
        Ok(json) => match sink.write(&json_path, &json) {
            Ok(()) => {
                info!(path = %json_path.display(), "wrote intermediate record");
                report.intermediate = Some(json_path);
            }
            Err(err) => report.errors.push(write_error(&json_path, &err)),
        },
        Err(err) => report.errors.push(ReportedError::general(err.to_string())),
    }

    report
}

fn write_error(path: &Path, err: &io::Error) -> ReportedError {
    error!(path = %path.display(), error = %err, "failed to write artifact");
    ReportedError::general(format!("failed to write {}: {}", path.display(), err))
}
