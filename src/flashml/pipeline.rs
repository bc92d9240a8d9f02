//! Compilation pipeline
//!
//!     compiler: source text to [CompileOutput], phase by phase (lex, parse, validate, emit)
//!     report:   the file boundary; reads a source file, compiles it, writes the artifacts
//!               through an [ArtifactSink] and collects every failure in a [CompileReport]
//!
//! The compiler itself does no I/O. Lexical and syntax errors stop the unit at the first error;
//! semantic diagnostics are collected and block both emitters.

pub mod compiler;
pub mod report;

pub use compiler::{CompileOutput, Compiler};
pub use report::{
    compile_file, output_paths, ArtifactSink, CompileReport, ErrorCategory, FsSink, MemorySink,
    ReportedError,
};
