//! Main module for flashml library functionality
//!
//!     The compiler is a strictly linear pipeline:
//!
//!         source -> lexing -> parsing -> validation -> { intermediate, html }
//!
//!     Lexing and parsing fail fast: the first lexical or syntax error aborts the compilation
//!     unit. Validation never fails; it returns every diagnostic it finds, and the emitters only
//!     run when that list is empty. See [pipeline] for the orchestration and [error] for the
//!     failure categories.
//!
//!     Nothing in this module tree performs I/O except [pipeline::report], which is the boundary
//!     to the filesystem.

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod testing;
pub mod validation;
