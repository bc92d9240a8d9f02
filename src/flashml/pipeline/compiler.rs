//! Source text to compiled artifacts

use crate::flashml::ast::Document;
use crate::flashml::error::CompileError;
use crate::flashml::formats::html::{render_page, HtmlOptions};
use crate::flashml::formats::intermediate::{
    record_to_json, to_intermediate, IntermediateNode, IntermediateOptions,
};
use crate::flashml::formats::FormatError;
use crate::flashml::lexing::{self, Token};
use crate::flashml::parsing;
use crate::flashml::validation::{self, Diagnostic};
use tracing::{debug, info, warn};

/// Everything a successful compilation produces
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
    pub document: Document,
    pub intermediate: IntermediateNode,
    pub html: String,
}

impl CompileOutput {
    /// The intermediate record as JSON
    pub fn intermediate_json(&self, options: &IntermediateOptions) -> Result<String, FormatError> {
        record_to_json(&self.intermediate, options)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Compiler {
    html: HtmlOptions,
    intermediate: IntermediateOptions,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(html: HtmlOptions, intermediate: IntermediateOptions) -> Self {
        Self { html, intermediate }
    }

    pub fn html_options(&self) -> &HtmlOptions {
        &self.html
    }

    pub fn intermediate_options(&self) -> &IntermediateOptions {
        &self.intermediate
    }

    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, CompileError> {
        let tokens = lexing::tokenize(source)?;
        debug!(tokens = tokens.len(), "lexing complete");
        Ok(tokens)
    }

    pub fn parse(&self, source: &str) -> Result<Document, CompileError> {
        let tokens = self.tokenize(source)?;
        let document = parsing::parse(tokens)?;
        debug!(
            nodes = document.node_count(),
            elements = document.element_count(),
            "parsing complete"
        );
        Ok(document)
    }

    /// Lex, parse and validate; an empty list means the source would compile
    pub fn check(&self, source: &str) -> Result<Vec<Diagnostic>, CompileError> {
        let document = self.parse(source)?;
        let diagnostics = validation::validate(&document);
        if !diagnostics.is_empty() {
            warn!(count = diagnostics.len(), "validation failed");
        }
        Ok(diagnostics)
    }

    /// Run every phase, producing both artifacts
    pub fn compile(&self, source: &str) -> Result<CompileOutput, CompileError> {
        info!(bytes = source.len(), "compiling");
        let document = self.parse(source)?;

        let diagnostics = validation::validate(&document);
        if !diagnostics.is_empty() {
            warn!(count = diagnostics.len(), "validation failed, skipping emitters");
            return Err(CompileError::Semantic(diagnostics));
        }

        let intermediate = to_intermediate(&document);
        let html = render_page(&document, &self.html);
        info!(html_bytes = html.len(), "compilation complete");

        Ok(CompileOutput {
            document,
            intermediate,
            html,
        })
    }
}
