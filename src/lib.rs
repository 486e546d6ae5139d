//! # legoc
//!
//! legoc is the front end of Lego-C, a small teaching language. It scans
//! source text into tokens, checks their structure, parses them into a flat
//! list of statements and runs those statements with a tree-walking
//! interpreter.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use log::debug;

use crate::{
    ast::Statement,
    config::Config,
    error::{Diagnostic, SyntaxError},
    interpreter::{
        evaluator::core::Interpreter, lexer::Scanner, parser::core::parse, token::Token,
        validator::Validator,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum produced by the parser and
/// executed by the interpreter.
pub mod ast;
/// Settings for every pipeline stage.
///
/// Keyword vocabulary, operator characters, identifier policy and the
/// optional program bracket and space token behaviour. All of it is data:
/// swapping a grammar revision never means touching the scanner.
pub mod config;
/// Provides the error channels of the pipeline.
///
/// This module defines the recoverable diagnostics raised by the scanner and
/// the validator, the fatal syntax error raised by the parser, and the
/// runtime errors raised by single statements.
///
/// # Responsibilities
/// - Defines one type per severity so callers can present them distinctly.
/// - Attaches line numbers, offsets or token indices for context.
pub mod error;
/// Orchestrates the stages of the pipeline.
///
/// This module ties together the token model, scanner, validator, parser,
/// evaluator and value type.
pub mod interpreter;

/// Everything one run of the pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Every scanned token, in source order.
    pub tokens:       Vec<Token>,
    /// Statements parsed before the end of input or the syntax error.
    pub statements:   Vec<Statement>,
    /// Lexical diagnostics followed by structural diagnostics.
    pub diagnostics:  Vec<Diagnostic>,
    /// The syntax error that stopped parsing, if any.
    pub syntax_error: Option<SyntaxError>,
    /// Program output, one entry per line.
    pub output:       Vec<String>,
}

impl AnalysisResult {
    /// Returns `true` when nothing was diagnosed and parsing completed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.syntax_error.is_none()
    }
}

/// Runs the whole pipeline on `source` with the default configuration.
///
/// # Examples
/// ```
/// use legoc::analyze;
///
/// let result = analyze("Display \"hi\"");
/// assert_eq!(result.output, ["hi"]);
/// assert!(result.is_clean());
///
/// // A display without an operand stops parsing but keeps the tokens.
/// let result = analyze("Display");
/// assert!(result.syntax_error.is_some());
/// assert_eq!(result.tokens.len(), 1);
/// ```
#[must_use]
pub fn analyze(source: &str) -> AnalysisResult {
    analyze_with(source, &Config::default())
}

/// Runs the whole pipeline on `source`: scan, validate, parse and interpret.
///
/// Every call is independent. Nothing, not even the environment, survives
/// from one call to the next. Diagnostics never stop the later stages, and a
/// syntax error still lets the statements parsed before it run.
#[must_use]
pub fn analyze_with(source: &str, config: &Config) -> AnalysisResult {
    let scan = Scanner::new(config).scan(source);

    let mut diagnostics = scan.diagnostics;
    diagnostics.extend(Validator::new(config).validate(&scan.tokens));

    let (statements, syntax_error) = parse(&scan.tokens, config).into_parts();
    let output = Interpreter::new().run(&statements);

    debug!("analysis produced {} tokens, {} diagnostics, {} statements and {} output lines",
           scan.tokens.len(),
           diagnostics.len(),
           statements.len(),
           output.len());

    AnalysisResult { tokens: scan.tokens,
                     statements,
                     diagnostics,
                     syntax_error,
                     output }
}
