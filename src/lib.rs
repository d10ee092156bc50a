//! # minilang
//!
//! minilang is a tree-walking interpreter for a minimal statement language:
//! integer arithmetic, variable bindings via `let`, and output via `print`.
//! The whole source text is processed in three stages that each run to
//! completion before the next begins: the lexer turns the text into tokens,
//! the parser builds a list of statements, and the evaluator executes the
//! statements against a single variable store.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
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
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::Context, lexer::tokenize, parser::statement::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of source code as a tree. The tree is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to nodes for error reporting.
/// - Provides the human-readable indented tree dump.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Every error carries the source line it refers to, and
/// every error is a plain value: nothing in the library terminates the
/// process, the binary decides what a fatal error means.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for user feedback.
/// - Implements the standard error traits for reporting at the boundary.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and the variable
/// store to provide a complete runtime for source code execution.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Provides entry points for tokenizing, parsing, and running programs.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Runs a complete source text through the pipeline.
///
/// The source is tokenized, parsed into a statement list, and executed
/// against a fresh variable store. Program output produced by `print`
/// statements goes to standard output.
///
/// # Errors
/// Returns the first lexical, syntax, or runtime error encountered. The
/// pipeline stops at the first error; there is no recovery.
///
/// # Examples
/// ```
/// use minilang::run_source;
///
/// let source = "let x = 2 + 2; print(x);";
/// assert!(run_source(source).is_ok());
///
/// // 'y' is never defined, so evaluation fails.
/// let source = "print(y);";
/// assert!(run_source(source).is_err());
/// ```
pub fn run_source(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;

    let mut context = Context::new();
    context.run(&program)?;

    Ok(())
}
