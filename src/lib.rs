//! # numera
//!
//! numera is an interactive expression calculator written in Rust. It scans
//! one line of input into a typed token stream, parses the stream into an
//! expression tree under a fixed precedence grammar, and walks the tree to
//! produce a single number or boolean.

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
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InterpretError,
    interpreter::{evaluator, lexer::Lexer, parser, value::Value},
    reporting::Reporter,
};

/// Defines the shape of parsed expressions.
///
/// This module declares the `ParseNode` enum whose three variants (terminal,
/// unary, binary) form the tree the parser builds and the evaluator walks.
///
/// # Responsibilities
/// - Defines the closed set of tree node shapes.
/// - Keeps trees single-rooted, unshared and immutable after construction.
pub mod ast;
/// Provides the error types for every pipeline stage.
///
/// This module defines one closed error enum per stage (lexing, parsing,
/// evaluation) with structured fields, plus an umbrella type tagging which
/// stage failed. All errors propagate as values; nothing is thrown.
///
/// # Responsibilities
/// - Defines `LexError`, `ParseError` and `EvalError`.
/// - Ties them together under `InterpretError` for pipeline callers.
pub mod error;
/// Orchestrates the scanning, parsing and evaluation stages.
///
/// This module ties together the token model, lexer, parser, evaluator and
/// value type that make up the expression pipeline.
///
/// # Responsibilities
/// - Hosts the three pipeline stages and their shared data types.
/// - Keeps the data flow strictly linear: text, tokens, tree, value.
pub mod interpreter;
/// Numeric helpers shared with the evaluator.
///
/// # Responsibilities
/// - Provides the checked iterative factorial the evaluator calls.
/// - Hosts the standalone two-dimensional vector type.
pub mod math;
/// Interactive read loop and its command table.
///
/// The loop reads lines, dispatches dot-prefixed commands against an
/// explicit table, feeds everything else through the pipeline, and prints
/// results and diagnostics.
///
/// # Responsibilities
/// - Defines the `ReplCommand` table and its built-in entries.
/// - Drives line editing, history and result printing.
pub mod repl;
/// Collects and formats diagnostics.
///
/// The pipeline performs no I/O; problems that should not abort processing
/// are pushed onto a `Reporter` and printed by the caller with the
/// interactive location placeholder.
///
/// # Responsibilities
/// - Defines the `Diagnostic` record and its console rendering.
/// - Provides the collecting `Reporter` the lexer reports into.
pub mod reporting;

/// Evaluates one line of input and returns its value.
///
/// This is the top-level convenience over the three pipeline stages: the
/// line is scanned, parsed and evaluated in order, and the first hard error
/// of any stage is returned. Unrecognized characters do not stop the
/// pipeline; they are collected on `reporter` for the caller to display.
///
/// # Errors
/// Returns an `InterpretError` carrying the failing stage's error.
///
/// # Examples
/// ```
/// use numera::{evaluate_line, interpreter::value::Value, reporting::Reporter};
///
/// let mut reporter = Reporter::new();
/// let value = evaluate_line("1 + 2 * 3", &mut reporter).unwrap();
/// assert_eq!(value, Value::Number(7.0));
///
/// // An empty line degenerates to zero rather than failing.
/// let value = evaluate_line("", &mut reporter).unwrap();
/// assert_eq!(value, Value::Number(0.0));
/// ```
pub fn evaluate_line(source: &str, reporter: &mut Reporter) -> Result<Value, InterpretError> {
    let tokens = Lexer::new(source).scan_all_tokens(reporter)?;
    let tree = parser::parse(&tokens)?;
    let value = evaluator::evaluate(&tree)?;

    Ok(value)
}
