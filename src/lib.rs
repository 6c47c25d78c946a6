//! # minicalc
//!
//! minicalc is an interpreter for a tiny imperative language written in Rust.
//! A program is a sequence of `name = expression;` assignments over 32-bit
//! signed integers, with `+`, `-`, `*`, unary signs and parentheses. The
//! interpreter evaluates the statements left to right and reports the final
//! value of every variable.
//!
//! Parsing and evaluation happen in a single pass: every grammar rule
//! computes its value as soon as it has recognized its tokens.
//!
//! # Logging
//!
//! The library emits `tracing` events: `debug` for each tokenized source and
//! each assignment, `trace` for each scanned or skipped character run. The
//! `minicalc` binary prints them when `RUST_LOG` is set, e.g.
//! `RUST_LOG=minicalc=debug`.

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
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    config::Config,
    error::InterpretError,
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::{core::TokenStream, statement::parse_program},
        symbols::SymbolTable,
    },
};
pub use crate::interpreter::lexer::tokenize;

/// Interpreter options.
///
/// Declares the [`Config`](config::Config) shared by the scanner and the
/// evaluator: whether unknown characters are an error, and what happens when
/// arithmetic overflows.
pub mod config;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Each family has its own enum; [`InterpretError`](error::InterpretError)
/// wraps whichever one ended the run.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and the offending token or variable to each error.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the interpretation of a program.
///
/// This module ties together the lexer, the parser that evaluates as it goes,
/// the symbol table and the integer value type.
///
/// # Responsibilities
/// - Coordinates the scanner, parser and evaluation context.
/// - Owns the single per-run symbol table.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates a token sequence from an empty symbol table.
///
/// # Errors
/// Returns the first syntax or runtime error. Nothing is returned on failure,
/// not even the bindings made by the statements before the failing one.
///
/// # Examples
/// ```
/// use minicalc::{config::Config, parse_and_evaluate, tokenize};
///
/// let config = Config::default();
/// let tokens = tokenize("x = 1; y = x + 1;", &config).unwrap();
/// let symbols = parse_and_evaluate(&tokens, &config).unwrap();
/// assert_eq!(symbols.get("y"), Some(2));
/// ```
pub fn parse_and_evaluate(tokens: &[Token], config: &Config) -> Result<SymbolTable, InterpretError> {
    let mut context = Context::new(config);
    let mut stream = TokenStream::new(tokens);
    parse_program(&mut stream, &mut context)?;
    Ok(context.into_symbols())
}

/// Runs a whole program: tokenizes `source`, then parses and evaluates it.
///
/// The result depends on `source` and `config` only; every call starts from
/// a fresh symbol table.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error of the run.
///
/// # Examples
/// ```
/// use minicalc::{config::Config, run};
///
/// let symbols = run("x = 1; y = 2; z = ---(x+y)*(x+-y);", &Config::default()).unwrap();
/// assert_eq!(symbols.get("z"), Some(3));
///
/// // `y` is never assigned.
/// assert!(run("x = y;", &Config::default()).is_err());
/// ```
pub fn run(source: &str, config: &Config) -> Result<SymbolTable, InterpretError> {
    let tokens = tokenize(source, config)?;
    let result = parse_and_evaluate(&tokens, config);
    match &result {
        Ok(symbols) => debug!(bindings = symbols.len(), "program finished"),
        Err(e) => debug!(error = %e, "program failed"),
    }
    result
}

/// Formats the outcome of a run as the interpreter's text report.
///
/// - One `name = value` line per variable, sorted by name.
/// - A single `Error` line if the program bound no variables.
/// - A single `Error: <message>` line if the run failed.
///
/// # Examples
/// ```
/// use minicalc::{config::Config, render, run};
///
/// let config = Config::default();
/// assert_eq!(render(&run("b = 2; a = b * 3;", &config)), "a = 6\nb = 2\n");
/// assert_eq!(render(&run("", &config)), "Error\n");
/// assert!(render(&run("a = ;", &config)).starts_with("Error: "));
/// ```
#[must_use]
pub fn render(result: &Result<SymbolTable, InterpretError>) -> String {
    match result {
        Ok(symbols) if symbols.is_empty() => "Error\n".to_string(),
        Ok(symbols) => symbols.entries()
                              .map(|(name, value)| format!("{name} = {value}\n"))
                              .collect(),
        Err(e) => format!("Error: {e}\n"),
    }
}
