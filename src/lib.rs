//! # idk
//!
//! idk is an interpreter for the IDK scripting language, written in Rust.
//! Programs are lexed line by line, grouped into blocks, parsed into
//! expression trees, optionally type checked and then evaluated, with support
//! for write-once variables, integer ranges, `if`/`else` and `for` blocks.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    config::Options,
    error::Error,
    interpreter::{
        checker::check_syntax,
        evaluator::core::{Context, Evaluated},
        lexer::tokenize,
        parser::core::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The tree is built by the
/// parser, inspected by the syntax checker and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Attaches source line numbers to every node for error reporting.
pub mod ast;
/// Run options shared by the library entry points and the binary.
pub mod config;
/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// syntax checking or evaluating code. Each carries the line it refers to.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Wraps all of them in `Error` so whole-pipeline callers can use `?`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, checking, evaluation and value
/// representations, plus the line-at-a-time session used by interactive
/// front ends.
pub mod interpreter;

/// Tokenizes and parses a whole program, then runs the syntax checker if
/// `options` ask for it.
///
/// # Errors
/// The first lexer, parser or syntax error.
///
/// # Example
/// ```
/// use idk::{config::Options, parse_source};
///
/// assert!(parse_source("if 5\nprint 1\nend", &Options::default()).is_err());
/// assert!(parse_source("if 5\nprint 1\nend", &Options::unchecked()).is_ok());
/// ```
pub fn parse_source(source: &str, options: &Options) -> Result<Program, Error> {
    let lines = tokenize(source)?;
    let program = parse(&lines)?;
    if options.check_syntax {
        check_syntax(&program)?;
    }
    Ok(program)
}

/// Runs a whole program and returns its evaluated history.
///
/// This function parses (see [`parse_source`]) and evaluates all statements
/// of the source with a fresh [`Context`]. Printed output goes to `out`, one
/// line per `print`.
///
/// # Errors
/// The first error of any stage. Output printed before an evaluator error
/// has already been written to `out`.
///
/// # Examples
/// ```
/// use idk::{config::Options, run_source};
///
/// let mut out = Vec::new();
/// let history = run_source("x := 5\nprint x", &Options::default(), &mut out).unwrap();
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(String::from_utf8(out).unwrap(), "5\n");
///
/// // 'y' is never assigned.
/// let result = run_source("print y", &Options::default(), &mut Vec::new());
/// assert!(result.is_err());
/// ```
pub fn run_source(source: &str, options: &Options, out: &mut dyn Write) -> Result<Vec<Evaluated>, Error> {
    let program = parse_source(source, options)?;

    let mut context = Context::new();
    let history = context.evaluate(&program, out)?;
    Ok(history.to_vec())
}
