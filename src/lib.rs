//! # scrypt
//!
//! scrypt is a small imperative scripting language written in Rust.
//! It lexes, parses and evaluates programs with numbers, booleans,
//! variables, `if`/`else`, `while`, user-defined functions and
//! one-dimensional arrays.

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

use std::io::Write;

use crate::interpreter::{environment::Environment, lexer::lex, parser::core::Parser};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents statements and
/// expressions as a tree, the binary operators, and the rendering of a tree
/// back into fully parenthesized infix text.
///
/// # Responsibilities
/// - Defines one node variant per language construct.
/// - Renders nodes for echoing and debugging.
pub mod ast;
/// Provides the error types of every phase.
///
/// Lexing, parsing and evaluation each have their own error type, and the
/// umbrella [`error::Error`] carries the process exit code of each.
pub mod error;
/// Orchestrates the process of running a program.
///
/// This module ties together the lexer, the parser, the runtime environment
/// and the evaluator.
pub mod interpreter;
/// Numeric formatting and conversion helpers.
pub mod util;

/// Runs every statement of `source` against `env` and returns the value of
/// the last one, or `0` for a program without statements.
///
/// Statements are parsed and evaluated one at a time, so the effects of the
/// statements before a failing one stay in `env`. Every function a statement
/// defines is registered once that statement is parsed, before it runs.
///
/// # Errors
/// Returns the first lexical, parse or runtime error.
///
/// # Examples
/// ```
/// use scrypt::{interpreter::environment::Environment, run_source};
///
/// let mut env = Environment::with_output(Vec::new());
///
/// assert_eq!(run_source("x = 5; x + 1", &mut env).unwrap(), 6.0);
/// assert_eq!(run_source("print x * 2;", &mut env).unwrap(), 10.0);
/// assert_eq!(env.output(), b"10\n");
///
/// // `y` was never assigned.
/// assert!(run_source("y + 1", &mut env).is_err());
/// ```
pub fn run_source<W: Write>(source: &str, env: &mut Environment<W>) -> Result<f64, error::Error> {
    let tokens = lex(source)?;
    let mut parser = Parser::with_functions(tokens, env.function_names());

    let mut result = 0.0;
    while let Some(statement) = parser.parse_next()? {
        for def in parser.take_definitions() {
            env.register_function(def);
        }
        result = env.evaluate(&statement)?;
    }
    Ok(result)
}
