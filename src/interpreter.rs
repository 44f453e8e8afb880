/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw source and produces a flat stream of tokens, each
/// carrying its kind, exact text and 1-based line and column. Every stream
/// ends with a single `End` sentinel.
///
/// # Responsibilities
/// - Converts the input into tokens with source positions.
/// - Reports invalid characters and malformed numbers as syntax errors.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser walks the token stream with a forward-only cursor and hands
/// out one top-level statement at a time. Expressions go through a
/// precedence ladder; statements are dispatched on their leading keyword.
///
/// # Responsibilities
/// - Converts tokens into [`Node`](crate::ast::Node) trees.
/// - Tells calls, array accesses and variable reads apart by lookahead.
/// - Reports the first token that violates the grammar.
pub mod parser;
/// The environment module holds the runtime state of a program.
///
/// Scalar variables, user-defined functions with their local tables, arrays
/// and the output sink of `print` live here for the length of a run.
pub mod environment;
/// The evaluator module executes AST nodes against an environment.
///
/// Every node evaluates to a double. Booleans are `1` and `0`, and statements
/// without a natural value produce `0`.
///
/// # Responsibilities
/// - Applies operators with their type checks.
/// - Runs control flow, function calls and array operations.
/// - Reports runtime errors such as division by zero or bad indices.
pub mod evaluator;
