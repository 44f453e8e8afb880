/// Parser state, cursor handling and the statement-at-a-time entry point.
///
/// Contains the `Parser` struct, the token cursor and the one-off scan for
/// unmatched closing parentheses.
pub mod core;

/// Binary expression parsing.
///
/// Implements the precedence ladder from assignment down to factors, and the
/// looser condition grammar used by `if` and `while`.
pub mod binary;

/// Primary expression parsing.
///
/// Literals, identifiers and everything an identifier can start (calls,
/// array lookups), parenthesized expressions and array literals.
pub mod primary;

/// Statement parsing.
///
/// Dispatches on the leading keyword: `if`, `while`, `print`, `def`,
/// `return`, array literal statements and expression statements.
pub mod statement;

/// Braced block parsing.
pub mod block;

/// Shared helpers for token expectations and comma-separated lists.
pub mod utils;
