use thiserror::Error;

/// A character sequence the lexer could not turn into a token.
///
/// Covers unknown characters (including a `!` that is not part of `!=`) and
/// malformed numbers such as `1.` or `1.2.3`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Syntax error on line {line} column {column}.")]
pub struct SyntaxError {
    /// The 1-based source line of the offending character.
    pub line:   usize,
    /// The 1-based column of the offending character.
    pub column: usize,
}
