use thiserror::Error;

use crate::interpreter::lexer::Token;

/// Represents all errors that can occur while parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token appeared where the grammar does not allow it. This also covers
    /// unmatched brackets, which surface as an unexpected `)` or as an
    /// unexpected `END`.
    #[error("Unexpected token at line {line} column {column}: {token}")]
    UnexpectedToken {
        /// The text of the token encountered.
        token:  String,
        /// The source line of the token.
        line:   usize,
        /// The source column of the token.
        column: usize,
    },
}

impl ParseError {
    /// Builds a [`ParseError::UnexpectedToken`] pointing at `token`.
    #[must_use]
    pub fn unexpected(token: &Token) -> Self {
        Self::UnexpectedToken { token:  token.text.clone(),
                                line:   token.line,
                                column: token.column, }
    }
}
