use thiserror::Error;

/// Lexical errors.
///
/// Raised by the lexer when the character stream contains something that can
/// not start a token, or a numeric literal that is malformed. These errors
/// carry the line and column of the offending character.
pub mod syntax_error;
/// Parsing errors.
///
/// Defines the errors that can occur while turning a token stream into a
/// tree. Every grammar violation is reported against the token that broke it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// names, type discipline violations, division by zero and array misuse.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any failure the pipeline can report, whichever stage raised it.
///
/// Drivers use [`Error::exit_code`] to turn a failure into the process exit
/// status: `1` for lexical errors, `2` for grammar and operator errors and `3`
/// for everything detected while evaluating.
#[derive(Debug, Error)]
pub enum Error {
    /// The lexer rejected the input.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The parser rejected the token stream.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the conventional process exit code for this error.
    ///
    /// ## Example
    /// ```
    /// use scrypt::error::{Error, RuntimeError, SyntaxError};
    ///
    /// let lexical: Error = SyntaxError { line: 1, column: 3 }.into();
    /// assert_eq!(lexical.exit_code(), 1);
    ///
    /// let runtime: Error = RuntimeError::DivisionByZero.into();
    /// assert_eq!(runtime.exit_code(), 3);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Syntax(_) => 1,
            Self::Parse(_) => 2,
            Self::Runtime(e) => e.exit_code(),
        }
    }
}
