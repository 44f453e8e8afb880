use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An operator symbol reached evaluation that no operator table knows.
    #[error("Runtime error: invalid operator '{op}'.")]
    InvalidOperator {
        /// The operator symbol.
        op: String,
    },
    /// Read of a variable that was never assigned.
    #[error("Runtime error: unknown identifier {name}")]
    UnknownIdentifier {
        /// The name of the variable.
        name: String,
    },
    /// Call of a name that is neither a defined function nor a builtin.
    #[error("Runtime error: unknown function {name}")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// `/` or `%` with a zero right-hand operand.
    #[error("Runtime error: division by zero.")]
    DivisionByZero,
    /// A boolean where a number was expected or the reverse, or an operand
    /// of `&`, `^` or `|` that is neither `0` nor `1`.
    #[error("Runtime error: invalid operand type.")]
    InvalidOperandType,
    /// An array index with a fractional part.
    #[error("Runtime error: index is not an integer.")]
    IntegerIndexRequired,
    /// An array index outside `[0, length)`.
    #[error("Runtime error: index out of bounds.")]
    OutOfBounds,
    /// Array syntax applied to a name that is not bound to an array.
    #[error("Runtime error: {name} is not an array.")]
    NotAnArray {
        /// The name (or rendered expression) that was used as an array.
        name: String,
    },
    /// `pop` on an empty array.
    #[error("Runtime error: underflow.")]
    Underflow,
    /// A call supplied the wrong number of arguments.
    #[error("Runtime error: {name} expects {expected} argument(s) but got {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// Writing `print` output failed.
    #[error("Runtime error: cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    /// Returns the conventional process exit code for this error.
    ///
    /// Operator errors share code `2` with grammar errors; everything else
    /// is `3`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidOperator { .. } => 2,
            _ => 3,
        }
    }
}
