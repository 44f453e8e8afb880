/// Core evaluation logic.
///
/// Contains the result type, the dispatch over node variants and the
/// evaluation of variables and assignments.
pub mod core;

/// Binary operator evaluation logic.
///
/// Type checks operands, then applies arithmetic, comparison and logical
/// operators.
pub mod binary;

/// Evaluation of blocks, `if`/`else` and `while`.
pub mod control_flow;

/// Function definition and call evaluation.
///
/// Handles user-defined functions, the array builtins and `print`.
pub mod function;

/// Array literal, lookup and element assignment evaluation.
pub mod array;
