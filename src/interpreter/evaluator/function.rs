/// Registration of definitions and evaluation of calls.
///
/// Resolves a call to a user-defined function first and to a builtin
/// second, binds arguments and runs the body in the function's scope.
pub mod core;

/// Built-in array functions.
///
/// `len`, `push` and `pop`, plus the array utilities behind them.
pub mod builtin;

/// The `print` statement.
///
/// Writes a value to the environment's output sink.
pub mod print;
