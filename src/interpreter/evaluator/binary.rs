/// Operand type checks and dispatch by operator family.
pub mod core;

/// `+ - * / %` on doubles.
pub mod arithmetic;

/// `< > <= >= == !=`, producing `1` or `0`.
pub mod comparison;

/// The integer-style logical operators `& ^ |`.
pub mod logic;
