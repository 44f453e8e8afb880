use crate::ast::BinaryOperator;

/// Compares two doubles, returning `1` for true and `0` for false.
///
/// Any operator that is not a comparison yields `0`.
///
/// # Example
/// ```
/// use scrypt::{ast::BinaryOperator, interpreter::evaluator::binary::comparison::eval_comparison};
///
/// assert_eq!(eval_comparison(BinaryOperator::LessEqual, 2.0, 2.0), 1.0);
/// assert_eq!(eval_comparison(BinaryOperator::NotEqual, 2.0, 2.0), 0.0);
/// ```
#[must_use]
pub fn eval_comparison(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
    let holds = match op {
        BinaryOperator::Less => lhs < rhs,
        BinaryOperator::Greater => lhs > rhs,
        BinaryOperator::LessEqual => lhs <= rhs,
        BinaryOperator::GreaterEqual => lhs >= rhs,
        BinaryOperator::Equal => lhs == rhs,
        BinaryOperator::NotEqual => lhs != rhs,
        _ => false,
    };
    if holds { 1.0 } else { 0.0 }
}
