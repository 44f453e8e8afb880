use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Applies an arithmetic operator to two doubles.
///
/// `%` is the floating point remainder, with the sign of the dividend.
///
/// # Errors
/// `RuntimeError::DivisionByZero` if `op` is `/` or `%` and `rhs` is zero.
///
/// # Example
/// ```
/// use scrypt::{ast::BinaryOperator, interpreter::evaluator::binary::arithmetic::eval_arithmetic};
///
/// assert_eq!(eval_arithmetic(BinaryOperator::Mod, -7.0, 3.0).unwrap(), -1.0);
/// assert!(eval_arithmetic(BinaryOperator::Div, 1.0, 0.0).is_err());
/// ```
pub fn eval_arithmetic(op: BinaryOperator, lhs: f64, rhs: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(lhs + rhs),
        BinaryOperator::Sub => Ok(lhs - rhs),
        BinaryOperator::Mul => Ok(lhs * rhs),
        BinaryOperator::Div | BinaryOperator::Mod if rhs == 0.0 => Err(RuntimeError::DivisionByZero),
        BinaryOperator::Div => Ok(lhs / rhs),
        BinaryOperator::Mod => Ok(lhs % rhs),
        _ => Err(RuntimeError::InvalidOperator { op: op.to_string() }),
    }
}
