use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{i64_to_f64, truncate_to_i64},
};

/// Evaluates `&`, `^` or `|` on two truth values.
///
/// Both operands must be exactly `0` or `1`. They are truncated to integers
/// and combined bitwise.
///
/// # Errors
/// `RuntimeError::InvalidOperandType` if either operand is not `0` or `1`.
///
/// # Example
/// ```
/// use scrypt::{ast::BinaryOperator, interpreter::evaluator::binary::logic::eval_logic};
///
/// assert_eq!(eval_logic(BinaryOperator::Xor, 1.0, 0.0).unwrap(), 1.0);
/// assert!(eval_logic(BinaryOperator::And, 1.0, 2.0).is_err());
/// ```
pub fn eval_logic(op: BinaryOperator, lhs: f64, rhs: f64) -> EvalResult<f64> {
    if !is_truth_value(lhs) || !is_truth_value(rhs) {
        return Err(RuntimeError::InvalidOperandType);
    }

    let (a, b) = (truncate_to_i64(lhs), truncate_to_i64(rhs));
    let result = match op {
        BinaryOperator::And => a & b,
        BinaryOperator::Xor => a ^ b,
        BinaryOperator::Or => a | b,
        _ => return Err(RuntimeError::InvalidOperator { op: op.to_string() }),
    };
    Ok(i64_to_f64(result))
}

fn is_truth_value(value: f64) -> bool {
    value == 0.0 || value == 1.0
}
