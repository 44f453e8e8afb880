use std::io::Write;

use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            binary::{arithmetic::eval_arithmetic, comparison::eval_comparison, logic::eval_logic},
            core::EvalResult,
        },
    },
};

impl<W: Write> Environment<W> {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated first, left to right. The type checks
    /// that follow look at the operand nodes, not at their values:
    /// - arithmetic rejects a boolean literal on either side;
    /// - comparison rejects a boolean literal compared with anything that
    ///   is not one;
    /// - the logical operators reject values other than `0` and `1`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand node.
    /// - `right`: Right operand node.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the result. Comparisons and logical
    /// operators produce `1` or `0`.
    ///
    /// # Example
    /// ```
    /// use scrypt::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// let mut env = Environment::with_output(Vec::new());
    /// let result = env.eval_binary_op(BinaryOperator::Less, &Node::Number(1.0), &Node::Number(2.0));
    ///
    /// assert_eq!(result.unwrap(), 1.0);
    /// ```
    pub fn eval_binary_op(&mut self, op: BinaryOperator, left: &Node, right: &Node) -> EvalResult<f64> {
        let lhs = self.evaluate(left)?;
        let rhs = self.evaluate(right)?;

        let left_is_bool = matches!(left, Node::Boolean(_));
        let right_is_bool = matches!(right, Node::Boolean(_));

        if op.is_arithmetic() {
            if left_is_bool || right_is_bool {
                return Err(RuntimeError::InvalidOperandType);
            }
            eval_arithmetic(op, lhs, rhs)
        } else if op.is_comparison() {
            if left_is_bool != right_is_bool {
                return Err(RuntimeError::InvalidOperandType);
            }
            Ok(eval_comparison(op, lhs, rhs))
        } else if op.is_logical() {
            eval_logic(op, lhs, rhs)
        } else {
            Err(RuntimeError::InvalidOperator { op: op.to_string() })
        }
    }
}
