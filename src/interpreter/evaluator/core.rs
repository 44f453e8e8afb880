use std::io::Write;

use crate::{ast::Node, error::RuntimeError, interpreter::environment::Environment};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The name that reads as `0` when nothing is bound to it.
pub const NULL_NAME: &str = "null";

impl<W: Write> Environment<W> {
    /// Evaluates a node and returns its value.
    ///
    /// This is the main entry point for evaluation. Booleans evaluate to `1`
    /// or `0`; statements with no natural value (definitions, array
    /// bindings) evaluate to `0`.
    ///
    /// Side effects of a statement that fails halfway, such as an array
    /// element already stored, are kept.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised anywhere in the tree.
    ///
    /// # Example
    /// ```
    /// use scrypt::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::environment::Environment,
    /// };
    ///
    /// let mut env = Environment::with_output(Vec::new());
    /// let node = Node::binary(BinaryOperator::Mul, Node::Number(6.0), Node::Number(7.0));
    ///
    /// assert_eq!(env.evaluate(&node).unwrap(), 42.0);
    /// ```
    pub fn evaluate(&mut self, node: &Node) -> EvalResult<f64> {
        match node {
            Node::Number(value) => Ok(*value),
            Node::Boolean(value) => Ok(if *value { 1.0 } else { 0.0 }),
            Node::Variable(name) => self.eval_variable(name),
            Node::Assignment { name, value } => self.eval_assignment(name, value),
            Node::BinaryOp { op, left, right } => self.eval_binary_op(*op, left, right),
            Node::Block(statements) => self.eval_block(statements),
            Node::BracedBlock(block) => self.evaluate(block),
            Node::If { condition,
                       then_block,
                       else_node, } => self.eval_if(condition, then_block, else_node.as_deref()),
            Node::Else { nested_if, block } => self.eval_else(nested_if.as_deref(), block.as_deref()),
            Node::While { condition, block } => self.eval_while(condition, block),
            Node::Print(expr) => self.eval_print(expr),
            Node::FunctionDef(def) => Ok(self.define_function(def)),
            Node::Return(expr) => expr.as_deref().map_or(Ok(0.0), |expr| self.evaluate(expr)),
            Node::FunctionCall { name, args } => self.eval_call(name, args),
            Node::ArrayLiteral(elements) => self.eval_elements(elements).map(|_| 0.0),
            Node::ArrayLookup { name, index } => self.eval_array_lookup(name, index),
            Node::ArrayAssign { name, index, value } => self.eval_array_assign(name, index, value),
        }
    }

    /// Reads a scalar from the current scope.
    ///
    /// An unbound `null` reads as `0`, and so does the name of a defined
    /// function.
    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        if let Some(value) = self.variable(name) {
            return Ok(value);
        }
        if name == NULL_NAME || self.functions.contains_key(name) {
            return Ok(0.0);
        }
        Err(RuntimeError::UnknownIdentifier { name: name.to_string() })
    }

    /// Binds the value of `value` to `name`.
    ///
    /// Array literals and bare names of arrays bind an array (a copy, in the
    /// second case) and evaluate to `0`. Everything else binds a scalar in
    /// the current scope and evaluates to that scalar.
    fn eval_assignment(&mut self, name: &str, value: &Node) -> EvalResult<f64> {
        if let Node::ArrayLiteral(elements) = value {
            let values = self.eval_elements(elements)?;
            self.bind_array(name, values);
            return Ok(0.0);
        }
        if let Node::Variable(source) = value
           && self.variable(source).is_none()
           && let Some(values) = self.array(source).map(<[f64]>::to_vec)
        {
            self.bind_array(name, values);
            return Ok(0.0);
        }

        let result = self.evaluate(value)?;
        self.set_variable(name, result);
        Ok(result)
    }
}

/// Evaluates `node` against `env`.
///
/// Free-function form of [`Environment::evaluate`].
///
/// # Errors
/// Returns the first [`RuntimeError`] raised while evaluating.
pub fn evaluate<W: Write>(node: &Node, env: &mut Environment<W>) -> EvalResult<f64> {
    env.evaluate(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Node {
        Node::Variable(name.to_string())
    }

    fn assign(name: &str, value: Node) -> Node {
        Node::Assignment { name:  name.to_string(),
                           value: Box::new(value), }
    }

    #[test]
    fn assignment_then_read() {
        let mut env = Environment::with_output(Vec::new());
        assert_eq!(env.evaluate(&assign("x", Node::Number(5.0))).unwrap(), 5.0);
        assert_eq!(env.evaluate(&var("x")).unwrap(), 5.0);
    }

    #[test]
    fn unbound_reads_fail_except_null() {
        let mut env = Environment::with_output(Vec::new());
        assert_eq!(env.evaluate(&var("null")).unwrap(), 0.0);
        assert!(matches!(env.evaluate(&var("y")),
                         Err(RuntimeError::UnknownIdentifier { name }) if name == "y"));
    }

    #[test]
    fn assigning_an_array_name_copies_the_array() {
        let mut env = Environment::with_output(Vec::new());
        env.evaluate(&assign("a", Node::ArrayLiteral(vec![Node::Number(1.0), Node::Number(2.0)])))
           .unwrap();
        assert_eq!(env.evaluate(&assign("b", var("a"))).unwrap(), 0.0);

        env.array_mut("a").unwrap().push(3.0);
        assert_eq!(env.array("a").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(env.array("b").unwrap(), [1.0, 2.0]);
        assert_eq!(env.global("b"), None);
    }

    #[test]
    fn free_function_matches_method() {
        let mut env = Environment::with_output(Vec::new());
        assert_eq!(evaluate(&Node::Boolean(true), &mut env).unwrap(), 1.0);
    }
}
