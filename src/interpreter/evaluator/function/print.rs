use std::io::Write;

use crate::{
    ast::Node,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
    util::num::{format_array, format_number},
};

impl<W: Write> Environment<W> {
    /// Evaluates a `print` statement and returns the printed value.
    ///
    /// Boolean-shaped expressions print as `true` or `false`, and the bare
    /// name of an array prints all its elements. Every print ends with a
    /// newline.
    ///
    /// # Errors
    /// Any error from evaluating `expr`, or `RuntimeError::Output` if the
    /// sink can not be written.
    ///
    /// # Example
    /// ```
    /// use scrypt::{ast::Node, interpreter::environment::Environment};
    ///
    /// let mut env = Environment::with_output(Vec::new());
    /// env.evaluate(&Node::Print(Box::new(Node::Number(2.5)))).unwrap();
    ///
    /// assert_eq!(env.output(), b"2.5\n");
    /// ```
    pub(crate) fn eval_print(&mut self, expr: &Node) -> EvalResult<f64> {
        if let Node::Variable(name) = expr
           && self.variable(name).is_none()
           && let Some(values) = self.array(name)
        {
            let text = format_array(values);
            writeln!(self.output, "{text}")?;
            return Ok(0.0);
        }

        let value = self.evaluate(expr)?;
        if expr.is_boolean_shaped() {
            writeln!(self.output, "{}", value != 0.0)?;
        } else {
            writeln!(self.output, "{}", format_number(value))?;
        }
        Ok(value)
    }
}
