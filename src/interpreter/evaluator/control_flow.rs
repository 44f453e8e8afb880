use std::io::Write;

use tracing::trace;

use crate::{
    ast::Node,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

/// A value is truthy when it is not zero.
#[must_use]
pub fn is_truthy(value: f64) -> bool {
    value != 0.0
}

impl<W: Write> Environment<W> {
    /// Evaluates statements in order and returns the value of the last one.
    ///
    /// `return` does not leave the block early; statements after it still
    /// run and the last one decides the value.
    pub(crate) fn eval_block(&mut self, statements: &[Node]) -> EvalResult<f64> {
        let mut result = 0.0;
        for statement in statements {
            result = self.evaluate(statement)?;
        }
        Ok(result)
    }

    pub(crate) fn eval_if(&mut self,
                          condition: &Node,
                          then_block: &Node,
                          else_node: Option<&Node>)
                          -> EvalResult<f64> {
        if is_truthy(self.evaluate(condition)?) {
            self.evaluate(then_block)
        } else if let Some(else_node) = else_node {
            self.evaluate(else_node)
        } else {
            Ok(0.0)
        }
    }

    pub(crate) fn eval_else(&mut self, nested_if: Option<&Node>, block: Option<&Node>) -> EvalResult<f64> {
        match (nested_if, block) {
            (Some(nested_if), _) => self.evaluate(nested_if),
            (None, Some(block)) => self.evaluate(block),
            (None, None) => Ok(0.0),
        }
    }

    /// Runs `block` for as long as `condition` is truthy.
    ///
    /// Returns the value of the last completed iteration, or `0` if the body
    /// never ran.
    pub(crate) fn eval_while(&mut self, condition: &Node, block: &Node) -> EvalResult<f64> {
        let mut result = 0.0;
        let mut iteration = 0usize;
        while is_truthy(self.evaluate(condition)?) {
            trace!(iteration, "while iteration");
            result = self.evaluate(block)?;
            iteration += 1;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{environment::Environment, lexer::lex, parser::core::Parser};

    fn run(source: &str) -> f64 {
        let mut env = Environment::with_output(Vec::new());
        let mut parser = Parser::new(lex(source).unwrap());
        let mut last = 0.0;
        while let Some(node) = parser.parse_next().unwrap() {
            last = env.evaluate(&node).unwrap();
        }
        last
    }

    #[test]
    fn while_counts_up() {
        assert_eq!(run("x = 0; while (x < 3) { x = x + 1; } x"), 3.0);
    }

    #[test]
    fn if_without_else_yields_zero() {
        assert_eq!(run("if 0 { 5 }"), 0.0);
        assert_eq!(run("if 2 { 5 }"), 5.0);
    }

    #[test]
    fn else_if_picks_first_match() {
        assert_eq!(run("x = 2; if x == 1 { 10 } else if x == 2 { 20 } else { 30 }"), 20.0);
        assert_eq!(run("x = 9; if x == 1 { 10 } else if x == 2 { 20 } else { 30 }"), 30.0);
    }

    #[test]
    fn return_does_not_stop_the_block() {
        assert_eq!(run("def f() { return 1; 2 } f()"), 2.0);
    }
}
