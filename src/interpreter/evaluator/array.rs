use std::io::Write;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
    util::num::array_index,
};

impl<W: Write> Environment<W> {
    /// Evaluates each element of an array literal once, in order.
    pub(crate) fn eval_elements(&mut self, elements: &[Node]) -> EvalResult<Vec<f64>> {
        elements.iter().map(|element| self.evaluate(element)).collect()
    }

    /// Evaluates `name[index]`.
    ///
    /// A name bound only to a scalar behaves like a one-element array
    /// holding that scalar.
    ///
    /// # Errors
    /// - `RuntimeError::IntegerIndexRequired` for a fractional index.
    /// - `RuntimeError::OutOfBounds` for an index outside the array.
    /// - `RuntimeError::NotAnArray` if `name` is bound to nothing.
    pub(crate) fn eval_array_lookup(&mut self, name: &str, index: &Node) -> EvalResult<f64> {
        let position = self.evaluate(index)?;

        if let Some(values) = self.array(name) {
            let i = array_index(position, values.len())?;
            return Ok(values[i]);
        }
        if let Some(scalar) = self.variable(name) {
            array_index(position, 1)?;
            return Ok(scalar);
        }
        Err(RuntimeError::NotAnArray { name: name.to_string() })
    }

    /// Evaluates `name[index] = value` and returns the stored value.
    ///
    /// The index is checked before the value is evaluated, and again before
    /// the store in case evaluating the value resized the array.
    ///
    /// # Errors
    /// - `RuntimeError::NotAnArray` if `name` is not bound to an array.
    /// - `RuntimeError::IntegerIndexRequired` or `RuntimeError::OutOfBounds`
    ///   for a bad index.
    pub(crate) fn eval_array_assign(&mut self, name: &str, index: &Node, value: &Node) -> EvalResult<f64> {
        if self.array(name).is_none() {
            return Err(RuntimeError::NotAnArray { name: name.to_string() });
        }

        let position = self.evaluate(index)?;
        let len = self.array(name).map_or(0, <[f64]>::len);
        array_index(position, len)?;

        let result = self.evaluate(value)?;
        let values = self.array_mut(name)
                         .ok_or_else(|| RuntimeError::NotAnArray { name: name.to_string() })?;
        let i = array_index(position, values.len())?;
        values[i] = result;
        Ok(result)
    }
}
