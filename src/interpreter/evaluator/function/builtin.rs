use std::io::Write;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
    util::num::usize_to_f64,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the array named by its first argument and the
/// evaluated values of the remaining arguments.
type BuiltinFn = fn(&mut Vec<f64>, &[f64]) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments, counting the array,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (the table entry),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A builtin's name, argument count and implementation.
        pub struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"  => { arity: 1, func: |array, _| Ok(array_length(array)) },
    "push" => { arity: 2, func: |array, args| { array_push(array, args[0]); Ok(0.0) } },
    "pop"  => { arity: 1, func: |array, _| array_pop(array) },
}

/// Finds the builtin called `name`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Returns the number of elements in `array`.
///
/// # Example
/// ```
/// use scrypt::interpreter::evaluator::function::builtin::array_length;
///
/// assert_eq!(array_length(&[4.0, 5.0]), 2.0);
/// ```
#[must_use]
pub fn array_length(array: &[f64]) -> f64 {
    usize_to_f64(array.len())
}

/// Removes and returns the last element of `array`.
///
/// # Errors
/// `RuntimeError::Underflow` if the array is empty.
///
/// # Example
/// ```
/// use scrypt::interpreter::evaluator::function::builtin::array_pop;
///
/// let mut values = vec![1.0, 2.0];
/// assert_eq!(array_pop(&mut values).unwrap(), 2.0);
/// assert_eq!(array_pop(&mut values).unwrap(), 1.0);
/// assert!(array_pop(&mut values).is_err());
/// ```
pub fn array_pop(array: &mut Vec<f64>) -> EvalResult<f64> {
    array.pop().ok_or(RuntimeError::Underflow)
}

/// Appends `value` to `array`.
pub fn array_push(array: &mut Vec<f64>, value: f64) {
    array.push(value);
}

impl<W: Write> Environment<W> {
    /// Runs a builtin.
    ///
    /// The first argument must be the bare name of a bound array; the other
    /// arguments are evaluated as ordinary expressions.
    ///
    /// # Errors
    /// - `RuntimeError::ArgumentCountMismatch` for the wrong number of
    ///   arguments.
    /// - `RuntimeError::NotAnArray` if the first argument does not name an
    ///   array.
    /// - Whatever the builtin itself raises, such as `Underflow`.
    pub(crate) fn call_builtin(&mut self, builtin: &BuiltinDef, args: &[Node]) -> EvalResult<f64> {
        if args.len() != builtin.arity {
            return Err(RuntimeError::ArgumentCountMismatch { name:     builtin.name.to_string(),
                                                             expected: builtin.arity,
                                                             found:    args.len(), });
        }

        let array_name = match &args[0] {
            Node::Variable(name) if self.array(name).is_some() => name,
            other => return Err(RuntimeError::NotAnArray { name: other.render_infix() }),
        };

        let rest = args[1..].iter()
                            .map(|arg| self.evaluate(arg))
                            .collect::<EvalResult<Vec<_>>>()?;

        let array = self.array_mut(array_name)
                        .ok_or_else(|| RuntimeError::NotAnArray { name: array_name.clone() })?;
        (builtin.func)(array, &rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(env: &mut Environment<Vec<u8>>, name: &str, args: Vec<Node>) -> EvalResult<f64> {
        env.eval_call(name, &args)
    }

    fn var(name: &str) -> Node {
        Node::Variable(name.to_string())
    }

    #[test]
    fn table_lists_every_builtin() {
        assert_eq!(BUILTIN_FUNCTIONS, ["len", "push", "pop"]);
        assert!(lookup("sqrt").is_none());
    }

    #[test]
    fn push_len_pop() {
        let mut env = Environment::with_output(Vec::new());
        env.bind_array("a", vec![1.0]);

        assert_eq!(call(&mut env, "push", vec![var("a"), Node::Number(2.0)]).unwrap(), 0.0);
        assert_eq!(call(&mut env, "len", vec![var("a")]).unwrap(), 2.0);
        assert_eq!(call(&mut env, "pop", vec![var("a")]).unwrap(), 2.0);
        assert_eq!(call(&mut env, "pop", vec![var("a")]).unwrap(), 1.0);
        assert!(matches!(call(&mut env, "pop", vec![var("a")]), Err(RuntimeError::Underflow)));
    }

    #[test]
    fn first_argument_must_name_an_array() {
        let mut env = Environment::with_output(Vec::new());
        env.set_variable("s", 1.0);
        assert!(matches!(call(&mut env, "len", vec![var("s")]),
                         Err(RuntimeError::NotAnArray { name }) if name == "s"));
        assert!(matches!(call(&mut env, "len", vec![Node::Number(1.0)]),
                         Err(RuntimeError::NotAnArray { .. })));
    }

    #[test]
    fn builtin_arity_is_checked() {
        let mut env = Environment::with_output(Vec::new());
        env.bind_array("a", vec![]);
        assert!(matches!(call(&mut env, "push", vec![var("a")]),
                         Err(RuntimeError::ArgumentCountMismatch { expected: 2, found: 1, .. })));
    }
}
