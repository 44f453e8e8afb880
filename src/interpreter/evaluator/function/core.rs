use std::{io::Write, rc::Rc};

use tracing::debug;

use crate::{
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, FunctionFrame},
        evaluator::{core::EvalResult, function::builtin},
    },
};

impl<W: Write> Environment<W> {
    /// Adds `def` to the function table, replacing any function of the same
    /// name.
    ///
    /// This happens when the definition is parsed, so a function defined in
    /// a branch that never runs, or inside a body that is never called, can
    /// still be called. The local table starts as a copy of the globals.
    pub fn register_function(&mut self, def: FunctionDef) {
        debug!(function = %def.name, params = def.params.len(), "registering function");
        let frame = FunctionFrame { definition: Rc::new(def),
                                    locals:     self.variables.clone(),
                                    called:     false, };
        self.functions.insert(frame.definition.name.clone(), frame);
    }

    /// Evaluates a definition: re-seeds the function's local table with the
    /// current globals and returns `0`.
    ///
    /// A definition built by hand, which never passed through the parser,
    /// is registered here instead.
    pub(crate) fn define_function(&mut self, def: &FunctionDef) -> f64 {
        match self.functions.get_mut(&def.name) {
            Some(frame) => frame.locals.clone_from(&self.variables),
            None => self.register_function(def.clone()),
        }
        0.0
    }

    /// Evaluates a call.
    ///
    /// A user-defined function of that name wins over a builtin of the same
    /// name.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownFunction` if nothing of that name exists.
    /// - `RuntimeError::ArgumentCountMismatch` for the wrong number of
    ///   arguments.
    /// - Any error raised by an argument or by the body.
    pub(crate) fn eval_call(&mut self, name: &str, args: &[Node]) -> EvalResult<f64> {
        if self.functions.contains_key(name) {
            return self.call_user_function(name, args);
        }
        if let Some(builtin) = builtin::lookup(name) {
            return self.call_builtin(builtin, args);
        }
        Err(RuntimeError::UnknownFunction { name: name.to_string() })
    }

    /// Runs a user-defined function.
    ///
    /// Arguments are evaluated in the caller's scope and then written into
    /// the function's local table under the parameter names. The body runs
    /// with that table in scope, and the caller's scope is restored
    /// afterwards whether or not the body failed.
    ///
    /// Every call of a function shares the one table, so a nested call of
    /// the same function overwrites the parameters of the outer call.
    fn call_user_function(&mut self, name: &str, args: &[Node]) -> EvalResult<f64> {
        let definition = self.functions
                             .get(name)
                             .map(|frame| Rc::clone(&frame.definition))
                             .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?;

        if args.len() != definition.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_string(),
                                                             expected: definition.params.len(),
                                                             found:    args.len(), });
        }

        let values = args.iter()
                         .map(|arg| self.evaluate(arg))
                         .collect::<EvalResult<Vec<_>>>()?;

        debug!(function = name, args = ?values, "calling function");
        if let Some(frame) = self.functions.get_mut(name) {
            frame.called = true;
            for (param, value) in definition.params.iter().zip(values) {
                frame.locals.insert(param.clone(), value);
            }
        }

        let caller = self.active.replace(name.to_string());
        let result = self.evaluate(&definition.body);
        self.active = caller;
        result
    }
}
