use std::{
    collections::HashMap,
    io::{self, Write},
    rc::Rc,
};

use crate::ast::FunctionDef;

/// A registered user-defined function and its local variable table.
///
/// Functions do not get a fresh frame per call: every call of the same
/// function reads and writes this one table, so a recursive call overwrites
/// the locals of the call that made it.
#[derive(Debug, Clone)]
pub struct FunctionFrame {
    /// The definition as parsed.
    pub definition: Rc<FunctionDef>,
    /// Parameters and locals. Seeded with a copy of the globals when the
    /// definition is parsed, and again each time it is evaluated.
    pub locals:     HashMap<String, f64>,
    /// Set once the function has been called at least once.
    pub called:     bool,
}

/// Stores the runtime state of one program run.
///
/// This struct holds the three tables evaluation mutates (scalar variables,
/// function definitions and arrays) plus the sink that `print` writes to.
///
/// ## Usage
///
/// `Environment` is created once and passed by exclusive reference to every
/// evaluation, so bindings made by one statement are visible to the next.
/// Tests and embedders capture output with [`Environment::with_output`].
pub struct Environment<W: Write = io::Stdout> {
    /// Global scalar bindings.
    pub(crate) variables: HashMap<String, f64>,
    /// User-defined functions by name.
    pub(crate) functions: HashMap<String, FunctionFrame>,
    /// Array bindings by name. Arrays are always global.
    pub(crate) arrays:    HashMap<String, Vec<f64>>,
    /// The function whose local table is in scope, if a call is running.
    pub(crate) active:    Option<String>,
    /// Where `print` output goes.
    pub(crate) output:    W,
}

impl Environment {
    /// Creates an empty environment that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Environment<W> {
    /// Creates an empty environment that prints to `output`.
    ///
    /// ## Example
    /// ```
    /// use scrypt::interpreter::environment::Environment;
    ///
    /// let env = Environment::with_output(Vec::new());
    /// assert!(env.output().is_empty());
    /// ```
    pub fn with_output(output: W) -> Self {
        Self { variables: HashMap::new(),
               functions: HashMap::new(),
               arrays: HashMap::new(),
               active: None,
               output }
    }

    /// Looks up a scalar in the current scope: the running function's locals
    /// during a call, the globals otherwise.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.scope().get(name).copied()
    }

    /// Binds a scalar in the current scope.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.scope_mut().insert(name.to_string(), value);
    }

    /// Looks up a global scalar regardless of the current scope.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns the elements of the named array.
    #[must_use]
    pub fn array(&self, name: &str) -> Option<&[f64]> {
        self.arrays.get(name).map(Vec::as_slice)
    }

    /// Returns the named array for in-place mutation.
    pub fn array_mut(&mut self, name: &str) -> Option<&mut Vec<f64>> {
        self.arrays.get_mut(name)
    }

    /// Binds `values` as the array `name`, replacing any previous array.
    pub fn bind_array(&mut self, name: &str, values: Vec<f64>) {
        self.arrays.insert(name.to_string(), values);
    }

    /// Returns the registered function `name`.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionFrame> {
        self.functions.get(name)
    }

    /// Names of every registered function.
    ///
    /// Line-at-a-time drivers hand these to
    /// [`Parser::with_functions`](crate::interpreter::parser::core::Parser::with_functions)
    /// so that calls keep parsing after the line that defined them.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// The sink `print` writes to.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the environment and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn scope(&self) -> &HashMap<String, f64> {
        self.active
            .as_ref()
            .and_then(|name| self.functions.get(name))
            .map_or(&self.variables, |frame| &frame.locals)
    }

    fn scope_mut(&mut self) -> &mut HashMap<String, f64> {
        match self.active.as_ref().and_then(|name| self.functions.get_mut(name)) {
            Some(frame) => &mut frame.locals,
            None => &mut self.variables,
        }
    }
}
