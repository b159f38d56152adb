use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::Mutability,
    error::Diagnostic,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A declared binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    /// The current value.
    pub value:      Value,
    /// Whether `is now be` may replace the value.
    pub mutability: Mutability,
}

/// Maps variable names to their bindings.
///
/// One table belongs to one session. It is created empty, changed in place by
/// declarations and updates, and dropped with its session. A name maps to at
/// most one [`Variable`]; there is no shadowing and no removal.
///
/// # Example
/// ```
/// use normal::{
///     ast::Mutability,
///     interpreter::{symbol_table::SymbolTable, value::Value},
/// };
///
/// let mut table = SymbolTable::new();
/// table.declare("x", Value::Number(5.0), Mutability::Mutable).unwrap();
/// table.update("x", Value::Number(6.0)).unwrap();
///
/// assert_eq!(table.lookup("x").unwrap(), Value::Number(6.0));
/// assert!(table.declare("x", Value::Number(1.0), Mutability::Mutable).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: HashMap<String, Variable>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the binding for `name`, if declared.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Returns the current value of `name`.
    ///
    /// # Errors
    /// `VariableError` if the name has not been declared.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.get(name)
            .map(|variable| variable.value)
            .ok_or_else(|| Diagnostic::variable(format!("Unknown variable '{name}'")))
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Creates a new binding.
    ///
    /// # Errors
    /// `VariableError` if the name is already declared, regardless of the
    /// existing binding's mutability.
    pub fn declare(&mut self, name: &str, value: Value, mutability: Mutability) -> EvalResult<()> {
        self.check_declarable(name)?;

        debug!(name, %value, ?mutability, "declared variable");
        self.variables
            .insert(name.to_string(), Variable { value, mutability });
        Ok(())
    }

    /// Fails if `name` is taken.
    ///
    /// Declarations call this before evaluating their initializer so that a
    /// redeclaration is reported without running the right-hand side.
    ///
    /// # Errors
    /// `VariableError` if the name is already declared.
    pub fn check_declarable(&self, name: &str) -> EvalResult<()> {
        if self.contains(name) {
            return Err(Diagnostic::variable(format!("Variable '{name}' is already declared")));
        }
        Ok(())
    }

    /// Replaces the value of an existing mutable binding.
    ///
    /// # Errors
    /// `VariableError` if the name is undeclared or was declared `constant`.
    pub fn update(&mut self, name: &str, value: Value) -> EvalResult<()> {
        self.check_updatable(name)?;
        if let Some(variable) = self.variables.get_mut(name) {
            variable.value = value;
        }

        debug!(name, %value, "updated variable");
        Ok(())
    }

    /// Fails unless `name` is a declared, mutable binding.
    ///
    /// # Errors
    /// `VariableError` if the name is undeclared or constant.
    pub fn check_updatable(&self, name: &str) -> EvalResult<()> {
        match self.get(name) {
            None => Err(Diagnostic::variable(format!("Variable '{name}' is not declared"))),
            Some(variable) if variable.mutability == Mutability::Constant => {
                Err(Diagnostic::variable(format!("Cannot change constant '{name}'")))
            },
            Some(_) => Ok(()),
        }
    }

    /// Number of declared bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
