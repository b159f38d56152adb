use crate::{
    ast::Statement,
    interpreter::evaluator::core::{ExecResult, Session},
};

impl Session {
    /// Evaluates a single parsed statement against the session's table.
    ///
    /// Declarations check the name before evaluating the initializer, and
    /// updates check that the binding exists and is mutable before
    /// evaluating the new value. A failing statement never changes the
    /// table.
    ///
    /// # Returns
    /// - `Some(Value)` for expressions and conditionals that select a value.
    /// - `None` for declarations, updates, empty lines, and conditionals
    ///   without a match or default.
    pub fn eval_statement(&mut self, statement: &Statement) -> ExecResult {
        match statement {
            Statement::Declaration { name,
                                     mutability,
                                     value, } => {
                self.symbols.check_declarable(name)?;
                let value = self.eval_program(value)?;
                self.symbols.declare(name, value, *mutability)?;
                Ok(None)
            },
            Statement::Update { name, value } => {
                self.symbols.check_updatable(name)?;
                let value = self.eval_program(value)?;
                self.symbols.update(name, value)?;
                Ok(None)
            },
            Statement::Conditional(conditional) => self.eval_conditional(conditional),
            Statement::Expression(program) => self.eval_program(program).map(Some),
            Statement::Empty => Ok(None),
        }
    }
}
