use crate::{
    ast::{BinaryOperator, Conditional, Instruction, Program, UnaryOperator},
    error::Diagnostic,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
};

impl Session {
    /// Runs a postfix program on an explicit value stack.
    ///
    /// Literals push themselves, variables push their current value, and
    /// operators pop their operands and push the result. Nested conditionals
    /// are evaluated when reached and push the selected value.
    ///
    /// `+` and `-` accept a stack holding a single operand and treat it as
    /// unary plus or negation. This mirrors the lexer's sign folding, which
    /// can leave one sign in front of a lone operand.
    ///
    /// # Returns
    /// The single value left on the stack.
    ///
    /// # Errors
    /// - `VariableError` for an unknown variable.
    /// - `TypeError`/`MathError` from the operators.
    /// - `SyntaxError` if an operator lacks operands, a nested conditional has
    ///   no value, or the program does not leave exactly one value.
    ///
    /// # Example
    /// ```
    /// use normal::{
    ///     Session,
    ///     ast::{BinaryOperator, Instruction, Program},
    ///     interpreter::value::Value,
    /// };
    ///
    /// let session = Session::new();
    ///
    /// // A lone `-` negates its only operand.
    /// let program = Program::new(vec![Instruction::Literal(Value::Number(4.0)),
    ///                                 Instruction::Binary(BinaryOperator::Sub)]);
    /// assert_eq!(session.eval_program(&program).unwrap(), Value::Number(-4.0));
    ///
    /// // A lone `*` does not.
    /// let program = Program::new(vec![Instruction::Literal(Value::Number(4.0)),
    ///                                 Instruction::Binary(BinaryOperator::Mul)]);
    /// assert!(session.eval_program(&program).is_err());
    /// ```
    pub fn eval_program(&self, program: &Program) -> EvalResult<Value> {
        let mut stack: Vec<Value> = Vec::with_capacity(program.instructions.len());

        for instruction in &program.instructions {
            match instruction {
                Instruction::Literal(value) => stack.push(*value),
                Instruction::Load(name) => stack.push(self.symbols.lookup(name)?),
                Instruction::Unary(op) => {
                    let operand = stack.pop().ok_or_else(|| {
                                                  Diagnostic::syntax(format!("Too few operands to perform {}, got 0/1",
                                                                             op.action()))
                                              })?;
                    stack.push(Self::eval_unary(*op, &operand)?);
                },
                Instruction::Binary(op) => {
                    let result = Self::apply_binary(*op, &mut stack)?;
                    stack.push(result);
                },
                Instruction::Conditional(conditional) => {
                    let value = self.eval_conditional(conditional)?.ok_or_else(|| {
                                    Diagnostic::syntax("Conditional expression produced no value")
                                })?;
                    stack.push(value);
                },
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            [] => Err(Diagnostic::syntax("Expression produced no value")),
            values => {
                Err(Diagnostic::syntax(format!("Expected a single result, got {} values",
                                               values.len())))
            },
        }
    }

    /// Evaluates a conditional lazily, top to bottom.
    ///
    /// Only the conditions up to the first truthy one are evaluated, and only
    /// the chosen value.
    ///
    /// # Returns
    /// - `Some(value)` of the first truthy branch, or of the default.
    /// - `None` if no branch matches and there is no default.
    ///
    /// # Example
    /// ```
    /// use normal::{Session, interpreter::value::Value};
    ///
    /// let mut session = Session::new();
    ///
    /// assert_eq!(session.execute("if 1 > 2 : 10").unwrap(), None);
    /// assert_eq!(session.execute("if 1 > 2 : 10 : 20").unwrap(),
    ///            Some(Value::Number(20.0)));
    /// ```
    pub fn eval_conditional(&self, conditional: &Conditional) -> EvalResult<Option<Value>> {
        for branch in &conditional.branches {
            if self.eval_program(&branch.condition)?.is_truthy() {
                return self.eval_program(&branch.value).map(Some);
            }
        }

        conditional.default
                   .as_ref()
                   .map(|default| self.eval_program(default))
                   .transpose()
    }

    /// Pops the operands of `op` and computes its result.
    fn apply_binary(op: BinaryOperator, stack: &mut Vec<Value>) -> EvalResult<Value> {
        let right = stack.pop();
        let left = stack.pop();

        match (left, right) {
            (Some(left), Some(right)) => Self::eval_binary(op, &left, &right),
            (None, Some(operand)) if op == BinaryOperator::Add => Ok(operand),
            (None, Some(operand)) if op == BinaryOperator::Sub => {
                Self::eval_unary(UnaryOperator::Negate, &operand)
            },
            (_, right) => {
                Err(Diagnostic::syntax(format!("Too few operands to perform {}, got {}/2",
                                               op.action(),
                                               usize::from(right.is_some()))))
            },
        }
    }
}
