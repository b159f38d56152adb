use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
};

impl Session {
    /// Evaluates a prefix operator.
    ///
    /// Signs require a number; `not` negates truthiness and always yields a
    /// boolean.
    ///
    /// # Errors
    /// `TypeError` when a sign is applied to a boolean.
    ///
    /// # Example
    /// ```
    /// use normal::{Session, ast::UnaryOperator, interpreter::value::Value};
    ///
    /// let v = Session::eval_unary(UnaryOperator::Negate, &Value::Number(3.0)).unwrap();
    /// assert_eq!(v, Value::Number(-3.0));
    ///
    /// let v = Session::eval_unary(UnaryOperator::Not, &Value::Number(0.0)).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// assert!(Session::eval_unary(UnaryOperator::Negate, &Value::Boolean(true)).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number()?)),
            UnaryOperator::Plus => Ok(Value::Number(value.as_number()?)),
            UnaryOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
        }
    }
}
