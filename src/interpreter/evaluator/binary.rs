use crate::{
    ast::BinaryOperator,
    error::Diagnostic,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        value::Value,
    },
};

impl Session {
    /// Evaluates a binary operation between two values.
    ///
    /// `+`, `-`, `*`, `/` and `^` require two numbers. Ordering comparisons
    /// treat booleans as `1` and `0`, so `true > false` and `true >= 1`.
    /// `==` and `!=` compare kind and value, so `1 == true` is `false`.
    /// `and` and `or` combine truthiness.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// - `TypeError` naming the kind of the first non-number operand of an
    ///   arithmetic operator.
    /// - `MathError` for division by zero or a non-real power.
    ///
    /// # Example
    /// ```
    /// use normal::{Session, ast::BinaryOperator, interpreter::value::Value};
    ///
    /// let result = Session::eval_binary(BinaryOperator::Add,
    ///                                   &Value::Number(3.0),
    ///                                   &Value::Number(4.0));
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    ///
    /// let result = Session::eval_binary(BinaryOperator::Equal,
    ///                                   &Value::Number(1.0),
    ///                                   &Value::Boolean(true));
    /// assert_eq!(result.unwrap(), Value::Boolean(false));
    ///
    /// let result = Session::eval_binary(BinaryOperator::GreaterEqual,
    ///                                   &Value::Boolean(true),
    ///                                   &Value::Number(1.0));
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Pow,
            Sub,
        };

        let result = match op {
            Add => Value::Number(left.as_number()? + right.as_number()?),
            Sub => Value::Number(left.as_number()? - right.as_number()?),
            Mul => Value::Number(left.as_number()? * right.as_number()?),
            Div => Self::eval_division(left, right)?,
            Pow => Self::eval_power(left, right)?,
            Equal => Value::Boolean(left == right),
            NotEqual => Value::Boolean(left != right),
            Greater => Value::Boolean(left.as_ordinal() > right.as_ordinal()),
            GreaterEqual => Value::Boolean(left.as_ordinal() >= right.as_ordinal()),
            Less => Value::Boolean(left.as_ordinal() < right.as_ordinal()),
            LessEqual => Value::Boolean(left.as_ordinal() <= right.as_ordinal()),
            And => Value::Boolean(left.is_truthy() && right.is_truthy()),
            Or => Value::Boolean(left.is_truthy() || right.is_truthy()),
        };

        Ok(result)
    }

    /// Divides two numbers.
    ///
    /// # Errors
    /// - `TypeError` if either operand is a boolean.
    /// - `MathError` if the divisor is zero.
    ///
    /// # Example
    /// ```
    /// use normal::{Session, error::DiagnosticKind, interpreter::value::Value};
    ///
    /// let err = Session::eval_division(&Value::Number(5.0), &Value::Number(0.0)).unwrap_err();
    /// assert_eq!(err.kind, DiagnosticKind::Math);
    /// assert_eq!(err.reason, "Cannot divide 5 by 0");
    /// ```
    pub fn eval_division(left: &Value, right: &Value) -> EvalResult<Value> {
        let l = left.as_number()?;
        let r = right.as_number()?;
        if right.is_zero() {
            return Err(Diagnostic::math(format!("Cannot divide {left} by 0")));
        }

        Ok(Value::Number(l / r))
    }

    /// Raises `left` to the power of `right`.
    ///
    /// A power without a real result, such as `(0 - 8) ^ 0.5`, is a
    /// `MathError`.
    pub fn eval_power(left: &Value, right: &Value) -> EvalResult<Value> {
        let l = left.as_number()?;
        let r = right.as_number()?;

        let power = l.powf(r);
        if power.is_nan() && !l.is_nan() && !r.is_nan() {
            return Err(Diagnostic::math(format!("{left} ^ {right} has no real result")));
        }

        Ok(Value::Number(power))
    }
}
