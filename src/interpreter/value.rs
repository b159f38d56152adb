use crate::{
    error::Diagnostic,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_i64_exact,
};

/// Represents a runtime value in the interpreter.
///
/// The language knows exactly two kinds of values. Every operator pattern
/// matches on both operand kinds, so adding a kind here is a compile error
/// everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value. Integer and fractional literals share one
    /// representation; integral results print without a fractional part.
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators. Orders as `1`/`0`
    /// against numbers.
    Boolean(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// The lowercase kind name used in type diagnostics.
    ///
    /// # Example
    /// ```
    /// use normal::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(1.0).kind_name(), "number");
    /// assert_eq!(Value::Boolean(true).kind_name(), "boolean");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
        }
    }

    /// Returns the numeric payload, or a `TypeError` naming the offending
    /// kind.
    ///
    /// # Example
    /// ```
    /// use normal::{error::DiagnosticKind, interpreter::value::Value};
    ///
    /// assert_eq!(Value::Number(2.5).as_number().unwrap(), 2.5);
    ///
    /// let err = Value::Boolean(false).as_number().unwrap_err();
    /// assert_eq!(err.kind, DiagnosticKind::Type);
    /// assert_eq!(err.reason, "Expected number, got boolean");
    /// ```
    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Boolean(_) => {
                Err(Diagnostic::type_error(format!("Expected number, got {}", self.kind_name())))
            },
        }
    }

    /// Returns the value as a number for ordering comparisons.
    ///
    /// Booleans coerce to `1` and `0`.
    #[must_use]
    pub fn as_ordinal(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Boolean(b) => f64::from(u8::from(*b)),
        }
    }

    /// Whether the value selects a conditional branch.
    ///
    /// Booleans are taken as they are; numbers are truthy when non-zero.
    ///
    /// # Example
    /// ```
    /// use normal::interpreter::value::Value;
    ///
    /// assert!(Value::Boolean(true).is_truthy());
    /// assert!(Value::Number(-2.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Boolean(b) => *b,
        }
    }

    /// Returns `true` if the value is a [`Value::Number`] equal to zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(n) if *n == 0.0)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => match f64_to_i64_exact(*n) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
