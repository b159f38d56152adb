use thiserror::Error;

/// The category of a [`Diagnostic`].
///
/// Every failure the engine can report falls into exactly one of these kinds.
/// The `Display` form is the name printed in front of the reason, e.g.
/// `MathError: Cannot divide 5 by 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DiagnosticKind {
    /// Malformed token stream: unbalanced parentheses, missing keywords,
    /// wrong operand counts or invalid literals.
    #[error("SyntaxError")]
    Syntax,
    /// An operand of the wrong kind was handed to an operator.
    #[error("TypeError")]
    Type,
    /// An arithmetic operation without a defined result.
    #[error("MathError")]
    Math,
    /// Undeclared lookups, redeclarations and forbidden updates.
    #[error("VariableError")]
    Variable,
}

/// A structured error result returned in place of a value.
///
/// Diagnostics are plain data: the engine never panics on bad input, it
/// returns one of these and the caller decides what to do with it. The
/// script driver prints it and moves on to the next line.
///
/// # Example
/// ```
/// use normal::error::{Diagnostic, DiagnosticKind};
///
/// let diagnostic = Diagnostic::math("Cannot divide 5 by 0");
///
/// assert_eq!(diagnostic.kind, DiagnosticKind::Math);
/// assert_eq!(diagnostic.to_string(), "MathError: Cannot divide 5 by 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {reason}")]
pub struct Diagnostic {
    /// What went wrong, broadly.
    pub kind:   DiagnosticKind,
    /// Human readable details.
    pub reason: String,
}

impl Diagnostic {
    /// Creates a diagnostic of the given kind.
    #[must_use]
    pub fn new(kind: DiagnosticKind, reason: impl Into<String>) -> Self {
        Self { kind,
               reason: reason.into() }
    }

    /// Shorthand for a [`DiagnosticKind::Syntax`] diagnostic.
    #[must_use]
    pub fn syntax(reason: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Syntax, reason)
    }

    /// Shorthand for a [`DiagnosticKind::Type`] diagnostic.
    #[must_use]
    pub fn type_error(reason: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Type, reason)
    }

    /// Shorthand for a [`DiagnosticKind::Math`] diagnostic.
    #[must_use]
    pub fn math(reason: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Math, reason)
    }

    /// Shorthand for a [`DiagnosticKind::Variable`] diagnostic.
    #[must_use]
    pub fn variable(reason: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Variable, reason)
    }
}
