/// Diagnostics.
///
/// Defines the single error type returned by lexing, parsing and evaluation.
/// A diagnostic carries a kind (`SyntaxError`, `TypeError`, `MathError` or
/// `VariableError`) and a human readable reason.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticKind};
