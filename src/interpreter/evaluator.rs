/// Binary operator evaluation logic.
///
/// Arithmetic, ordering and equality comparisons, and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix signs and logical `not`.
pub mod unary;

/// Core evaluation types and the interpreter session.
///
/// Contains the result aliases, the `Session` that owns the symbol table,
/// and the line and script entry points.
pub mod core;

/// The postfix stack machine.
///
/// Executes compiled programs and nested conditionals.
pub mod postfix;

/// Statement evaluation.
///
/// Applies declarations and updates to the symbol table and evaluates
/// conditional and expression statements.
pub mod statement;
