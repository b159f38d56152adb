/// Parser entry point and shared result type.
pub mod core;

/// Conditional parsing.
///
/// Splits `if <cond> : <value> ... : <default>` into branches, tracking
/// parenthesis depth so nested separators stay inside their span.
pub mod conditional;

/// Operator-precedence compilation.
///
/// Converts infix expression spans into postfix programs with the
/// shunting-yard algorithm.
pub mod shunting_yard;

/// Statement dispatch.
///
/// Recognizes declarations, updates, conditionals and plain expressions from
/// the leading tokens of a line.
pub mod statement;

/// Span scanning helpers shared by the parser modules.
mod utils;
