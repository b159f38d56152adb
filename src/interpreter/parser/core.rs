use crate::{
    ast::Statement,
    error::Diagnostic,
    interpreter::{lexer::tokenize, parser::statement::parse_statement},
};

/// Result type used by the lexer and parser.
pub type ParseResult<T> = Result<T, Diagnostic>;

/// How many conditionals may enclose one another on a single line.
///
/// Conditionals are compiled and evaluated recursively, so the depth is
/// capped and deeper lines are rejected with a `SyntaxError`.
pub const MAX_CONDITIONAL_NESTING: usize = 64;

/// Lexes and parses one line of source.
///
/// This is the entry point for the front end: the line is tokenized in one
/// pass and the token slice is handed to [`parse_statement`]. Nested spans
/// are compiled from sub-slices of that one token vector; nothing is lexed
/// twice.
///
/// # Errors
/// Returns the first lexing or parsing diagnostic.
///
/// # Example
/// ```
/// use normal::{ast::Statement, interpreter::parser::core::parse_line};
///
/// assert!(matches!(parse_line("1 + 2").unwrap(), Statement::Expression(_)));
/// assert!(matches!(parse_line("   ").unwrap(), Statement::Empty));
/// assert!(parse_line("else : 1").is_err());
/// ```
pub fn parse_line(source: &str) -> ParseResult<Statement> {
    let tokens = tokenize(source)?;
    parse_statement(&tokens)
}
