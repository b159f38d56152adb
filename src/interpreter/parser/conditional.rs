use crate::{
    ast::{Branch, Conditional, Program},
    error::Diagnostic,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            core::{MAX_CONDITIONAL_NESTING, ParseResult},
            shunting_yard::compile_nested,
            utils::{find_top_level, is_branch_boundary},
        },
    },
};

/// Parses the body of a conditional, i.e. everything after the leading `if`.
///
/// Syntax:
/// ```text
///     if <condition> : <value>
///     ( [else] if <condition> : <value> )*
///     ( [else] : <default> )?
/// ```
/// A condition ends at the first top-level `:`. A value ends at the next
/// top-level `:`, `if` or `else`. Separators nested in parentheses are part of
/// the span, so `if a : (if b : 1 : 2) : 3` has one branch and a default.
///
/// # Parameters
/// - `tokens`: The span following the `if` keyword.
///
/// # Returns
/// The branches in source order and the optional default.
///
/// # Errors
/// - `SyntaxError` if a `:` is missing, a condition or value is empty,
///   `else` is followed by anything but `if` or `:`, or inline conditionals
///   nest deeper than [`MAX_CONDITIONAL_NESTING`].
/// - Propagates errors from compiling the sub-expressions.
///
/// # Example
/// ```
/// use normal::interpreter::{lexer::tokenize, parser::conditional::parse_conditional};
///
/// let tokens = tokenize("x > 3 : 1 if x > 1 : 2 : 0").unwrap();
/// let conditional = parse_conditional(&tokens).unwrap();
///
/// assert_eq!(conditional.branches.len(), 2);
/// assert!(conditional.default.is_some());
/// ```
pub fn parse_conditional(tokens: &[Token]) -> ParseResult<Conditional> {
    parse_nested_conditional(tokens, 1)
}

/// Parses a conditional that is the `depth`-th one enclosing its spans,
/// counting itself.
pub(in crate::interpreter::parser) fn parse_nested_conditional(tokens: &[Token],
                                                               depth: usize)
                                                               -> ParseResult<Conditional> {
    if depth > MAX_CONDITIONAL_NESTING {
        return Err(Diagnostic::syntax("Conditional nesting is too deep"));
    }

    let mut conditional = Conditional::default();
    let mut rest = tokens;

    loop {
        let colon = find_top_level(rest, |t| *t == Token::Colon).ok_or_else(|| {
                        Diagnostic::syntax("Expected ':' after if condition")
                    })?;
        let condition = compile_span(&rest[..colon], depth, "Expected a condition after 'if'")?;
        rest = &rest[colon + 1..];

        let end = find_top_level(rest, is_branch_boundary).unwrap_or(rest.len());
        let value = compile_span(&rest[..end], depth, "Expected a value after ':'")?;
        conditional.branches.push(Branch { condition, value });
        rest = &rest[end..];

        let had_else = rest.first().is_some_and(|t| t.is_keyword(Keyword::Else));
        if had_else {
            rest = &rest[1..];
        }

        match rest.first() {
            None if had_else => {
                return Err(Diagnostic::syntax("Expected 'if' or ':' after 'else'"));
            },
            None => break,
            Some(Token::Keyword(Keyword::If)) => rest = &rest[1..],
            Some(Token::Colon) => {
                conditional.default =
                    Some(compile_span(&rest[1..], depth, "Expected a default value after ':'")?);
                break;
            },
            Some(token) => {
                return Err(Diagnostic::syntax(format!("Expected 'if' or ':' after 'else', got '{token}'")));
            },
        }
    }

    Ok(conditional)
}

fn compile_span(tokens: &[Token], depth: usize, empty_message: &str) -> ParseResult<Program> {
    if tokens.is_empty() {
        return Err(Diagnostic::syntax(empty_message));
    }
    compile_nested(tokens, depth)
}
