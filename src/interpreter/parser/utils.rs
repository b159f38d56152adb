use crate::interpreter::lexer::{Keyword, Token};

/// Finds the first token at parenthesis depth zero that satisfies `stop`.
///
/// Tokens nested inside `( ... )` are never considered, so a `:` or `if`
/// inside a parenthesized sub-expression does not end the surrounding span.
/// Unbalanced closing parentheses are left for the compiler to report.
///
/// # Parameters
/// - `tokens`: The span to scan.
/// - `stop`: Predicate identifying the terminating token.
///
/// # Returns
/// The index of the terminating token, or `None` if the span has none.
pub(in crate::interpreter::parser) fn find_top_level(tokens: &[Token],
                                                     stop: impl Fn(&Token) -> bool)
                                                     -> Option<usize> {
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        if depth == 0 && stop(token) {
            return Some(index);
        }
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            _ => {},
        }
    }
    None
}

/// Returns the length of the span that ends at the `)` closing the
/// enclosing group, or the length of `tokens` when there is none.
///
/// Used to delimit an inline `if`: it runs until its surrounding
/// parentheses close, or to the end of the line.
pub(in crate::interpreter::parser) fn enclosing_scope_end(tokens: &[Token]) -> usize {
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen if depth == 0 => return index,
            Token::RParen => depth -= 1,
            _ => {},
        }
    }
    tokens.len()
}

/// Whether a token ends the value of a conditional branch.
pub(in crate::interpreter::parser) fn is_branch_boundary(token: &Token) -> bool {
    matches!(token,
             Token::Colon | Token::Keyword(Keyword::If | Keyword::Else))
}
