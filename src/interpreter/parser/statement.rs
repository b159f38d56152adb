use crate::{
    ast::{Mutability, Statement},
    error::Diagnostic,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            conditional::parse_conditional,
            core::ParseResult,
            shunting_yard::compile_expression,
        },
    },
};

/// Parses a single line of tokens into a statement.
///
/// Dispatch happens on the first token:
/// - `variable` / `let`: a mutable declaration.
/// - `constant`: an immutable declaration.
/// - `if`: a conditional statement.
/// - `else`: always an error, there is no `if` for it to belong to.
/// - an identifier directly followed by a keyword: an update.
/// - anything else is compiled as an expression.
///
/// # Parameters
/// - `tokens`: The lexed line.
///
/// # Returns
/// The parsed [`Statement`]; [`Statement::Empty`] for a line without tokens.
///
/// # Example
/// ```
/// use normal::{
///     ast::{Mutability, Statement},
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("constant pi is 3.14").unwrap();
/// let Statement::Declaration { name, mutability, .. } = parse_statement(&tokens).unwrap() else {
///     panic!("expected a declaration");
/// };
///
/// assert_eq!(name, "pi");
/// assert_eq!(mutability, Mutability::Constant);
/// ```
pub fn parse_statement(tokens: &[Token]) -> ParseResult<Statement> {
    match tokens {
        [] => Ok(Statement::Empty),
        [Token::Keyword(keyword @ (Keyword::Variable | Keyword::Let)), rest @ ..] => {
            parse_declaration(*keyword, Mutability::Mutable, rest)
        },
        [Token::Keyword(Keyword::Constant), rest @ ..] => {
            parse_declaration(Keyword::Constant, Mutability::Constant, rest)
        },
        [Token::Keyword(Keyword::If), rest @ ..] => {
            Ok(Statement::Conditional(parse_conditional(rest)?))
        },
        [Token::Keyword(Keyword::Else), Token::Keyword(Keyword::If), ..] => {
            Err(Diagnostic::syntax("else if has no parent if"))
        },
        [Token::Keyword(Keyword::Else), ..] => Err(Diagnostic::syntax("else has no parent if")),
        [Token::Keyword(keyword), ..] => {
            Err(Diagnostic::syntax(format!("Unexpected keyword '{keyword}'")))
        },
        [Token::Identifier(name), Token::Keyword(_), ..] => parse_update(name, &tokens[1..]),
        _ => Ok(Statement::Expression(compile_expression(tokens)?)),
    }
}

/// Parses a declaration following its leading keyword.
///
/// Grammar: `name (is | be) <expression>`
///
/// # Errors
/// Returns a `SyntaxError` if the name, the `is`/`be` binder or the
/// expression is missing, or if the expression fails to compile.
fn parse_declaration(keyword: Keyword,
                     mutability: Mutability,
                     rest: &[Token])
                     -> ParseResult<Statement> {
    let name = match rest.first() {
        Some(Token::Identifier(name)) => name.clone(),
        Some(token) => {
            return Err(Diagnostic::syntax(format!("Expected a variable name after '{keyword}', got '{token}'")));
        },
        None => {
            return Err(Diagnostic::syntax(format!("Expected a variable name after '{keyword}'")));
        },
    };

    match rest.get(1) {
        Some(Token::Keyword(Keyword::Is | Keyword::Be)) => {},
        _ => return Err(Diagnostic::syntax(format!("Expected 'is' or 'be' after '{name}'"))),
    }

    let body = &rest[2..];
    if body.is_empty() {
        return Err(Diagnostic::syntax(format!("Expected a value for '{name}'")));
    }

    Ok(Statement::Declaration { name,
                                mutability,
                                value: compile_expression(body)? })
}

/// Parses an update, `name is now be <expression>`.
///
/// # Parameters
/// - `name`: The identifier at the start of the line.
/// - `rest`: The tokens after the identifier.
fn parse_update(name: &str, rest: &[Token]) -> ParseResult<Statement> {
    let [is, now, be, body @ ..] = rest else {
        return Err(Diagnostic::syntax(format!("Expected 'is now be' after '{name}'")));
    };
    if !(is.is_keyword(Keyword::Is) && now.is_keyword(Keyword::Now) && be.is_keyword(Keyword::Be))
    {
        return Err(Diagnostic::syntax(format!("Expected 'is now be' after '{name}'")));
    }
    if body.is_empty() {
        return Err(Diagnostic::syntax(format!("Expected a value for '{name}'")));
    }

    Ok(Statement::Update { name:  name.to_string(),
                           value: compile_expression(body)?, })
}
