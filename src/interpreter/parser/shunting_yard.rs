use tracing::trace;

use crate::{
    ast::{BinaryOperator, Instruction, Program, UnaryOperator},
    error::Diagnostic,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            conditional::parse_nested_conditional,
            core::ParseResult,
            utils::enclosing_scope_end,
        },
        value::Value,
    },
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Paren,
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl Pending {
    fn into_instruction(self) -> Option<Instruction> {
        match self {
            Self::Paren => None,
            Self::Binary(op) => Some(Instruction::Binary(op)),
            Self::Unary(op) => Some(Instruction::Unary(op)),
        }
    }
}

/// Maps a token to the binary operator it denotes, if any.
///
/// `+` and `-` map to `Add` and `Sub`; the compiler decides from context
/// whether they are used as a prefix sign instead.
///
/// # Example
/// ```
/// use normal::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::shunting_yard::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Compiles an infix token span into a postfix [`Program`].
///
/// This is Dijkstra's shunting-yard algorithm with an explicit operator
/// stack. Operands go straight to the output; operators wait on the stack
/// until an operator of lower precedence (or a closing parenthesis, or the
/// end of input) forces them out. `^` is right-associative, so an incoming
/// `^` never pops another `^`.
///
/// A `+` or `-` in operand position (start of input, after an operator or
/// after `(`) becomes a prefix sign. `not` is always a prefix operator.
///
/// An `if` in operand position starts an inline conditional. Its span runs to
/// the `)` that closes the enclosing group, or to the end of input, and is
/// stored as a nested [`Instruction::Conditional`] to be evaluated only when
/// reached.
///
/// # Parameters
/// - `tokens`: The span to compile; must not be empty.
///
/// # Returns
/// The postfix program.
///
/// # Errors
/// Returns a `SyntaxError` for unbalanced parentheses, an operator without a
/// left operand, two operands in a row, a stray `:` or keyword, an empty
/// span, or conditionals nested deeper than
/// [`MAX_CONDITIONAL_NESTING`](crate::interpreter::parser::core::MAX_CONDITIONAL_NESTING).
///
/// # Example
/// ```
/// use normal::interpreter::{lexer::tokenize, parser::shunting_yard::compile_expression};
///
/// let program = compile_expression(&tokenize("(2 + 3) * 4").unwrap()).unwrap();
/// assert_eq!(program.to_string(), "2 3 + 4 *");
///
/// let program = compile_expression(&tokenize("2 ^ 3 ^ 2").unwrap()).unwrap();
/// assert_eq!(program.to_string(), "2 3 2 ^ ^");
///
/// assert!(compile_expression(&tokenize("(2 + 3").unwrap()).is_err());
/// assert!(compile_expression(&tokenize("2 + 3)").unwrap()).is_err());
/// ```
pub fn compile_expression(tokens: &[Token]) -> ParseResult<Program> {
    compile_nested(tokens, 0)
}

/// Compiles a span that sits inside `depth` enclosing conditionals.
pub(in crate::interpreter::parser) fn compile_nested(tokens: &[Token],
                                                     depth: usize)
                                                     -> ParseResult<Program> {
    if tokens.is_empty() {
        return Err(Diagnostic::syntax("Expected an expression"));
    }

    let mut output = Vec::new();
    let mut operators: Vec<Pending> = Vec::new();
    let mut expect_operand = true;
    let mut index = 0;

    while let Some(token) = tokens.get(index) {
        match token {
            Token::Number(n) => {
                require_operand_position(expect_operand, token)?;
                output.push(Instruction::Literal(Value::from(*n)));
                expect_operand = false;
            },
            Token::Boolean(b) => {
                require_operand_position(expect_operand, token)?;
                output.push(Instruction::Literal(Value::from(*b)));
                expect_operand = false;
            },
            Token::Identifier(name) => {
                require_operand_position(expect_operand, token)?;
                output.push(Instruction::Load(name.clone()));
                expect_operand = false;
            },
            Token::Keyword(Keyword::If) => {
                require_operand_position(expect_operand, token)?;
                let body = &tokens[index + 1..];
                let end = enclosing_scope_end(body);
                let conditional = parse_nested_conditional(&body[..end], depth + 1)?;
                output.push(Instruction::Conditional(conditional));
                expect_operand = false;
                index += end + 1;
                continue;
            },
            Token::Keyword(keyword) => {
                return Err(Diagnostic::syntax(format!("Unexpected keyword '{keyword}'")));
            },
            Token::Colon => return Err(Diagnostic::syntax("Unexpected ':'")),
            Token::LParen => {
                require_operand_position(expect_operand, token)?;
                operators.push(Pending::Paren);
            },
            Token::RParen => {
                if !operators.iter().any(|p| matches!(p, Pending::Paren)) {
                    return Err(Diagnostic::syntax("Unexpected ')'"));
                }
                if expect_operand {
                    return Err(Diagnostic::syntax("Expected a value before ')'"));
                }
                while let Some(pending) = operators.pop() {
                    match pending.into_instruction() {
                        Some(instruction) => output.push(instruction),
                        None => break,
                    }
                }
                expect_operand = false;
            },
            Token::Not => {
                require_operand_position(expect_operand, token)?;
                operators.push(Pending::Unary(UnaryOperator::Not));
            },
            Token::Plus if expect_operand => operators.push(Pending::Unary(UnaryOperator::Plus)),
            Token::Minus if expect_operand => {
                operators.push(Pending::Unary(UnaryOperator::Negate));
            },
            _ => {
                let Some(op) = token_to_binary_operator(token) else {
                    return Err(Diagnostic::syntax(format!("Unexpected '{token}'")));
                };
                if expect_operand {
                    return Err(Diagnostic::syntax(format!("Expected a value before '{token}'")));
                }
                pop_for(op, &mut operators, &mut output);
                operators.push(Pending::Binary(op));
                expect_operand = true;
            },
        }
        index += 1;
    }

    if expect_operand && let Some(last) = tokens.last() {
        return Err(Diagnostic::syntax(format!("Expected a value after '{last}'")));
    }

    while let Some(pending) = operators.pop() {
        match pending.into_instruction() {
            Some(instruction) => output.push(instruction),
            None => return Err(Diagnostic::syntax("Unexpected '('")),
        }
    }

    let program = Program::new(output);
    trace!(%program, "compiled expression");
    Ok(program)
}

/// Moves operators that bind at least as tightly as `incoming` from the
/// stack to the output, stopping at the first open parenthesis.
fn pop_for(incoming: BinaryOperator, operators: &mut Vec<Pending>, output: &mut Vec<Instruction>) {
    while let Some(&top) = operators.last() {
        let top_precedence = match top {
            Pending::Paren => break,
            Pending::Binary(op) => op.precedence(),
            Pending::Unary(op) => op.precedence(),
        };

        let pops = if incoming.is_right_associative() {
            top_precedence > incoming.precedence()
        } else {
            top_precedence >= incoming.precedence()
        };
        if !pops {
            break;
        }

        operators.pop();
        if let Some(instruction) = top.into_instruction() {
            output.push(instruction);
        }
    }
}

fn require_operand_position(expect_operand: bool, token: &Token) -> ParseResult<()> {
    if expect_operand {
        Ok(())
    } else {
        Err(Diagnostic::syntax(format!("Expected an operator before '{token}'")))
    }
}
