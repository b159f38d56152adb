use logos::Logos;
use tracing::trace;

use crate::{error::Diagnostic, interpreter::parser::core::ParseResult, util::num::count_dots};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Boolean(bool),
    /// Reserved words that drive statement dispatch.
    #[token("variable", |_| Keyword::Variable)]
    #[token("let", |_| Keyword::Let)]
    #[token("constant", |_| Keyword::Constant)]
    #[token("is", |_| Keyword::Is)]
    #[token("be", |_| Keyword::Be)]
    #[token("now", |_| Keyword::Now)]
    #[token("if", |_| Keyword::If)]
    #[token("else", |_| Keyword::Else)]
    Keyword(Keyword),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `==`
    #[token("==")]
    #[token("=", lone_operator)]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    #[token("!", lone_operator)]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `:`
    #[token(":")]
    Colon,
}

/// The closed set of reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `variable`, declares a mutable binding.
    Variable,
    /// `let`, declares a mutable binding.
    Let,
    /// `constant`, declares an immutable binding.
    Constant,
    /// `is`
    Is,
    /// `be`
    Be,
    /// `now`
    Now,
    /// `if`
    If,
    /// `else`
    Else,
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let word = match self {
            Self::Variable => "variable",
            Self::Let => "let",
            Self::Constant => "constant",
            Self::Is => "is",
            Self::Be => "be",
            Self::Now => "now",
            Self::If => "if",
            Self::Else => "else",
        };
        write!(f, "{word}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", crate::interpreter::value::Value::Number(*n)),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Keyword(k) => write!(f, "{k}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "<="),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Colon => write!(f, ":"),
        }
    }
}

impl Token {
    /// Returns `true` for `+` and `-`, the tokens subject to sign folding.
    #[must_use]
    pub const fn is_sign(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Returns `true` if the token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Self::Keyword(k) if *k == keyword)
    }
}

/// Failures produced while scanning a single token.
///
/// `logos` reports unmatched input with the `Default` variant; the other
/// variants come from the token callbacks.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    /// No token pattern matches the input.
    #[default]
    UnexpectedCharacter,
    /// A numeric literal with more than one `.`.
    TooManyDots(usize),
    /// A numeric literal that is only dots, e.g. `.`.
    InvalidNumber,
    /// A lone `!` or `=` that must be followed by `=`.
    ExpectedEquals,
}

impl LexError {
    /// Turns the scanning failure into a `SyntaxError`, using the offending
    /// source slice for context.
    #[must_use]
    pub fn into_diagnostic(self, slice: &str) -> Diagnostic {
        match self {
            Self::UnexpectedCharacter => {
                let character = slice.chars().next().unwrap_or_default();
                Diagnostic::syntax(format!("Unexpected character: '{character}'"))
            },
            Self::TooManyDots(count) => {
                Diagnostic::syntax(format!("Expect only one '.' in a number, got {count}/1"))
            },
            Self::InvalidNumber => Diagnostic::syntax(format!("Invalid number literal '{slice}'")),
            Self::ExpectedEquals => Diagnostic::syntax(format!("Expected '=' after '{slice}'")),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value. Literals with and without a `.` share one
///   representation.
/// - `Err(LexError)`: More than one `.`, or nothing but a `.`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let literal = lex.slice();
    let dots = count_dots(literal);
    if dots > 1 {
        return Err(LexError::TooManyDots(dots));
    }

    literal.parse().map_err(|_| LexError::InvalidNumber)
}

/// Rejects `!` and `=` when they are not part of `!=` or `==`.
fn lone_operator(_: &logos::Lexer<Token>) -> Result<(), LexError> {
    Err(LexError::ExpectedEquals)
}

/// Splits a line of source into tokens.
///
/// Sign folding happens here: a `+` directly after `+` or `-` is dropped, and
/// a `-` directly after `+` or `-` flips that sign. `5 - -3` therefore lexes
/// as `5 + 3`, and no unary-sign token ever follows another sign.
///
/// Lexing stops at the first failure; no partial token sequence is returned.
///
/// # Errors
/// Returns a `SyntaxError` for unknown characters, malformed numbers and a
/// lone `!` or `=`.
///
/// # Example
/// ```
/// use normal::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("5 - -3").unwrap();
/// assert_eq!(tokens, vec![Token::Number(5.0), Token::Plus, Token::Number(3.0)]);
///
/// let tokens = tokenize("1 +- +2").unwrap();
/// assert_eq!(tokens, vec![Token::Number(1.0), Token::Minus, Token::Number(2.0)]);
///
/// assert!(tokenize("1.2.3").is_err());
/// assert!(tokenize("x = 1").is_err());
/// assert!(tokenize("2 $ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let token = token.map_err(|e| e.into_diagnostic(lexer.slice()))?;

        if token.is_sign()
           && let Some(last) = tokens.last_mut()
           && last.is_sign()
        {
            if token == Token::Minus {
                *last = if *last == Token::Plus { Token::Minus } else { Token::Plus };
            }
            continue;
        }

        tokens.push(token);
    }

    trace!(?tokens, "lexed line");
    Ok(tokens)
}
