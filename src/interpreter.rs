/// The evaluator module executes compiled programs and statements.
///
/// It runs postfix programs on a value stack, applies declarations and
/// updates to the session's symbol table, and selects conditional branches.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates arithmetic, comparison and logical operators.
/// - Resolves variables and enforces mutability.
/// - Reports runtime diagnostics such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes a line of source.
///
/// The lexer reads the raw line and produces tokens for numbers, booleans,
/// identifiers, keywords, operators and punctuation. It also folds runs of
/// `+`/`-` into a single sign.
pub mod lexer;
/// The parser module turns tokens into statements.
///
/// Statements are recognized from their leading tokens; expression spans are
/// compiled to postfix programs with the shunting-yard algorithm.
///
/// # Responsibilities
/// - Dispatches declarations, updates, conditionals and expressions.
/// - Compiles infix expressions with correct precedence and associativity.
/// - Reports syntax errors such as unbalanced parentheses.
pub mod parser;
/// The symbol table holding a session's variables.
pub mod symbol_table;
/// The value module defines the runtime data types.
///
/// Numbers and booleans, their printing, and the coercions used by the
/// operators.
pub mod value;
