//! # normal
//!
//! normal is a small line-oriented expression and statement language written
//! in Rust. Every line is lexed, parsed and evaluated on its own against a
//! session-wide symbol table: numbers, booleans, arithmetic with the usual
//! precedence, comparisons, logical operators, variable declarations and
//! inline conditionals.
//!
//! ```text
//! variable x is 5
//! constant limit be 3
//! if x > limit : x * 2 : 0
//! x is now be x - 1
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

pub use crate::interpreter::evaluator::core::{ExecResult, ScriptLine, Session};

/// Defines the structure of parsed lines.
///
/// This module declares the operators, the postfix `Program` and its
/// `Instruction`s, conditionals with their branches, and the `Statement`
/// forms a line can take. The parser produces them and the evaluator
/// consumes them.
///
/// # Responsibilities
/// - Defines operator kinds with their precedence and associativity.
/// - Represents expressions as postfix programs with nested conditionals.
/// - Describes declarations, updates, conditionals and expressions.
pub mod ast;
/// Provides the unified diagnostic type.
///
/// This module defines the error returned by every fallible step of the
/// engine. Each diagnostic has a kind and a reason and prints as
/// `Kind: reason`.
pub mod error;
/// Orchestrates the entire process of line execution.
///
/// This module ties together lexing, parsing, evaluation, values and the
/// symbol table, and exposes the [`Session`] that runs lines and scripts.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Owns per-session state in a symbol table.
/// - Manages the flow of values and diagnostics between phases.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// Runs a whole script in a fresh session.
///
/// Blank lines are skipped, every other line is executed in order, and a
/// diagnostic on one line does not stop the ones after it.
///
/// # Examples
/// ```
/// use normal::run;
///
/// let source = "variable x is 5\nx + 1\nvariable x is 6\n";
/// let printed: Vec<_> = run(source).iter().filter_map(|l| l.output()).collect();
///
/// assert_eq!(printed,
///            ["6", "VariableError: Variable 'x' is already declared"]);
/// ```
#[must_use]
pub fn run(source: &str) -> Vec<ScriptLine> {
    Session::new().run_script(source)
}
