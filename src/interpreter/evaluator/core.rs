use crate::{
    error::Diagnostic,
    interpreter::{parser::core::parse_line, symbol_table::SymbolTable, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`Diagnostic`] describing the failure.
pub type EvalResult<T> = Result<T, Diagnostic>;

/// The outcome of executing one line: a value, nothing, or a diagnostic.
pub type ExecResult = EvalResult<Option<Value>>;

/// One interpreter session.
///
/// A session owns the symbol table that every line executed through it reads
/// and writes. Sessions share nothing; two sessions never see each other's
/// declarations.
///
/// ## Usage
///
/// `Session` is created once per script and reused for every line, so later
/// lines see the declarations of earlier ones.
///
/// ```
/// use normal::{Session, interpreter::value::Value};
///
/// let mut session = Session::new();
///
/// assert_eq!(session.execute("variable x is 5").unwrap(), None);
/// assert_eq!(session.execute("x + 1").unwrap(), Some(Value::Number(6.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(crate) symbols: SymbolTable,
}

impl Session {
    /// Creates a session with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bindings declared so far.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Lexes, parses and evaluates one line of source.
    ///
    /// This is the single entry point the script driver uses. Every failure
    /// is returned as a [`Diagnostic`]; the session stays usable afterwards
    /// and a failed line leaves the symbol table untouched.
    ///
    /// # Returns
    /// - `Ok(Some(value))` for expressions and conditionals that select a
    ///   value.
    /// - `Ok(None)` for declarations, updates, blank lines and conditionals
    ///   without a matching branch or default.
    ///
    /// # Errors
    /// Returns the first `SyntaxError`, `TypeError`, `MathError` or
    /// `VariableError` raised for the line.
    ///
    /// # Example
    /// ```
    /// use normal::{Session, error::DiagnosticKind};
    ///
    /// let mut session = Session::new();
    ///
    /// let err = session.execute("5 / 0").unwrap_err();
    /// assert_eq!(err.kind, DiagnosticKind::Math);
    ///
    /// assert_eq!(session.execute("2 ^ 3 ^ 2").unwrap().unwrap().to_string(), "512");
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, line: &str) -> ExecResult {
        let statement = parse_line(line)?;
        self.eval_statement(&statement)
    }

    /// Runs a whole script, one line at a time.
    ///
    /// The source is split on newlines; blank and whitespace-only lines are
    /// skipped. Every remaining line runs in order against this session, and
    /// a diagnostic on one line never stops the lines after it.
    ///
    /// # Example
    /// ```
    /// use normal::Session;
    ///
    /// let mut session = Session::new();
    /// let lines = session.run_script("let a be 2\n\n a * 3\nb\n");
    ///
    /// let printed: Vec<_> = lines.iter().filter_map(|l| l.output()).collect();
    /// assert_eq!(printed, ["6", "VariableError: Unknown variable 'b'"]);
    /// assert_eq!(lines[1].number, 3);
    /// ```
    pub fn run_script(&mut self, source: &str) -> Vec<ScriptLine> {
        source.lines()
              .enumerate()
              .filter(|(_, line)| !line.trim().is_empty())
              .map(|(index, line)| ScriptLine { number:  index + 1,
                                                outcome: self.execute(line), })
              .collect()
    }
}

/// The result of one executed script line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// 1-based line number in the script.
    pub number:  usize,
    /// What executing the line produced.
    pub outcome: ExecResult,
}

impl ScriptLine {
    /// What the driver prints for this line, if anything.
    ///
    /// Values print in canonical form, diagnostics as `Kind: reason`, and
    /// lines without a value print nothing.
    #[must_use]
    pub fn output(&self) -> Option<String> {
        match &self.outcome {
            Ok(Some(value)) => Some(value.to_string()),
            Ok(None) => None,
            Err(diagnostic) => Some(diagnostic.to_string()),
        }
    }
}
