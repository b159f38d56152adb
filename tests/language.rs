use normal::{
    Session,
    error::DiagnosticKind,
    interpreter::{parser::core::MAX_CONDITIONAL_NESTING, value::Value},
};

fn assert_value(session: &mut Session, src: &str, expected: &str) {
    match session.execute(src) {
        Ok(Some(value)) => assert_eq!(value.to_string(), expected, "line: {src}"),
        Ok(None) => panic!("Line produced no value but {expected} was expected: {src}"),
        Err(e) => panic!("Line failed: {src}\nError: {e}"),
    }
}

fn assert_empty(session: &mut Session, src: &str) {
    match session.execute(src) {
        Ok(None) => {},
        other => panic!("Line was expected to produce nothing: {src}\nGot: {other:?}"),
    }
}

fn assert_diagnostic(session: &mut Session, src: &str, kind: DiagnosticKind) {
    match session.execute(src) {
        Err(e) => assert_eq!(e.kind, kind, "line: {src}, reason: {}", e.reason),
        Ok(v) => panic!("Line succeeded but was expected to fail with {kind}: {src}\nGot: {v:?}"),
    }
}

fn value_of(src: &str) -> String {
    let mut session = Session::new();
    match session.execute(src) {
        Ok(Some(value)) => value.to_string(),
        other => panic!("Line did not produce a value: {src}\nGot: {other:?}"),
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_eq!(value_of("2+3*4"), "14");
    assert_eq!(value_of("(2+3)*4"), "20");
    assert_eq!(value_of("10 - 4 - 3"), "3");
    assert_eq!(value_of("20 / 4 / 5"), "1");
    assert_eq!(value_of("((1 + 2) * (3 + 4))"), "21");
}

#[test]
fn power_is_right_associative() {
    assert_eq!(value_of("2^3^2"), "512");
    assert_eq!(value_of("(2^3)^2"), "64");
    assert_eq!(value_of("2 * 3 ^ 2"), "18");
}

#[test]
fn signs() {
    assert_eq!(value_of("-5"), "-5");
    assert_eq!(value_of("+5"), "5");
    assert_eq!(value_of("5--3"), "8");
    assert_eq!(value_of("5+-3"), "2");
    assert_eq!(value_of("5 - - - 3"), "2");
    assert_eq!(value_of("--4"), "4");
    assert_eq!(value_of("2 * -3"), "-6");
    assert_eq!(value_of("-2 ^ 2"), "-4");
    assert_eq!(value_of("2 ^ -1"), "0.5");
    assert_eq!(value_of("-(-4)"), "4");
}

#[test]
fn number_formatting() {
    assert_eq!(value_of("7 / 2"), "3.5");
    assert_eq!(value_of("4.0"), "4");
    assert_eq!(value_of(".5"), "0.5");
    assert_eq!(value_of("6 / 3"), "2");
    assert_eq!(value_of("0 - 0"), "0");
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(value_of("3 > 2"), "true");
    assert_eq!(value_of("3 <= 2"), "false");
    assert_eq!(value_of("2 != 3"), "true");
    assert_eq!(value_of("1 + 1 == 2"), "true");
    assert_eq!(value_of("1 == true"), "false");
    assert_eq!(value_of("true == true"), "true");
    assert_eq!(value_of("true > false"), "true");
    assert_eq!(value_of("true >= 1"), "true");
    assert_eq!(value_of("false < 0.5"), "true");
    assert_eq!(value_of("not 1 > 2"), "true");
    assert_eq!(value_of("not 0"), "true");
    assert_eq!(value_of("true and false or true"), "true");
    assert_eq!(value_of("false or 1 > 2 and true"), "false");
}

#[test]
fn type_errors() {
    let mut session = Session::new();
    assert_diagnostic(&mut session, "1 + true", DiagnosticKind::Type);
    assert_diagnostic(&mut session, "false * 2", DiagnosticKind::Type);
    assert_diagnostic(&mut session, "-true", DiagnosticKind::Type);

    let err = session.execute("2 ^ true").unwrap_err();
    assert_eq!(err.reason, "Expected number, got boolean");
}

#[test]
fn non_real_power_is_math_error() {
    let mut session = Session::new();
    assert_diagnostic(&mut session, "(0 - 8) ^ 0.5", DiagnosticKind::Math);
    assert_value(&mut session, "(0 - 8) ^ 2", "64");
}

#[test]
fn division_by_zero_is_math_error() {
    let mut session = Session::new();
    assert_diagnostic(&mut session, "5/0", DiagnosticKind::Math);
    assert_diagnostic(&mut session, "5 / (2 - 2)", DiagnosticKind::Math);
    assert_diagnostic(&mut session, "1 / 0.0", DiagnosticKind::Math);
    assert_value(&mut session, "0 / 5", "0");
}

#[test]
fn declare_then_read() {
    let mut session = Session::new();
    assert_empty(&mut session, "variable x is 5");
    assert_value(&mut session, "x+1", "6");
    assert_empty(&mut session, "let y be x * 2");
    assert_value(&mut session, "y", "10");
    assert_empty(&mut session, "constant flag is x > 3");
    assert_value(&mut session, "flag", "true");
    assert_eq!(session.symbols().len(), 3);
}

#[test]
fn redeclaration_fails() {
    let mut session = Session::new();
    assert_empty(&mut session, "variable x is 5");
    assert_diagnostic(&mut session, "variable x is 6", DiagnosticKind::Variable);
    assert_diagnostic(&mut session, "constant x is 6", DiagnosticKind::Variable);
    assert_value(&mut session, "x", "5");
}

#[test]
fn updates() {
    let mut session = Session::new();
    assert_empty(&mut session, "variable x is 5");
    assert_empty(&mut session, "x is now be x * 2");
    assert_value(&mut session, "x", "10");

    assert_empty(&mut session, "constant y is 1");
    assert_diagnostic(&mut session, "y is now be 2", DiagnosticKind::Variable);
    assert_value(&mut session, "y", "1");

    assert_empty(&mut session, "let q be 1");
    assert_empty(&mut session, "q is now be q + 1");
    assert_value(&mut session, "q", "2");

    assert_diagnostic(&mut session, "z is now be 1", DiagnosticKind::Variable);
    assert_diagnostic(&mut session, "x is be 3", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "x is now be", DiagnosticKind::Syntax);
}

#[test]
fn failed_lines_leave_the_table_untouched() {
    let mut session = Session::new();
    assert_diagnostic(&mut session, "variable w is 1 / 0", DiagnosticKind::Math);
    assert_diagnostic(&mut session, "w", DiagnosticKind::Variable);

    assert_empty(&mut session, "variable v is 1");
    assert_diagnostic(&mut session, "v is now be v + true", DiagnosticKind::Type);
    assert_value(&mut session, "v", "1");
}

#[test]
fn unknown_variable_is_error() {
    let mut session = Session::new();
    let err = session.execute("foo + 1").unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Variable);
    assert_eq!(err.to_string(), "VariableError: Unknown variable 'foo'");
}

#[test]
fn conditional_selection() {
    let mut session = Session::new();
    assert_empty(&mut session, "variable x is 5");
    assert_value(&mut session, "if x > 3 : 1 : 0", "1");

    let mut session = Session::new();
    assert_empty(&mut session, "variable x is 2");
    assert_value(&mut session, "if x > 3 : 1 : 0", "0");
}

#[test]
fn conditional_chains() {
    let mut session = Session::new();
    assert_empty(&mut session, "variable x is 5");
    assert_value(&mut session, "if x > 10 : 1 if x > 3 : 2 : 3", "2");
    assert_value(&mut session, "if x > 10 : 1 else if x > 3 : 2 else : 3", "2");
    assert_value(&mut session, "if x > 10 : 1 else if x > 7 : 2 else : 3", "3");
    assert_value(&mut session, "if x : 1 : 0", "1");
}

#[test]
fn conditional_without_match_is_empty() {
    let mut session = Session::new();
    assert_empty(&mut session, "if 1 > 2 : 1");
    assert_empty(&mut session, "if false : 1 if 0 : 2");
}

#[test]
fn conditionals_are_lazy() {
    let mut session = Session::new();
    assert_value(&mut session, "if true : 1 : 1 / 0", "1");
    assert_value(&mut session, "if false : 1 / 0 : 2", "2");
    assert_value(&mut session, "if true : 1 if missing : 2", "1");
}

#[test]
fn inline_conditionals() {
    let mut session = Session::new();
    assert_empty(&mut session, "variable x is 5");
    assert_value(&mut session, "1 + (if x > 3 : 10 : 20)", "11");
    assert_value(&mut session, "2 * if x > 3 : 10 : 20", "20");
    assert_value(&mut session, "if (if x > 3 : true : false) : 100 : 200", "100");
    assert_value(&mut session, "if x > 3 : (if x > 4 : 1 : 2) : 3", "1");
    assert_empty(&mut session, "variable y is if x > 3 : x * 2 : 0");
    assert_value(&mut session, "y", "10");
    assert_diagnostic(&mut session, "1 + (if false : 1)", DiagnosticKind::Syntax);
}

fn nested_inline_conditionals(depth: usize) -> String {
    format!("{}1{}", "(if true : ".repeat(depth), ")".repeat(depth))
}

#[test]
fn conditional_nesting_is_limited() {
    let mut session = Session::new();
    assert_value(&mut session, &nested_inline_conditionals(MAX_CONDITIONAL_NESTING), "1");

    let err = session.execute(&nested_inline_conditionals(MAX_CONDITIONAL_NESTING + 1))
                     .unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: Conditional nesting is too deep");

    let err = session.execute(&nested_inline_conditionals(5000)).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntax);

    let statement = format!("if true : {}", nested_inline_conditionals(MAX_CONDITIONAL_NESTING));
    assert_diagnostic(&mut session, &statement, DiagnosticKind::Syntax);

    assert_value(&mut session, "1 + 1", "2");
}

#[test]
fn else_without_if() {
    let mut session = Session::new();
    let err = session.execute("else : 1").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: else has no parent if");

    let err = session.execute("else if true : 1").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: else if has no parent if");
}

#[test]
fn unbalanced_input() {
    let mut session = Session::new();
    let err = session.execute("(2+3").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: Unexpected '('");

    let err = session.execute("2+3)").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: Unexpected ')'");

    assert_diagnostic(&mut session, "()", DiagnosticKind::Syntax);
}

#[test]
fn lexical_errors() {
    let mut session = Session::new();
    let err = session.execute("2 $ 3").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: Unexpected character: '$'");

    let err = session.execute("2 € 2").unwrap_err();
    assert_eq!(err.to_string(), "SyntaxError: Unexpected character: '€'");

    let err = session.execute("1.2.3").unwrap_err();
    assert_eq!(err.reason, "Expect only one '.' in a number, got 2/1");

    assert_diagnostic(&mut session, "x = 1", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "!true", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, ".", DiagnosticKind::Syntax);
}

#[test]
fn malformed_statements() {
    let mut session = Session::new();
    assert_diagnostic(&mut session, "variable is 5", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "variable x 5", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "variable x is", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "let", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "is 5", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "2 3", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "2 +", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "* 2", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "1 : 2", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "1 + variable", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "if x > 3", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "if : 1", DiagnosticKind::Syntax);
    assert_diagnostic(&mut session, "if true : 1 else", DiagnosticKind::Syntax);
    assert!(session.symbols().is_empty());
}

#[test]
fn blank_line_is_empty() {
    let mut session = Session::new();
    assert_empty(&mut session, "");
    assert_empty(&mut session, "   \t ");
}

#[test]
fn pure_expressions_are_idempotent() {
    let mut session = Session::new();
    assert_empty(&mut session, "variable x is 3");

    let first = session.execute("x * 2 + 1").unwrap();
    let second = session.execute("x * 2 + 1").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, Some(Value::Number(7.0)));
}

#[test]
fn sessions_do_not_share_variables() {
    let mut first = Session::new();
    let mut second = Session::new();

    assert_empty(&mut first, "variable x is 1");
    assert_diagnostic(&mut second, "x", DiagnosticKind::Variable);
    assert_empty(&mut second, "variable x is 2");
    assert_value(&mut first, "x", "1");
    assert_value(&mut second, "x", "2");
}

#[test]
fn scripts_continue_after_diagnostics() {
    let lines = normal::run("variable a is 1\n\n  \na / 0\na + 1\n");

    assert_eq!(lines.len(), 3);
    assert_eq!(lines.iter().map(|l| l.number).collect::<Vec<_>>(), [1, 4, 5]);
    assert_eq!(lines[0].output(), None);
    assert_eq!(lines[1].output().as_deref(), Some("MathError: Cannot divide 1 by 0"));
    assert_eq!(lines[2].output().as_deref(), Some("2"));
}
