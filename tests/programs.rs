use schiefer::dump;
use schiefer::interpreter::Interpreter;
use schiefer::store::Value;

#[test]
fn integer_declaration_assignment_output() {
    let report = schiefer::run(
        "
x: integer;
x := 3 + 2;
output << x;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["5"]);
}

#[test]
fn conditional_assigns_whole_double() {
    let report = schiefer::run(
        "
y: double;
if (1 < 2) y := 10 - 3;
output << y;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["7"]);
}

#[test]
fn fractional_double_prints_two_decimals() {
    let report = schiefer::run(
        "
v: double;
v := 4.5;
output << v;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["4.50"]);
}

#[test]
fn whole_double_prints_without_decimals() {
    let report = schiefer::run(
        "
v: double;
v := 4.0;
output << v;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["4"]);
}

#[test]
fn integer_assignment_rounds_half_away_from_zero() {
    let mut interp = Interpreter::new();
    interp.interpret(
        "
a: integer;
b: integer;
a := 2.5;
b := -2.5;
",
    );

    assert!(interp.diagnostics().is_empty());
    assert_eq!(interp.get_global("a"), Some(Value::Int(3)));
    assert_eq!(interp.get_global("b"), Some(Value::Int(-3)));
}

#[test]
fn string_literal_output_verbatim() {
    let report = schiefer::run("output << \"hello, world\";");

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["hello, world"]);
}

#[test]
fn addition_and_subtraction_left_to_right() {
    let report = schiefer::run(
        "
x: integer;
x := 10 - 3 + 2;
output << x;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["9"]);
}

#[test]
fn parentheses_override_left_to_right() {
    let report = schiefer::run(
        "
x: integer;
x := 10 - (3 + 2);
output << x;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["5"]);
}

#[test]
fn unary_minus_in_expressions() {
    let report = schiefer::run(
        "
x: integer;
x := -5;
output << -(2 + 3);
output << x;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["-5", "-5"]);
}

#[test]
fn integer_widens_when_mixed_with_double() {
    let report = schiefer::run(
        "
a: integer;
a := 2;
b: double;
b := a + 0.5;
output << b;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["2.50"]);
}

#[test]
fn keywords_match_case_insensitively() {
    let report = schiefer::run(
        "
X: INTEGER;
X := 1;
OUTPUT << X;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["1"]);
}

#[test]
fn false_condition_has_no_side_effect() {
    let mut interp = Interpreter::new();
    interp.interpret(
        "
y: double;
if (2 < 1) y := 3;
if (1 == 2) output << \"never\";
",
    );

    assert!(interp.diagnostics().is_empty());
    assert!(interp.output().is_empty());
    assert_eq!(interp.get_global("y"), None);
}

#[test]
fn conditional_output_uses_same_formatting() {
    let report = schiefer::run(
        "
x: double;
x := 1.25;
if (x != 0) output << x;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["1.25"]);
}

#[test]
fn assignment_with_plain_equals_sign() {
    let report = schiefer::run(
        "
x: integer;
x = 4;
output << x;
",
    );

    assert!(report.is_clean());
    assert_eq!(report.output, vec!["4"]);
}

#[test]
fn runs_are_deterministic() {
    let source = "
n: integer;
n := 1 + 2 + 3;
if (n > 5) output << n;
output << \"done\";
";

    let first = schiefer::run(source);
    let second = schiefer::run(source);

    assert!(first.is_clean());
    assert!(second.is_clean());
    assert_eq!(first.output, second.output);
}

#[test]
fn line_by_line_interpretation_keeps_state() {
    let mut interp = Interpreter::new();
    interp.interpret_line(1, "count: integer;");
    interp.interpret_line(2, "count := 41;");
    interp.interpret_line(3, "count := count + 1;");
    interp.interpret_line(4, "output << count;");

    assert!(interp.diagnostics().is_empty());
    assert_eq!(interp.output(), ["42"]);
    assert_eq!(interp.get_global("count"), Some(Value::Int(42)));
}

#[test]
fn strip_whitespace_dump() {
    assert_eq!(
        dump::strip_whitespace("x : integer ;\nx := 1 ;\n"),
        "x:integer;x:=1;"
    );
}

#[test]
fn reserved_and_symbols_dump() {
    let found = dump::reserved_and_symbols("x: integer;\nx := 1;\noutput << x;\n");

    assert_eq!(
        found,
        ["integer", "output", ":=", "<<", ":", ";", "=", "<"]
    );
}
