use std::fs;

use pretty_assertions::assert_eq;
use scrypt::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{environment::Environment, lexer::lex, parser::core::Parser},
    run_source,
};
use walkdir::WalkDir;

/// Runs `src` in a fresh environment, returning the value of the last
/// statement and everything `print` wrote.
fn run(src: &str) -> (Result<f64, Error>, String) {
    let mut env = Environment::with_output(Vec::new());
    let result = run_source(src, &mut env);
    let output = String::from_utf8(env.into_output()).expect("print output is UTF-8");
    (result, output)
}

fn value_of(src: &str) -> f64 {
    match run(src).0 {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn output_of(src: &str) -> String {
    match run(src) {
        (Ok(_), output) => output,
        (Err(e), _) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_success(src: &str) {
    if let (Err(e), _) = run(src) {
        panic!("Script failed: {e}\n{src}");
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match run(src).0 {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error from {src:?}, got {other:?}"),
    }
}

fn failure_message(src: &str) -> String {
    match run(src).0 {
        Err(e) => e.to_string(),
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
    }
}

#[test]
fn script_examples_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "scrypt"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        let (result, output) = run(&source);
        if let Err(e) = result {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(output, expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn readme_examples_work() {
    let content = fs::read_to_string("README.md").expect("README.md is readable");
    let blocks = extract_script_blocks(&content);
    assert!(!blocks.is_empty(), "No scrypt examples found in README.md");

    for (i, code) in blocks.into_iter().enumerate() {
        if let (Err(e), _) = run(&code) {
            panic!("README example {} failed:\n{}\nError: {:?}", i + 1, code, e);
        }
    }
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```scrypt") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[test]
fn numeric_literal_renders_as_written() {
    let mut parser = Parser::new(lex("3.5").unwrap());
    let node = parser.parse_next().unwrap().unwrap();
    assert_eq!(node.render_infix(), "3.5");
    assert_eq!(value_of("3.5"), 3.5);
}

#[test]
fn operator_precedence() {
    assert_eq!(value_of("1 + 2 * 3"), 7.0);
    assert_eq!(value_of("(1 + 2) * 3"), 9.0);
    assert_eq!(value_of("10 - 4 - 3"), 3.0);
    assert_eq!(value_of("7 % 4 * 2"), 6.0);
}

#[test]
fn assignment_then_read() {
    assert_eq!(value_of("x = 5; x + 1"), 6.0);
    assert_eq!(value_of("x = y = 2; x * y"), 4.0);
}

#[test]
fn division() {
    assert_eq!(value_of("7 / 2"), 3.5);
    assert!(matches!(runtime_error("1 / 0"), RuntimeError::DivisionByZero));
    assert!(matches!(runtime_error("1 % 0"), RuntimeError::DivisionByZero));
    assert_eq!(value_of("7.5 % 2"), 1.5);
}

#[test]
fn array_bounds() {
    assert_eq!(value_of("a = [1, 2, 3]; a[2]"), 3.0);
    assert!(matches!(runtime_error("a = [1, 2, 3]; a[3]"), RuntimeError::OutOfBounds));
    assert!(matches!(runtime_error("a = [1, 2, 3]; a[1.5]"), RuntimeError::IntegerIndexRequired));
    assert!(matches!(runtime_error("a = [1, 2, 3]; a[0 - 1]"), RuntimeError::OutOfBounds));
    assert!(matches!(runtime_error("b[0]"), RuntimeError::NotAnArray { .. }));
}

#[test]
fn array_element_assignment() {
    assert_eq!(value_of("a = [1, 2, 3]; a[1] = 20; a[0] + a[1]"), 21.0);
    assert_eq!(value_of("a = [1, 2]; i = 0; a[i + 1] = a[i] + 5; a[1]"), 6.0);
    assert!(matches!(runtime_error("x = 1; x[0] = 2;"), RuntimeError::NotAnArray { .. }));
}

#[test]
fn boolean_discipline() {
    assert!(matches!(runtime_error("true + 1"), RuntimeError::InvalidOperandType));
    assert_eq!(value_of("true == false"), 0.0);
    assert!(matches!(runtime_error("1 & 2"), RuntimeError::InvalidOperandType));
    assert_eq!(value_of("1 & 0"), 0.0);
    assert_eq!(value_of("1 | 0"), 1.0);
    assert_eq!(value_of("1 ^ 1"), 0.0);
    assert!(matches!(runtime_error("true < 1"), RuntimeError::InvalidOperandType));
    assert_eq!(value_of("(1 < 2) & (2 < 3)"), 1.0);
}

#[test]
fn control_flow() {
    assert_eq!(value_of("x = 0; while (x < 3) { x = x + 1; } x"), 3.0);
    assert_eq!(value_of("x = 5; if x > 3 { y = 1; } else { y = 2; } y"), 1.0);
    assert_eq!(value_of("x = 5; if x > 9 { y = 1; } else if x > 4 { y = 2; } else { y = 3; } y"), 2.0);
}

#[test]
fn function_call() {
    assert_eq!(value_of("def f(a, b) { return a + b; } f(2, 3)"), 5.0);
    assert_eq!(value_of("def twice(n) { return n * 2; } twice(twice(3))"), 12.0);
}

#[test]
fn function_frames_are_shared_between_calls() {
    let src = "def f(n) { if n > 0 { f(n - 1); } return n; } f(3)";
    assert_eq!(value_of(src), 0.0);
}

#[test]
fn definitions_are_registered_when_parsed() {
    assert_eq!(value_of("if false { def g() { return 1; } } g()"), 1.0);
    assert_eq!(value_of("def outer() { def inner() { return 2; } return 1; } inner()"), 2.0);
    assert_eq!(value_of("x = 0; while x > 0 { def h(n) { return n + 1; } } h(4)"), 5.0);
}

#[test]
fn function_reference_statement() {
    assert_eq!(value_of("def f() { return 1; } f;"), 0.0);
}

#[test]
fn unmatched_parenthesis_points_at_end() {
    assert_eq!(failure_message("(1 + 2"), "Unexpected token at line 1 column 7: END");
    let mut parser = Parser::new(lex("(1 + 2").unwrap());
    assert!(matches!(parser.parse_next(),
                     Err(ParseError::UnexpectedToken { line: 1, column: 7, .. })));
}

#[test]
fn stray_closing_parenthesis_is_rejected_before_anything_runs() {
    let (result, output) = run("print 1;\n1 + 2)");
    assert_eq!(result.unwrap_err().to_string(), "Unexpected token at line 2 column 6: )");
    assert_eq!(output, "");
}

#[test]
fn unknown_identifier_names_the_variable() {
    assert!(matches!(runtime_error("y + 1"), RuntimeError::UnknownIdentifier { name } if name == "y"));
    assert_eq!(failure_message("y + 1"), "Runtime error: unknown identifier y");
}

#[test]
fn syntax_errors_carry_positions() {
    assert_eq!(failure_message("x = 1 @ 2"), "Syntax error on line 1 column 7.");
    assert_eq!(failure_message("x = 3.;"), "Syntax error on line 1 column 7.");
}

#[test]
fn exit_codes_follow_error_layers() {
    let code = |src: &str| run(src).0.unwrap_err().exit_code();
    assert_eq!(code("1 ! 2"), 1);
    assert_eq!(code("1 +"), 2);
    assert_eq!(code("if 1 } 2 { 3 }"), 2);
    assert_eq!(code("1 / 0"), 3);
    assert_eq!(code("a = []; pop(a)"), 3);
}

#[test]
fn print_formats_numbers_booleans_and_arrays() {
    assert_eq!(output_of("print 1 / 3; print 2 < 3; print true; a = [1, 2.5]; print a; print 1000000;"),
               "0.333333\ntrue\ntrue\n[1, 2.5]\n1e+06\n");
}

#[test]
fn earlier_effects_survive_a_later_error() {
    let mut env = Environment::with_output(Vec::new());
    assert!(run_source("x = 1; a = [0]; a[0] = 5; y = 1 / 0;", &mut env).is_err());
    assert_eq!(env.global("x"), Some(1.0));
    assert_eq!(env.array("a"), Some(&[5.0][..]));
    assert_eq!(env.global("y"), None);
}

#[test]
fn builtins_work_on_arrays() {
    assert_eq!(value_of("a = [1]; push(a, 4); push(a, 9); len(a)"), 3.0);
    assert_eq!(value_of("a = [1, 2]; pop(a) + len(a)"), 3.0);
    assert!(matches!(runtime_error("a = []; pop(a)"), RuntimeError::Underflow));
    assert!(matches!(runtime_error("len(5)"), RuntimeError::NotAnArray { .. }));
}

#[test]
fn state_carries_over_between_runs() {
    let mut env = Environment::with_output(Vec::new());
    run_source("def sq(n) { return n * n; } base = 4;", &mut env).unwrap();
    assert_eq!(run_source("sq(base) + 1", &mut env).unwrap(), 17.0);
    assert_success("def g() { return 1; } g()");
}
