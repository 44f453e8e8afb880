//! Property-based tests for the lexer, parser and evaluator.

use proptest::prelude::*;
use scrypt::{
    error::{Error, RuntimeError},
    interpreter::{
        environment::Environment,
        lexer::{TokenKind, lex},
        parser::core::Parser,
    },
    run_source,
};

fn eval(source: &str) -> Result<f64, Error> {
    run_source(source, &mut Environment::with_output(Vec::new()))
}

/// Strategy for number literals as the lexer accepts them.
fn arb_number() -> impl Strategy<Value = String> {
    prop_oneof![(0u32..1_000_000).prop_map(|n| n.to_string()),
                (0u32..10_000, "[0-9]{1,4}").prop_map(|(n, fraction)| format!("{n}.{fraction}")),]
}

/// Strategy for a mix of valid and invalid characters.
fn arb_source() -> impl Strategy<Value = String> {
    "[a-z0-9 \n(){}\\[\\];,=<>!+*/%&|^.$-]{0,40}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn number_literals_evaluate_to_their_value(literal in arb_number()) {
        let expected: f64 = literal.parse().unwrap();
        prop_assert_eq!(eval(&literal).unwrap(), expected);
    }

    #[test]
    fn division_matches_ieee(a in 0u32..100_000, b in 1u32..100_000) {
        let result = eval(&format!("{a} / {b}")).unwrap();
        prop_assert_eq!(result, f64::from(a) / f64::from(b));
    }

    #[test]
    fn division_by_zero_fails(a in 0u32..100_000) {
        let result = eval(&format!("{a} / 0"));
        prop_assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero))));
    }

    #[test]
    fn factor_binds_tighter_than_term(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let result = eval(&format!("{a} + {b} * {c}")).unwrap();
        prop_assert_eq!(result, f64::from(a) + f64::from(b) * f64::from(c));
    }

    #[test]
    fn token_streams_end_once_and_move_forward(source in arb_source()) {
        if let Ok(tokens) = lex(&source) {
            let ends = tokens.iter().filter(|t| t.kind == TokenKind::End).count();
            prop_assert_eq!(ends, 1);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::End));
            for pair in tokens.windows(2) {
                prop_assert!((pair[0].line, pair[0].column) < (pair[1].line, pair[1].column));
            }
        }
    }

    #[test]
    fn parser_never_panics(source in arb_source()) {
        if let Ok(tokens) = lex(&source) {
            let _ = Parser::new(tokens).parse_all();
        }
    }

    #[test]
    fn rendering_is_a_fixed_point(a in 0u32..1000, b in 0u32..1000, c in 0u32..1000) {
        let source = format!("x = {a} - {b} / ({c} + 1) < {a} | {b} == {c};");
        let first = Parser::new(lex(&source).unwrap()).parse_next().unwrap().unwrap();
        let rendered = format!("{};", first.render_infix());
        let second = Parser::new(lex(&rendered).unwrap()).parse_next().unwrap().unwrap();
        prop_assert_eq!(first, second);
    }
}
