use approx::assert_relative_eq;
use curve_rs::error::{CompileError, EvaluationError};
use curve_rs::expr::{BuiltinCompiler, Evaluable, ExpressionCompiler};

fn eval(text: &str, x: f64) -> f64 {
    BuiltinCompiler
        .compile_program(text)
        .expect("compiles")
        .evaluate(x)
        .expect("evaluates")
}

#[test]
fn arithmetic_follows_usual_precedence() {
    assert_relative_eq!(eval("2*x+1", 3.0), 7.0);
    assert_relative_eq!(eval("1 + 2 * 3 - 4 / 2", 0.0), 5.0);
    assert_relative_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
    assert_relative_eq!(eval("x - 1 - 1", 5.0), 3.0);
}

#[test]
fn power_is_right_associative_and_binds_tighter_than_unary_minus() {
    assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
    assert_relative_eq!(eval("-x^2", 3.0), -9.0);
    assert_relative_eq!(eval("2^-x", 1.0), 0.5);
    assert_relative_eq!(eval("+x", 4.0), 4.0);
}

#[test]
fn functions_and_constants_resolve() {
    assert_relative_eq!(eval("sin(pi / 2)", 0.0), 1.0);
    assert_relative_eq!(eval("min(x, 2)", 5.0), 2.0);
    assert_relative_eq!(eval("max(x, 2)", 5.0), 5.0);
    assert_relative_eq!(eval("pow(x, 3)", 2.0), 8.0);
    assert_relative_eq!(eval("ln(e)", 0.0), 1.0);
    assert_relative_eq!(eval("abs(x) + floor(1.7)", -2.0), 3.0);
    assert_relative_eq!(eval("tau", 0.0), std::f64::consts::TAU);
}

#[test]
fn malformed_text_reports_errors_with_offsets() {
    let compile = |text: &str| BuiltinCompiler.compile_program(text).err();

    assert_eq!(compile(""), Some(CompileError::Empty));
    assert_eq!(compile("   "), Some(CompileError::Empty));
    assert_eq!(compile("x +"), Some(CompileError::UnexpectedEnd));
    assert_eq!(
        compile("(x"),
        Some(CompileError::UnbalancedParenthesis { offset: 0 })
    );
    assert_eq!(
        compile("x)"),
        Some(CompileError::UnbalancedParenthesis { offset: 1 })
    );
    assert_eq!(
        compile("foo(x)"),
        Some(CompileError::UnknownIdentifier {
            name: "foo".to_owned(),
            offset: 0,
        })
    );
    assert_eq!(
        compile("2x"),
        Some(CompileError::UnexpectedToken {
            token: "x".to_owned(),
            offset: 1,
        })
    );
    assert_eq!(
        compile("sqrt(x, 1)"),
        Some(CompileError::WrongArity {
            name: "sqrt",
            expected: 1,
            found: 2,
        })
    );
    assert!(matches!(
        compile("x # 2"),
        Some(CompileError::UnexpectedChar { ch: '#', offset: 2 })
    ));
}

#[test]
fn domain_violations_are_evaluation_errors() {
    let sqrt = BuiltinCompiler.compile("sqrt(x)").expect("compiles");
    assert!(matches!(
        sqrt.evaluate(-1.0),
        Err(EvaluationError::Domain {
            function: "sqrt",
            ..
        })
    ));
    assert_relative_eq!(sqrt.evaluate(4.0).expect("defined"), 2.0);

    let ln = BuiltinCompiler.compile("ln(x)").expect("compiles");
    assert!(ln.evaluate(0.0).is_err());
}

#[test]
fn division_by_zero_is_returned_as_ieee_infinity() {
    let reciprocal = BuiltinCompiler.compile("1/x").expect("compiles");
    let value = reciprocal.evaluate(0.0).expect("no structural failure");
    assert!(value.is_infinite());
}
