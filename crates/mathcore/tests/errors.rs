//! Exceptions raised by the math functions: type, message, and hierarchy.

use mathcore::{ArgValues, Complex, ExcType, MathError, MathFunctions, Value, call};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

fn raise(function: MathFunctions, args: Vec<Value>) -> MathError {
    call(function, ArgValues::from(args)).unwrap_err()
}

fn message(function: MathFunctions, args: Vec<Value>) -> String {
    raise(function, args).to_string()
}

#[test]
fn operand_gate() {
    for function in [MathFunctions::Erf, MathFunctions::Sqrt, MathFunctions::Frexp] {
        assert_eq!(
            message(function, vec![Value::Complex(Complex::new(1.0, 2.0))]),
            "TypeError: can't convert complex to float"
        );
        assert_eq!(message(function, vec![Value::None]), "TypeError: a float is required");
        assert_eq!(
            message(function, vec![Value::Str("1.0".to_owned())]),
            "TypeError: a float is required"
        );
    }
}

#[test]
fn huge_integers_overflow_float_conversion() {
    let huge = Value::from(BigInt::from(10).pow(400));
    assert_eq!(
        message(MathFunctions::Erf, vec![huge.clone()]),
        "OverflowError: int too large to convert to float"
    );
    assert_eq!(
        message(MathFunctions::Sqrt, vec![huge]),
        "OverflowError: int too large to convert to float"
    );
}

#[test]
fn domain_errors() {
    let cases = [
        (MathFunctions::Sqrt, vec![Value::Int(-1)]),
        (MathFunctions::Log, vec![Value::Int(0)]),
        (MathFunctions::Log, vec![Value::Float(-2.0)]),
        (MathFunctions::Log, vec![Value::Int(10), Value::Int(-2)]),
        (MathFunctions::Log2, vec![Value::Int(-8)]),
        (MathFunctions::Log10, vec![Value::from(-BigInt::from(10).pow(400))]),
        (MathFunctions::Log1p, vec![Value::Float(-1.0)]),
        (MathFunctions::Acos, vec![Value::Int(2)]),
        (MathFunctions::Cos, vec![Value::Float(f64::INFINITY)]),
        (MathFunctions::Pow, vec![Value::Float(-2.0), Value::Float(0.5)]),
        (MathFunctions::Pow, vec![Value::Int(0), Value::Int(-1)]),
        (MathFunctions::Fmod, vec![Value::Int(1), Value::Int(0)]),
    ];
    for (function, args) in cases {
        let err = raise(function, args);
        assert_eq!(err.exc_type(), ExcType::ValueError, "{function}");
        assert_eq!(err.arg(), Some("math domain error"), "{function}");
    }
}

#[test]
fn range_errors() {
    assert_eq!(
        message(MathFunctions::Exp, vec![Value::Int(1000)]),
        "OverflowError: math range error"
    );
    assert_eq!(
        message(MathFunctions::Ldexp, vec![Value::Float(1.0), Value::Int(5000)]),
        "OverflowError: math range error"
    );
    assert_eq!(
        message(MathFunctions::Pow, vec![Value::Float(1e200), Value::Int(2)]),
        "OverflowError: math range error"
    );
}

#[test]
fn log_base_one_divides_by_zero() {
    let err = raise(MathFunctions::Log, vec![Value::Int(10), Value::Int(1)]);
    assert_eq!(err.to_string(), "ZeroDivisionError: float division by zero");
    assert!(err.exc_type().is_subclass_of(ExcType::ArithmeticError));

    let err = raise(MathFunctions::Log, vec![Value::Float(2.0), Value::Float(1.0)]);
    assert_eq!(err.exc_type(), ExcType::ZeroDivisionError);
}

#[test]
fn factorial_errors() {
    assert_eq!(
        message(MathFunctions::Factorial, vec![Value::Int(-1)]),
        "ValueError: factorial() not defined for negative values"
    );
    assert_eq!(
        message(MathFunctions::Factorial, vec![Value::Float(3.5)]),
        "ValueError: factorial() only accepts integral values"
    );
    assert_eq!(
        message(MathFunctions::Factorial, vec![Value::Complex(Complex::new(3.0, 0.0))]),
        "TypeError: can't convert complex to int"
    );
    assert_eq!(
        message(MathFunctions::Factorial, vec![Value::Str("5".to_owned())]),
        "TypeError: an integer is required (got type str)"
    );
}

#[test]
fn integer_arguments() {
    assert_eq!(
        message(MathFunctions::Gcd, vec![Value::Float(4.0), Value::Int(2)]),
        "TypeError: 'float' object cannot be interpreted as an integer"
    );
    for exponent in [
        Value::Float(2.0),
        Value::None,
        Value::Str("2".to_owned()),
        Value::Complex(Complex::new(2.0, 0.0)),
    ] {
        assert_eq!(
            message(MathFunctions::Ldexp, vec![Value::Float(1.0), exponent]),
            "TypeError: Expected an int as second argument to ldexp."
        );
    }
    let doubled = call(MathFunctions::Ldexp, ArgValues::from(vec![Value::Float(1.5), Value::Bool(true)]));
    assert_eq!(doubled.unwrap(), Value::Float(3.0));
}

#[test]
fn rounding_non_finite() {
    assert_eq!(
        message(MathFunctions::Ceil, vec![Value::Float(f64::NEG_INFINITY)]),
        "OverflowError: cannot convert float infinity to integer"
    );
    assert_eq!(
        message(MathFunctions::Floor, vec![Value::Float(f64::NAN)]),
        "ValueError: cannot convert float NaN to integer"
    );
}

#[test]
fn wrong_argument_count() {
    assert_eq!(
        message(MathFunctions::Erf, vec![]),
        "TypeError: math.erf() takes exactly one argument (0 given)"
    );
    assert_eq!(
        message(MathFunctions::Factorial, vec![Value::Int(1), Value::Int(2)]),
        "TypeError: math.factorial() takes exactly one argument (2 given)"
    );
    assert_eq!(
        message(MathFunctions::Atan2, vec![Value::Int(1)]),
        "TypeError: math.atan2 expected 2 arguments, got 1"
    );
    assert_eq!(
        message(MathFunctions::Log, vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
        "TypeError: math.log expected at most 2 arguments, got 3"
    );
}

#[test]
fn errors_serialize() {
    let err = raise(MathFunctions::Sqrt, vec![Value::Int(-4)]);
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["exc_type"], "ValueError");
    assert_eq!(json["arg"], "math domain error");
}
