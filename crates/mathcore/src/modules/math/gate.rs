//! Operand validation shared by every math function.
//!
//! Python's math functions accept `bool`, `int` and `float` and nothing else.
//! The gate is an exhaustive match over [`Value`], so a new variant cannot slip
//! through unhandled.

use num_bigint::BigInt;

use crate::{
    exception::{ExcType, RunResult},
    value::Value,
};

/// Rejects operands that cannot be converted to a float.
///
/// `complex` gets its own message; every other non-real type gets the generic one.
pub(crate) fn check_float(value: &Value) -> RunResult<()> {
    match value {
        Value::Bool(_) | Value::Int(_) | Value::LongInt(_) | Value::Float(_) => Ok(()),
        Value::Complex(_) => Err(ExcType::type_error("can't convert complex to float")),
        Value::None | Value::Str(_) | Value::Tuple(_) => Err(ExcType::type_error("a float is required")),
    }
}

/// Validates an operand and converts it to `f64`.
///
/// Integers too large for a float raise `OverflowError`.
pub(crate) fn require_float(value: &Value) -> RunResult<f64> {
    check_float(value)?;
    value.to_f64()
}

/// Validates an operand where Python requires an `int` (`gcd`, the exponent of `ldexp`).
///
/// `bool` is an `int` subclass and is accepted as 0 or 1.
pub(crate) fn require_integer(value: &Value) -> RunResult<BigInt> {
    match value {
        Value::Bool(b) => Ok(BigInt::from(u8::from(*b))),
        Value::Int(i) => Ok(BigInt::from(*i)),
        Value::LongInt(li) => Ok(li.inner().clone()),
        Value::Float(_) | Value::Complex(_) | Value::None | Value::Str(_) | Value::Tuple(_) => Err(
            ExcType::type_error(format!("'{}' object cannot be interpreted as an integer", value.py_type())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Complex;

    #[test]
    fn accepts_real_numbers() {
        assert_eq!(require_float(&Value::Bool(true)).unwrap(), 1.0);
        assert_eq!(require_float(&Value::Int(3)).unwrap(), 3.0);
        assert_eq!(require_float(&Value::Float(-2.5)).unwrap(), -2.5);
    }

    #[test]
    fn rejects_complex_with_specific_message() {
        let err = require_float(&Value::Complex(Complex::new(1.0, 1.0))).unwrap_err();
        assert_eq!(err.to_string(), "TypeError: can't convert complex to float");
    }

    #[test]
    fn rejects_other_types() {
        for value in [Value::None, Value::Str("1".to_owned()), Value::Tuple(vec![])] {
            let err = require_float(&value).unwrap_err();
            assert_eq!(err.to_string(), "TypeError: a float is required");
        }
    }

    #[test]
    fn integer_gate() {
        assert_eq!(require_integer(&Value::Bool(false)).unwrap(), BigInt::from(0));
        assert_eq!(require_integer(&Value::Int(-9)).unwrap(), BigInt::from(-9));
        let err = require_integer(&Value::Float(1.0)).unwrap_err();
        assert_eq!(err.arg(), Some("'float' object cannot be interpreted as an integer"));
    }
}
