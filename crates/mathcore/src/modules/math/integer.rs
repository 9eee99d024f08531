//! Integer-valued functions: `factorial` and `gcd`.

use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive};

use super::gate::require_integer;
use crate::{
    args::ArgValues,
    exception::{ExcType, MathError, RunResult},
    value::Value,
};

/// Returns `n!`.
///
/// The factors `[n, n-1, ..., 1]` are multiplied pairwise in a balanced tree,
/// so the big multiplications happen between operands of similar size.
///
/// Raises `ValueError` for negative `n` and `OverflowError` when `n` does not
/// fit in a machine word.
pub fn factorial(n: &BigInt) -> RunResult<BigInt> {
    if n.is_negative() {
        return Err(MathError::new_msg(
            ExcType::ValueError,
            "factorial() not defined for negative values",
        ));
    }
    let Some(n) = n.to_u64().filter(|n| i64::try_from(*n).is_ok()) else {
        return Err(MathError::new_msg(
            ExcType::OverflowError,
            format!("factorial() argument should not exceed {}", i64::MAX),
        ));
    };
    if n < 2 {
        return Ok(BigInt::one());
    }
    debug!("factorial: reducing {n} factors");
    let factors: Vec<BigInt> = (1..=n).rev().map(BigInt::from).collect();
    Ok(balanced_product(&factors))
}

/// Product of a factor slice, splitting it near the middle.
///
/// Slices of up to three factors are multiplied directly. Longer ones are split
/// after index `round(len / 2)`, rounding halves up, and both halves recurse.
fn balanced_product(factors: &[BigInt]) -> BigInt {
    match factors {
        [] => BigInt::one(),
        [a] => a.clone(),
        [a, b] => a * b,
        [a, b, c] => a * b * c,
        _ => {
            let (left, right) = factors.split_at(factors.len().div_ceil(2) + 1);
            balanced_product(left) * balanced_product(right)
        }
    }
}

/// Converts a `math.factorial` operand to the integer it denotes.
///
/// `bool` always maps to 1, and a float is accepted only if it is integral.
fn factorial_operand(value: &Value) -> RunResult<BigInt> {
    match value {
        Value::Bool(_) => Ok(BigInt::one()),
        Value::Int(i) => Ok(BigInt::from(*i)),
        Value::LongInt(li) => Ok(li.inner().clone()),
        Value::Float(f) => {
            if f.is_finite() && f.fract() == 0.0 {
                BigInt::from_f64(*f).ok_or_else(non_integral)
            } else {
                Err(non_integral())
            }
        }
        Value::Complex(_) => Err(ExcType::type_error("can't convert complex to int")),
        Value::None | Value::Str(_) | Value::Tuple(_) => Err(ExcType::type_error(format!(
            "an integer is required (got type {})",
            value.py_type()
        ))),
    }
}

fn non_integral() -> MathError {
    MathError::new_msg(ExcType::ValueError, "factorial() only accepts integral values")
}

/// Implementation of `math.factorial(x)`.
///
/// Returns x! as an integer.
pub(super) fn math_factorial(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.factorial")?;
    let n = factorial_operand(&arg)?;
    Ok(Value::from_bigint(factorial(&n)?))
}

/// Implementation of `math.gcd(a, b)`.
///
/// Returns the greatest common divisor of two integers, always non-negative.
pub(super) fn math_gcd(args: ArgValues) -> RunResult<Value> {
    let (a, b) = args.get_two_args("math.gcd")?;
    let a = require_integer(&a)?;
    let b = require_integer(&b)?;
    Ok(Value::from_bigint(a.gcd(&b)))
}
