//! Logarithms, including logarithms of integers far beyond the `f64` range.
//!
//! Python's `math.log(10**1000)` works even though `float(10**1000)` overflows.
//! [`log2_big`] handles this by reading only the leading 54 bits of the integer
//! and adding the bit length back as an exponent.

use log::debug;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use super::gate::{check_float, require_float};
use crate::{
    args::ArgValues,
    exception::{ExcType, RunResult},
    value::Value,
};

/// Number of leading bits kept when an integer is too wide to convert directly.
const LEADING_BITS: u32 = 54;

/// `2**54`; scales the leading bits into `[0.5, 1.0)`.
const TWO_POW_54: f64 = 18_014_398_509_481_984.0;

/// Base-2 logarithm of an arbitrary-precision integer.
///
/// Integers narrower than 54 bits convert to `f64` without losing anything that
/// matters here and use the native `log2`. Wider integers are treated as
/// `M * 2**(L - 54)` where `M` is their leading 54 bits and `L` their bit length,
/// so `log2(n) = log2(M / 2**54) + L`.
///
/// Raises `ValueError: math domain error` for zero and negative integers.
pub fn log2_big(n: &BigInt) -> RunResult<f64> {
    if n.is_zero() || n.is_negative() {
        return Err(ExcType::domain_error());
    }
    let bit_length = n.bits();
    if bit_length < u64::from(LEADING_BITS) {
        let value = n.to_f64().ok_or_else(ExcType::domain_error)?;
        return Ok(value.log2());
    }
    let shift = bit_length - u64::from(LEADING_BITS);
    let leading = (n.magnitude() >> shift).to_u64().ok_or_else(ExcType::domain_error)?;
    debug!("log2_big: {bit_length}-bit integer, leading bits {leading:#x}");
    Ok((leading as f64 / TWO_POW_54).log2() + bit_length as f64)
}

/// Natural logarithm of `x`.
///
/// Integers whose float conversion would overflow go through [`log2_big`].
fn ln_value(x: &Value) -> RunResult<f64> {
    if let Some(n) = x.as_bigint() {
        if !n.is_positive() {
            return Err(ExcType::domain_error());
        }
        if n.to_f64().is_none_or(f64::is_infinite) {
            return Ok(log2_big(&n)? * std::f64::consts::LN_2);
        }
    }
    let f = require_float(x)?;
    if f <= 0.0 {
        return Err(ExcType::domain_error());
    }
    Ok(f.ln())
}

/// Implementation of `math.log(x[, base])`.
///
/// Returns the logarithm of x to the given base.
/// If the base is not specified, returns the natural logarithm (base e).
pub(super) fn math_log(args: ArgValues) -> RunResult<Value> {
    let (x, base) = args.get_one_two_args("math.log")?;

    // both integers: stay in log2 space so neither needs a float conversion
    if let (Some(xn), Some(bn)) = (x.as_bigint(), base.as_ref().and_then(Value::as_bigint)) {
        let numerator = log2_big(&xn)?;
        let denominator = log2_big(&bn)?;
        if denominator == 0.0 {
            return Err(ExcType::zero_division());
        }
        return Ok(Value::Float(numerator / denominator));
    }

    check_float(&x)?;
    let Some(base) = base else {
        return Ok(Value::Float(ln_value(&x)?));
    };
    check_float(&base)?;
    let numerator = ln_value(&x)?;
    let denominator = ln_value(&base)?;
    if denominator == 0.0 {
        return Err(ExcType::zero_division());
    }
    Ok(Value::Float(numerator / denominator))
}

/// Implementation of `math.log2(x)`.
///
/// Returns the base 2 logarithm of x.
pub(super) fn math_log2(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.log2")?;
    check_float(&arg)?;
    if let Some(n) = arg.as_bigint() {
        return Ok(Value::Float(log2_big(&n)?));
    }
    let f = require_float(&arg)?;
    if f <= 0.0 {
        return Err(ExcType::domain_error());
    }
    Ok(Value::Float(f.log2()))
}

/// Implementation of `math.log10(x)`.
///
/// Returns the base 10 logarithm of x.
pub(super) fn math_log10(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.log10")?;
    check_float(&arg)?;
    if let Some(n) = arg.as_bigint() {
        if !n.is_positive() {
            return Err(ExcType::domain_error());
        }
        if n.to_f64().is_none_or(f64::is_infinite) {
            return Ok(Value::Float(log2_big(&n)? * std::f64::consts::LOG10_2));
        }
    }
    let f = require_float(&arg)?;
    if f <= 0.0 {
        return Err(ExcType::domain_error());
    }
    Ok(Value::Float(f.log10()))
}

/// Implementation of `math.log1p(x)`.
///
/// Returns the natural log of `1+x`, with better accuracy for small x.
pub(super) fn math_log1p(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.log1p")?;
    let f = require_float(&arg)?;
    if f <= -1.0 {
        return Err(ExcType::domain_error());
    }
    Ok(Value::Float(f.ln_1p()))
}
