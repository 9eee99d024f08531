//! Float decomposition and manipulation: `frexp`, `ldexp`, `modf` and the
//! `isnan`/`isinf`/`isfinite` predicates.

use log::trace;
use num_bigint::Sign;
use num_traits::ToPrimitive;

use super::gate::{require_float, require_integer};
use crate::{
    args::ArgValues,
    exception::{ExcType, RunResult},
    value::Value,
};

const TWO_POW_51: u64 = 1 << 51;
const TWO_POW_52: f64 = 4_503_599_627_370_496.0;
const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

/// Largest `frexp` exponent of a finite double.
const MAX_FREXP_EXPONENT: i64 = 1024;
/// `frexp` exponents above this one belong to normal doubles.
const MIN_NORMAL_FREXP_EXPONENT: i64 = -1022;

/// Raw IEEE-754 fields of a double.
///
/// Only lives for the duration of a decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BitFields {
    negative: bool,
    /// Bits 52-62, in `0..=2047`.
    biased_exponent: u32,
    /// Bits 0-51, in `0..2^52`.
    fraction: u64,
}

impl BitFields {
    fn from_f64(x: f64) -> Self {
        let bits = x.to_bits();
        #[expect(clippy::cast_possible_truncation, reason = "splitting into 32-bit words")]
        let (high, low) = ((bits >> 32) as u32, bits as u32);
        Self {
            negative: high >> 31 != 0,
            biased_exponent: (high >> 20) & 0x7FF,
            fraction: (u64::from(high & 0x000F_FFFF) << 32) | u64::from(low),
        }
    }
}

/// Splits `x` into a mantissa and a power-of-two exponent, `x == m * 2**e`.
///
/// For finite non-zero `x`, `0.5 <= |m| < 1.0`. Zeros, infinities and NaN are
/// returned unchanged with an exponent of 0.
#[must_use]
pub fn frexp(x: f64) -> (f64, i64) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let fields = BitFields::from_f64(x);
    let (magnitude, exponent) = if fields.biased_exponent == 0 {
        // subnormal: no implicit leading bit, shift until bit 51 is set
        trace!("frexp: renormalizing subnormal {x:e}");
        let mut fraction = fields.fraction;
        let mut exponent = -1022_i64;
        while fraction < TWO_POW_51 {
            fraction <<= 1;
            exponent -= 1;
        }
        (fraction as f64 / TWO_POW_52, exponent)
    } else {
        (
            (TWO_POW_52 + fields.fraction as f64) / TWO_POW_53,
            i64::from(fields.biased_exponent) - 1022,
        )
    };
    if fields.negative {
        (-magnitude, exponent)
    } else {
        (magnitude, exponent)
    }
}

/// Returns `x * 2**exp`, raising `OverflowError` if the result is not finite.
///
/// The result is rebuilt from `frexp(x)` with a single rounding, so subnormal
/// results round exactly once. Underflow quietly goes to a (signed) zero, like
/// C's `ldexp`.
pub fn ldexp(x: f64, exp: i64) -> RunResult<f64> {
    if x == 0.0 || !x.is_finite() {
        return Ok(x);
    }
    let (mantissa, exponent) = frexp(x);
    // any exponent past this range saturates to overflow or zero
    let target = exponent + exp.clamp(-2200, 2200);
    if target > MAX_FREXP_EXPONENT {
        return Err(ExcType::range_error());
    }
    let result = if target > MIN_NORMAL_FREXP_EXPONENT {
        // normal result: exact
        mantissa * 2.0 * pow2(target - 1)
    } else if target > MIN_NORMAL_FREXP_EXPONENT - 1022 {
        // stays normal after the first step, rounds once in the second
        mantissa * pow2(target + 1022) * pow2(-1022)
    } else {
        0.0_f64.copysign(x)
    };
    Ok(result)
}

/// `2**exp` for a normal exponent in `-1022..=1023`.
fn pow2(exp: i64) -> f64 {
    debug_assert!((-1022..=1023).contains(&exp));
    #[expect(clippy::cast_sign_loss, reason = "1023 + exp is in 1..=2046")]
    let biased = (1023 + exp) as u64;
    f64::from_bits(biased << 52)
}

/// Returns the fractional and integral parts of `x`, both carrying the sign of `x`.
#[must_use]
pub fn modf(x: f64) -> (f64, f64) {
    if x.is_nan() {
        return (x, x);
    }
    if x.is_infinite() {
        return (0.0_f64.copysign(x), x);
    }
    let int_part = x.trunc();
    ((x - int_part).copysign(x), int_part)
}

/// Implementation of `math.frexp(x)`. Returns tuple `(mantissa, exponent)`.
pub(super) fn math_frexp(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.frexp")?;
    let (mantissa, exponent) = frexp(require_float(&arg)?);
    Ok(Value::Tuple(vec![Value::Float(mantissa), Value::Int(exponent)]))
}

/// Implementation of `math.ldexp(x, i)`. Returns `x * 2**i`.
pub(super) fn math_ldexp(args: ArgValues) -> RunResult<Value> {
    let (x, i) = args.get_two_args("math.ldexp")?;
    let x = require_float(&x)?;
    if !matches!(i, Value::Bool(_) | Value::Int(_) | Value::LongInt(_)) {
        return Err(ExcType::type_error("Expected an int as second argument to ldexp."));
    }
    let exp = require_integer(&i)?;
    // exponents outside i64 are saturated; ldexp clamps them further anyway
    let exp = exp.to_i64().unwrap_or_else(|| {
        if exp.sign() == Sign::Minus {
            i64::MIN
        } else {
            i64::MAX
        }
    });
    Ok(Value::Float(ldexp(x, exp)?))
}

/// Implementation of `math.modf(x)`. Returns tuple `(fractional, integer)`.
pub(super) fn math_modf(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.modf")?;
    let (fractional, integral) = modf(require_float(&arg)?);
    Ok(Value::Tuple(vec![Value::Float(fractional), Value::Float(integral)]))
}

/// Implementation of `math.isnan(x)`.
pub(super) fn math_isnan(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.isnan")?;
    Ok(Value::Bool(require_float(&arg)?.is_nan()))
}

/// Implementation of `math.isinf(x)`.
pub(super) fn math_isinf(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.isinf")?;
    Ok(Value::Bool(require_float(&arg)?.is_infinite()))
}

/// Implementation of `math.isfinite(x)`.
pub(super) fn math_isfinite(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.isfinite")?;
    Ok(Value::Bool(require_float(&arg)?.is_finite()))
}
