//! Thin wrappers over the `f64` intrinsics.
//!
//! The intrinsics follow C's conventions and return NaN or infinity where
//! Python raises, so each wrapper inspects the inputs or the result and maps
//! those cases onto `ValueError` / `OverflowError`.

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use super::gate::require_float;
use crate::{
    args::ArgValues,
    exception::{ExcType, MathError, RunResult},
    value::Value,
};

/// `180 / pi`.
const DEGREES_PER_RADIAN: f64 = 57.295_779_513_082_32;
/// `pi / 180`.
const RADIANS_PER_DEGREE: f64 = 0.017_453_292_519_943_295;

/// `2**63`, the first float past the `i64` range.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Converts an integral float to an `int`, as Python's `int(x)` does.
fn float_to_integer(f: f64) -> RunResult<Value> {
    if f.is_nan() {
        return Err(MathError::new_msg(
            ExcType::ValueError,
            "cannot convert float NaN to integer",
        ));
    }
    if f.is_infinite() {
        return Err(MathError::new_msg(
            ExcType::OverflowError,
            "cannot convert float infinity to integer",
        ));
    }
    if (-TWO_POW_63..TWO_POW_63).contains(&f) {
        #[expect(clippy::cast_possible_truncation, reason = "f is integral and within i64 range")]
        return Ok(Value::Int(f as i64));
    }
    BigInt::from_f64(f)
        .map(Value::from_bigint)
        .ok_or_else(|| MathError::new_msg(ExcType::OverflowError, "cannot convert float infinity to integer"))
}

/// Shared body of `ceil`, `floor` and `trunc`: integers pass through unchanged.
fn round_to_integer(arg: &Value, round: fn(f64) -> f64) -> RunResult<Value> {
    match arg {
        Value::Int(i) => Ok(Value::Int(*i)),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::LongInt(li) => Ok(Value::LongInt(li.clone())),
        other => float_to_integer(round(require_float(other)?)),
    }
}

/// Raises a domain error when a finite input produced a non-finite result.
fn domain_checked(x: f64, result: f64) -> RunResult<Value> {
    if x.is_finite() && !result.is_finite() {
        return Err(ExcType::domain_error());
    }
    Ok(Value::Float(result))
}

/// Raises a range error when a finite input produced a non-finite result.
fn range_checked(x: f64, result: f64) -> RunResult<Value> {
    if x.is_finite() && !result.is_finite() {
        return Err(ExcType::range_error());
    }
    Ok(Value::Float(result))
}

/// Trigonometric functions are undefined at infinity.
fn finite_angle(name: &str, args: ArgValues) -> RunResult<f64> {
    let x = require_float(&args.get_one_arg(name)?)?;
    if x.is_infinite() {
        return Err(ExcType::domain_error());
    }
    Ok(x)
}

/// Implementation of `math.ceil(x)`.
///
/// Returns the smallest integer >= x.
pub(super) fn math_ceil(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.ceil")?;
    round_to_integer(&arg, f64::ceil)
}

/// Implementation of `math.floor(x)`.
///
/// Returns the largest integer <= x.
pub(super) fn math_floor(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.floor")?;
    round_to_integer(&arg, f64::floor)
}

/// Implementation of `math.trunc(x)`.
///
/// Truncates x to the nearest integer toward 0.
pub(super) fn math_trunc(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.trunc")?;
    round_to_integer(&arg, f64::trunc)
}

/// Implementation of `math.fabs(x)`.
pub(super) fn math_fabs(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.fabs")?;
    Ok(Value::Float(require_float(&arg)?.abs()))
}

/// Implementation of `math.copysign(x, y)`.
///
/// The sign is taken from the comparison `y >= 0`, not from the sign bit, so a
/// negative zero `y` leaves a positive `x` unchanged.
pub(super) fn math_copysign(args: ArgValues) -> RunResult<Value> {
    let (x, y) = args.get_two_args("math.copysign")?;
    let x = require_float(&x)?;
    let y = require_float(&y)?;
    if (x >= 0.0) == (y >= 0.0) {
        Ok(Value::Float(x))
    } else {
        Ok(Value::Float(-x))
    }
}

/// Implementation of `math.sqrt(x)`.
pub(super) fn math_sqrt(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.sqrt")?;
    let f = require_float(&arg)?;
    if f < 0.0 {
        return Err(ExcType::domain_error());
    }
    Ok(Value::Float(f.sqrt()))
}

/// Implementation of `math.pow(x, y)`.
///
/// The native result is computed first, then checked: domain violations take
/// precedence over overflow.
pub(super) fn math_pow(args: ArgValues) -> RunResult<Value> {
    let (x, y) = args.get_two_args("math.pow")?;
    let x = require_float(&x)?;
    let y = require_float(&y)?;
    let result = x.powf(y);

    if x.is_finite() && x < 0.0 && y.is_finite() && y.fract() != 0.0 {
        return Err(ExcType::domain_error());
    }
    if x == 0.0 && y < 0.0 && y.is_finite() {
        return Err(ExcType::domain_error());
    }
    if x.is_finite() && y.is_finite() && !result.is_finite() {
        return Err(ExcType::range_error());
    }
    Ok(Value::Float(result))
}

/// Implementation of `math.exp(x)`.
pub(super) fn math_exp(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.exp")?;
    let f = require_float(&arg)?;
    range_checked(f, f.exp())
}

/// Implementation of `math.expm1(x)`.
///
/// Returns `exp(x) - 1` with higher precision for small x.
pub(super) fn math_expm1(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.expm1")?;
    let f = require_float(&arg)?;
    range_checked(f, f.exp_m1())
}

// === Trigonometry ===

/// Implementation of `math.sin(x)`.
pub(super) fn math_sin(args: ArgValues) -> RunResult<Value> {
    Ok(Value::Float(finite_angle("math.sin", args)?.sin()))
}

/// Implementation of `math.cos(x)`.
pub(super) fn math_cos(args: ArgValues) -> RunResult<Value> {
    Ok(Value::Float(finite_angle("math.cos", args)?.cos()))
}

/// Implementation of `math.tan(x)`.
pub(super) fn math_tan(args: ArgValues) -> RunResult<Value> {
    Ok(Value::Float(finite_angle("math.tan", args)?.tan()))
}

/// Implementation of `math.asin(x)`.
///
/// Returns the arc sine (measured in radians) of x.
pub(super) fn math_asin(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.asin")?;
    let f = require_float(&arg)?;
    domain_checked(f, f.asin())
}

/// Implementation of `math.acos(x)`.
///
/// Returns the arc cosine (measured in radians) of x.
pub(super) fn math_acos(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.acos")?;
    let f = require_float(&arg)?;
    domain_checked(f, f.acos())
}

/// Implementation of `math.atan(x)`.
pub(super) fn math_atan(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.atan")?;
    Ok(Value::Float(require_float(&arg)?.atan()))
}

/// Implementation of `math.atan2(y, x)`.
///
/// Returns atan(y/x) in radians, between -pi and pi, using the signs of both
/// arguments to pick the quadrant.
pub(super) fn math_atan2(args: ArgValues) -> RunResult<Value> {
    let (y, x) = args.get_two_args("math.atan2")?;
    let y = require_float(&y)?;
    let x = require_float(&x)?;
    Ok(Value::Float(y.atan2(x)))
}

/// Implementation of `math.hypot(x, y)`.
pub(super) fn math_hypot(args: ArgValues) -> RunResult<Value> {
    let (x, y) = args.get_two_args("math.hypot")?;
    let x = require_float(&x)?;
    let y = require_float(&y)?;
    Ok(Value::Float(x.hypot(y)))
}

/// Implementation of `math.degrees(x)`.
pub(super) fn math_degrees(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.degrees")?;
    Ok(Value::Float(require_float(&arg)? * DEGREES_PER_RADIAN))
}

/// Implementation of `math.radians(x)`.
pub(super) fn math_radians(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.radians")?;
    Ok(Value::Float(require_float(&arg)? * RADIANS_PER_DEGREE))
}

// === Hyperbolic functions ===

/// Implementation of `math.sinh(x)`. Returns the hyperbolic sine of x.
pub(super) fn math_sinh(args: ArgValues) -> RunResult<Value> {
    let f = require_float(&args.get_one_arg("math.sinh")?)?;
    range_checked(f, f.sinh())
}

/// Implementation of `math.cosh(x)`. Returns the hyperbolic cosine of x.
pub(super) fn math_cosh(args: ArgValues) -> RunResult<Value> {
    let f = require_float(&args.get_one_arg("math.cosh")?)?;
    range_checked(f, f.cosh())
}

/// Implementation of `math.tanh(x)`. Returns the hyperbolic tangent of x.
pub(super) fn math_tanh(args: ArgValues) -> RunResult<Value> {
    let f = require_float(&args.get_one_arg("math.tanh")?)?;
    Ok(Value::Float(f.tanh()))
}

/// Implementation of `math.asinh(x)`. Returns the inverse hyperbolic sine of x.
pub(super) fn math_asinh(args: ArgValues) -> RunResult<Value> {
    let f = require_float(&args.get_one_arg("math.asinh")?)?;
    Ok(Value::Float(f.asinh()))
}

/// Implementation of `math.acosh(x)`. Returns the inverse hyperbolic cosine of x.
/// Raises ValueError if x < 1.
pub(super) fn math_acosh(args: ArgValues) -> RunResult<Value> {
    let f = require_float(&args.get_one_arg("math.acosh")?)?;
    domain_checked(f, f.acosh())
}

/// Implementation of `math.atanh(x)`. Returns the inverse hyperbolic tangent of x.
/// Raises ValueError if x is not in the open interval (-1, 1).
pub(super) fn math_atanh(args: ArgValues) -> RunResult<Value> {
    let f = require_float(&args.get_one_arg("math.atanh")?)?;
    domain_checked(f, f.atanh())
}

/// Implementation of `math.fmod(x, y)`.
///
/// Returns the remainder of x / y with the sign of x, as C's `fmod`.
pub(super) fn math_fmod(args: ArgValues) -> RunResult<Value> {
    let (x, y) = args.get_two_args("math.fmod")?;
    let x = require_float(&x)?;
    let y = require_float(&y)?;
    if x.is_nan() || y.is_nan() {
        return Ok(Value::Float(f64::NAN));
    }
    if x.is_infinite() || y == 0.0 {
        return Err(ExcType::domain_error());
    }
    Ok(Value::Float(x % y))
}
