//! Implementation of Python's `math` module.
//!
//! - Constants: pi, e, tau, inf, nan
//! - Rounding and sign: ceil, floor, trunc, fabs, copysign
//! - Powers and logarithms: sqrt, pow, exp, expm1, log, log1p, log2, log10
//! - Trigonometry: sin, cos, tan, asin, acos, atan, atan2, hypot
//! - Hyperbolic: sinh, cosh, tanh, asinh, acosh, atanh
//! - Angle conversion: degrees, radians
//! - Predicates: isnan, isinf, isfinite
//! - Integer functions: factorial, gcd
//! - Special functions: erf, erfc
//! - Float manipulation: frexp, ldexp, modf, fmod

mod elementary;
mod erf;
mod float_bits;
mod gate;
mod integer;
mod logarithm;

pub use erf::{erf, erfc};
pub use float_bits::{frexp, ldexp, modf};
pub use integer::factorial;
pub use logarithm::log2_big;

use crate::{args::ArgValues, exception::RunResult, tracer::CallTracer, value::Value};

/// Euler's number.
pub const E: f64 = std::f64::consts::E;
/// Ratio of a circle's circumference to its diameter.
pub const PI: f64 = std::f64::consts::PI;
/// `2 * pi`.
pub const TAU: f64 = std::f64::consts::TAU;
/// Positive infinity.
pub const INF: f64 = f64::INFINITY;
/// Quiet NaN.
pub const NAN: f64 = f64::NAN;

/// Looks up a module constant by its Python name.
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "e" => Some(E),
        "pi" => Some(PI),
        "tau" => Some(TAU),
        "inf" => Some(INF),
        "nan" => Some(NAN),
        _ => None,
    }
}

/// Math module functions.
///
/// Each variant corresponds to a Python `math` module function; the lowercase
/// variant name is the Python name, so `"log1p".parse()` yields [`Self::Log1p`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MathFunctions {
    // Rounding and sign
    Ceil,
    Floor,
    Trunc,
    Fabs,
    Copysign,
    // Powers and logarithms
    Sqrt,
    Pow,
    Exp,
    Expm1,
    Log,
    Log1p,
    Log2,
    Log10,
    // Trigonometry
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Hypot,
    // Hyperbolic functions
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    // Angle conversion
    Degrees,
    Radians,
    // Predicates
    Isnan,
    Isinf,
    Isfinite,
    // Integer functions
    Factorial,
    Gcd,
    // Special functions
    Erf,
    Erfc,
    // Float decomposition and manipulation
    Frexp,
    Ldexp,
    Modf,
    Fmod,
}

/// Dispatches a call to a math module function.
///
/// Argument count, operand types and domain are all checked by the callee;
/// any failure comes back as the Python exception it would raise.
pub fn call(function: MathFunctions, args: ArgValues) -> RunResult<Value> {
    match function {
        MathFunctions::Ceil => elementary::math_ceil(args),
        MathFunctions::Floor => elementary::math_floor(args),
        MathFunctions::Trunc => elementary::math_trunc(args),
        MathFunctions::Fabs => elementary::math_fabs(args),
        MathFunctions::Copysign => elementary::math_copysign(args),
        MathFunctions::Sqrt => elementary::math_sqrt(args),
        MathFunctions::Pow => elementary::math_pow(args),
        MathFunctions::Exp => elementary::math_exp(args),
        MathFunctions::Expm1 => elementary::math_expm1(args),
        MathFunctions::Log => logarithm::math_log(args),
        MathFunctions::Log1p => logarithm::math_log1p(args),
        MathFunctions::Log2 => logarithm::math_log2(args),
        MathFunctions::Log10 => logarithm::math_log10(args),
        MathFunctions::Sin => elementary::math_sin(args),
        MathFunctions::Cos => elementary::math_cos(args),
        MathFunctions::Tan => elementary::math_tan(args),
        MathFunctions::Asin => elementary::math_asin(args),
        MathFunctions::Acos => elementary::math_acos(args),
        MathFunctions::Atan => elementary::math_atan(args),
        MathFunctions::Atan2 => elementary::math_atan2(args),
        MathFunctions::Hypot => elementary::math_hypot(args),
        MathFunctions::Sinh => elementary::math_sinh(args),
        MathFunctions::Cosh => elementary::math_cosh(args),
        MathFunctions::Tanh => elementary::math_tanh(args),
        MathFunctions::Asinh => elementary::math_asinh(args),
        MathFunctions::Acosh => elementary::math_acosh(args),
        MathFunctions::Atanh => elementary::math_atanh(args),
        MathFunctions::Degrees => elementary::math_degrees(args),
        MathFunctions::Radians => elementary::math_radians(args),
        MathFunctions::Isnan => float_bits::math_isnan(args),
        MathFunctions::Isinf => float_bits::math_isinf(args),
        MathFunctions::Isfinite => float_bits::math_isfinite(args),
        MathFunctions::Factorial => integer::math_factorial(args),
        MathFunctions::Gcd => integer::math_gcd(args),
        MathFunctions::Erf => erf::math_erf(args),
        MathFunctions::Erfc => erf::math_erfc(args),
        MathFunctions::Frexp => float_bits::math_frexp(args),
        MathFunctions::Ldexp => float_bits::math_ldexp(args),
        MathFunctions::Modf => float_bits::math_modf(args),
        MathFunctions::Fmod => elementary::math_fmod(args),
    }
}

/// Like [`call`], reporting the call and its outcome to `tracer`.
pub fn call_traced(function: MathFunctions, args: ArgValues, tracer: &mut impl CallTracer) -> RunResult<Value> {
    tracer.on_call(function, &args);
    let result = call(function, args);
    match &result {
        Ok(value) => tracer.on_return(function, value),
        Err(error) => tracer.on_error(function, error),
    }
    result
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_round_trip() {
        for function in MathFunctions::iter() {
            let name = function.to_string();
            assert_eq!(name, name.to_lowercase());
            assert_eq!(MathFunctions::from_str(&name).unwrap(), function);
        }
        assert_eq!(MathFunctions::from_str("log1p").unwrap(), MathFunctions::Log1p);
        assert!(MathFunctions::from_str("gamma").is_err());
    }

    #[test]
    fn constants_by_name() {
        assert_eq!(constant("pi"), Some(PI));
        assert_eq!(constant("tau"), Some(2.0 * PI));
        assert!(constant("nan").is_some_and(f64::is_nan));
        assert_eq!(constant("phi"), None);
    }

    #[test]
    fn serde_uses_python_names() {
        let json = serde_json::to_string(&MathFunctions::Atan2).unwrap();
        assert_eq!(json, "\"atan2\"");
    }
}
