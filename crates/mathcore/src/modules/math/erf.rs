//! The error function and its complement.
//!
//! Small arguments use a Taylor series, large ones a continued fraction for
//! `erfc`. Both are evaluated on `|x|` and the sign is reapplied, since `erf`
//! is odd.

use log::debug;

use super::gate::require_float;
use crate::{args::ArgValues, exception::RunResult, value::Value};

/// Below this magnitude the series converges faster than the continued fraction.
const SERIES_CUTOFF: f64 = 1.5;

/// Number of terms summed by the series, including the leading constant term.
const SERIES_TERMS: u32 = 25;

/// Number of continued fraction iterations.
const CFRAC_ITERATIONS: u32 = 50;

/// Past this point `erfc(x)` is below the smallest subnormal.
const CFRAC_CUTOFF: f64 = 30.0;

/// `1 / sqrt(pi)`.
const FRAC_1_SQRT_PI: f64 = 0.564_189_583_547_756_3;

/// Taylor series for `erf(x)`, accurate for `|x| < 1.5`.
///
/// Sums `x**(2k) * 4**k * k! / (2k)!` for `k` in `0..25`, carrying the
/// numerator and denominator along instead of recomputing them.
fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut sum = 2.0;
    let mut numerator = 4.0;
    let mut denominator = 2.0;
    let mut x_power = 1.0;
    for i in 2..=SERIES_TERMS {
        let k = f64::from(i);
        numerator *= 4.0 * k;
        denominator *= (2.0 * k - 1.0) * (2.0 * k);
        x_power *= x2;
        sum += x_power * numerator / denominator;
    }
    sum * x * (-x2).exp() * FRAC_1_SQRT_PI
}

/// Continued fraction for `erfc(x)`, accurate for `x >= 1.5`.
fn erfc_cfrac(x: f64) -> f64 {
    if x > CFRAC_CUTOFF {
        return 0.0;
    }
    let x2 = x * x;
    let (mut num, mut num_prev) = (1.0, 0.0);
    let (mut den, mut den_prev) = (0.5 + x2, 1.0);
    let mut partial_num = 0.0;
    let mut coeff = 0.5;
    for _ in 0..CFRAC_ITERATIONS {
        partial_num += coeff;
        coeff += 2.0;
        let partial_den = coeff + x2;
        (num, num_prev) = (partial_den * num - partial_num * num_prev, num);
        (den, den_prev) = (partial_den * den - partial_num * den_prev, den);
    }
    num / den * x * (-x2).exp() * FRAC_1_SQRT_PI
}

/// The error function `erf(x) = 2/sqrt(pi) * integral(exp(-t**2), 0, x)`.
///
/// NaN propagates. `erf(±inf) == ±1`.
#[must_use]
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let magnitude = x.abs();
    let result = if magnitude < SERIES_CUTOFF {
        debug!("erf({x}): series");
        erf_series(magnitude)
    } else {
        debug!("erf({x}): continued fraction");
        1.0 - erfc_cfrac(magnitude)
    };
    result.copysign(x)
}

/// The complementary error function, `1 - erf(x)`.
#[must_use]
pub fn erfc(x: f64) -> f64 {
    1.0 - erf(x)
}

/// Implementation of `math.erf(x)`.
pub(super) fn math_erf(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.erf")?;
    Ok(Value::Float(erf(require_float(&arg)?)))
}

/// Implementation of `math.erfc(x)`.
pub(super) fn math_erfc(args: ArgValues) -> RunResult<Value> {
    let arg = args.get_one_arg("math.erfc")?;
    Ok(Value::Float(erfc(require_float(&arg)?)))
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn known_values() {
        assert_eq!(erf(0.0), 0.0);
        assert_close(erf(0.1), 0.112_462_916_018_284_9, 1e-15);
        assert_close(erf(0.5), 0.520_499_877_813_046_5, 1e-15);
        assert_close(erf(1.0), 0.842_700_792_949_714_9, 1e-15);
        assert_close(erf(2.0), 0.995_322_265_018_952_7, 1e-15);
        assert_close(erf(3.0), 0.999_977_909_503_001_4, 1e-15);
        assert_close(erfc(1.0), 0.157_299_207_050_285_13, 1e-15);
    }

    #[test]
    fn odd_symmetry() {
        for x in [0.01, 0.7, 1.2, 1.5, 2.5, 6.0, 40.0] {
            assert_eq!(erf(-x), -erf(x), "erf(-{x})");
        }
        assert!(erf(-0.0).is_sign_negative());
    }

    #[test]
    fn complement_sums_to_one() {
        for x in [-3.0, -1.0, 0.0, 0.3, 1.49, 1.51, 4.0] {
            assert_close(erf(x) + erfc(x), 1.0, 1e-15);
        }
    }

    #[test]
    fn branches_agree_at_cutoff() {
        let below = erf_series(SERIES_CUTOFF);
        let above = 1.0 - erfc_cfrac(SERIES_CUTOFF);
        assert_close(below, above, 1e-6);
        assert_close(erf(1.499_999_9), erf(1.5), 1e-6);
    }

    #[test]
    fn saturates_far_from_zero() {
        assert_eq!(erf(30.5), 1.0);
        assert_eq!(erf(f64::INFINITY), 1.0);
        assert_eq!(erf(f64::NEG_INFINITY), -1.0);
        assert_eq!(erfc(f64::INFINITY), 0.0);
        assert_eq!(erfc(f64::NEG_INFINITY), 2.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(erf(f64::NAN).is_nan());
        assert!(erfc(f64::NAN).is_nan());
    }
}
