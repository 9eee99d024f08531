//! Integers wider than `i64`.
//!
//! Python has a single `int` type. Here it is split in two: `Value::Int` for
//! anything that fits in a machine word and `Value::LongInt` for the rest.

use std::fmt::{self, Display};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::value::Value;

/// An arbitrary-precision integer carried by [`Value::LongInt`].
///
/// Build values through [`LongInt::into_value`] so that anything fitting in an
/// `i64` ends up as `Value::Int`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct LongInt(pub BigInt);

impl LongInt {
    #[must_use]
    pub fn new(bi: BigInt) -> Self {
        Self(bi)
    }

    /// Wraps the integer as a `Value`, narrowing to `Value::Int` when possible.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self.0.to_i64() {
            Some(i) => Value::Int(i),
            None => Value::LongInt(self),
        }
    }

    #[must_use]
    pub fn inner(&self) -> &BigInt {
        &self.0
    }

    /// Finite `f64` approximation, or `None` past `f64::MAX`.
    ///
    /// `BigInt::to_f64` saturates to infinity; Python raises `OverflowError` there.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64().filter(|f| f.is_finite())
    }
}

impl From<BigInt> for LongInt {
    fn from(bi: BigInt) -> Self {
        Self(bi)
    }
}

impl From<i64> for LongInt {
    fn from(i: i64) -> Self {
        Self(BigInt::from(i))
    }
}

impl Display for LongInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
