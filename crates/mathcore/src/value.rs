use std::fmt::{self, Display, Write};

use num_bigint::BigInt;

use crate::{
    exception::{ExcType, MathError, RunResult},
    types::{Complex, LongInt, Type},
};

/// A Python value passed into or returned from a math function.
///
/// This is the numeric tower as a closed set of variants: every function matches
/// exhaustively instead of dispatching on runtime type objects. `None`, `Str` and
/// `Tuple` are not numeric; they exist so unsupported operands can be expressed
/// (and rejected) and so `frexp`/`modf` can return their pairs.
///
/// `Int` and `LongInt` together are Python's single `int` type. Values that fit
/// in an `i64` are kept as `Int`; see [`LongInt::into_value`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    LongInt(LongInt),
    Float(f64),
    Complex(Complex),
    Str(String),
    Tuple(Vec<Self>),
}

impl Value {
    /// Builds an integer value from a `BigInt`, demoting to `Int` when it fits.
    #[must_use]
    pub fn from_bigint(bi: BigInt) -> Self {
        LongInt::new(bi).into_value()
    }

    /// Returns the Python type of this value.
    #[must_use]
    pub fn py_type(&self) -> Type {
        match self {
            Self::None => Type::NoneType,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) | Self::LongInt(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::Complex(_) => Type::Complex,
            Self::Str(_) => Type::Str,
            Self::Tuple(_) => Type::Tuple,
        }
    }

    /// Returns the value as a `BigInt` if it is an `int` (but not a `bool`).
    #[must_use]
    pub fn as_bigint(&self) -> Option<BigInt> {
        match self {
            Self::Int(i) => Some(BigInt::from(*i)),
            Self::LongInt(li) => Some(li.inner().clone()),
            _ => None,
        }
    }

    /// Python's `float(x)` for the real numeric types.
    ///
    /// Raises `OverflowError` for integers beyond the `f64` range and `TypeError`
    /// for anything that is not `bool`, `int` or `float`. Callers that need the
    /// math module's specific wording go through the operand gate first.
    pub fn to_f64(&self) -> RunResult<f64> {
        match self {
            Self::Bool(b) => Ok(f64::from(*b)),
            Self::Int(i) => Ok(*i as f64),
            Self::LongInt(li) => li
                .to_f64()
                .ok_or_else(|| MathError::new_msg(ExcType::OverflowError, "int too large to convert to float")),
            Self::Float(f) => Ok(*f),
            other => Err(ExcType::type_error(format!(
                "must be real number, not {}",
                other.py_type()
            ))),
        }
    }

    /// Returns the Python `repr()` of this value.
    #[must_use]
    pub fn py_repr(&self) -> String {
        let mut s = String::new();
        // writing to a String cannot fail
        let _ = self.repr_fmt(&mut s);
        s
    }

    fn repr_fmt(&self, f: &mut impl Write) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(i) => write!(f, "{i}"),
            Self::LongInt(li) => write!(f, "{li}"),
            Self::Float(v) => f.write_str(&float_repr(*v)),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Str(s) => string_repr_fmt(s, f),
            Self::Tuple(items) => {
                f.write_char('(')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.repr_fmt(f)?;
                }
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.repr_fmt(f)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<BigInt> for Value {
    fn from(bi: BigInt) -> Self {
        Self::from_bigint(bi)
    }
}

/// Writes a string repr using single quotes unless the string contains one.
fn string_repr_fmt(s: &str, f: &mut impl Write) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// Returns a string representation of a float matching CPython's `repr()` behavior.
///
/// Uses the `ryu` crate which produces the shortest decimal representation
/// that round-trips through `f64` parsing, matching CPython's behavior.
/// Key behaviors:
/// - Special values: `inf`, `-inf`, `nan` (lowercase)
/// - Always includes decimal point or 'e' notation
/// - Uses scientific notation when appropriate
pub(crate) fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        };
    }

    let mut buffer = ryu::Buffer::new();
    let s = buffer.format_finite(f);
    fix_ryu_exponent(s)
}

/// Fixes ryu's exponent format to match CPython.
///
/// ryu produces "1e20" but CPython uses "1e+20" for positive exponents, and
/// "1e-7" where CPython writes "1e-07". Also ensures ".0" suffix for numbers like "3" -> "3.0".
fn fix_ryu_exponent(s: &str) -> String {
    if let Some(e_pos) = s.find('e') {
        let (mantissa, exp_part) = s.split_at(e_pos);
        let exp = &exp_part[1..];
        let mantissa = mantissa.strip_suffix(".0").unwrap_or(mantissa);
        let (sign, digits) = match exp.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exp),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }

    if !s.contains('.') {
        return format!("{s}.0");
    }

    s.to_string()
}
