//! Parsing of command-line operands written as Python literals.

use std::{fmt, str::FromStr};

use mathcore::{Complex, Value};
use num_bigint::BigInt;

/// An operand that is not a recognizable Python literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLiteralError {
    text: String,
}

impl fmt::Display for ParseLiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse operand '{}'", self.text)
    }
}

impl std::error::Error for ParseLiteralError {}

/// Parses one operand.
///
/// Accepts `True`, `False`, `None`, integers of any size, floats (including
/// `inf` and `nan`), complex numbers such as `2j` or `(1.5-0.5j)`, and single-
/// or double-quoted strings.
pub fn parse_operand(text: &str) -> Result<Value, ParseLiteralError> {
    let error = || ParseLiteralError { text: text.to_owned() };
    let trimmed = text.trim();
    match trimmed {
        "True" => return Ok(Value::Bool(true)),
        "False" => return Ok(Value::Bool(false)),
        "None" => return Ok(Value::None),
        _ => {}
    }
    if let Some(s) = unquote(trimmed) {
        return Ok(Value::Str(s.to_owned()));
    }
    let unwrapped = trimmed
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(trimmed);
    if let Some(body) = unwrapped.strip_suffix(['j', 'J']) {
        return parse_complex(body).map(Value::Complex).ok_or_else(error);
    }
    if let Some(digits) = integer_digits(trimmed) {
        return BigInt::from_str(&digits).map(Value::from_bigint).map_err(|_| error());
    }
    parse_float(trimmed).map(Value::Float).ok_or_else(error)
}

/// Returns the contents of a string wrapped in matching quotes.
fn unquote(text: &str) -> Option<&str> {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| text.strip_prefix(quote)?.strip_suffix(quote))
}

/// Returns the digits of an integer literal with any `_` separators removed.
fn integer_digits(text: &str) -> Option<String> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let well_formed = unsigned.starts_with(|c: char| c.is_ascii_digit())
        && unsigned.ends_with(|c: char| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '_')
        && !unsigned.contains("__");
    well_formed.then(|| text.replace('_', ""))
}

/// Parses a float written the way Python's `float()` and repr spell it: digits
/// with an optional point and exponent, or `inf`/`nan` with an optional sign.
fn parse_float(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let named = ["inf", "nan"].iter().any(|name| unsigned.eq_ignore_ascii_case(name));
    if !named && !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    f64::from_str(text).ok()
}

/// Parses the inside of a complex literal with its trailing `j` removed:
/// `2`, `1+2`, `1.5-0.5`, `1e3+2`. The imaginary part needs its own digits;
/// a bare `j` is a name in Python, not `1j`.
fn parse_complex(body: &str) -> Option<Complex> {
    let split = body
        .char_indices()
        .skip(1)
        .filter(|&(i, c)| {
            matches!(c, '+' | '-') && !matches!(body.as_bytes().get(i - 1), Some(b'e' | b'E'))
        })
        .map(|(i, _)| i)
        .last();
    let (real, imag) = match split {
        Some(i) => (parse_float(&body[..i])?, &body[i..]),
        None => (0.0, body),
    };
    Some(Complex::new(real, parse_float(imag)?))
}
