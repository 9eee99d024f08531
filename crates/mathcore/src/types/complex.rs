use std::fmt::{self, Display};

/// A Python `complex` value.
///
/// The math functions never compute with complex numbers; the type exists so
/// the operand gate can reject it with the same message CPython uses.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }
}

impl Display for Complex {
    /// Formats like CPython's `repr(complex)`: `2j`, `(1+2j)`, `(1.5-0.5j)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let imag = complex_part_repr(self.imag);
        if self.real == 0.0 && self.real.is_sign_positive() {
            return write!(f, "{imag}j");
        }
        let real = complex_part_repr(self.real);
        if self.imag.is_sign_negative() || self.imag.is_nan() {
            write!(f, "({real}{imag}j)")
        } else {
            write!(f, "({real}+{imag}j)")
        }
    }
}

/// Complex components drop the trailing `.0` that float reprs carry: `(1+2j)`, not `(1.0+2.0j)`.
fn complex_part_repr(part: f64) -> String {
    let repr = crate::value::float_repr(part);
    match repr.strip_suffix(".0") {
        Some(stripped) => stripped.to_owned(),
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repr_matches_cpython() {
        assert_eq!(Complex::new(0.0, 2.0).to_string(), "2j");
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "(1+2j)");
        assert_eq!(Complex::new(1.5, -0.5).to_string(), "(1.5-0.5j)");
    }
}
