use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Result type alias for operations that can raise a Python exception.
pub type RunResult<T> = Result<T, MathError>;

/// Python exception types raised by the math functions.
///
/// Uses strum derives for automatic `Display`, `FromStr`, and `Into<&'static str>` implementations.
/// The string representation matches the variant name exactly (e.g., `ValueError` -> "ValueError").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize)]
pub enum ExcType {
    /// primary exception class - matches any exception in isinstance checks.
    Exception,

    // --- ArithmeticError hierarchy ---
    /// Intermediate class for arithmetic errors.
    ArithmeticError,
    /// Subclass of ArithmeticError.
    OverflowError,
    /// Subclass of ArithmeticError.
    ZeroDivisionError,

    TypeError,
    ValueError,
}

impl ExcType {
    /// Checks if this exception type is a subclass of another exception type.
    ///
    /// Returns true if `self` would be caught by `except handler_type:`.
    #[must_use]
    pub fn is_subclass_of(self, handler_type: Self) -> bool {
        if self == handler_type {
            return true;
        }
        match handler_type {
            Self::Exception => true,
            Self::ArithmeticError => matches!(self, Self::ZeroDivisionError | Self::OverflowError),
            _ => false,
        }
    }

    /// Creates a TypeError with the given message.
    #[must_use]
    pub(crate) fn type_error(msg: impl Display) -> MathError {
        MathError::new_msg(Self::TypeError, msg)
    }

    /// Creates the `ValueError: math domain error` raised for inputs outside a function's domain.
    #[must_use]
    pub(crate) fn domain_error() -> MathError {
        MathError::new_msg(Self::ValueError, "math domain error")
    }

    /// Creates the `OverflowError: math range error` raised when a result is not representable.
    #[must_use]
    pub(crate) fn range_error() -> MathError {
        MathError::new_msg(Self::OverflowError, "math range error")
    }

    /// Creates a ZeroDivisionError for float division.
    #[must_use]
    pub(crate) fn zero_division() -> MathError {
        MathError::new_msg(Self::ZeroDivisionError, "float division by zero")
    }

    /// Creates a TypeError for when a function receives the wrong number of arguments.
    ///
    /// Matches CPython's formats:
    /// `math.erf() takes exactly one argument (2 given)` and `math.pow expected 2 arguments, got 1`
    #[must_use]
    pub(crate) fn type_error_arg_count(name: &str, expected: usize, actual: usize) -> MathError {
        if expected == 1 {
            Self::type_error(format!("{name}() takes exactly one argument ({actual} given)"))
        } else {
            Self::type_error(format!("{name} expected {expected} arguments, got {actual}"))
        }
    }

    /// Creates a TypeError for when a function receives fewer arguments than required.
    #[must_use]
    pub(crate) fn type_error_at_least(name: &str, min: usize, actual: usize) -> MathError {
        // CPython: "log expected at least 1 argument, got 0"
        Self::type_error(format!("{name} expected at least {min} argument, got {actual}"))
    }

    /// Creates a TypeError for when a function receives more arguments than allowed.
    #[must_use]
    pub(crate) fn type_error_at_most(name: &str, max: usize, actual: usize) -> MathError {
        // CPython: "log expected at most 2 arguments, got 3"
        Self::type_error(format!("{name} expected at most {max} arguments, got {actual}"))
    }
}

/// A raised Python exception: the exception class plus its message.
///
/// Every math function either returns a value or one of these; there is no
/// partial result and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathError {
    exc_type: ExcType,
    arg: Option<String>,
}

impl MathError {
    /// Creates an exception of the given type with a message.
    #[must_use]
    pub fn new_msg(exc_type: ExcType, arg: impl Display) -> Self {
        Self {
            exc_type,
            arg: Some(arg.to_string()),
        }
    }

    /// Creates an exception with no message, e.g. a bare `raise ValueError`.
    #[must_use]
    pub fn new_none(exc_type: ExcType) -> Self {
        Self { exc_type, arg: None }
    }

    #[must_use]
    pub fn exc_type(&self) -> ExcType {
        self.exc_type
    }

    #[must_use]
    pub fn arg(&self) -> Option<&str> {
        self.arg.as_deref()
    }
}

impl Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_str: &'static str = self.exc_type.into();
        match &self.arg {
            Some(arg) => write!(f, "{type_str}: {arg}"),
            None => f.write_str(type_str),
        }
    }
}

impl std::error::Error for MathError {}
