use strum::{Display, EnumString};

/// Represents the Python type of a value.
///
/// The `Display` form is the name Python reports in error messages, e.g.
/// `an integer is required (got type NoneType)`.
#[derive(Debug, Clone, Copy, Display, EnumString, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Type {
    #[strum(serialize = "NoneType")]
    NoneType,
    Bool,
    Int,
    Float,
    Complex,
    Str,
    Tuple,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(Type::NoneType.to_string(), "NoneType");
        assert_eq!(Type::Float.to_string(), "float");
        assert_eq!(Type::from_str("complex").unwrap(), Type::Complex);
    }
}
