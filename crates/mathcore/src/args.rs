use crate::{
    exception::{ExcType, RunResult},
    value::Value,
};

/// Positional arguments for a math function call.
///
/// Uses specific variants for common cases (0-2 arguments).
/// Every function in the math module takes at most two arguments, so the
/// `Many` variant only ever exists to produce an arity error.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ArgValues {
    Empty,
    One(Value),
    Two(Value, Value),
    Many(Vec<Value>),
}

impl ArgValues {
    /// Returns the number of arguments.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(_, _) => 2,
            Self::Many(args) => args.len(),
        }
    }

    /// Borrows the arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        let (head, tail): (&[Value], Option<&Value>) = match self {
            Self::Empty => (&[], None),
            Self::One(a) => (std::slice::from_ref(a), None),
            Self::Two(a1, a2) => (std::slice::from_ref(a1), Some(a2)),
            Self::Many(args) => (args.as_slice(), None),
        };
        head.iter().chain(tail)
    }

    /// Checks that exactly one positional argument was passed, returning it.
    pub fn get_one_arg(self, name: &str) -> RunResult<Value> {
        match self {
            Self::One(a) => Ok(a),
            other => Err(ExcType::type_error_arg_count(name, 1, other.count())),
        }
    }

    /// Checks that exactly two positional arguments were passed, returning them as a tuple.
    pub fn get_two_args(self, name: &str) -> RunResult<(Value, Value)> {
        match self {
            Self::Two(a1, a2) => Ok((a1, a2)),
            other => Err(ExcType::type_error_arg_count(name, 2, other.count())),
        }
    }

    /// Checks that one or two arguments were passed, returning them as a tuple.
    pub fn get_one_two_args(self, name: &str) -> RunResult<(Value, Option<Value>)> {
        match self {
            Self::One(a) => Ok((a, None)),
            Self::Two(a1, a2) => Ok((a1, Some(a2))),
            other => {
                let count = other.count();
                if count == 0 {
                    Err(ExcType::type_error_at_least(name, 1, count))
                } else {
                    Err(ExcType::type_error_at_most(name, 2, count))
                }
            }
        }
    }
}

impl From<Vec<Value>> for ArgValues {
    fn from(args: Vec<Value>) -> Self {
        let mut iter = args.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (None, _, _) => Self::Empty,
            (Some(a), None, _) => Self::One(a),
            (Some(a1), Some(a2), None) => Self::Two(a1, a2),
            (Some(a1), Some(a2), Some(a3)) => {
                let mut all = vec![a1, a2, a3];
                all.extend(iter);
                Self::Many(all)
            }
        }
    }
}

impl From<Value> for ArgValues {
    fn from(value: Value) -> Self {
        Self::One(value)
    }
}

impl From<(Value, Value)> for ArgValues {
    fn from((a1, a2): (Value, Value)) -> Self {
        Self::Two(a1, a2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_picks_smallest_variant() {
        assert_eq!(ArgValues::from(vec![]), ArgValues::Empty);
        assert_eq!(ArgValues::from(vec![Value::Int(1)]), ArgValues::One(Value::Int(1)));
        assert_eq!(
            ArgValues::from(vec![Value::Int(1), Value::Int(2)]),
            ArgValues::Two(Value::Int(1), Value::Int(2))
        );
        let many = ArgValues::from(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(many.count(), 3);
        assert_eq!(many.iter().count(), 3);
    }

    #[test]
    fn arity_errors() {
        let err = ArgValues::Empty.get_one_arg("math.erf").unwrap_err();
        assert_eq!(err.to_string(), "TypeError: math.erf() takes exactly one argument (0 given)");

        let err = ArgValues::One(Value::Int(1)).get_two_args("math.pow").unwrap_err();
        assert_eq!(err.to_string(), "TypeError: math.pow expected 2 arguments, got 1");

        let err = ArgValues::Empty.get_one_two_args("math.log").unwrap_err();
        assert_eq!(err.to_string(), "TypeError: math.log expected at least 1 argument, got 0");

        let three = ArgValues::from(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        let err = three.get_one_two_args("math.log").unwrap_err();
        assert_eq!(err.to_string(), "TypeError: math.log expected at most 2 arguments, got 3");
    }

    #[test]
    fn iter_keeps_order() {
        let args = ArgValues::Two(Value::Int(1), Value::Float(2.0));
        let collected: Vec<_> = args.iter().cloned().collect();
        assert_eq!(collected, vec![Value::Int(1), Value::Float(2.0)]);
    }
}
