use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// The result of evaluating an expression tree.
///
/// Exactly one variant is ever populated; the tag is the variant itself, so
/// callers discriminate by matching rather than by runtime type checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric result (double-precision floating point).
    Number(f64),
    /// A boolean result, produced by the logical operators.
    Bool(bool),
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number().unwrap(), 2.5);
    /// assert!(Value::Bool(true).as_number().is_err());
    /// ```
    pub fn as_number(self) -> EvalResult<f64> {
        match self {
            Self::Number(number) => Ok(number),
            Self::Bool(_) => Err(EvalError::ExpectedNumber { found: self.to_string(), }),
        }
    }

    /// Converts the value to a `bool`, or returns an error if not boolean.
    pub fn as_bool(self) -> EvalResult<bool> {
        match self {
            Self::Bool(boolean) => Ok(boolean),
            Self::Number(_) => Err(EvalError::ExpectedBoolean { found: self.to_string(), }),
        }
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Bool(boolean) => write!(f, "{boolean}"),
        }
    }
}
