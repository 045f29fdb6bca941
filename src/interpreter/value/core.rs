use std::{fmt, rc::Rc};

use crate::{ast::LiteralValue, error::EvaluatorError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every operand reduces to one of these before an operator computes its
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64 bit signed integer.
    Int(i64),
    /// A character.
    Char(char),
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons, logical operators and `in`; `if` conditions
    /// must evaluate to `Bool`.
    Bool(bool),
    /// An ordered sequence of integers, produced by `..` and `..=`.
    Array(Rc<Vec<i64>>),
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Int(n) => Self::Int(n),
            LiteralValue::Char(c) => Self::Char(c),
            LiteralValue::Bool(b) => Self::Bool(b),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// Name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Char(_) => "char",
            Self::Bool(_) => "bool",
            Self::Array(_) => "array",
        }
    }

    /// Converts a scalar to the integer arithmetic works on.
    ///
    /// Characters convert to their code point, booleans to `0` or `1`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The numeric value.
    /// - `Err(EvaluatorError::TypeError)`: For arrays.
    ///
    /// # Example
    /// ```
    /// use idk::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Char('a').as_number(1).unwrap(), 97);
    /// assert_eq!(Value::Bool(true).as_number(1).unwrap(), 1);
    /// assert!(Value::from(vec![1, 2]).as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Char(c) => Ok(i64::from(u32::from(*c))),
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Array(_) => {
                Err(EvaluatorError::TypeError { details: "expected a scalar value, found array".to_owned(),
                                                line })
            },
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for `if` conditions and logical operations.
    pub const fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(EvaluatorError::ExpectedBoolean { found: self.type_name(),
                                                       line }),
        }
    }

    /// Borrows the elements of an array value.
    pub fn as_array(&self, line: usize) -> EvalResult<&[i64]> {
        match self {
            Self::Array(items) => Ok(items.as_slice()),
            _ => Err(EvaluatorError::ExpectedArray { found: self.type_name(),
                                                     line }),
        }
    }
}

/// Formats values the way `print` shows them.
///
/// Integers print in decimal, characters as themselves, booleans as `true` or
/// `false` and arrays as their elements joined by `", "`.
///
/// # Example
/// ```
/// use idk::interpreter::value::core::Value;
///
/// assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1, 2, 3");
/// assert_eq!(Value::Char('x').to_string(), "x");
/// assert_eq!(Value::Bool(false).to_string(), "false");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
        }
    }
}
