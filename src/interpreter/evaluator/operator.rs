use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::EvaluatorError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Largest number of elements a range may produce.
pub const MAX_RANGE_LENGTH: u64 = 1 << 24;

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic and comparison operators work on the numeric form of their
    /// operands (see [`Value::as_number`]). Logical operators need booleans,
    /// `in` needs an array on the right and ranges build a new array.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use idk::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::Char('a'), &Value::Int(1), 1);
    /// assert_eq!(sum.unwrap(), Value::Int(98));
    ///
    /// let found = Context::eval_binary(BinaryOperator::In,
    ///                                  &Value::Int(2),
    ///                                  &Value::from(vec![1, 2, 3]),
    ///                                  1);
    /// assert_eq!(found.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mul, Or, Range,
            RangeInclusive, Sub, Xor,
        };

        match op {
            Add | Sub | Mul | Div => {
                Self::eval_arithmetic(op, left.as_number(line)?, right.as_number(line)?, line).map(Value::Int)
            },
            Equal | Greater | GreaterEqual | Less | LessEqual => {
                let ordering = left.as_number(line)?.cmp(&right.as_number(line)?);
                Ok(Value::Bool(match op {
                                   Equal => ordering == Ordering::Equal,
                                   Greater => ordering == Ordering::Greater,
                                   GreaterEqual => ordering != Ordering::Less,
                                   Less => ordering == Ordering::Less,
                                   _ => ordering != Ordering::Greater,
                               }))
            },
            And => Ok(Value::Bool(left.as_bool(line)? && right.as_bool(line)?)),
            Or => Ok(Value::Bool(left.as_bool(line)? || right.as_bool(line)?)),
            Xor => Ok(Value::Bool(left.as_bool(line)? ^ right.as_bool(line)?)),
            In => {
                let needle = left.as_number(line)?;
                Ok(Value::Bool(right.as_array(line)?.contains(&needle)))
            },
            Range | RangeInclusive => Self::eval_range(left.as_number(line)?,
                                                       right.as_number(line)?,
                                                       op == RangeInclusive,
                                                       line).map(Value::from),
        }
    }

    /// Evaluates a unary operation.
    ///
    /// # Errors
    /// `ExpectedBoolean` if `not` is applied to anything but a boolean.
    pub fn eval_unary(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Not => Ok(Value::Bool(!operand.as_bool(line)?)),
        }
    }

    /// Integer arithmetic with overflow checks.
    ///
    /// Division truncates toward zero, so `-7 / 2` is `-3`.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by `0`.
    /// - `Overflow` when the result does not fit in an `i64`.
    pub fn eval_arithmetic(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(EvaluatorError::DivisionByZero { line });
                }
                left.checked_div(right)
            },
            _ => {
                return Err(EvaluatorError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                                                       line });
            },
        };

        result.ok_or(EvaluatorError::Overflow { line })
    }

    /// Builds the array a range operator produces.
    ///
    /// Ranges count up from `start` when `end` is larger and down otherwise.
    /// The exclusive form leaves `end` out, so `5 .. 1` is `5, 4, 3, 2`; the
    /// inclusive form keeps it, so `3 ..= 3` is `3`.
    ///
    /// # Parameters
    /// - `start`: First element.
    /// - `end`: Bound in the direction of iteration.
    /// - `inclusive`: Whether `end` itself is part of the range.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `EmptyRange` for an exclusive range with equal endpoints.
    /// - `RangeTooLarge` if the range has more than [`MAX_RANGE_LENGTH`]
    ///   elements or the array cannot be allocated.
    ///
    /// # Example
    /// ```
    /// use idk::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_range(1, 5, false, 1).unwrap(), vec![1, 2, 3, 4]);
    /// assert_eq!(Context::eval_range(5, 1, false, 1).unwrap(), vec![5, 4, 3, 2]);
    /// assert_eq!(Context::eval_range(3, 1, true, 1).unwrap(), vec![3, 2, 1]);
    /// assert!(Context::eval_range(3, 3, false, 1).is_err());
    /// assert!(Context::eval_range(i64::MIN, i64::MAX, true, 1).is_err());
    /// ```
    pub fn eval_range(start: i64, end: i64, inclusive: bool, line: usize) -> EvalResult<Vec<i64>> {
        if start == end && !inclusive {
            return Err(EvaluatorError::EmptyRange { line });
        }

        let length = start.abs_diff(end).saturating_add(u64::from(inclusive));
        let too_large = || EvaluatorError::RangeTooLarge { length,
                                                           limit: MAX_RANGE_LENGTH,
                                                           line };
        if length > MAX_RANGE_LENGTH {
            return Err(too_large());
        }
        let capacity = usize::try_from(length).map_err(|_| too_large())?;

        let mut items = Vec::new();
        items.try_reserve_exact(capacity).map_err(|_| too_large())?;
        match (start.cmp(&end), inclusive) {
            (Ordering::Less, false) => items.extend(start..end),
            (Ordering::Less, true) => items.extend(start..=end),
            (Ordering::Greater, false) => items.extend(((end + 1)..=start).rev()),
            (Ordering::Greater, true) | (Ordering::Equal, _) => items.extend((end..=start).rev()),
        }
        Ok(items)
    }
}
