use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::SyntaxError,
    interpreter::lexer::Keyword,
};

/// Result type used by the syntax checker.
pub type CheckResult<T> = Result<T, SyntaxError>;

/// The type an expression is known to produce without evaluating it.
///
/// Words are a class of their own: their value is unknown until evaluation,
/// so operator tables list which operands may be words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Integer.
    Int,
    /// Character.
    Char,
    /// Boolean.
    Bool,
    /// A variable reference.
    Word,
    /// Array of integers, produced by ranges.
    Array,
}

impl TypeTag {
    /// Returns `true` for types that behave like numbers in arithmetic and
    /// comparisons (characters by code point, booleans as 0 or 1), plus words.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Int | Self::Char | Self::Bool | Self::Word)
    }

    /// Returns `true` for booleans and words.
    #[must_use]
    pub const fn is_boolean(self) -> bool {
        matches!(self, Self::Bool | Self::Word)
    }
}

/// The syntactic return type of an expression.
///
/// Literals return their own type and words return [`TypeTag::Word`];
/// operators return their declared type. Statements (`:=`, `print`, `if`,
/// `for`) never appear as operands and return `None`.
#[must_use]
pub const fn return_type(expr: &Expr) -> Option<TypeTag> {
    match expr {
        Expr::Literal { value, .. } => Some(match value {
                                            LiteralValue::Int(_) => TypeTag::Int,
                                            LiteralValue::Char(_) => TypeTag::Char,
                                            LiteralValue::Bool(_) => TypeTag::Bool,
                                        }),
        Expr::Word { .. } => Some(TypeTag::Word),
        Expr::UnaryOp { op, .. } => Some(unary_returns(*op)),
        Expr::BinaryOp { op, .. } => Some(binary_returns(*op)),
        Expr::Assignment { .. } | Expr::Print { .. } | Expr::If { .. } | Expr::For { .. } => None,
    }
}

/// Declared return type of a binary operator.
#[must_use]
pub const fn binary_returns(op: BinaryOperator) -> TypeTag {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mul, Or, Range,
        RangeInclusive, Sub, Xor,
    };

    match op {
        Add | Sub | Mul | Div => TypeTag::Int,
        Equal | Greater | GreaterEqual | Less | LessEqual | And | Or | Xor | In => TypeTag::Bool,
        Range | RangeInclusive => TypeTag::Array,
    }
}

/// Declared return type of a unary operator.
#[must_use]
pub const fn unary_returns(op: UnaryOperator) -> TypeTag {
    match op {
        UnaryOperator::Not => TypeTag::Bool,
    }
}

/// Whether a binary operator accepts the operand pair.
///
/// Arithmetic, comparison and range operators take any pair of scalars;
/// logical operators take booleans; `in` takes a scalar and an array.
///
/// # Example
/// ```
/// use idk::{
///     ast::BinaryOperator,
///     interpreter::checker::{TypeTag, binary_accepts},
/// };
///
/// assert!(binary_accepts(BinaryOperator::Add, TypeTag::Char, TypeTag::Int));
/// assert!(!binary_accepts(BinaryOperator::Equal, TypeTag::Bool, TypeTag::Array));
/// assert!(binary_accepts(BinaryOperator::In, TypeTag::Word, TypeTag::Array));
/// ```
#[must_use]
pub const fn binary_accepts(op: BinaryOperator, left: TypeTag, right: TypeTag) -> bool {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mul, Or, Range,
        RangeInclusive, Sub, Xor,
    };

    match op {
        Add | Sub | Mul | Div | Equal | Greater | GreaterEqual | Less | LessEqual | Range
        | RangeInclusive => left.is_scalar() && right.is_scalar(),
        And | Or | Xor => left.is_boolean() && right.is_boolean(),
        In => left.is_scalar() && matches!(right, TypeTag::Array | TypeTag::Word),
    }
}

/// Whether a unary operator accepts the operand type.
#[must_use]
pub const fn unary_accepts(op: UnaryOperator, operand: TypeTag) -> bool {
    match op {
        UnaryOperator::Not => operand.is_boolean(),
    }
}

/// Whether a keyword accepts its controlling expression's type.
///
/// `print` accepts everything, `if` needs a boolean and `for` an array. The
/// parser only builds `for` headers from range operators, so a `for` argument
/// is always an array. The value bound by `:=` may be of any type.
#[must_use]
pub const fn keyword_accepts(keyword: Keyword, argument: TypeTag) -> bool {
    match keyword {
        Keyword::Print => true,
        Keyword::If => argument.is_boolean(),
        Keyword::For => matches!(argument, TypeTag::Array),
        Keyword::Else | Keyword::End | Keyword::While => false,
    }
}

/// Checks the argument types of every operator and keyword in a program.
///
/// Only type tags are inspected, never values, so the check is a pure function
/// of the tree and may run before anything is evaluated. Checking stops at the
/// first violation.
///
/// # Errors
/// `WrongOperatorArguments` or `WrongKeywordArgument` for the first rejected
/// node.
///
/// # Example
/// ```
/// use idk::interpreter::{checker::check_syntax, lexer::tokenize, parser::core::parse};
///
/// let ok = parse(&tokenize("if 2 > 1\nprint 1\nend").unwrap()).unwrap();
/// assert!(check_syntax(&ok).is_ok());
///
/// let bad = parse(&tokenize("if 5\nprint 1\nend").unwrap()).unwrap();
/// assert_eq!(check_syntax(&bad).unwrap_err().line(), 1);
/// ```
pub fn check_syntax(program: &[Expr]) -> CheckResult<()> {
    for expr in program {
        check_expression(expr)?;
    }
    debug!(statements = program.len(), "syntax check passed");
    Ok(())
}

/// Checks one expression and everything below it.
///
/// # Errors
/// The first rejected node, depth first.
pub fn check_expression(expr: &Expr) -> CheckResult<()> {
    match expr {
        Expr::Literal { .. } | Expr::Word { .. } => Ok(()),
        Expr::UnaryOp { op, operand, line } => {
            if !return_type(operand).is_some_and(|t| unary_accepts(*op, t)) {
                return Err(SyntaxError::WrongOperatorArguments { operator: op.to_string(),
                                                                 line:     *line, });
            }
            check_expression(operand)
        },
        Expr::BinaryOp { left, op, right, line } => {
            let accepted = match (return_type(left), return_type(right)) {
                (Some(l), Some(r)) => binary_accepts(*op, l, r),
                _ => false,
            };
            if !accepted {
                return Err(SyntaxError::WrongOperatorArguments { operator: op.to_string(),
                                                                 line:     *line, });
            }
            check_expression(left)?;
            check_expression(right)
        },
        Expr::Assignment { value, line, .. } => {
            if return_type(value).is_none() {
                return Err(SyntaxError::WrongOperatorArguments { operator: ":=".to_owned(),
                                                                 line:     *line, });
            }
            check_expression(value)
        },
        Expr::Print { expr, line } => {
            check_keyword(Keyword::Print, expr, *line)?;
            check_expression(expr)
        },
        Expr::If { condition,
                   then_branch,
                   else_branch,
                   line, } => {
            check_keyword(Keyword::If, condition, *line)?;
            check_expression(condition)?;
            then_branch.iter().try_for_each(check_expression)?;
            else_branch.iter().flatten().try_for_each(check_expression)
        },
        Expr::For { range, body, line, .. } => {
            check_keyword(Keyword::For, range, *line)?;
            check_expression(range)?;
            body.iter().try_for_each(check_expression)
        },
    }
}

fn check_keyword(keyword: Keyword, argument: &Expr, line: usize) -> CheckResult<()> {
    if return_type(argument).is_some_and(|t| keyword_accepts(keyword, t)) {
        Ok(())
    } else {
        Err(SyntaxError::WrongKeywordArgument { keyword: keyword.to_string(),
                                                line })
    }
}
