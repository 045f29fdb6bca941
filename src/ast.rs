use std::fmt;

use crate::interpreter::lexer::Operator;

/// A parsed program: the top-level statements in source order.
pub type Program = Vec<Expr>;

/// Represents a literal value written directly in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A single-quoted character literal.
    Char(char),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

/// Operators that take two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `=`
    Equal,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `in`, membership in an array.
    In,
    /// `..`, excludes the right endpoint.
    Range,
    /// `..=`, includes the right endpoint.
    RangeInclusive,
}

impl BinaryOperator {
    /// Maps a lexer operator to its binary form, if it has one.
    #[must_use]
    pub const fn from_operator(op: Operator) -> Option<Self> {
        Some(match op {
                 Operator::Multiplication => Self::Mul,
                 Operator::Division => Self::Div,
                 Operator::Plus => Self::Add,
                 Operator::Minus => Self::Sub,
                 Operator::Eq => Self::Equal,
                 Operator::Gt => Self::Greater,
                 Operator::Gte => Self::GreaterEqual,
                 Operator::Lt => Self::Less,
                 Operator::Lte => Self::LessEqual,
                 Operator::And => Self::And,
                 Operator::Or => Self::Or,
                 Operator::Xor => Self::Xor,
                 Operator::In => Self::In,
                 Operator::Range => Self::Range,
                 Operator::RangeInclusive => Self::RangeInclusive,
                 Operator::Not | Operator::Assign => return None,
             })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Mul => "*",
                        Self::Div => "/",
                        Self::Add => "+",
                        Self::Sub => "-",
                        Self::Equal => "=",
                        Self::Greater => ">",
                        Self::GreaterEqual => ">=",
                        Self::Less => "<",
                        Self::LessEqual => "<=",
                        Self::And => "and",
                        Self::Or => "or",
                        Self::Xor => "xor",
                        Self::In => "in",
                        Self::Range => "..",
                        Self::RangeInclusive => "..=",
                    })
    }
}

/// Operators that take a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `not`
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => f.write_str("not"),
        }
    }
}

/// An expression tree node.
///
/// Every statement of a program is one of these; operands of operators are
/// restricted by the parser to literals, words and other operations. Nodes are
/// built once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Word {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name := value`; each name is assigned at most once per program.
    Assignment {
        /// The variable being bound.
        name:  String,
        /// The bound expression.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print <expr>`
    Print {
        /// The expression to print.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `if <condition> ... [else ...] end`
    If {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Self>,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise. A chained `else if` is a single nested
        /// `If` here.
        else_branch: Option<Vec<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `for [<name> in] <range> ... end`
    For {
        /// Name written in the header, bound alongside `_it`.
        variable: Option<String>,
        /// The range being iterated.
        range:    Box<Self>,
        /// Statements run once per element.
        body:     Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use idk::ast::Expr;
    ///
    /// let expr = Expr::Word { name: "x".to_string(),
    ///                         line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Word { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::If { line, .. }
            | Self::For { line, .. } => *line,
        }
    }
}
