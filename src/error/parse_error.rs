use thiserror::Error;

use crate::interpreter::lexer::{Keyword, Operator};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while grouping lines into blocks or
/// building expression trees.
pub enum ParserError {
    /// A statement starts with two words, or with a word followed by a
    /// keyword.
    #[error("Parser error in line {line}: Unknown construction.")]
    UnknownConstruction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement starts with something that is neither a keyword nor a word
    /// followed by an operator.
    #[error("Parser error in line {line}: Not allowed word on the beginning of the line.")]
    NotAllowedStart {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `else` or `end` appeared where no open block can own it.
    #[error("Parser error in line {line}: Unexpected keyword '{keyword}'.")]
    UnexpectedKeyword {
        /// The misplaced keyword.
        keyword: Keyword,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The keyword is reserved but has no behaviour.
    #[error("Parser error in line {line}: Keyword '{keyword}' is reserved and not supported.")]
    UnsupportedKeyword {
        /// The reserved keyword.
        keyword: Keyword,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A block opened on this line was never closed with `end`.
    #[error("Parser error in line {line}: Block is not closed with 'end'.")]
    UnclosedBlock {
        /// The line that opened the block.
        line: usize,
    },
    /// A keyword line that closes or switches a block carries extra tokens.
    #[error("Parser error in line {line}: Unexpected tokens after '{keyword}'.")]
    TrailingTokens {
        /// The keyword the tokens follow.
        keyword: Keyword,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A keyword is missing the expression it controls.
    #[error("Parser error in line {line}: Keyword '{keyword}' requires an expression.")]
    MissingExpression {
        /// The keyword without an expression.
        keyword: Keyword,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The variable was already bound by an earlier assignment.
    #[error("Parser error in line {line}: You cannot assign value to variable '{name}' that already has been assigned.")]
    DoubleAssignment {
        /// The variable name.
        name: String,
        /// The line of the second assignment.
        line: usize,
    },
    /// The left side of `:=` is not a single word.
    #[error("Parser error in line {line}: Only a single variable can be assigned to.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `:=` used inside another expression.
    #[error("Parser error in line {line}: Assignment is only allowed at the beginning of a statement.")]
    MisplacedAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator has nothing on one of its sides.
    #[error("Parser error in line {line}: Operator '{operator}' is missing an operand.")]
    MissingOperand {
        /// The operator without an operand.
        operator: Operator,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Several operands follow each other without an operator in between.
    #[error("Parser error in line {line}: Expected an operator between operands.")]
    ExpectedOperator {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token that cannot stand alone as an operand.
    #[error("Parser error in line {line}: '{token}' cannot be used as an operand.")]
    InvalidOperand {
        /// The token, as written in source.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `print` followed by something other than a literal, a variable or an
    /// operation.
    #[error("Parser error in line {line}: You can print only literals, variables or operations.")]
    InvalidPrintArgument {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `for` header that does not iterate over a range.
    #[error("Parser error in line {line}: 'for' can only iterate over a range ('..' or '..=').")]
    NonRangeLoop {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParserError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownConstruction { line }
            | Self::NotAllowedStart { line }
            | Self::UnexpectedKeyword { line, .. }
            | Self::UnsupportedKeyword { line, .. }
            | Self::UnclosedBlock { line }
            | Self::TrailingTokens { line, .. }
            | Self::MissingExpression { line, .. }
            | Self::DoubleAssignment { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::MisplacedAssignment { line }
            | Self::MissingOperand { line, .. }
            | Self::ExpectedOperator { line }
            | Self::InvalidOperand { line, .. }
            | Self::InvalidPrintArgument { line }
            | Self::NonRangeLoop { line } => *line,
        }
    }
}
