use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents a rejected operator or keyword argument found by the syntax
/// checker.
pub enum SyntaxError {
    /// An operator received operands whose types are not in its table.
    #[error("Syntax error in line {line}: Wrong argument types for operator {operator}")]
    WrongOperatorArguments {
        /// The operator, as written in source.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A keyword's controlling expression has a type the keyword does not
    /// accept.
    #[error("Syntax error in line {line}: Wrong operation return type for keyword {keyword}")]
    WrongKeywordArgument {
        /// The keyword, as written in source.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl SyntaxError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::WrongOperatorArguments { line, .. } | Self::WrongKeywordArgument { line, .. } => {
                *line
            },
        }
    }
}
