use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur during evaluation.
pub enum EvaluatorError {
    /// No assignment in scope binds the variable.
    #[error("Evaluator error in line {line}: Could not find assignment for variable {name}")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Evaluator error in line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A boolean value was expected, but not found.
    #[error("Evaluator error in line {line}: Expected boolean, found {found}.")]
    ExpectedBoolean {
        /// Type name of the value that was found instead.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An array value was expected, but not found.
    #[error("Evaluator error in line {line}: Expected array, found {found}.")]
    ExpectedArray {
        /// Type name of the value that was found instead.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `a .. b` with `a == b`.
    #[error("Evaluator error in line {line}: Arguments of the exclusive range operator cannot be equal.")]
    EmptyRange {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A range has more elements than an array may hold.
    #[error("Evaluator error in line {line}: Range of {length} elements exceeds the limit of {limit}.")]
    RangeTooLarge {
        /// Number of elements the range would have.
        length: u64,
        /// The largest supported number of elements.
        limit:  u64,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Evaluator error in line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Evaluator error in line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Printed output could not be written.
    #[error("Evaluator error in line {line}: Failed to write output: {source}")]
    Output {
        /// The underlying I/O failure.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl EvaluatorError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::TypeError { line, .. }
            | Self::ExpectedBoolean { line, .. }
            | Self::ExpectedArray { line, .. }
            | Self::EmptyRange { line }
            | Self::RangeTooLarge { line, .. }
            | Self::Overflow { line }
            | Self::DivisionByZero { line }
            | Self::Output { line, .. } => *line,
        }
    }
}
