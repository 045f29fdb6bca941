use thiserror::Error;

/// Lexer errors.
///
/// Raised while splitting a source line into tokens, before any grammar is
/// applied.
pub mod lexer_error;
/// Parser errors.
///
/// Defines every grammar violation detected while grouping lines into blocks
/// and building expression trees: unknown constructions, unbalanced blocks,
/// misplaced keywords and repeated assignments.
pub mod parse_error;
/// Syntax errors.
///
/// Raised by the optional type-compatibility pass when an operator or keyword
/// receives an argument type it does not accept.
pub mod syntax_error;
/// Evaluator errors.
///
/// Contains all error types that can be raised while walking the expression
/// tree: unresolved variables, type mismatches, malformed ranges and failed
/// arithmetic.
pub mod evaluator_error;

pub use evaluator_error::EvaluatorError;
pub use lexer_error::LexerError;
pub use parse_error::ParserError;
pub use syntax_error::SyntaxError;

/// Any failure of the lexer → parser → checker → evaluator pipeline.
///
/// Each stage has its own error type; this enum lets callers that run the
/// whole pipeline propagate all of them with `?`.
#[derive(Debug, Error)]
pub enum Error {
    /// Tokenization failed.
    #[error(transparent)]
    Lexer(#[from] LexerError),
    /// Grouping or tree building failed.
    #[error(transparent)]
    Parser(#[from] ParserError),
    /// The syntax checker rejected an operator or keyword argument.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Evaluation failed.
    #[error(transparent)]
    Evaluator(#[from] EvaluatorError),
}

impl Error {
    /// Returns the 1-based source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexer(e) => e.line(),
            Self::Parser(e) => e.line(),
            Self::Syntax(e) => e.line(),
            Self::Evaluator(e) => e.line(),
        }
    }
}
