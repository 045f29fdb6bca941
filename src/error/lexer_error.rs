use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while tokenizing a line.
pub enum LexerError {
    /// Two consecutive separators produced a token with no characters.
    #[error("Lexer error in line {line}: Empty token!")]
    EmptyToken {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit into a 64 bit signed integer.
    #[error("Lexer error in line {line}: Integer literal {token} is too large.")]
    LiteralTooLarge {
        /// The offending literal.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl LexerError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::EmptyToken { line } | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}
