use std::collections::HashSet;

use tracing::debug;

use crate::{
    ast::Program,
    error::ParserError,
    interpreter::{lexer::SourceLine, parser::block::group_lines},
};

pub type ParseResult<T> = Result<T, ParserError>;

/// Builds expression trees from tokenized lines.
///
/// A parser remembers every name it has seen on the left of `:=`; a name may
/// be assigned only once per program, so a second assignment is a parse
/// error rather than a runtime one.
#[derive(Debug, Default)]
pub struct Parser {
    pub(in crate::interpreter::parser) assigned: HashSet<String>,
}

impl Parser {
    /// Creates a parser with no assigned names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole program.
    ///
    /// Lines are grouped into top-level statements first (a block and all of
    /// its nested lines form one statement), then each group is parsed in
    /// source order.
    ///
    /// # Parameters
    /// - `lines`: Tokenized, non-empty source lines in order.
    ///
    /// # Returns
    /// One expression tree per top-level statement.
    ///
    /// # Errors
    /// The first [`ParserError`] found.
    pub fn parse(&mut self, lines: &[SourceLine]) -> ParseResult<Program> {
        let groups = group_lines(lines.iter().map(|l| (l.number, l.tokens.as_slice())))?;
        debug!(groups = groups.len(), "grouped source lines");

        groups.iter().map(|group| self.parse_group(group)).collect()
    }

    /// Returns `true` if `name` has already been assigned.
    #[must_use]
    pub fn is_assigned(&self, name: &str) -> bool {
        self.assigned.contains(name)
    }
}

/// Parses a whole program with a fresh [`Parser`].
///
/// # Errors
/// The first [`ParserError`] found.
///
/// # Example
/// ```
/// use idk::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let lines = tokenize("x := 1 + 2\nprint x").unwrap();
/// let program = parse(&lines).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Expr::Assignment { .. }));
/// assert!(matches!(program[1], Expr::Print { line: 2, .. }));
///
/// // Every name is assigned at most once.
/// let lines = tokenize("x := 1\nx := 2").unwrap();
/// assert_eq!(parse(&lines).unwrap_err().line(), 2);
/// ```
pub fn parse(lines: &[SourceLine]) -> ParseResult<Program> {
    Parser::new().parse(lines)
}
