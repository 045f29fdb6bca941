use crate::{
    error::ParserError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::core::ParseResult,
    },
};

/// A source line tagged with its block nesting level.
///
/// Lines that open, switch or close a block (`if`, `for`, `else`, `end`) share
/// the level of the opening line; the lines between them sit one level deeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedLine<'a> {
    /// 1-based line number in the source.
    pub number: usize,
    /// Nesting level relative to the start of the group.
    pub level:  usize,
    /// The line's tokens.
    pub tokens: &'a [Token],
}

impl NestedLine<'_> {
    /// The keyword the line starts with, if any.
    #[must_use]
    pub fn keyword(&self) -> Option<Keyword> {
        self.tokens.first().and_then(Token::keyword)
    }
}

/// One top-level statement: its first line and every line up to the matching
/// `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineGroup<'a> {
    /// The line that starts the statement.
    pub head: NestedLine<'a>,
    /// The remaining lines, including the closing `end` for blocks.
    pub rest: Vec<NestedLine<'a>>,
}

/// How much a line changes the block nesting depth.
///
/// `if`, `for` and `while` open a block, `end` closes one and `else` closes the
/// true branch while opening the alternative, leaving the depth unchanged.
///
/// # Example
/// ```
/// use idk::interpreter::{lexer::tokenize_line, parser::block::nesting_delta};
///
/// assert_eq!(nesting_delta(&tokenize_line("if x > 1", 1).unwrap()), 1);
/// assert_eq!(nesting_delta(&tokenize_line("else", 2).unwrap()), 0);
/// assert_eq!(nesting_delta(&tokenize_line("end", 3).unwrap()), -1);
/// ```
#[must_use]
pub fn nesting_delta(tokens: &[Token]) -> isize {
    match tokens.first().and_then(Token::keyword) {
        Some(Keyword::End) => -1,
        Some(keyword) if keyword.opens_block() => 1,
        _ => 0,
    }
}

/// Groups lines into statements.
///
/// A nesting counter is tracked across lines: an opening line is recorded
/// before the counter is incremented, `end` decrements before it is recorded
/// and `else` is recorded one level up. Whenever the counter returns to zero
/// the collected lines form one group.
///
/// # Parameters
/// - `lines`: `(line number, tokens)` pairs in source order, none empty.
///
/// # Errors
/// - `UnknownConstruction` if a statement starts with two words or a word and
///   a keyword.
/// - `UnexpectedKeyword` for `else` or `end` outside of any block.
/// - `UnclosedBlock` if input ends inside a block.
pub fn group_lines<'a, I>(lines: I) -> ParseResult<Vec<LineGroup<'a>>>
    where I: IntoIterator<Item = (usize, &'a [Token])>
{
    let mut groups = Vec::new();
    let mut current: Option<LineGroup<'a>> = None;
    let mut depth = 0usize;

    for (number, tokens) in lines {
        if depth == 0 {
            check_construction(tokens, number)?;
        }

        let level = match tokens.first().and_then(Token::keyword) {
            Some(keyword @ Keyword::End) => {
                depth = depth.checked_sub(1)
                             .ok_or(ParserError::UnexpectedKeyword { keyword,
                                                                     line: number })?;
                depth
            },
            Some(keyword @ Keyword::Else) => {
                depth.checked_sub(1)
                     .ok_or(ParserError::UnexpectedKeyword { keyword,
                                                             line: number })?
            },
            Some(keyword) if keyword.opens_block() => {
                depth += 1;
                depth - 1
            },
            _ => depth,
        };

        let line = NestedLine { number,
                                level,
                                tokens };
        match current.as_mut() {
            Some(group) => group.rest.push(line),
            None => {
                current = Some(LineGroup { head: line,
                                           rest: Vec::new(), });
            },
        }

        if depth == 0
           && let Some(group) = current.take()
        {
            groups.push(group);
        }
    }

    if let Some(group) = current {
        return Err(ParserError::UnclosedBlock { line: group.head.number });
    }

    Ok(groups)
}

fn check_construction(tokens: &[Token], line: usize) -> ParseResult<()> {
    match tokens {
        [Token::Word(_), Token::Word(_) | Token::Keyword(_), ..] => {
            Err(ParserError::UnknownConstruction { line })
        },
        _ => Ok(()),
    }
}
