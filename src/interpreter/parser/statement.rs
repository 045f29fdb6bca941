use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParserError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            block::{LineGroup, NestedLine, group_lines},
            core::{ParseResult, Parser},
            operator::{parse_leaf, parse_operation},
        },
    },
};

impl Parser {
    /// Parses one line-group into a statement.
    ///
    /// The first line decides the statement kind:
    /// - `print`, `if` or `for` dispatch to the keyword's grammar,
    /// - a word followed by an operator is an operator statement (this is how
    ///   assignments are written),
    /// - anything else is rejected.
    ///
    /// # Errors
    /// - `UnsupportedKeyword` for `while`.
    /// - `UnexpectedKeyword` for a statement starting with `else` or `end`.
    /// - `NotAllowedStart` for any other start of a line.
    pub fn parse_group(&mut self, group: &LineGroup<'_>) -> ParseResult<Expr> {
        let line = group.head.number;

        let expr = match group.head.tokens {
            [Token::Keyword(keyword), args @ ..] => match keyword {
                Keyword::Print => Self::parse_print(args, line)?,
                Keyword::If => self.parse_if(group)?,
                Keyword::For => self.parse_for(group)?,
                Keyword::While => {
                    return Err(ParserError::UnsupportedKeyword { keyword: *keyword,
                                                                 line });
                },
                Keyword::Else | Keyword::End => {
                    return Err(ParserError::UnexpectedKeyword { keyword: *keyword,
                                                                line });
                },
            },
            tokens @ [Token::Word(_), Token::Operator(_), ..] => self.parse_statement_operation(tokens, line)?,
            _ => return Err(ParserError::NotAllowedStart { line }),
        };

        debug!(line, "parsed statement");
        Ok(expr)
    }

    /// Parses a sequence of nested lines as a block body.
    fn parse_block(&mut self, lines: &[NestedLine<'_>]) -> ParseResult<Vec<Expr>> {
        let groups = group_lines(lines.iter().map(|l| (l.number, l.tokens)))?;
        groups.iter().map(|group| self.parse_group(group)).collect()
    }

    /// `print <literal | word | operation>`
    fn parse_print(args: &[Token], line: usize) -> ParseResult<Expr> {
        let expr = if args.iter().any(|t| t.operator().is_some()) {
            parse_operation(args, line)?
        } else {
            match args {
                [] => {
                    return Err(ParserError::MissingExpression { keyword: Keyword::Print,
                                                                line });
                },
                [single] if single.is_literal() || matches!(single, Token::Word(_)) => {
                    parse_leaf(single, line)?
                },
                _ => return Err(ParserError::InvalidPrintArgument { line }),
            }
        };

        Ok(Expr::Print { expr: Box::new(expr),
                         line })
    }

    /// Parses the expression following `if` or `for`.
    fn parse_controlling(args: &[Token], keyword: Keyword, line: usize) -> ParseResult<Expr> {
        if args.is_empty() {
            return Err(ParserError::MissingExpression { keyword, line });
        }
        parse_operation(args, line)
    }

    /// Parses an `if` block with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if <condition>
    ///         <statements>
    ///     else if <condition>
    ///         <statements>
    ///     else
    ///         <statements>
    ///     end
    /// ```
    /// Lines nested deeper than the `if` belong to the current branch, so
    /// inner blocks stay intact. An `else if` becomes a single nested `if` in
    /// the alternative branch, sharing the outer `end`.
    fn parse_if(&mut self, group: &LineGroup<'_>) -> ParseResult<Expr> {
        let head = group.head;
        let condition = Self::parse_controlling(&head.tokens[1..], Keyword::If, head.number)?;

        let split = group.rest
                         .iter()
                         .position(|l| l.level == head.level && l.keyword() == Some(Keyword::Else));
        let (then_lines, else_part) = match split {
            Some(index) => (&group.rest[..index], Some((group.rest[index], &group.rest[index + 1..]))),
            None => (group.rest.as_slice(), None),
        };

        let then_branch = self.parse_branch(then_lines, head.level)?;
        let else_branch = match else_part {
            Some((else_line, remaining)) => Some(self.parse_else(else_line, remaining)?),
            None => None,
        };

        Ok(Expr::If { condition: Box::new(condition),
                      then_branch,
                      else_branch,
                      line: head.number })
    }

    /// Parses what follows an `else` line: either a chained `if` or a plain
    /// branch up to the closing `end`.
    fn parse_else<'a>(&mut self,
                      else_line: NestedLine<'a>,
                      remaining: &[NestedLine<'a>])
                      -> ParseResult<Vec<Expr>> {
        match &else_line.tokens[1..] {
            [] => self.parse_branch(remaining, else_line.level),
            chained @ [Token::Keyword(Keyword::If), ..] => {
                let group = LineGroup { head: NestedLine { tokens: chained,
                                                           ..else_line },
                                        rest: remaining.to_vec(), };
                Ok(vec![self.parse_if(&group)?])
            },
            _ => Err(ParserError::TrailingTokens { keyword: Keyword::Else,
                                                   line:    else_line.number, }),
        }
    }

    /// Parses the lines of one branch of a block opened at `level`.
    ///
    /// The branch ends at the first line back on `level`, which must be a bare
    /// `end`.
    fn parse_branch(&mut self, lines: &[NestedLine<'_>], level: usize) -> ParseResult<Vec<Expr>> {
        let end = lines.iter().position(|l| l.level <= level).unwrap_or(lines.len());

        if let Some(closing) = lines.get(end) {
            match closing.tokens {
                [Token::Keyword(Keyword::End)] => {},
                [Token::Keyword(Keyword::End), ..] => {
                    return Err(ParserError::TrailingTokens { keyword: Keyword::End,
                                                             line:    closing.number, });
                },
                [Token::Keyword(keyword), ..] => {
                    return Err(ParserError::UnexpectedKeyword { keyword: *keyword,
                                                                line:    closing.number, });
                },
                _ => return Err(ParserError::NotAllowedStart { line: closing.number }),
            }
        }

        self.parse_block(&lines[..end])
    }

    /// Parses a `for` block.
    ///
    /// Syntax:
    /// ```text
    ///     for [<name> in] <start> .. <end>
    ///         <statements>
    ///     end
    /// ```
    /// Only range iteration is supported; the body sees the current element as
    /// `_it` (and as `<name>` when one is written).
    fn parse_for(&mut self, group: &LineGroup<'_>) -> ParseResult<Expr> {
        let head = group.head;
        let header = Self::parse_controlling(&head.tokens[1..], Keyword::For, head.number)?;

        let (variable, range) = match header {
            range @ Expr::BinaryOp { op: BinaryOperator::Range | BinaryOperator::RangeInclusive,
                                     .. } => (None, range),
            Expr::BinaryOp { left,
                             op: BinaryOperator::In,
                             right,
                             .. } => match (*left, *right) {
                (Expr::Word { name, .. },
                 range @ Expr::BinaryOp { op: BinaryOperator::Range | BinaryOperator::RangeInclusive,
                                          .. }) => (Some(name), range),
                _ => return Err(ParserError::NonRangeLoop { line: head.number }),
            },
            _ => return Err(ParserError::NonRangeLoop { line: head.number }),
        };

        let body = self.parse_branch(&group.rest, head.level)?;

        Ok(Expr::For { variable,
                       range: Box::new(range),
                       body,
                       line: head.number })
    }
}
