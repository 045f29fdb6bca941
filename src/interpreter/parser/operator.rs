use tracing::debug;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::ParserError,
    interpreter::{
        lexer::{Operator, Token},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses an operator statement, which may be an assignment.
    ///
    /// `:=` is found by a first-match scan and always splits the statement;
    /// its left side must be a single word that no earlier statement has
    /// assigned.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the left side is not exactly one word.
    /// - `DoubleAssignment` if the name was assigned before.
    /// - Any error of [`parse_operation`] for the right side.
    pub fn parse_statement_operation(&mut self, tokens: &[Token], line: usize) -> ParseResult<Expr> {
        let Some(index) = tokens.iter().position(|t| t.operator() == Some(Operator::Assign)) else {
            return parse_operation(tokens, line);
        };

        let name = match &tokens[..index] {
            [Token::Word(name)] => name.clone(),
            _ => return Err(ParserError::InvalidAssignmentTarget { line }),
        };
        if self.is_assigned(&name) {
            return Err(ParserError::DoubleAssignment { name, line });
        }

        let value = parse_side(&tokens[index + 1..], Operator::Assign, line)?;
        debug!(line, %name, "parsed assignment");
        self.assigned.insert(name.clone());

        Ok(Expr::Assignment { name,
                              value: Box::new(value),
                              line })
    }
}

/// Parses a flat span of tokens into an operator expression.
///
/// The span is split at its loosest operator; among operators of equal
/// binding power the rightmost wins, which makes chains left-associative
/// (`8 / 2 / 2` is `(8 / 2) / 2`). `not` is a prefix operator and only splits a
/// span it starts. Both sides are parsed recursively; a single token is a leaf.
///
/// # Parameters
/// - `tokens`: Tokens of the expression, without any leading keyword.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `MisplacedAssignment` if the span contains `:=`.
/// - `MissingOperand` if an operator has an empty side.
/// - `ExpectedOperator` if several tokens follow each other without an
///   operator.
///
/// # Example
/// ```
/// use idk::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize_line, parser::operator::parse_operation},
/// };
///
/// let tokens = tokenize_line("1 + 2 * 3", 1).unwrap();
/// let Expr::BinaryOp { op, right, .. } = parse_operation(&tokens, 1).unwrap() else {
///     panic!("expected a binary operation");
/// };
///
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
/// ```
pub fn parse_operation(tokens: &[Token], line: usize) -> ParseResult<Expr> {
    if let [single] = tokens {
        return parse_leaf(single, line);
    }

    let (index, op) = split_point(tokens).ok_or(ParserError::ExpectedOperator { line })?;

    if let Some(binary) = BinaryOperator::from_operator(op) {
        let left = parse_side(&tokens[..index], op, line)?;
        let right = parse_side(&tokens[index + 1..], op, line)?;

        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op: binary,
                                   right: Box::new(right),
                                   line });
    }

    match op {
        Operator::Not => {
            let operand = parse_side(&tokens[index + 1..], op, line)?;
            Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                               operand: Box::new(operand),
                               line })
        },
        _ => Err(ParserError::MisplacedAssignment { line }),
    }
}

/// Turns a single token into a literal or word node.
///
/// # Errors
/// `MissingOperand` for a lone operator, `InvalidOperand` for a keyword.
pub fn parse_leaf(token: &Token, line: usize) -> ParseResult<Expr> {
    let value = match token {
        Token::Int(n) => LiteralValue::Int(*n),
        Token::Char(c) => LiteralValue::Char(*c),
        Token::Bool(b) => LiteralValue::Bool(*b),
        Token::Word(name) => {
            return Ok(Expr::Word { name: name.clone(),
                                   line });
        },
        Token::Operator(operator) => {
            return Err(ParserError::MissingOperand { operator: *operator,
                                                     line });
        },
        Token::Keyword(keyword) => {
            return Err(ParserError::InvalidOperand { token: keyword.to_string(),
                                                     line });
        },
    };

    Ok(Expr::Literal { value, line })
}

fn parse_side(tokens: &[Token], operator: Operator, line: usize) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParserError::MissingOperand { operator, line });
    }
    parse_operation(tokens, line)
}

/// Finds the operator a span is split at, scanning left to right.
///
/// `:=` is taken as soon as it is seen. Otherwise the loosest operator wins,
/// with later operators replacing earlier ones of the same binding power.
fn split_point(tokens: &[Token]) -> Option<(usize, Operator)> {
    let mut found: Option<(usize, Operator)> = None;

    for (index, token) in tokens.iter().enumerate() {
        let Some(op) = token.operator() else {
            continue;
        };
        if op == Operator::Assign {
            return Some((index, op));
        }
        if op == Operator::Not && index != 0 {
            continue;
        }
        if found.is_none_or(|(_, best)| op.binding_power() <= best.binding_power()) {
            found = Some((index, op));
        }
    }

    found
}
