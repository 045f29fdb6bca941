use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexerError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexerError>;

/// Marker that starts a line comment.
pub const COMMENT: &str = "//";

/// Represents a lexical token in the source input.
///
/// Source lines are split on single spaces first; every piece is then matched
/// against these patterns. A piece that does not lex to exactly one token is a
/// [`Token::Word`] (see [`tokenize_line`]).
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),
    /// Single-quoted character literal tokens, such as `'a'`.
    #[regex(r"'[^']'", |lex| lex.slice().chars().nth(1))]
    Char(char),
    /// Boolean literal tokens: `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Reserved words that introduce statements or delimit blocks.
    #[token("print", |_| Keyword::Print)]
    #[token("if", |_| Keyword::If)]
    #[token("else", |_| Keyword::Else)]
    #[token("for", |_| Keyword::For)]
    #[token("while", |_| Keyword::While)]
    #[token("end", |_| Keyword::End)]
    Keyword(Keyword),
    /// Symbolic and word operators.
    #[token(":=", |_| Operator::Assign)]
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Multiplication)]
    #[token("/", |_| Operator::Division)]
    #[token("=", |_| Operator::Eq)]
    #[token(">", |_| Operator::Gt)]
    #[token(">=", |_| Operator::Gte)]
    #[token("<", |_| Operator::Lt)]
    #[token("<=", |_| Operator::Lte)]
    #[token("not", |_| Operator::Not)]
    #[token("and", |_| Operator::And)]
    #[token("or", |_| Operator::Or)]
    #[token("xor", |_| Operator::Xor)]
    #[token("in", |_| Operator::In)]
    #[token("..", |_| Operator::Range)]
    #[token("..=", |_| Operator::RangeInclusive)]
    Operator(Operator),
    /// Identifiers, and any other piece of text the lexer cannot classify.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Word(String),
}

impl Token {
    /// Returns `true` for integer, character and boolean literals.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Char(_) | Self::Bool(_))
    }

    /// Returns the keyword if the token is one.
    #[must_use]
    pub const fn keyword(&self) -> Option<Keyword> {
        match self {
            Self::Keyword(k) => Some(*k),
            _ => None,
        }
    }

    /// Returns the operator if the token is one.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

/// Statement keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `print`
    Print,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`, reserved.
    While,
    /// `end`
    End,
}

impl Keyword {
    /// Returns `true` for keywords that open a block closed by `end`.
    #[must_use]
    pub const fn opens_block(self) -> bool {
        matches!(self, Self::If | Self::For | Self::While)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Print => "print",
                        Self::If => "if",
                        Self::Else => "else",
                        Self::For => "for",
                        Self::While => "while",
                        Self::End => "end",
                    })
    }
}

/// Every operator the lexer recognizes, unary and binary alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `*`
    Multiplication,
    /// `/`
    Division,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `..`
    Range,
    /// `..=`
    RangeInclusive,
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `in`
    In,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `not`
    Not,
    /// `:=`
    Assign,
}

impl Operator {
    /// How tightly the operator binds its operands; higher binds tighter.
    ///
    /// The parser splits an operator expression at the loosest operator, so
    /// `1 + 2 * 3` splits at `+`.
    ///
    /// # Example
    /// ```
    /// use idk::interpreter::lexer::Operator;
    ///
    /// assert!(Operator::Multiplication.binding_power() > Operator::Plus.binding_power());
    /// assert!(Operator::And.binding_power() > Operator::Not.binding_power());
    /// assert_eq!(Operator::Assign.binding_power(), 0);
    /// ```
    #[must_use]
    pub const fn binding_power(self) -> u8 {
        match self {
            Self::Multiplication | Self::Division => 6,
            Self::Plus | Self::Minus => 5,
            Self::Range | Self::RangeInclusive => 4,
            Self::Eq | Self::Gt | Self::Gte | Self::Lt | Self::Lte | Self::In => 3,
            Self::And | Self::Or | Self::Xor => 2,
            Self::Not => 1,
            Self::Assign => 0,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Multiplication => "*",
                        Self::Division => "/",
                        Self::Plus => "+",
                        Self::Minus => "-",
                        Self::Range => "..",
                        Self::RangeInclusive => "..=",
                        Self::Eq => "=",
                        Self::Gt => ">",
                        Self::Gte => ">=",
                        Self::Lt => "<",
                        Self::Lte => "<=",
                        Self::In => "in",
                        Self::And => "and",
                        Self::Or => "or",
                        Self::Xor => "xor",
                        Self::Not => "not",
                        Self::Assign => ":=",
                    })
    }
}

/// The tokens of one non-empty source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the source.
    pub number: usize,
    /// Tokens in source order, never empty.
    pub tokens: Vec<Token>,
}

/// Tokenizes a single line of source text.
///
/// Leading and trailing whitespace is ignored. Blank lines and lines starting
/// with `//` produce no tokens, and scanning stops at the first piece starting
/// with `//`. Range operators glued to their operands are separated before the
/// line is split on single spaces.
///
/// # Parameters
/// - `line`: The raw source line.
/// - `number`: Its 1-based line number, used for error reporting.
///
/// # Errors
/// - `LexerError::EmptyToken` when two spaces follow each other.
/// - `LexerError::LiteralTooLarge` for integer literals outside the `i64`
///   range.
///
/// # Example
/// ```
/// use idk::interpreter::lexer::{Operator, Token, tokenize_line};
///
/// let tokens = tokenize_line("x := 1..=3 // range", 1).unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Word("x".into()),
///                 Token::Operator(Operator::Assign),
///                 Token::Int(1),
///                 Token::Operator(Operator::RangeInclusive),
///                 Token::Int(3)]);
/// assert!(tokenize_line("// only a comment", 2).unwrap().is_empty());
/// ```
pub fn tokenize_line(line: &str, number: usize) -> LexResult<Vec<Token>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
        return Ok(Vec::new());
    }

    let separated = separate_ranges(line);
    let mut tokens = Vec::new();

    for piece in separated.split(' ') {
        if piece.starts_with(COMMENT) {
            break;
        }
        tokens.push(classify(piece, number)?);
    }

    trace!(line = number, count = tokens.len(), "tokenized line");
    Ok(tokens)
}

/// Tokenizes a whole program, one line at a time.
///
/// Lines without tokens are dropped; every returned [`SourceLine`] keeps its
/// original line number, so diagnostics still point at the right line.
///
/// # Errors
/// The first [`LexerError`] of any line.
pub fn tokenize(source: &str) -> LexResult<Vec<SourceLine>> {
    let mut lines = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let number = index + 1;
        let tokens = tokenize_line(text, number)?;
        if !tokens.is_empty() {
            lines.push(SourceLine { number, tokens });
        }
    }
    Ok(lines)
}

/// Classifies one space-free piece of a line.
fn classify(piece: &str, line: usize) -> LexResult<Token> {
    if piece.is_empty() {
        return Err(LexerError::EmptyToken { line });
    }

    let mut lexer = Token::lexer(piece);
    if let Some(Ok(token)) = lexer.next()
       && lexer.span().end == piece.len()
       && lexer.next().is_none()
    {
        return Ok(token);
    }

    if looks_like_integer(piece) {
        return Err(LexerError::LiteralTooLarge { token: piece.to_owned(),
                                                 line });
    }

    Ok(Token::Word(piece.to_owned()))
}

fn looks_like_integer(piece: &str) -> bool {
    let digits = piece.strip_prefix(['+', '-']).unwrap_or(piece);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Puts spaces around `..` and `..=` where the source has none, so that
/// `1..5` splits like `1 .. 5` without creating empty pieces.
fn separate_ranges(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 4);
    let mut rest = line;

    while let Some(pos) = rest.find("..") {
        let len = if rest[pos..].starts_with("..=") { 3 } else { 2 };
        let (before, after) = (&rest[..pos], &rest[pos + len..]);

        out.push_str(before);
        if !before.is_empty() && !before.ends_with(' ') {
            out.push(' ');
        }
        out.push_str(&rest[pos..pos + len]);
        if !after.is_empty() && !after.starts_with(' ') {
            out.push(' ');
        }
        rest = after;
    }

    out.push_str(rest);
    out
}
