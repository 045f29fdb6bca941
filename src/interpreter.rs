/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one source line at a time and produces the tokens of that
/// line: literals, words, operators and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Splits lines on spaces, after separating glued range operators.
/// - Classifies every piece with a `logos` token table.
/// - Skips blank lines and `//` comments.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// Lines are grouped into top-level statements following `if`/`for`/`end`
/// nesting, then each statement is parsed with keyword-specific grammar rules
/// and operator precedence.
///
/// # Responsibilities
/// - Groups lines into blocks and reports unbalanced ones.
/// - Builds `Expr` trees for statements and operator expressions.
/// - Rejects a second assignment to the same name.
pub mod parser;
/// The optional type-compatibility pass run between parsing and evaluation.
pub mod checker;
/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the statements in order, resolves variables against
/// the evaluated history and block-local bindings, computes operator results
/// and performs the side effects of `print`, `if` and `for`.
///
/// # Responsibilities
/// - Evaluates every statement and operator.
/// - Keeps the evaluated history that serves as the global scope.
/// - Reports runtime errors such as unknown variables or empty ranges.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
pub mod value;
/// Line-at-a-time execution for interactive front ends.
pub mod session;
