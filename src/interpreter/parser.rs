/// Parser entry points and shared state.
///
/// Holds the `Parser`, which remembers every assigned name so that repeated
/// assignments are rejected while the tree is built.
pub mod core;

/// Block grouping.
///
/// Splits tokenized lines into line-groups, tagging each line with its
/// `if`/`for`/`else`/`end` nesting level.
pub mod block;

/// Statement parsing.
///
/// Turns one line-group into an expression tree, dispatching on the leading
/// keyword (`print`, `if`, `for`) or on a word followed by an operator.
pub mod statement;

/// Operator expression parsing.
///
/// Splits a flat token span at its loosest operator and recurses on both
/// sides.
pub mod operator;
