/// Core evaluation logic and context management.
///
/// Contains the `Context` holding the evaluated history (the global scope),
/// statement evaluation and variable lookup.
pub mod core;

/// Operator evaluation logic.
///
/// Handles arithmetic, comparisons, logical operators, membership and ranges.
pub mod operator;

/// Keyword evaluation.
///
/// Executes `print`, `if` and `for`, including block-local scoping of
/// assignments and the `_it` loop variable.
pub mod keyword;
