/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, its conversions used by
/// operators and keywords, and the formatting used by `print`.
pub mod core;
