/// Settings that change how a program is run.
///
/// The command-line binary builds these from its flags; library callers
/// usually start from [`Options::default`].
///
/// # Example
/// ```
/// use idk::config::Options;
///
/// assert!(Options::default().check_syntax);
/// assert!(!Options::unchecked().check_syntax);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Run the syntax checker between parsing and evaluation.
    pub check_syntax: bool,
}

impl Options {
    /// Options that skip the syntax checker, leaving type errors to the
    /// evaluator.
    #[must_use]
    pub const fn unchecked() -> Self {
        Self { check_syntax: false }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self { check_syntax: true }
    }
}
