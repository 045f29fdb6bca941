use std::io::Write;

use tracing::debug;

use crate::{
    ast::Expr,
    config::Options,
    error::Error,
    interpreter::{
        checker::check_syntax,
        evaluator::core::Context,
        lexer::{SourceLine, tokenize_line},
        parser::{block::nesting_delta, core::Parser},
    },
};

/// Which prompt an interactive front end should show next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Ready for a new statement.
    Statement,
    /// Inside an unterminated `if` or `for` block.
    Continuation,
}

/// An interactive run, fed one line at a time.
///
/// Lines are collected until every block they open is closed again. The
/// completed statement is then run together with every statement accepted
/// before it: all lines are parsed again, the `print` statements of earlier
/// inputs are dropped so their output is not repeated, and the whole program is
/// evaluated from a fresh [`Context`]. A statement that fails at any stage is
/// forgotten, so the next input starts over from the last accepted state.
///
/// Only top-level `print` statements are dropped; a block from an earlier
/// input prints again when the program is re-run.
///
/// # Example
/// ```
/// use idk::{config::Options, interpreter::session::{Prompt, Session}};
///
/// let mut session = Session::new(Options::default());
/// let mut out = Vec::new();
///
/// session.submit("x := 2", &mut out).unwrap();
/// assert_eq!(session.submit("if x > 1", &mut out).unwrap(), Prompt::Continuation);
/// session.submit("print x", &mut out).unwrap();
/// assert_eq!(session.submit("end", &mut out).unwrap(), Prompt::Statement);
///
/// assert_eq!(String::from_utf8(out).unwrap(), "2\n");
/// ```
#[derive(Debug)]
pub struct Session {
    options:   Options,
    context:   Context,
    committed: Vec<SourceLine>,
    pending:   Vec<SourceLine>,
    depth:     isize,
    next_line: usize,
}

impl Session {
    /// Starts an empty session.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options,
               context: Context::new(),
               committed: Vec::new(),
               pending: Vec::new(),
               depth: 0,
               next_line: 1 }
    }

    /// The prompt for the next line.
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        if self.pending.is_empty() {
            Prompt::Statement
        } else {
            Prompt::Continuation
        }
    }

    /// The evaluation context after the last accepted statement.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Feeds one line of input.
    ///
    /// Every call consumes one line number, blank lines included, so errors
    /// point at the input that caused them.
    ///
    /// # Parameters
    /// - `text`: The raw line, without its newline.
    /// - `out`: Destination of printed output.
    ///
    /// # Returns
    /// The prompt to show next.
    ///
    /// # Errors
    /// Any stage's error for the completed statement. The statement is
    /// discarded and the session is back at [`Prompt::Statement`].
    pub fn submit(&mut self, text: &str, out: &mut dyn Write) -> Result<Prompt, Error> {
        let number = self.next_line;
        self.next_line += 1;

        let tokens = match tokenize_line(text, number) {
            Ok(tokens) => tokens,
            Err(e) => {
                self.discard();
                return Err(e.into());
            },
        };
        if tokens.is_empty() {
            return Ok(self.prompt());
        }

        self.depth += nesting_delta(&tokens);
        self.pending.push(SourceLine { number, tokens });
        if self.depth > 0 {
            return Ok(Prompt::Continuation);
        }

        match self.run_pending(out) {
            Ok(()) => {
                self.committed.append(&mut self.pending);
                self.depth = 0;
                Ok(Prompt::Statement)
            },
            Err(e) => {
                self.discard();
                Err(e)
            },
        }
    }

    fn run_pending(&mut self, out: &mut dyn Write) -> Result<(), Error> {
        let first_new = self.pending.first().map_or(self.next_line, |l| l.number);
        let lines: Vec<SourceLine> = self.committed.iter().chain(&self.pending).cloned().collect();

        let mut program = Parser::new().parse(&lines)?;
        program.retain(|expr| !matches!(expr, Expr::Print { line, .. } if *line < first_new));
        debug!(statements = program.len(), "re-running session");

        if self.options.check_syntax {
            check_syntax(&program)?;
        }

        self.context.reset();
        self.context.evaluate(&program, out)?;
        Ok(())
    }

    fn discard(&mut self) {
        self.pending.clear();
        self.depth = 0;
    }
}
