use std::io::Write;

use tracing::debug;

use crate::{
    ast::Expr,
    error::EvaluatorError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluatorError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluatorError>;

/// Name bound to the current element inside every `for` body.
pub const LOOP_VARIABLE: &str = "_it";

/// The record a statement leaves behind once evaluated.
///
/// Top-level records are appended to the history in order; assignment
/// records double as the global variable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluated {
    /// `name := value`, with the value fully reduced.
    Assignment {
        /// The bound variable.
        name:  String,
        /// Its value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// A bare operator statement and its result.
    Value {
        /// The computed value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `print` statement and what it printed.
    Print {
        /// The printed value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// An `if` statement.
    If {
        /// What the condition evaluated to.
        condition: bool,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `for` statement.
    For {
        /// How many times the body ran.
        iterations: usize,
        /// Line number in the source code.
        line:       usize,
    },
}

/// A block-local variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Variable name.
    pub name:  String,
    /// Bound value.
    pub value: Value,
}

/// Stores the runtime evaluation context.
///
/// The context owns the evaluated history: every top-level statement's
/// [`Evaluated`] record, in order. It is the global scope; variables resolve
/// against it most-recent-first. Block bodies extend it with a stack of
/// [`Binding`]s that is discarded when the block ends.
///
/// ## Usage
///
/// Create one context per run (or call [`Context::reset`]) and pass the parsed
/// program to [`Context::evaluate`].
#[derive(Debug, Default)]
pub struct Context {
    history: Vec<Evaluated>,
}

impl Context {
    /// Creates a new evaluation context with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every evaluated statement.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// The top-level records evaluated so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Evaluated] {
        &self.history
    }

    /// Evaluates a program statement by statement.
    ///
    /// Each top-level statement is evaluated against the history accumulated
    /// so far, then its record is appended. `print` writes one line per
    /// statement to `out`.
    ///
    /// # Parameters
    /// - `program`: Parsed (and optionally checked) statements.
    /// - `out`: Destination of printed output.
    ///
    /// # Returns
    /// The full history after the last statement.
    ///
    /// # Errors
    /// The first [`EvaluatorError`]; statements before it stay in the
    /// history.
    ///
    /// # Example
    /// ```
    /// use idk::interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse};
    ///
    /// let program = parse(&tokenize("x := 5\nprint x * 2").unwrap()).unwrap();
    /// let mut context = Context::new();
    /// let mut out = Vec::new();
    ///
    /// let history = context.evaluate(&program, &mut out).unwrap();
    ///
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(String::from_utf8(out).unwrap(), "10\n");
    /// ```
    pub fn evaluate(&mut self, program: &[Expr], out: &mut dyn Write) -> EvalResult<&[Evaluated]> {
        for expr in program {
            let record = self.eval_statement(expr, &mut Vec::new(), out)?;
            self.history.push(record);
        }
        Ok(&self.history)
    }

    /// Evaluates a single statement.
    ///
    /// Assignments reduce their right side; `print`, `if` and `for` run with
    /// their side effects; bare operator statements are computed.
    ///
    /// # Parameters
    /// - `expr`: Statement to evaluate.
    /// - `locals`: Bindings of the enclosing blocks, innermost last.
    /// - `out`: Destination of printed output.
    ///
    /// # Returns
    /// The statement's record. Callers decide where it is kept: the history for
    /// top-level statements, the local bindings for assignments in a block.
    pub fn eval_statement(&self,
                          expr: &Expr,
                          locals: &mut Vec<Binding>,
                          out: &mut dyn Write)
                          -> EvalResult<Evaluated> {
        match expr {
            Expr::Assignment { name, value, line } => {
                let value = self.eval(value, locals)?;
                debug!(line, %name, %value, "assigned");
                Ok(Evaluated::Assignment { name: name.clone(),
                                           value,
                                           line: *line })
            },
            Expr::Print { expr, line } => self.eval_print(expr, *line, locals, out),
            Expr::If { condition,
                       then_branch,
                       else_branch,
                       line, } => self.eval_if(condition,
                                               then_branch,
                                               else_branch.as_deref(),
                                               *line,
                                               locals,
                                               out),
            Expr::For { variable,
                        range,
                        body,
                        line, } => {
                self.eval_for(variable.as_deref(), range, body, *line, locals, out)
            },
            Expr::Literal { line, .. }
            | Expr::Word { line, .. }
            | Expr::UnaryOp { line, .. }
            | Expr::BinaryOp { line, .. } => Ok(Evaluated::Value { value: self.eval(expr, locals)?,
                                                                   line:  *line, }),
        }
    }

    /// Evaluates an operand expression to a value.
    ///
    /// Literals evaluate to themselves, words resolve through
    /// [`Context::lookup`] and operators evaluate both operands before
    /// computing their result.
    ///
    /// # Errors
    /// Unresolved variables, type mismatches and arithmetic failures. A
    /// statement in operand position is a type error.
    pub fn eval(&self, expr: &Expr, locals: &[Binding]) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok((*value).into()),
            Expr::Word { name, line } => self.lookup(name, locals, *line),
            Expr::UnaryOp { op, operand, line } => {
                let operand = self.eval(operand, locals)?;
                Self::eval_unary(*op, &operand, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left, locals)?;
                let right = self.eval(right, locals)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Assignment { line, .. }
            | Expr::Print { line, .. }
            | Expr::If { line, .. }
            | Expr::For { line, .. } => {
                Err(EvaluatorError::TypeError { details: "a statement cannot be used as a value".to_owned(),
                                                line:    *line, })
            },
        }
    }

    /// Resolves a variable.
    ///
    /// Block-local bindings are searched first, innermost and most recent
    /// first, then the history from the newest record backwards. The first
    /// assignment of `name` found wins.
    ///
    /// # Errors
    /// `UnknownVariable` if nothing binds `name`.
    pub fn lookup(&self, name: &str, locals: &[Binding], line: usize) -> EvalResult<Value> {
        locals.iter()
              .rev()
              .find(|binding| binding.name == name)
              .map(|binding| binding.value.clone())
              .or_else(|| {
                  self.history.iter().rev().find_map(|record| match record {
                                                        Evaluated::Assignment { name: bound,
                                                                                value,
                                                                                .. } if bound == name => {
                                                            Some(value.clone())
                                                        },
                                                        _ => None,
                                                    })
              })
              .ok_or_else(|| EvaluatorError::UnknownVariable { name: name.to_owned(),
                                                               line })
    }
}
